//! The scraped monster record.

use serde::Serialize;

/// One monster as scraped from a bestiary block.
///
/// Only `id` and `name` are guaranteed. Every other field is omitted from the
/// serialized object when the block did not carry it. Min/max pairs are taken
/// from the rank-1 and rank-5 columns of the same element and are not checked
/// against each other (see [`crate::validation`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Monster {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archmonster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecosystem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_max: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pa_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pa_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiative_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiative_max: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_neutral_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_neutral_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_earth_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_earth_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_fire_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_fire_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_water_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_water_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_air_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_air_max: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_earth_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_earth_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_fire_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_fire_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_water_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_water_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_air_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_air_max: Option<i64>,
}

impl Monster {
    /// A record carrying only the identity pair.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Every populated min/max pair, keyed by its field prefix
    /// (`level`, `hp`, `res_fire`, ...).
    pub fn ranges(&self) -> Vec<(&'static str, i64, i64)> {
        let pairs = [
            ("level", self.level_min, self.level_max),
            ("hp", self.hp_min, self.hp_max),
            ("pa", self.pa_min, self.pa_max),
            ("pm", self.pm_min, self.pm_max),
            ("xp", self.xp_min, self.xp_max),
            ("initiative", self.initiative_min, self.initiative_max),
            ("res_neutral", self.res_neutral_min, self.res_neutral_max),
            ("res_earth", self.res_earth_min, self.res_earth_max),
            ("res_fire", self.res_fire_min, self.res_fire_max),
            ("res_water", self.res_water_min, self.res_water_max),
            ("res_air", self.res_air_min, self.res_air_max),
            ("bonus_earth", self.bonus_earth_min, self.bonus_earth_max),
            ("bonus_fire", self.bonus_fire_min, self.bonus_fire_max),
            ("bonus_water", self.bonus_water_min, self.bonus_water_max),
            ("bonus_air", self.bonus_air_min, self.bonus_air_max),
        ];
        pairs
            .into_iter()
            .filter_map(|(name, min, max)| Some((name, min?, max?)))
            .collect()
    }
}
