//! Pattern-based extraction of monster records from bestiary HTML fragments.
//!
//! A page fragment is a run of monster blocks, each opened by
//! [`BLOCK_DELIMITER`]. Every field is pulled out of its block by its own rule
//! in a fixed table, so a markup change on the site means editing one rule.

use regex::Regex;

use crate::{entities::EntityDecoder, error::ExtractError, record::Monster};

/// Literal markup opening each monster block.
pub const BLOCK_DELIMITER: &str = r#"<div class="container-fluid mt-4" data-mob="">"#;

const IDENTITY_PATTERN: &str = r#"<a class="text-sololightbeige" href="https://solomonk\.fr/fr/monstre/(\d+)/[^"]*">([^<]+)</a>"#;

/// Stat icons, in the order the record declares them.
const STAT_ICONS: [(&str, &str); 5] = [
    ("hp", "vita"),
    ("pa", "pa"),
    ("pm", "pm"),
    ("xp", "xp"),
    ("initiative", "init"),
];

type TextSetter = fn(&mut Monster, String);
type RangeSetter = fn(&mut Monster, i64, i64);

/// Pulls one text field out of a block. The value is the first capture group.
struct TextRule {
    #[cfg_attr(not(test), allow(dead_code))]
    field: &'static str,
    pattern: Regex,
    decode: bool,
    set: TextSetter,
}

/// Pulls one min/max pair out of a block from two capture groups.
struct RangeRule {
    #[cfg_attr(not(test), allow(dead_code))]
    field: &'static str,
    pattern: Regex,
    set: RangeSetter,
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, ExtractError> {
    Regex::new(pattern).map_err(|source| ExtractError::Pattern { field, source })
}

impl TextRule {
    fn new(
        field: &'static str,
        pattern: &str,
        decode: bool,
        set: TextSetter,
    ) -> Result<Self, ExtractError> {
        Ok(Self {
            field,
            pattern: compile(field, pattern)?,
            decode,
            set,
        })
    }

    fn apply(&self, block: &str, monster: &mut Monster, entities: &EntityDecoder) {
        let Some(cap) = self.pattern.captures(block) else {
            return;
        };
        let raw = &cap[1];
        let value = if self.decode {
            entities.decode(raw)
        } else {
            raw.to_string()
        };
        (self.set)(monster, value);
    }
}

impl RangeRule {
    fn new(field: &'static str, pattern: &str, set: RangeSetter) -> Result<Self, ExtractError> {
        Ok(Self {
            field,
            pattern: compile(field, pattern)?,
            set,
        })
    }

    /// Builds the rank-1/rank-5 rule for an `icon-<class>"` element.
    fn icon(field: &'static str, icon_class: &str, set: RangeSetter) -> Result<Self, ExtractError> {
        let pattern = format!(
            r#"icon-{}"[^>]*data-rank-1=(-?\d+)[^>]*data-rank-5=(-?\d+)"#,
            icon_class
        );
        Self::new(field, &pattern, set)
    }

    /// Resistances carry their values on a `<span>` nested right inside the icon.
    fn resistance(field: &'static str, element: &str, set: RangeSetter) -> Result<Self, ExtractError> {
        let pattern = format!(
            r#"icon-{}"><span[^>]*data-rank-1=(-?\d+)[^>]*data-rank-5=(-?\d+)"#,
            element
        );
        Self::new(field, &pattern, set)
    }

    fn apply(&self, block: &str, monster: &mut Monster) {
        let Some(cap) = self.pattern.captures(block) else {
            return;
        };
        // Out of range numbers leave the pair absent rather than half-filled.
        if let (Ok(min), Ok(max)) = (cap[1].parse::<i64>(), cap[2].parse::<i64>()) {
            (self.set)(monster, min, max);
        }
    }
}

/// Compiled rule table for turning bestiary blocks into [`Monster`] records.
///
/// Build it once and reuse it for every page.
pub struct MonsterExtractor {
    identity: Regex,
    entities: EntityDecoder,
    text_rules: Vec<TextRule>,
    range_rules: Vec<RangeRule>,
}

impl MonsterExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        let identity = compile("id", IDENTITY_PATTERN)?;

        let text_rules = vec![
            TextRule::new(
                "archmonster",
                r#"<a class="text-solobrown" href="https://solomonk\.fr/fr/monstre/\d+/[^"]*">([^<]+)</a>"#,
                true,
                |m, v| m.archmonster = Some(v),
            )?,
            TextRule::new(
                "image",
                r#"<img src="(https://solomonk\.fr/img/monsters/artworks/[^"]+)""#,
                false,
                |m, v| m.image = Some(v),
            )?,
            TextRule::new(
                "ecosystem",
                r#"Ecosyst[eè]me: <a[^>]*class="text-solobrown"[^>]*>([^<]+)</a>"#,
                true,
                |m, v| m.ecosystem = Some(v),
            )?,
            TextRule::new(
                "race",
                r#"Race: <a[^>]*class="text-solobrown"[^>]*>([^<]+)</a>"#,
                true,
                |m, v| m.race = Some(v),
            )?,
        ];

        let stat_setters: [RangeSetter; 5] = [
            |m, lo, hi| (m.hp_min, m.hp_max) = (Some(lo), Some(hi)),
            |m, lo, hi| (m.pa_min, m.pa_max) = (Some(lo), Some(hi)),
            |m, lo, hi| (m.pm_min, m.pm_max) = (Some(lo), Some(hi)),
            |m, lo, hi| (m.xp_min, m.xp_max) = (Some(lo), Some(hi)),
            |m, lo, hi| (m.initiative_min, m.initiative_max) = (Some(lo), Some(hi)),
        ];

        let mut range_rules = vec![RangeRule::new(
            "level",
            r#"Niv\.<span[^>]*data-rank-1=(\d+)[^>]*data-rank-5=(\d+)[^>]*>"#,
            |m, lo, hi| (m.level_min, m.level_max) = (Some(lo), Some(hi)),
        )?];

        for ((field, icon), set) in STAT_ICONS.into_iter().zip(stat_setters) {
            range_rules.push(RangeRule::icon(field, icon, set)?);
        }

        range_rules.extend([
            RangeRule::resistance("res_neutral", "neutral", |m, lo, hi| {
                (m.res_neutral_min, m.res_neutral_max) = (Some(lo), Some(hi))
            })?,
            RangeRule::resistance("res_earth", "earth", |m, lo, hi| {
                (m.res_earth_min, m.res_earth_max) = (Some(lo), Some(hi))
            })?,
            RangeRule::resistance("res_fire", "fire", |m, lo, hi| {
                (m.res_fire_min, m.res_fire_max) = (Some(lo), Some(hi))
            })?,
            RangeRule::resistance("res_water", "water", |m, lo, hi| {
                (m.res_water_min, m.res_water_max) = (Some(lo), Some(hi))
            })?,
            RangeRule::resistance("res_air", "air", |m, lo, hi| {
                (m.res_air_min, m.res_air_max) = (Some(lo), Some(hi))
            })?,
        ]);

        range_rules.extend([
            RangeRule::icon("bonus_earth", "earthbonus", |m, lo, hi| {
                (m.bonus_earth_min, m.bonus_earth_max) = (Some(lo), Some(hi))
            })?,
            RangeRule::icon("bonus_fire", "firebonus", |m, lo, hi| {
                (m.bonus_fire_min, m.bonus_fire_max) = (Some(lo), Some(hi))
            })?,
            RangeRule::icon("bonus_water", "waterbonus", |m, lo, hi| {
                (m.bonus_water_min, m.bonus_water_max) = (Some(lo), Some(hi))
            })?,
            RangeRule::icon("bonus_air", "airbonus", |m, lo, hi| {
                (m.bonus_air_min, m.bonus_air_max) = (Some(lo), Some(hi))
            })?,
        ]);

        Ok(Self {
            identity,
            entities: EntityDecoder::new()?,
            text_rules,
            range_rules,
        })
    }

    /// Extracts every monster from one page fragment, in block order.
    ///
    /// Markup before the first delimiter is ignored, and blocks without an
    /// identity link are dropped.
    pub fn extract(&self, html: &str) -> Vec<Monster> {
        html.split(BLOCK_DELIMITER)
            .skip(1)
            .filter_map(|block| self.parse_block(block))
            .collect()
    }

    /// Extracts a single monster block. Returns `None` when the block has no
    /// identity link or its id does not parse.
    pub fn parse_block(&self, block: &str) -> Option<Monster> {
        let cap = self.identity.captures(block)?;
        let id: u64 = cap[1].parse().ok()?;
        let mut monster = Monster::new(id, self.entities.decode(&cap[2]));

        for rule in &self.text_rules {
            rule.apply(block, &mut monster, &self.entities);
        }
        for rule in &self.range_rules {
            rule.apply(block, &mut monster);
        }
        Some(monster)
    }

    /// Names of every field rule, identity first, in application order.
    #[cfg(test)]
    fn field_names(&self) -> Vec<&'static str> {
        let mut names = vec!["id"];
        names.extend(self.text_rules.iter().map(|r| r.field));
        names.extend(self.range_rules.iter().map(|r| r.field));
        names
    }
}
