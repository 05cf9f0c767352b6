//! Post-scrape sanity checks.
//!
//! The site is trusted as-is: nothing here changes or drops a record. The
//! audit only reports min/max pairs that came out inverted so they can be
//! logged.

use std::fmt;

use crate::record::Monster;

/// A min/max pair whose minimum exceeds its maximum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeIssue {
    pub id: u64,
    /// Field prefix, e.g. `hp` or `res_fire`.
    pub field: &'static str,
    pub min: i64,
    pub max: i64,
}

impl fmt::Display for RangeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "monster {}: {}_min ({}) > {}_max ({})",
            self.id, self.field, self.min, self.field, self.max
        )
    }
}

/// Reports every inverted min/max pair across `monsters`, in input order.
pub fn audit_ranges(monsters: &[Monster]) -> Vec<RangeIssue> {
    monsters
        .iter()
        .flat_map(|m| {
            m.ranges()
                .into_iter()
                .filter(|(_, min, max)| min > max)
                .map(move |(field, min, max)| RangeIssue {
                    id: m.id,
                    field,
                    min,
                    max,
                })
        })
        .collect()
}
