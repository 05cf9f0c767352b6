//! Library layer for the Solomonk bestiary scraper: record type, extraction
//! rules, deduplicating accumulator and the paging driver.
//!
//! Wraps the `solomonk_api` client, turning raw HTML pages into a sorted,
//! deduplicated list of [`Monster`] records.

pub mod accumulator;
pub mod entities;
pub mod error;
pub mod extract;
pub mod pager;
pub mod record;
pub mod validation;

pub use solomonk_api;

pub use accumulator::MonsterSet;
pub use entities::EntityDecoder;
pub use error::ExtractError;
pub use extract::MonsterExtractor;
pub use pager::{PageSource, Pager, PagerConfig, ScrapeSummary};
pub use record::Monster;
pub use validation::{audit_ranges, RangeIssue};
