//! The paging driver: walks the bestiary offset by offset until it runs dry.
//!
//! Each iteration fetches one page, extracts its monsters and merges the
//! unseen ones into a [`MonsterSet`]. The next offset is the one the server
//! reports, or the current one plus the batch size when it reports none.
//! Three empty pages in a row end the run. An empty page and a failed fetch
//! look the same to the driver.

use std::time::Duration;

use solomonk_api::types::Page;
use solomonk_api::{Client, MonsterQuery, DEFAULT_BATCH_SIZE};
use tokio::time::sleep;

use crate::{accumulator::MonsterSet, extract::MonsterExtractor, record::Monster};

/// Pause after every fetch attempt, successful or not.
pub const REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Consecutive empty pages that end the run.
pub const EMPTY_STREAK_LIMIT: u32 = 3;

/// Something that can produce bestiary pages.
///
/// `None` covers both "no more monsters" and "the fetch failed"; the driver
/// treats them the same way.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch(&self, query: &MonsterQuery) -> Option<Page>;
}

impl PageSource for Client {
    async fn fetch(&self, query: &MonsterQuery) -> Option<Page> {
        match self.fetch_page(query).await {
            Ok(envelope) => envelope.into_page(),
            Err(e) => {
                tracing::error!("error fetching offset {}: {}", query.offset, e);
                None
            }
        }
    }
}

/// Paging parameters. `Default` holds the values the scraper runs with.
#[derive(Clone, Debug)]
pub struct PagerConfig {
    pub batch_size: u64,
    pub delay: Duration,
    pub empty_streak_limit: u32,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            delay: REQUEST_DELAY,
            empty_streak_limit: EMPTY_STREAK_LIMIT,
        }
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct ScrapeSummary {
    /// Unique monsters, sorted by id.
    pub monsters: Vec<Monster>,
    /// Fetches that returned a page with markup.
    pub pages: usize,
    /// Fetch attempts, including empty and failed ones.
    pub requests: usize,
}

pub struct Pager<S> {
    source: S,
    extractor: MonsterExtractor,
    config: PagerConfig,
}

impl<S: PageSource> Pager<S> {
    pub fn new(source: S, extractor: MonsterExtractor) -> Self {
        Self {
            source,
            extractor,
            config: PagerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PagerConfig) -> Self {
        self.config = config;
        self
    }

    #[cfg(test)]
    fn source(&self) -> &S {
        &self.source
    }

    /// Pages through the whole listing and returns the sorted, deduplicated
    /// monsters. Never fails: every per-page problem only counts toward the
    /// empty streak.
    pub async fn run(&self) -> ScrapeSummary {
        let mut collected = MonsterSet::new();
        let mut offset: u64 = 0;
        let mut empty_streak: u32 = 0;
        let mut pages = 0;
        let mut requests = 0;

        loop {
            tracing::info!("fetching offset {}", offset);
            let query = MonsterQuery::default()
                .with_batch_size(self.config.batch_size)
                .with_offset(offset);
            let fetched = self.source.fetch(&query).await;
            requests += 1;

            let next = match fetched {
                None => {
                    empty_streak += 1;
                    tracing::info!("offset {}: empty/error", offset);
                    if empty_streak >= self.config.empty_streak_limit {
                        None
                    } else {
                        Some(offset.saturating_add(self.config.batch_size))
                    }
                }
                Some(page) => {
                    empty_streak = 0;
                    pages += 1;
                    let monsters = self.extractor.extract(&page.html);
                    let found = monsters.len();
                    let added = collected.extend_page(monsters);
                    tracing::info!("offset {}: got {} monsters ({} new)", offset, found, added);

                    let next = page
                        .next_offset
                        .unwrap_or_else(|| offset.saturating_add(self.config.batch_size));
                    if next <= offset {
                        tracing::warn!(
                            "server offset {} does not advance past {}; pagination may stall",
                            next,
                            offset
                        );
                    }
                    Some(next)
                }
            };

            sleep(self.config.delay).await;

            match next {
                Some(next) => offset = next,
                None => break,
            }
        }

        tracing::info!("total unique monsters: {}", collected.len());
        ScrapeSummary {
            monsters: collected.into_sorted(),
            pages,
            requests,
        }
    }
}
