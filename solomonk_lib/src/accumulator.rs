//! Deduplicating collection of scraped monsters.

use std::collections::HashSet;

use crate::record::Monster;

/// Monsters seen so far in a run, keyed by id.
///
/// The first record seen for an id wins; later records with the same id are
/// dropped even when their fields differ. Insertion order is kept until
/// [`MonsterSet::into_sorted`] finalizes the run.
#[derive(Debug, Default)]
pub struct MonsterSet {
    seen: HashSet<u64>,
    monsters: Vec<Monster>,
}

impl MonsterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `monster` unless its id is already present. Returns whether it
    /// was new.
    pub fn insert(&mut self, monster: Monster) -> bool {
        if !self.seen.insert(monster.id) {
            return false;
        }
        self.monsters.push(monster);
        true
    }

    /// Inserts every monster from one page and returns how many were new.
    pub fn extend_page(&mut self, monsters: impl IntoIterator<Item = Monster>) -> usize {
        let mut added = 0;
        for monster in monsters {
            if self.insert(monster) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    #[cfg(test)]
    fn contains(&self, id: u64) -> bool {
        self.seen.contains(&id)
    }

    /// Monsters in the order they were first seen.
    #[cfg(test)]
    fn as_slice(&self) -> &[Monster] {
        &self.monsters
    }

    /// Consumes the set, returning its monsters sorted by ascending id.
    pub fn into_sorted(self) -> Vec<Monster> {
        let mut monsters = self.monsters;
        monsters.sort_unstable_by_key(|m| m.id);
        monsters
    }
}
