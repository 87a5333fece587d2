use crate::{CardPool, Shuffler};
use std::collections::BTreeSet;

/// Every number that appears on any card of a pool, once each.
///
/// A fresh deck is sorted ascending; that order is the base ordering shared by
/// a whole run before any trial shuffles it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deck {
    numbers: Vec<u32>,
}

impl Deck {
    pub fn from_pool(pool: &CardPool) -> Self {
        let unique: BTreeSet<u32> = pool
            .iter()
            .flat_map(|card| card.numbers.iter().copied())
            .collect();
        Self {
            numbers: unique.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn shuffle<S: Shuffler + ?Sized>(&mut self, rng: &mut S) {
        rng.shuffle_deck(&mut self.numbers);
    }
}
