use crate::Combination;
use std::borrow::Borrow;

/// Sorts combinations, owned or borrowed, by ascending score. The sort is
/// stable, so ties keep their enumeration order and unscored combinations end
/// up last.
pub fn rank<C: Borrow<Combination>>(combinations: &mut [C]) {
    combinations.sort_by(|left, right| {
        let left: &Combination = left.borrow();
        left.cmp_score(right.borrow())
    });
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry<'a> {
    /// 1-based position in the full ranking.
    pub rank: usize,
    pub combination: &'a Combination,
    pub best: bool,
    pub worst: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankingRow<'a> {
    Entry(RankedEntry<'a>),
    /// Stands in for the middle of the ranking that an excerpt leaves out.
    Gap,
}

/// Read-only ranked view over scored combinations.
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    entries: Vec<&'a Combination>,
}

impl<'a> Ranking<'a> {
    pub fn new(combinations: &'a [Combination]) -> Self {
        let mut entries: Vec<&Combination> = combinations.iter().collect();
        rank(&mut entries);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&'a Combination> {
        self.entries.get(position).copied()
    }

    /// All entries when `terse` is 0, otherwise the `terse` best and worst
    /// with a single `Gap` where the middle was skipped.
    pub fn excerpt(&self, terse: usize) -> Vec<RankingRow<'a>> {
        let len = self.entries.len();
        let mut rows = Vec::new();
        for (position, combination) in self.entries.iter().copied().enumerate() {
            let shown = terse == 0 || position < terse || position >= len.saturating_sub(terse);
            if shown {
                rows.push(RankingRow::Entry(RankedEntry {
                    rank: position + 1,
                    combination,
                    best: position == 0,
                    worst: position + 1 == len,
                }));
            } else if position == terse {
                rows.push(RankingRow::Gap);
            }
        }
        rows
    }
}
