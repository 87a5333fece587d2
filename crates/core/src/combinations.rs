use crate::{Card, CardPool};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A selection of distinct card indices together with its simulated score.
///
/// Indices are kept strictly ascending, so two combinations over the same
/// cards always compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    indices: Vec<usize>,
    score: Option<f64>,
}

impl Combination {
    /// Builds a combination from any ordering of indices. Returns `None` for
    /// an empty selection or one that repeats an index.
    pub fn from_indices(mut indices: Vec<usize>) -> Option<Self> {
        if indices.is_empty() {
            return None;
        }
        indices.sort_unstable();
        if indices.windows(2).any(|pair| pair[0] == pair[1]) {
            return None;
        }
        Some(Self {
            indices,
            score: None,
        })
    }

    fn ascending(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        Self {
            indices,
            score: None,
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Mean draw count, or `None` while unsimulated.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }

    pub(crate) fn set_score(&mut self, score: f64) {
        debug_assert!(self.score.is_none(), "score assigned twice");
        self.score = Some(score);
    }

    /// Member cards in index order. Indices outside the pool are skipped.
    pub fn cards<'a>(&'a self, pool: &'a CardPool) -> impl Iterator<Item = &'a Card> + 'a {
        self.indices.iter().filter_map(move |index| pool.get(*index))
    }

    /// Ascending by score; unsimulated combinations order after scored ones.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        match (self.score, other.score) {
            (Some(left), Some(right)) => left.total_cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Every way to pick `k` distinct cards out of `pool_size`, in lexicographic
/// order. Out-of-range `k` yields nothing.
pub fn generate(pool_size: usize, k: usize) -> Vec<Combination> {
    choose(0, pool_size, k)
        .into_iter()
        .map(Combination::ascending)
        .collect()
}

fn choose(start: usize, end: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 || start >= end || end - start < k {
        return Vec::new();
    }
    if k == 1 {
        return (start..end).map(|index| vec![index]).collect();
    }
    let mut out = Vec::new();
    for first in start..end {
        for tail in choose(first + 1, end, k - 1) {
            let mut indices = Vec::with_capacity(k);
            indices.push(first);
            indices.extend(tail);
            out.push(indices);
        }
    }
    out
}

/// `C(n, k)`, zero when `k > n`. `None` when the count exceeds `u128`.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for step in 1..=k as u128 {
        // step divides result * factor; the product is C(n - k + step, step).
        let factor = (n - k) as u128 + step;
        let common = gcd(result, step);
        result = (result / common).checked_mul(factor / (step / common))?;
    }
    Some(result)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
