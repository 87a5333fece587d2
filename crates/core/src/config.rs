use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// How a combination's member cards are folded into one trial result.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    /// The combination wins as soon as its fastest card completes.
    #[default]
    FirstCard,
    /// Every member card has to complete.
    AllCards,
}

impl Completion {
    pub fn combine<I>(self, draws: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let draws = draws.into_iter();
        let folded = match self {
            Self::FirstCard => draws.min(),
            Self::AllCards => draws.max(),
        };
        folded.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationConfig {
    pub num_of_cards: usize,
    pub cycles: u32,
    pub seed: u64,
    #[serde(default)]
    pub completion: Completion,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_of_cards: 1,
            cycles: 100_000,
            seed: 0xC0FFEE,
            completion: Completion::FirstCard,
        }
    }
}

impl SimulationConfig {
    /// Checks the run parameters against a pool of `pool_size` cards.
    pub fn validate(&self, pool_size: usize) -> Result<(), ConfigError> {
        if pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if !(1..=pool_size).contains(&self.num_of_cards) {
            return Err(ConfigError::InvalidCardCount {
                requested: self.num_of_cards,
                pool_size,
            });
        }
        if self.cycles == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        Ok(())
    }
}
