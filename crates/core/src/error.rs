use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}, expected #rrggbb")]
pub struct InvalidColor(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("card pool is empty")]
    EmptyPool,
    #[error("invalid number of cards {requested} (valid: 1..{pool_size})")]
    InvalidCardCount { requested: usize, pool_size: usize },
    #[error("number of simulation cycles must be positive")]
    ZeroCycles,
    #[error("choosing {num_of_cards} out of {pool_size} cards gives too many combinations")]
    TooManyCombinations {
        pool_size: usize,
        num_of_cards: usize,
    },
}

/// Broken contract between generator and simulator. Never a user condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("no combinations to simulate")]
    NoCombinations,
    #[error("combination {combination} refers to card {index}, pool has {pool_size}")]
    CardOutOfRange {
        combination: usize,
        index: usize,
        pool_size: usize,
    },
    #[error("simulator configured with zero cycles")]
    ZeroCycles,
    #[error("combination {combination} already has a score")]
    AlreadyScored { combination: usize },
}

#[derive(Debug, Error)]
pub enum BingoError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),
}
