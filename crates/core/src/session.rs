use crate::{
    binomial, generate, BingoError, CancelToken, CardPool, Combination, ConfigError, Deck,
    SimulationConfig, SimulationEvent, SimulationObserver, SimulationOutcome, Simulator, Shuffler,
};

#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Base ordering of the deck the run drew from.
    pub deck: Deck,
    /// Combinations in enumeration order.
    pub combinations: Vec<Combination>,
    pub outcome: SimulationOutcome,
}

impl Evaluation {
    pub fn scored(&self) -> usize {
        self.combinations.iter().filter(|c| c.is_scored()).count()
    }
}

/// Validates the run parameters, enumerates every combination and scores it.
///
/// Parameter errors, including a run too large to enumerate, are reported
/// before any combination is generated or any event reaches `observer`.
pub fn evaluate<S, O>(
    pool: &CardPool,
    config: &SimulationConfig,
    rng: S,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<Evaluation, BingoError>
where
    S: Shuffler,
    O: SimulationObserver + ?Sized,
{
    config.validate(pool.len())?;
    let expected = binomial(pool.len(), config.num_of_cards)
        .and_then(|count| usize::try_from(count).ok())
        .ok_or(ConfigError::TooManyCombinations {
            pool_size: pool.len(),
            num_of_cards: config.num_of_cards,
        })?;
    log::info!(
        "{expected} combinations x {} cycles = {} trials",
        config.cycles,
        expected as u128 * u128::from(config.cycles)
    );
    let mut combinations = generate(pool.len(), config.num_of_cards);
    observer.observe(&SimulationEvent::Generated {
        pool_size: pool.len(),
        num_of_cards: config.num_of_cards,
        combinations: combinations.len(),
    });

    let mut simulator = Simulator::new(pool, config, rng);
    let outcome = simulator.run(&mut combinations, observer, cancel)?;
    Ok(Evaluation {
        deck: Deck::from_pool(pool),
        combinations,
        outcome,
    })
}
