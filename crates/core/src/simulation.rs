use crate::{
    Card, CardPool, Combination, Completion, Deck, SimulationConfig, SimulationError,
    SimulationEvent, SimulationObserver, Shuffler,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SimulationOutcome {
    Completed,
    Aborted,
}

/// Shared abort flag, checked by the simulator before every trial.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Monte Carlo estimator of how many draws a combination needs to win.
///
/// The simulator owns the run's only deck and reshuffles it in place before
/// each trial.
#[derive(Debug)]
pub struct Simulator<'a, S> {
    pool: &'a CardPool,
    deck: Deck,
    cycles: u32,
    completion: Completion,
    rng: S,
}

impl<'a, S: Shuffler> Simulator<'a, S> {
    pub fn new(pool: &'a CardPool, config: &SimulationConfig, rng: S) -> Self {
        Self {
            pool,
            deck: Deck::from_pool(pool),
            cycles: config.cycles,
            completion: config.completion,
            rng,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// One shuffle of the deck, folded over the given cards.
    pub fn trial(&mut self, members: &[&Card]) -> usize {
        self.deck.shuffle(&mut self.rng);
        let numbers = self.deck.numbers();
        self.completion
            .combine(members.iter().map(|card| card.draws_to_complete(numbers)))
    }

    /// Scores every combination in place.
    ///
    /// A combination only receives its score once all of its trials are done,
    /// and input that already carries scores is rejected.
    /// On cancellation the in-flight combination is left unscored and
    /// `Aborted` is returned.
    pub fn run<O>(
        &mut self,
        combinations: &mut [Combination],
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<SimulationOutcome, SimulationError>
    where
        O: SimulationObserver + ?Sized,
    {
        self.check(combinations)?;
        let total = combinations.len();
        observer.observe(&SimulationEvent::Started {
            deck: self.deck.numbers().to_vec(),
            cycles: self.cycles,
            combinations: total,
        });
        log::debug!(
            "simulating {total} combinations, {} cycles each, deck of {}",
            self.cycles,
            self.deck.len()
        );

        let pool = self.pool;
        let mut scored = 0;
        for (index, combination) in combinations.iter_mut().enumerate() {
            observer.observe(&SimulationEvent::CombinationStarted { index, total });
            let members: Vec<&Card> = combination.cards(pool).collect();
            let mut sum: u64 = 0;
            for _ in 0..self.cycles {
                if cancel.is_cancelled() {
                    log::info!("simulation cancelled after {scored} of {total} combinations");
                    observer.observe(&SimulationEvent::Finished {
                        outcome: SimulationOutcome::Aborted,
                        scored,
                    });
                    return Ok(SimulationOutcome::Aborted);
                }
                sum += self.trial(&members) as u64;
                observer.observe(&SimulationEvent::TrialFinished { index });
            }
            let score = sum as f64 / f64::from(self.cycles);
            combination.set_score(score);
            scored += 1;
            log::trace!("combination {:?} scored {score:.3}", combination.indices());
            observer.observe(&SimulationEvent::CombinationScored { index, score });
        }

        observer.observe(&SimulationEvent::Finished {
            outcome: SimulationOutcome::Completed,
            scored,
        });
        Ok(SimulationOutcome::Completed)
    }

    fn check(&self, combinations: &[Combination]) -> Result<(), SimulationError> {
        if self.cycles == 0 {
            return Err(SimulationError::ZeroCycles);
        }
        if combinations.is_empty() {
            return Err(SimulationError::NoCombinations);
        }
        let pool_size = self.pool.len();
        for (combination, item) in combinations.iter().enumerate() {
            if item.is_scored() {
                return Err(SimulationError::AlreadyScored { combination });
            }
            if let Some(index) = item.indices().iter().find(|index| **index >= pool_size) {
                return Err(SimulationError::CardOutOfRange {
                    combination,
                    index: *index,
                    pool_size,
                });
            }
        }
        Ok(())
    }
}
