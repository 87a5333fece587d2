use crate::SimulationOutcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SimulationEvent {
    Generated {
        pool_size: usize,
        num_of_cards: usize,
        combinations: usize,
    },
    Started {
        deck: Vec<u32>,
        cycles: u32,
        combinations: usize,
    },
    CombinationStarted { index: usize, total: usize },
    TrialFinished { index: usize },
    CombinationScored { index: usize, score: f64 },
    Finished { outcome: SimulationOutcome, scored: usize },
}

/// Receives progress from a run at trial and combination boundaries.
pub trait SimulationObserver {
    fn observe(&mut self, event: &SimulationEvent);
}

impl SimulationObserver for () {
    fn observe(&mut self, _event: &SimulationEvent) {}
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<SimulationEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: SimulationEvent) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = SimulationEvent> + '_ {
        self.queue.drain(..)
    }
}

impl SimulationObserver for EventBus {
    fn observe(&mut self, event: &SimulationEvent) {
        self.push(event.clone());
    }
}
