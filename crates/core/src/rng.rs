use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Source of deck permutations for the simulator.
pub trait Shuffler {
    fn shuffle_deck(&mut self, numbers: &mut [u32]);
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Shuffler for RngState {
    fn shuffle_deck(&mut self, numbers: &mut [u32]) {
        self.shuffle(numbers);
    }
}

/// Leaves the deck in its current order. Used to replay a fixed ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unshuffled;

impl Shuffler for Unshuffled {
    fn shuffle_deck(&mut self, _numbers: &mut [u32]) {}
}
