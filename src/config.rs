use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Seed policy handed to random kernels at build time.
// With no seed every kernel draws a fresh one from the thread RNG.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KernelConfig {
    pub seed: Option<u64>,
}

impl KernelConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    // Config for the `index`-th child of a composite kernel, so siblings
    // built from one seed do not replay the same stream.
    pub fn child(&self, index: usize) -> Self {
        Self {
            seed: self.seed.map(|seed| seed.wrapping_add(index as u64 + 1)),
        }
    }

    pub fn rng(&self) -> Mutex<StdRng> {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        Mutex::new(StdRng::seed_from_u64(seed))
    }
}
