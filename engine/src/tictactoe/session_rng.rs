use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness for one game session. Keeping the seed makes a session
/// reproducible when it is reported in the log.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_seed_or_random(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick from `items`, `None` when empty.
    pub fn pick(&mut self, items: &[usize]) -> Option<usize> {
        if items.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..items.len());
        Some(items[idx])
    }
}
