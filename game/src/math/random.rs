use nanorand::{Rng, WyRand};

pub struct Random {
    generator: WyRand,
}

impl Random {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }

    /// Value in `0..max`, `max` must be positive.
    pub fn below(&mut self, max: usize) -> usize {
        self.generator.generate_range(0..max)
    }

    pub fn bits12(&mut self) -> u16 {
        self.generator.generate::<u16>() & 0x0fff
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
