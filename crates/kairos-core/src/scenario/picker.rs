//! Injectable random index selection for scenario draws.

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

/// Chooses an index into a non-empty candidate list.
pub trait IndexPicker {
    /// Return a value in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform picker over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R = Mcg128Xsl64> {
    rng: R,
}

impl RandomPicker<Mcg128Xsl64> {
    /// Reproducible picker; the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Mcg128Xsl64::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(Mcg128Xsl64::from_entropy())
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomPicker<Mcg128Xsl64> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> IndexPicker for RandomPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices (each taken modulo `len`), cycling
/// when exhausted. An empty sequence always picks 0.
#[derive(Debug, Clone, Default)]
pub struct SequencePicker {
    sequence: Vec<usize>,
    cursor: usize,
}

impl SequencePicker {
    pub fn new(sequence: impl Into<Vec<usize>>) -> Self {
        Self {
            sequence: sequence.into(),
            cursor: 0,
        }
    }
}

impl IndexPicker for SequencePicker {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.sequence.is_empty() {
            return 0;
        }
        let raw = self.sequence[self.cursor % self.sequence.len()];
        self.cursor += 1;
        raw % len
    }
}

impl<P: IndexPicker + ?Sized> IndexPicker for &mut P {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl<P: IndexPicker + ?Sized> IndexPicker for Box<P> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
