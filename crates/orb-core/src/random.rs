use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform samples in `[0, 1)`.
///
/// The field draws every random number through this trait so a seeded or
/// scripted source can stand in for the browser's entropy.
pub trait UniformSource {
    fn next_unit(&mut self) -> f32;
}

impl UniformSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

impl UniformSource for StdRng {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Deterministic generator for reproducible runs.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from the platform entropy source.
pub fn from_entropy() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}

/// Replays a fixed list of samples in order, wrapping around at the end.
///
/// Samples are clamped into `[0, 1)`. An empty list yields `0.0`.
pub struct Replay {
    samples: Vec<f32>,
    cursor: usize,
}

impl Replay {
    pub fn new(samples: Vec<f32>) -> Self {
        let samples = samples
            .into_iter()
            .map(|s| if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0 - f32::EPSILON) })
            .collect();
        Self { samples, cursor: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for Replay {
    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let s = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        s
    }
}
