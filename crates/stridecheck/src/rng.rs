//! Seeded generator threaded through every trial.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic source of trial data. The same seed replays the same stream.
#[derive(Debug, Clone)]
pub struct TrialRng {
    seed: u64,
    rng: StdRng,
}

impl TrialRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewinds to the start of the stream.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Uniform in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    pub fn fill(&mut self, x: &mut [f64]) {
        for v in x.iter_mut() {
            *v = self.uniform();
        }
    }

    pub fn vec(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.uniform()).collect()
    }

    /// A dense buffer covering `n` elements at stride `|inc|`, every slot
    /// random.
    pub fn random_slice(&mut self, n: usize, inc: isize) -> Vec<f64> {
        if n == 0 {
            return Vec::new();
        }
        self.vec((n - 1) * inc.unsigned_abs() + 1)
    }

    /// Angle in `[0, 2*pi)`.
    pub fn angle(&mut self) -> f64 {
        self.uniform() * std::f64::consts::TAU
    }

    /// Cosines and sines of `count` random plane rotations.
    pub fn rotations(&mut self, count: usize) -> (Vec<f64>, Vec<f64>) {
        let mut c = Vec::with_capacity(count);
        let mut s = Vec::with_capacity(count);
        for _ in 0..count {
            let theta = self.angle();
            c.push(theta.cos());
            s.push(theta.sin());
        }
        (c, s)
    }
}
