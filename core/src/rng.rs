//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! The transition engine draws exactly twice per quarter from a
//! RandomSource owned by the controller, derived from the run's
//! master seed. Same seed, same decision script, same run.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The single randomness seam of the engine. One method, one range.
///
/// Production code uses [`SimRng`]; tests substitute a fixed or
/// scripted source to pin down the two draws per transition.
pub trait RandomSource {
    /// Roll a float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64;
}

/// A seeded PCG stream for a single run.
pub struct SimRng {
    inner: Pcg64Mcg,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SimRng {
    fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Always returns the same value. For deterministic tests and
/// the worked examples in the transition tests.
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed script of draws, in order. Panics when exhausted —
/// a transition drawing more than its documented two values is a bug.
pub struct ScriptedSource {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, next: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.draws[self.next];
        self.next += 1;
        value
    }
}
