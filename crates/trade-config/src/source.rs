//! Uniform random sources.
//!
//! Every draw the generator makes goes through [`UniformSource`]. Production
//! code wraps a seeded [`StdRng`]; tests substitute a [`ScriptedSource`] to
//! force exact sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// A supplier of uniform draws, nominally in `[0, 1)`.
pub trait UniformSource: Send {
    /// Take the next draw.
    fn next_f64(&mut self) -> f64;
}

/// Uniform source backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded source; the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> UniformSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Source that replays a scripted list of draws.
///
/// Values are returned in order; once the script runs out the last value
/// repeats forever. An empty script yields `0.0`. Clones share the same
/// script, so a test can keep a handle and [`rescript`](Self::rescript) the
/// source after handing a clone to the generator.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    state: Arc<Mutex<Script>>,
}

#[derive(Debug, Default)]
struct Script {
    pending: VecDeque<f64>,
    last: f64,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let source = Self::default();
        source.rescript(values);
        source
    }

    /// Source that returns `value` for every draw.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Replace the remaining script.
    pub fn rescript(&self, values: impl IntoIterator<Item = f64>) {
        let mut script = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        script.pending = values.into_iter().collect();
    }
}

impl UniformSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let mut script = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = script.pending.pop_front() {
            script.last = value;
        }
        script.last
    }
}
