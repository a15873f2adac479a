//! Thread-safe handle around a generator.

use crate::generator::TradeConfig;
use std::sync::{Arc, Mutex, PoisonError};

/// A [`TradeConfig`] shared between threads.
///
/// Each call to [`with`](Self::with) holds the lock for the whole closure,
/// so multi-draw operations and the new-user counter stay indivisible.
#[derive(Debug, Clone)]
pub struct SharedTradeConfig {
    inner: Arc<Mutex<TradeConfig>>,
}

impl SharedTradeConfig {
    pub fn new(generator: TradeConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    /// Run `f` with exclusive access to the generator.
    ///
    /// A lock poisoned by a panicking caller is recovered; the generator holds
    /// no invariant a half-finished draw could break.
    pub fn with<T>(&self, f: impl FnOnce(&mut TradeConfig) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl From<TradeConfig> for SharedTradeConfig {
    fn from(generator: TradeConfig) -> Self {
        Self::new(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::FixtureConfig;
    use crate::source::RngSource;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_new_user_ids_unique_across_threads() {
        let config = FixtureConfig {
            host: Some("h".to_string()),
            ..FixtureConfig::default()
        };
        let shared = SharedTradeConfig::new(TradeConfig::with_capabilities(
            config,
            RngSource::seeded(3),
            FixedClock::from_millis(5),
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..50)
                        .map(|_| shared.with(|g| g.rnd_new_user_id()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(id.starts_with("ru:h5"));
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 200);
    }
}
