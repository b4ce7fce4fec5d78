//! Trailing-edge debounce on the tokio runtime.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Defers a call until `delay` has passed without another call.
///
/// Every `call` bumps a generation counter and spawns a sleeper; when the
/// sleeper wakes it only runs its action if no newer call (or `cancel`)
/// happened in the meantime. `settled` holds the last generation that either
/// fired or was cancelled; anything newer is still pending.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
    settled: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            settled: Arc::new(AtomicU64::new(0)),
        }
    }

    /// True while the latest call is still waiting out its delay
    pub fn is_pending(&self) -> bool {
        self.generation.load(Ordering::SeqCst) != self.settled.load(Ordering::SeqCst)
    }

    pub fn call<F, Fut>(&self, action: F) -> JoinHandle<()>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let settled = Arc::clone(&self.settled);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == gen {
                settled.store(gen, Ordering::SeqCst);
                action().await;
            }
        })
    }

    /// Drop whatever call is still waiting out its delay
    pub fn cancel(&self) {
        let gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.settled.store(gen, Ordering::SeqCst);
    }
}
