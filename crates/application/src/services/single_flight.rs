use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Per-key in-flight de-duplication.
///
/// The first caller for a key (the leader) runs the work; callers arriving
/// while it is in flight wait for the leader's result instead of repeating
/// the upstream calls. If the leader is cancelled its key is released and
/// waiting callers run the work themselves.
pub struct SingleFlight<T> {
    in_flight: Arc<DashMap<String, broadcast::Sender<T>>>,
}

enum Role<T> {
    Leader(broadcast::Sender<T>),
    Follower(broadcast::Receiver<T>),
}

/// Removes the leader's key even when its future is dropped mid-flight.
struct FlightGuard<'a, T> {
    in_flight: &'a DashMap<String, broadcast::Sender<T>>,
    key: &'a str,
}

impl<T> Drop for FlightGuard<'_, T> {
    fn drop(&mut self) {
        self.in_flight.remove(self.key);
    }
}

impl<T: Clone> SingleFlight<T> {
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(DashMap::new()),
        }
    }

    pub async fn run<F, Fut>(&self, key: &str, work: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let role = match self.in_flight.entry(key.to_string()) {
            Entry::Occupied(entry) => Role::Follower(entry.get().subscribe()),
            Entry::Vacant(entry) => {
                let (tx, _) = broadcast::channel(1);
                entry.insert(tx.clone());
                Role::Leader(tx)
            }
        };

        match role {
            Role::Leader(tx) => {
                let guard = FlightGuard {
                    in_flight: &self.in_flight,
                    key,
                };
                let value = work().await;
                // release the key before publishing so late arrivals start a new flight
                drop(guard);
                let _ = tx.send(value.clone());
                value
            }
            Role::Follower(mut rx) => match rx.recv().await {
                Ok(value) => {
                    debug!(key = %key, "Joined in-flight resolution");
                    value
                }
                Err(_) => work().await,
            },
        }
    }

    /// Keys with a leader currently running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

impl<T: Clone> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}
