use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use crate::config::{RATE_LIMIT_REQUESTS, RATE_LIMIT_WINDOW_SECS};

/// Sliding-window limiter keyed by client address. One lock covers the whole
/// prune-check-record cycle.
pub struct RequestGate {
    limit: usize,
    window: Duration,
    windows: RwLock<HashMap<String, VecDeque<Instant>>>,
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new(RATE_LIMIT_REQUESTS, Duration::from_secs(RATE_LIMIT_WINDOW_SECS))
    }
}

impl RequestGate {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: RwLock::new(HashMap::new()),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub async fn admit(&self, client_key: &str) -> bool {
        self.admit_at(client_key, Instant::now()).await
    }

    // rejected calls are not recorded
    pub async fn admit_at(&self, client_key: &str, now: Instant) -> bool {
        let mut windows = self.windows.write().await;
        let hits = windows.entry(client_key.to_string()).or_default();
        prune(hits, now, self.window);

        if hits.len() >= self.limit {
            debug!(client = client_key, hits = hits.len(), "rate limit reached");
            return false;
        }

        hits.push_back(now);
        true
    }

    pub async fn sweep(&self) -> usize {
        self.sweep_at(Instant::now()).await
    }

    pub async fn sweep_at(&self, now: Instant) -> usize {
        let mut windows = self.windows.write().await;
        let before = windows.len();
        windows.retain(|_, hits| {
            prune(hits, now, self.window);
            !hits.is_empty()
        });
        before - windows.len()
    }

    pub async fn tracked_clients(&self) -> usize {
        self.windows.read().await.len()
    }
}

fn prune(hits: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&oldest) = hits.front() {
        if now.saturating_duration_since(oldest) < window {
            break;
        }
        hits.pop_front();
    }
}
