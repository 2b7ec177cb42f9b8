use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

use log::{debug, info};
use tokio::time::MissedTickBehavior;

use crate::state::view_state::ViewState;

const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// One user's view state. Never hold the guard across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle(Arc<Mutex<ViewState>>);

impl SessionHandle {
    pub fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // The store keeps one reference; any other belongs to a request in flight.
    fn in_use(&self) -> bool {
        Arc::strong_count(&self.0) > 1
    }
}

#[derive(Debug)]
struct SessionEntry {
    handle: SessionHandle,
    last_seen: Instant,
}

/// In-memory view state keyed by user id. Idle sessions are evicted.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_or_create(&self, user_id: &str) -> SessionHandle {
        let now = Instant::now();
        let mut sessions = self.sessions();
        let entry = sessions
            .entry(user_id.to_string())
            .or_insert_with(|| SessionEntry {
                handle: SessionHandle::default(),
                last_seen: now,
            });
        entry.last_seen = now;
        entry.handle.clone()
    }

    /// Drops sessions untouched for at least `max_idle`, unless a request still holds them.
    /// Returns how many were dropped.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions();
        let before = sessions.len();
        sessions.retain(|user_id, entry| {
            let keep = entry.handle.in_use() || entry.last_seen.elapsed() < max_idle;
            if !keep {
                debug!("Evicting idle session for {}", user_id);
            }
            keep
        });
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Periodically evicts idle sessions until the store is dropped.
pub async fn evict_idle_loop(store: Weak<SessionStore>, max_idle: Duration) {
    let mut ticker = tokio::time::interval(max_idle.min(MAX_SWEEP_INTERVAL));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let Some(store) = store.upgrade() else {
            break;
        };
        let evicted = store.evict_idle(max_idle);
        if evicted > 0 {
            info!("Evicted {} idle sessions, {} remain", evicted, store.len());
        }
    }
}
