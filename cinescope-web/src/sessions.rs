//! Per-page search sessions
//!
//! Every page load gets its own search coordinator, keyed by an opaque id the
//! page carries in its HTMX requests. Sessions nobody has touched for the
//! idle timeout are dropped, which stops their coordinator.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use cinescope_core::config::SearchConfig;
use cinescope_search::{MovieProvider, SearchHandle, spawn_search_coordinator};
use parking_lot::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

struct Session {
    handle: SearchHandle,
    last_seen: Instant,
}

/// Registry of live search sessions.
pub struct SearchSessions {
    sessions: Mutex<HashMap<Uuid, Session>>,
    search_config: SearchConfig,
    provider: Arc<dyn MovieProvider>,
    idle_timeout: Duration,
}

impl SearchSessions {
    /// Creates an empty registry whose coordinators fetch through `provider`.
    pub fn new(
        search_config: SearchConfig,
        provider: Arc<dyn MovieProvider>,
        idle_timeout: Duration,
    ) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            search_config,
            provider,
            idle_timeout,
        }
    }

    /// Starts a session for a freshly loaded page.
    ///
    /// The new coordinator immediately fetches the popular listing. Idle
    /// sessions are evicted first.
    pub fn open(&self) -> (Uuid, SearchHandle) {
        self.evict_idle();

        let id = Uuid::new_v4();
        let handle =
            spawn_search_coordinator(self.search_config.clone(), Arc::clone(&self.provider));

        self.sessions.lock().insert(
            id,
            Session {
                handle: handle.clone(),
                last_seen: Instant::now(),
            },
        );
        tracing::debug!(session = %id, "Opened search session");

        (id, handle)
    }

    /// Looks up a session and marks it as used.
    pub fn get(&self, id: &Uuid) -> Option<SearchHandle> {
        let mut sessions = self.sessions.lock();
        let session = sessions.get_mut(id)?;
        session.last_seen = Instant::now();
        Some(session.handle.clone())
    }

    /// Drops sessions idle for longer than the timeout. Returns how many went.
    pub fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.lock();
        let before = sessions.len();

        sessions.retain(|id, session| {
            let keep = now.duration_since(session.last_seen) <= self.idle_timeout;
            if !keep {
                tracing::debug!(session = %id, "Evicting idle search session");
            }
            keep
        });

        before - sessions.len()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Whether no session is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use cinescope_core::MovieSummary;
    use cinescope_search::providers::ScriptedProvider;

    use super::*;

    fn sessions(provider: ScriptedProvider) -> SearchSessions {
        SearchSessions::new(
            SearchConfig::default(),
            Arc::new(provider),
            Duration::from_secs(60),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_sessions_do_not_share_search_text() {
        let sessions = sessions(
            ScriptedProvider::new()
                .with_response("", Ok(vec![MovieSummary::new(1, "Popular")]))
                .with_response("dune", Ok(vec![MovieSummary::new(2, "Dune")])),
        );
        let (_, alice) = sessions.open();
        alice.set_search_text("dune").await.unwrap();
        alice.wait_for_settled("dune").await.unwrap();

        let (_, bob) = sessions.open();
        let snapshot = bob.wait_for_settled("").await.unwrap();

        assert_eq!(snapshot.search_text, "");
        assert_eq!(snapshot.movies[0].title, "Popular");
        assert_eq!(alice.snapshot().search_text, "dune");
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_are_evicted_and_stopped() {
        let sessions = sessions(ScriptedProvider::new());
        let (stale_id, stale) = sessions.open();
        stale.wait_for_settled("").await.unwrap();

        tokio::time::sleep(Duration::from_secs(45)).await;
        let (active_id, _) = sessions.open();
        tokio::time::sleep(Duration::from_secs(30)).await;

        assert_eq!(sessions.evict_idle(), 1);
        assert!(sessions.get(&stale_id).is_none());
        assert!(sessions.get(&active_id).is_some());
        assert_eq!(sessions.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_use_keeps_session_alive() {
        let sessions = sessions(ScriptedProvider::new());
        let (id, _) = sessions.open();

        for _ in 0..3 {
            tokio::time::sleep(Duration::from_secs(50)).await;
            assert!(sessions.get(&id).is_some());
        }

        assert_eq!(sessions.evict_idle(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evicted_coordinator_stops() {
        let sessions = sessions(ScriptedProvider::new());
        let (id, handle) = sessions.open();
        handle.wait_for_settled("").await.unwrap();
        let mut receiver = handle.subscribe();
        receiver.borrow_and_update();
        drop(handle);

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(sessions.evict_idle(), 1);
        assert!(sessions.get(&id).is_none());

        // The coordinator exits once its last handle is gone.
        let stopped = tokio::time::timeout(Duration::from_secs(1), async {
            while receiver.changed().await.is_ok() {}
        })
        .await;
        assert!(stopped.is_ok());
    }
}
