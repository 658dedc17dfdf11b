//! Once-per-worker completion bookkeeping.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

/// Records which workers have had the prerequisite block dispatched.
///
/// One tracker is owned by one `GatingScheduler` and lives for a single run;
/// entries are never cleared while the run is alive. Each entry records when
/// the worker was gated.
#[derive(Debug, Default)]
pub struct CompletionTracker {
    dispatched: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl CompletionTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the prerequisite was already dispatched for `worker`.
    pub async fn has_completed(&self, worker: &str) -> bool {
        self.dispatched.lock().await.contains_key(worker)
    }

    /// Record the prerequisite as dispatched for `worker`.
    pub async fn mark_completed(&self, worker: &str) {
        self.dispatched
            .lock()
            .await
            .entry(worker.to_string())
            .or_insert_with(Utc::now);
    }

    /// Atomically check and mark in one step.
    ///
    /// Returns `true` exactly once per worker name: the caller that gets
    /// `true` owns the injection. Overlapping scheduling cycles calling this
    /// for the same worker can never both proceed.
    pub async fn claim(&self, worker: &str) -> bool {
        let mut dispatched = self.dispatched.lock().await;
        if dispatched.contains_key(worker) {
            return false;
        }
        dispatched.insert(worker.to_string(), Utc::now());
        true
    }

    /// Snapshot of gated workers and when each was gated.
    pub async fn completions(&self) -> HashMap<String, DateTime<Utc>> {
        self.dispatched.lock().await.clone()
    }

    /// Number of workers gated so far.
    pub async fn count(&self) -> usize {
        self.dispatched.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::join_all;
    use std::sync::Arc;

    #[tokio::test]
    async fn claim_succeeds_once_per_worker() {
        let tracker = CompletionTracker::new();
        assert!(tracker.claim("win1").await);
        assert!(!tracker.claim("win1").await);
        assert!(tracker.has_completed("win1").await);
    }

    #[tokio::test]
    async fn workers_are_tracked_independently() {
        let tracker = CompletionTracker::new();
        assert!(tracker.claim("win1").await);
        assert!(tracker.claim("win2").await);
        assert_eq!(tracker.count().await, 2);
        assert!(!tracker.has_completed("win3").await);
    }

    #[tokio::test]
    async fn mark_completed_is_idempotent() {
        let tracker = CompletionTracker::new();
        tracker.mark_completed("win1").await;
        let first = tracker.completions().await["win1"];
        tracker.mark_completed("win1").await;
        assert_eq!(tracker.completions().await["win1"], first);
        assert_eq!(tracker.count().await, 1);
    }

    #[tokio::test]
    async fn concurrent_claims_yield_exactly_one_winner() {
        let tracker = Arc::new(CompletionTracker::new());

        let claims = (0..32).map(|_| {
            let tracker = Arc::clone(&tracker);
            tokio::spawn(async move { tracker.claim("win1").await })
        });

        let winners = join_all(claims)
            .await
            .into_iter()
            .filter(|r| *r.as_ref().unwrap())
            .count();
        assert_eq!(winners, 1);
        assert_eq!(tracker.count().await, 1);
    }
}
