//! Best-effort session reset.

use crate::worker::Worker;

/// Triggers a transport reset for a worker after bootstrap injection.
///
/// Reset outcomes are inspected and then dropped: a stale session is a
/// freshness problem, not a reason to abort the run. Failures are logged and
/// never retried.
#[derive(Debug, Default)]
pub struct SessionResetter;

impl SessionResetter {
    /// Create a resetter.
    pub fn new() -> Self {
        Self
    }

    /// Reset the worker's transport session, swallowing any failure.
    pub async fn reset(&self, worker: &Worker) {
        match worker.session.reset().await {
            Ok(()) => {
                tracing::debug!(worker = %worker.name, "Transport session reset");
            }
            Err(e) => {
                tracing::warn!(
                    worker = %worker.name,
                    error = %e,
                    "Transport session reset failed, continuing"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use crate::worker::TransportSession;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSession {
        resets: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl TransportSession for CountingSession {
        async fn reset(&self) -> Result<(), SessionError> {
            self.resets.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SessionError::ResetFailed("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn reset_invokes_session() {
        let session = Arc::new(CountingSession {
            resets: AtomicUsize::new(0),
            fail: false,
        });
        let worker = Worker::new("win1", Arc::clone(&session) as Arc<dyn TransportSession>);

        SessionResetter::new().reset(&worker).await;
        assert_eq!(session.resets.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_reset_is_swallowed() {
        let session = Arc::new(CountingSession {
            resets: AtomicUsize::new(0),
            fail: true,
        });
        let worker = Worker::new("win1", Arc::clone(&session) as Arc<dyn TransportSession>);

        // Must not panic or propagate.
        SessionResetter::new().reset(&worker).await;
        assert_eq!(session.resets.load(Ordering::SeqCst), 1);
    }
}
