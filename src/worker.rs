//! Worker model and transport session handle.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SessionError;

/// Transport session handle for a worker.
///
/// The overlay does not own the session lifecycle; it only triggers a reset
/// so the next dispatched task observes a fresh connection.
#[async_trait]
pub trait TransportSession: Send + Sync {
    /// Force the transport to re-establish its connection on next use.
    async fn reset(&self) -> Result<(), SessionError>;
}

/// A remote execution target that tasks are dispatched to.
#[derive(Clone)]
pub struct Worker {
    /// Unique worker name.
    pub name: String,
    /// Transport session for the worker.
    pub session: Arc<dyn TransportSession>,
}

impl Worker {
    /// Create a worker with the given transport session.
    pub fn new(name: impl Into<String>, session: Arc<dyn TransportSession>) -> Self {
        Self {
            name: name.into(),
            session,
        }
    }
}

impl fmt::Debug for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Worker")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopSession;

    #[async_trait]
    impl TransportSession for NoopSession {
        async fn reset(&self) -> Result<(), SessionError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn worker_carries_session() {
        let worker = Worker::new("win1", Arc::new(NoopSession));
        assert_eq!(worker.name, "win1");
        assert!(worker.session.reset().await.is_ok());
    }

    #[test]
    fn debug_omits_session() {
        let worker = Worker::new("win1", Arc::new(NoopSession));
        let debug = format!("{worker:?}");
        assert!(debug.contains("win1"));
    }
}
