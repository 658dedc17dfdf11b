//! Per-worker fact resolution.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::FactError;
use crate::worker::Worker;

/// Resolved facts for a worker: flat string key-value pairs.
pub type FactMap = HashMap<String, String>;

/// Resolves the current fact snapshot for a worker.
///
/// Discovery, inventory, and caching all belong to the implementation; the
/// overlay only reads the returned map.
#[async_trait]
pub trait FactResolver: Send + Sync {
    /// Resolve the fact snapshot for `worker`.
    async fn resolve(&self, worker: &Worker) -> Result<FactMap, FactError>;
}

/// In-memory fact resolver keyed by worker name.
#[derive(Default)]
pub struct StaticFacts {
    facts: RwLock<HashMap<String, FactMap>>,
}

impl StaticFacts {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fact map for a worker.
    pub async fn insert(&self, worker: impl Into<String>, facts: FactMap) {
        self.facts.write().await.insert(worker.into(), facts);
    }

    /// Set a single fact for a worker.
    pub async fn set(
        &self,
        worker: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.facts
            .write()
            .await
            .entry(worker.into())
            .or_default()
            .insert(key.into(), value.into());
    }
}

#[async_trait]
impl FactResolver for StaticFacts {
    async fn resolve(&self, worker: &Worker) -> Result<FactMap, FactError> {
        self.facts
            .read()
            .await
            .get(&worker.name)
            .cloned()
            .ok_or_else(|| FactError::Unresolvable {
                worker: worker.name.clone(),
            })
    }
}
