//! Worker classification against the gate predicate.

use std::sync::Arc;

use crate::config::GateConfig;
use crate::facts::FactResolver;
use crate::task::RunContext;
use crate::worker::Worker;

/// Decides whether a worker requires the prerequisite block.
pub struct WorkerClassifier {
    config: GateConfig,
    resolver: Arc<dyn FactResolver>,
}

impl WorkerClassifier {
    /// Create a classifier over the given fact resolver.
    pub fn new(config: GateConfig, resolver: Arc<dyn FactResolver>) -> Self {
        Self { config, resolver }
    }

    /// Check the worker's fact snapshot against the configured predicate.
    ///
    /// Fails closed: a resolver error, a missing key, or an empty value
    /// classifies the worker as not requiring the prerequisite. No state is
    /// touched here.
    pub async fn requires_prerequisite(&self, worker: &Worker, ctx: &RunContext) -> bool {
        let facts = match self.resolver.resolve(worker).await {
            Ok(facts) => facts,
            Err(e) => {
                tracing::debug!(
                    worker = %worker.name,
                    run = %ctx.run_id,
                    error = %e,
                    "Fact resolution failed, worker not gated"
                );
                return false;
            }
        };

        match facts.get(&self.config.fact_key) {
            Some(value) if !value.trim().is_empty() => {
                value.trim().eq_ignore_ascii_case(&self.config.fact_value)
            }
            _ => {
                tracing::debug!(
                    worker = %worker.name,
                    fact = %self.config.fact_key,
                    "Classification fact missing or empty, worker not gated"
                );
                false
            }
        }
    }
}
