//! Gating orchestration around a wrapped base scheduler.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use crate::error::GateError;
use crate::queue::DispatchSink;
use crate::task::{RunContext, TaskDefinition};
use crate::worker::Worker;

use super::builder::PrerequisiteBuilder;
use super::classifier::WorkerClassifier;
use super::session::SessionResetter;
use super::tracker::CompletionTracker;

/// Per-cycle task contribution hook of the wrapped scheduler.
#[async_trait]
pub trait BaseScheduler: Send + Sync {
    /// Contribute this cycle's tasks for `workers` to `sink`.
    async fn contribute_tasks(
        &self,
        workers: &[Worker],
        task: &TaskDefinition,
        ctx: &RunContext,
        sink: &dyn DispatchSink,
    ) -> Result<(), GateError>;
}

/// Minimal base scheduler: appends the cycle's task for every worker.
#[derive(Debug, Default)]
pub struct LinearScheduler;

#[async_trait]
impl BaseScheduler for LinearScheduler {
    async fn contribute_tasks(
        &self,
        workers: &[Worker],
        task: &TaskDefinition,
        _ctx: &RunContext,
        sink: &dyn DispatchSink,
    ) -> Result<(), GateError> {
        for worker in workers {
            sink.push_back(&worker.name, task.clone()).await;
        }
        Ok(())
    }
}

/// Orchestrates prerequisite gating ahead of a wrapped base scheduler.
///
/// Composition, not inheritance: the gate holds the base scheduler and
/// delegates to it explicitly after its own contribution, with the original
/// arguments unchanged. One instance per run; dropping the scheduler drops
/// the run's completion state with it.
pub struct GatingScheduler {
    classifier: WorkerClassifier,
    builder: PrerequisiteBuilder,
    tracker: CompletionTracker,
    resetter: SessionResetter,
    base: Arc<dyn BaseScheduler>,
}

impl GatingScheduler {
    /// Create a gating scheduler wrapping `base`.
    pub fn new(
        classifier: WorkerClassifier,
        builder: PrerequisiteBuilder,
        base: Arc<dyn BaseScheduler>,
    ) -> Self {
        Self {
            classifier,
            builder,
            tracker: CompletionTracker::new(),
            resetter: SessionResetter::new(),
            base,
        }
    }

    /// The run's completion tracker.
    pub fn tracker(&self) -> &CompletionTracker {
        &self.tracker
    }

    /// Contribute prerequisite tasks for this cycle, then delegate to the
    /// wrapped scheduler.
    ///
    /// For each worker that matches the gate predicate and has not been
    /// gated yet in this run: the bootstrap block is queued ahead of the
    /// worker's other work, the worker is recorded as gated, and its
    /// transport session is reset best-effort.
    ///
    /// A prerequisite load failure aborts the whole cycle — remaining
    /// workers are not processed and the base scheduler is not invoked. A
    /// worker that needs bootstrapping cannot safely proceed without it.
    pub async fn contribute_tasks(
        &self,
        workers: &[Worker],
        task: &TaskDefinition,
        ctx: &RunContext,
        sink: &dyn DispatchSink,
    ) -> Result<(), GateError> {
        // Classification is read-only, so all workers can be evaluated
        // concurrently. Injection below stays in input order.
        let eligibility = join_all(
            workers
                .iter()
                .map(|w| self.classifier.requires_prerequisite(w, ctx)),
        )
        .await;

        for (worker, eligible) in workers.iter().zip(eligibility) {
            if !eligible {
                continue;
            }

            // Atomic check-and-mark: overlapping cycles can never both win
            // the claim for the same worker.
            if !self.tracker.claim(&worker.name).await {
                tracing::debug!(
                    worker = %worker.name,
                    "Bootstrap already dispatched, skipping"
                );
                continue;
            }

            let block =
                self.builder
                    .build(ctx)
                    .await
                    .map_err(|source| GateError::PrerequisiteLoad {
                        worker: worker.name.clone(),
                        source,
                    })?;

            tracing::info!(
                worker = %worker.name,
                tasks = block.len(),
                path = %block.source().display(),
                "Injecting bootstrap block"
            );
            sink.push_front(&worker.name, block.tasks().to_vec()).await;

            // Reset happens at injection time, not after the block executes:
            // the session is torn down now so the bootstrap tasks themselves
            // run on a fresh connection.
            self.resetter.reset(worker).await;
        }

        self.base.contribute_tasks(workers, task, ctx, sink).await
    }
}
