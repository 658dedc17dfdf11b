//! Dispatch sink and in-memory per-worker task queues.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::task::TaskDefinition;

/// Receives tasks scheduled for specific workers.
///
/// `push_front` inserts ahead of everything already queued for the worker,
/// preserving the order within the pushed slice; `push_back` appends.
#[async_trait]
pub trait DispatchSink: Send + Sync {
    /// Queue `tasks` ahead of any task already queued for `worker`.
    async fn push_front(&self, worker: &str, tasks: Vec<TaskDefinition>);

    /// Append `task` after any task already queued for `worker`.
    async fn push_back(&self, worker: &str, task: TaskDefinition);
}

/// In-memory dispatch queue, one FIFO per worker.
#[derive(Default)]
pub struct DispatchQueue {
    queues: Mutex<HashMap<String, VecDeque<TaskDefinition>>>,
}

impl DispatchQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every task queued for `worker`, in delivery order.
    pub async fn drain(&self, worker: &str) -> Vec<TaskDefinition> {
        self.queues
            .lock()
            .await
            .remove(worker)
            .map(Vec::from)
            .unwrap_or_default()
    }

    /// Number of tasks queued for `worker`.
    pub async fn queued(&self, worker: &str) -> usize {
        self.queues
            .lock()
            .await
            .get(worker)
            .map(VecDeque::len)
            .unwrap_or(0)
    }

    /// Names of workers with at least one queued task.
    pub async fn workers(&self) -> Vec<String> {
        self.queues.lock().await.keys().cloned().collect()
    }
}

#[async_trait]
impl DispatchSink for DispatchQueue {
    async fn push_front(&self, worker: &str, tasks: Vec<TaskDefinition>) {
        let mut queues = self.queues.lock().await;
        let queue = queues.entry(worker.to_string()).or_default();
        for task in tasks.into_iter().rev() {
            queue.push_front(task);
        }
    }

    async fn push_back(&self, worker: &str, task: TaskDefinition) {
        self.queues
            .lock()
            .await
            .entry(worker.to_string())
            .or_default()
            .push_back(task);
    }
}
