//! Task definitions, prerequisite blocks, and run context.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task definition as dispatched to a worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Unique task ID, assigned when the definition is created or loaded.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Human-readable task name.
    pub name: String,
    /// Action the worker should perform.
    pub action: String,
    /// Action arguments.
    #[serde(default)]
    pub args: serde_json::Value,
}

impl TaskDefinition {
    /// Create a new task definition with no arguments.
    pub fn new(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            action: action.into(),
            args: serde_json::Value::Null,
        }
    }

    /// Attach arguments to the task.
    pub fn with_args(mut self, args: serde_json::Value) -> Self {
        self.args = args;
        self
    }
}

/// The fixed prerequisite task block injected ahead of regular work.
///
/// Immutable once constructed. One block serves any worker; it carries no
/// worker-specific state.
#[derive(Debug, Clone)]
pub struct PrerequisiteBlock {
    tasks: Vec<TaskDefinition>,
    source: PathBuf,
    loaded_at: DateTime<Utc>,
}

impl PrerequisiteBlock {
    /// Create a block from an ordered task sequence and the path it was
    /// loaded from.
    pub fn new(tasks: Vec<TaskDefinition>, source: impl Into<PathBuf>) -> Self {
        Self {
            tasks,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    /// The block's tasks, in delivery order.
    pub fn tasks(&self) -> &[TaskDefinition] {
        &self.tasks
    }

    /// Path the block was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// When the block was constructed.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Number of tasks in the block.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the block holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Context for one scheduling run.
///
/// Opaque to the gating core beyond `base_dir`; the rest passes through to
/// collaborators unchanged.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Unique run ID.
    pub run_id: Uuid,
    /// Base directory the prerequisite definition is resolved under.
    pub base_dir: PathBuf,
    /// Opaque run metadata.
    pub metadata: serde_json::Value,
}

impl RunContext {
    /// Create a run context rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            base_dir: base_dir.into(),
            metadata: serde_json::Value::Null,
        }
    }

    /// Attach opaque metadata to the run.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_definitions_get_unique_ids() {
        let a = TaskDefinition::new("install", "package");
        let b = TaskDefinition::new("install", "package");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn task_deserializes_without_id_or_args() {
        let task: TaskDefinition =
            serde_json::from_str(r#"{"name": "enable winrm", "action": "service"}"#).unwrap();
        assert_eq!(task.name, "enable winrm");
        assert_eq!(task.args, serde_json::Value::Null);
    }

    #[test]
    fn block_preserves_task_order() {
        let tasks = vec![
            TaskDefinition::new("first", "noop"),
            TaskDefinition::new("second", "noop"),
        ];
        let block = PrerequisiteBlock::new(tasks, "tasks/bootstrap.yml");
        assert_eq!(block.len(), 2);
        assert_eq!(block.tasks()[0].name, "first");
        assert_eq!(block.tasks()[1].name, "second");
    }

    #[test]
    fn run_contexts_get_unique_ids() {
        let a = RunContext::new("/tmp/run-a");
        let b = RunContext::new("/tmp/run-a");
        assert_ne!(a.run_id, b.run_id);
    }
}
