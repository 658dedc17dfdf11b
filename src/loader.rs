//! Task definition loading.

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;

use crate::error::LoadError;
use crate::task::{RunContext, TaskDefinition};

/// Loads ordered task sequences from storage.
#[async_trait]
pub trait TaskLoader: Send + Sync {
    /// Load the task sequence at `path`.
    async fn load(&self, path: &Path, ctx: &RunContext)
    -> Result<Vec<TaskDefinition>, LoadError>;
}

/// Loads task sequences from YAML files.
///
/// The expected format is a YAML list of task entries:
///
/// ```yaml
/// - name: enable remote management
///   action: service
///   args: { name: winrm, state: started }
/// - name: install runtime
///   action: package
/// ```
#[derive(Debug, Default)]
pub struct YamlTaskLoader;

impl YamlTaskLoader {
    /// Create a new YAML loader.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TaskLoader for YamlTaskLoader {
    async fn load(
        &self,
        path: &Path,
        _ctx: &RunContext,
    ) -> Result<Vec<TaskDefinition>, LoadError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let tasks: Vec<TaskDefinition> =
            serde_yaml::from_str(&raw).map_err(|e| LoadError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if tasks.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(
            path = %path.display(),
            count = tasks.len(),
            "Loaded task definitions"
        );
        Ok(tasks)
    }
}
