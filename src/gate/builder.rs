//! Prerequisite block construction.

use std::sync::Arc;

use crate::config::GateConfig;
use crate::error::LoadError;
use crate::loader::TaskLoader;
use crate::task::{PrerequisiteBlock, RunContext};

/// Materializes the fixed prerequisite task block for a run.
///
/// The block's location is a well-known path under the run's base directory
/// (`GateConfig::bootstrap_path`), not configurable per call. No caching:
/// each build loads fresh, so the block is semantically equivalent across
/// calls within one run context.
pub struct PrerequisiteBuilder {
    config: GateConfig,
    loader: Arc<dyn TaskLoader>,
}

impl PrerequisiteBuilder {
    /// Create a builder over the given task loader.
    pub fn new(config: GateConfig, loader: Arc<dyn TaskLoader>) -> Self {
        Self { config, loader }
    }

    /// Build the prerequisite block for `ctx`.
    pub async fn build(&self, ctx: &RunContext) -> Result<PrerequisiteBlock, LoadError> {
        let path = ctx.base_dir.join(&self.config.bootstrap_path);
        let tasks = self.loader.load(&path, ctx).await?;
        Ok(PrerequisiteBlock::new(tasks, path))
    }
}
