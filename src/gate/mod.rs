//! Gating core — classify, track, build, inject, reset.
//!
//! Components:
//! - `classifier` — decides whether a worker needs the bootstrap block
//! - `builder` — materializes the block for a run
//! - `tracker` — once-per-worker bookkeeping
//! - `session` — best-effort transport reset
//! - `scheduler` — orchestration around a wrapped base scheduler

pub mod builder;
pub mod classifier;
pub mod scheduler;
pub mod session;
pub mod tracker;

pub use builder::PrerequisiteBuilder;
pub use classifier::WorkerClassifier;
pub use scheduler::{BaseScheduler, GatingScheduler, LinearScheduler};
pub use session::SessionResetter;
pub use tracker::CompletionTracker;
