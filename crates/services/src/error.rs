//! Shared error types for the services crate.

use thiserror::Error;

use progress_core::model::PlanError;
use storage::StorageError;

/// Errors emitted by `PlanService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlanServiceError {
    #[error("no learning plan has been created yet")]
    NoPlan,
    #[error("unknown goal template: {0}")]
    UnknownGoal(String),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error("no learning plan has been created yet")]
    NoPlan,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
