#![forbid(unsafe_code)]

pub mod error;
pub mod plan_service;
pub mod progress_service;

pub use progress_core::Clock;

pub use error::{PlanServiceError, ProgressServiceError};
pub use plan_service::PlanService;
pub use progress_service::{ActivityOutcome, ProgressService};
