//! Progress-tracking core for a mobile learning app.
//!
//! Two stateless computation components behind plain value types: the
//! achievement evaluator ([`achievements`]) and the learning-plan calculator
//! ([`planner`]). Neither owns storage or scheduling; callers feed in
//! snapshots of persisted state and persist whatever comes back.

#![forbid(unsafe_code)]

pub mod achievements;
pub mod catalog;
pub mod error;
pub mod model;
pub mod planner;
pub mod time;

pub use achievements::{AchievementEvaluator, ProgressSnapshot};
pub use error::Error;
pub use time::Clock;
