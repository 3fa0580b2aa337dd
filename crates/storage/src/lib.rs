//! Persistence collaborator for the progress-tracking core.
//!
//! The core never touches storage; this crate owns the two persisted values
//! (the learning plan and the earned-achievement list) behind repository
//! traits, with an in-memory backend for tests and a `SQLite` backend for the
//! app.

#![forbid(unsafe_code)]

pub mod mapping;
pub mod repository;
pub mod sqlite;

pub use repository::{
    AchievementRepository, InMemoryRepository, PlanRepository, Storage, StorageError,
};
