use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use progress_core::model::{EarnedAchievement, LearningPlan};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the persisted learning plan.
///
/// There is at most one plan per install; saving replaces it wholesale.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Fetch the stored plan, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the plan cannot be read or decoded.
    async fn load_plan(&self) -> Result<Option<LearningPlan>, StorageError>;

    /// Persist the plan, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the plan cannot be stored.
    async fn save_plan(&self, plan: &LearningPlan) -> Result<(), StorageError>;
}

/// Repository contract for the earned-achievement record.
#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Fetch every achievement earned so far.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be read or decoded.
    async fn load_earned(&self) -> Result<Vec<EarnedAchievement>, StorageError>;

    /// Append newly earned achievements.
    ///
    /// Entries whose id is already on record are skipped, so an achievement
    /// is recorded at most once no matter how often the evaluator re-emits
    /// it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be updated.
    async fn record_earned(&self, earned: &[EarnedAchievement]) -> Result<(), StorageError>;
}

/// Merge newly earned achievements into an existing record, keeping the
/// record unique by id. Shared by every backend.
#[must_use]
pub fn merge_earned(
    mut existing: Vec<EarnedAchievement>,
    new: &[EarnedAchievement],
) -> Vec<EarnedAchievement> {
    let mut seen: HashSet<_> = existing.iter().map(|e| e.id.clone()).collect();
    for earned in new {
        if seen.insert(earned.id.clone()) {
            existing.push(earned.clone());
        }
    }
    existing
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    plan: Arc<Mutex<Option<LearningPlan>>>,
    earned: Arc<Mutex<Vec<EarnedAchievement>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanRepository for InMemoryRepository {
    async fn load_plan(&self) -> Result<Option<LearningPlan>, StorageError> {
        let guard = self
            .plan
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_plan(&self, plan: &LearningPlan) -> Result<(), StorageError> {
        let mut guard = self
            .plan
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(plan.clone());
        Ok(())
    }
}

#[async_trait]
impl AchievementRepository for InMemoryRepository {
    async fn load_earned(&self) -> Result<Vec<EarnedAchievement>, StorageError> {
        let guard = self
            .earned
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn record_earned(&self, earned: &[EarnedAchievement]) -> Result<(), StorageError> {
        let mut guard = self
            .earned
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let merged = merge_earned(std::mem::take(&mut *guard), earned);
        *guard = merged;
        Ok(())
    }
}

/// Aggregates the two repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub plans: Arc<dyn PlanRepository>,
    pub achievements: Arc<dyn AchievementRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let plans: Arc<dyn PlanRepository> = Arc::new(repo.clone());
        let achievements: Arc<dyn AchievementRepository> = Arc::new(repo);
        Self {
            plans,
            achievements,
        }
    }
}
