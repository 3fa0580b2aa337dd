use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use progress_core::model::{EarnedAchievement, LearningPlan};

use crate::mapping::PlanRecord;
use crate::repository::{AchievementRepository, PlanRepository, StorageError, merge_earned};

use super::{EARNED_KEY, PLAN_KEY, SqliteRepository};

impl SqliteRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM progress_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        row.try_get("value")
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO progress_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PlanRepository for SqliteRepository {
    async fn load_plan(&self) -> Result<Option<LearningPlan>, StorageError> {
        let Some(raw) = self.get_value(PLAN_KEY).await? else {
            return Ok(None);
        };

        let record: PlanRecord = serde_json::from_str(&raw)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        record
            .into_plan()
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_plan(&self, plan: &LearningPlan) -> Result<(), StorageError> {
        let record = PlanRecord::from_plan(plan);
        let raw = serde_json::to_string(&record)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.put_value(PLAN_KEY, &raw).await
    }
}

#[async_trait]
impl AchievementRepository for SqliteRepository {
    async fn load_earned(&self) -> Result<Vec<EarnedAchievement>, StorageError> {
        let Some(raw) = self.get_value(EARNED_KEY).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn record_earned(&self, earned: &[EarnedAchievement]) -> Result<(), StorageError> {
        let merged = merge_earned(self.load_earned().await?, earned);
        let raw = serde_json::to_string(&merged)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.put_value(EARNED_KEY, &raw).await
    }
}
