use tracing::debug;

use progress_core::catalog::find_goal;
use progress_core::model::{GoalId, LearningPlan, SkillLevel, StudyDays};
use progress_core::time::Clock;
use storage::Storage;

use crate::error::PlanServiceError;

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Plan lifecycle: creating the plan and changing its goal or study days.
///
/// Every update replaces the persisted plan wholesale; nothing is patched in
/// place.
pub struct PlanService {
    clock: Clock,
    storage: Storage,
}

impl PlanService {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            clock: Clock::default(),
            storage,
        }
    }

    /// Override the clock (usually for deterministic testing).
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Create and persist a fresh plan starting today.
    ///
    /// # Errors
    ///
    /// Returns `PlanServiceError::UnknownGoal` if `goal_id` names no
    /// template, `Plan` for invalid plan parameters, or `Storage` if the
    /// plan cannot be persisted.
    pub async fn create_plan(
        &self,
        level: SkillLevel,
        weekly_goal: Option<u32>,
        study_days: StudyDays,
        goal_id: Option<GoalId>,
    ) -> Result<LearningPlan, PlanServiceError> {
        if let Some(id) = &goal_id
            && find_goal(id).is_none()
        {
            return Err(PlanServiceError::UnknownGoal(id.as_str().to_owned()));
        }

        let plan = LearningPlan::new(
            level,
            weekly_goal,
            study_days,
            goal_id,
            Some(self.clock.today()),
        )?;

        self.storage.plans.save_plan(&plan).await?;
        debug!(level = ?plan.level(), "created learning plan");
        Ok(plan)
    }

    /// Adopt a goal template: the plan takes over the template's level and
    /// weekly quota.
    ///
    /// # Errors
    ///
    /// Returns `NoPlan` if no plan exists, `UnknownGoal` for an unknown
    /// template, or `Storage` on persistence failure.
    pub async fn choose_goal(&self, goal_id: &GoalId) -> Result<LearningPlan, PlanServiceError> {
        let goal = find_goal(goal_id)
            .ok_or_else(|| PlanServiceError::UnknownGoal(goal_id.as_str().to_owned()))?;

        let plan = self
            .storage
            .plans
            .load_plan()
            .await?
            .ok_or(PlanServiceError::NoPlan)?;

        let updated = plan.with_goal(goal);
        self.storage.plans.save_plan(&updated).await?;
        debug!(goal = %goal_id, "plan adopted goal template");
        Ok(updated)
    }

    /// Replace the plan's study-day selection.
    ///
    /// # Errors
    ///
    /// Returns `NoPlan` if no plan exists, or `Storage` on persistence
    /// failure.
    pub async fn select_study_days(
        &self,
        study_days: StudyDays,
    ) -> Result<LearningPlan, PlanServiceError> {
        let plan = self
            .storage
            .plans
            .load_plan()
            .await?
            .ok_or(PlanServiceError::NoPlan)?;

        let updated = plan.with_study_days(study_days);
        self.storage.plans.save_plan(&updated).await?;
        Ok(updated)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
