use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use progress_core::achievements::{AchievementEvaluator, ProgressSnapshot};
use progress_core::catalog::{goal_catalog, lesson_catalog};
use progress_core::model::{EarnedAchievement, LearningPlan, LessonId, QuizResult};
use progress_core::planner;
use progress_core::time::Clock;
use storage::Storage;

use crate::error::ProgressServiceError;

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

/// Result of recording one learning activity: the replaced plan and whatever
/// achievements the activity unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOutcome {
    pub plan: LearningPlan,
    pub newly_earned: Vec<EarnedAchievement>,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Owns the read-modify-write cycle around the pure progress functions.
///
/// Each operation loads the persisted snapshot, runs the core calculations,
/// and persists the result. Callers must not interleave two mutating calls;
/// the second write would overwrite the first with stale input.
pub struct ProgressService {
    clock: Clock,
    storage: Storage,
}

impl ProgressService {
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

    /// Current time according to the service's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Record a completed lesson: appends it to the plan, advances the
    /// streak, evaluates achievements, and persists everything.
    ///
    /// `quiz_results` is the caller's full quiz history; it feeds the
    /// evaluation but is not persisted here.
    ///
    /// # Errors
    ///
    /// Returns `NoPlan` if no plan exists, or `Storage` on persistence
    /// failure.
    pub async fn complete_lesson(
        &self,
        lesson: LessonId,
        quiz_results: &[QuizResult],
    ) -> Result<ActivityOutcome, ProgressServiceError> {
        let plan = self.load_required_plan().await?;
        let updated = planner::record_activity(&plan.with_completed_lesson(lesson), self.now());
        self.finish_activity(updated, quiz_results).await
    }

    /// Record a quiz attempt: advances the streak and evaluates achievements
    /// against the history including this attempt.
    ///
    /// # Errors
    ///
    /// Returns `NoPlan` if no plan exists, or `Storage` on persistence
    /// failure.
    pub async fn record_quiz(
        &self,
        result: QuizResult,
        prior_results: &[QuizResult],
    ) -> Result<ActivityOutcome, ProgressServiceError> {
        let plan = self.load_required_plan().await?;
        let updated = planner::record_activity(&plan, self.now());

        let mut history = prior_results.to_vec();
        history.push(result);

        self.finish_activity(updated, &history).await
    }

    /// Next recommended lessons for the stored plan; empty when no plan
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the plan cannot be loaded.
    pub async fn next_lessons(&self) -> Result<Vec<LessonId>, ProgressServiceError> {
        let plan = self.storage.plans.load_plan().await?;
        Ok(planner::recommend_next(
            plan.as_ref(),
            lesson_catalog(),
            goal_catalog(),
        ))
    }

    /// Concrete study dates for the week starting today, from the plan's
    /// study-day selection; empty when no plan exists.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the plan cannot be loaded.
    pub async fn weekly_schedule(&self) -> Result<Vec<NaiveDate>, ProgressServiceError> {
        let Some(plan) = self.storage.plans.load_plan().await? else {
            return Ok(Vec::new());
        };
        Ok(planner::study_dates(self.clock.today(), plan.study_days()))
    }

    /// Achievements earned so far, in the order they were recorded.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the record cannot be loaded.
    pub async fn earned_achievements(
        &self,
    ) -> Result<Vec<EarnedAchievement>, ProgressServiceError> {
        Ok(self.storage.achievements.load_earned().await?)
    }

    async fn load_required_plan(&self) -> Result<LearningPlan, ProgressServiceError> {
        self.storage
            .plans
            .load_plan()
            .await?
            .ok_or(ProgressServiceError::NoPlan)
    }

    /// Evaluate achievements for the updated plan and persist both.
    async fn finish_activity(
        &self,
        plan: LearningPlan,
        quiz_results: &[QuizResult],
    ) -> Result<ActivityOutcome, ProgressServiceError> {
        let already_earned = self.storage.achievements.load_earned().await?;

        let snapshot = ProgressSnapshot {
            streak_days: plan.streak_days(),
            completed_lessons: plan.completed_lessons().len(),
            quiz_results,
            total_lessons: lesson_catalog().len(),
        };
        let newly_earned =
            AchievementEvaluator::new().evaluate(&snapshot, &already_earned, self.now());

        self.storage.plans.save_plan(&plan).await?;
        if !newly_earned.is_empty() {
            self.storage.achievements.record_earned(&newly_earned).await?;
            debug!(count = newly_earned.len(), "unlocked achievements");
        }
        debug!(streak = plan.streak_days(), "recorded learning activity");

        Ok(ActivityOutcome { plan, newly_earned })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
