use chrono::{DateTime, NaiveDate, Utc, Weekday};
use thiserror::Error;

use crate::model::goal::LearningGoal;
use crate::model::ids::{GoalId, LessonId};
use crate::model::lesson::SkillLevel;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanError {
    #[error("weekly goal must be > 0")]
    InvalidWeeklyGoal,

    #[error("study day index must be 0..=6 (0 = Sunday), got {index}")]
    InvalidStudyDayIndex { index: u8 },

    #[error("study day mask has bits outside 0..=6 set: {mask:#04x}")]
    InvalidStudyDayMask { mask: u8 },
}

//
// ─── STUDY DAYS ────────────────────────────────────────────────────────────────
//

/// Set of weekdays a learner plans to study on.
///
/// Encoded as a bitmask with Sunday = bit 0 through Saturday = bit 6, the
/// same 0..=6 index convention the persisted plan uses. Construction rejects
/// out-of-range indices, so the set holds at most 7 distinct days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudyDays(u8);

const STUDY_DAY_MASK: u8 = 0x7f;

impl StudyDays {
    /// The empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self(0)
    }

    /// Builds the set from 0=Sunday..6=Saturday indices.
    ///
    /// Duplicates collapse; order is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidStudyDayIndex` for any index above 6.
    pub fn from_indices(indices: &[u8]) -> Result<Self, PlanError> {
        let mut mask = 0_u8;
        for &index in indices {
            if index > 6 {
                return Err(PlanError::InvalidStudyDayIndex { index });
            }
            mask |= 1 << index;
        }
        Ok(Self(mask))
    }

    /// Builds the set from chrono weekdays.
    #[must_use]
    pub fn from_weekdays(days: &[Weekday]) -> Self {
        let mask = days
            .iter()
            .fold(0_u8, |mask, day| mask | (1 << day.num_days_from_sunday()));
        Self(mask)
    }

    /// Rehydrates from a persisted bitmask.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidStudyDayMask` if bits above Saturday are set.
    pub fn from_bits(mask: u8) -> Result<Self, PlanError> {
        if mask & !STUDY_DAY_MASK != 0 {
            return Err(PlanError::InvalidStudyDayMask { mask });
        }
        Ok(Self(mask))
    }

    #[must_use]
    pub fn bits(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_sunday()) != 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of selected days (0..=7).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Selected day indices in ascending 0=Sunday..6=Saturday order.
    #[must_use]
    pub fn indices(&self) -> Vec<u8> {
        (0..7).filter(|i| self.0 & (1 << i) != 0).collect()
    }
}

//
// ─── LEARNING PLAN ─────────────────────────────────────────────────────────────
//

/// A learner's study plan.
///
/// Value object: nothing mutates in place. The streak-update and
/// lesson-completion operations return a fresh plan, and the caller replaces
/// the persisted copy wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningPlan {
    level: SkillLevel,
    weekly_goal: Option<u32>,
    study_days: StudyDays,
    streak_days: u32,
    last_activity: Option<DateTime<Utc>>,
    goal_id: Option<GoalId>,
    start_date: Option<NaiveDate>,
    completed_lessons: Vec<LessonId>,
}

impl LearningPlan {
    /// Creates a fresh plan with no recorded activity.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidWeeklyGoal` if `weekly_goal` is `Some(0)`.
    pub fn new(
        level: SkillLevel,
        weekly_goal: Option<u32>,
        study_days: StudyDays,
        goal_id: Option<GoalId>,
        start_date: Option<NaiveDate>,
    ) -> Result<Self, PlanError> {
        if weekly_goal == Some(0) {
            return Err(PlanError::InvalidWeeklyGoal);
        }

        Ok(Self {
            level,
            weekly_goal,
            study_days,
            streak_days: 0,
            last_activity: None,
            goal_id,
            start_date,
            completed_lessons: Vec::new(),
        })
    }

    /// Rehydrates a plan from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidWeeklyGoal` if `weekly_goal` is `Some(0)`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persisted(
        level: SkillLevel,
        weekly_goal: Option<u32>,
        study_days: StudyDays,
        streak_days: u32,
        last_activity: Option<DateTime<Utc>>,
        goal_id: Option<GoalId>,
        start_date: Option<NaiveDate>,
        completed_lessons: Vec<LessonId>,
    ) -> Result<Self, PlanError> {
        if weekly_goal == Some(0) {
            return Err(PlanError::InvalidWeeklyGoal);
        }

        Ok(Self {
            level,
            weekly_goal,
            study_days,
            streak_days,
            last_activity,
            goal_id,
            start_date,
            completed_lessons,
        })
    }

    // Accessors
    #[must_use]
    pub fn level(&self) -> SkillLevel {
        self.level
    }

    #[must_use]
    pub fn weekly_goal(&self) -> Option<u32> {
        self.weekly_goal
    }

    #[must_use]
    pub fn study_days(&self) -> StudyDays {
        self.study_days
    }

    #[must_use]
    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    #[must_use]
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.last_activity
    }

    #[must_use]
    pub fn goal_id(&self) -> Option<&GoalId> {
        self.goal_id.as_ref()
    }

    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    #[must_use]
    pub fn completed_lessons(&self) -> &[LessonId] {
        &self.completed_lessons
    }

    #[must_use]
    pub fn has_completed(&self, lesson: &LessonId) -> bool {
        self.completed_lessons.contains(lesson)
    }

    /// Returns a copy of the plan with `lesson` appended to the completed
    /// list. The list stays duplicate-free; completing an already-completed
    /// lesson returns an identical plan.
    #[must_use]
    pub fn with_completed_lesson(&self, lesson: LessonId) -> Self {
        let mut next = self.clone();
        if !next.completed_lessons.contains(&lesson) {
            next.completed_lessons.push(lesson);
        }
        next
    }

    /// Returns a copy of the plan with updated streak state.
    #[must_use]
    pub fn with_streak(&self, streak_days: u32, last_activity: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        next.streak_days = streak_days;
        next.last_activity = Some(last_activity);
        next
    }

    /// Returns a copy of the plan adopting a goal template: the template's
    /// id, target level, and weekly quota replace the plan's own.
    #[must_use]
    pub fn with_goal(&self, goal: &LearningGoal) -> Self {
        let mut next = self.clone();
        next.goal_id = Some(goal.id().clone());
        next.level = goal.level();
        next.weekly_goal = Some(goal.lessons_per_week());
        next
    }

    /// Returns a copy of the plan with a different study-day selection.
    #[must_use]
    pub fn with_study_days(&self, study_days: StudyDays) -> Self {
        let mut next = self.clone();
        next.study_days = study_days;
        next
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
