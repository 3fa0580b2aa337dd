use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::AchievementId;

//
// ─── REQUIREMENT ───────────────────────────────────────────────────────────────
//

/// Earning condition for an achievement.
///
/// Each variant is an explicit predicate over progress counters; there is no
/// identifier-based special-casing. All threshold comparisons are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Current streak-day count reaches `days`.
    Streak { days: u32 },
    /// Completed-lesson count reaches `count`.
    LessonsCompleted { count: u32 },
    /// Every lesson in the catalog has been completed.
    AllLessons,
    /// Number of quiz results recorded reaches `count`.
    ///
    /// Counts attempts, not passes or distinct quizzes.
    QuizzesTaken { count: u32 },
    /// At least one quiz result is a perfect score.
    PerfectQuiz,
}

//
// ─── DEFINITION ────────────────────────────────────────────────────────────────
//

/// A static catalog entry describing one unlockable achievement.
///
/// `icon` and `color` are opaque rendering tags with no semantic weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDefinition {
    id: AchievementId,
    title: String,
    description: String,
    icon: String,
    color: String,
    requirement: Requirement,
}

impl AchievementDefinition {
    #[must_use]
    pub fn new(
        id: AchievementId,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        requirement: Requirement,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
            requirement,
        }
    }

    #[must_use]
    pub fn id(&self) -> &AchievementId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }
}

//
// ─── EARNED ────────────────────────────────────────────────────────────────────
//

/// A permanently recorded unlock of one achievement.
///
/// Created at most once per identifier per learner; storage enforces the
/// once-only rule, the evaluator only consults the already-earned set it is
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedAchievement {
    pub id: AchievementId,
    pub earned_at: DateTime<Utc>,
}

impl EarnedAchievement {
    #[must_use]
    pub fn new(id: AchievementId, earned_at: DateTime<Utc>) -> Self {
        Self { id, earned_at }
    }
}

//
// ─── QUIZ RESULT ───────────────────────────────────────────────────────────────
//

/// One recorded quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total_questions: u32,
}

impl QuizResult {
    #[must_use]
    pub fn new(score: u32, total_questions: u32) -> Self {
        Self {
            score,
            total_questions,
        }
    }

    /// A result is perfect when every question was answered correctly.
    ///
    /// A quiz with zero questions is never perfect.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total_questions > 0 && self.score == self.total_questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
