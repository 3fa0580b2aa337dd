//! Achievement evaluation.
//!
//! Pure and side-effect free: given one snapshot of progress counters and the
//! set of achievements already on record, compute which catalog entries are
//! newly satisfied. Calling twice with the same inputs yields the same
//! output; the caller is responsible for persisting what comes back.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::catalog::achievement_catalog;
use crate::model::{
    AchievementDefinition, AchievementId, EarnedAchievement, QuizResult, Requirement,
};

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Progress counters for one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot<'a> {
    /// Current consecutive-day streak.
    pub streak_days: u32,
    /// Number of distinct lessons completed.
    pub completed_lessons: usize,
    /// Every quiz attempt on record, in any order.
    pub quiz_results: &'a [QuizResult],
    /// Size of the full lesson catalog.
    pub total_lessons: usize,
}

impl Requirement {
    /// Whether this requirement is satisfied by the given snapshot.
    ///
    /// All threshold comparisons are inclusive.
    #[must_use]
    pub fn is_met(&self, progress: &ProgressSnapshot<'_>) -> bool {
        match *self {
            Requirement::Streak { days } => progress.streak_days >= days,
            Requirement::LessonsCompleted { count } => {
                progress.completed_lessons >= count as usize
            }
            Requirement::AllLessons => progress.completed_lessons >= progress.total_lessons,
            Requirement::QuizzesTaken { count } => {
                progress.quiz_results.len() >= count as usize
            }
            Requirement::PerfectQuiz => progress.quiz_results.iter().any(QuizResult::is_perfect),
        }
    }
}

//
// ─── EVALUATOR ─────────────────────────────────────────────────────────────────
//

/// Evaluates the achievement catalog against a progress snapshot.
pub struct AchievementEvaluator<'a> {
    catalog: &'a [AchievementDefinition],
}

impl<'a> AchievementEvaluator<'a> {
    /// Evaluator over the built-in catalog.
    #[must_use]
    pub fn new() -> AchievementEvaluator<'static> {
        AchievementEvaluator {
            catalog: achievement_catalog(),
        }
    }

    /// Evaluator over a caller-supplied catalog (used in tests).
    #[must_use]
    pub fn with_catalog(catalog: &'a [AchievementDefinition]) -> Self {
        Self { catalog }
    }

    /// Returns the achievements newly earned by this snapshot, in catalog
    /// order, stamped with `now`.
    ///
    /// Entries whose id appears in `already_earned` are skipped; everything
    /// else is tested against its requirement. The evaluator never
    /// deduplicates across calls beyond that set, so the caller must record
    /// the result before evaluating again.
    #[must_use]
    pub fn evaluate(
        &self,
        progress: &ProgressSnapshot<'_>,
        already_earned: &[EarnedAchievement],
        now: DateTime<Utc>,
    ) -> Vec<EarnedAchievement> {
        let earned_ids: HashSet<&AchievementId> =
            already_earned.iter().map(|earned| &earned.id).collect();

        self.catalog
            .iter()
            .filter(|definition| !earned_ids.contains(definition.id()))
            .filter(|definition| definition.requirement().is_met(progress))
            .map(|definition| EarnedAchievement::new(definition.id().clone(), now))
            .collect()
    }
}

impl Default for AchievementEvaluator<'static> {
    fn default() -> Self {
        AchievementEvaluator::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
