//! Learning-plan calculations: next-lesson recommendation, daily streak
//! maintenance, and weekly study-date projection.
//!
//! Everything here is pure. The streak update returns a fresh plan instead of
//! mutating, so callers replace their persisted copy wholesale and the
//! functions stay trivially testable.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

use crate::model::{LearningGoal, LearningPlan, Lesson, LessonId, StudyDays};

/// Weekly lesson quota used when a plan names neither a goal template nor a
/// weekly goal of its own.
pub const DEFAULT_WEEKLY_GOAL: u32 = 3;

//
// ─── RECOMMENDATION ────────────────────────────────────────────────────────────
//

/// Effective weekly lesson quota for a plan.
///
/// Precedence: referenced goal template, then the plan's own weekly goal,
/// then [`DEFAULT_WEEKLY_GOAL`]. A dangling goal reference falls through to
/// the next source.
#[must_use]
pub fn effective_weekly_quota(plan: &LearningPlan, goals: &[LearningGoal]) -> u32 {
    plan.goal_id()
        .and_then(|id| goals.iter().find(|goal| goal.id() == id))
        .map(LearningGoal::lessons_per_week)
        .or(plan.weekly_goal())
        .unwrap_or(DEFAULT_WEEKLY_GOAL)
}

/// Recommends the next lessons to take.
///
/// Completed lessons are dropped, then the remainder is stable-partitioned:
/// lessons matching the plan's level come first, everything else follows, and
/// both partitions keep catalog order. The first `quota` ids are returned.
///
/// Without a plan there is nothing to recommend and the list is empty.
#[must_use]
pub fn recommend_next(
    plan: Option<&LearningPlan>,
    catalog: &[Lesson],
    goals: &[LearningGoal],
) -> Vec<LessonId> {
    let Some(plan) = plan else {
        return Vec::new();
    };

    let quota = effective_weekly_quota(plan, goals) as usize;

    let mut prioritized: Vec<&Lesson> = Vec::new();
    let mut rest: Vec<&Lesson> = Vec::new();
    for lesson in catalog {
        if plan.has_completed(lesson.id()) {
            continue;
        }
        if lesson.recommended_for(plan.level()) {
            prioritized.push(lesson);
        } else {
            rest.push(lesson);
        }
    }

    prioritized
        .into_iter()
        .chain(rest)
        .take(quota)
        .map(|lesson| lesson.id().clone())
        .collect()
}

//
// ─── STREAK ────────────────────────────────────────────────────────────────────
//

/// Records a learning activity against the plan's streak.
///
/// Calendar-day rules, evaluated against the day of `now`:
/// - no prior activity: streak starts at 1
/// - same day as the last activity: plan returned unchanged, so same-day
///   activity never double-counts
/// - last activity was exactly the previous day: streak extends by 1
/// - anything else (gap of two or more days, or a last activity in the
///   future): streak resets to 1
///
/// Day equality compares year, month, and day of the supplied timestamps;
/// time of day is ignored. Callers pick the zone by choosing the timestamps
/// they pass in.
#[must_use]
pub fn record_activity(plan: &LearningPlan, now: DateTime<Utc>) -> LearningPlan {
    let today = now.date_naive();

    let Some(last) = plan.last_activity() else {
        return plan.with_streak(1, now);
    };

    let last_day = last.date_naive();
    if last_day == today {
        return plan.clone();
    }
    if last_day.succ_opt() == Some(today) {
        return plan.with_streak(plan.streak_days() + 1, now);
    }
    plan.with_streak(1, now)
}

//
// ─── WEEK PROJECTION ───────────────────────────────────────────────────────────
//

/// Concrete study dates within the 7 days starting at `start` (inclusive)
/// whose weekday is in the selected set, in chronological order.
#[must_use]
pub fn study_dates(start: NaiveDate, days: StudyDays) -> Vec<NaiveDate> {
    if days.is_empty() {
        return Vec::new();
    }

    (0..7)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .filter(|date| days.contains(date.weekday()))
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::goal_catalog;
    use crate::model::{GoalId, SkillLevel};
    use crate::time::fixed_now;
    use chrono::{Datelike, Duration, Weekday};

    fn lesson(id: &str, level: SkillLevel) -> Lesson {
        Lesson::new(LessonId::new(id), id.to_uppercase(), level)
    }

    /// Catalog of 8 lessons where l1, l2, l4, l5 suit beginners.
    fn eight_lesson_catalog() -> Vec<Lesson> {
        vec![
            lesson("l1", SkillLevel::Beginner),
            lesson("l2", SkillLevel::Beginner),
            lesson("l3", SkillLevel::Intermediate),
            lesson("l4", SkillLevel::Beginner),
            lesson("l5", SkillLevel::Beginner),
            lesson("l6", SkillLevel::Intermediate),
            lesson("l7", SkillLevel::Advanced),
            lesson("l8", SkillLevel::Advanced),
        ]
    }

    fn beginner_plan(weekly_goal: Option<u32>) -> LearningPlan {
        LearningPlan::new(
            SkillLevel::Beginner,
            weekly_goal,
            StudyDays::empty(),
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn no_plan_means_no_recommendation() {
        let catalog = eight_lesson_catalog();
        assert!(recommend_next(None, &catalog, goal_catalog()).is_empty());
    }

    #[test]
    fn recommendation_stable_partitions_and_takes_quota() {
        let catalog = eight_lesson_catalog();
        let plan = beginner_plan(Some(3))
            .with_completed_lesson(LessonId::new("l1"))
            .with_completed_lesson(LessonId::new("l2"));

        let next = recommend_next(Some(&plan), &catalog, goal_catalog());

        // recommended-but-incomplete first in catalog order, then the rest
        let expected: Vec<LessonId> = ["l4", "l5", "l3"].into_iter().map(LessonId::from).collect();
        assert_eq!(next, expected);
    }

    #[test]
    fn recommendation_returns_fewer_when_catalog_runs_out() {
        let catalog = vec![lesson("only", SkillLevel::Beginner)];
        let plan = beginner_plan(Some(5));

        let next = recommend_next(Some(&plan), &catalog, goal_catalog());

        assert_eq!(next, vec![LessonId::new("only")]);
    }

    #[test]
    fn quota_prefers_goal_template_over_weekly_goal() {
        let plan = LearningPlan::new(
            SkillLevel::Intermediate,
            Some(2),
            StudyDays::empty(),
            Some(GoalId::new("regular")),
            None,
        )
        .unwrap();

        // the "regular" template sets 5 lessons per week
        assert_eq!(effective_weekly_quota(&plan, goal_catalog()), 5);
    }

    #[test]
    fn quota_falls_back_through_weekly_goal_to_default() {
        let with_goal = beginner_plan(Some(2));
        assert_eq!(effective_weekly_quota(&with_goal, goal_catalog()), 2);

        let bare = beginner_plan(None);
        assert_eq!(
            effective_weekly_quota(&bare, goal_catalog()),
            DEFAULT_WEEKLY_GOAL
        );

        // dangling goal reference falls through
        let dangling = LearningPlan::new(
            SkillLevel::Beginner,
            Some(4),
            StudyDays::empty(),
            Some(GoalId::new("retired-template")),
            None,
        )
        .unwrap();
        assert_eq!(effective_weekly_quota(&dangling, goal_catalog()), 4);
    }

    #[test]
    fn first_activity_starts_streak_at_one() {
        let plan = beginner_plan(None);
        let now = fixed_now();

        let updated = record_activity(&plan, now);

        assert_eq!(updated.streak_days(), 1);
        assert_eq!(updated.last_activity(), Some(now));
    }

    #[test]
    fn same_day_activity_does_not_double_count() {
        let now = fixed_now();
        let plan = beginner_plan(None).with_streak(5, now - Duration::hours(6));

        let updated = record_activity(&plan, now);

        assert_eq!(updated, plan);
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let now = fixed_now();
        let plan = beginner_plan(None).with_streak(5, now - Duration::days(1));

        let updated = record_activity(&plan, now);

        assert_eq!(updated.streak_days(), 6);
        assert_eq!(updated.last_activity(), Some(now));
    }

    #[test]
    fn gap_resets_streak() {
        let now = fixed_now();
        let plan = beginner_plan(None).with_streak(10, now - Duration::days(3));

        let updated = record_activity(&plan, now);

        assert_eq!(updated.streak_days(), 1);
        assert_eq!(updated.last_activity(), Some(now));
    }

    #[test]
    fn future_last_activity_resets_streak() {
        let now = fixed_now();
        let plan = beginner_plan(None).with_streak(8, now + Duration::days(2));

        let updated = record_activity(&plan, now);

        assert_eq!(updated.streak_days(), 1);
    }

    #[test]
    fn day_boundary_ignores_time_of_day() {
        // 23:50 yesterday followed by 00:10 today is still consecutive
        let now = fixed_now();
        let today_early = now
            .date_naive()
            .and_hms_opt(0, 10, 0)
            .unwrap()
            .and_utc();
        let yesterday_late = (now.date_naive() - Duration::days(1))
            .and_hms_opt(23, 50, 0)
            .unwrap()
            .and_utc();

        let plan = beginner_plan(None).with_streak(2, yesterday_late);
        let updated = record_activity(&plan, today_early);

        assert_eq!(updated.streak_days(), 3);
    }

    #[test]
    fn week_projection_from_a_wednesday() {
        // 2024-01-03 was a Wednesday
        let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(start.weekday(), Weekday::Wed);
        let days = StudyDays::from_indices(&[1, 3]).unwrap(); // Monday, Wednesday

        let dates = study_dates(start, days);

        assert_eq!(
            dates,
            vec![
                start,
                NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(), // the following Monday
            ]
        );
    }

    #[test]
    fn week_projection_empty_set_yields_nothing() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert!(study_dates(start, StudyDays::empty()).is_empty());
    }

    #[test]
    fn week_projection_all_days_covers_the_week() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let days = StudyDays::from_indices(&[0, 1, 2, 3, 4, 5, 6]).unwrap();

        let dates = study_dates(start, days);

        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], start);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
