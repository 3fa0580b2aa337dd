use chrono::Duration;

use progress_core::model::{AchievementId, LessonId, QuizResult, SkillLevel, StudyDays};
use progress_core::time::fixed_now;
use services::{Clock, PlanService, ProgressService};
use storage::Storage;

#[tokio::test]
async fn multi_day_flow_builds_streak_and_unlocks_achievements() {
    let storage = Storage::in_memory();
    let now = fixed_now();

    let plan_svc = PlanService::new(storage.clone()).with_clock(Clock::fixed(now));
    plan_svc
        .create_plan(
            SkillLevel::Beginner,
            Some(2),
            StudyDays::from_indices(&[1, 3, 5]).unwrap(),
            None,
        )
        .await
        .unwrap();

    let lessons = ["greetings", "numbers", "everyday-phrases"];

    // one lesson a day for three consecutive days
    for (day, lesson) in lessons.iter().enumerate() {
        let clock = Clock::fixed(now + Duration::days(day as i64));
        let svc = ProgressService::new(storage.clone()).with_clock(clock);
        let outcome = svc
            .complete_lesson(LessonId::new(*lesson), &[])
            .await
            .unwrap();
        assert_eq!(outcome.plan.streak_days(), day as u32 + 1);
    }

    let svc = ProgressService::new(storage.clone()).with_clock(Clock::fixed(now));
    let earned = svc.earned_achievements().await.unwrap();
    let ids: Vec<&str> = earned.iter().map(|e| e.id.as_str()).collect();

    assert!(ids.contains(&"first_lesson"));
    assert!(ids.contains(&"streak_3"));
    // each achievement recorded exactly once
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[tokio::test]
async fn skipping_days_resets_the_streak() {
    let storage = Storage::in_memory();
    let now = fixed_now();

    let plan_svc = PlanService::new(storage.clone()).with_clock(Clock::fixed(now));
    plan_svc
        .create_plan(SkillLevel::Intermediate, None, StudyDays::empty(), None)
        .await
        .unwrap();

    let day_one = ProgressService::new(storage.clone()).with_clock(Clock::fixed(now));
    day_one
        .complete_lesson(LessonId::new("past-tense"), &[])
        .await
        .unwrap();

    // nothing for three days, then back
    let later = ProgressService::new(storage.clone())
        .with_clock(Clock::fixed(now + Duration::days(4)));
    let outcome = later
        .complete_lesson(LessonId::new("small-talk"), &[])
        .await
        .unwrap();

    assert_eq!(outcome.plan.streak_days(), 1);
    assert_eq!(outcome.plan.completed_lessons().len(), 2);
}

#[tokio::test]
async fn perfect_quiz_unlocks_flawless_once() {
    let storage = Storage::in_memory();
    let now = fixed_now();

    let plan_svc = PlanService::new(storage.clone()).with_clock(Clock::fixed(now));
    plan_svc
        .create_plan(SkillLevel::Beginner, None, StudyDays::empty(), None)
        .await
        .unwrap();

    let svc = ProgressService::new(storage.clone()).with_clock(Clock::fixed(now));

    let first = svc.record_quiz(QuizResult::new(5, 5), &[]).await.unwrap();
    assert!(
        first
            .newly_earned
            .iter()
            .any(|e| e.id == AchievementId::new("quiz_perfect"))
    );

    // a second perfect attempt must not re-award it
    let history = [QuizResult::new(5, 5)];
    let second = svc
        .record_quiz(QuizResult::new(5, 5), &history)
        .await
        .unwrap();
    assert!(
        !second
            .newly_earned
            .iter()
            .any(|e| e.id == AchievementId::new("quiz_perfect"))
    );
}
