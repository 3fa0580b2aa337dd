use progress_core::model::{
    AchievementId, EarnedAchievement, GoalId, LessonId, SkillLevel, StudyDays,
};
use progress_core::model::LearningPlan;
use progress_core::time::fixed_now;
use storage::Storage;

fn build_plan() -> LearningPlan {
    LearningPlan::from_persisted(
        SkillLevel::Beginner,
        Some(4),
        StudyDays::from_indices(&[1, 3, 5]).unwrap(),
        2,
        Some(fixed_now()),
        Some(GoalId::new("casual")),
        None,
        vec![LessonId::new("greetings")],
    )
    .unwrap()
}

#[tokio::test]
async fn plan_round_trips_through_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_plan_roundtrip?mode=memory&cache=shared")
        .await
        .unwrap();

    assert!(storage.plans.load_plan().await.unwrap().is_none());

    let plan = build_plan();
    storage.plans.save_plan(&plan).await.unwrap();

    let loaded = storage.plans.load_plan().await.unwrap();
    assert_eq!(loaded, Some(plan));
}

#[tokio::test]
async fn save_plan_replaces_previous_version() {
    let storage = Storage::sqlite("sqlite:file:memdb_plan_replace?mode=memory&cache=shared")
        .await
        .unwrap();

    let plan = build_plan();
    storage.plans.save_plan(&plan).await.unwrap();

    let updated = plan.with_completed_lesson(LessonId::new("numbers"));
    storage.plans.save_plan(&updated).await.unwrap();

    let loaded = storage.plans.load_plan().await.unwrap().unwrap();
    assert_eq!(loaded.completed_lessons().len(), 2);
}

#[tokio::test]
async fn earned_achievements_accumulate_without_duplicates() {
    let storage = Storage::sqlite("sqlite:file:memdb_earned?mode=memory&cache=shared")
        .await
        .unwrap();
    let now = fixed_now();

    assert!(storage.achievements.load_earned().await.unwrap().is_empty());

    storage
        .achievements
        .record_earned(&[EarnedAchievement::new(
            AchievementId::new("first_lesson"),
            now,
        )])
        .await
        .unwrap();

    storage
        .achievements
        .record_earned(&[
            EarnedAchievement::new(AchievementId::new("first_lesson"), now),
            EarnedAchievement::new(AchievementId::new("streak_3"), now),
        ])
        .await
        .unwrap();

    let earned = storage.achievements.load_earned().await.unwrap();
    assert_eq!(earned.len(), 2);
    assert_eq!(earned[0].id, AchievementId::new("first_lesson"));
    assert_eq!(earned[1].id, AchievementId::new("streak_3"));
}
