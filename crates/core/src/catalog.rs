//! Build-time catalogs of lessons, achievements, and goal templates.
//!
//! Catalog order is load-bearing only as a deterministic tie-break: the
//! evaluator walks achievements in catalog order, and recommendations keep
//! lesson catalog order within each priority partition.

use std::sync::LazyLock;

use crate::model::{
    AchievementDefinition, AchievementId, GoalId, LearningGoal, Lesson, LessonId, Requirement,
    SkillLevel,
};

static LESSONS: LazyLock<Vec<Lesson>> = LazyLock::new(|| {
    vec![
        Lesson::new(LessonId::new("greetings"), "Greetings", SkillLevel::Beginner),
        Lesson::new(LessonId::new("numbers"), "Numbers", SkillLevel::Beginner),
        Lesson::new(
            LessonId::new("everyday-phrases"),
            "Everyday Phrases",
            SkillLevel::Beginner,
        ),
        Lesson::new(
            LessonId::new("present-tense"),
            "Present Tense",
            SkillLevel::Beginner,
        ),
        Lesson::new(
            LessonId::new("past-tense"),
            "Past Tense",
            SkillLevel::Intermediate,
        ),
        Lesson::new(
            LessonId::new("small-talk"),
            "Small Talk",
            SkillLevel::Intermediate,
        ),
        Lesson::new(
            LessonId::new("travel-vocab"),
            "Travel Vocabulary",
            SkillLevel::Intermediate,
        ),
        Lesson::new(
            LessonId::new("news-reading"),
            "Reading the News",
            SkillLevel::Advanced,
        ),
        Lesson::new(
            LessonId::new("idioms"),
            "Idioms and Sayings",
            SkillLevel::Advanced,
        ),
        Lesson::new(
            LessonId::new("debate"),
            "Holding a Debate",
            SkillLevel::Advanced,
        ),
    ]
});

static ACHIEVEMENTS: LazyLock<Vec<AchievementDefinition>> = LazyLock::new(|| {
    vec![
        AchievementDefinition::new(
            AchievementId::new("first_lesson"),
            "First Steps",
            "Complete your first lesson",
            "footprints",
            "#34c759",
            Requirement::LessonsCompleted { count: 1 },
        ),
        AchievementDefinition::new(
            AchievementId::new("lessons_10"),
            "Getting Serious",
            "Complete 10 lessons",
            "books",
            "#007aff",
            Requirement::LessonsCompleted { count: 10 },
        ),
        AchievementDefinition::new(
            AchievementId::new("lessons_all"),
            "Course Complete",
            "Complete every lesson in the course",
            "trophy",
            "#ffd60a",
            Requirement::AllLessons,
        ),
        AchievementDefinition::new(
            AchievementId::new("streak_3"),
            "Warming Up",
            "Study 3 days in a row",
            "spark",
            "#ff9500",
            Requirement::Streak { days: 3 },
        ),
        AchievementDefinition::new(
            AchievementId::new("streak_7"),
            "Week Warrior",
            "Study 7 days in a row",
            "flame",
            "#ff3b30",
            Requirement::Streak { days: 7 },
        ),
        AchievementDefinition::new(
            AchievementId::new("streak_30"),
            "Unstoppable",
            "Study 30 days in a row",
            "comet",
            "#af52de",
            Requirement::Streak { days: 30 },
        ),
        AchievementDefinition::new(
            AchievementId::new("quizzes_5"),
            "Quiz Regular",
            "Take 5 quizzes",
            "pencil",
            "#5ac8fa",
            Requirement::QuizzesTaken { count: 5 },
        ),
        AchievementDefinition::new(
            AchievementId::new("quiz_perfect"),
            "Flawless",
            "Score 100% on a quiz",
            "star",
            "#ffcc00",
            Requirement::PerfectQuiz,
        ),
    ]
});

static GOALS: LazyLock<Vec<LearningGoal>> = LazyLock::new(|| {
    vec![
        LearningGoal::new(
            GoalId::new("casual"),
            "Casual",
            "A gentle pace for busy weeks",
            3,
            3,
            12,
            SkillLevel::Beginner,
        ),
        LearningGoal::new(
            GoalId::new("regular"),
            "Regular",
            "Steady progress most days",
            5,
            5,
            8,
            SkillLevel::Intermediate,
        ),
        LearningGoal::new(
            GoalId::new("intensive"),
            "Intensive",
            "Daily study for fast results",
            7,
            7,
            6,
            SkillLevel::Advanced,
        ),
    ]
});

/// The full ordered lesson catalog.
#[must_use]
pub fn lesson_catalog() -> &'static [Lesson] {
    &LESSONS
}

/// The full ordered achievement catalog.
#[must_use]
pub fn achievement_catalog() -> &'static [AchievementDefinition] {
    &ACHIEVEMENTS
}

/// The goal templates a learner can pick from.
#[must_use]
pub fn goal_catalog() -> &'static [LearningGoal] {
    &GOALS
}

/// Looks up a goal template by id.
#[must_use]
pub fn find_goal(id: &GoalId) -> Option<&'static LearningGoal> {
    GOALS.iter().find(|goal| goal.id() == id)
}
