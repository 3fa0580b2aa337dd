mod achievement;
mod goal;
mod ids;
mod lesson;
mod plan;

pub use achievement::{AchievementDefinition, EarnedAchievement, QuizResult, Requirement};
pub use goal::LearningGoal;
pub use ids::{AchievementId, GoalId, LessonId};
pub use lesson::{Lesson, SkillLevel};
pub use plan::{LearningPlan, PlanError, StudyDays};
