use crate::model::ids::GoalId;
use crate::model::lesson::SkillLevel;

/// A named learning-goal template.
///
/// Read-only bundle of a weekly lesson quota, study-day count, and target
/// duration. A plan that references a goal derives its effective weekly quota
/// from the template instead of its own `weekly_goal` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningGoal {
    id: GoalId,
    title: String,
    description: String,
    lessons_per_week: u32,
    days_per_week: u32,
    total_weeks: u32,
    level: SkillLevel,
}

impl LearningGoal {
    #[must_use]
    pub fn new(
        id: GoalId,
        title: impl Into<String>,
        description: impl Into<String>,
        lessons_per_week: u32,
        days_per_week: u32,
        total_weeks: u32,
        level: SkillLevel,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            lessons_per_week,
            days_per_week,
            total_weeks,
            level,
        }
    }

    #[must_use]
    pub fn id(&self) -> &GoalId {
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
    pub fn lessons_per_week(&self) -> u32 {
        self.lessons_per_week
    }

    #[must_use]
    pub fn days_per_week(&self) -> u32 {
        self.days_per_week
    }

    #[must_use]
    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    #[must_use]
    pub fn level(&self) -> SkillLevel {
        self.level
    }
}
