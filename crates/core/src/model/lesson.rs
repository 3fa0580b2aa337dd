use serde::{Deserialize, Serialize};

use crate::model::ids::LessonId;

/// Skill level a lesson targets and a learner declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single lesson in the catalog.
///
/// The `level` tag is used only to prioritize recommendations; it never
/// filters which lessons a learner may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    level: SkillLevel,
}

impl Lesson {
    #[must_use]
    pub fn new(id: LessonId, title: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            id,
            title: title.into(),
            level,
        }
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn level(&self) -> SkillLevel {
        self.level
    }

    /// Whether this lesson is recommended for a learner at `level`.
    #[must_use]
    pub fn recommended_for(&self, level: SkillLevel) -> bool {
        self.level == level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_for_matches_level_only() {
        let lesson = Lesson::new(LessonId::new("l1"), "Greetings", SkillLevel::Beginner);
        assert!(lesson.recommended_for(SkillLevel::Beginner));
        assert!(!lesson.recommended_for(SkillLevel::Advanced));
    }
}
