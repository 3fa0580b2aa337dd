//! Persisted shapes for the two storage keys.
//!
//! These mirror the domain types so backends can serialize without leaking
//! storage concerns into the domain layer. Timestamps are stored as RFC 3339
//! strings; a stored last-activity that fails to parse is treated as "no
//! prior activity" rather than failing the whole load, so bad data can never
//! silently corrupt the streak math.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use progress_core::model::{GoalId, LearningPlan, LessonId, PlanError, SkillLevel, StudyDays};

/// Persisted shape of the learning plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    pub level: SkillLevel,
    #[serde(default)]
    pub weekly_goal: Option<u32>,
    /// Selected study days as 0=Sunday..6=Saturday indices.
    #[serde(default)]
    pub study_days: Vec<u8>,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub last_activity: Option<String>,
    #[serde(default)]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed_lessons: Vec<String>,
}

impl PlanRecord {
    #[must_use]
    pub fn from_plan(plan: &LearningPlan) -> Self {
        Self {
            level: plan.level(),
            weekly_goal: plan.weekly_goal(),
            study_days: plan.study_days().indices(),
            streak_days: plan.streak_days(),
            last_activity: plan.last_activity().map(|t| t.to_rfc3339()),
            goal_id: plan.goal_id().map(|id| id.as_str().to_owned()),
            start_date: plan.start_date(),
            completed_lessons: plan
                .completed_lessons()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
        }
    }

    /// Convert the record back into a domain `LearningPlan`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` if study-day indices or the weekly goal are out of
    /// range.
    pub fn into_plan(self) -> Result<LearningPlan, PlanError> {
        let study_days = StudyDays::from_indices(&self.study_days)?;

        // Contract violation per the error-handling policy: an unparseable
        // stored timestamp means "no prior activity", never a crash.
        let last_activity = self
            .last_activity
            .as_deref()
            .and_then(parse_last_activity);

        LearningPlan::from_persisted(
            self.level,
            self.weekly_goal,
            study_days,
            self.streak_days,
            last_activity,
            self.goal_id.map(GoalId::new),
            self.start_date,
            self.completed_lessons.into_iter().map(LessonId::new).collect(),
        )
    }
}

fn parse_last_activity(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use progress_core::time::fixed_now;

    fn build_plan() -> LearningPlan {
        LearningPlan::from_persisted(
            SkillLevel::Intermediate,
            Some(5),
            StudyDays::from_indices(&[0, 2, 4]).unwrap(),
            6,
            Some(fixed_now()),
            Some(GoalId::new("regular")),
            NaiveDate::from_ymd_opt(2024, 1, 1),
            vec![LessonId::new("greetings"), LessonId::new("numbers")],
        )
        .unwrap()
    }

    #[test]
    fn plan_record_round_trips() {
        let plan = build_plan();
        let record = PlanRecord::from_plan(&plan);

        let json = serde_json::to_string(&record).unwrap();
        let decoded: PlanRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.into_plan().unwrap(), plan);
    }

    #[test]
    fn unparseable_last_activity_becomes_none() {
        let mut record = PlanRecord::from_plan(&build_plan());
        record.last_activity = Some("yesterday-ish".to_owned());

        let plan = record.into_plan().unwrap();

        assert_eq!(plan.last_activity(), None);
    }

    #[test]
    fn missing_fields_default_on_load() {
        let json = r#"{"level":"beginner"}"#;
        let record: PlanRecord = serde_json::from_str(json).unwrap();
        let plan = record.into_plan().unwrap();

        assert_eq!(plan.level(), SkillLevel::Beginner);
        assert_eq!(plan.streak_days(), 0);
        assert!(plan.study_days().is_empty());
        assert!(plan.completed_lessons().is_empty());
    }

    #[test]
    fn bad_study_day_index_is_rejected() {
        let mut record = PlanRecord::from_plan(&build_plan());
        record.study_days = vec![1, 9];

        let err = record.into_plan().unwrap_err();

        assert_eq!(err, PlanError::InvalidStudyDayIndex { index: 9 });
    }
}
