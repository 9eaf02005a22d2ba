//! Experiment attempt records.
//!
//! One attempt is one user's run of one experiment. Attempts are created
//! in progress, transition once to a terminal state with a final score,
//! and are immutable afterward. The engine only ever reads them; the
//! "mark completed" write belongs to the calling flow.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    /// Experiment started but not finished
    InProgress,
    /// Finished with a final score
    Completed,
    /// Given up before finishing
    Abandoned,
}

/// One user's attempt at one experiment.
///
/// Field names serialize in camelCase to match the record shapes the
/// hosted catalog and attempt stores use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentAttempt {
    pub id: Uuid,
    pub user_id: Uuid,
    pub experiment_id: Uuid,
    /// Display name of the experiment (e.g. "Ohm's Law Laboratory")
    pub experiment_name: String,
    /// Free-text category, e.g. "Chemistry" / "Physics" / "Biology"
    pub subject: String,
    pub status: AttemptStatus,
    /// Final score in 0-100, absent until the attempt finishes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ExperimentAttempt {
    pub fn is_completed(&self) -> bool {
        self.status == AttemptStatus::Completed
    }

    /// Calendar date of completion, used for streak math.
    pub fn completed_on(&self) -> Option<NaiveDate> {
        self.completed_at.map(|t| t.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn attempt(status: AttemptStatus) -> ExperimentAttempt {
        ExperimentAttempt {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            experiment_id: Uuid::new_v4(),
            experiment_name: "Titration Basics".to_string(),
            subject: "Chemistry".to_string(),
            status,
            score: Some(87.5),
            completed_at: Some(Utc.with_ymd_and_hms(2024, 3, 10, 14, 30, 0).unwrap()),
        }
    }

    #[test]
    fn test_is_completed() {
        assert!(attempt(AttemptStatus::Completed).is_completed());
        assert!(!attempt(AttemptStatus::InProgress).is_completed());
        assert!(!attempt(AttemptStatus::Abandoned).is_completed());
    }

    #[test]
    fn test_completed_on_uses_calendar_date() {
        let a = attempt(AttemptStatus::Completed);
        assert_eq!(
            a.completed_on(),
            Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        );
    }

    #[test]
    fn test_serde_camel_case() {
        let a = attempt(AttemptStatus::Completed);
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"experimentName\""));
        assert!(json.contains("\"completedAt\""));
        assert!(json.contains("\"status\":\"completed\""));

        let back: ExperimentAttempt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_score_optional() {
        let json = r#"{
            "id": "3e4c1f4a-0f7e-4f7e-9a3a-111111111111",
            "userId": "3e4c1f4a-0f7e-4f7e-9a3a-222222222222",
            "experimentId": "3e4c1f4a-0f7e-4f7e-9a3a-333333333333",
            "experimentName": "Osmosis",
            "subject": "Biology",
            "status": "in_progress"
        }"#;
        let a: ExperimentAttempt = serde_json::from_str(json).unwrap();
        assert_eq!(a.score, None);
        assert_eq!(a.completed_at, None);
        assert_eq!(a.completed_on(), None);
    }
}
