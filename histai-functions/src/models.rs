use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Submission lifecycle: `pending` until a digest picks it up,
/// `processed` while the digest is being sent, `emailed` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Pending,
    Processed,
    Emailed,
}

impl SubmissionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processed => "processed",
            Self::Emailed => "emailed",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processed" => Some(Self::Processed),
            "emailed" => Some(Self::Emailed),
            _ => None,
        }
    }
}

/// Incoming contribution payload, exactly the ten fields the web form sends.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    pub difficulty: String,
    pub answer_type: String,
    pub question_text: String,
    pub required_data: String,
    pub answer: String,
    pub explanation: String,
    pub source_reference: String,
    pub thematic_direction: String,
    pub contributor_name: String,
    pub contributor_affiliation: String,
}

/// A stored submission row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub difficulty: String,
    pub answer_type: String,
    pub question_text: String,
    pub required_data: String,
    pub answer: String,
    pub explanation: String,
    pub source_reference: String,
    pub thematic_direction: String,
    pub contributor_name: String,
    pub contributor_affiliation: String,
    pub status: String,
    pub user_agent: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Counts reported by `GET /stats`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatsCounts {
    pub total: i64,
    pub pending: i64,
    pub processed: i64,
    pub emailed: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_its_text_form() {
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Processed,
            SubmissionStatus::Emailed,
        ] {
            assert_eq!(SubmissionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SubmissionStatus::parse("archived"), None);
    }

    #[test]
    fn new_submission_accepts_camel_case_payloads() {
        let payload = r#"{
            "difficulty": "1",
            "answerType": "Exact Match",
            "questionText": "When was the stele erected?",
            "requiredData": "Photograph of the dedication face.",
            "answer": "498 CE",
            "explanation": "The Taihe reign year 22 corresponds to 498 CE.",
            "sourceReference": "Collected Northern Wei Epigraphy, vol. 2.",
            "thematicDirection": "Epigraphy",
            "contributorName": "A. Historian",
            "contributorAffiliation": "Fudan University"
        }"#;
        let parsed: NewSubmission = serde_json::from_str(payload).expect("payload parses");
        assert_eq!(parsed.answer_type, "Exact Match");
        assert_eq!(parsed.contributor_affiliation, "Fudan University");
    }
}
