//! Server-side validation, the same rules the web wizard enforces.

use crate::models::NewSubmission;

const DIFFICULTIES: [&str; 3] = ["1", "2", "3"];
const ANSWER_TYPES: [&str; 2] = ["Exact Match", "Multiple Choice"];

fn chars(s: &str) -> usize {
    s.trim().chars().count()
}

fn check_range(
    errors: &mut Vec<String>,
    field: &str,
    value: &str,
    min: usize,
    max: Option<usize>,
) {
    if chars(value) < min {
        errors.push(format!("{field} must be at least {min} characters"));
    } else if let Some(max) = max
        && value.chars().count() > max
    {
        errors.push(format!("{field} must be at most {max} characters"));
    }
}

/// Collect every rule violation in the payload. Empty means acceptable.
#[must_use]
pub fn validate(submission: &NewSubmission) -> Vec<String> {
    let mut errors = Vec::new();

    if !DIFFICULTIES.contains(&submission.difficulty.as_str()) {
        errors.push("difficulty must be one of 1, 2, 3".to_string());
    }
    if !ANSWER_TYPES.contains(&submission.answer_type.as_str()) {
        errors.push("answerType must be 'Exact Match' or 'Multiple Choice'".to_string());
    }

    check_range(
        &mut errors,
        "questionText",
        &submission.question_text,
        10,
        Some(1000),
    );
    check_range(&mut errors, "requiredData", &submission.required_data, 10, None);
    check_range(&mut errors, "answer", &submission.answer, 1, None);
    check_range(
        &mut errors,
        "explanation",
        &submission.explanation,
        20,
        Some(2000),
    );
    check_range(
        &mut errors,
        "sourceReference",
        &submission.source_reference,
        5,
        None,
    );
    check_range(
        &mut errors,
        "thematicDirection",
        &submission.thematic_direction,
        5,
        None,
    );
    check_range(
        &mut errors,
        "contributorName",
        &submission.contributor_name,
        2,
        None,
    );
    check_range(
        &mut errors,
        "contributorAffiliation",
        &submission.contributor_affiliation,
        2,
        None,
    );

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NewSubmission {
        NewSubmission {
            difficulty: "3".to_string(),
            answer_type: "Multiple Choice".to_string(),
            question_text: "To which scribal school should this fragment be attributed?"
                .to_string(),
            required_data: "High-resolution scan of the papyrus fragment.".to_string(),
            answer: "The Faiyum school".to_string(),
            explanation: "Ligature forms and Arsinoite toponyms exclude Oxyrhynchus.".to_string(),
            source_reference: "P.Fay. appendix, re-examined 2024.".to_string(),
            thematic_direction: "Papyrology".to_string(),
            contributor_name: "A. Historian".to_string(),
            contributor_affiliation: "Princeton University".to_string(),
        }
    }

    #[test]
    fn valid_payload_produces_no_errors() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn empty_payload_reports_every_field() {
        let blank = NewSubmission {
            difficulty: String::new(),
            answer_type: String::new(),
            question_text: String::new(),
            required_data: String::new(),
            answer: String::new(),
            explanation: String::new(),
            source_reference: String::new(),
            thematic_direction: String::new(),
            contributor_name: String::new(),
            contributor_affiliation: String::new(),
        };
        assert_eq!(validate(&blank).len(), 10);
    }

    #[test]
    fn error_messages_name_the_wire_field() {
        let mut s = filled();
        s.question_text = "short".to_string();
        let errors = validate(&s);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("questionText"));
    }

    #[test]
    fn upper_bounds_are_enforced() {
        let mut s = filled();
        s.explanation = "x".repeat(2001);
        let errors = validate(&s);
        assert!(errors.iter().any(|e| e.contains("at most 2000")));
    }
}
