use super::state::{FormField, SubmissionForm};
use std::collections::BTreeMap;

const DIFFICULTIES: [&str; 3] = ["1", "2", "3"];
const ANSWER_TYPES: [&str; 2] = ["Exact Match", "Multiple Choice"];

/// Character-count helper; the form accepts CJK text, so bytes would
/// over-count.
fn chars(s: &str) -> usize {
    s.trim().chars().count()
}

/// Validate the whole form. Returns a map from field to the translation
/// key of its error message; an empty map means the form is acceptable.
#[must_use]
pub fn validate(form: &SubmissionForm) -> BTreeMap<FormField, &'static str> {
    let mut errors = BTreeMap::new();

    if !DIFFICULTIES.contains(&form.difficulty.as_str()) {
        errors.insert(FormField::Difficulty, "submit.form.error.difficulty");
    }
    if !ANSWER_TYPES.contains(&form.answer_type.as_str()) {
        errors.insert(FormField::AnswerType, "submit.form.error.answer_type");
    }

    if chars(&form.question_text) < 10 {
        errors.insert(FormField::QuestionText, "submit.form.error.question_short");
    } else if form.question_text.chars().count() > 1000 {
        errors.insert(FormField::QuestionText, "submit.form.error.question_long");
    }

    if chars(&form.required_data) < 10 {
        errors.insert(FormField::RequiredData, "submit.form.error.required_data");
    }
    if chars(&form.answer) < 1 {
        errors.insert(FormField::Answer, "submit.form.error.answer");
    }

    if chars(&form.explanation) < 20 {
        errors.insert(FormField::Explanation, "submit.form.error.explanation_short");
    } else if form.explanation.chars().count() > 2000 {
        errors.insert(FormField::Explanation, "submit.form.error.explanation_long");
    }

    if chars(&form.source_reference) < 5 {
        errors.insert(
            FormField::SourceReference,
            "submit.form.error.source_reference",
        );
    }
    if chars(&form.thematic_direction) < 5 {
        errors.insert(
            FormField::ThematicDirection,
            "submit.form.error.thematic_direction",
        );
    }
    if chars(&form.contributor_name) < 2 {
        errors.insert(FormField::ContributorName, "submit.form.error.name");
    }
    if chars(&form.contributor_affiliation) < 2 {
        errors.insert(
            FormField::ContributorAffiliation,
            "submit.form.error.affiliation",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SubmissionForm {
        SubmissionForm {
            difficulty: "2".to_string(),
            answer_type: "Exact Match".to_string(),
            question_text: "According to the inscription, when was the stele erected?".to_string(),
            required_data: "Photograph of the dedication face.".to_string(),
            answer: "498 CE".to_string(),
            explanation: "The Taihe reign period year 22 corresponds to 498 CE.".to_string(),
            source_reference: "Collected Northern Wei Epigraphy, vol. 2.".to_string(),
            thematic_direction: "Epigraphy".to_string(),
            contributor_name: "A. Historian".to_string(),
            contributor_affiliation: "Fudan University".to_string(),
        }
    }

    #[test]
    fn a_complete_form_passes() {
        assert!(validate(&filled_form()).is_empty());
    }

    #[test]
    fn an_empty_form_flags_every_field() {
        let errors = validate(&SubmissionForm::default());
        assert_eq!(errors.len(), 10);
    }

    #[test]
    fn difficulty_and_answer_type_are_closed_sets() {
        let mut form = filled_form();
        form.difficulty = "4".to_string();
        form.answer_type = "Essay".to_string();
        let errors = validate(&form);
        assert_eq!(
            errors.get(&FormField::Difficulty),
            Some(&"submit.form.error.difficulty")
        );
        assert_eq!(
            errors.get(&FormField::AnswerType),
            Some(&"submit.form.error.answer_type")
        );
    }

    #[test]
    fn length_bounds_apply_on_both_ends() {
        let mut form = filled_form();
        form.question_text = "short".to_string();
        assert_eq!(
            validate(&form).get(&FormField::QuestionText),
            Some(&"submit.form.error.question_short")
        );

        form.question_text = "长".repeat(1001);
        assert_eq!(
            validate(&form).get(&FormField::QuestionText),
            Some(&"submit.form.error.question_long")
        );

        form = filled_form();
        form.explanation = "e".repeat(2001);
        assert_eq!(
            validate(&form).get(&FormField::Explanation),
            Some(&"submit.form.error.explanation_long")
        );
    }

    #[test]
    fn whitespace_does_not_count_toward_minimums() {
        let mut form = filled_form();
        form.answer = "   ".to_string();
        assert_eq!(
            validate(&form).get(&FormField::Answer),
            Some(&"submit.form.error.answer")
        );
    }

    #[test]
    fn cjk_text_is_counted_by_characters() {
        let mut form = filled_form();
        // Ten CJK characters are well past 10 bytes but exactly at the
        // character minimum.
        form.question_text = "该碑立于哪一年请考证".to_string();
        assert!(validate(&form).get(&FormField::QuestionText).is_none());
    }
}
