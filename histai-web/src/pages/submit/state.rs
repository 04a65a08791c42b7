use std::collections::BTreeMap;

pub const TOTAL_STEPS: u8 = 3;

/// The contribution payload, field for field what the functions endpoint
/// accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionForm {
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

/// Form fields addressable by the input callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Difficulty,
    AnswerType,
    QuestionText,
    RequiredData,
    Answer,
    Explanation,
    SourceReference,
    ThematicDirection,
    ContributorName,
    ContributorAffiliation,
}

impl SubmissionForm {
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Difficulty => &mut self.difficulty,
            FormField::AnswerType => &mut self.answer_type,
            FormField::QuestionText => &mut self.question_text,
            FormField::RequiredData => &mut self.required_data,
            FormField::Answer => &mut self.answer,
            FormField::Explanation => &mut self.explanation,
            FormField::SourceReference => &mut self.source_reference,
            FormField::ThematicDirection => &mut self.thematic_direction,
            FormField::ContributorName => &mut self.contributor_name,
            FormField::ContributorAffiliation => &mut self.contributor_affiliation,
        };
        *slot = value;
    }

    #[must_use]
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Difficulty => &self.difficulty,
            FormField::AnswerType => &self.answer_type,
            FormField::QuestionText => &self.question_text,
            FormField::RequiredData => &self.required_data,
            FormField::Answer => &self.answer,
            FormField::Explanation => &self.explanation,
            FormField::SourceReference => &self.source_reference,
            FormField::ThematicDirection => &self.thematic_direction,
            FormField::ContributorName => &self.contributor_name,
            FormField::ContributorAffiliation => &self.contributor_affiliation,
        }
        .clone()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Wizard state: current step, form contents, submission status, and
/// field-level validation errors (field → translation key).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    step: u8,
    pub form: SubmissionForm,
    pub status: SubmitStatus,
    pub errors: BTreeMap<FormField, &'static str>,
}

impl WizardState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn step(&self) -> u8 {
        // A default-constructed state still reports step 1.
        if self.step == 0 { 1 } else { self.step }
    }

    /// Jump to a step; out-of-range requests are ignored.
    #[must_use]
    pub fn with_step(mut self, step: u8) -> Self {
        if (1..=TOTAL_STEPS).contains(&step) {
            self.step = step;
        }
        self
    }

    #[must_use]
    pub fn next_step(self) -> Self {
        let step = self.step();
        self.with_step(step.saturating_add(1))
    }

    #[must_use]
    pub fn prev_step(self) -> Self {
        let step = self.step();
        self.with_step(step.saturating_sub(1))
    }

    #[must_use]
    pub fn with_field(mut self, field: FormField, value: String) -> Self {
        self.form.set(field, value);
        self.errors.remove(&field);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: SubmitStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_errors(mut self, errors: BTreeMap<FormField, &'static str>) -> Self {
        self.errors = errors;
        self
    }
}
