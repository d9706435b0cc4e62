//! # canvass
//!
//! Survey definitions with skip logic. Backend-agnostic.
//!
//! A survey is an ordered list of questions. A question may carry a skip-logic
//! rule that shows it only when an earlier answer satisfies a condition; a
//! hidden question is also exempt from its `required` flag. The same
//! evaluation drives the response form (what to show, how far along the
//! respondent is) and the submission check (what must be answered).
//!
//! ## Usage
//!
//! ```rust
//! use canvass::{
//!     ChoiceOption, Condition, Operator, Question, QuestionKind, SkipLogic, SurveyDefinition,
//!     TestBackend,
//! };
//!
//! let survey = SurveyDefinition::new(
//!     "Feedback",
//!     vec![
//!         Question::new("liked", "Did you enjoy the event?", QuestionKind::Radio)
//!             .with_options([ChoiceOption::labelled("Yes"), ChoiceOption::labelled("No")])
//!             .required(),
//!         Question::new("why_not", "What went wrong?", QuestionKind::Textarea)
//!             .required()
//!             .with_skip_logic(SkipLogic::when(Condition::new(
//!                 "liked",
//!                 Operator::Equals,
//!                 "No",
//!             ))),
//!     ],
//! );
//!
//! let responses = canvass::submit(&survey, &TestBackend::new().with_answer("liked", "Yes"))
//!     .unwrap();
//! assert_eq!(responses.len(), 1);
//! ```
//!
//! ## Skip-logic operators
//!
//! - `equals` / `not_equals` - compare a single answer; numeric when either
//!   side is a number. Both are unmet while the source is unanswered.
//! - `contains` / `not_contains` - look for a value among checkbox selections.
//!   `not_contains` is met while the source holds no list.
//! - `is_answered` - the source has a non-blank answer.
//!
//! Rules pointing at a question that does not exist, and operators this
//! version does not know, never hide anything.
//!
//! ## Backends
//!
//! Backends implement `SurveyBackend`:
//! - `TestBackend` - scripted answers, for tests
//! - `canvass-cli` reads answers from a JSON document

// Re-export all types from canvass-types
pub use canvass_types::*;

// Test backend for running surveys without a respondent
mod test_backend;
pub use test_backend::TestBackend;

/// Collect answers through `backend` and accept them only if they pass the
/// submission check.
///
/// Nothing is returned on rejection: a submission is accepted whole or not at
/// all.
pub fn submit<B: SurveyBackend>(
    definition: &SurveyDefinition,
    backend: &B,
) -> Result<Responses, SurveyError> {
    let responses = backend.collect(definition).map_err(|err| {
        let err: anyhow::Error = err.into();
        err.downcast::<SurveyError>().unwrap_or_else(SurveyError::Backend)
    })?;

    definition.validate_submission(&responses)?;

    tracing::debug!(
        survey = %definition.title,
        answers = responses.len(),
        "submission accepted"
    );
    Ok(responses)
}
