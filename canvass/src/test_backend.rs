//! Test backend for running surveys without a respondent.
//!
//! `TestBackend` walks a survey the way a respondent filling in the form
//! would: top to bottom, answering only the questions currently shown. This
//! is useful for testing skip logic and submission rules end to end.
//!
//! # Example
//!
//! ```rust
//! use canvass::{Question, QuestionKind, SurveyDefinition, TestBackend};
//!
//! let survey = SurveyDefinition::new(
//!     "Contact",
//!     vec![Question::new("email", "Email address:", QuestionKind::Text).required()],
//! );
//!
//! let responses = canvass::submit(
//!     &survey,
//!     &TestBackend::new().with_answer("email", "ada@example.com"),
//! )
//! .unwrap();
//!
//! assert_eq!(responses.get_text(&"email".into()).unwrap(), "ada@example.com");
//! ```

use std::collections::HashMap;

use crate::{QuestionId, ResponseValue, Responses, SurveyBackend, SurveyDefinition, SurveyError};

/// A test backend that answers from a script.
///
/// Scripted answers for questions that stay hidden are never given, just as a
/// respondent never sees those questions. Questions without a scripted answer
/// are left blank.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    answers: HashMap<QuestionId, ResponseValue>,
    cancel_at: Option<QuestionId>,
}

impl TestBackend {
    /// Create a new backend with an empty script.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            cancel_at: None,
        }
    }

    /// Script the answer for a question.
    pub fn with_answer(
        mut self,
        id: impl Into<QuestionId>,
        value: impl Into<ResponseValue>,
    ) -> Self {
        self.answers.insert(id.into(), value.into());
        self
    }

    /// Script a text answer.
    pub fn with_text(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_answer(id, ResponseValue::Text(value.into()))
    }

    /// Script a rating.
    pub fn with_rating(self, id: impl Into<QuestionId>, value: i64) -> Self {
        self.with_answer(id, value)
    }

    /// Script checkbox selections.
    pub fn with_selections(self, id: impl Into<QuestionId>, values: &[&str]) -> Self {
        self.with_answer(id, values.to_vec())
    }

    /// Abandon the survey when this question is reached (if it is shown).
    pub fn cancel_at(mut self, id: impl Into<QuestionId>) -> Self {
        self.cancel_at = Some(id.into());
        self
    }
}

impl SurveyBackend for TestBackend {
    type Error = SurveyError;

    fn collect(&self, definition: &SurveyDefinition) -> Result<Responses, Self::Error> {
        let mut responses = Responses::new();

        for question in definition.questions() {
            if !definition.is_visible(question, &responses) {
                continue;
            }

            if self.cancel_at.as_ref() == Some(question.id()) {
                return Err(SurveyError::Cancelled);
            }

            if let Some(value) = self.answers.get(question.id()) {
                responses.insert(question.id(), value.clone());
            }
        }

        Ok(responses)
    }
}
