use crate::{QuestionId, Responses, SurveyDefinition};

/// Why a submission was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// A required question was visible but left blank.
    #[error("Please answer the required question: \"{text}\"")]
    Unanswered { question_id: QuestionId, text: String },
}

impl SubmissionError {
    /// The id of the question the respondent has to fix.
    pub fn question_id(&self) -> &QuestionId {
        match self {
            Self::Unanswered { question_id, .. } => question_id,
        }
    }
}

impl SurveyDefinition {
    /// Check that every visible required question has a non-blank answer.
    ///
    /// Questions are checked in display order and the first failure is
    /// returned. Hidden questions are never checked, whether required or not.
    pub fn validate_submission(&self, responses: &Responses) -> Result<(), SubmissionError> {
        let missing = self
            .visible_questions(responses)
            .find(|question| question.is_required() && !responses.has_answer(question.id()));

        match missing {
            Some(question) => {
                tracing::debug!(
                    question = %question.id(),
                    "submission is missing a required answer"
                );
                Err(SubmissionError::Unanswered {
                    question_id: question.id().clone(),
                    text: question.text().to_string(),
                })
            }
            None => Ok(()),
        }
    }
}
