use crate::SubmissionError;

/// Error type for running a survey to completion.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// Respondent abandoned the survey before submitting.
    #[error("Survey cancelled by respondent")]
    Cancelled,

    /// The collected answers failed the submission check.
    #[error("Submission rejected: {0}")]
    Rejected(#[from] SubmissionError),

    /// Backend-specific failure (I/O, malformed answer document, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Check if this error represents respondent cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The submission failure, if the answers were rejected.
    pub fn rejection(&self) -> Option<&SubmissionError> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }
}
