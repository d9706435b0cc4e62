use crate::{Responses, SurveyDefinition};

/// Trait for backend implementations that collect survey responses.
///
/// Backends receive a `SurveyDefinition` and return `Responses`. They decide
/// how to present the survey (response form, scripted respondent, answer file)
/// and should only offer questions for which
/// [`SurveyDefinition::is_visible`] holds.
///
/// Backends do not enforce required questions; the submission check does
/// that once collection is over.
pub trait SurveyBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Collect responses for a survey.
    ///
    /// # Returns
    /// * `Ok(responses)` once the respondent submits
    /// * `Err` on cancellation or backend failure
    fn collect(&self, definition: &SurveyDefinition) -> Result<Responses, Self::Error>;
}
