use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use canvass::{Responses, SurveyBackend, SurveyDefinition};

/// Backend that takes a respondent's answers from a JSON document.
///
/// The document is an object mapping question ids to answers, exactly as a
/// response form would submit it. Answers are passed through unfiltered so
/// that the submission check sees what the respondent sent.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SurveyBackend for FileBackend {
    type Error = anyhow::Error;

    fn collect(&self, definition: &SurveyDefinition) -> Result<Responses> {
        let responses = load_answers(&self.path)?;
        tracing::debug!(
            survey = %definition.title,
            answers = responses.len(),
            path = %self.path.display(),
            "loaded answers"
        );
        Ok(responses)
    }
}

pub fn load_answers(path: &Path) -> Result<Responses> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read answers from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid answer document", path.display()))
}

pub fn load_survey(path: &Path) -> Result<SurveyDefinition> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read survey from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid survey document", path.display()))
}
