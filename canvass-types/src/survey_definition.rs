use serde::{Deserialize, Serialize};

use crate::{Question, QuestionId};

/// The top-level structure containing all questions and metadata for a survey.
///
/// Questions are kept in display order. The definition is presentation-agnostic:
/// the same value drives the response form and the submission check.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDefinition {
    /// Title shown above the survey.
    #[serde(default)]
    pub title: String,

    /// Optional message shown before the first question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional message shown after a submission is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_message: Option<String>,

    /// All questions, in display order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given title and questions.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            description: None,
            closing_message: None,
            questions,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the closing message.
    pub fn with_closing_message(mut self, message: impl Into<String>) -> Self {
        self.closing_message = Some(message.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Find a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Position of a question in display order.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::QuestionKind;

    #[test]
    fn lookup_by_id() {
        let survey = SurveyDefinition::new(
            "Lunch",
            vec![
                Question::new("q1", "Hungry?", QuestionKind::Radio),
                Question::new("q2", "What for?", QuestionKind::Text),
            ],
        );

        assert_eq!(survey.question(&"q2".into()).map(Question::text), Some("What for?"));
        assert_eq!(survey.position(&"q2".into()), Some(1));
        assert!(survey.question(&"q3".into()).is_none());
    }

    #[test]
    fn reads_document() {
        let survey: SurveyDefinition = serde_json::from_value(json!({
            "title": "Lunch",
            "closingMessage": "Thanks!",
            "questions": [{ "id": "q1", "text": "Hungry?", "type": "rating" }]
        }))
        .unwrap();

        assert_eq!(survey.title, "Lunch");
        assert_eq!(survey.closing_message.as_deref(), Some("Thanks!"));
        assert_eq!(survey.description, None);
        assert_eq!(survey.len(), 1);
        assert_eq!(survey.questions()[0].kind(), QuestionKind::Rating);
    }
}
