use serde::{Deserialize, Serialize};

use crate::{QuestionId, SkipLogic};

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier used as the key in `Responses` and by skip-logic conditions.
    id: QuestionId,

    /// The prompt text shown to the respondent.
    text: String,

    /// The kind of question (determines the input widget and answer shape).
    #[serde(rename = "type")]
    kind: QuestionKind,

    /// Choices for Radio and Checkbox questions, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<ChoiceOption>,

    /// Whether an answer is mandatory while the question is visible.
    #[serde(default)]
    required: bool,

    /// Conditional-visibility rule referencing an earlier question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skip_logic: Option<SkipLogic>,
}

impl Question {
    /// Create a new optional question without options or skip logic.
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            options: Vec::new(),
            required: false,
            skip_logic: None,
        }
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the choices offered by a Radio or Checkbox question.
    pub fn with_options(mut self, options: impl IntoIterator<Item = ChoiceOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Attach a skip-logic rule.
    pub fn with_skip_logic(mut self, skip_logic: SkipLogic) -> Self {
        self.skip_logic = Some(skip_logic);
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Get the choices.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Check if the question is required while visible.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the skip-logic rule, if any.
    pub fn skip_logic(&self) -> Option<&SkipLogic> {
        self.skip_logic.as_ref()
    }
}

/// The kind of question, determining input type and answer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Single-line text input.
    Text,

    /// Multi-line text input.
    Textarea,

    /// Pick exactly one option.
    Radio,

    /// Pick any number of options; answered with a list of option values.
    Checkbox,

    /// Numeric rating; the scale starts at 1.
    Rating,
}

impl QuestionKind {
    /// Check if this kind offers a list of options.
    pub fn has_options(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }

    /// The name used in survey documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Rating => "rating",
        }
    }
}

/// One choice of a Radio or Checkbox question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Label shown to the respondent.
    pub text: String,

    /// Value stored in the answer when this choice is picked.
    pub value: String,
}

impl ChoiceOption {
    /// Create a new choice with distinct label and value.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }

    /// Create a choice whose label doubles as its value.
    pub fn labelled(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{Condition, Operator};

    #[test]
    fn reads_persisted_shape() {
        let question: Question = serde_json::from_value(json!({
            "id": "q2",
            "text": "Why not?",
            "type": "textarea",
            "required": true,
            "skipLogic": {
                "enabled": true,
                "condition": { "questionId": "q1", "operator": "equals", "value": "No" }
            }
        }))
        .unwrap();

        let expected = Question::new("q2", "Why not?", QuestionKind::Textarea)
            .required()
            .with_skip_logic(SkipLogic::when(Condition::new(
                "q1",
                Operator::Equals,
                "No",
            )));
        assert_eq!(question, expected);
    }

    #[test]
    fn defaults_for_missing_fields() {
        let question: Question =
            serde_json::from_value(json!({ "id": "q1", "text": "Name?", "type": "text" }))
                .unwrap();

        assert!(!question.is_required());
        assert!(question.options().is_empty());
        assert!(question.skip_logic().is_none());
    }

    #[test]
    fn writes_options_only_when_present() {
        let radio = Question::new("q1", "Pick", QuestionKind::Radio)
            .with_options([ChoiceOption::labelled("Yes"), ChoiceOption::labelled("No")]);
        let text = Question::new("q2", "Say", QuestionKind::Text);

        let radio = serde_json::to_value(&radio).unwrap();
        let text = serde_json::to_value(&text).unwrap();

        assert_eq!(radio["options"][1], json!({ "text": "No", "value": "No" }));
        assert!(text.get("options").is_none());
        assert!(text.get("skipLogic").is_none());
    }
}
