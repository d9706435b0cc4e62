use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{QuestionId, ResponseValue};

/// Error type for response access operations.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing response for question: {0}")]
    MissingAnswer(QuestionId),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected from one respondent, keyed by question id.
///
/// A question without an entry has not been answered yet. In JSON the
/// collection is a plain object; `null` members are read as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    values: HashMap<QuestionId, ResponseValue>,
}

impl Responses {
    /// Create a new empty responses collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record the answer for a question, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<ResponseValue>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&ResponseValue> {
        self.values.get(id)
    }

    /// Check if an answer exists for a question (it may still be blank).
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text answer.
    pub fn get_text(&self, id: &QuestionId) -> Result<&str, ResponseError> {
        match self.get(id) {
            Some(ResponseValue::Text(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingAnswer(id.clone())),
        }
    }

    /// Get a numeric answer.
    pub fn get_number(&self, id: &QuestionId) -> Result<f64, ResponseError> {
        match self.get(id) {
            Some(ResponseValue::Number(n)) => Ok(*n),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.clone(),
                expected: "Number",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingAnswer(id.clone())),
        }
    }

    /// Get the selected values of a checkbox answer.
    pub fn get_list(&self, id: &QuestionId) -> Result<&[String], ResponseError> {
        match self.get(id) {
            Some(ResponseValue::List(items)) => Ok(items),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.clone(),
                expected: "List",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingAnswer(id.clone())),
        }
    }

    /// Check if a question has a non-blank answer.
    ///
    /// Returns `false` if the answer is missing, an empty string, or an empty
    /// list. Any number counts as an answer.
    pub fn has_answer(&self, id: &QuestionId) -> bool {
        self.get(id).is_some_and(|value| !value.is_blank())
    }
}

impl<K, V> FromIterator<(K, V)> for Responses
where
    K: Into<QuestionId>,
    V: Into<ResponseValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut responses = Responses::new();
        for (id, value) in iter {
            responses.insert(id, value);
        }
        responses
    }
}

impl Serialize for Responses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.values)
    }
}

impl<'de> Deserialize<'de> for Responses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<QuestionId, Option<ResponseValue>>::deserialize(deserializer)?;
        let values = raw
            .into_iter()
            .filter_map(|(id, value)| value.map(|value| (id, value)))
            .collect();
        Ok(Self { values })
    }
}
