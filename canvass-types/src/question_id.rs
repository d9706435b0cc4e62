use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier of a question, unique within its survey.
///
/// Used as the key in `Responses` and as the reference target of skip-logic
/// conditions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a new id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
