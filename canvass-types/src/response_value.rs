use serde::{Deserialize, Serialize};

/// A single answer collected from a respondent.
///
/// This is the value stored in `Responses` for each answered question. The
/// shape follows the kind of question answered: numbers for `rating`, lists
/// for `checkbox`, text for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// A numeric answer (from Rating questions).
    Number(f64),

    /// A text answer (from Text, Textarea, or Radio questions).
    Text(String),

    /// The selected option values of a Checkbox question.
    List(Vec<String>),
}

impl ResponseValue {
    /// Check if this value carries no answer: an empty string or an empty list.
    ///
    /// Numbers are never blank, including `0`.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    /// Interpret this value as a number for comparison purposes.
    ///
    /// Text is parsed after trimming surrounding whitespace. Lists and
    /// unparsable text have no numeric interpretation.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::List(_) => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Text(_) => "Text",
            Self::List(_) => "List",
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for ResponseValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for ResponseValue {
    fn from(i: i64) -> Self {
        Self::Number(i as f64)
    }
}

impl From<i32> for ResponseValue {
    fn from(i: i32) -> Self {
        Self::Number(f64::from(i))
    }
}

impl From<Vec<String>> for ResponseValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for ResponseValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}
