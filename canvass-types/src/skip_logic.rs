use serde::{Deserialize, Serialize};

use crate::{QuestionId, ResponseValue};

/// Conditional-visibility rule attached to a question.
///
/// A rule that is disabled, or enabled without a condition, never hides its
/// question.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkipLogic {
    /// Whether the rule is in effect.
    #[serde(default)]
    pub enabled: bool,

    /// The condition under which the question is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl SkipLogic {
    /// Create an enabled rule showing the question only when `condition` is met.
    pub fn when(condition: Condition) -> Self {
        Self {
            enabled: true,
            condition: Some(condition),
        }
    }

    /// Create a disabled rule that keeps `condition` around for later use.
    pub fn disabled(condition: Condition) -> Self {
        Self {
            enabled: false,
            condition: Some(condition),
        }
    }

    /// The condition to evaluate, if the rule is enabled and has one.
    pub fn active_condition(&self) -> Option<&Condition> {
        if self.enabled {
            self.condition.as_ref()
        } else {
            None
        }
    }
}

/// A comparison against the answer to an earlier (source) question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// The source question whose answer is inspected.
    pub question_id: QuestionId,

    /// How the source answer is compared.
    pub operator: Operator,

    /// The comparand. Not used by `is_answered`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConditionValue>,
}

impl Condition {
    /// Create a condition with a comparand.
    pub fn new(
        question_id: impl Into<QuestionId>,
        operator: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            operator,
            value: Some(value.into()),
        }
    }

    /// Create an `is_answered` condition.
    pub fn answered(question_id: impl Into<QuestionId>) -> Self {
        Self {
            question_id: question_id.into(),
            operator: Operator::IsAnswered,
            value: None,
        }
    }

    /// Evaluate the condition against the source question's answer.
    ///
    /// `source` is `None` when the source question has not been answered.
    /// Never fails: `equals` and `not_equals` are unmet for an unset source,
    /// an unknown operator is always met.
    pub fn is_met(&self, source: Option<&ResponseValue>) -> bool {
        let value = self.value.as_ref();
        match self.operator {
            Operator::Equals => !is_unset(source) && source.is_some_and(|s| loose_eq(s, value)),
            Operator::NotEquals => !is_unset(source) && source.is_some_and(|s| !loose_eq(s, value)),
            Operator::Contains => match source {
                Some(ResponseValue::List(items)) => includes(items, value),
                _ => false,
            },
            Operator::NotContains => match source {
                Some(ResponseValue::List(items)) => !includes(items, value),
                _ => true,
            },
            Operator::IsAnswered => source.is_some_and(|s| !s.is_blank()),
            Operator::Unknown => {
                tracing::debug!(
                    source = %self.question_id,
                    "unknown skip-logic operator, treating as met"
                );
                true
            }
        }
    }
}

/// Comparison applied by a `Condition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    IsAnswered,

    /// Any operator name this version does not know.
    #[serde(other)]
    Unknown,
}

impl Operator {
    /// The name used in survey documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::Contains => "contains",
            Self::NotContains => "not_contains",
            Self::IsAnswered => "is_answered",
            Self::Unknown => "unknown",
        }
    }

    /// Check if the operator inspects a list answer.
    pub fn expects_list(self) -> bool {
        matches!(self, Self::Contains | Self::NotContains)
    }

    /// Check if the operator needs a comparand.
    pub fn needs_value(self) -> bool {
        matches!(
            self,
            Self::Equals | Self::NotEquals | Self::Contains | Self::NotContains
        )
    }
}

/// The comparand of a condition: a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Number(f64),
    Text(String),
}

impl ConditionValue {
    /// Interpret the comparand as a number, parsing text after trimming.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for ConditionValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for ConditionValue {
    fn from(i: i64) -> Self {
        Self::Number(i as f64)
    }
}

impl From<i32> for ConditionValue {
    fn from(i: i32) -> Self {
        Self::Number(f64::from(i))
    }
}

/// An answer that cannot take part in an equality check.
///
/// Missing answers, empty strings and NaN are unset; `0` and empty lists are not.
fn is_unset(source: Option<&ResponseValue>) -> bool {
    match source {
        None => true,
        Some(ResponseValue::Text(s)) => s.is_empty(),
        Some(ResponseValue::Number(n)) => n.is_nan(),
        Some(ResponseValue::List(_)) => false,
    }
}

/// Equality with numeric coercion whenever either side is a number.
fn loose_eq(source: &ResponseValue, value: Option<&ConditionValue>) -> bool {
    let Some(value) = value else {
        return false;
    };

    if matches!(source, ResponseValue::Number(_)) || matches!(value, ConditionValue::Number(_)) {
        return match (source.to_number(), value.to_number()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
    }

    match (source, value) {
        (ResponseValue::Text(a), ConditionValue::Text(b)) => a == b,
        _ => false,
    }
}

/// List membership; only text comparands can match selected option values.
fn includes(items: &[String], value: Option<&ConditionValue>) -> bool {
    match value {
        Some(ConditionValue::Text(wanted)) => items.iter().any(|item| item == wanted),
        _ => false,
    }
}
