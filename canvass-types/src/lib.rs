//! Core types for the canvass crate.
//!
//! This crate provides the foundational types for defining and answering surveys:
//! - `SurveyDefinition` - The top-level survey structure
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `SkipLogic` and `Condition` - Conditional visibility based on earlier answers
//! - `Responses` and `ResponseValue` - Collected answers keyed by `QuestionId`
//! - `Progress` and `SubmissionError` - What the respondent sees, and whether they may submit
//! - `SurveyBackend` trait - For implementing ways of collecting answers

mod question_id;
pub use question_id::QuestionId;

mod response_value;
pub use response_value::ResponseValue;

mod responses;
pub use responses::{ResponseError, Responses};

mod question;
pub use question::{ChoiceOption, Question, QuestionKind};

mod skip_logic;
pub use skip_logic::{Condition, ConditionValue, Operator, SkipLogic};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod visibility;
pub use visibility::Progress;

mod validation;
pub use validation::SubmissionError;

mod lint;
pub use lint::DefinitionIssue;

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::SurveyBackend;
