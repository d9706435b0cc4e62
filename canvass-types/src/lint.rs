use std::collections::HashSet;

use crate::{Operator, QuestionId, QuestionKind, SkipLogic, SurveyDefinition};

/// A problem found in a survey definition before it is published.
///
/// None of these stop the survey from being answered: the evaluator shows
/// questions whose rules it cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionIssue {
    #[error("question id '{0}' is used more than once")]
    DuplicateId(QuestionId),

    #[error("question '{question}' depends on '{depends_on}', which does not exist")]
    UnknownSource {
        question: QuestionId,
        depends_on: QuestionId,
    },

    #[error("question '{0}' depends on its own answer")]
    SelfReference(QuestionId),

    #[error("question '{question}' depends on '{depends_on}', which comes after it")]
    ForwardReference {
        question: QuestionId,
        depends_on: QuestionId,
    },

    #[error("{kind} question '{question}' has no options")]
    MissingOptions {
        question: QuestionId,
        kind: &'static str,
    },

    #[error("question '{question}' uses '{operator}' without a value to compare")]
    MissingComparand {
        question: QuestionId,
        operator: &'static str,
    },

    #[error("question '{question}' uses '{operator}' on '{depends_on}', which is not a checkbox question")]
    ListOperatorOnScalar {
        question: QuestionId,
        depends_on: QuestionId,
        operator: &'static str,
    },

    #[error("question '{0}' uses an unknown skip-logic operator")]
    UnknownOperator(QuestionId),
}

impl SurveyDefinition {
    /// Report every authoring problem, in question order.
    pub fn lint(&self) -> Vec<DefinitionIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (position, question) in self.questions.iter().enumerate() {
            let id = question.id();
            if !seen.insert(id) {
                issues.push(DefinitionIssue::DuplicateId(id.clone()));
            }

            if question.kind().has_options() && question.options().is_empty() {
                issues.push(DefinitionIssue::MissingOptions {
                    question: id.clone(),
                    kind: question.kind().as_str(),
                });
            }

            let Some(condition) = question.skip_logic().and_then(SkipLogic::active_condition)
            else {
                continue;
            };
            let source_id = &condition.question_id;
            let operator = condition.operator;

            if operator == Operator::Unknown {
                issues.push(DefinitionIssue::UnknownOperator(id.clone()));
            } else if operator.needs_value() && condition.value.is_none() {
                issues.push(DefinitionIssue::MissingComparand {
                    question: id.clone(),
                    operator: operator.as_str(),
                });
            }

            if source_id == id {
                issues.push(DefinitionIssue::SelfReference(id.clone()));
                continue;
            }

            let Some(source_position) = self.position(source_id) else {
                issues.push(DefinitionIssue::UnknownSource {
                    question: id.clone(),
                    depends_on: source_id.clone(),
                });
                continue;
            };

            if source_position > position {
                issues.push(DefinitionIssue::ForwardReference {
                    question: id.clone(),
                    depends_on: source_id.clone(),
                });
            }

            let source = &self.questions[source_position];
            if operator.expects_list() && source.kind() != QuestionKind::Checkbox {
                issues.push(DefinitionIssue::ListOperatorOnScalar {
                    question: id.clone(),
                    depends_on: source_id.clone(),
                    operator: operator.as_str(),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ChoiceOption, Condition, ConditionValue, Question};

    fn yes_no(id: &str) -> Question {
        Question::new(id, "Yes or no?", QuestionKind::Radio)
            .with_options([ChoiceOption::labelled("Yes"), ChoiceOption::labelled("No")])
    }

    #[test]
    fn clean_survey_has_no_issues() {
        let survey = SurveyDefinition::new(
            "Clean",
            vec![
                yes_no("q1"),
                Question::new("q2", "Why?", QuestionKind::Text).with_skip_logic(SkipLogic::when(
                    Condition::new("q1", Operator::Equals, "Yes"),
                )),
            ],
        );

        assert_eq!(survey.lint(), Vec::new());
    }

    #[test]
    fn reports_reference_problems() {
        let survey = SurveyDefinition::new(
            "Broken",
            vec![
                Question::new("q1", "First", QuestionKind::Text)
                    .with_skip_logic(SkipLogic::when(Condition::answered("q3"))),
                Question::new("q2", "Second", QuestionKind::Text)
                    .with_skip_logic(SkipLogic::when(Condition::answered("q2"))),
                Question::new("q3", "Third", QuestionKind::Text)
                    .with_skip_logic(SkipLogic::when(Condition::answered("gone"))),
            ],
        );

        assert_eq!(
            survey.lint(),
            vec![
                DefinitionIssue::ForwardReference {
                    question: "q1".into(),
                    depends_on: "q3".into(),
                },
                DefinitionIssue::SelfReference("q2".into()),
                DefinitionIssue::UnknownSource {
                    question: "q3".into(),
                    depends_on: "gone".into(),
                },
            ]
        );
    }

    #[test]
    fn disabled_rules_are_not_checked() {
        let survey = SurveyDefinition::new(
            "Disabled",
            vec![
                Question::new("q1", "First", QuestionKind::Text)
                    .with_skip_logic(SkipLogic::disabled(Condition::answered("gone"))),
            ],
        );

        assert!(survey.lint().is_empty());
    }

    #[test]
    fn reports_shape_problems() {
        let survey = SurveyDefinition::new(
            "Shapes",
            vec![
                yes_no("q1"),
                Question::new("q1", "Again", QuestionKind::Text),
                Question::new("q3", "Pick some", QuestionKind::Checkbox),
                Question::new("q4", "Hm", QuestionKind::Text).with_skip_logic(SkipLogic::when(
                    Condition::new("q1", Operator::Contains, "Yes"),
                )),
                Question::new("q5", "Hm", QuestionKind::Text).with_skip_logic(SkipLogic::when(
                    Condition {
                        question_id: "q1".into(),
                        operator: Operator::NotEquals,
                        value: None,
                    },
                )),
            ],
        );

        assert_eq!(
            survey.lint(),
            vec![
                DefinitionIssue::DuplicateId("q1".into()),
                DefinitionIssue::MissingOptions {
                    question: "q3".into(),
                    kind: "checkbox",
                },
                DefinitionIssue::ListOperatorOnScalar {
                    question: "q4".into(),
                    depends_on: "q1".into(),
                    operator: "contains",
                },
                DefinitionIssue::MissingComparand {
                    question: "q5".into(),
                    operator: "not_equals",
                },
            ]
        );
    }

    #[test]
    fn reports_unknown_operator() {
        let survey = SurveyDefinition::new(
            "Unknown",
            vec![
                yes_no("q1"),
                Question::new("q2", "Hm", QuestionKind::Text).with_skip_logic(SkipLogic::when(
                    Condition {
                        question_id: "q1".into(),
                        operator: Operator::Unknown,
                        value: Some(ConditionValue::from("Yes")),
                    },
                )),
            ],
        );

        let issues = survey.lint();
        assert_eq!(issues, vec![DefinitionIssue::UnknownOperator("q2".into())]);
        assert_eq!(
            issues[0].to_string(),
            "question 'q2' uses an unknown skip-logic operator"
        );
    }
}
