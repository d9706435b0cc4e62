use canvass::{
    ChoiceOption, Condition, Operator, Question, QuestionKind, SkipLogic, SurveyDefinition,
};

/// Two-question feedback form: the follow-up only appears for attendees.
pub fn event_feedback() -> SurveyDefinition {
    SurveyDefinition::new(
        "Meetup feedback",
        vec![
            Question::new("attended", "Did you attend the meetup?", QuestionKind::Radio)
                .with_options([ChoiceOption::labelled("Yes"), ChoiceOption::labelled("No")])
                .required(),
            Question::new("highlight", "What was the highlight?", QuestionKind::Text)
                .required()
                .with_skip_logic(SkipLogic::when(Condition::new(
                    "attended",
                    Operator::Equals,
                    "Yes",
                ))),
        ],
    )
    .with_closing_message("Thanks for letting us know!")
}
