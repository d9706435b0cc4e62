use canvass::{
    ChoiceOption, Condition, Operator, Question, QuestionKind, SkipLogic, SurveyDefinition,
};

/// Product research survey exercising every skip-logic operator.
///
/// - `platforms` is a checkbox; `mobile_issues` appears when it contains `mobile`
/// - `desktop_wish` appears unless `desktop` was picked
/// - `rating_reason` appears only for a rating of exactly 1
/// - `contact_ok` appears once `improvement` has been answered
/// - `contact_email` appears when `contact_ok` is anything but "No"
pub fn product_research() -> SurveyDefinition {
    SurveyDefinition::new(
        "Product research",
        vec![
            Question::new("platforms", "Where do you use the app?", QuestionKind::Checkbox)
                .with_options([
                    ChoiceOption::new("Phone or tablet", "mobile"),
                    ChoiceOption::new("Desktop", "desktop"),
                    ChoiceOption::new("Browser", "web"),
                ])
                .required(),
            Question::new("mobile_issues", "What bothers you on mobile?", QuestionKind::Textarea)
                .with_skip_logic(SkipLogic::when(Condition::new(
                    "platforms",
                    Operator::Contains,
                    "mobile",
                ))),
            Question::new(
                "desktop_wish",
                "What would make you install the desktop app?",
                QuestionKind::Text,
            )
            .with_skip_logic(SkipLogic::when(Condition::new(
                "platforms",
                Operator::NotContains,
                "desktop",
            ))),
            Question::new("rating", "How would you rate the app overall?", QuestionKind::Rating)
                .required(),
            Question::new(
                "rating_reason",
                "Sorry to hear that. What went wrong?",
                QuestionKind::Textarea,
            )
            .required()
            .with_skip_logic(SkipLogic::when(Condition::new(
                "rating",
                Operator::Equals,
                1,
            ))),
            Question::new("improvement", "One thing we should improve?", QuestionKind::Text),
            Question::new("contact_ok", "May we follow up with you?", QuestionKind::Radio)
                .with_options([ChoiceOption::labelled("Yes"), ChoiceOption::labelled("No")])
                .with_skip_logic(SkipLogic::when(Condition::answered("improvement"))),
            Question::new("contact_email", "Your email address:", QuestionKind::Text)
                .required()
                .with_skip_logic(SkipLogic::when(Condition::new(
                    "contact_ok",
                    Operator::NotEquals,
                    "No",
                ))),
        ],
    )
    .with_description("Five minutes of your time helps us decide what to build next.")
}
