//! Ready-made surveys used by the tests and the `canvass example` command.

use canvass::SurveyDefinition;

pub mod event_feedback;
pub mod product_research;

pub use event_feedback::event_feedback;
pub use product_research::product_research;

/// Survey document in the persisted JSON shape.
pub const CUSTOMER_SATISFACTION_JSON: &str = include_str!("../surveys/customer_satisfaction.json");

/// Imported survey with a dangling reference, an unknown operator and a
/// radio question without options.
pub const LEGACY_ONBOARDING_JSON: &str = include_str!("../surveys/legacy_onboarding.json");

/// Parse the customer satisfaction survey.
pub fn customer_satisfaction() -> Result<SurveyDefinition, serde_json::Error> {
    serde_json::from_str(CUSTOMER_SATISFACTION_JSON)
}

/// Parse the legacy onboarding survey.
pub fn legacy_onboarding() -> Result<SurveyDefinition, serde_json::Error> {
    serde_json::from_str(LEGACY_ONBOARDING_JSON)
}

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &[
    "event-feedback",
    "product-research",
    "customer-satisfaction",
    "legacy-onboarding",
];

/// Look up an example survey by name.
pub fn by_name(name: &str) -> Option<Result<SurveyDefinition, serde_json::Error>> {
    match name {
        "event-feedback" => Some(Ok(event_feedback())),
        "product-research" => Some(Ok(product_research())),
        "customer-satisfaction" => Some(customer_satisfaction()),
        "legacy-onboarding" => Some(legacy_onboarding()),
        _ => None,
    }
}
