use crate::classify::scorecard::{parse_model_str, ScorecardModel};
use crate::error::NutriCareError;

const VITALS_SCORECARD_JSON: &str = include_str!("../../../../models/vitals-scorecard.json");

/// Available predefined models.
pub const PRESETS: &[&str] = &["vitals"];

/// Load a predefined model by name.
pub fn load_preset(name: &str) -> Result<ScorecardModel, NutriCareError> {
    match name {
        "vitals" => parse_model_str(VITALS_SCORECARD_JSON),
        _ => Err(NutriCareError::ModelInvalid(format!(
            "unknown model '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
