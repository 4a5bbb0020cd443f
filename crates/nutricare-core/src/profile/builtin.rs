use crate::error::NutriCareError;
use crate::profile::schema::InferenceProfile;
use crate::profile::validate_profile;

const DEFAULT_PROFILE_JSON: &str = include_str!("../../../../profiles/default.json");

/// Available predefined profiles.
pub const PRESETS: &[&str] = &["default"];

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<InferenceProfile, NutriCareError> {
    match name {
        "default" => {
            let profile: InferenceProfile = serde_json::from_str(DEFAULT_PROFILE_JSON)?;
            validate_profile(&profile)?;
            Ok(profile)
        }
        _ => Err(NutriCareError::ProfileInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Condition;

    #[test]
    fn test_load_default_preset() {
        let profile = load_preset("default").unwrap();
        assert_eq!(profile.name_patterns.len(), 3);
        let order: Vec<Condition> = profile.rules.iter().map(|r| r.condition).collect();
        assert_eq!(
            order,
            vec![
                Condition::Diabetes,
                Condition::HighCholesterol,
                Condition::Hypertension
            ]
        );
        assert_eq!(
            profile.allowed_foods,
            vec!["vegetables", "whole grains", "fruits"]
        );
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
