pub mod builtin;
pub mod schema;

use crate::error::NutriCareError;
use crate::inference::names::compile_pattern;
use crate::model::Condition;
use schema::InferenceProfile;
use std::path::Path;

/// Load a profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<InferenceProfile, NutriCareError> {
    let content = std::fs::read_to_string(path).map_err(|e| NutriCareError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<InferenceProfile, NutriCareError> {
    let profile: InferenceProfile =
        serde_json::from_str(json).map_err(|e| NutriCareError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<InferenceProfile, NutriCareError> {
    let profile: InferenceProfile = serde_json::from_str(json).map_err(NutriCareError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is well-formed.
pub fn validate_profile(profile: &InferenceProfile) -> Result<(), NutriCareError> {
    if profile.name_patterns.is_empty() {
        return Err(NutriCareError::ProfileInvalid(
            "name_patterns must not be empty".into(),
        ));
    }

    for pattern in &profile.name_patterns {
        let re = compile_pattern(pattern)?;
        if re.captures_len() < 2 {
            return Err(NutriCareError::InvalidPattern {
                pattern: pattern.clone(),
                reason: "pattern needs a capture group for the name".into(),
            });
        }
    }

    if profile.fallback.diet_advice.trim().is_empty() {
        return Err(NutriCareError::ProfileInvalid(
            "fallback diet_advice must not be empty".into(),
        ));
    }

    if profile.rules.is_empty() {
        return Err(NutriCareError::ProfileInvalid(
            "rules must not be empty".into(),
        ));
    }

    let mut seen: Vec<Condition> = Vec::new();
    for rule in &profile.rules {
        if rule.condition == Condition::GeneralHealth {
            return Err(NutriCareError::ProfileInvalid(
                "'General Health' is the fallback and cannot have keyword rules".into(),
            ));
        }

        if seen.contains(&rule.condition) {
            return Err(NutriCareError::ProfileInvalid(format!(
                "condition '{}' has more than one rule",
                rule.condition
            )));
        }
        seen.push(rule.condition);

        if rule.keywords.is_empty() {
            return Err(NutriCareError::ProfileInvalid(format!(
                "condition '{}' has no keywords",
                rule.condition
            )));
        }

        if rule.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(NutriCareError::ProfileInvalid(format!(
                "condition '{}' has an empty keyword",
                rule.condition
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_profile() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "name_patterns": ["name:\\s*(\\w+)"],
            "fallback": { "diet_advice": "Eat well." },
            "rules": [
                { "condition": "Diabetes", "keywords": ["diabetes", "hba1c"] }
            ]
        }"#;
        let profile = parse_profile_str(json).unwrap();
        assert_eq!(profile.name, "Test");
        assert_eq!(profile.rules.len(), 1);
        assert!(profile.allowed_foods.is_empty());
        assert_eq!(profile.rules[0].condition, Condition::Diabetes);
    }

    #[test]
    fn test_fallback_condition_rule_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "name_patterns": ["name:\\s*(\\w+)"],
            "fallback": { "diet_advice": "Eat well." },
            "rules": [
                { "condition": "General Health", "keywords": ["healthy"] }
            ]
        }"#;
        assert!(matches!(
            parse_profile_str(json),
            Err(NutriCareError::ProfileInvalid(_))
        ));
    }

    #[test]
    fn test_duplicate_condition_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "name_patterns": ["name:\\s*(\\w+)"],
            "fallback": { "diet_advice": "Eat well." },
            "rules": [
                { "condition": "Hypertension", "keywords": ["hypertension"] },
                { "condition": "Hypertension", "keywords": ["blood pressure"] }
            ]
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_pattern_without_capture_group_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "name_patterns": ["patient name:"],
            "fallback": { "diet_advice": "Eat well." },
            "rules": [
                { "condition": "Diabetes", "keywords": ["diabetes"] }
            ]
        }"#;
        assert!(matches!(
            parse_profile_str(json),
            Err(NutriCareError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_broken_regex_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "name_patterns": ["name:\\s*([a-z"],
            "fallback": { "diet_advice": "Eat well." },
            "rules": [
                { "condition": "Diabetes", "keywords": ["diabetes"] }
            ]
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_unknown_condition_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "name_patterns": ["name:\\s*(\\w+)"],
            "fallback": { "diet_advice": "Eat well." },
            "rules": [
                { "condition": "Gout", "keywords": ["uric acid"] }
            ]
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "name_patterns": ["name:\\s*(\\w+)"],
            "fallback": { "diet_advice": "Eat well." },
            "rules": [
                { "condition": "Diabetes", "keywords": ["  "] }
            ]
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn test_load_profile_reports_path() {
        let err = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/profile.json"));
    }
}
