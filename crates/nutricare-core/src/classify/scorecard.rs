use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::classify::features::{FeatureVector, FEATURES};
use crate::classify::HealthClassifier;
use crate::error::NutriCareError;

/// A points-based binary classifier over the five vitals.
///
/// Each term adds its weight when its feature is above `above` or below
/// `below`. A total of at least `cutoff` predicts the positive class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorecardModel {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub cutoff: Decimal,
    pub terms: Vec<ScorecardTerm>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorecardTerm {
    pub feature: String,
    #[serde(default)]
    pub above: Option<Decimal>,
    #[serde(default)]
    pub below: Option<Decimal>,
    pub weight: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

impl ScorecardTerm {
    fn fires(&self, value: Decimal) -> bool {
        self.above.is_some_and(|t| value > t) || self.below.is_some_and(|t| value < t)
    }

    /// Human-readable condition, e.g. "glucose > 125".
    pub fn describe(&self) -> String {
        match (self.above, self.below) {
            (Some(a), Some(b)) => format!("{} > {} or < {}", self.feature, a, b),
            (Some(a), None) => format!("{} > {}", self.feature, a),
            (None, Some(b)) => format!("{} < {}", self.feature, b),
            (None, None) => self.feature.clone(),
        }
    }
}

/// Total score of one feature vector and the terms that contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub score: Decimal,
    pub cutoff: Decimal,
    pub fired: Vec<String>,
}

impl ScorecardModel {
    pub fn score(&self, features: &FeatureVector) -> ScoreBreakdown {
        let mut score = Decimal::ZERO;
        let mut fired = Vec::new();
        for term in &self.terms {
            let Some(value) = features.get(&term.feature) else {
                continue;
            };
            if term.fires(value) {
                score = score.saturating_add(term.weight);
                fired.push(term.describe());
            }
        }
        ScoreBreakdown {
            score,
            cutoff: self.cutoff,
            fired,
        }
    }
}

impl HealthClassifier for ScorecardModel {
    fn predict(&self, features: &FeatureVector) -> Result<u8, NutriCareError> {
        let breakdown = self.score(features);
        Ok(u8::from(breakdown.score >= self.cutoff))
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}

/// Load a scorecard model from a JSON file.
pub fn load_model(path: &Path) -> Result<ScorecardModel, NutriCareError> {
    let content = std::fs::read_to_string(path).map_err(|e| NutriCareError::ModelLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let model: ScorecardModel =
        serde_json::from_str(&content).map_err(|e| NutriCareError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_model(&model)?;
    Ok(model)
}

/// Parse a scorecard model from a JSON string.
pub fn parse_model_str(json: &str) -> Result<ScorecardModel, NutriCareError> {
    let model: ScorecardModel = serde_json::from_str(json)?;
    validate_model(&model)?;
    Ok(model)
}

pub fn validate_model(model: &ScorecardModel) -> Result<(), NutriCareError> {
    if model.cutoff <= Decimal::ZERO {
        return Err(NutriCareError::ModelInvalid(
            "cutoff must be greater than zero".into(),
        ));
    }

    if model.terms.is_empty() {
        return Err(NutriCareError::ModelInvalid(
            "terms must not be empty".into(),
        ));
    }

    for term in &model.terms {
        if !FEATURES.contains(&term.feature.as_str()) {
            return Err(NutriCareError::ModelInvalid(format!(
                "unknown feature '{}' (expected one of: {})",
                term.feature,
                FEATURES.join(", ")
            )));
        }

        if term.above.is_none() && term.below.is_none() {
            return Err(NutriCareError::ModelInvalid(format!(
                "term for '{}' needs 'above' or 'below'",
                term.feature
            )));
        }

        if term.weight <= Decimal::ZERO {
            return Err(NutriCareError::ModelInvalid(format!(
                "term for '{}' has non-positive weight {}",
                term.feature, term.weight
            )));
        }
    }

    let total = model
        .terms
        .iter()
        .try_fold(Decimal::ZERO, |sum, term| sum.checked_add(term.weight));
    if total.is_none() {
        return Err(NutriCareError::ModelInvalid(
            "sum of term weights is too large".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn model() -> ScorecardModel {
        parse_model_str(
            r#"{
                "name": "Test",
                "version": "1",
                "cutoff": "2",
                "terms": [
                    { "feature": "glucose", "above": "125", "weight": "2" },
                    { "feature": "bmi", "above": "30", "below": "18.5", "weight": "1" },
                    { "feature": "age", "above": "60", "weight": "0.5" }
                ]
            }"#,
        )
        .unwrap()
    }

    fn features(age: Decimal, glucose: Decimal, bmi: Decimal) -> FeatureVector {
        FeatureVector::new([age, glucose, dec!(180), dec!(120), bmi])
    }

    #[test]
    fn test_high_glucose_alone_is_abnormal() {
        let m = model();
        let fv = features(dec!(40), dec!(180), dec!(22));
        assert_eq!(m.predict(&fv).unwrap(), 1);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let m = model();
        let fv = features(dec!(40), dec!(125), dec!(22));
        assert_eq!(m.predict(&fv).unwrap(), 0);
    }

    #[test]
    fn test_partial_points_below_cutoff() {
        let m = model();
        let fv = features(dec!(70), dec!(100), dec!(17));
        let breakdown = m.score(&fv);
        assert_eq!(breakdown.score, dec!(1.5));
        assert_eq!(breakdown.fired, vec!["bmi > 30 or < 18.5", "age > 60"]);
        assert_eq!(m.predict(&fv).unwrap(), 0);
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "cutoff": "1",
            "terms": [ { "feature": "heart_rate", "above": "100", "weight": "1" } ] }"#;
        assert!(matches!(
            parse_model_str(json),
            Err(NutriCareError::ModelInvalid(_))
        ));
    }

    #[test]
    fn test_term_without_bounds_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "cutoff": "1",
            "terms": [ { "feature": "bmi", "weight": "1" } ] }"#;
        assert!(parse_model_str(json).is_err());
    }

    #[test]
    fn test_overflowing_weights_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "cutoff": "1",
            "terms": [
                { "feature": "glucose", "above": "1", "weight": "79228162514264337593543950335" },
                { "feature": "bmi", "above": "1", "weight": "79228162514264337593543950335" }
            ] }"#;
        assert!(matches!(
            parse_model_str(json),
            Err(NutriCareError::ModelInvalid(_))
        ));
    }

    #[test]
    fn test_unvalidated_model_scores_without_panicking() {
        let mut m = model();
        for term in &mut m.terms {
            term.weight = Decimal::MAX;
        }
        let fv = features(dec!(70), dec!(180), dec!(35));
        assert_eq!(m.score(&fv).score, Decimal::MAX);
        assert_eq!(m.predict(&fv).unwrap(), 1);
    }

    #[test]
    fn test_zero_cutoff_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "cutoff": "0",
            "terms": [ { "feature": "bmi", "above": "30", "weight": "1" } ] }"#;
        assert!(parse_model_str(json).is_err());
    }
}
