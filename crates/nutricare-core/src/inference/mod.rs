pub mod conditions;
pub mod names;
pub mod recommend;

use serde::Serialize;

use conditions::ConditionMatcher;
use crate::error::NutriCareError;
use crate::model::ConditionSet;
use crate::profile::schema::InferenceProfile;
use crate::profile::validate_profile;
use names::NameMatcher;
use recommend::{DietRecommendation, Recommender};

/// What the engine reads out of a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inference {
    pub patient: String,
    pub conditions: ConditionSet,
}

/// Compiled form of an [`InferenceProfile`]. Built once, then shared read-only.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    profile_name: String,
    names: NameMatcher,
    conditions: ConditionMatcher,
    recommender: Recommender,
}

impl InferenceEngine {
    pub fn from_profile(profile: &InferenceProfile) -> Result<Self, NutriCareError> {
        validate_profile(profile)?;
        Ok(InferenceEngine {
            profile_name: profile.name.clone(),
            names: NameMatcher::new(&profile.name_patterns)?,
            conditions: ConditionMatcher::from_rules(&profile.rules),
            recommender: Recommender::new(
                &profile.allowed_foods,
                &profile.fallback,
                &profile.rules,
            ),
        })
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn infer(&self, text: &str) -> Inference {
        let inference = Inference {
            patient: self.extract_patient_name(text),
            conditions: self.infer_conditions(text),
        };
        tracing::debug!(
            profile = %self.profile_name,
            patient = %inference.patient,
            conditions = %inference.conditions,
            "inference finished"
        );
        inference
    }

    pub fn extract_patient_name(&self, text: &str) -> String {
        self.names.extract(text)
    }

    pub fn infer_conditions(&self, text: &str) -> ConditionSet {
        self.conditions.infer(text)
    }

    pub fn recommend(&self, conditions: &ConditionSet) -> DietRecommendation {
        self.recommender.recommend(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, UNKNOWN_PATIENT};
    use crate::profile::builtin::load_preset;

    fn engine() -> InferenceEngine {
        InferenceEngine::from_profile(&load_preset("default").unwrap()).unwrap()
    }

    #[test]
    fn test_infer_empty_text() {
        let inf = engine().infer("");
        assert_eq!(inf.patient, UNKNOWN_PATIENT);
        assert_eq!(inf.conditions.as_slice(), &[Condition::GeneralHealth]);
    }

    #[test]
    fn test_infer_name_and_conditions() {
        let text = "Patient Name: Asha Rao, diagnosed with diabetes and hypertension";
        let inf = engine().infer(text);
        assert_eq!(inf.patient, "Asha Rao");
        assert_eq!(
            inf.conditions.as_slice(),
            &[Condition::Diabetes, Condition::Hypertension]
        );
    }

    #[test]
    fn test_name_precedence() {
        let inf = engine().infer("Patient Name: Asha\nReviewed with family.\nName: Ravi");
        assert_eq!(inf.patient, "Asha");
    }

    #[test]
    fn test_profile_name_exposed() {
        assert_eq!(engine().profile_name(), "NutriCare default");
    }
}
