pub mod printable;

use serde::{Deserialize, Serialize};

use crate::error::NutriCareError;
use crate::inference::recommend::DietRecommendation;
use crate::meals::MealPlan;
use crate::model::{Condition, FoodPreference, HealthStatus};

/// The exported diet plan: who it is for, what was found, and what to eat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietReport {
    pub patient: String,
    pub conditions: Vec<Condition>,
    pub food_preference: FoodPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_status: Option<HealthStatus>,
    pub recommendation: DietRecommendation,
    pub plan: MealPlan,
}

impl DietReport {
    pub fn to_json(&self) -> Result<String, NutriCareError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<DietReport, NutriCareError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meals::{build_plan, DayIndexing};

    const DIET_PLAN: &str = "Follow a diabetic-friendly low sugar diet. Reduce sodium intake.";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub(crate) fn sample_report() -> DietReport {
        DietReport {
            patient: "Asha Rao".into(),
            conditions: vec![Condition::Diabetes, Condition::Hypertension],
            food_preference: FoodPreference::Vegetarian,
            health_status: Some(HealthStatus::Abnormal),
            recommendation: DietRecommendation {
                allowed_foods: strings(&["vegetables", "whole grains", "fruits"]),
                restricted_foods: strings(&["sugar", "salt"]),
                diet_plan: DIET_PLAN.into(),
                lifestyle_advice: "Walk daily for 30 minutes.".into(),
            },
            plan: build_plan(FoodPreference::Vegetarian, DayIndexing::Flat),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let parsed = DietReport::from_json(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_json_field_names() {
        let json = sample_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["patient"], "Asha Rao");
        assert_eq!(value["conditions"][0], "Diabetes");
        assert_eq!(value["food_preference"], "Vegetarian");
        assert_eq!(value["health_status"], "Abnormal");
        assert!(value["plan"]["Week 4"]["Day 7"]["dish"].is_string());
    }

    #[test]
    fn test_missing_health_status_is_omitted() {
        let mut report = sample_report();
        report.health_status = None;
        let json = report.to_json().unwrap();
        assert!(!json.contains("health_status"));
        assert_eq!(DietReport::from_json(&json).unwrap(), report);
    }
}
