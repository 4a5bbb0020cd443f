use serde::{Deserialize, Serialize};

use crate::model::{Condition, ConditionSet};
use crate::profile::schema::{ConditionRuleDef, FallbackDef};

/// Diet advice derived from the inferred conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecommendation {
    pub allowed_foods: Vec<String>,
    pub restricted_foods: Vec<String>,
    pub diet_plan: String,
    pub lifestyle_advice: String,
}

#[derive(Debug, Clone)]
pub struct Recommender {
    allowed_foods: Vec<String>,
    fallback: FallbackDef,
    rules: Vec<ConditionRuleDef>,
}

impl Recommender {
    pub fn new(
        allowed_foods: &[String],
        fallback: &FallbackDef,
        rules: &[ConditionRuleDef],
    ) -> Self {
        Recommender {
            allowed_foods: dedup(allowed_foods.iter().cloned()),
            fallback: fallback.clone(),
            rules: rules.to_vec(),
        }
    }

    pub fn recommend(&self, conditions: &ConditionSet) -> DietRecommendation {
        if conditions.is_fallback() {
            return DietRecommendation {
                allowed_foods: self.allowed_foods.clone(),
                restricted_foods: vec![],
                diet_plan: self.fallback.diet_advice.clone(),
                lifestyle_advice: self.fallback.lifestyle_advice.clone().unwrap_or_default(),
            };
        }

        let rules: Vec<&ConditionRuleDef> = conditions
            .iter()
            .filter_map(|c| self.rule_for(*c))
            .collect();

        let restricted = rules.iter().flat_map(|r| r.restricted_foods.clone());
        let diet = rules.iter().filter_map(|r| r.diet_advice.as_deref());
        let lifestyle = rules.iter().filter_map(|r| r.lifestyle_advice.as_deref());

        DietRecommendation {
            allowed_foods: self.allowed_foods.clone(),
            restricted_foods: dedup(restricted),
            diet_plan: join_sentences(diet),
            lifestyle_advice: join_sentences(lifestyle),
        }
    }

    fn rule_for(&self, condition: Condition) -> Option<&ConditionRuleDef> {
        self.rules.iter().find(|r| r.condition == condition)
    }
}

fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn join_sentences<'a>(sentences: impl Iterator<Item = &'a str>) -> String {
    sentences
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::builtin::load_preset;

    fn recommender() -> Recommender {
        let p = load_preset("default").unwrap();
        Recommender::new(&p.allowed_foods, &p.fallback, &p.rules)
    }

    #[test]
    fn test_general_health_uses_fallback_advice() {
        let rec = recommender().recommend(&ConditionSet::fallback());
        assert_eq!(rec.diet_plan, "Maintain a balanced diet.");
        assert!(rec.restricted_foods.is_empty());
        assert!(rec.lifestyle_advice.is_empty());
        assert_eq!(rec.allowed_foods.len(), 3);
    }

    #[test]
    fn test_advice_follows_condition_order() {
        let set = ConditionSet::from_matches(vec![Condition::Diabetes, Condition::Hypertension]);
        let rec = recommender().recommend(&set);
        assert_eq!(rec.restricted_foods, vec!["sugar", "salt"]);
        assert_eq!(
            rec.diet_plan,
            "Follow a diabetic-friendly low sugar diet. Reduce sodium intake."
        );
        assert_eq!(rec.lifestyle_advice, "Walk daily for 30 minutes.");
    }

    #[test]
    fn test_restricted_foods_deduplicated() {
        let p = load_preset("default").unwrap();
        let mut rules = p.rules.clone();
        rules[1].restricted_foods.push("sugar".into());
        let r = Recommender::new(&p.allowed_foods, &p.fallback, &rules);
        let found = vec![Condition::Diabetes, Condition::HighCholesterol];
        let rec = r.recommend(&ConditionSet::from_matches(found));
        assert_eq!(rec.restricted_foods, vec!["sugar", "oily food"]);
    }
}
