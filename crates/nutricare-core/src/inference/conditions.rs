use crate::model::{Condition, ConditionSet};
use crate::profile::schema::ConditionRuleDef;

#[derive(Debug, Clone)]
struct KeywordRule {
    condition: Condition,
    /// Lowercased at construction.
    keywords: Vec<String>,
}

impl KeywordRule {
    fn found_in(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Keyword-to-condition rules, evaluated independently in rule order.
///
/// Matching is plain substring containment on the lowercased text, so
/// "prediabetes" still counts as "diabetes".
#[derive(Debug, Clone)]
pub struct ConditionMatcher {
    rules: Vec<KeywordRule>,
}

impl ConditionMatcher {
    pub fn from_rules(rules: &[ConditionRuleDef]) -> Self {
        let rules = rules
            .iter()
            .map(|r| KeywordRule {
                condition: r.condition,
                keywords: r.keywords.iter().map(|k| k.trim().to_lowercase()).collect(),
            })
            .collect();
        ConditionMatcher { rules }
    }

    /// Every rule with at least one keyword present, in rule order.
    pub fn matches(&self, text: &str) -> Vec<Condition> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.found_in(&lowered))
            .map(|rule| rule.condition)
            .collect()
    }

    pub fn infer(&self, text: &str) -> ConditionSet {
        ConditionSet::from_matches(self.matches(text))
    }
}
