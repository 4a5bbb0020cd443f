use serde::{Deserialize, Serialize};

use crate::model::Condition;

/// An inference profile: which name patterns and which keyword rules are active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Regular expressions tried in order (case-insensitive). The first
    /// capture group of the first matching pattern is the patient name.
    pub name_patterns: Vec<String>,
    /// Foods recommended regardless of the inferred conditions.
    #[serde(default)]
    pub allowed_foods: Vec<String>,
    /// Advice used when no rule matched (the `General Health` case).
    pub fallback: FallbackDef,
    /// Keyword rules, evaluated independently; their order is the output order.
    pub rules: Vec<ConditionRuleDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackDef {
    pub diet_advice: String,
    #[serde(default)]
    pub lifestyle_advice: Option<String>,
}

/// A single keyword rule within a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionRuleDef {
    pub condition: Condition,
    /// Any keyword found as a substring of the lowercased text triggers the rule.
    pub keywords: Vec<String>,
    #[serde(default)]
    pub restricted_foods: Vec<String>,
    #[serde(default)]
    pub diet_advice: Option<String>,
    #[serde(default)]
    pub lifestyle_advice: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}
