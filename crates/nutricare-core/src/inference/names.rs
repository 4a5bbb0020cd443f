use regex::{Regex, RegexBuilder};

use crate::error::NutriCareError;
use crate::model::UNKNOWN_PATIENT;

/// Compile a name pattern the way the engine runs it (case-insensitive).
pub fn compile_pattern(pattern: &str) -> Result<Regex, NutriCareError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| NutriCareError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

/// Ordered list of patient-name patterns. Earlier patterns win, so the most
/// specific ones ("patient name:") must come before generic ones ("name:").
#[derive(Debug, Clone)]
pub struct NameMatcher {
    patterns: Vec<Regex>,
}

impl NameMatcher {
    pub fn new(patterns: &[String]) -> Result<Self, NutriCareError> {
        let patterns = patterns
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NameMatcher { patterns })
    }

    /// First non-blank capture of the first pattern that yields one.
    pub fn find(&self, text: &str) -> Option<String> {
        for re in &self.patterns {
            let found = re.captures_iter(text).find_map(|caps| {
                let name = caps.get(1)?.as_str().trim();
                (!name.is_empty()).then(|| name.to_string())
            });
            if found.is_some() {
                return found;
            }
        }
        None
    }

    /// Like [`NameMatcher::find`], falling back to the `Unknown Patient` sentinel.
    pub fn extract(&self, text: &str) -> String {
        self.find(text)
            .unwrap_or_else(|| UNKNOWN_PATIENT.to_string())
    }
}
