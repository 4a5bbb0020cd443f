use nutricare_core::error::NutriCareError;
use nutricare_core::profile::builtin;
use std::path::Path;

pub fn list() -> Result<(), NutriCareError> {
    println!("Available inference profiles:\n");
    for name in builtin::PRESETS {
        let profile = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, profile.name, profile.version);
        if let Some(ref desc) = profile.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), NutriCareError> {
    let profile = builtin::load_preset(preset)?;

    println!("{} (version {})\n", profile.name, profile.version);
    if let Some(ref desc) = profile.description {
        println!("{}\n", desc);
    }

    println!("Patient name is taken from the first pattern that matches:\n");
    for (i, pattern) in profile.name_patterns.iter().enumerate() {
        println!("  {}. {}", i + 1, pattern);
    }
    println!();

    println!(
        "Conditions are detected when any keyword appears in the report ({} rules):\n",
        profile.rules.len()
    );
    let width = profile
        .rules
        .iter()
        .map(|r| r.condition.label().len())
        .max()
        .unwrap_or(16);
    for rule in &profile.rules {
        println!(
            "  {:<width$}  keywords: {}",
            rule.condition.label(),
            rule.keywords.join(", "),
            width = width
        );
        if !rule.restricted_foods.is_empty() {
            println!(
                "  {:<width$}  restrict: {}",
                "",
                rule.restricted_foods.join(", "),
                width = width
            );
        }
        if let Some(ref advice) = rule.diet_advice {
            println!("  {:<width$}  diet:     {}", "", advice, width = width);
        }
        if let Some(ref advice) = rule.lifestyle_advice {
            println!("  {:<width$}  activity: {}", "", advice, width = width);
        }
        if let Some(ref note) = rule.note {
            println!("  {:<width$}  note:     {}", "", note, width = width);
        }
    }
    println!();

    println!("Always allowed: {}", profile.allowed_foods.join(", "));
    println!(
        "No condition found: General Health, \"{}\"",
        profile.fallback.diet_advice
    );
    println!();

    Ok(())
}

pub fn schema() -> Result<(), NutriCareError> {
    print!(
        r#"JSON Profile Schema
===================

A profile decides how `nutricare analyze` reads a report: where the
patient name is, which keywords indicate which condition, and what diet
advice follows from each condition.

Top-level fields:
  name           (string, required)  Human-readable name of the profile
  description    (string, optional)  What this profile is for
  version        (string, required)  Version identifier (e.g., "2025.1")
  name_patterns  (array, required)   Regular expressions, tried in order and
                                     matched case-insensitively. Each must
                                     have a capture group; the first
                                     non-blank capture is the patient name.
  allowed_foods  (array, optional)   Foods recommended for every patient
  fallback       (object, required)  Advice when no rule matches:
                   diet_advice       (string, required)
                   lifestyle_advice  (string, optional)
  rules          (array, required)   Keyword rules (see below). Their order
                                     is the order conditions are reported in.

Each rule in the "rules" array:
  condition        (string, required)  One of "Diabetes", "High Cholesterol",
                                       "Hypertension"
  keywords         (array, required)   Substrings searched for in the
                                       lowercased report text
  restricted_foods (array, optional)   Foods to avoid with this condition
  diet_advice      (string, optional)  Sentence added to the diet plan
  lifestyle_advice (string, optional)  Sentence added to lifestyle advice
  note             (string, optional)  Clinical reference or explanation

Example:
{{
  "name": "Clinic profile",
  "version": "1.0",
  "name_patterns": ["patient\\s+name[ \\t]*:[ \\t]*([^\\n,;]+)"],
  "allowed_foods": ["vegetables", "pulses"],
  "fallback": {{ "diet_advice": "Maintain a balanced diet." }},
  "rules": [
    {{
      "condition": "Hypertension",
      "keywords": ["hypertension", "high bp"],
      "restricted_foods": ["salt", "pickles"],
      "diet_advice": "Keep sodium under 2 g a day."
    }}
  ]
}}

Note: name capture stops at a comma, semicolon or line break when the
pattern uses [^\n,;]+, as the builtin profile does.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), NutriCareError> {
    let profile = nutricare_core::profile::load_profile(file)?;

    println!(
        "Profile '{}' (v{}) is valid.",
        profile.name, profile.version
    );
    println!("  Name patterns: {}", profile.name_patterns.len());
    println!(
        "  Rules: {}",
        profile
            .rules
            .iter()
            .map(|r| r.condition.label())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut warnings = Vec::new();
    for rule in &profile.rules {
        if rule.diet_advice.is_none() && rule.restricted_foods.is_empty() {
            warnings.push(format!(
                "rule '{}' has neither diet advice nor restricted foods",
                rule.condition
            ));
        }
    }
    if profile.allowed_foods.is_empty() {
        warnings.push("no allowed foods listed".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
