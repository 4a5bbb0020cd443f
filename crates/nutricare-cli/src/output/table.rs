use nutricare_core::meals::{Meal, MealPlan};
use nutricare_core::model::{ExtractionOutcome, ExtractionResult};
use nutricare_core::Analysis;

const PREVIEW_CHARS: usize = 1000;

pub fn print_extraction(name: &str, result: &ExtractionResult) {
    println!("=== {} ===\n", name);
    print_outcome(&result.outcome);

    if let Some(ref record) = result.structured_record {
        println!("\n  Vitals:");
        let width = record.keys().map(|k| k.len()).max().unwrap_or(10);
        for (key, value) in record {
            println!("    {:<width$}  {}", key, value, width = width);
        }
    }

    if !result.text.is_empty() {
        println!("\n{}", preview(&result.text));
    }
    println!();
}

pub fn print_analysis(analysis: &Analysis) {
    if let Some(ref source) = analysis.source {
        println!("=== {} ===\n", source);
    }
    if let Some(ref outcome) = analysis.extraction {
        print_outcome(outcome);
    }

    println!("  Patient:    {}", analysis.patient);
    println!("  Conditions: {}", analysis.conditions);
    if let Some(status) = analysis.health_status {
        println!("  Status:     {}", status);
    }
    println!();

    let rec = &analysis.recommendation;
    println!("  Allowed:    {}", rec.allowed_foods.join(", "));
    if !rec.restricted_foods.is_empty() {
        println!("  Restricted: {}", rec.restricted_foods.join(", "));
    }
    println!("  Diet:       {}", rec.diet_plan);
    if !rec.lifestyle_advice.is_empty() {
        println!("  Lifestyle:  {}", rec.lifestyle_advice);
    }
    println!();

    if !analysis.text.is_empty() {
        println!("--- Extracted text ---\n{}\n", preview(&analysis.text));
    }
}

pub fn print_plan(plan: &MealPlan) {
    for (week, days) in plan {
        println!("{}", week);
        for (day, meal) in days {
            println!("  {:<6} {}", day, meal.dish);
        }
        println!();
    }
}

pub fn print_meal(label: &str, meal: &Meal) {
    println!("{}: {}\n", label, meal.dish);
    println!("  Ingredients:");
    for item in &meal.ingredients {
        println!("    - {}", item);
    }
    println!("\n  Preparation:");
    for (i, step) in meal.preparation.iter().enumerate() {
        println!("    {}. {}", i + 1, step);
    }
    println!();
}

fn print_outcome(outcome: &ExtractionOutcome) {
    match outcome {
        ExtractionOutcome::Extracted => {}
        ExtractionOutcome::Empty => println!("  (no text found in document)\n"),
        ExtractionOutcome::Failed { reason } => {
            println!("  (extraction failed: {})\n", reason)
        }
    }
}

/// First `PREVIEW_CHARS` characters of `text`, with a marker when cut.
fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}\n[... truncated]", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_text() {
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        let text = "é".repeat(PREVIEW_CHARS + 5);
        let out = preview(&text);
        assert!(out.starts_with(&"é".repeat(PREVIEW_CHARS)));
        assert!(out.ends_with("[... truncated]"));
        assert_eq!(out.matches('é').count(), PREVIEW_CHARS);
    }
}
