use nutricare_core::classify::builtin;
use nutricare_core::classify::features::FEATURES;
use nutricare_core::classify::ScorecardModel;
use nutricare_core::error::NutriCareError;
use std::path::Path;

pub fn list() -> Result<(), NutriCareError> {
    println!("Available classifier models:\n");
    for name in builtin::PRESETS {
        let model = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, model.name, model.version);
        if let Some(ref desc) = model.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), NutriCareError> {
    let model = builtin::load_preset(preset)?;

    println!("{} (version {})\n", model.name, model.version);
    if let Some(ref desc) = model.description {
        println!("{}\n", desc);
    }

    println!("Input columns: {}\n", FEATURES.join(", "));
    print_terms(&model);
    println!(
        "\nA record scoring {} or more is Abnormal, otherwise Normal.\n",
        model.cutoff
    );

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), NutriCareError> {
    let model = nutricare_core::classify::load_model(file)?;

    println!("Model '{}' (v{}) is valid.", model.name, model.version);
    println!("  Terms: {}", model.terms.len());
    println!("  Cutoff: {}", model.cutoff);

    let unused: Vec<&str> = FEATURES
        .iter()
        .copied()
        .filter(|f| !model.terms.iter().any(|t| t.feature == *f))
        .collect();
    if !unused.is_empty() {
        println!("\nWarnings:");
        for f in unused {
            println!("  - feature '{}' is not scored by any term", f);
        }
    }

    Ok(())
}

fn print_terms(model: &ScorecardModel) {
    let described: Vec<String> = model.terms.iter().map(|t| t.describe()).collect();
    let width = described.iter().map(|d| d.len()).max().unwrap_or(20);

    println!("  {:<width$}  Weight", "Condition", width = width);
    println!("  {}", "-".repeat(width + 8));
    for (term, text) in model.terms.iter().zip(&described) {
        print!("  {:<width$}  {:<6}", text, term.weight, width = width);
        if let Some(ref note) = term.note {
            print!("  {}", note);
        }
        println!();
    }
}
