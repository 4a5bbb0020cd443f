use clap::Args;
use nutricare_core::classify::features::FeatureVector;
use nutricare_core::classify::{self, ScorecardModel};
use nutricare_core::error::NutriCareError;
use nutricare_core::extraction::Extractor;
use nutricare_core::inference::InferenceEngine;
use nutricare_core::model::Artifact;
use nutricare_core::profile;
use nutricare_core::report::printable;
use nutricare_core::{analyze_artifact, analyze_text, build_report, Analysis};
use std::path::{Path, PathBuf};

use crate::commands::{check_tools, parse_indexing, parse_preference, pasted_text};
use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to a PDF, PNG/JPG, TXT or CSV file
    pub input_file: Option<PathBuf>,

    /// Analyze this text directly instead of a file
    #[arg(long, conflicts_with = "input_file")]
    pub text: Option<String>,

    /// Food preference: veg or non-veg
    #[arg(long, default_value = "veg")]
    pub preference: String,

    /// Predefined inference profile
    #[arg(short, long, default_value = "default")]
    pub profile: String,

    /// Custom inference profile (JSON), overrides --profile
    #[arg(long)]
    pub profile_file: Option<PathBuf>,

    /// Predefined classifier model for CSV vitals
    #[arg(short, long, default_value = "vitals")]
    pub model: String,

    /// Custom classifier model (JSON), overrides --model
    #[arg(long, conflicts_with = "no_model")]
    pub model_file: Option<PathBuf>,

    /// Skip health-status classification
    #[arg(long)]
    pub no_model: bool,

    /// Day indexing: flat (week*7+day) or week-offset (day+week)
    #[arg(long, default_value = "flat")]
    pub indexing: String,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Write the diet report as JSON to this path
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// Write the printable diet report as PDF to this path
    #[arg(long)]
    pub pdf_out: Option<PathBuf>,

    /// Write the printable diet report as plain text to this path
    #[arg(long)]
    pub text_out: Option<PathBuf>,

    /// Tesseract language(s) for images, e.g. "eng+hin"
    #[arg(long, default_value = "eng")]
    pub ocr_lang: String,
}

pub fn run(args: AnalyzeArgs, verbose: bool) -> Result<(), NutriCareError> {
    let preference = parse_preference(&args.preference)?;
    let indexing = parse_indexing(&args.indexing)?;

    let profile = match &args.profile_file {
        Some(path) => profile::load_profile(path)?,
        None => profile::builtin::load_preset(&args.profile)?,
    };
    let engine = InferenceEngine::from_profile(&profile)?;
    tracing::debug!(profile = engine.profile_name(), "inference profile loaded");

    let model = if args.no_model {
        None
    } else {
        Some(match &args.model_file {
            Some(path) => classify::load_model(path)?,
            None => classify::builtin::load_preset(&args.model)?,
        })
    };

    let analysis = match (&args.input_file, pasted_text(args.text.as_deref())) {
        (Some(path), _) => {
            let artifact = Artifact::from_path(path)?;
            check_tools(&artifact);
            let extractor = Extractor::with_system_tools(&args.ocr_lang);
            let classifier = model.as_ref().map(|m| m as &dyn classify::HealthClassifier);
            analyze_artifact(&artifact, &extractor, &engine, classifier)?
        }
        (None, Some(text)) => analyze_text(text, &engine),
        (None, None) => {
            return Err(NutriCareError::InvalidInput(
                "please provide an input file or --text".into(),
            ));
        }
    };

    let report = build_report(&analysis, preference, indexing);

    match args.output.as_str() {
        "json" => output::json::print(&report)?,
        _ => {
            output::table::print_analysis(&analysis);
            if verbose {
                if let Some(model) = &model {
                    print_score(&analysis, model);
                }
            }
            output::table::print_plan(&report.plan);
        }
    }

    if let Some(path) = &args.json_out {
        std::fs::write(path, report.to_json()?)?;
        announce("JSON report", path);
    }
    if let Some(path) = &args.pdf_out {
        std::fs::write(path, printable::render_pdf(&report)?)?;
        announce("PDF report", path);
    }
    if let Some(path) = &args.text_out {
        std::fs::write(path, printable::render_text(&report))?;
        announce("Text report", path);
    }

    Ok(())
}

fn print_score(analysis: &Analysis, model: &ScorecardModel) {
    let Some(record) = &analysis.structured_record else {
        return;
    };
    let Ok(features) = FeatureVector::from_record(record) else {
        return;
    };
    let values: Vec<String> = features
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    println!("  Vitals: {}", values.join(", "));

    let breakdown = model.score(&features);
    println!(
        "  Score: {} (cutoff {}, model {})",
        breakdown.score, breakdown.cutoff, model.name
    );
    for term in &breakdown.fired {
        println!("    + {term}");
    }
    println!();
}

fn announce(what: &str, path: &Path) {
    eprintln!("{what} written to {}", path.display());
}
