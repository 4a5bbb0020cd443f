mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nutricare",
    version,
    about = "Diet recommendations from medical reports"
)]
struct Cli {
    /// Log debug details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text (and vitals, for CSV) from a document without analyzing it
    Extract {
        /// Path to a PDF, PNG/JPG, TXT or CSV file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Tesseract language(s) for images, e.g. "eng+hin"
        #[arg(long, default_value = "eng")]
        ocr_lang: String,
    },
    /// Infer conditions from a document or pasted text and build a diet plan
    Analyze(commands::analyze::AnalyzeArgs),
    /// Show the meal plan for a food preference
    Plan {
        /// Food preference: veg or non-veg
        #[arg(long, default_value = "veg")]
        preference: String,

        /// Show only the meal for this day index (wraps around the table)
        #[arg(long)]
        day: Option<usize>,

        /// Day indexing: flat (week*7+day) or week-offset (day+week)
        #[arg(long, default_value = "flat")]
        indexing: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect inference profiles
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
    /// Inspect and validate classifier models
    Models {
        #[command(subcommand)]
        action: ModelsAction,
    },
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List predefined profiles
    List,
    /// Explain a profile in plain language
    Explain {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum ModelsAction {
    /// List predefined models
    List,
    /// Explain a model's scoring terms
    Explain {
        /// Preset name (e.g., "vitals")
        preset: String,
    },
    /// Validate a custom model file
    Validate {
        /// Path to JSON model file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            ocr_lang,
        } => commands::extract::run(input_file, &output, &ocr_lang),
        Commands::Analyze(args) => commands::analyze::run(args, cli.verbose),
        Commands::Plan {
            preference,
            day,
            indexing,
            output,
        } => commands::plan::run(&preference, day, &indexing, &output),
        Commands::Profiles { action } => match action {
            ProfilesAction::List => commands::profiles::list(),
            ProfilesAction::Explain { preset } => commands::profiles::explain(&preset),
            ProfilesAction::Schema => commands::profiles::schema(),
            ProfilesAction::Validate { file } => commands::profiles::validate(&file),
        },
        Commands::Models { action } => match action {
            ModelsAction::List => commands::models::list(),
            ModelsAction::Explain { preset } => commands::models::explain(&preset),
            ModelsAction::Validate { file } => commands::models::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
