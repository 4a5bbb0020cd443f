use nutricare_core::extraction::Extractor;
use nutricare_core::model::Artifact;
use std::path::PathBuf;

use crate::commands::check_tools;
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    ocr_lang: &str,
) -> Result<(), nutricare_core::error::NutriCareError> {
    let artifact = Artifact::from_path(&input_file)?;
    check_tools(&artifact);
    let extractor = Extractor::with_system_tools(ocr_lang);
    let result = extractor.extract(&artifact);

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_extraction(artifact.name(), &result),
    }

    Ok(())
}
