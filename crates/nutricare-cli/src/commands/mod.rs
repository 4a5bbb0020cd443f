pub mod analyze;
pub mod extract;
pub mod models;
pub mod plan;
pub mod profiles;

use nutricare_core::error::NutriCareError;
use nutricare_core::extraction::pdftotext::PdftotextExtractor;
use nutricare_core::extraction::tesseract::TesseractOcr;
use nutricare_core::meals::DayIndexing;
use nutricare_core::model::{Artifact, ArtifactKind, FoodPreference};

pub fn parse_preference(s: &str) -> Result<FoodPreference, NutriCareError> {
    FoodPreference::from_str_loose(s).ok_or_else(|| {
        NutriCareError::InvalidInput(format!(
            "unknown food preference '{s}' (expected veg or non-veg)"
        ))
    })
}

pub fn parse_indexing(s: &str) -> Result<DayIndexing, NutriCareError> {
    DayIndexing::from_str_loose(s).ok_or_else(|| {
        NutriCareError::InvalidInput(format!(
            "unknown day indexing '{s}' (expected flat or week-offset)"
        ))
    })
}

/// Text given with `--text`, unless it is blank.
pub fn pasted_text(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Warn up front when the external tool an artifact needs is missing.
/// Extraction still runs and reports the failure in its outcome.
pub fn check_tools(artifact: &Artifact) {
    match artifact.kind() {
        Some(ArtifactKind::Pdf) if !PdftotextExtractor::is_available() => {
            tracing::warn!("pdftotext not found; install poppler-utils to read PDF files")
        }
        Some(ArtifactKind::Image) if !TesseractOcr::is_available() => {
            tracing::warn!("tesseract not found; install tesseract-ocr to read images")
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pasted_text_rejects_blank() {
        assert_eq!(pasted_text(None), None);
        assert_eq!(pasted_text(Some("")), None);
        assert_eq!(pasted_text(Some("   \n\t")), None);
    }

    #[test]
    fn test_pasted_text_kept_verbatim() {
        let text = "  Patient Name: Asha\nhigh bp ";
        assert_eq!(pasted_text(Some(text)), Some(text));
    }

    #[test]
    fn test_unknown_preference_is_invalid_input() {
        assert!(matches!(
            parse_preference("vegan"),
            Err(NutriCareError::InvalidInput(_))
        ));
        assert_eq!(
            parse_preference("Non-Veg").unwrap(),
            FoodPreference::NonVegetarian
        );
    }
}
