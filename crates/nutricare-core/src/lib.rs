pub mod classify;
pub mod error;
pub mod extraction;
pub mod inference;
pub mod meals;
pub mod model;
pub mod profile;
pub mod report;

use serde::Serialize;

use classify::HealthClassifier;
use error::NutriCareError;
use extraction::Extractor;
use inference::recommend::DietRecommendation;
use inference::InferenceEngine;
use meals::DayIndexing;
use model::{
    Artifact, ConditionSet, ExtractionOutcome, FoodPreference, HealthStatus, StructuredRecord,
};
use report::DietReport;

/// Everything the pipeline derives from one input.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Filename of the artifact, or `None` for pasted text.
    pub source: Option<String>,
    /// `None` when text was supplied directly and nothing was extracted.
    pub extraction: Option<ExtractionOutcome>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_record: Option<StructuredRecord>,
    pub patient: String,
    pub conditions: ConditionSet,
    pub recommendation: DietRecommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<HealthStatus>,
}

/// Main API entry point: extract an artifact, then infer from its text.
///
/// Extraction problems never fail the call; they show up in
/// `Analysis::extraction`. When the artifact carries a structured record and a
/// classifier is supplied, the record is classified, and a record lacking one
/// of the five features fails with `MissingFeature`.
pub fn analyze_artifact(
    artifact: &Artifact,
    extractor: &Extractor,
    engine: &InferenceEngine,
    classifier: Option<&dyn HealthClassifier>,
) -> Result<Analysis, NutriCareError> {
    let extraction = extractor.extract(artifact);

    let health_status = match (&extraction.structured_record, classifier) {
        (Some(record), Some(classifier)) => Some(classify::classify(record, classifier)?),
        (Some(_), None) => {
            tracing::debug!("structured record present but no classifier configured");
            None
        }
        (None, _) => None,
    };

    let inference = engine.infer(&extraction.text);
    let recommendation = engine.recommend(&inference.conditions);

    Ok(Analysis {
        source: Some(artifact.name().to_string()),
        extraction: Some(extraction.outcome),
        text: extraction.text,
        structured_record: extraction.structured_record,
        patient: inference.patient,
        conditions: inference.conditions,
        recommendation,
        health_status,
    })
}

/// Infer from text supplied directly, bypassing extraction.
pub fn analyze_text(text: &str, engine: &InferenceEngine) -> Analysis {
    let inference = engine.infer(text);
    let recommendation = engine.recommend(&inference.conditions);
    Analysis {
        source: None,
        extraction: None,
        text: text.to_string(),
        structured_record: None,
        patient: inference.patient,
        conditions: inference.conditions,
        recommendation,
        health_status: None,
    }
}

/// Combine an analysis with the four-week meal plan for a food preference.
pub fn build_report(
    analysis: &Analysis,
    preference: FoodPreference,
    indexing: DayIndexing,
) -> DietReport {
    DietReport {
        patient: analysis.patient.clone(),
        conditions: analysis.conditions.to_vec(),
        food_preference: preference,
        health_status: analysis.health_status,
        recommendation: analysis.recommendation.clone(),
        plan: meals::build_plan(preference, indexing),
    }
}
