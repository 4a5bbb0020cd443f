pub mod builtin;
pub mod features;
pub mod scorecard;

use crate::error::NutriCareError;
use crate::model::{HealthStatus, StructuredRecord};
use features::FeatureVector;

pub use scorecard::{load_model, ScorecardModel};

/// A pretrained binary classifier over [`features::FEATURES`].
///
/// Loaded once at startup and shared read-only.
pub trait HealthClassifier: Send + Sync {
    /// Predict the class of a single row: 1 is abnormal, 0 is normal.
    fn predict(&self, features: &FeatureVector) -> Result<u8, NutriCareError>;

    /// Name of the model (for diagnostics).
    fn model_name(&self) -> &str;
}

/// Label a structured record as normal or abnormal.
pub fn classify(
    record: &StructuredRecord,
    classifier: &dyn HealthClassifier,
) -> Result<HealthStatus, NutriCareError> {
    let features = FeatureVector::from_record(record)?;
    let prediction = classifier.predict(&features)?;
    let status = HealthStatus::from_prediction(prediction);
    tracing::debug!(model = classifier.model_name(), prediction, %status, "record classified");
    Ok(status)
}
