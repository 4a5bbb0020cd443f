use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::NutriCareError;

/// Display name used when no name pattern matches the document.
pub const UNKNOWN_PATIENT: &str = "Unknown Patient";

/// Largest artifact accepted by [`Artifact::from_path`] (200 MiB).
pub const MAX_ARTIFACT_BYTES: u64 = 200 * 1024 * 1024;

/// Supported artifact types, resolved from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Pdf,
    Image,
    Text,
    Csv,
}

impl ArtifactKind {
    /// Resolve the kind from a filename's trailing extension (case-insensitive).
    pub fn from_filename(name: &str) -> Option<ArtifactKind> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(ArtifactKind::Pdf),
            "png" | "jpg" | "jpeg" => Some(ArtifactKind::Image),
            "txt" => Some(ArtifactKind::Text),
            "csv" => Some(ArtifactKind::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Pdf => write!(f, "pdf"),
            ArtifactKind::Image => write!(f, "image"),
            ArtifactKind::Text => write!(f, "text"),
            ArtifactKind::Csv => write!(f, "csv"),
        }
    }
}

/// An uploaded document: raw bytes plus the filename they arrived under.
#[derive(Debug, Clone)]
pub struct Artifact {
    name: String,
    bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Artifact {
            name: name.into(),
            bytes,
        }
    }

    /// Read an artifact from disk, rejecting files over [`MAX_ARTIFACT_BYTES`].
    pub fn from_path(path: &Path) -> Result<Artifact, NutriCareError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let size = std::fs::metadata(path)?.len();
        if size > MAX_ARTIFACT_BYTES {
            return Err(NutriCareError::ArtifactTooLarge {
                name,
                size,
                limit: MAX_ARTIFACT_BYTES,
            });
        }

        let bytes = std::fs::read(path)?;
        Ok(Artifact { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn kind(&self) -> Option<ArtifactKind> {
        ArtifactKind::from_filename(&self.name)
    }
}

/// Numeric fields from the first row of tabular input, keyed by column name.
pub type StructuredRecord = BTreeMap<String, Decimal>;

/// How an extraction went. Distinguishes "nothing in there" from "could not read it".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Extracted,
    Empty,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_record: Option<StructuredRecord>,
    pub outcome: ExtractionOutcome,
}

impl ExtractionResult {
    /// Wrap successfully read text, trimming it and classifying it as extracted or empty.
    pub fn from_text(text: &str, structured_record: Option<StructuredRecord>) -> Self {
        let text = text.trim().to_string();
        let outcome = if text.is_empty() {
            ExtractionOutcome::Empty
        } else {
            ExtractionOutcome::Extracted
        };
        ExtractionResult {
            text,
            structured_record,
            outcome,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        ExtractionResult {
            text: String::new(),
            structured_record: None,
            outcome: ExtractionOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, ExtractionOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Diabetes,
    #[serde(rename = "High Cholesterol")]
    HighCholesterol,
    Hypertension,
    #[serde(rename = "General Health")]
    GeneralHealth,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes",
            Condition::HighCholesterol => "High Cholesterol",
            Condition::Hypertension => "Hypertension",
            Condition::GeneralHealth => "General Health",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered, never-empty set of inferred conditions.
///
/// `General Health` only ever appears alone: it is what an empty match set
/// collapses to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConditionSet(Vec<Condition>);

impl ConditionSet {
    /// Build from matched labels in match order, dropping duplicates and
    /// falling back to `General Health` when nothing matched.
    pub fn from_matches(matches: impl IntoIterator<Item = Condition>) -> Self {
        let mut labels: Vec<Condition> = Vec::new();
        for c in matches {
            if c != Condition::GeneralHealth && !labels.contains(&c) {
                labels.push(c);
            }
        }
        if labels.is_empty() {
            return Self::fallback();
        }
        ConditionSet(labels)
    }

    pub fn fallback() -> Self {
        ConditionSet(vec![Condition::GeneralHealth])
    }

    pub fn is_fallback(&self) -> bool {
        self.0 == [Condition::GeneralHealth]
    }

    pub fn as_slice(&self) -> &[Condition] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.0.iter()
    }

    pub fn contains(&self, condition: Condition) -> bool {
        self.0.contains(&condition)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Condition> {
        self.0.clone()
    }
}

impl fmt::Display for ConditionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.0.iter().map(|c| c.label()).collect();
        f.write_str(&labels.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Normal,
    Abnormal,
}

impl HealthStatus {
    /// Map a binary classifier prediction: 1 is the positive (abnormal) class.
    pub fn from_prediction(prediction: u8) -> HealthStatus {
        if prediction == 1 {
            HealthStatus::Abnormal
        } else {
            HealthStatus::Normal
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Normal => write!(f, "Normal"),
            HealthStatus::Abnormal => write!(f, "Abnormal"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodPreference {
    #[default]
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
}

impl FoodPreference {
    pub fn from_str_loose(s: &str) -> Option<FoodPreference> {
        let lower: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match lower.as_str() {
            "veg" | "vegetarian" => Some(FoodPreference::Vegetarian),
            "nonveg" | "nonvegetarian" => Some(FoodPreference::NonVegetarian),
            _ => None,
        }
    }
}

impl fmt::Display for FoodPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodPreference::Vegetarian => write!(f, "Vegetarian"),
            FoodPreference::NonVegetarian => write!(f, "Non-Vegetarian"),
        }
    }
}
