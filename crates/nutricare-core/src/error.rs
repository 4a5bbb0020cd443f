use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NutriCareError {
    #[error("extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("tesseract not found. Install it: brew install tesseract (macOS) or apt install tesseract-ocr (Linux)")]
    TesseractNotFound,

    #[error("tesseract failed with exit code {code}: {stderr}")]
    TesseractFailed { code: i32, stderr: String },

    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    #[error("artifact '{name}' is {size} bytes, larger than the {limit} byte limit")]
    ArtifactTooLarge { name: String, size: u64, limit: u64 },

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    #[error("invalid name pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("failed to load model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("invalid model: {0}")]
    ModelInvalid(String),

    #[error("missing required feature '{feature}' in structured record")]
    MissingFeature { feature: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to render report: {0}")]
    Render(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
