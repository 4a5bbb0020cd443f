pub mod pdftotext;
pub mod raster;
pub mod tabular;
pub mod tesseract;

use crate::error::NutriCareError;
use crate::model::{Artifact, ArtifactKind, ExtractionResult};

/// Text content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, NutriCareError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for optical character recognition backends.
pub trait OcrEngine: Send + Sync {
    /// Recognize text in a PNG-encoded image.
    fn recognize(&self, png_bytes: &[u8]) -> Result<String, NutriCareError>;

    fn backend_name(&self) -> &str;
}

/// Turns an uploaded artifact into plain text (and, for tabular input, a
/// structured record). Never returns an error: failures are reported through
/// [`crate::model::ExtractionOutcome::Failed`].
pub struct Extractor {
    pdf: Box<dyn PdfExtractor>,
    ocr: Box<dyn OcrEngine>,
}

impl Extractor {
    pub fn new(pdf: Box<dyn PdfExtractor>, ocr: Box<dyn OcrEngine>) -> Self {
        Extractor { pdf, ocr }
    }

    /// Extractor backed by the `pdftotext` and `tesseract` command line tools.
    pub fn with_system_tools(ocr_languages: &str) -> Self {
        Extractor {
            pdf: Box::new(pdftotext::PdftotextExtractor::new()),
            ocr: Box::new(tesseract::TesseractOcr::new().with_languages(ocr_languages)),
        }
    }

    pub fn extract(&self, artifact: &Artifact) -> ExtractionResult {
        let Some(kind) = artifact.kind() else {
            tracing::warn!(
                file = artifact.name(),
                "unsupported artifact type, nothing extracted"
            );
            return ExtractionResult::failed(format!(
                "unsupported file type '{}' (expected pdf, png, jpg, jpeg, txt or csv)",
                artifact.name()
            ));
        };

        let attempt = match kind {
            ArtifactKind::Pdf => self.extract_pdf(artifact.bytes()),
            ArtifactKind::Image => self.extract_image(artifact.bytes()),
            ArtifactKind::Text => extract_plain_text(artifact.bytes()),
            ArtifactKind::Csv => tabular::extract_csv(artifact.bytes()),
        };

        let result = attempt.unwrap_or_else(|e| {
            tracing::warn!(file = artifact.name(), %kind, error = %e, "extraction failed");
            ExtractionResult::failed(e.to_string())
        });

        tracing::debug!(
            file = artifact.name(),
            %kind,
            outcome = ?result.outcome,
            chars = result.text.chars().count(),
            has_record = result.structured_record.is_some(),
            "extraction finished"
        );

        result
    }

    fn extract_pdf(&self, bytes: &[u8]) -> Result<ExtractionResult, NutriCareError> {
        let pages = self.pdf.extract_pages(bytes)?;
        tracing::debug!(
            backend = self.pdf.backend_name(),
            pages = pages.len(),
            "pdf pages extracted"
        );
        Ok(ExtractionResult::from_text(&join_pages(&pages), None))
    }

    fn extract_image(&self, bytes: &[u8]) -> Result<ExtractionResult, NutriCareError> {
        let png = raster::decode_to_png(bytes)?;
        let text = self.ocr.recognize(&png)?;
        tracing::debug!(backend = self.ocr.backend_name(), "image recognized");
        Ok(ExtractionResult::from_text(&text, None))
    }
}

/// Concatenate page texts in page order, each followed by a newline.
/// Pages without text contribute nothing.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut text = String::new();
    for page in pages {
        if page.text.trim().is_empty() {
            continue;
        }
        text.push_str(&page.text);
        text.push('\n');
    }
    text
}

fn extract_plain_text(bytes: &[u8]) -> Result<ExtractionResult, NutriCareError> {
    let text = std::str::from_utf8(bytes).map_err(not_utf8)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(ExtractionResult::from_text(text, None))
}

fn not_utf8(e: std::str::Utf8Error) -> NutriCareError {
    NutriCareError::Extraction(format!("text file is not valid UTF-8: {e}"))
}
