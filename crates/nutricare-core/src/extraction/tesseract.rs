use crate::error::NutriCareError;
use crate::extraction::OcrEngine;
use std::io::Write;
use std::process::Command;

/// OCR backend using the `tesseract` command line tool.
pub struct TesseractOcr {
    languages: String,
}

impl TesseractOcr {
    pub fn new() -> Self {
        TesseractOcr {
            languages: "eng".into(),
        }
    }

    /// Set language(s) for OCR (e.g., "eng", "eng+hin").
    pub fn with_languages(mut self, langs: &str) -> Self {
        if !langs.trim().is_empty() {
            self.languages = langs.trim().to_string();
        }
        self
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }

    pub fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, png_bytes: &[u8]) -> Result<String, NutriCareError> {
        let mut tmpfile = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| NutriCareError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(png_bytes)
            .map_err(|e| NutriCareError::Extraction(e.to_string()))?;

        let output = Command::new("tesseract")
            .arg(tmpfile.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NutriCareError::TesseractNotFound
                } else {
                    NutriCareError::Extraction(format!("tesseract failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(NutriCareError::TesseractFailed { code, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(TesseractOcr::new().languages(), "eng");
    }

    #[test]
    fn test_blank_languages_keep_default() {
        assert_eq!(TesseractOcr::new().with_languages("  ").languages(), "eng");
        assert_eq!(
            TesseractOcr::new().with_languages("eng+hin").languages(),
            "eng+hin"
        );
    }
}
