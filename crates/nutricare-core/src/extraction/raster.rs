use std::io::Cursor;

use image::ImageFormat;

use crate::error::NutriCareError;

/// Decode a PNG or JPEG upload and re-encode it as PNG for the OCR backend.
///
/// Decoding up front rejects corrupt uploads before any subprocess is spawned.
pub fn decode_to_png(bytes: &[u8]) -> Result<Vec<u8>, NutriCareError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| NutriCareError::ImageDecode(e.to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| NutriCareError::ImageDecode(e.to_string()))?;
    Ok(buf.into_inner())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn tiny_png() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(32, 32, image::Rgb([200u8, 200, 200]));
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let png = decode_to_png(&tiny_png()).unwrap();
        assert!(png.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            decode_to_png(b"definitely not pixels"),
            Err(NutriCareError::ImageDecode(_))
        ));
    }
}
