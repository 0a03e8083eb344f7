//! Image loading and `data:` URI encoding for the vision request.

use std::path::Path;

use base64::Engine as _;

use crate::error::VisionError;

const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// A package photo ready to be embedded in a chat message.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub(crate) mime: String,
    pub(crate) bytes: Vec<u8>,
}

impl ImagePayload {
    /// Reads a JPEG or PNG from disk. The type is taken from the extension.
    ///
    /// # Errors
    ///
    /// - [`VisionError::UnsupportedImage`] for anything other than
    ///   `.jpg`/`.jpeg`/`.png`.
    /// - [`VisionError::ImageRead`] if the file cannot be read.
    /// - [`VisionError::EmptyImage`] if the file has no content.
    pub fn from_path(path: &Path) -> Result<Self, VisionError> {
        let mime = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .filter(|m| ACCEPTED_MIME_TYPES.contains(&m.as_str()))
            .ok_or_else(|| VisionError::UnsupportedImage {
                path: path.to_path_buf(),
            })?;

        let bytes = std::fs::read(path).map_err(|source| VisionError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(VisionError::EmptyImage {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { mime, bytes })
    }

    /// `data:<mime>;base64,<payload>`
    #[must_use]
    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{encoded}", self.mime)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn data_uri_encodes_bytes() {
        let payload = ImagePayload {
            mime: "image/png".to_string(),
            bytes: b"abc".to_vec(),
        };
        assert_eq!(payload.data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn from_path_detects_png() {
        let file = write_temp(".png", b"\x89PNG fake");
        let payload = ImagePayload::from_path(file.path()).unwrap();
        assert_eq!(payload.mime, "image/png");
        assert_eq!(payload.bytes.len(), 9);
    }

    #[test]
    fn from_path_detects_jpeg_variants() {
        for suffix in [".jpg", ".jpeg", ".JPG"] {
            let file = write_temp(suffix, b"jpeg");
            let payload = ImagePayload::from_path(file.path()).unwrap();
            assert_eq!(payload.mime, "image/jpeg", "{suffix}");
        }
    }

    #[test]
    fn from_path_rejects_other_types() {
        let file = write_temp(".gif", b"GIF89a");
        let err = ImagePayload::from_path(file.path()).unwrap_err();
        assert!(matches!(err, VisionError::UnsupportedImage { .. }));
    }

    #[test]
    fn from_path_rejects_empty_file() {
        let file = write_temp(".png", b"");
        let err = ImagePayload::from_path(file.path()).unwrap_err();
        assert!(matches!(err, VisionError::EmptyImage { .. }));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = ImagePayload::from_path(Path::new("/nonexistent/box.png")).unwrap_err();
        assert!(matches!(err, VisionError::ImageRead { .. }));
    }
}
