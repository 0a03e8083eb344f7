//! QR payload decoding from the same package photo sent to the vision model.

use crate::error::VisionError;
use crate::image::ImagePayload;

/// Decodes the first readable QR code in `image`.
///
/// Returns `Ok(None)` when the photo holds no QR code, or when every detected
/// grid fails to decode or decodes to blank text.
///
/// # Errors
///
/// Returns [`VisionError::ImageDecode`] if the bytes are not a decodable
/// JPEG or PNG.
pub fn decode_barcode(image: &ImagePayload) -> Result<Option<String>, VisionError> {
    let luma = ::image::load_from_memory(&image.bytes)?.to_luma8();
    let width = luma.width() as usize;
    let height = luma.height() as usize;
    let pixels = luma.as_raw();

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| pixels[y * width + x]);
    let grids = prepared.detect_grids();

    for grid in &grids {
        match grid.decode() {
            Ok((_, content)) if !content.trim().is_empty() => {
                let payload = content.trim().to_string();
                tracing::info!(%payload, grids = grids.len(), "decoded QR payload");
                return Ok(Some(payload));
            }
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "skipping undecodable QR grid"),
        }
    }

    tracing::debug!(grids = grids.len(), "no QR payload in image");
    Ok(None)
}
