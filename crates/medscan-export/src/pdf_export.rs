use std::io::BufWriter;
use std::path::Path;

use medscan_core::ScanSummary;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::ExportError;

const TITLE: &str = "Medicine Scan";
const LEFT_MARGIN: Mm = Mm(17.6);
const TOP: Mm = Mm(262.0);
const LINE_STEP: Mm = Mm(7.0);
const TITLE_GAP: Mm = Mm(10.5);

/// Renders a one-page A4 PDF: a title, then `"{label}: {value}"` per row.
///
/// # Errors
///
/// Returns [`ExportError::Pdf`] if font registration or serialization fails.
pub fn render_pdf(summary: &ScanSummary) -> Result<Vec<u8>, ExportError> {
    let (doc, page1, layer1) = PdfDocument::new(TITLE, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

    let mut y = TOP;
    layer.use_text(TITLE, 14.0, LEFT_MARGIN, y, &bold);
    y -= TITLE_GAP;

    for (label, value) in summary.rows() {
        layer.use_text(format!("{label}: {value}"), 11.0, LEFT_MARGIN, y, &font);
        y -= LINE_STEP;
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}

/// Renders the PDF export and writes it to `path`.
///
/// # Errors
///
/// Returns [`ExportError::Pdf`] if rendering fails or [`ExportError::Io`] if
/// the file cannot be written.
pub fn write_pdf_file(path: &Path, summary: &ScanSummary) -> Result<(), ExportError> {
    let bytes = render_pdf(summary)?;
    std::fs::write(path, &bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote PDF export");
    Ok(())
}
