use std::io::Write;
use std::path::Path;

use medscan_core::ScanSummary;

use crate::error::ExportError;

/// Writes `Field,Value` followed by one record per summary row.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if writing to `writer` fails.
pub fn write_csv<W: Write>(writer: W, summary: &ScanSummary) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Field", "Value"])?;
    for (label, value) in summary.rows() {
        csv.write_record([label, value.as_str()])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the CSV export to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created, or
/// [`ExportError::Csv`] if writing fails.
pub fn write_csv_file(path: &Path, summary: &ScanSummary) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(file, summary)?;
    tracing::info!(path = %path.display(), "wrote CSV export");
    Ok(())
}
