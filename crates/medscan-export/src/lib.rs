//! Flat export formats for a [`medscan_core::ScanSummary`].
//!
//! Both writers are pure formatting over [`ScanSummary::rows`]; neither makes
//! decisions about the values.
//!
//! [`ScanSummary::rows`]: medscan_core::ScanSummary::rows

pub mod csv_export;
pub mod error;
pub mod pdf_export;

pub use csv_export::{write_csv, write_csv_file};
pub use error::ExportError;
pub use pdf_export::{render_pdf, write_pdf_file};
