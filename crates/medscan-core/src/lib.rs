//! Core types and text pipeline for medscan.
//!
//! Turns the free-text answer of a vision model into typed medicine-record
//! fields: label/value extraction, multi-format expiry parsing, and expiry
//! evaluation against a caller-supplied "today". Nothing in this crate
//! performs I/O beyond reading environment variables for configuration.

pub mod app_config;
pub mod config;
pub mod error;
pub mod expiry;
pub mod extract;
pub mod fields;
pub mod language;
pub mod record;
pub mod summary;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use expiry::{
    evaluate, parse_expiry, parse_expiry_with_format, ExpiryFormat, ExpiryStatus, ParsedExpiry,
};
pub use extract::{extract, ExtractionGrammar, FieldRule};
pub use fields::{ExtractedFields, FieldKey, NOT_FOUND};
pub use language::Language;
pub use record::MedicineRecord;
pub use summary::{ScanSummary, NOT_DETECTED};
