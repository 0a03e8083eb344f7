use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expiry::ExpiryStatus;
use crate::record::MedicineRecord;

/// Shown in place of a barcode payload when none was decoded.
pub const NOT_DETECTED: &str = "Not Detected";

/// Presentation values for one scan, shared by the terminal table and both
/// export formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub name: String,
    pub expiry: String,
    pub status: ExpiryStatus,
    pub batch_number: String,
    pub manufacturer: String,
    pub barcode: Option<String>,
    /// Registry lookup result, already rendered to text (including inline
    /// error messages).
    pub lookup_info: String,
}

impl ScanSummary {
    #[must_use]
    pub fn new(
        record: &MedicineRecord,
        today: NaiveDate,
        barcode: Option<String>,
        lookup_info: String,
    ) -> Self {
        let fields = &record.fields;
        Self {
            name: fields.name.clone(),
            expiry: fields.expiry.clone(),
            status: record.status_on(today),
            batch_number: fields.batch_number.clone(),
            manufacturer: fields.manufacturer.clone(),
            barcode: barcode.filter(|b| !b.trim().is_empty()),
            lookup_info,
        }
    }

    /// Ordered `(label, value)` pairs.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Expiry", self.expiry.clone()),
            ("Expiry Status", self.status.to_string()),
            ("Batch No.", self.batch_number.clone()),
            ("Manufacturer", self.manufacturer.clone()),
            (
                "Barcode/QR",
                self.barcode
                    .clone()
                    .unwrap_or_else(|| NOT_DETECTED.to_string()),
            ),
            ("Lookup Info", self.lookup_info.clone()),
        ]
    }
}
