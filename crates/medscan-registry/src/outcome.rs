use std::fmt;

use crate::error::RegistryError;
use crate::types::NdcProduct;

/// What a barcode lookup produced, ready for display.
///
/// Failures are kept as text so a broken lookup shows up inline in the
/// result table instead of aborting the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found { brand: String, labeler: String },
    NotFound,
    Failed(String),
}

impl LookupOutcome {
    #[must_use]
    pub fn from_result(result: Result<Option<NdcProduct>, RegistryError>) -> Self {
        match result {
            Ok(Some(product)) => LookupOutcome::Found {
                brand: product.brand_name,
                labeler: product.labeler_name,
            },
            Ok(None) => LookupOutcome::NotFound,
            Err(e) => LookupOutcome::Failed(e.to_string()),
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found { brand, labeler } => write!(f, "{brand}, {labeler}"),
            LookupOutcome::NotFound => write!(f, "Not Found"),
            LookupOutcome::Failed(reason) => write!(f, "Error fetching data: {reason}"),
        }
    }
}
