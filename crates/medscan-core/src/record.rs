use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expiry::{evaluate, parse_expiry_with_format, ExpiryStatus, ParsedExpiry};
use crate::extract::ExtractionGrammar;
use crate::fields::ExtractedFields;

/// Typed result of running the extractor and expiry parser over one model
/// answer. Built once per scan; expiry status is computed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineRecord {
    pub fields: ExtractedFields,
    pub expiry: ParsedExpiry,
}

impl MedicineRecord {
    /// Builds a record using the default extraction grammar.
    #[must_use]
    pub fn from_raw_text(text: &str) -> Self {
        Self::from_raw_text_with(ExtractionGrammar::default_grammar(), text)
    }

    #[must_use]
    pub fn from_raw_text_with(grammar: &ExtractionGrammar, text: &str) -> Self {
        let fields = grammar.extract_all(text);
        let expiry = match parse_expiry_with_format(&fields.expiry) {
            Some((date, format)) => {
                tracing::debug!(raw = %fields.expiry, %format, %date, "parsed expiry");
                ParsedExpiry::Date(date)
            }
            None => {
                tracing::debug!(raw = %fields.expiry, "expiry not parseable");
                ParsedExpiry::Unparseable
            }
        };
        Self { fields, expiry }
    }

    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> ExpiryStatus {
        evaluate(self.expiry, today)
    }
}
