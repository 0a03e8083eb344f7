//! openFDA `drug/ndc.json` response types.
//!
//! The endpoint wraps results in `{"meta": {...}, "results": [...]}`. Only
//! the fields shown to the user are modelled.

use serde::Deserialize;

/// Shown when a registry record omits a name.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Deserialize)]
pub struct NdcSearchResponse {
    #[serde(default)]
    pub results: Vec<NdcResult>,
}

#[derive(Debug, Deserialize)]
pub struct NdcResult {
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub labeler_name: Option<String>,
}

/// A product record matched by NDC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdcProduct {
    pub brand_name: String,
    pub labeler_name: String,
}

impl From<NdcResult> for NdcProduct {
    fn from(result: NdcResult) -> Self {
        let or_unknown = |v: Option<String>| {
            v.filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string())
        };
        Self {
            brand_name: or_unknown(result.brand_name),
            labeler_name: or_unknown(result.labeler_name),
        }
    }
}
