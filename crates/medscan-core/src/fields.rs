use std::fmt;

use serde::{Deserialize, Serialize};

/// Value reported for any field the extractor could not locate.
pub const NOT_FOUND: &str = "Not Found";

/// The closed set of fields read off a medicine package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    Name,
    Expiry,
    BatchNumber,
    Manufacturer,
}

impl FieldKey {
    /// All keys, in the order they are extracted and displayed.
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Name,
        FieldKey::Expiry,
        FieldKey::BatchNumber,
        FieldKey::Manufacturer,
    ];

    /// The label searched for in model output when no other aliases are
    /// configured. `exp` deliberately covers "Exp", "Expiry", and
    /// "Expiration Date".
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Expiry => "exp",
            FieldKey::BatchNumber => "batch",
            FieldKey::Manufacturer => "manufacturer",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Name => write!(f, "name"),
            FieldKey::Expiry => write!(f, "expiry"),
            FieldKey::BatchNumber => write!(f, "batch_number"),
            FieldKey::Manufacturer => write!(f, "manufacturer"),
        }
    }
}

/// One extracted value per [`FieldKey`].
///
/// Every field holds either the captured text or [`NOT_FOUND`]; there is no
/// empty-string state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: String,
    pub expiry: String,
    pub batch_number: String,
    pub manufacturer: String,
}

impl ExtractedFields {
    #[must_use]
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Expiry => &self.expiry,
            FieldKey::BatchNumber => &self.batch_number,
            FieldKey::Manufacturer => &self.manufacturer,
        }
    }

    /// Returns `true` if the extractor located a value for `key`.
    #[must_use]
    pub fn is_found(&self, key: FieldKey) -> bool {
        self.get(key) != NOT_FOUND
    }

    /// Number of fields that were located.
    #[must_use]
    pub fn found_count(&self) -> usize {
        FieldKey::ALL.iter().filter(|k| self.is_found(**k)).count()
    }
}
