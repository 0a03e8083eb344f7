//! openFDA NDC directory lookups for decoded package barcodes.

pub mod client;
pub mod error;
pub mod outcome;
pub mod types;

pub use client::RegistryClient;
pub use error::RegistryError;
pub use outcome::LookupOutcome;
pub use types::NdcProduct;
