//! Client for hosted vision-language models behind an OpenAI-compatible
//! `chat/completions` endpoint.
//!
//! Sends one package photo plus a templated instruction and returns the
//! model's free-text answer for [`medscan_core::MedicineRecord`] to parse.
//! The same photo is scanned locally for a QR code payload.

pub mod barcode;
pub mod client;
pub mod error;
pub mod image;
pub mod prompt;
pub mod types;

pub use barcode::decode_barcode;
pub use client::VisionClient;
pub use error::VisionError;
pub use image::ImagePayload;
pub use prompt::build_prompt;
