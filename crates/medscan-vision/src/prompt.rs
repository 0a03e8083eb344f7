use medscan_core::Language;

/// Builds the instruction sent alongside the package photo.
///
/// The answer is expected as `Label: value` lines, which is what the core
/// extractor's grammar matches.
#[must_use]
pub fn build_prompt(language: Language) -> String {
    format!(
        "Extract clearly the medicine name, expiry date, batch number, and manufacturer \
         in {language} from this image. Provide only the key-value pairs in your response."
    )
}
