//! The label pipeline shared by `scan` and `parse`: extract fields, evaluate
//! expiry, look up the barcode, then print and export the summary.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use medscan_core::{AppConfig, Language, MedicineRecord, ScanSummary};
use medscan_registry::{LookupOutcome, RegistryClient};
use medscan_vision::{decode_barcode, ImagePayload, VisionClient};

use crate::display::render_table;
use crate::OutputArgs;

pub(crate) async fn run_scan(
    config: &AppConfig,
    image_path: &Path,
    language: Language,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let api_key = config
        .vision_api_key
        .as_deref()
        .context("GROQ_API_KEY is not set; `scan` needs it to call the vision model")?;

    let image = ImagePayload::from_path(image_path)?;
    let client = VisionClient::new(
        api_key,
        &config.vision_base_url,
        &config.vision_model,
        config.request_timeout_secs,
        &config.user_agent,
    )?
    .with_sampling(config.vision_temperature, config.vision_max_tokens);

    let raw = client
        .extract_text(&image, language)
        .await
        .context("vision model request failed")?;

    let barcode = resolve_barcode(&image, output.barcode.as_deref());
    report(config, &raw, barcode.as_deref(), output).await
}

/// An explicit `--barcode` wins; otherwise the photo is scanned for a QR
/// code. A photo that cannot be decoded only loses its barcode.
pub(crate) fn resolve_barcode(image: &ImagePayload, explicit: Option<&str>) -> Option<String> {
    if let Some(payload) = explicit {
        return Some(payload.to_owned());
    }
    match decode_barcode(image) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "barcode scan failed");
            None
        }
    }
}

pub(crate) async fn run_parse(
    config: &AppConfig,
    file: Option<&Path>,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read model text from stdin")?;
            buf
        }
    };

    report(config, &raw, output.barcode.as_deref(), output).await
}

async fn report(
    config: &AppConfig,
    raw: &str,
    barcode: Option<&str>,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let today = output
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let summary = summarize(config, raw, barcode, today).await;

    print!("{}", render_table(&summary));

    if let Some(path) = &output.csv {
        medscan_export::write_csv_file(path, &summary)?;
        println!("CSV written to {}", path.display());
    }
    if let Some(path) = &output.pdf {
        medscan_export::write_pdf_file(path, &summary)?;
        println!("PDF written to {}", path.display());
    }

    Ok(())
}

/// Builds the summary for one label. Registry failures are folded into the
/// lookup text rather than aborting the run.
pub(crate) async fn summarize(
    config: &AppConfig,
    raw: &str,
    barcode: Option<&str>,
    today: NaiveDate,
) -> ScanSummary {
    let record = MedicineRecord::from_raw_text(raw);
    if record.fields.found_count() == 0 {
        tracing::warn!("no label fields recognised in model output");
    }

    let barcode = barcode.map(str::trim).filter(|b| !b.is_empty());
    let lookup = match barcode {
        Some(payload) => lookup_barcode(config, payload).await,
        None => LookupOutcome::NotFound,
    };

    ScanSummary::new(
        &record,
        today,
        barcode.map(str::to_owned),
        lookup.to_string(),
    )
}

async fn lookup_barcode(config: &AppConfig, payload: &str) -> LookupOutcome {
    let client = match RegistryClient::new(
        &config.registry_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    ) {
        Ok(client) => client,
        Err(e) => return LookupOutcome::Failed(e.to_string()),
    };

    let outcome = LookupOutcome::from_result(client.lookup_product_ndc(payload).await);
    if let LookupOutcome::Failed(reason) = &outcome {
        tracing::warn!(payload, %reason, "barcode lookup failed");
    }
    outcome
}
