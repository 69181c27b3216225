//! Scan command - send a document image to the OCR provider and extract fields.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::{debug, info};

use idscan_core::document::{AadhaarParser, DocumentParser};
use idscan_core::models::{IdscanConfig, OcrConfig};
use idscan_core::{OcrError, OcrResponse};

use super::extract::{emit, OutputFormat};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Document image (PNG, JPEG, TIFF, BMP, GIF, WEBP or PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// OCR provider API key (overrides config and OCR_SPACE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// OCR language code
    #[arg(long)]
    language: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also write the raw recognized text to this file
    #[arg(long)]
    save_text: Option<PathBuf>,

    /// Show how each field was found
    #[arg(long)]
    show_confidence: bool,
}

pub async fn run(args: ScanArgs, config: &IdscanConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let mut ocr = config.ocr.clone();
    if let Some(key) = &args.api_key {
        ocr.api_key = key.clone();
    }
    if let Some(language) = &args.language {
        ocr.language = language.clone();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Uploading image to OCR provider...");
    let text = recognize(&args.input, &ocr).await;
    let text = match text {
        Ok(text) => text,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Extracting fields...");
    let result = AadhaarParser::from_config(&config.extraction).parse(&text);
    pb.finish_and_clear();

    if let Some(path) = &args.save_text {
        fs::write(path, &text)?;
        debug!("Wrote recognized text to {}", path.display());
    }

    emit(
        &result,
        config,
        args.format,
        args.output.as_deref(),
        args.show_confidence,
    )?;

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Post the image to the OCR provider and return the recognized text.
///
/// A single attempt is made; the request is bounded by `ocr.timeout_secs`.
async fn recognize(path: &Path, ocr: &OcrConfig) -> anyhow::Result<String> {
    let content = fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    info!(
        "Sending {} ({} bytes) to {}",
        filename,
        content.len(),
        ocr.api_url
    );

    let part = Part::bytes(content)
        .file_name(filename)
        .mime_str(content_type(path))?;
    let form = Form::new()
        .text("apikey", ocr.api_key.clone())
        .text("language", ocr.language.clone())
        .part("file", part);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(ocr.timeout_secs))
        .build()?;

    let resp = client
        .post(&ocr.api_url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("OCR provider request failed: {}", e))?;

    check_status(resp.status())?;

    let body = resp.text().await?;
    let text = OcrResponse::from_json(&body)?.into_text()?;

    debug!("OCR provider returned {} chars of text", text.len());
    Ok(text)
}

// Failed recognitions still come back as 200; anything else is a transport failure.
fn check_status(status: StatusCode) -> Result<(), OcrError> {
    if status != StatusCode::OK {
        return Err(OcrError::Status(status.as_u16()));
    }
    Ok(())
}

fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
