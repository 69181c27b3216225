//! Extract command - recover identity fields from OCR text.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::{debug, info};

use idscan_core::document::{AadhaarParser, DocumentParser, ExtractionResult};
use idscan_core::models::{ExtractedFields, ExtractionResponse, FieldMatches, IdscanConfig};
use idscan_core::OcrResponse;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file with raw OCR text ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Input is an OCR provider JSON response rather than plain text
    #[arg(long)]
    ocr_json: bool,

    /// Show how each field was found
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension used when writing this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config: &IdscanConfig) -> anyhow::Result<()> {
    let start = Instant::now();

    let raw = read_input(&args.input)?;
    info!("Read {} bytes from {}", raw.len(), args.input.display());

    let text = if args.ocr_json {
        OcrResponse::from_json(&raw)?.into_text()?
    } else {
        raw
    };

    let parser = AadhaarParser::from_config(&config.extraction);
    let result = parser.parse(&text);

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

/// Write extraction output and enforce `require_identity_number`.
pub fn emit(
    result: &ExtractionResult,
    config: &IdscanConfig,
    format: OutputFormat,
    output: Option<&Path>,
    show_confidence: bool,
) -> anyhow::Result<()> {
    let rendered = format_fields(&result.fields, format)?;

    if let Some(output_path) = output {
        fs::write(output_path, &rendered)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", rendered);
    }

    if show_confidence {
        print_matches(&result.matches, result.processing_time_ms);
    }

    for warning in &result.warnings {
        debug!("{}", warning);
    }

    if config.extraction.require_identity_number {
        result.fields
            .identity_number()
            .context("No valid 12-digit identity number found")?;
    }

    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

pub fn format_fields(fields: &ExtractedFields, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ExtractionResponse::from(
            fields.clone(),
        ))?),
        OutputFormat::Csv => format_csv(fields),
        OutputFormat::Text => Ok(format_text(fields)),
    }
}

fn format_csv(fields: &ExtractedFields) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(ExtractedFields::FIELD_NAMES)?;
    wtr.write_record(fields.entries().map(|(_, value)| value))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(fields: &ExtractedFields) -> String {
    let mut output = String::new();

    let labels = ["Name", "Date of birth", "Address", "Aadhaar", "Gender"];
    for (label, (_, value)) in labels.iter().zip(fields.entries()) {
        let value = if value.is_empty() { "(not found)" } else { value };
        output.push_str(&format!("{:<14} {}\n", format!("{}:", label), value));
    }

    if let Some(date) = fields.birth_date() {
        output.push_str(&format!("\nBorn: {}\n", date.format("%d %B %Y")));
    }

    output
}

fn print_matches(matches: &FieldMatches, processing_time_ms: u64) {
    let entries = [
        ("name", &matches.name),
        ("dob", &matches.dob),
        ("address", &matches.address),
        ("aadhaar", &matches.aadhaar),
        ("gender", &matches.gender),
    ];

    eprintln!();
    for (field, m) in entries {
        match m {
            Some(m) => eprintln!(
                "{} {:<8} {:>5.1}%  {:?} (line {})",
                style("ℹ").blue(),
                field,
                m.confidence * 100.0,
                m.strategy,
                m.line + 1
            ),
            None => eprintln!("{} {:<8} not found", style("ℹ").yellow(), field),
        }
    }
    eprintln!(
        "{} Processing time: {}ms",
        style("ℹ").blue(),
        processing_time_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractedFields {
        ExtractedFields {
            name: "Rahul Kumar".to_string(),
            dob: "05/06/1990".to_string(),
            address: "Flat 4B, MG Road, 560001".to_string(),
            aadhaar: "1234 5678 9012".to_string(),
            gender: "MALE".to_string(),
        }
    }

    #[test]
    fn test_format_csv_quotes_commas() {
        let csv = format_csv(&sample()).unwrap();
        assert_eq!(
            csv,
            "name,dob,address,aadhaar,gender\n\
             Rahul Kumar,05/06/1990,\"Flat 4B, MG Road, 560001\",1234 5678 9012,MALE\n"
        );
    }

    #[test]
    fn test_format_text_marks_missing() {
        let text = format_text(&ExtractedFields::default());
        assert!(text.contains("Name:          (not found)"));
        assert!(!text.contains("Born:"));

        let text = format_text(&sample());
        assert!(text.contains("Born: 05 June 1990"));
    }
}
