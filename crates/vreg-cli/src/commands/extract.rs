//! Extract command - pull structured fields from recognized text.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info};

use vreg_core::models::config::{ExtractionMode, VregConfig};
use vreg_core::models::record::VehicleRecord;
use vreg_core::registration::extractor_for;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file with OCR output ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Override the configured extraction mode
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,
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

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Mode {
    /// Trust printed document labels
    Labeled,
    /// Scan controlled vocabularies
    Vocabulary,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = if let Some(path) = config_path {
        VregConfig::from_file(Path::new(path))?
    } else {
        VregConfig::default()
    };

    if let Some(mode) = args.mode {
        config.extraction.mode = match mode {
            Mode::Labeled => ExtractionMode::Labeled,
            Mode::Vocabulary => ExtractionMode::Vocabulary,
        };
    }

    let text = read_input(&args.input)?;
    if text.trim().is_empty() {
        anyhow::bail!("input contains no text");
    }

    info!("Extracting fields from {} characters of text", text.len());

    let extractor = extractor_for(&config.extraction);
    let record = extractor.extract(&text);

    let unresolved = record
        .to_map()
        .values()
        .filter(|value| value.as_str() == vreg_core::UNKNOWN)
        .count();
    debug!("Extraction left {} fields unresolved", unresolved);

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}

fn format_record(record: &VehicleRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &VehicleRecord) -> anyhow::Result<String> {
    let map = record.to_map();

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(map.keys())?;
    wtr.write_record(map.values())?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &VehicleRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Make:                {}\n", record.make));
    output.push_str(&format!("Model:               {}\n", record.model));
    output.push_str(&format!("Year:                {}\n", record.year));
    output.push_str(&format!("Chassis (VIN):       {}\n", record.chassis));
    if let Some(mileage) = &record.mileage {
        output.push_str(&format!("Mileage:             {}\n", mileage));
    }
    output.push_str(&format!("Registration number: {}\n", record.registration_number));

    output
}
