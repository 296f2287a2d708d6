//! Fill command - substitute extracted values into a document template.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use vreg_core::models::record::VehicleRecord;
use vreg_core::template;

/// Arguments for the fill command.
#[derive(Args)]
pub struct FillArgs {
    /// Template text file with {{...}} placeholders
    #[arg(required = true)]
    template: PathBuf,

    /// Extracted record as JSON (from `vreg extract`)
    #[arg(short, long)]
    record: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: FillArgs) -> anyhow::Result<()> {
    if !args.template.exists() {
        anyhow::bail!("Template file not found: {}", args.template.display());
    }
    if !args.record.exists() {
        anyhow::bail!("Record file not found: {}", args.record.display());
    }

    let template_text = fs::read_to_string(&args.template)?;
    let record: VehicleRecord = serde_json::from_str(&fs::read_to_string(&args.record)?)?;

    let placeholders = template::scan_placeholders(&template_text);
    if placeholders.is_empty() {
        anyhow::bail!(
            "Template {} contains no {{{{...}}}} placeholders",
            args.template.display()
        );
    }

    let resolved = template::resolve(&record, &placeholders);
    info!(
        "Resolved {} of {} placeholders",
        resolved.len(),
        placeholders.len()
    );

    let unresolved: Vec<&str> = placeholders
        .iter()
        .filter(|token| !resolved.contains_key(*token))
        .map(|token| token.as_str())
        .collect();
    if !unresolved.is_empty() {
        eprintln!(
            "{} Unresolved placeholders: {}",
            style("!").yellow(),
            unresolved.join(", ")
        );
    }

    let filled = template::apply(&template_text, &resolved);

    if let Some(output_path) = &args.output {
        fs::write(output_path, &filled)?;
        println!(
            "{} Filled template written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", filled);
    }

    Ok(())
}
