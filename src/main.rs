use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use resume_pdf::cli::Args;
use resume_pdf::config::Settings;
use resume_pdf::parser::parse_resume;
use resume_pdf::render::generate_pdf;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read input file
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    let document = parse_resume(&content).with_context(|| "Failed to parse resume")?;

    if document.blocks.is_empty() {
        anyhow::bail!("No content to render in {}", args.input.display());
    }

    log::info!("Parsed {} top-level blocks", document.blocks.len());

    // Build settings from CLI args and file metadata
    let settings = Settings::from_args(&args).with_metadata(&document.metadata);
    settings.validate().with_context(|| "Invalid page settings")?;

    let output_path = args.output_path();
    let pdf_data =
        generate_pdf(&document.blocks, &settings).with_context(|| "Failed to generate PDF")?;

    // Write output
    fs::write(&output_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote PDF to {}", output_path.display());

    Ok(())
}
