//! Debug tool to inspect pagination
//! Run with: cargo run --bin layout_debug -- resume.txt

use anyhow::{Context, Result};
use std::fs;

use resume_pdf::config::Settings;
use resume_pdf::parser::parse_resume;
use resume_pdf::render::layout::FontWeight;
use resume_pdf::render::DocumentRenderer;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("Usage: layout_debug <resume file>")?;

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let document = parse_resume(&content).with_context(|| "Failed to parse resume")?;

    let settings = Settings::default().with_metadata(&document.metadata);
    let renderer = DocumentRenderer::new(settings);
    let laid_out = renderer.layout(&document.blocks)?;

    let settings = renderer.settings();
    println!("=== Layout Debug ===");
    println!(
        "Page: {}x{} mm, margin: {} mm, body: {} mm",
        settings.page_width,
        settings.page_height,
        settings.margin,
        settings.body_height()
    );
    println!(
        "{} commands on {} pages",
        laid_out.commands.len(),
        laid_out.page_count
    );

    for page in 0..laid_out.page_count {
        println!();
        println!("--- Page {} ---", page + 1);
        println!("{:>7} {:>7} {:>5} {:<3} text", "x", "y", "size", "wt");
        for c in laid_out.page_commands(page) {
            let weight = match (c.font_weight, c.italic) {
                (FontWeight::Bold, _) => "B",
                (FontWeight::Normal, true) => "I",
                (FontWeight::Normal, false) => "",
            };
            let link = c
                .link
                .as_deref()
                .map(|url| format!("  -> {}", url))
                .unwrap_or_default();
            println!(
                "{:>7.2} {:>7.2} {:>5.1} {:<3} {}{}",
                c.x, c.y, c.font_size, weight, c.text, link
            );
        }
    }

    Ok(())
}
