use anyhow::{Context, Result};
use mdrelink::{Config, process_tree};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    println!("Converting absolute internal links to relative links");
    println!("Processing markdown files in: {}", config.display_root().display());

    let summary = process_tree(&config.root)?;

    println!();
    println!("Summary:");
    println!("  Processed {} markdown files", summary.files);
    println!("  Fixed {} internal links", summary.fixed);

    Ok(())
}
