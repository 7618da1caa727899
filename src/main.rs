//! Batch mode: samples the configured spline and writes it as a CSV table.

use anyhow::Context;
use splinum::config::{BatchConfig, CONFIG_FILE_NAME};
use splinum::io::write_csv;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = BatchConfig::load_from_file(Path::new(CONFIG_FILE_NAME))
        .with_context(|| format!("cannot load {}", CONFIG_FILE_NAME))?
        .unwrap_or_default();
    let kind = config.spline_kind();
    let points = config.points()?;

    // Evaluate before touching the output file so a bad input leaves nothing behind.
    let curve = kind
        .sample(&points, config.samples_per_segment)
        .with_context(|| format!("{} evaluation failed", kind.name()))?;

    let file = File::create(&config.output)
        .with_context(|| format!("cannot create {}", config.output.display()))?;
    write_csv(BufWriter::new(file), &curve)
        .with_context(|| format!("cannot write {}", config.output.display()))?;

    log::info!(
        "{} interpolation complete. {} points written to '{}'.",
        kind.name(),
        curve.len(),
        config.output.display()
    );
    Ok(())
}
