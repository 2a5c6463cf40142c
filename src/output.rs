use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::flower::FlowerEntry;

/// Pretty JSON, two-space indent.
pub fn render(entries: &[FlowerEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Cannot serialize flowers")
}

// Renders the full document before touching the destination, so failures never leave partial output
pub fn write_output(entries: &[FlowerEntry], path: Option<&Path>) -> Result<()> {
    let doc = render(entries)?;

    match path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Cannot create {path:?}"))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{doc}")?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            writeln!(lock, "{doc}")?;
            lock.flush()?;
        }
    }
    Ok(())
}
