//! Chart series output.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bucketchart_types::ChartSeries;

/// Where projected chart series are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartWriter {
    /// Standard output, one document per projection.
    Stdout,
    /// A file, replaced on every projection.
    File(PathBuf),
}

impl ChartWriter {
    /// Write to `path`, or to stdout when no path is given.
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ChartWriter::File(path),
            None => ChartWriter::Stdout,
        }
    }

    /// Serialize and write `series`.
    pub fn write(&self, series: &ChartSeries, pretty: bool) -> Result<()> {
        let json = render(series, pretty)?;
        match self {
            ChartWriter::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
            }
            ChartWriter::File(path) => {
                fs::write(path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
        Ok(())
    }
}

/// Serialize chart series as JSON.
pub fn render(series: &ChartSeries, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(series)
    } else {
        serde_json::to_string(series)
    };
    json.context("Failed to serialize chart series")
}
