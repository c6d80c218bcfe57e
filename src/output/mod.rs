//! Output module for result tables
//!
//! This module handles:
//! - The `ResultTable` every extractor returns
//! - Printing tables to the console, plain or boxed
//! - Saving tables as CSV files under the results directory

mod render;
mod table;

pub use render::{write_csv, write_csv_row, write_plain, write_pretty};
pub use table::{ResultTable, StatusTally};

use crate::config::Config;
use crate::Result;
use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// How results are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Boxed table on stdout
    Pretty,
    /// CSV file in the results directory
    File,
}

/// Renders `table` the way `output` asks; plain stdout lines when `None`
///
/// # Returns
///
/// The path of the written file for `OutputMode::File`, otherwise `None`.
pub fn control_output(
    table: &ResultTable,
    mode_name: &str,
    output: Option<OutputMode>,
    config: &Config,
) -> Result<Option<PathBuf>> {
    match output {
        Some(OutputMode::Pretty) => {
            let stdout = std::io::stdout();
            write_pretty(stdout.lock(), table)?;
            Ok(None)
        }
        Some(OutputMode::File) => {
            let path = file_output(table, mode_name, config)?;
            Ok(Some(path))
        }
        None => {
            let stdout = std::io::stdout();
            write_plain(stdout.lock(), table)?;
            Ok(None)
        }
    }
}

/// Saves `table` as `<results>/<mode>_<timestamp>.csv`
pub fn file_output(table: &ResultTable, mode_name: &str, config: &Config) -> Result<PathBuf> {
    let results_dir = config.results_dir();
    std::fs::create_dir_all(&results_dir)?;

    let timestamp = Local::now().format(&config.output.datetime_format);
    let path = results_dir.join(format!("{}_{}.csv", mode_name, timestamp));
    save_csv(table, &path)?;

    tracing::info!("Results file saved: {}", path.display());
    Ok(path)
}

fn save_csv(table: &ResultTable, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}
