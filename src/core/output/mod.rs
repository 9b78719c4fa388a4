//! Shared output utilities: the console echo and local copies of the graph
//! table.

use std::path::Path;

use crate::{Result, graph::GraphTable};

pub mod chart;
pub mod console;
pub mod csv;
pub use self::chart::ChartWriter;
pub use self::csv::CsvWriter;

pub trait ResultWriter {
    fn write(&self, table: &GraphTable, path: &Path) -> Result<()>;
}

pub fn ensure_output_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write `results.csv` and `results.svg` into `output_dir`
pub fn write_results(table: &GraphTable, title: &str, output_dir: &Path) -> Result<()> {
    ensure_output_dir(output_dir)?;

    CsvWriter::new().write(table, &output_dir.join("results.csv"))?;
    ChartWriter::new(title).write(table, &output_dir.join("results.svg"))?;

    Ok(())
}
