use std::path::Path;

use crate::{
    Result,
    core::output::ResultWriter,
    graph::{GraphTable, table::ARGUMENT_HEADER},
};

#[derive(Debug, Default)]
pub struct CsvWriter {}

impl CsvWriter {
    pub fn new() -> Self {
        Self {}
    }
}

impl ResultWriter for CsvWriter {
    fn write(&self, table: &GraphTable, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut header = vec![ARGUMENT_HEADER.to_string()];
        header.extend(table.names.iter().cloned());
        writer.write_record(&header)?;

        for (arg, cells) in table.args.iter().zip(&table.rows) {
            let mut record = vec![arg.clone()];
            record.extend(
                cells
                    .iter()
                    .map(|cell| cell.map(|value| value.to_string()).unwrap_or_default()),
            );
            writer.write_record(&record)?;
        }

        writer.flush()?;
        tracing::info!("Results written to {}", path.display());
        Ok(())
    }
}
