//! Rendering an [`Aggregation`] as the row/column table a graph is drawn from.

use serde_json::{Value, json};

use crate::{benchmark::aggregate::Aggregation, core::Result};

/// Header of the first column
pub const ARGUMENT_HEADER: &str = "Argument";

/// One row per argument, one column per benchmark name, both in presentation
/// order. Cells without a recorded value are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphTable {
    pub names: Vec<String>,
    pub args: Vec<String>,
    pub rows: Vec<Vec<Option<f64>>>,
}

impl GraphTable {
    pub fn from_aggregation(aggregation: &Aggregation) -> Self {
        let rows = aggregation
            .args
            .iter()
            .map(|arg| {
                aggregation
                    .names
                    .iter()
                    .map(|name| aggregation.table.get(name, arg))
                    .collect()
            })
            .collect();

        Self {
            names: aggregation.names.clone(),
            args: aggregation.args.clone(),
            rows,
        }
    }

    /// `[["Argument", name...], [arg, value...], ...]` with `null` for gaps
    pub fn to_json(&self) -> Result<String> {
        let mut table: Vec<Value> = Vec::with_capacity(self.args.len() + 1);

        let mut header = vec![json!(ARGUMENT_HEADER)];
        header.extend(self.names.iter().map(|name| json!(name)));
        table.push(Value::Array(header));

        for (arg, cells) in self.args.iter().zip(&self.rows) {
            let mut row = vec![json!(arg)];
            row.extend(cells.iter().map(|cell| json!(cell)));
            table.push(Value::Array(row));
        }

        Ok(serde_json::to_string(&table)?)
    }

    /// The values of one name across all arguments
    pub fn column(&self, name_index: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|row| row.get(name_index).copied().flatten())
            .collect()
    }
}
