//! Parsing of the result lines printed by `go test -bench`.
//!
//! e.g.: `BenchmarkF3/quicksort_100-4    40000000    11.2 ns/op    0 B/op    0 allocs/op`

use std::num::ParseIntError;

use thiserror::Error;

use crate::core::config::Metric;

const BENCHMARK_PREFIX: &str = "Benchmark";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("two fields required, have {count}")]
    TooFewFields { count: usize },

    #[error("first field does not start with \"Benchmark\"")]
    MissingPrefix,

    #[error("invalid iteration count: {0}")]
    InvalidIterations(#[from] ParseIntError),
}

/// One benchmark result line. Measurements are `None` when the line did not
/// report them.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkLine {
    pub name: String,
    pub iterations: i64,
    pub ns_per_op: Option<f64>,
    pub mb_per_s: Option<f64>,
    pub allocated_bytes_per_op: Option<u64>,
    pub allocs_per_op: Option<u64>,
}

impl BenchmarkLine {
    pub fn measurement(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::NsPerOp => self.ns_per_op,
            Metric::MbPerS => self.mb_per_s,
            Metric::BytesPerOp => self.allocated_bytes_per_op.map(|b| b as f64),
            Metric::AllocsPerOp => self.allocs_per_op.map(|a| a as f64),
        }
    }

    fn parse_measurement(&mut self, quantity: &str, unit: &str) {
        match unit {
            "ns/op" => {
                if let Ok(value) = quantity.parse::<f64>() {
                    self.ns_per_op = Some(value);
                }
            }
            "MB/s" => {
                if let Ok(value) = quantity.parse::<f64>() {
                    self.mb_per_s = Some(value);
                }
            }
            "B/op" => {
                if let Ok(value) = quantity.parse::<u64>() {
                    self.allocated_bytes_per_op = Some(value);
                }
            }
            "allocs/op" => {
                if let Ok(value) = quantity.parse::<u64>() {
                    self.allocs_per_op = Some(value);
                }
            }
            _ => {}
        }
    }
}

/// Parse a single line of benchmark output.
pub fn parse_line(line: &str) -> Result<BenchmarkLine, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    // Name and iteration count are positional
    if fields.len() < 2 {
        return Err(LineError::TooFewFields {
            count: fields.len(),
        });
    }

    if !fields[0].starts_with(BENCHMARK_PREFIX) {
        return Err(LineError::MissingPrefix);
    }

    // Signed, as `go test` tooling accepts it
    let iterations = fields[1].parse::<i64>()?;

    let mut benchmark = BenchmarkLine {
        name: fields[0].to_string(),
        iterations,
        ns_per_op: None,
        mb_per_s: None,
        allocated_bytes_per_op: None,
        allocs_per_op: None,
    };

    for pair in fields[2..].chunks_exact(2) {
        benchmark.parse_measurement(pair[0], pair[1]);
    }

    Ok(benchmark)
}
