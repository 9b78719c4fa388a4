pub mod aggregate;
pub mod line;
pub mod parser;
pub mod pattern;

use std::io::BufRead;

use crate::{
    benchmark::{
        aggregate::Aggregator,
        line::LineError,
        parser::{ParsedSignature, parse_function_signature},
        pattern::CapturePattern,
    },
    core::{Result, config::Metric, error::SignatureError},
};

/// What happened to one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Parsed and folded into the table
    Recorded {
        signature: ParsedSignature,
        value: f64,
    },
    /// Not a benchmark result line at all
    NotABenchmark(LineError),
    /// A benchmark result whose name the signature pattern turned down
    SignatureRejected(SignatureError),
}

impl LineOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, LineOutcome::Recorded { .. })
    }
}

pub fn process_line(
    aggregator: &mut Aggregator,
    pattern: &CapturePattern,
    metric: Metric,
    line: &str,
) -> LineOutcome {
    let benchmark = match line::parse_line(line) {
        Ok(benchmark) => benchmark,
        Err(e) => return LineOutcome::NotABenchmark(e),
    };

    let signature = match parse_function_signature(pattern, &benchmark.name) {
        Ok(signature) => signature,
        Err(e) => {
            tracing::debug!("Skipping {}: {e}", benchmark.name);
            return LineOutcome::SignatureRejected(e);
        }
    };

    let value = benchmark.measurement(metric).unwrap_or_else(|| {
        tracing::debug!("{} reports no {}, recording 0", benchmark.name, metric.unit());
        0.0
    });

    aggregator.fold(&signature, value);
    LineOutcome::Recorded { signature, value }
}

/// Feed every line of `reader` through [`process_line`], handing each line
/// and its outcome to `on_line`. Returns the number of recorded lines.
pub fn process_stream<R, F>(
    mut reader: R,
    aggregator: &mut Aggregator,
    pattern: &CapturePattern,
    metric: Metric,
    mut on_line: F,
) -> Result<usize>
where
    R: BufRead,
    F: FnMut(&str, &LineOutcome),
{
    let mut recorded = 0;
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }

        // Invalid UTF-8 is not an I/O failure, the line just won't parse
        let line = String::from_utf8_lossy(trim_line_ending(&buffer));
        let outcome = process_line(aggregator, pattern, metric, &*line);
        if outcome.is_recorded() {
            recorded += 1;
        }
        on_line(&*line, &outcome);
    }

    tracing::debug!("Recorded {recorded} benchmark results");
    Ok(recorded)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
