use crate::{benchmark::pattern::CapturePattern, core::error::SignatureError};

/// Benchmarks are expected to follow the naming convention
/// `Benchmark<Function name>_<Function argument>`, which `go test` reports
/// with a `-<GOMAXPROCS>` suffix. The name may contain `/` for sub-benchmarks.
pub const DEFAULT_FUNCTION_SIGNATURE_PATTERN: &str = r"Benchmark(?P<functionName>[a-zA-Z0-9/]+)_(?P<functionArguments>[_a-zA-Z0-9]+)-(?P<numberOfThreads>[0-9]+)$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSignature {
    pub name: String,
    pub arg: String,
    pub number_of_threads: i64,
}

/// Parse function name, argument and number of threads from a benchmark name.
pub fn parse_function_signature(
    pattern: &CapturePattern,
    line: &str,
) -> Result<ParsedSignature, SignatureError> {
    let fields = pattern.capture(line)?;

    let number_of_threads = fields.number_of_threads.parse::<i64>().map_err(|source| {
        SignatureError::InvalidThreadCount {
            value: fields.number_of_threads.to_string(),
            source,
        }
    })?;

    Ok(ParsedSignature {
        name: fields.function_name.to_string(),
        arg: fields.function_arguments.to_string(),
        number_of_threads,
    })
}
