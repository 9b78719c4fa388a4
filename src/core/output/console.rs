//! Echo of the input stream, each line marked with what became of it.

use colored::{ColoredString, Colorize};

use crate::benchmark::LineOutcome;

pub const RECORDED_MARK: &str = "√";
pub const NOT_A_BENCHMARK_MARK: &str = "?";
pub const REJECTED_MARK: &str = "!";

pub const RULE: &str = "=========================================";

pub fn mark(outcome: &LineOutcome) -> ColoredString {
    match outcome {
        LineOutcome::Recorded { .. } => RECORDED_MARK.green(),
        LineOutcome::NotABenchmark(_) => NOT_A_BENCHMARK_MARK.red(),
        LineOutcome::SignatureRejected(_) => REJECTED_MARK.red(),
    }
}

pub fn echo_line(line: &str, outcome: &LineOutcome) {
    println!("{} {line}", mark(outcome));
}

pub fn print_graph_url(url: &str) {
    println!("{RULE}");
    println!("{url}");
    println!("\n{RULE}");
}
