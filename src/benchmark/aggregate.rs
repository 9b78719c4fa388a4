//! Folding parsed benchmark results into a name × argument table.

use std::collections::HashMap;

use crate::{
    benchmark::parser::ParsedSignature,
    core::error::{GraphErrorKind, Result},
};

/// `table[name][arg] = value`. The last value recorded for a pair wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationTable {
    results: HashMap<String, HashMap<String, f64>>,
}

impl AggregationTable {
    pub fn record(&mut self, name: &str, arg: &str, value: f64) {
        self.results
            .entry(name.to_string())
            .or_default()
            .insert(arg.to_string(), value);
    }

    pub fn get(&self, name: &str, arg: &str) -> Option<f64> {
        self.results.get(name)?.get(arg).copied()
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Distinct strings in the order they were first seen, or in the order the
/// user asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingList {
    values: Vec<String>,
    explicit: bool,
}

impl OrderingList {
    /// A non-empty list fixes the ordering; an empty one is filled from input.
    pub fn new(values: Vec<String>) -> Self {
        let explicit = !values.is_empty();
        Self { values, explicit }
    }

    /// Append `value` unless it is already listed (exact string match).
    /// No-op for explicit orderings.
    pub fn note_if_unseen(&mut self, value: &str) {
        if !self.explicit && !self.values.iter().any(|v| v == value) {
            self.values.push(value.to_string());
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }
}

#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    table: AggregationTable,
    names: OrderingList,
    args: OrderingList,
}

impl Aggregator {
    pub fn new(names: Vec<String>, args: Vec<String>) -> Self {
        Self {
            table: AggregationTable::default(),
            names: OrderingList::new(names),
            args: OrderingList::new(args),
        }
    }

    pub fn record(&mut self, name: &str, arg: &str, value: f64) {
        self.table.record(name, arg, value);
    }

    pub fn note_name_if_unseen(&mut self, name: &str) {
        self.names.note_if_unseen(name);
    }

    pub fn note_arg_if_unseen(&mut self, arg: &str) {
        self.args.note_if_unseen(arg);
    }

    /// Track ordering for, then record, one parsed result
    pub fn fold(&mut self, signature: &ParsedSignature, value: f64) {
        self.note_name_if_unseen(&signature.name);
        self.note_arg_if_unseen(&signature.arg);
        self.record(&signature.name, &signature.arg, value);
    }

    pub fn table(&self) -> &AggregationTable {
        &self.table
    }

    pub fn names(&self) -> &[String] {
        self.names.as_slice()
    }

    pub fn args(&self) -> &[String] {
        self.args.as_slice()
    }

    /// Hand the table over once the input is exhausted.
    pub fn finish(self) -> Result<Aggregation> {
        if self.table.is_empty() {
            return Err(GraphErrorKind::EmptyResultSet.into());
        }

        Ok(Aggregation {
            table: self.table,
            names: self.names.values,
            args: self.args.values,
        })
    }
}

/// The read-only outcome of a run, ready to be turned into graph data.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub table: AggregationTable,
    pub names: Vec<String>,
    pub args: Vec<String>,
}
