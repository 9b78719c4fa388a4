//! Function signature patterns and the extraction of their three named
//! capture groups.

use std::collections::HashMap;

use regex::Regex;

use crate::core::error::{GraphError, GraphErrorKind, Result, SignatureError};

pub const FUNCTION_NAME: &str = "functionName";
pub const FUNCTION_ARGUMENTS: &str = "functionArguments";
pub const NUMBER_OF_THREADS: &str = "numberOfThreads";

/// Every pattern has to name these groups
pub const REQUIRED_GROUPS: [&str; 3] = [FUNCTION_NAME, FUNCTION_ARGUMENTS, NUMBER_OF_THREADS];

/// The whole match plus the three named groups
const EXPECTED_GROUP_COUNT: usize = 4;

/// The raw substrings captured from one benchmark name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureFields<'a> {
    pub function_name: &'a str,
    pub function_arguments: &'a str,
    pub number_of_threads: &'a str,
}

/// A compiled function signature pattern, checked for the required groups.
#[derive(Debug, Clone)]
pub struct CapturePattern {
    expression: Regex,
}

impl CapturePattern {
    /// Compile and validate a user supplied pattern.
    ///
    /// Rejects empty patterns, patterns that fail to compile and patterns
    /// missing any of [`REQUIRED_GROUPS`].
    pub fn new(pattern: &str) -> Result<Self> {
        let invalid = |reason: String| GraphErrorKind::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if pattern.is_empty() {
            return Err(invalid("pattern is empty".to_string()).into());
        }

        let expression = Regex::new(pattern).map_err(|e| invalid(e.to_string()))?;

        for group in REQUIRED_GROUPS {
            if !expression.capture_names().flatten().any(|name| name == group) {
                return Err(GraphError::from(invalid(format!(
                    "no `{group}` capture group"
                )))
                .with_hint(Some(format!("name it with (?P<{group}>...)"))));
            }
        }

        tracing::debug!("Using function signature pattern: {pattern}");
        Ok(Self { expression })
    }

    pub fn capture<'a>(&self, line: &'a str) -> std::result::Result<CaptureFields<'a>, SignatureError> {
        capture_fields(&self.expression, line)
    }
}

/// Apply `expression` to `line` and pull out the three named groups.
///
/// The group names are checked again here, so this holds for any regex and
/// not only for ones that went through [`CapturePattern::new`].
pub fn capture_fields<'a>(
    expression: &Regex,
    line: &'a str,
) -> std::result::Result<CaptureFields<'a>, SignatureError> {
    let captures = expression
        .captures(line)
        .ok_or(SignatureError::MalformedSignature)?;

    if captures.len() != EXPECTED_GROUP_COUNT {
        return Err(SignatureError::MalformedSignature);
    }

    // A named group that took no part in the match captures ""
    let groups: HashMap<&str, &'a str> = expression
        .capture_names()
        .enumerate()
        .filter_map(|(index, name)| {
            name.map(|name| (name, captures.get(index).map_or("", |m| m.as_str())))
        })
        .collect();

    let field = |group: &'static str| {
        groups
            .get(group)
            .copied()
            .ok_or(SignatureError::MissingCaptureGroup { group })
    };

    Ok(CaptureFields {
        function_name: field(FUNCTION_NAME)?,
        function_arguments: field(FUNCTION_ARGUMENTS)?,
        number_of_threads: field(NUMBER_OF_THREADS)?,
    })
}
