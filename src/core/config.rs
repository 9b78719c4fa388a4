//! Layered configuration: defaults, config file, `BENCHGRAPH_*` environment
//! variables. CLI flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{
    benchmark::parser::DEFAULT_FUNCTION_SIGNATURE_PATTERN,
    core::error::{GraphErrorKind, Result},
};

pub const ENV_PREFIX: &str = "BENCHGRAPH_";
pub const DEFAULT_API_URL: &str = "http://benchgraph.codingberg.com";

/// Which measurement of a benchmark line ends up in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    #[default]
    NsPerOp,
    MbPerS,
    BytesPerOp,
    AllocsPerOp,
}

impl Metric {
    /// The unit as it appears in benchmark output
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::NsPerOp => "ns/op",
            Metric::MbPerS => "MB/s",
            Metric::BytesPerOp => "B/op",
            Metric::AllocsPerOp => "allocs/op",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Explicit name ordering; derived from the input when empty
    pub bench_names: Vec<String>,
    /// Explicit argument ordering; derived from the input when empty
    pub bench_args: Vec<String>,
    pub title: Option<String>,
    pub api_url: String,
    pub function_signature_pattern: String,
    pub metric: Metric,
    pub output: Option<PathBuf>,
    pub upload: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            bench_names: Vec::new(),
            bench_args: Vec::new(),
            title: None,
            api_url: DEFAULT_API_URL.to_string(),
            function_signature_pattern: DEFAULT_FUNCTION_SIGNATURE_PATTERN.to_string(),
            metric: Metric::default(),
            output: None,
            upload: true,
        }
    }
}

impl GlobalConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        extract_section(figment, "global")
    }
}

impl GraphConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        extract_section(figment, "graph")
    }

    /// The graph title, falling back to one naming the metric's unit
    pub fn effective_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Graph: Benchmark results in {}", self.metric.unit()))
    }
}

/// Extract one `[section]`, with the type's defaults filling any gaps.
fn extract_section<T>(figment: &Figment, section: &str) -> Result<T>
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    let config = Figment::from(Serialized::defaults(T::default()))
        .merge(figment.focus(section))
        .extract()
        .map_err(GraphErrorKind::from)?;
    Ok(config)
}

/// Build a figment from an explicit config file, which has to exist.
pub fn create_figment_from_file(path: &Path) -> Result<Figment> {
    if !path.is_file() {
        return Err(GraphErrorKind::ConfigFileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    tracing::debug!("Loading config from {}", path.display());
    Ok(layered(Toml::file(path)))
}

/// Build a figment from the given config file, or from the default location
/// when none is given. A missing default config file is not an error.
pub fn create_figment(explicit_path: Option<&Path>) -> Result<Figment> {
    if let Some(path) = explicit_path {
        return create_figment_from_file(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => create_figment_from_file(&path),
        _ => Ok(layered(Toml::string(""))),
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("benchgraph").join("config.toml"))
}

fn layered(file: figment::providers::Data<Toml>) -> Figment {
    Figment::new()
        .merge(file)
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}
