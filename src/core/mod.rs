pub mod config;
pub mod error;
pub mod output;

pub use config::{GlobalConfig, GraphConfig, Metric};
pub use error::{GraphError, GraphErrorKind, Result};
