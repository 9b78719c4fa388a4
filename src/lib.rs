pub mod benchmark;
pub mod core;
pub mod graph;

pub use crate::core::config::{GlobalConfig, GraphConfig};
pub use crate::core::error::{GraphError, GraphErrorKind, Result};
