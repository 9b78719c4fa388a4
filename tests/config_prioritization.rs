//! Tests for configuration prioritization.
//!
//! Values resolve in this order, highest priority first:
//! 1. CLI arguments (applied by the binary, see `tests/cli.rs`)
//! 2. Environment variables (BENCHGRAPH_*)
//! 3. Config file
//! 4. Default values
//!
//! Every test runs inside a `figment::Jail`, which serializes the tests and
//! restores the environment and working directory afterwards.
//!
//! # Environment Variable Format
//!
//! Environment variables use double underscore (`__`) to separate the section
//! from the field name, e.g. `BENCHGRAPH_GRAPH__API_URL` → `graph.api_url`.

use benchgraph::{
    GraphErrorKind,
    benchmark::parser::DEFAULT_FUNCTION_SIGNATURE_PATTERN,
    core::{
        Metric,
        config::{
            DEFAULT_API_URL, GlobalConfig, GraphConfig, create_figment, create_figment_from_file,
        },
    },
};
use figment::Jail;

// =============================================================================
// Default Value Tests
// =============================================================================

#[test]
fn test_graph_config_default_values() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "")?;
        let figment = create_figment_from_file(&jail.directory().join("config.toml"))
            .expect("Failed to create figment");
        let config = GraphConfig::from_figment(&figment).expect("Failed to load config");

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(
            config.function_signature_pattern,
            DEFAULT_FUNCTION_SIGNATURE_PATTERN
        );
        assert_eq!(config.metric, Metric::NsPerOp);
        assert!(config.upload, "Uploading should be on by default");
        assert!(config.bench_names.is_empty());
        assert!(config.bench_args.is_empty());
        assert!(config.output.is_none());
        assert_eq!(
            config.effective_title(),
            "Graph: Benchmark results in ns/op"
        );
        Ok(())
    });
}

#[test]
fn test_global_config_default_values() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "")?;
        let figment = create_figment_from_file(&jail.directory().join("config.toml"))
            .expect("Failed to create figment");
        let config = GlobalConfig::from_figment(&figment).expect("Failed to load config");

        assert!(!config.verbose, "Default verbose should be false");
        Ok(())
    });
}

// =============================================================================
// Config File Tests
// =============================================================================

#[test]
fn test_graph_config_from_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[global]
verbose = true

[graph]
title = "Sorting"
api_url = "http://localhost:8080"
bench_names = ["F3/quicksort", "F"]
bench_args = ["100", "0"]
metric = "allocs-per-op"
output = "graphs"
upload = false
"#,
        )?;
        let figment = create_figment_from_file(&jail.directory().join("config.toml"))
            .expect("Failed to create figment");
        let config = GraphConfig::from_figment(&figment).expect("Failed to load config");
        let global = GlobalConfig::from_figment(&figment).expect("Failed to load config");

        assert!(global.verbose, "verbose should be loaded from config file");
        assert_eq!(config.effective_title(), "Sorting");
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.bench_names, ["F3/quicksort", "F"]);
        assert_eq!(config.bench_args, ["100", "0"]);
        assert_eq!(config.metric, Metric::AllocsPerOp);
        assert_eq!(config.output, Some("graphs".into()));
        assert!(!config.upload);
        Ok(())
    });
}

#[test]
fn test_partial_config_file_uses_defaults_for_missing_values() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[graph]\nmetric = \"mb-per-s\"\n")?;
        let figment = create_figment_from_file(&jail.directory().join("config.toml"))
            .expect("Failed to create figment");
        let config = GraphConfig::from_figment(&figment).expect("Failed to load config");

        assert_eq!(config.metric, Metric::MbPerS);
        assert_eq!(config.api_url, DEFAULT_API_URL, "api_url should use default");
        assert_eq!(
            config.effective_title(),
            "Graph: Benchmark results in MB/s",
            "Default title should follow the metric"
        );
        Ok(())
    });
}

#[test]
fn test_missing_explicit_config_file() {
    Jail::expect_with(|jail| {
        let error = create_figment(Some(jail.directory().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(
            error.kind(),
            GraphErrorKind::ConfigFileNotFound { .. }
        ));
        Ok(())
    });
}

#[test]
fn test_invalid_config_value() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[graph]\nmetric = \"furlongs\"\n")?;
        let figment = create_figment_from_file(&jail.directory().join("config.toml"))
            .expect("Failed to create figment");

        let error = GraphConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(error.kind(), GraphErrorKind::Config(_)));
        Ok(())
    });
}

// =============================================================================
// Environment Variable Tests
// =============================================================================

#[test]
fn test_environment_variables_override_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[graph]
title = "From file"
api_url = "http://from-file"
"#,
        )?;
        jail.set_env("BENCHGRAPH_GRAPH__TITLE", "From env");
        jail.set_env("BENCHGRAPH_GRAPH__UPLOAD", "false");
        jail.set_env("BENCHGRAPH_GLOBAL__VERBOSE", "true");

        let figment = create_figment_from_file(&jail.directory().join("config.toml"))
            .expect("Failed to create figment");
        let config = GraphConfig::from_figment(&figment).expect("Failed to load config");
        let global = GlobalConfig::from_figment(&figment).expect("Failed to load config");

        assert_eq!(
            config.effective_title(),
            "From env",
            "Environment variable should override config file for title"
        );
        assert_eq!(
            config.api_url, "http://from-file",
            "Config file should be used when no env var is set"
        );
        assert!(!config.upload, "Environment variable should set upload");
        assert!(global.verbose, "Environment variable should set verbose");
        Ok(())
    });
}

#[test]
fn test_environment_variables_without_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "")?;
        jail.set_env("BENCHGRAPH_GRAPH__METRIC", "bytes-per-op");
        jail.set_env("BENCHGRAPH_GRAPH__FUNCTION_SIGNATURE_PATTERN", "custom");

        let figment = create_figment_from_file(&jail.directory().join("config.toml"))
            .expect("Failed to create figment");
        let config = GraphConfig::from_figment(&figment).expect("Failed to load config");

        assert_eq!(config.metric, Metric::BytesPerOp);
        assert_eq!(config.function_signature_pattern, "custom");
        assert!(config.upload, "Default should be used for upload");
        Ok(())
    });
}
