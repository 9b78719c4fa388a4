//! Main binary entrypoint for benchgraph.
//!
//! Parses CLI arguments, loads layered configuration, sets up logging, and
//! pipes stdin through the graph pipeline.

use benchgraph::{
    GlobalConfig, GraphConfig, Result,
    core::{Metric, config::create_figment},
    graph,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "benchgraph")]
#[command(about = "Turn `go test -bench` output read from stdin into a graph")]
struct Cli {
    #[arg(
        long = "obn",
        value_delimiter = ',',
        help = "Comma-separated list of benchmark names. Graph elements follow the benchmark output order unless given here."
    )]
    bench_names: Vec<String>,

    #[arg(
        long = "oba",
        value_delimiter = ',',
        help = "Comma-separated list of benchmark arguments. Graph elements follow the benchmark output order unless given here."
    )]
    bench_args: Vec<String>,

    #[arg(long, help = "Title of the graph")]
    title: Option<String>,

    #[arg(long = "apiurl", help = "URL of the graph server API")]
    api_url: Option<String>,

    #[arg(
        long,
        help = "Regex extracting the functionName, functionArguments and numberOfThreads groups from a benchmark name"
    )]
    function_signature_pattern: Option<String>,

    #[arg(long, help = "Which benchmark measurement to graph")]
    metric: Option<Metric>,

    #[arg(long, help = "Directory to also write results.csv and results.svg into")]
    output: Option<PathBuf>,

    #[arg(long, help = "Don't send the graph data to the server")]
    no_upload: bool,

    #[arg(long, help = "Config file (defaults to <config dir>/benchgraph/config.toml)")]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// CLI flags take priority over every other configuration layer
    fn apply(self, global_config: &mut GlobalConfig, graph_config: &mut GraphConfig) {
        global_config.verbose |= self.verbose;

        if !self.bench_names.is_empty() {
            graph_config.bench_names = self.bench_names;
        }
        if !self.bench_args.is_empty() {
            graph_config.bench_args = self.bench_args;
        }
        if let Some(title) = self.title {
            graph_config.title = Some(title);
        }
        if let Some(api_url) = self.api_url {
            graph_config.api_url = api_url;
        }
        if let Some(pattern) = self.function_signature_pattern {
            graph_config.function_signature_pattern = pattern;
        }
        if let Some(metric) = self.metric {
            graph_config.metric = metric;
        }
        if let Some(output) = self.output {
            graph_config.output = Some(output);
        }
        if self.no_upload {
            graph_config.upload = false;
        }
    }
}

fn load_config(cli: Cli) -> Result<(GlobalConfig, GraphConfig)> {
    let figment = create_figment(cli.config.as_deref())?;
    let mut global_config = GlobalConfig::from_figment(&figment)?;
    let mut graph_config = GraphConfig::from_figment(&figment)?;

    cli.apply(&mut global_config, &mut graph_config);
    Ok((global_config, graph_config))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse input
    let cli = Cli::parse();
    let cli_verbose = cli.verbose;

    let result = match load_config(cli) {
        Ok((global_config, graph_config)) => {
            init_tracing(global_config.verbose);
            tracing::debug!("Graph config: {:?}", graph_config);

            graph::run(graph_config, std::io::stdin().lock()).await
        }
        Err(e) => {
            init_tracing(cli_verbose);
            Err(e)
        }
    };

    // If anything results in an error, print and exit
    if let Err(e) = result {
        tracing::error!("{e}");

        std::process::exit(1);
    }

    Ok(())
}

/// Toggle the tracing level. Logs go to stderr, stdout carries the echo.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
