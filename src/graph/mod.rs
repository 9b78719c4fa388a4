pub mod table;
pub mod upload;

use std::io::BufRead;

pub use table::GraphTable;
pub use upload::upload;

use crate::{
    benchmark::{self, aggregate::Aggregator, pattern::CapturePattern},
    core::{GraphConfig, Result, output, output::console},
};

/// Read benchmark output from `input`, build the graph table and upload it.
///
/// The pattern is validated before the first line is read. Nothing is
/// written or uploaded when no line could be recorded.
pub async fn run<R: BufRead>(graph_config: GraphConfig, input: R) -> Result<()> {
    let pattern = CapturePattern::new(&graph_config.function_signature_pattern)?;

    let mut aggregator = Aggregator::new(
        graph_config.bench_names.clone(),
        graph_config.bench_args.clone(),
    );

    benchmark::process_stream(
        input,
        &mut aggregator,
        &pattern,
        graph_config.metric,
        console::echo_line,
    )?;

    let aggregation = aggregator.finish().map_err(|e| {
        e.with_hint(Some(
            "benchmarks should be named Benchmark<Name>_<Argument>, or pass --function-signature-pattern",
        ))
    })?;
    let table = GraphTable::from_aggregation(&aggregation);
    let title = graph_config.effective_title();

    if let Some(output_dir) = &graph_config.output {
        output::write_results(&table, &title, output_dir)?;
    }

    if !graph_config.upload {
        tracing::info!("Upload disabled, graph data not sent");
        return Ok(());
    }

    let data = table.to_json()?;

    println!("\nWaiting for server response ...");
    let graph_url = upload(&graph_config.api_url, &data, &title).await?;
    console::print_graph_url(&graph_url);

    Ok(())
}
