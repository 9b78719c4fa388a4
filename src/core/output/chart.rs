use std::path::Path;

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::AxisType,
    series::Bar,
    theme::Theme,
};

use crate::{Result, core::output::ResultWriter, graph::GraphTable};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 500;

/// Renders the table as a grouped bar chart SVG, one series per name.
pub struct ChartWriter {
    title: String,
}

impl ChartWriter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn chart(&self, table: &GraphTable) -> Chart {
        let mut chart = Chart::new()
            .title(Title::new().text(self.title.clone()))
            .legend(Legend::new())
            .grid(
                Grid::new()
                    .left("3%")
                    .right("4%")
                    .bottom("10%")
                    .contain_label(true),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .data(table.args.clone()),
            )
            .y_axis(Axis::new().type_(AxisType::Value));

        for (index, name) in table.names.iter().enumerate() {
            // Gaps are drawn as empty bars
            let values: Vec<f64> = table
                .column(index)
                .into_iter()
                .map(|cell| cell.unwrap_or(0.0))
                .collect();
            chart = chart.series(Bar::new().name(name.clone()).data(values));
        }

        chart
    }
}

impl ResultWriter for ChartWriter {
    fn write(&self, table: &GraphTable, path: &Path) -> Result<()> {
        let mut renderer = ImageRenderer::new(WIDTH, HEIGHT).theme(Theme::Walden);
        renderer.save(&self.chart(table), path)?;

        tracing::info!("Chart written to {}", path.display());
        Ok(())
    }
}
