use plotly::common::{DashType, Line, Mode};
use plotly::layout::{Annotation, Axis, HoverMode, Layout, Margin};
use plotly::{Plot, Scatter};

use crate::trend::{SeriesRole, TrendDataset, TrendSeries};

/// Line chart comparing the brand's search interest against its competitors.
///
/// Competitors are drawn first as thin dotted lines so the brand series,
/// thick with markers, sits on top.
pub fn plot_trend(dataset: &TrendDataset) -> Plot {
    let mut plot = Plot::new();

    let competitors = dataset
        .series
        .iter()
        .filter(|s| s.role == SeriesRole::Competitor);
    let brands = dataset.series.iter().filter(|s| s.role == SeriesRole::Brand);

    for series in competitors.chain(brands) {
        plot.add_trace(series_trace(dataset, series));
    }

    let annotations: Vec<Annotation> = dataset
        .annotations
        .iter()
        .map(|a| {
            Annotation::new()
                .x(a.label)
                .y(a.value as f64)
                .text(a.text)
                .show_arrow(true)
                .arrow_head(1)
        })
        .collect();

    plot.set_layout(
        Layout::new()
            .title(dataset.title)
            .x_axis(Axis::new().title(dataset.x_title))
            .y_axis(Axis::new().title(dataset.y_title))
            .hover_mode(HoverMode::XUnified)
            .height(400)
            .margin(Margin::new().left(20).right(20).top(40).bottom(20))
            .annotations(annotations),
    );

    plot
}

fn series_trace(dataset: &TrendDataset, series: &TrendSeries) -> Box<Scatter<&'static str, u32>> {
    let legend = series.legend();
    let trace = Scatter::new(dataset.labels.to_vec(), series.values.to_vec()).name(&legend);

    match series.role {
        SeriesRole::Brand => trace
            .mode(Mode::LinesMarkers)
            .line(Line::new().color(series.color).width(5.0)),
        SeriesRole::Competitor => trace
            .mode(Mode::Lines)
            .line(Line::new().color(series.color).width(2.0).dash(DashType::Dot)),
    }
}
