use geom::{Distance, PolyLine, Polygon, Pt2D};
use widgetry::{Color, EventCtx, GeomBatch, Line, TextExt, Widget};

use model::TelemetryChart;

const PLOT_WIDTH: f64 = 280.0;
const PLOT_HEIGHT: f64 = 110.0;

/// One static line chart: title, legend, the plot itself, and the x-axis
/// endpoints. Rendering is a pure function of the series, so redrawing (or
/// exporting) an unchanged chart is deterministic.
pub fn chart_widget(ctx: &mut EventCtx, chart: &TelemetryChart) -> Widget {
    let (min, max) = chart.value_range();
    let span = (max - min).max(1e-9);

    let mut batch = GeomBatch::new();
    batch.push(
        Color::grey(0.15),
        Polygon::rectangle(PLOT_WIDTH, PLOT_HEIGHT),
    );
    for i in 1..4 {
        let y = PLOT_HEIGHT * (i as f64) / 4.0;
        batch.push(
            Color::grey(0.25),
            Polygon::rectangle(PLOT_WIDTH, 1.0).translate(0.0, y),
        );
    }

    for series in &chart.series {
        if series.values.len() < 2 {
            continue;
        }
        let last = (series.values.len() - 1) as f64;
        let pts = series
            .values
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                let x = (idx as f64) / last * PLOT_WIDTH;
                let y = PLOT_HEIGHT - (value - min) / span * PLOT_HEIGHT;
                Pt2D::new(x, y)
            })
            .collect();
        batch.push(
            Color::hex(series.color),
            PolyLine::must_new(pts).make_polygons(Distance::meters(1.5)),
        );
    }

    let legend = Widget::row(
        chart
            .series
            .iter()
            .map(|series| {
                Line(series.label)
                    .fg(Color::hex(series.color))
                    .small()
                    .into_widget(ctx)
            })
            .collect(),
    )
    .evenly_spaced();

    let x_axis = Widget::row(vec![
        chart.x_labels.first().cloned().unwrap_or("").text_widget(ctx),
        chart.x_labels.last().cloned().unwrap_or("").text_widget(ctx),
    ])
    .evenly_spaced();

    Widget::col(vec![
        Line(chart.title).secondary().into_widget(ctx),
        legend,
        Widget::row(vec![
            Widget::col(vec![
                format!("{max:.1}").text_widget(ctx),
                format!("{min:.1}").text_widget(ctx),
            ])
            .evenly_spaced(),
            batch.into_widget(ctx),
        ]),
        x_axis,
    ])
}
