//! Headless walk-through of the chart and wizard flows.
//!
//! Builds a chart with anomaly and bound overlays, zooms it by dragging the
//! brush, then runs the datasource wizard and alert-type selection.
//!
//! Run with `RUST_LOG=debug` to see scale builds and brush commits.

use lookout::prelude::*;
use lookout::wizard::has_multidimension;

const MINUTE: f64 = 60_000.0;

fn sample_series() -> (Vec<Series>, Vec<AnomalyPoint>, Vec<BoundPoint>) {
    let points: Vec<(f64, f64)> = (0..240)
        .map(|i| {
            let t = i as f64;
            let spike = if i == 180 { 40.0 } else { 0.0 };
            (t * MINUTE, 100.0 + 15.0 * (t / 20.0).sin() + spike)
        })
        .collect();

    let anomalies = vec![AnomalyPoint::new(180.0 * MINUTE, points[180].1)];
    let bounds = points
        .iter()
        .map(|&(t, y)| BoundPoint::new(t, y + 10.0, y - 10.0).with_expected(y))
        .collect();

    let series = vec![
        Series::from_tuples("current", &points),
        Series::from_tuples("baseline", &points).with_kind(SeriesKind::Area),
    ];
    (series, anomalies, bounds)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_toml_str(
        r#"
        [chart]
        brush_height = 90.0

        [logging]
        filter = "info,lookout_chart=debug"
        "#,
    )?;
    lookout::init(&config);
    lookout::core::profiling::set_enabled(true);

    let (series, anomalies, bounds) = sample_series();
    let mut chart = lookout::time_series_chart(800.0, 400.0, &config)
        .with_series(series)
        .with_plot_bands(vec![PlotBand::new("deploy", 60.0 * MINUTE, 75.0 * MINUTE)])
        .with_overlay(BoundPlot::new(bounds))
        .with_overlay(AnomaliesPlot::new(anomalies))
        .on_zoom(|zoom| tracing::info!(?zoom, "zoom window"));

    lookout::core::profiling::new_frame();
    let scene = chart.render();
    tracing::info!(marks = scene.len(), "initial render");

    let area = chart
        .brush()
        .map(|b| b.controller().area())
        .ok_or("brush disabled")?;
    let row = area.center().y;
    chart.handle_pointer(PointerEvent::Down(Vec2::new(area.x + area.width * 0.6, row)));
    chart.handle_pointer(PointerEvent::Move(Vec2::new(area.x + area.width * 0.8, row)));
    chart.handle_pointer(PointerEvent::Up(Vec2::new(area.x + area.width * 0.8, row)));

    lookout::core::profiling::new_frame();
    let scene = chart.render();
    tracing::info!(
        marks = scene.len(),
        y_domain = ?chart.detail_context().y_scale.domain(),
        "zoomed render"
    );

    let mut wizard = DatasourceWizard::datasource(None)?
        .on_finish(|datasource| tracing::info!(name = %datasource.name, "datasource created"));
    wizard.set_editor_text(r#"{"name": "events", "type": "pinot"}"#);
    for _ in 0..wizard.steps().len() {
        match wizard.next() {
            Transition::Advanced(_) => tracing::info!(step = wizard.view().title_key, "wizard step"),
            Transition::Blocked(message) => return Err(message.into()),
            _ => break,
        }
    }

    let templates = ["startree-threshold", "startree-threshold-dx", "startree-ets"];
    let mut selection = AlertTypeSelection::new(&templates)
        .on_alert_property_change(|change| tracing::info!(template = %change.template.name, "template chosen"));
    selection.select("Threshold");
    tracing::info!(multidimension = has_multidimension(&templates), "alert types");

    Ok(())
}
