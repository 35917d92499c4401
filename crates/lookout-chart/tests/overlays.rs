//! Overlay tests: anomaly markers and bound ribbons project through the
//! chart's own render context.

use lookout_chart::{
    AnomaliesPlot, AnomalyPoint, AxisOptions, BoundPlot, BoundPoint, ChartCore, Layer, Mark,
    Overlay, RenderContext, ScaleBuilder, Scene, Series,
};
use lookout_core::Margin;
use lookout_test_utils::fixtures::{self, TWO_POINTS};

fn context() -> (Vec<Series>, RenderContext) {
    let series = vec![Series::from_tuples("current", &TWO_POINTS)];
    let ctx = ScaleBuilder::new(100.0, 100.0)
        .margin(Margin::ZERO)
        .build(&series);
    (series, ctx)
}

fn overlay_marks(scene: &Scene, name: &'static str) -> Vec<Mark> {
    scene.marks_in(Layer::Overlay(name)).cloned().collect()
}

#[test]
fn test_anomalies_share_chart_coordinates() {
    let (series, ctx) = context();
    let anomalies = AnomaliesPlot::new(vec![AnomalyPoint::new(10.0, 5.0), AnomalyPoint::new(0.0, 1.0)]);
    let axis = AxisOptions::default();

    let mut scene = Scene::new();
    ChartCore::new(&ctx, &series, &axis).render(&mut scene, &[&anomalies]);

    let centers: Vec<_> = overlay_marks(&scene, AnomaliesPlot::NAME)
        .into_iter()
        .filter_map(|m| match m {
            Mark::Circle { center, .. } => Some((center.x, center.y)),
            _ => None,
        })
        .collect();
    assert_eq!(centers, vec![(100.0, 0.0), (0.0, 100.0)]);
}

#[test]
fn test_bound_ribbon_follows_upper_and_lower() {
    let (_, ctx) = context();
    let bounds = BoundPlot::new(vec![
        BoundPoint::new(0.0, 5.0, 1.0),
        BoundPoint::new(10.0, 3.0, 1.0).with_expected(2.0),
    ]);

    let mut scene = Scene::new();
    bounds.render(&ctx, &mut scene);

    let marks = overlay_marks(&scene, BoundPlot::NAME);
    assert_eq!(marks.len(), 1);
    let Mark::Ribbon { upper, lower, .. } = &marks[0] else {
        panic!("expected a ribbon, got {:?}", marks[0]);
    };
    assert_eq!(upper.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(), vec![(0.0, 0.0), (100.0, 50.0)]);
    assert_eq!(lower.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(), vec![(0.0, 100.0), (100.0, 100.0)]);
}

#[test]
fn test_unordered_bounds_are_sorted() {
    let (_, ctx) = context();
    let bounds = BoundPlot::new(vec![
        BoundPoint::new(10.0, 3.0, 1.0),
        BoundPoint::new(0.0, 5.0, 1.0),
    ]);

    let mut scene = Scene::new();
    bounds.render(&ctx, &mut scene);

    let marks = overlay_marks(&scene, BoundPlot::NAME);
    let Mark::Ribbon { upper, .. } = &marks[0] else {
        panic!("expected a ribbon");
    };
    let xs: Vec<f32> = upper.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 100.0]);
    // The overlay's own data is left untouched.
    assert_eq!(bounds.points[0].timestamp, 10.0);
}

#[test]
fn test_degenerate_bounds() {
    let (_, ctx) = context();

    let mut scene = Scene::new();
    BoundPlot::new(Vec::new()).render(&ctx, &mut scene);
    assert!(scene.is_empty());

    BoundPlot::new(vec![BoundPoint::new(0.0, 5.0, 1.0)]).render(&ctx, &mut scene);
    let marks = overlay_marks(&scene, BoundPlot::NAME);
    assert!(matches!(&marks[..], [Mark::Line { points, .. }] if points.len() == 2 && points[0].x == points[1].x));
}

#[test]
fn test_wave_bounds_enclose_series() {
    let data = fixtures::wave(64, 50.0, 10.0);
    let series = vec![Series::from_tuples("current", &data)];
    let ctx = ScaleBuilder::new(400.0, 200.0).build(&series);
    let bounds = BoundPlot::new(
        fixtures::wave_bounds(64, 50.0, 10.0, 2.0)
            .into_iter()
            .map(|(t, upper, lower)| BoundPoint::new(t, upper, lower))
            .collect(),
    );

    let mut scene = Scene::new();
    bounds.render(&ctx, &mut scene);

    let marks = overlay_marks(&scene, BoundPlot::NAME);
    let Mark::Ribbon { upper, lower, .. } = &marks[0] else {
        panic!("expected a ribbon");
    };
    assert_eq!(upper.len(), 64);
    // Larger values sit higher on screen.
    assert!(upper.iter().zip(lower).all(|(u, l)| u.y < l.y));
}

#[test]
fn test_non_finite_bound_points_are_skipped() {
    let (_, ctx) = context();
    let bounds = BoundPlot::new(vec![
        BoundPoint::new(0.0, 5.0, 1.0),
        BoundPoint::new(f64::NAN, 4.0, 2.0),
        BoundPoint::new(5.0, f64::INFINITY, 2.0),
        BoundPoint::new(10.0, 5.0, 1.0),
    ]);

    let mut scene = Scene::new();
    bounds.render(&ctx, &mut scene);

    let marks = overlay_marks(&scene, BoundPlot::NAME);
    let Mark::Ribbon { upper, lower, .. } = &marks[0] else {
        panic!("expected a ribbon");
    };
    assert_eq!(upper.len(), 2);
    assert!(upper.iter().chain(lower).all(|p| p.x.is_finite() && p.y.is_finite()));
    assert_eq!(upper[0], ctx.project(0.0, 5.0));
    assert_eq!(upper[1], ctx.project(10.0, 5.0));
}

#[test]
fn test_only_non_finite_bound_points_draw_nothing() {
    let (_, ctx) = context();
    let mut scene = Scene::new();
    BoundPlot::new(vec![BoundPoint::new(f64::NAN, 1.0, 0.0)]).render(&ctx, &mut scene);
    assert!(overlay_marks(&scene, BoundPlot::NAME).is_empty());
}
