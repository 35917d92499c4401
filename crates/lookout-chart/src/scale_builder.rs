//! Derives chart scales from the enabled series and a pixel viewport.

use lookout_core::profiling::profile_function;
use lookout_core::{Margin, Size};

use crate::context::RenderContext;
use crate::scale::{Domain, LinearScale, TimeScale};
use crate::types::{DataPoint, Series};

/// Min/max of `accessor` over the points of every enabled series.
///
/// Non-finite values are skipped. Returns `None` when there is nothing to
/// measure.
pub fn extent<'a, I, F>(series: I, accessor: F) -> Option<Domain>
where
    I: IntoIterator<Item = &'a Series>,
    F: Fn(&DataPoint) -> f64,
{
    series
        .into_iter()
        .filter(|s| s.enabled)
        .flat_map(|s| s.points.iter())
        .map(accessor)
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<Domain>, v| {
            Some(acc.map_or(Domain::point(v), |d| d.include(v)))
        })
}

/// Like [`extent`], falling back to the degenerate domain `[0, 0]`.
pub fn min_max<F>(series: &[Series], accessor: F) -> Domain
where
    F: Fn(&DataPoint) -> f64,
{
    extent(series, accessor).unwrap_or(Domain::point(0.0))
}

/// How the y domain is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YDomainMode {
    /// Min to max of the visible values.
    #[default]
    Extent,
    /// Zero to the max of the visible values.
    ZeroToMax,
}

/// Builds a [`RenderContext`] for a set of series.
///
/// # Example
///
/// ```
/// use lookout_chart::{ScaleBuilder, Series};
/// use lookout_core::Margin;
///
/// let series = vec![Series::from_tuples("current", &[(0.0, 1.0), (10.0, 5.0)])];
/// let ctx = ScaleBuilder::new(100.0, 100.0).margin(Margin::ZERO).build(&series);
///
/// assert_eq!(ctx.x_scale.map(10.0), 100.0);
/// assert_eq!(ctx.y_scale.map(5.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBuilder {
    outer: Size,
    margin: Margin,
    top: f32,
    x_domain: Option<Domain>,
    y_mode: YDomainMode,
    nice_y: Option<usize>,
}

impl ScaleBuilder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            outer: Size::new(width, height),
            margin: Margin::ZERO,
            top: 0.0,
            x_domain: None,
            y_mode: YDomainMode::Extent,
            nice_y: None,
        }
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Vertical offset of the chart within the drawing surface.
    pub fn top(mut self, top: f32) -> Self {
        self.top = top;
        self
    }

    /// Restrict the x domain to a zoom window instead of the data extent.
    pub fn x_domain(mut self, domain: Option<Domain>) -> Self {
        self.x_domain = domain.map(Domain::ordered);
        self
    }

    pub fn y_mode(mut self, mode: YDomainMode) -> Self {
        self.y_mode = mode;
        self
    }

    /// Round the y domain outward to nice values for `count` ticks.
    pub fn nice_y(mut self, count: usize) -> Self {
        self.nice_y = Some(count);
        self
    }

    /// Compute the scales for `series`.
    pub fn build(&self, series: &[Series]) -> RenderContext {
        profile_function!();

        let inner = self.margin.inner_size(self.outer);
        let x_domain = self.x_domain.unwrap_or_else(|| min_max(series, |p| p.x));

        let visible_y = match self.x_domain {
            Some(window) => extent_within(series, window).or_else(|| extent(series, |p| p.y)),
            None => extent(series, |p| p.y),
        };
        let y_domain = match self.y_mode {
            YDomainMode::Extent => visible_y.unwrap_or(Domain::point(0.0)),
            YDomainMode::ZeroToMax => Domain::new(0.0, visible_y.map_or(0.0, |d| d.max())),
        };

        let mut y_scale = LinearScale::new(y_domain, [inner.height, 0.0]);
        if let Some(count) = self.nice_y {
            y_scale = y_scale.nice(count);
        }

        tracing::debug!(
            x_start = x_domain.start,
            x_end = x_domain.end,
            y_start = y_scale.domain().start,
            y_end = y_scale.domain().end,
            width = inner.width,
            height = inner.height,
            "built chart scales"
        );

        RenderContext {
            outer: self.outer,
            margin: self.margin,
            top: self.top,
            x_scale: TimeScale::new(x_domain, [0.0, inner.width]),
            y_scale,
        }
    }
}

fn extent_within(series: &[Series], window: Domain) -> Option<Domain> {
    series
        .iter()
        .filter(|s| s.enabled)
        .flat_map(|s| s.points.iter())
        .filter(|p| window.contains(p.x) && p.y.is_finite())
        .fold(None, |acc: Option<Domain>, p| {
            Some(acc.map_or(Domain::point(p.y), |d| d.include(p.y)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<Series> {
        vec![
            Series::from_tuples("a", &[(0.0, 1.0), (10.0, 5.0)]),
            Series::from_tuples("b", &[(-5.0, 100.0), (20.0, -3.0)]).with_enabled(false),
        ]
    }

    #[test]
    fn test_extent_ignores_disabled_series() {
        let series = series();
        assert_eq!(extent(&series, |p| p.x), Some(Domain::new(0.0, 10.0)));
        assert_eq!(extent(&series, |p| p.y), Some(Domain::new(1.0, 5.0)));
    }

    #[test]
    fn test_min_max_falls_back_to_point() {
        let series: Vec<Series> = series().into_iter().map(|s| s.with_enabled(false)).collect();
        assert_eq!(min_max(&series, |p| p.x), Domain::point(0.0));
    }

    #[test]
    fn test_zoom_window_limits_y_extent() {
        let series = vec![Series::from_tuples(
            "a",
            &[(0.0, 1.0), (5.0, 50.0), (10.0, 2.0), (15.0, 3.0)],
        )];
        let ctx = ScaleBuilder::new(100.0, 100.0)
            .x_domain(Some(Domain::new(9.0, 16.0)))
            .build(&series);
        assert_eq!(ctx.x_scale.domain(), Domain::new(9.0, 16.0));
        assert_eq!(ctx.y_scale.domain(), Domain::new(2.0, 3.0));
    }

    #[test]
    fn test_empty_zoom_window_falls_back_to_all_points() {
        let series = vec![Series::from_tuples("a", &[(0.0, 1.0), (10.0, 5.0)])];
        let ctx = ScaleBuilder::new(100.0, 100.0)
            .x_domain(Some(Domain::new(20.0, 30.0)))
            .build(&series);
        assert_eq!(ctx.y_scale.domain(), Domain::new(1.0, 5.0));
    }

    #[test]
    fn test_zero_to_max_mode() {
        let series = vec![Series::from_tuples("a", &[(0.0, 3.0), (10.0, 97.0)])];
        let ctx = ScaleBuilder::new(100.0, 100.0)
            .y_mode(YDomainMode::ZeroToMax)
            .nice_y(10)
            .build(&series);
        assert_eq!(ctx.y_scale.domain(), Domain::new(0.0, 100.0));
    }
}
