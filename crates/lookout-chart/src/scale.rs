//! Domain-to-pixel scales.
//!
//! [`LinearScale`] maps numeric values, [`TimeScale`] maps epoch milliseconds.
//! A degenerate domain (zero width) maps every value to the middle of the
//! range, so an empty chart still renders without NaN coordinates.

use crate::time::{TimeTick, time_ticks};

/// A closed interval of data values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// A zero-width domain at `value`.
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// The same interval with `start <= end`.
    pub fn ordered(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self::new(self.end, self.start)
        }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_degenerate(&self) -> bool {
        self.width().abs() < f64::EPSILON
    }

    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min(), self.max())
    }

    /// Grow the domain so it includes `value`.
    pub fn include(self, value: f64) -> Self {
        Self::new(self.start.min(value), self.end.max(value))
    }

    /// Intersection of two domains, `None` when they do not overlap.
    pub fn intersect(&self, other: &Domain) -> Option<Domain> {
        let start = self.min().max(other.min());
        let end = self.max().min(other.max());
        (start <= end).then_some(Domain::new(start, end))
    }
}

/// A linear mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (e.g. `[height, 0]` for a y axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: Domain,
    range: [f32; 2],
}

impl LinearScale {
    pub fn new(domain: Domain, range: [f32; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn range(&self) -> [f32; 2] {
        self.range
    }

    /// Map a domain value to a pixel coordinate.
    pub fn map(&self, value: f64) -> f32 {
        let [r0, r1] = self.range;
        let span = (r1 - r0) as f64;
        let offset = if self.domain.is_degenerate() {
            span * 0.5
        } else {
            (value - self.domain.start) * span / self.domain.width()
        };
        r0 + offset as f32
    }

    /// Map a pixel coordinate back to a domain value.
    pub fn invert(&self, pixel: f32) -> f64 {
        let [r0, r1] = self.range;
        if (r1 - r0).abs() < f32::EPSILON {
            return self.domain.start + self.domain.width() * 0.5;
        }
        self.domain.start + (pixel - r0) as f64 * self.domain.width() / (r1 - r0) as f64
    }

    /// Extend the domain to round values, following d3's `nice`.
    pub fn nice(mut self, count: usize) -> Self {
        self.domain = nice_domain(self.domain, count);
        self
    }

    /// Round tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.start, self.domain.end, count)
    }
}

/// A linear scale over epoch milliseconds with calendar-aware ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: Domain, range: [f32; 2]) -> Self {
        Self {
            inner: LinearScale::new(domain, range),
        }
    }

    pub fn domain(&self) -> Domain {
        self.inner.domain()
    }

    pub fn range(&self) -> [f32; 2] {
        self.inner.range()
    }

    pub fn map(&self, timestamp: f64) -> f32 {
        self.inner.map(timestamp)
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.inner.invert(pixel)
    }

    /// Tick timestamps with labels, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<TimeTick> {
        time_ticks(self.domain(), count)
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Returns `(i1, i2, inc)`; a negative `inc` means the step is `1 / -inc`.
fn tick_range(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scaled = 10f64.powf(-power) / factor;
        i1 = (start * scaled).round();
        i2 = (stop * scaled).round();
        if i1 / scaled < start {
            i1 += 1.0;
        }
        if i2 / scaled > stop {
            i2 -= 1.0;
        }
        inc = -scaled;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_range(start, stop, count as f64).2
}

/// Round tick values between `start` and `stop`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_range(lo, hi, count as f64);
    if !(i2 >= i1) || !inc.is_finite() {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let value = |i: usize| {
        let k = i1 + i as f64;
        if inc < 0.0 { k / -inc } else { k * inc }
    };
    let mut out: Vec<f64> = (0..n).map(value).collect();
    if reverse {
        out.reverse();
    }
    out
}

fn nice_domain(domain: Domain, count: usize) -> Domain {
    if domain.is_degenerate() || !domain.start.is_finite() || !domain.end.is_finite() {
        return domain;
    }

    let reverse = domain.end < domain.start;
    let (mut start, mut stop) = if reverse {
        (domain.end, domain.start)
    } else {
        (domain.start, domain.end)
    };

    let mut prestep = None;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if prestep == Some(step) {
            return if reverse {
                Domain::new(stop, start)
            } else {
                Domain::new(start, stop)
            };
        } else if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }
    domain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_map_and_invert() {
        let scale = LinearScale::new(Domain::new(1.0, 5.0), [100.0, 0.0]);
        assert_eq!(scale.map(5.0), 0.0);
        assert_eq!(scale.map(1.0), 100.0);
        assert_eq!(scale.map(3.0), 50.0);
        assert!((scale.invert(25.0) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_domain_maps_to_range_middle() {
        let scale = LinearScale::new(Domain::point(0.0), [0.0, 200.0]);
        assert_eq!(scale.map(0.0), 100.0);
        assert_eq!(scale.map(42.0), 100.0);
        assert!(scale.map(f64::MAX).is_finite());
    }

    #[test]
    fn test_degenerate_range_inverts_to_domain_middle() {
        let scale = LinearScale::new(Domain::new(0.0, 10.0), [0.0, 0.0]);
        assert_eq!(scale.invert(0.0), 5.0);
    }

    #[test]
    fn test_nice_rounds_outward() {
        let scale = LinearScale::new(Domain::new(0.0, 97.0), [0.0, 1.0]).nice(10);
        assert_eq!(scale.domain(), Domain::new(0.0, 100.0));

        let scale = LinearScale::new(Domain::new(0.13, 0.87), [0.0, 1.0]).nice(10);
        let d = scale.domain();
        assert!((d.start - 0.1).abs() < 1e-12);
        assert!((d.end - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_nice_keeps_degenerate_domain() {
        let scale = LinearScale::new(Domain::point(0.0), [0.0, 1.0]).nice(10);
        assert_eq!(scale.domain(), Domain::point(0.0));
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_domain_helpers() {
        let d = Domain::new(10.0, 2.0).ordered();
        assert_eq!(d, Domain::new(2.0, 10.0));
        assert_eq!(d.clamp(20.0), 10.0);
        assert_eq!(d.include(-1.0), Domain::new(-1.0, 10.0));
        assert_eq!(
            d.intersect(&Domain::new(5.0, 30.0)),
            Some(Domain::new(5.0, 10.0))
        );
        assert_eq!(d.intersect(&Domain::new(11.0, 30.0)), None);
    }
}
