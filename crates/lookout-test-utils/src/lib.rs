//! Test utilities for the Lookout crates.
//!
//! - [`Recorder`]: captures values passed to callbacks
//! - [`fixtures`]: raw data shapes shared across test suites
//!
//! Fixtures are plain tuples so this crate stays independent of the crates
//! it helps test.

use std::sync::Arc;

use parking_lot::Mutex;

/// Collects every value handed to the callbacks it creates.
///
/// # Example
///
/// ```
/// use lookout_test_utils::Recorder;
///
/// let recorder = Recorder::new();
/// let mut sink = recorder.sink();
/// sink(1);
/// sink(2);
/// assert_eq!(recorder.take(), vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: 'static> Recorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that records its argument.
    pub fn sink(&self) -> impl FnMut(T) + 'static {
        let values = Arc::clone(&self.values);
        move |value| values.lock().push(value)
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.values.lock())
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl<T: Clone + 'static> Recorder<T> {
    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }

    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }
}

pub mod fixtures {
    //! Data shapes shared by tests and benchmarks.

    /// One minute in epoch milliseconds.
    pub const MINUTE_MS: f64 = 60_000.0;

    /// The two-point scenario used to check scale endpoints.
    pub const TWO_POINTS: [(f64, f64); 2] = [(0.0, 1.0), (10.0, 5.0)];

    /// `n` points one `step` apart on x with y rising linearly.
    pub fn ramp(n: usize, step: f64) -> Vec<(f64, f64)> {
        (0..n).map(|i| (i as f64 * step, i as f64)).collect()
    }

    /// `n` minute-spaced points of a sine wave around `base`.
    pub fn wave(n: usize, base: f64, amplitude: f64) -> Vec<(f64, f64)> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                (t * MINUTE_MS, base + amplitude * (t / 8.0).sin())
            })
            .collect()
    }

    /// Bounds `(timestamp, upper, lower)` hugging [`wave`].
    pub fn wave_bounds(n: usize, base: f64, amplitude: f64, width: f64) -> Vec<(f64, f64, f64)> {
        wave(n, base, amplitude)
            .into_iter()
            .map(|(x, y)| (x, y + width, y - width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_shares_values_across_clones() {
        let recorder = Recorder::new();
        let other = recorder.clone();
        let mut sink = other.sink();
        sink("a");
        assert_eq!(recorder.len(), 1);
        assert_eq!(recorder.last(), Some("a"));
    }

    #[test]
    fn test_ramp() {
        assert_eq!(fixtures::ramp(3, 10.0), vec![(0.0, 0.0), (10.0, 1.0), (20.0, 2.0)]);
    }
}
