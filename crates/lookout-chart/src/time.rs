//! Calendar-aware tick generation for time axes.
//!
//! Timestamps are epoch milliseconds and are interpreted in UTC.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

use crate::scale::Domain;

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
// Only used to pick an interval; month stepping itself is calendar based.
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;
// Well past any year count chrono can represent.
const MAX_YEARS: f64 = 1_000_000.0;

/// A tick on a time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTick {
    pub timestamp: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeInterval {
    Fixed(i64),
    Months(u32),
}

impl TimeInterval {
    fn approx_millis(self) -> i64 {
        match self {
            TimeInterval::Fixed(ms) => ms,
            TimeInterval::Months(n) => n as i64 * MONTH,
        }
    }

    fn label_format(self) -> &'static str {
        match self {
            TimeInterval::Fixed(ms) if ms < MINUTE => "%H:%M:%S",
            TimeInterval::Fixed(ms) if ms < DAY => "%H:%M",
            TimeInterval::Fixed(_) => "%b %d",
            TimeInterval::Months(n) if n < 12 => "%b %Y",
            TimeInterval::Months(_) => "%Y",
        }
    }
}

const INTERVALS: [TimeInterval; 19] = [
    TimeInterval::Fixed(SECOND),
    TimeInterval::Fixed(5 * SECOND),
    TimeInterval::Fixed(15 * SECOND),
    TimeInterval::Fixed(30 * SECOND),
    TimeInterval::Fixed(MINUTE),
    TimeInterval::Fixed(5 * MINUTE),
    TimeInterval::Fixed(15 * MINUTE),
    TimeInterval::Fixed(30 * MINUTE),
    TimeInterval::Fixed(HOUR),
    TimeInterval::Fixed(3 * HOUR),
    TimeInterval::Fixed(6 * HOUR),
    TimeInterval::Fixed(12 * HOUR),
    TimeInterval::Fixed(DAY),
    TimeInterval::Fixed(2 * DAY),
    TimeInterval::Fixed(WEEK),
    TimeInterval::Months(1),
    TimeInterval::Months(3),
    TimeInterval::Months(6),
    TimeInterval::Months(12),
];

/// Pick the interval whose length is closest to `target` milliseconds.
fn choose_interval(target: f64) -> TimeInterval {
    if target >= YEAR as f64 {
        let years = (target / YEAR as f64).round().clamp(1.0, MAX_YEARS) as u32;
        return TimeInterval::Months(years * 12);
    }

    INTERVALS
        .iter()
        .copied()
        .min_by(|a, b| {
            let da = (a.approx_millis() as f64 / target).ln().abs();
            let db = (b.approx_millis() as f64 / target).ln().abs();
            da.total_cmp(&db)
        })
        .unwrap_or(TimeInterval::Fixed(DAY))
}

fn first_of_month_at_or_after(ts: i64) -> Option<DateTime<Utc>> {
    let dt = DateTime::<Utc>::from_timestamp_millis(ts)?;
    let first = month_start(dt.year() as i64 * 12 + dt.month0() as i64)?;
    if first.timestamp_millis() >= ts {
        Some(first)
    } else {
        first.checked_add_months(Months::new(1))
    }
}

/// Midnight on the first day of the month with index `year * 12 + month0`.
fn month_start(month_index: i64) -> Option<DateTime<Utc>> {
    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month = month_index.rem_euclid(12) as u32 + 1;
    Some(NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?.and_utc())
}

fn within_calendar(domain: Domain) -> bool {
    let min = DateTime::<Utc>::MIN_UTC.timestamp_millis() as f64;
    let max = DateTime::<Utc>::MAX_UTC.timestamp_millis() as f64;
    domain.start >= min && domain.end <= max
}

fn format_label(ts: i64, interval: TimeInterval) -> String {
    DateTime::<Utc>::from_timestamp_millis(ts)
        .map(|dt| dt.format(interval.label_format()).to_string())
        .unwrap_or_default()
}

/// Ticks for a time domain, roughly `count` of them.
///
/// A degenerate domain yields a single tick. A non-finite domain, or one
/// reaching past the dates chrono can represent, yields none.
pub fn time_ticks(domain: Domain, count: usize) -> Vec<TimeTick> {
    let domain = domain.ordered();
    let finite = domain.start.is_finite() && domain.end.is_finite();
    if count == 0 || !finite || !within_calendar(domain) {
        return Vec::new();
    }

    let start = domain.start.ceil() as i64;
    let end = domain.end.floor() as i64;

    if domain.is_degenerate() {
        let interval = TimeInterval::Fixed(SECOND);
        return vec![TimeTick {
            timestamp: domain.start,
            label: format_label(start, interval),
        }];
    }

    let interval = choose_interval(domain.width() / count as f64);
    let mut out = Vec::new();

    match interval {
        TimeInterval::Fixed(step) => {
            let mut ts = start.div_euclid(step) * step;
            if ts < start {
                ts += step;
            }
            while ts <= end {
                out.push(TimeTick {
                    timestamp: ts as f64,
                    label: format_label(ts, interval),
                });
                ts += step;
            }
        }
        TimeInterval::Months(n) => {
            let step = n as i64;
            let mut cursor = first_of_month_at_or_after(start).and_then(|dt| {
                let index = dt.year() as i64 * 12 + dt.month0() as i64;
                month_start((index + step - 1).div_euclid(step) * step)
            });
            while let Some(dt) = cursor {
                let ts = dt.timestamp_millis();
                if ts > end {
                    break;
                }
                out.push(TimeTick {
                    timestamp: ts as f64,
                    label: format_label(ts, interval),
                });
                cursor = dt.checked_add_months(Months::new(n));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-01T00:00:00Z
    const JAN_1_2024: f64 = 1_704_067_200_000.0;

    #[test]
    fn test_hourly_ticks_are_aligned() {
        let ticks = time_ticks(Domain::new(JAN_1_2024, JAN_1_2024 + 5.0 * HOUR as f64), 5);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0].label, "00:00");
        assert_eq!(ticks[1].label, "01:00");
        assert!(ticks.iter().all(|t| t.timestamp as i64 % HOUR == 0));
    }

    #[test]
    fn test_daily_ticks_use_dates() {
        let ticks = time_ticks(Domain::new(JAN_1_2024, JAN_1_2024 + 4.0 * DAY as f64), 4);
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("Jan 01"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("Jan 05"));
    }

    #[test]
    fn test_monthly_ticks() {
        let end = JAN_1_2024 + 200.0 * DAY as f64;
        let ticks = time_ticks(Domain::new(JAN_1_2024, end), 6);
        assert!(!ticks.is_empty());
        assert_eq!(ticks[0].label, "Jan 2024");
        assert!(ticks.iter().all(|t| t.timestamp <= end));
    }

    #[test]
    fn test_degenerate_and_empty_domains() {
        assert_eq!(time_ticks(Domain::point(JAN_1_2024), 5).len(), 1);
        assert!(time_ticks(Domain::new(0.0, 1.0), 0).is_empty());
        assert!(time_ticks(Domain::new(f64::NAN, 1.0), 5).is_empty());
    }

    #[test]
    fn test_quarterly_ticks_are_aligned() {
        // Feb 2024 .. Dec 2024
        let start = JAN_1_2024 + 40.0 * DAY as f64;
        let end = JAN_1_2024 + 360.0 * DAY as f64;
        let ticks = time_ticks(Domain::new(start, end), 4);
        let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Apr 2024", "Jul 2024", "Oct 2024"]);
    }

    #[test]
    fn test_yearly_ticks_over_centuries() {
        let end = JAN_1_2024 + 300.0 * YEAR as f64;
        let ticks = time_ticks(Domain::new(JAN_1_2024, end), 5);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| t.timestamp >= JAN_1_2024 && t.timestamp <= end));
    }

    #[test]
    fn test_huge_finite_domain_yields_no_ticks() {
        assert!(time_ticks(Domain::new(0.0, 1e20), 5).is_empty());
        assert!(time_ticks(Domain::new(-1e20, 0.0), 5).is_empty());
        assert!(time_ticks(Domain::point(1e20), 5).is_empty());
    }

    #[test]
    fn test_interval_choice_is_bounded() {
        assert_eq!(choose_interval(1e30), TimeInterval::Months(MAX_YEARS as u32 * 12));
    }
}
