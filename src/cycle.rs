use crate::date::safe_date;
use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use std::env;

// Environment variable that overrides the day of the month a donation cycle
// starts on.
const START_DAY_VAR: &str = "DONATION_CYCLE_START_DAY";

const DEFAULT_START_DAY: u32 = 1;

/// Cycle configuration, read once at startup and passed around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleConfig {
    /// Day of the month a new donation cycle begins, always within 1-31.
    pub start_day: u32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        CycleConfig {
            start_day: DEFAULT_START_DAY,
        }
    }
}

impl CycleConfig {
    /// Builds a config from an explicit start day, clamping it into 1-31.
    pub fn new(start_day: i64) -> Self {
        let clamped = if start_day < 1 {
            1
        } else if start_day > 31 {
            31
        } else {
            start_day
        };

        if clamped != start_day {
            warn!("cycle start day {} is out of range - clamped to {}", start_day, clamped);
        }

        CycleConfig {
            start_day: clamped as u32,
        }
    }

    /// Reads the start day from `DONATION_CYCLE_START_DAY`. An absent or
    /// non-numeric value falls back to the default of 1; an out-of-range value
    /// is clamped. Configuration problems are never surfaced as errors.
    pub fn from_env() -> Self {
        CycleConfig::from_raw(env::var(START_DAY_VAR).ok().as_deref())
    }

    // Split from `from_env` so the parsing rules are testable without touching
    // the process environment.
    fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(day) => CycleConfig::new(day),
                Err(_) => {
                    warn!(
                        "{} is not an integer ('{}') - using default start day",
                        START_DAY_VAR, value
                    );
                    CycleConfig::default()
                }
            },
            None => CycleConfig::default(),
        }
    }
}

/// A half-open donation cycle window: `start` is included, `end` excluded, so
/// a record landing exactly on `end` belongs to the next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CycleRange {
    /// Returns the cycle that `today` falls in for the given start day.
    ///
    /// The candidate start is the start day within `today`'s month, clamped to
    /// the month length (start day 31 in April yields April 30). If `today`
    /// hasn't reached the candidate yet, the active cycle began in the previous
    /// month instead. The end is the equivalent clamped day one month after the
    /// start. `today` always satisfies `start <= today < end`.
    ///
    /// `start_day` must already be within 1-31; see [`CycleConfig`].
    pub fn current(today: NaiveDate, start_day: u32) -> CycleRange {
        let candidate = safe_date(today.year(), today.month(), start_day);

        let start = if today >= candidate {
            candidate
        } else {
            let (year, month) = previous_month(today.year(), today.month());
            safe_date(year, month, start_day)
        };

        let (end_year, end_month) = next_month(start.year(), start.month());
        let end = safe_date(end_year, end_month, start_day);

        debug!(
            "cycle for {} with start day {} is [{}, {})",
            today, start_day, start, end
        );

        CycleRange { start, end }
    }

    /// Whether `date` falls within this cycle.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

// Month arithmetic with year rollover. These stay as (year, month) pairs
// because the day still needs clamping against the target month.
fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
