use chrono::NaiveDate;
use log::debug;
use std::str::FromStr;
use thiserror::Error;

// These are tedious arrays to aid the lookup of month lengths. Unfortunately the
// `chrono` library does not give us helpers for this.
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const MONTH_LENGTHS_LEAP: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The nominal components of a `YYYY-MM-DD` date string.
///
/// "Nominal" because the day is not checked against the month length: upstream
/// records are lenient and "2024-02-31" must still parse. Use
/// [`DateParts::clamped`] to resolve the parts into a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseDateError {
    #[error("date string is empty")]
    Empty,
    #[error("expected 3 date components, found {0}")]
    ComponentCount(usize),
    #[error("date component '{0}' is not a number")]
    NonNumeric(String),
    #[error("year, month and day must be non-zero")]
    ZeroComponent,
}

impl FromStr for DateParts {
    type Err = ParseDateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(ParseDateError::Empty);
        }

        // Take the date portion only. Anything after the first time separator (a
        // 'T' or a space) is time-of-day or timezone noise. The components are
        // never converted through an instant, so a record stamped late at night
        // near a UTC boundary cannot shift into the neighbouring day.
        let date_portion = raw.split(|c| c == 'T' || c == ' ').next().unwrap_or(raw);

        let components: Vec<&str> = date_portion.split('-').collect();
        if components.len() != 3 {
            return Err(ParseDateError::ComponentCount(components.len()));
        }

        let mut numbers = [0i32; 3];
        for (n, c) in numbers.iter_mut().zip(components.iter()) {
            *n = c
                .trim()
                .parse()
                .map_err(|_| ParseDateError::NonNumeric(c.to_string()))?;
        }

        let (year, month, day) = (numbers[0], numbers[1], numbers[2]);
        if year == 0 || month <= 0 || day <= 0 {
            return Err(ParseDateError::ZeroComponent);
        }

        Ok(DateParts {
            year,
            month: month as u32,
            day: day as u32,
        })
    }
}

impl DateParts {
    /// Resolves nominal parts into a real calendar date, clamping the day to the
    /// last day of the month ("2024-02-31" resolves to 2024-02-29). A month
    /// outside 1-12 cannot be resolved.
    pub fn clamped(&self) -> Option<NaiveDate> {
        if self.month > 12 {
            debug!("month {} cannot be resolved to a calendar date", self.month);
            return None;
        }

        let day = self.day.min(days_in_month(self.year, self.month));

        // Only fails for years beyond chrono's representable range
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// Parses a loosely-formatted `YYYY-MM-DD` date string, ignoring any time or
/// timezone suffix.
///
/// Returns `None` rather than an error: a record with an unusable date is
/// simply excluded from every cycle.
pub fn parse_date(raw: &str) -> Option<DateParts> {
    match raw.parse::<DateParts>() {
        Ok(parts) => Some(parts),
        Err(e) => {
            debug!("discarding unparseable date '{}': {}", raw, e);
            None
        }
    }
}

/// Returns the number of days in the given month, accounting for leap years.
///
/// # Panics
///
/// Panics if `month` is outside 1-12. Month values from untrusted input go
/// through [`DateParts::clamped`], which rejects them as `None` instead.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    assert!(month >= 1 && month <= 12, "month {} is out of range", month);

    let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
    if leap {
        MONTH_LENGTHS_LEAP[(month - 1) as usize]
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}

/// Builds a date from components, clamping `day` to the month length. For
/// example, day 31 in April yields April 30.
///
/// # Panics
///
/// Panics if `month` is outside 1-12; see [`days_in_month`].
pub fn safe_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month));

    // The clamped day is always valid for its month
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
