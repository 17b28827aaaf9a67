use crate::cycle::CycleRange;
use crate::date::parse_date;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

/// One contribution or cause reduced to the two fields cycle accounting needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedAmount {
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl DatedAmount {
    /// Builds a record from the loosely-typed strings the data layer supplies.
    ///
    /// A date that doesn't parse drops the record entirely: it can never be
    /// attributed to a cycle. A malformed amount is counted as zero so that a
    /// partially bad row still registers as activity.
    pub fn from_raw(date: &str, amount: &str) -> Option<DatedAmount> {
        let date = parse_date(date)?.clamped()?;

        Some(DatedAmount {
            date,
            amount: parse_amount(amount),
        })
    }
}

/// Parses a decimal amount string, treating anything unparseable as zero.
pub fn parse_amount(raw: &str) -> Decimal {
    match raw.trim().parse() {
        Ok(amount) => amount,
        Err(_) => {
            debug!("treating malformed amount '{}' as zero", raw);
            Decimal::ZERO
        }
    }
}

/// Retains the records whose date falls within `range` (start inclusive, end
/// exclusive). Comparison is by calendar date value; input order is preserved
/// but nothing downstream relies on it.
pub fn filter_in_range(records: &[DatedAmount], range: &CycleRange) -> Vec<DatedAmount> {
    records
        .iter()
        .copied()
        .filter(|r| range.contains(r.date))
        .collect()
}

/// Totals the given records. Addition over `Decimal`s, so sums of many small
/// contributions stay exact.
pub fn sum(records: &[DatedAmount]) -> Decimal {
    records.iter().map(|r| r.amount).sum()
}

/// Totals the records that fall within `range`.
pub fn cycle_total(records: &[DatedAmount], range: &CycleRange) -> Decimal {
    records
        .iter()
        .filter(|r| range.contains(r.date))
        .map(|r| r.amount)
        .sum()
}
