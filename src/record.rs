use crate::aggregate::{parse_amount, DatedAmount};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A contribution row as delivered by the data-access layer. Amounts and dates
/// arrive as strings; see [`DatedAmount::from_raw`] for how they are
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contribution {
    pub contributionid: i64,
    pub memberid: i64,
    pub amount: String,
    pub contributeddate: String,
    pub createdat: String,
}

/// A cause (outgoing donation) row as delivered by the data-access layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cause {
    pub causeid: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    pub createdat: String,
}

impl Contribution {
    /// Reduces the row to the fields cycle accounting needs. Contributions are
    /// dated by when the money was contributed, not when the row was created.
    pub fn dated_amount(&self) -> Option<DatedAmount> {
        DatedAmount::from_raw(&self.contributeddate, &self.amount)
    }

    /// The amount as a decimal, zero when malformed.
    pub fn parsed_amount(&self) -> Decimal {
        parse_amount(&self.amount)
    }
}

impl Cause {
    /// Reduces the row to the fields cycle accounting needs. A cause with no
    /// amount counts as zero.
    pub fn dated_amount(&self) -> Option<DatedAmount> {
        let amount = self.amount.as_deref().unwrap_or("0");
        DatedAmount::from_raw(&self.createdat, amount)
    }

    /// The amount as a decimal, zero when absent or malformed.
    pub fn parsed_amount(&self) -> Decimal {
        self.amount.as_deref().map(parse_amount).unwrap_or(Decimal::ZERO)
    }
}

/// Reduces contribution rows to dated amounts, dropping any whose date cannot
/// be parsed.
pub fn contribution_amounts(contributions: &[Contribution]) -> Vec<DatedAmount> {
    contributions.iter().filter_map(|c| c.dated_amount()).collect()
}

/// Reduces cause rows to dated amounts, dropping any whose date cannot be
/// parsed.
pub fn cause_amounts(causes: &[Cause]) -> Vec<DatedAmount> {
    causes.iter().filter_map(|c| c.dated_amount()).collect()
}

/// The subset of `contributions` made by `member_id`.
pub fn member_contributions(contributions: &[Contribution], member_id: i64) -> Vec<&Contribution> {
    contributions
        .iter()
        .filter(|c| c.memberid == member_id)
        .collect()
}

/// A member's lifetime contribution total.
pub fn member_total(contributions: &[Contribution], member_id: i64) -> Decimal {
    contributions
        .iter()
        .filter(|c| c.memberid == member_id)
        .map(|c| c.parsed_amount())
        .sum()
}

/// Collapses rows into the `(member id, amount)` pairs the rank calculator
/// takes.
pub fn rank_pairs(contributions: &[Contribution]) -> Vec<(i64, Decimal)> {
    contributions
        .iter()
        .map(|c| (c.memberid, c.parsed_amount()))
        .collect()
}
