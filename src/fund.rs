use crate::record::{Cause, Contribution};
use crate::CURRENCY_PRECISION;
use rust_decimal::Decimal;

/// The fund summary shown on the landing page: everything received, everything
/// allocated to causes, and what remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundStatus {
    pub total_contributions: Decimal,
    pub total_donations: Decimal,
    pub available_funds: Decimal,
}

impl FundStatus {
    /// Computes the fund position from all contribution and cause rows. Totals
    /// are normalised to currency precision.
    pub fn compute(contributions: &[Contribution], causes: &[Cause]) -> FundStatus {
        let total_contributions: Decimal =
            contributions.iter().map(|c| c.parsed_amount()).sum();
        let total_donations: Decimal = causes.iter().map(|c| c.parsed_amount()).sum();

        FundStatus {
            total_contributions: total_contributions.round_dp(CURRENCY_PRECISION),
            total_donations: total_donations.round_dp(CURRENCY_PRECISION),
            available_funds: (total_contributions - total_donations)
                .round_dp(CURRENCY_PRECISION),
        }
    }
}
