//! Shared donation-cycle accounting core.
//!
//! Views that show "this month's activity" all answer the same questions: which
//! window of dates is the current donation cycle, which records fall inside it,
//! what do they add up to, and where does a member sit on the leaderboard. This
//! crate computes those answers as pure functions over immutable inputs; the
//! caller captures "today" once and passes it in explicitly, so every result is
//! deterministic and testable.

mod aggregate;
mod cycle;
mod date;
mod fund;
mod rank;
mod record;

pub use aggregate::{cycle_total, filter_in_range, parse_amount, sum, DatedAmount};
pub use cycle::{CycleConfig, CycleRange};
pub use date::{days_in_month, parse_date, safe_date, DateParts, ParseDateError};
pub use fund::FundStatus;
pub use rank::{leaderboard, rank, RankEntry, RankResult, Tier};
pub use record::{
    cause_amounts, contribution_amounts, member_contributions, member_total, rank_pairs, Cause,
    Contribution,
};

// This represents the number of decimal places that a currency can validly express.
// @todo Support the full range of currency precisions specified in ISO 4217.
const CURRENCY_PRECISION: u32 = 2;
