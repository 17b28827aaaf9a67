use log::trace;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Contribution tiers, highest first. Thresholds and presentation values match
/// the ranking badges shown beside member profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
    Top5,
    Top10,
    Top50,
}

impl Tier {
    /// Badge label for the tier.
    pub fn label(&self) -> &'static str {
        match *self {
            Tier::Gold => "#1 Top contributor",
            Tier::Silver => "#2 Top contributor",
            Tier::Bronze => "#3 Top contributor",
            Tier::Top5 => "Top 5",
            Tier::Top10 => "Top 10%",
            Tier::Top50 => "Top 50%",
        }
    }

    /// Badge colour for the tier.
    pub fn color(&self) -> &'static str {
        match *self {
            Tier::Gold => "#d6b600ff",
            Tier::Silver => "#C0C0C0",
            Tier::Bronze => "#CD7F32",
            Tier::Top5 => "#60A5FA",
            Tier::Top10 => "#A78BFA",
            Tier::Top50 => "#34D399",
        }
    }
}

/// One member's summed contribution total, ephemeral and recomputed on each
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub member_id: i64,
    pub total: Decimal,
}

/// A member's standing on the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankResult {
    pub tier: Tier,
    /// 1-indexed position on the leaderboard.
    pub rank: usize,
    /// Percentile position, rounded to the nearest whole percent.
    pub percentile: u32,
}

/// Builds the leaderboard from raw `(member id, amount)` pairs: amounts are
/// summed per member and entries sorted by total, highest first. Equal totals
/// are ordered by ascending member id so the ordering is deterministic.
pub fn leaderboard(records: &[(i64, Decimal)]) -> Vec<RankEntry> {
    let mut totals: HashMap<i64, Decimal> = HashMap::new();
    for &(member_id, amount) in records {
        *totals.entry(member_id).or_insert(Decimal::ZERO) += amount;
    }

    let mut entries: Vec<RankEntry> = totals
        .into_iter()
        .map(|(member_id, total)| RankEntry { member_id, total })
        .collect();
    entries.sort_by(|a, b| b.total.cmp(&a.total).then(a.member_id.cmp(&b.member_id)));
    entries
}

/// Ranks `target_member` against all recorded contributors.
///
/// Tier thresholds apply in priority order: ranks 1-3 take gold, silver and
/// bronze; ranks 4-5 take Top 5; then the top 10% and top 50% by percentile.
/// Returns `None` when the member has no recorded contributions or falls
/// outside every tier.
pub fn rank(records: &[(i64, Decimal)], target_member: i64) -> Option<RankResult> {
    let entries = leaderboard(records);
    let position = entries
        .iter()
        .position(|e| e.member_id == target_member)?
        + 1;

    let percentile = position as f64 / entries.len() as f64 * 100.0;

    let tier = if position == 1 {
        Tier::Gold
    } else if position == 2 {
        Tier::Silver
    } else if position == 3 {
        Tier::Bronze
    } else if position <= 5 {
        Tier::Top5
    } else if percentile <= 10.0 {
        Tier::Top10
    } else if percentile <= 50.0 {
        Tier::Top50
    } else {
        trace!(
            "member {} is outside every tier (rank {} of {})",
            target_member,
            position,
            entries.len()
        );
        return None;
    };

    Some(RankResult {
        tier,
        rank: position,
        percentile: percentile.round() as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // Distinct descending totals for n members, ids 1..=n
    fn field(n: i64) -> Vec<(i64, Decimal)> {
        (1..=n).map(|id| (id, Decimal::from(1000 - id))).collect()
    }

    #[test]
    fn leaderboard_groups_and_sums() {
        let records = vec![(1, dec!(300)), (2, dec!(300)), (1, dec!(100))];
        let entries = leaderboard(&records);

        assert_eq!(
            entries,
            vec![
                RankEntry {
                    member_id: 1,
                    total: dec!(400)
                },
                RankEntry {
                    member_id: 2,
                    total: dec!(300)
                },
            ]
        );
    }

    #[test]
    fn leaderboard_breaks_ties_by_member_id() {
        let records = vec![(7, dec!(100)), (3, dec!(100)), (5, dec!(100))];
        let ids: Vec<i64> = leaderboard(&records).iter().map(|e| e.member_id).collect();
        assert_eq!(ids, vec![3, 5, 7]);
    }

    #[test]
    fn rank_first_and_second() {
        let records = vec![(1, dec!(300)), (2, dec!(300)), (1, dec!(100))];

        let first = rank(&records, 1).unwrap();
        assert_eq!(first.rank, 1);
        assert_eq!(first.tier, Tier::Gold);

        let second = rank(&records, 2).unwrap();
        assert_eq!(second.rank, 2);
        assert_eq!(second.tier, Tier::Silver);
    }

    #[test]
    fn rank_third_is_bronze() {
        let result = rank(&field(6), 3).unwrap();
        assert_eq!(result.tier, Tier::Bronze);
        assert_eq!(result.rank, 3);
        assert_eq!(result.percentile, 50);
    }

    #[test]
    fn rank_fourth_and_fifth_are_top5() {
        let records = field(20);
        assert_eq!(rank(&records, 4).unwrap().tier, Tier::Top5);
        assert_eq!(rank(&records, 5).unwrap().tier, Tier::Top5);
    }

    #[test]
    fn rank_top_ten_percent() {
        // Rank 6 of 60 is exactly 10%
        let result = rank(&field(60), 6).unwrap();
        assert_eq!(result.tier, Tier::Top10);
        assert_eq!(result.percentile, 10);
    }

    #[test]
    fn rank_top_fifty_percent() {
        // Rank 6 of 12 is exactly 50%
        let result = rank(&field(12), 6).unwrap();
        assert_eq!(result.tier, Tier::Top50);
        assert_eq!(result.percentile, 50);
    }

    #[test]
    fn rank_below_fifty_percent_is_unranked() {
        let _ = env_logger::builder().is_test(true).try_init();

        // Rank 6 of 8 is 75%
        assert_eq!(rank(&field(8), 6), None);
    }

    #[test]
    fn rank_absent_member() {
        assert_eq!(rank(&field(5), 99), None);
        assert_eq!(rank(&[], 1), None);
    }

    #[test]
    fn rank_percentile_is_rounded() {
        // Rank 1 of 3 is 33.33..%
        let result = rank(&field(3), 1).unwrap();
        assert_eq!(result.percentile, 33);
    }

    #[test]
    fn tier_labels_and_colors() {
        assert_eq!(Tier::Gold.label(), "#1 Top contributor");
        assert_eq!(Tier::Top10.label(), "Top 10%");
        assert_eq!(Tier::Bronze.color(), "#CD7F32");
    }
}
