//! Allocation advisor
//!
//! Splits leftover funds into three fixed buckets. The split is a two-branch
//! lookup keyed on whether the stock preference mentions "tech".

use serde::Serialize;

use crate::models::{Money, StockPreference};

/// Educational tips shown next to every allocation, empty or not
pub const TIPS: [&str; 3] = [
    "Diversification spreads risk across assets.",
    "Match investment horizon with risk level.",
    "Automate contributions to build consistency.",
];

/// Preference assumed when the user never picked one
pub const DEFAULT_PREFERENCE: StockPreference = StockPreference::Diversified;

/// Which of the two fixed splits applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    TechTilted,
    Diversified,
}

/// A bucket definition: label and share in basis points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketSpec {
    pub label: &'static str,
    pub basis_points: u32,
}

const TECH_SPLIT: [BucketSpec; 3] = [
    BucketSpec { label: "Tech ETFs", basis_points: 6_000 },
    BucketSpec { label: "Blue-chip stocks", basis_points: 3_000 },
    BucketSpec { label: "Emergency savings", basis_points: 1_000 },
];

const DIVERSIFIED_SPLIT: [BucketSpec; 3] = [
    BucketSpec { label: "Broad-market ETFs", basis_points: 5_000 },
    BucketSpec { label: "Dividend stocks", basis_points: 3_000 },
    BucketSpec { label: "Emergency savings", basis_points: 2_000 },
];

impl Strategy {
    /// Pick the split for a preference; no preference means diversified
    pub fn for_preference(preference: Option<StockPreference>) -> Self {
        let label = preference.unwrap_or(DEFAULT_PREFERENCE).label();
        if label.to_lowercase().contains("tech") {
            Strategy::TechTilted
        } else {
            Strategy::Diversified
        }
    }

    /// The three buckets of this split
    pub fn buckets(&self) -> &'static [BucketSpec; 3] {
        match self {
            Strategy::TechTilted => &TECH_SPLIT,
            Strategy::Diversified => &DIVERSIFIED_SPLIT,
        }
    }
}

/// A named investment category with its share of leftover funds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationBucket {
    pub label: &'static str,
    /// Share in basis points; `pct()` gives the fraction
    pub basis_points: u32,
    pub amount: Money,
}

impl AllocationBucket {
    /// Share of leftover as a fraction in (0, 1]
    pub fn pct(&self) -> f64 {
        f64::from(self.basis_points) / 10_000.0
    }
}

/// Suggested split of leftover funds; empty when nothing is left over
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Allocation {
    pub buckets: Vec<AllocationBucket>,
}

impl Allocation {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AllocationBucket> {
        self.buckets.iter()
    }

    /// Sum of bucket amounts
    pub fn total(&self) -> Money {
        self.buckets.iter().map(|b| b.amount).sum()
    }
}

/// Suggest how to split `leftover` given the user's stock preference
///
/// Returns an empty allocation when `leftover` is zero or negative. Each
/// bucket amount is rounded to the cent independently.
pub fn advise(leftover: Money, preference: Option<StockPreference>) -> Allocation {
    if !leftover.is_positive() {
        return Allocation::default();
    }

    let buckets = Strategy::for_preference(preference)
        .buckets()
        .iter()
        .map(|spec| AllocationBucket {
            label: spec.label,
            basis_points: spec.basis_points,
            amount: leftover.scale_bps(spec.basis_points),
        })
        .collect();

    Allocation { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_and_amounts(allocation: &Allocation) -> Vec<(&'static str, Money)> {
        allocation.iter().map(|b| (b.label, b.amount)).collect()
    }

    #[test]
    fn test_no_allocation_without_leftover() {
        assert!(advise(Money::zero(), Some(StockPreference::Tech)).is_empty());
        assert!(advise(Money::from_dollars(-200), None).is_empty());
        assert!(advise(Money::from_dollars(-1_000_000), Some(StockPreference::Energy)).is_empty());
    }

    #[test]
    fn test_tech_split() {
        let allocation = advise(Money::from_dollars(1000), Some(StockPreference::Tech));
        assert_eq!(
            labels_and_amounts(&allocation),
            vec![
                ("Tech ETFs", Money::from_dollars(600)),
                ("Blue-chip stocks", Money::from_dollars(300)),
                ("Emergency savings", Money::from_dollars(100)),
            ]
        );
        assert_eq!(allocation.total(), Money::from_dollars(1000));
    }

    #[test]
    fn test_diversified_split() {
        let allocation = advise(Money::from_dollars(1000), Some(StockPreference::Diversified));
        assert_eq!(
            labels_and_amounts(&allocation),
            vec![
                ("Broad-market ETFs", Money::from_dollars(500)),
                ("Dividend stocks", Money::from_dollars(300)),
                ("Emergency savings", Money::from_dollars(200)),
            ]
        );
    }

    #[test]
    fn test_missing_preference_is_diversified() {
        assert_eq!(Strategy::for_preference(None), Strategy::Diversified);
        let allocation = advise(Money::from_dollars(10), None);
        assert_eq!(allocation.buckets[0].label, "Broad-market ETFs");
    }

    #[test]
    fn test_only_tech_preference_is_tech_tilted() {
        assert_eq!(
            Strategy::for_preference(Some(StockPreference::Tech)),
            Strategy::TechTilted
        );
        for pref in [
            StockPreference::Energy,
            StockPreference::Healthcare,
            StockPreference::Diversified,
        ] {
            assert_eq!(Strategy::for_preference(Some(pref)), Strategy::Diversified);
        }
    }

    #[test]
    fn test_bucket_fractions() {
        let allocation = advise(Money::from_dollars(1), Some(StockPreference::Tech));
        let fractions: Vec<f64> = allocation.iter().map(AllocationBucket::pct).collect();
        assert_eq!(fractions, vec![0.6, 0.3, 0.1]);
    }

    #[test]
    fn test_amounts_round_to_cents() {
        let allocation = advise(Money::from_cents(1), Some(StockPreference::Tech));
        assert_eq!(allocation.buckets[0].amount, Money::from_cents(1));
        assert_eq!(allocation.buckets[2].amount, Money::zero());
    }
}
