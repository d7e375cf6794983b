// Derived-value functions shared by every view. All classification
// thresholds live here and nowhere else.

use serde::{Deserialize, Serialize};

/// Growth above this is classed High.
pub const GROWTH_HIGH_PCT: f64 = 18.0;
/// Growth above this (and at most GROWTH_HIGH_PCT) is classed Moderate.
pub const GROWTH_MODERATE_PCT: f64 = 12.0;

/// Margins above this are Strong wins.
pub const MARGIN_STRONG: u64 = 5000;
/// Margins from this up to MARGIN_STRONG are Moderate wins.
pub const MARGIN_MODERATE: u64 = 2000;

/// Voter count at which a province leaves the low-density map band.
pub const DENSITY_MEDIUM_MIN: u64 = 2_000_000;
/// Voter count at which a province enters the high-density map band.
pub const DENSITY_HIGH_MIN: u64 = 3_000_000;

/// Map markers are sized in units of this many voters.
pub const MARKER_VOTERS_PER_UNIT: f64 = 100_000.0;

/// Voter-roll growth classification between two election rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthClass {
    High,
    Moderate,
    Low,
}

impl GrowthClass {
    /// Classify a growth percentage. Both boundaries belong to the class
    /// below them: exactly 18.0 is Moderate, exactly 12.0 is Low.
    pub fn from_pct(pct: f64) -> GrowthClass {
        if pct > GROWTH_HIGH_PCT {
            GrowthClass::High
        } else if pct > GROWTH_MODERATE_PCT {
            GrowthClass::Moderate
        } else {
            GrowthClass::Low
        }
    }

    /// Badge label shown next to growth figures.
    pub fn label(&self) -> &'static str {
        match self {
            GrowthClass::High => "High Growth",
            GrowthClass::Moderate => "Moderate",
            GrowthClass::Low => "Low Growth",
        }
    }
}

impl std::fmt::Display for GrowthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthClass::High => write!(f, "high"),
            GrowthClass::Moderate => write!(f, "moderate"),
            GrowthClass::Low => write!(f, "low"),
        }
    }
}

/// Victory-margin classification for the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarginTier {
    Strong,
    Moderate,
    Narrow,
}

impl MarginTier {
    pub fn from_margin(margin: u64) -> MarginTier {
        if margin > MARGIN_STRONG {
            MarginTier::Strong
        } else if margin >= MARGIN_MODERATE {
            MarginTier::Moderate
        } else {
            MarginTier::Narrow
        }
    }
}

/// Density band for the map legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityBand {
    Low,
    Medium,
    High,
}

impl DensityBand {
    pub const ALL: [DensityBand; 3] = [DensityBand::Low, DensityBand::Medium, DensityBand::High];

    pub fn from_voters(voters: u64) -> DensityBand {
        if voters >= DENSITY_HIGH_MIN {
            DensityBand::High
        } else if voters >= DENSITY_MEDIUM_MIN {
            DensityBand::Medium
        } else {
            DensityBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DensityBand::Low => "Low Density (<2M voters)",
            DensityBand::Medium => "Medium Density (2-3M voters)",
            DensityBand::High => "High Density (>3M voters)",
        }
    }
}

/// Direction of a trend badge on a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn from_pct(pct: f64) -> TrendDirection {
        if pct > 0.0 {
            TrendDirection::Up
        } else if pct < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }
}

/// Percentage growth between two roll counts. A zero prior roll yields 0
/// rather than a division error.
pub fn growth_pct(current: u64, prior: u64) -> f64 {
    if prior == 0 {
        return 0.0;
    }
    (current as f64 - prior as f64) / prior as f64 * 100.0
}

/// Radius in screen units for a map marker representing `voter_count`
/// registered voters. Non-positive counts collapse to a zero radius, and
/// the result grows monotonically with the count.
pub fn marker_radius(voter_count: i64, base_scale: f64) -> f64 {
    if voter_count <= 0 {
        return 0.0;
    }
    (voter_count as f64 / MARKER_VOTERS_PER_UNIT).sqrt() * base_scale
}

/// Share of `value` in `total` as a percentage rounded to one decimal.
/// An empty total yields 0 rather than NaN.
pub fn share_pct(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round1(value / total * 100.0)
}

pub fn gender_share_pct(count: u64, total: u64) -> f64 {
    share_pct(count as f64, total as f64)
}

pub fn seat_share_pct(seats: u32, total_seats: u32) -> f64 {
    share_pct(seats as f64, total_seats as f64)
}

/// Male voters per female voter, rounded to two decimals. Zero female
/// voters yields 0.
pub fn gender_ratio(male: u64, female: u64) -> f64 {
    if female == 0 {
        return 0.0;
    }
    round2(male as f64 / female as f64)
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn growth_class_boundaries_are_lower_inclusive() {
        assert_eq!(GrowthClass::from_pct(18.1), GrowthClass::High);
        assert_eq!(GrowthClass::from_pct(18.0), GrowthClass::Moderate);
        assert_eq!(GrowthClass::from_pct(12.1), GrowthClass::Moderate);
        assert_eq!(GrowthClass::from_pct(12.0), GrowthClass::Low);
        assert_eq!(GrowthClass::from_pct(0.0), GrowthClass::Low);
        assert_eq!(GrowthClass::from_pct(-3.5), GrowthClass::Low);
    }

    #[test]
    fn growth_class_of_published_provincial_figures() {
        assert_eq!(GrowthClass::from_pct(16.2), GrowthClass::Moderate);
        assert_eq!(GrowthClass::from_pct(17.8), GrowthClass::Moderate);
        assert_eq!(GrowthClass::from_pct(15.1), GrowthClass::Moderate);
        assert_eq!(GrowthClass::from_pct(23.2), GrowthClass::High);
    }

    #[test]
    fn margin_tiers_match_results_table_badges() {
        assert_eq!(MarginTier::from_margin(7222), MarginTier::Strong);
        assert_eq!(MarginTier::from_margin(3365), MarginTier::Moderate);
        assert_eq!(MarginTier::from_margin(1358), MarginTier::Narrow);
        assert_eq!(MarginTier::from_margin(5000), MarginTier::Moderate);
        assert_eq!(MarginTier::from_margin(5001), MarginTier::Strong);
        assert_eq!(MarginTier::from_margin(2000), MarginTier::Moderate);
        assert_eq!(MarginTier::from_margin(1999), MarginTier::Narrow);
        assert_eq!(MarginTier::from_margin(0), MarginTier::Narrow);
    }

    #[test]
    fn growth_pct_handles_empty_prior_roll() {
        assert_eq!(growth_pct(100, 0), 0.0);
        assert!((growth_pct(2_854_312, 2_456_789) - 16.18).abs() < 0.01);
        assert!(growth_pct(90, 100) < 0.0);
    }

    #[test]
    fn marker_radius_degrades_to_zero() {
        assert_eq!(marker_radius(0, 3.0), 0.0);
        assert_eq!(marker_radius(-5, 3.0), 0.0);
        let koshi = marker_radius(2_854_312, 3.0);
        assert!((koshi - 16.03).abs() < 0.01);
    }

    #[test]
    fn shares_round_to_one_decimal() {
        assert_eq!(seat_share_pct(89, 265), 33.6);
        assert_eq!(seat_share_pct(0, 0), 0.0);
        assert_eq!(gender_share_pct(9_336_466, 17_988_570), 51.9);
        assert_eq!(gender_share_pct(5, 0), 0.0);
    }

    #[test]
    fn gender_ratio_rounds_to_two_decimals() {
        assert_eq!(gender_ratio(8_652_104, 9_336_466), 0.93);
        assert_eq!(gender_ratio(10, 0), 0.0);
    }

    #[test]
    fn density_bands_cover_the_legend() {
        assert_eq!(DensityBand::from_voters(1_234_567), DensityBand::Low);
        assert_eq!(DensityBand::from_voters(2_854_312), DensityBand::Medium);
        assert_eq!(DensityBand::from_voters(4_235_612), DensityBand::High);
        assert_eq!(DensityBand::from_voters(2_000_000), DensityBand::Medium);
        assert_eq!(DensityBand::from_voters(3_000_000), DensityBand::High);
    }

    #[test]
    fn trend_direction_follows_sign() {
        assert_eq!(TrendDirection::from_pct(16.6), TrendDirection::Up);
        assert_eq!(TrendDirection::from_pct(-0.4), TrendDirection::Down);
        assert_eq!(TrendDirection::from_pct(0.0), TrendDirection::Flat);
    }

    proptest! {
        #[test]
        fn marker_radius_is_monotone(a in 0i64..50_000_000, b in 0i64..50_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(marker_radius(lo, 3.0) <= marker_radius(hi, 3.0));
        }

        #[test]
        fn marker_radius_never_negative(count in i64::MIN..i64::MAX, scale in 0.0f64..100.0) {
            prop_assert!(marker_radius(count, scale) >= 0.0);
        }
    }
}
