// Overview stat cards and the per-province growth strip.

use serde::Serialize;

use crate::metrics::{self, GrowthClass, TrendDirection};
use crate::model::catalog::EntityCatalog;
use crate::util;
use crate::view::province_label;

/// Trend chip in a card's corner, e.g. "+16.6% vs 2074 election".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBadge {
    pub direction: TrendDirection,
    pub pct: f64,
    pub label: String,
}

impl TrendBadge {
    pub fn from_pct(pct: f64, label: &str) -> TrendBadge {
        TrendBadge {
            direction: TrendDirection::from_pct(pct),
            pct,
            label: label.to_string(),
        }
    }

    /// The chip text, e.g. "+16.6%".
    pub fn text(&self) -> String {
        util::signed_pct(self.pct)
    }
}

/// One dashboard stat card with its display value already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub subtitle: Option<String>,
    pub trend: Option<TrendBadge>,
}

impl StatCard {
    fn new(title: &str, value: String, subtitle: Option<&str>, trend: Option<TrendBadge>) -> StatCard {
        StatCard {
            title: title.to_string(),
            value,
            subtitle: subtitle.map(str::to_string),
            trend,
        }
    }
}

/// The eight dashboard overview cards, in display order.
pub fn overview_cards(catalog: &EntityCatalog) -> Vec<StatCard> {
    let overview = catalog.overview();
    let growth = metrics::round1(overview.growth_pct());
    vec![
        StatCard::new(
            "Total Voters",
            util::group_digits(overview.voters_current),
            None,
            Some(TrendBadge::from_pct(growth, "vs 2074 election")),
        ),
        StatCard::new(
            "Net Growth",
            util::fmt_millions(overview.net_growth()),
            Some("New registrations since 2074"),
            None,
        ),
        StatCard::new(
            "Avg. Voter Age",
            format!("{} yrs", overview.average_age),
            Some("Median age: 36 years"),
            None,
        ),
        StatCard::new(
            "Gender Ratio",
            format!("{:.2}:1", metrics::gender_ratio(overview.male, overview.female)),
            Some("Male to Female"),
            None,
        ),
        StatCard::new(
            "Constituencies",
            util::group_digits(overview.constituency_count as u64),
            Some("Federal seats"),
            None,
        ),
        StatCard::new(
            "Candidates",
            util::group_digits(overview.candidate_count as u64),
            Some("Federal election 2079"),
            None,
        ),
        StatCard::new(
            "Voting Booths",
            util::group_digits(overview.booth_count as u64),
            Some("Across all provinces"),
            None,
        ),
        StatCard::new(
            "Local Levels",
            util::group_digits(overview.local_level_count as u64),
            Some("Municipalities & rural"),
            None,
        ),
    ]
}

/// One chip on the comparative-analysis growth strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthBadge {
    #[serde(rename = "provinceName")]
    pub province_name: String,
    pub pct: f64,
    pub class: GrowthClass,
}

impl GrowthBadge {
    /// The chip text, e.g. "+23.2%".
    pub fn text(&self) -> String {
        util::signed_pct(self.pct)
    }
}

/// Growth chips for every province, in catalog order.
pub fn growth_badges(catalog: &EntityCatalog) -> Vec<GrowthBadge> {
    catalog
        .voter_stats()
        .iter()
        .map(|stat| {
            let province_name = province_label(catalog, stat.province);
            let pct = metrics::round1(stat.growth_pct());
            GrowthBadge {
                province_name,
                pct,
                class: GrowthClass::from_pct(pct),
            }
        })
        .collect()
}
