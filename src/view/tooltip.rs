// Hover payloads for the charts. Each variant carries exactly the fields its
// card renders, so a renderer can match on `kind` without probing for nulls.

use serde::Serialize;

use crate::metrics;
use crate::model::catalog::EntityCatalog;
use crate::model::{AgeBand, Party, ProvinceVoterStat};
use crate::util;
use crate::view::charts::GrowthScatterPoint;
use crate::view::province_label;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum TooltipPayload {
    #[serde(rename = "province")]
    Province {
        name: String,
        voters: u64,
        #[serde(rename = "growthPct")]
        growth_pct: f64,
    },
    #[serde(rename = "party")]
    Party {
        name: String,
        seats: u32,
        #[serde(rename = "sharePct")]
        share_pct: f64,
    },
    #[serde(rename = "age")]
    Age {
        band: String,
        male: u64,
        female: u64,
        total: u64,
    },
    #[serde(rename = "gender")]
    Gender {
        label: String,
        count: u64,
        #[serde(rename = "sharePct")]
        share_pct: f64,
    },
    #[serde(rename = "growthScatter")]
    GrowthScatter {
        name: String,
        #[serde(rename = "priorMillions")]
        prior_millions: f64,
        #[serde(rename = "currentMillions")]
        current_millions: f64,
        #[serde(rename = "growthPct")]
        growth_pct: f64,
    },
    #[serde(rename = "comparison")]
    Comparison {
        name: String,
        prior: u64,
        current: u64,
    },
}

impl TooltipPayload {
    /// The lines a hover card prints, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        match self {
            TooltipPayload::Province {
                name,
                voters,
                growth_pct,
            } => vec![
                name.clone(),
                format!("{} voters", util::group_digits(*voters)),
                format!("Growth: {}", util::signed_pct(*growth_pct)),
            ],
            TooltipPayload::Party {
                name,
                seats,
                share_pct,
            } => vec![name.clone(), format!("{} seats ({}%)", seats, share_pct)],
            TooltipPayload::Age {
                band,
                male,
                female,
                total,
            } => vec![
                format!("Age Group: {}", band),
                format!("Male: {}", util::group_digits(*male)),
                format!("Female: {}", util::group_digits(*female)),
                format!("Total: {}", util::group_digits(*total)),
            ],
            TooltipPayload::Gender {
                label,
                count,
                share_pct,
            } => vec![format!(
                "{}: {} ({}%)",
                label,
                util::group_digits(*count),
                share_pct
            )],
            TooltipPayload::GrowthScatter {
                name,
                prior_millions,
                current_millions,
                growth_pct,
            } => vec![
                name.clone(),
                format!("2074: {:.2}M voters", prior_millions),
                format!("2079: {:.2}M voters", current_millions),
                format!("Growth: {}", util::signed_pct(*growth_pct)),
            ],
            TooltipPayload::Comparison {
                name,
                prior,
                current,
            } => vec![
                name.clone(),
                format!("2074 BS: {}", util::group_digits(*prior)),
                format!("2079 BS: {}", util::group_digits(*current)),
            ],
        }
    }
}

impl std::fmt::Display for TooltipPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Hover payload for a province distribution bar.
pub fn province_tooltip(catalog: &EntityCatalog, stat: &ProvinceVoterStat) -> TooltipPayload {
    TooltipPayload::Province {
        name: province_label(catalog, stat.province),
        voters: stat.voters_current,
        growth_pct: metrics::round1(stat.growth_pct()),
    }
}

/// Hover payload for a party slice of the seat pie.
pub fn party_tooltip(party: &Party, total_seats: u32) -> TooltipPayload {
    TooltipPayload::Party {
        name: party.name.clone(),
        seats: party.seat_count,
        share_pct: metrics::seat_share_pct(party.seat_count, total_seats),
    }
}

/// Hover payload for an age band column pair.
pub fn age_tooltip(band: &AgeBand) -> TooltipPayload {
    TooltipPayload::Age {
        band: band.label.clone(),
        male: band.male,
        female: band.female,
        total: band.total(),
    }
}

/// Hover payload for a gender slice, sized against the full roll.
pub fn gender_tooltip(label: &str, count: u64, roll_total: u64) -> TooltipPayload {
    TooltipPayload::Gender {
        label: label.to_string(),
        count,
        share_pct: metrics::gender_share_pct(count, roll_total),
    }
}

/// Hover payload for a growth scatter bubble.
pub fn scatter_tooltip(point: &GrowthScatterPoint) -> TooltipPayload {
    TooltipPayload::GrowthScatter {
        name: point.name.clone(),
        prior_millions: point.prior_millions,
        current_millions: point.current_millions,
        growth_pct: point.growth_pct,
    }
}

/// Hover payload for a bar pair on the 2074-vs-2079 comparison chart.
pub fn comparison_tooltip(catalog: &EntityCatalog, stat: &ProvinceVoterStat) -> TooltipPayload {
    TooltipPayload::Comparison {
        name: province_label(catalog, stat.province),
        prior: stat.voters_prior,
        current: stat.voters_current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::view::charts;

    #[test]
    fn province_lines_show_grouped_count_and_signed_growth() {
        let catalog = dataset::sample_catalog();
        let tooltip = province_tooltip(catalog, &catalog.voter_stats()[0]);
        assert_eq!(
            tooltip.lines(),
            vec!["Koshi", "2,854,312 voters", "Growth: +16.2%"]
        );
    }

    #[test]
    fn party_line_reads_seats_and_house_share() {
        let catalog = dataset::sample_catalog();
        let tooltip = party_tooltip(&catalog.parties()[0], catalog.total_seats());
        assert_eq!(
            tooltip.lines(),
            vec!["Nepali Congress", "89 seats (33.6%)"]
        );
    }

    #[test]
    fn age_lines_cover_both_genders_and_the_total() {
        let catalog = dataset::sample_catalog();
        let tooltip = age_tooltip(&catalog.age_bands()[0]);
        assert_eq!(
            tooltip.lines(),
            vec![
                "Age Group: 18-25",
                "Male: 1,823,456",
                "Female: 1,967,834",
                "Total: 3,791,290",
            ]
        );
    }

    #[test]
    fn gender_line_carries_count_and_share() {
        let catalog = dataset::sample_catalog();
        let overview = catalog.overview();
        let tooltip = gender_tooltip("Female", overview.female, overview.voters_current);
        assert_eq!(tooltip.lines(), vec!["Female: 9,336,466 (51.9%)"]);
    }

    #[test]
    fn scatter_lines_compare_the_two_rolls_in_millions() {
        let catalog = dataset::sample_catalog();
        let points = charts::growth_scatter(catalog);
        let tooltip = scatter_tooltip(&points[0]);
        assert_eq!(
            tooltip.lines(),
            vec![
                "Koshi",
                "2074: 2.46M voters",
                "2079: 2.85M voters",
                "Growth: +16.2%",
            ]
        );
    }

    #[test]
    fn comparison_lines_group_both_rolls() {
        let catalog = dataset::sample_catalog();
        let tooltip = comparison_tooltip(catalog, &catalog.voter_stats()[0]);
        assert_eq!(
            tooltip.lines(),
            vec!["Koshi", "2074 BS: 2,456,789", "2079 BS: 2,854,312"]
        );
    }

    #[test]
    fn serialized_payload_is_tagged_by_kind() {
        let tooltip = TooltipPayload::Gender {
            label: "Male".to_string(),
            count: 10,
            share_pct: 40.0,
        };
        let json = serde_json::to_value(&tooltip).unwrap();
        assert_eq!(json["kind"], "gender");
        assert_eq!(json["sharePct"], 40.0);
    }
}
