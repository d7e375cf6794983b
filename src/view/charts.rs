// Chart payload builders. Renderers receive categories, series and
// finished percentages; no arithmetic happens on the rendering side.

use itertools::Itertools;
use serde::Serialize;

use crate::metrics::{self, GrowthClass};
use crate::model::catalog::EntityCatalog;
use crate::model::ColorToken;
use crate::view::province_label;

/// One named series over the chart's categories. `color` is None where the
/// renderer's theme decides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Option<ColorToken>,
}

/// Category chart (bar or line). When `palette` is set it colors the
/// categories one by one, as on the province distribution bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub palette: Option<Vec<ColorToken>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    #[serde(rename = "sharePct")]
    pub share_pct: f64,
    pub color: Option<ColorToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

/// Registered voters per province, one bar each in the province's color.
pub fn province_distribution_chart(catalog: &EntityCatalog) -> CategoryChart {
    let (categories, values, palette): (Vec<String>, Vec<f64>, Vec<ColorToken>) = catalog
        .voter_stats()
        .iter()
        .map(|stat| {
            (
                province_label(catalog, stat.province),
                stat.voters_current as f64,
                stat.color.clone(),
            )
        })
        .multiunzip();
    CategoryChart {
        categories,
        series: vec![ChartSeries {
            name: "Voters (2079)".to_string(),
            values,
            color: None,
        }],
        palette: Some(palette),
    }
}

/// Prior and current roll side by side per province.
pub fn growth_comparison_chart(catalog: &EntityCatalog) -> CategoryChart {
    let (categories, prior, current): (Vec<String>, Vec<f64>, Vec<f64>) = catalog
        .voter_stats()
        .iter()
        .map(|stat| {
            (
                province_label(catalog, stat.province),
                stat.voters_prior as f64,
                stat.voters_current as f64,
            )
        })
        .multiunzip();
    CategoryChart {
        categories,
        series: vec![
            ChartSeries {
                name: "2074 BS".to_string(),
                values: prior,
                color: None,
            },
            ChartSeries {
                name: "2079 BS".to_string(),
                values: current,
                color: None,
            },
        ],
        palette: None,
    }
}

/// Male and female registrations per age band.
pub fn age_distribution_chart(catalog: &EntityCatalog) -> CategoryChart {
    let categories = catalog.age_bands().iter().map(|b| b.label.clone()).collect();
    let male = catalog.age_bands().iter().map(|b| b.male as f64).collect();
    let female = catalog.age_bands().iter().map(|b| b.female as f64).collect();
    CategoryChart {
        categories,
        series: vec![
            ChartSeries {
                name: "Male".to_string(),
                values: male,
                color: None,
            },
            ChartSeries {
                name: "Female".to_string(),
                values: female,
                color: None,
            },
        ],
        palette: None,
    }
}

/// Male and female registration lines across election years.
pub fn gender_trend_chart(catalog: &EntityCatalog) -> CategoryChart {
    let categories = catalog
        .gender_trend()
        .iter()
        .map(|p| p.year_label.clone())
        .collect();
    let male = catalog.gender_trend().iter().map(|p| p.male as f64).collect();
    let female = catalog
        .gender_trend()
        .iter()
        .map(|p| p.female as f64)
        .collect();
    CategoryChart {
        categories,
        series: vec![
            ChartSeries {
                name: "Male".to_string(),
                values: male,
                color: None,
            },
            ChartSeries {
                name: "Female".to_string(),
                values: female,
                color: None,
            },
        ],
        palette: None,
    }
}

/// Population per caste group, largest first as published.
pub fn caste_composition_chart(catalog: &EntityCatalog) -> CategoryChart {
    let categories = catalog
        .caste_groups()
        .iter()
        .map(|g| g.name.clone())
        .collect();
    let values = catalog
        .caste_groups()
        .iter()
        .map(|g| g.population as f64)
        .collect();
    CategoryChart {
        categories,
        series: vec![ChartSeries {
            name: "Registered voters".to_string(),
            values,
            color: None,
        }],
        palette: None,
    }
}

/// One row of the caste table, its growth classified on the shared thresholds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CasteRow {
    pub name: String,
    pub population: u64,
    #[serde(rename = "sharePct")]
    pub share_pct: f64,
    #[serde(rename = "growthPct")]
    pub growth_pct: f64,
    #[serde(rename = "growthClass")]
    pub growth_class: GrowthClass,
}

/// Caste groups in published order, with a growth badge class per row.
pub fn caste_breakdown(catalog: &EntityCatalog) -> Vec<CasteRow> {
    catalog
        .caste_groups()
        .iter()
        .map(|group| CasteRow {
            name: group.name.clone(),
            population: group.population,
            share_pct: group.share_pct,
            growth_pct: group.growth_pct,
            growth_class: GrowthClass::from_pct(group.growth_pct),
        })
        .collect()
}

/// Parliament seats per party with each party's share of the house.
pub fn party_seats_pie(catalog: &EntityCatalog) -> PieChart {
    let total_seats = catalog.total_seats();
    let slices = catalog
        .parties()
        .iter()
        .map(|party| PieSlice {
            label: party.short_name.clone(),
            value: party.seat_count as u64,
            share_pct: metrics::seat_share_pct(party.seat_count, total_seats),
            color: Some(party.color.clone()),
        })
        .collect();
    PieChart { slices }
}

/// One bubble on the growth scatter. Roll sizes come pre-scaled to millions
/// so axis labels read "2.46M" without further division.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthScatterPoint {
    pub name: String,
    #[serde(rename = "priorMillions")]
    pub prior_millions: f64,
    #[serde(rename = "currentMillions")]
    pub current_millions: f64,
    #[serde(rename = "growthPct")]
    pub growth_pct: f64,
    #[serde(rename = "bubbleSize")]
    pub bubble_size: f64,
    #[serde(rename = "growthClass")]
    pub growth_class: GrowthClass,
    pub color: ColorToken,
}

/// Prior roll vs current roll per province, bubble area tracking growth.
pub fn growth_scatter(catalog: &EntityCatalog) -> Vec<GrowthScatterPoint> {
    catalog
        .voter_stats()
        .iter()
        .map(|stat| {
            let name = province_label(catalog, stat.province);
            let growth = metrics::round1(stat.growth_pct());
            GrowthScatterPoint {
                name,
                prior_millions: metrics::round2(stat.voters_prior as f64 / 1_000_000.0),
                current_millions: metrics::round2(stat.voters_current as f64 / 1_000_000.0),
                growth_pct: growth,
                bubble_size: growth * 10.0,
                growth_class: GrowthClass::from_pct(growth),
                color: stat.color.clone(),
            }
        })
        .collect()
}

/// Male/female split of the full roll.
pub fn gender_pie(catalog: &EntityCatalog) -> PieChart {
    let overview = catalog.overview();
    let total = overview.voters_current;
    PieChart {
        slices: vec![
            PieSlice {
                label: "Male".to_string(),
                value: overview.male,
                share_pct: metrics::gender_share_pct(overview.male, total),
                color: None,
            },
            PieSlice {
                label: "Female".to_string(),
                value: overview.female,
                share_pct: metrics::gender_share_pct(overview.female, total),
                color: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn province_bars_carry_one_color_per_category() {
        let chart = province_distribution_chart(dataset::sample_catalog());
        assert_eq!(chart.categories.len(), 7);
        assert_eq!(chart.categories[0], "Koshi");
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].values[2], 4_235_612.0);
        let palette = chart.palette.unwrap();
        assert_eq!(palette.len(), 7);
        assert_eq!(palette[0].as_str(), "#C41E3A");
    }

    #[test]
    fn comparison_chart_pairs_the_two_rolls() {
        let chart = growth_comparison_chart(dataset::sample_catalog());
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "2074 BS");
        assert_eq!(chart.series[0].values[0], 2_456_789.0);
        assert_eq!(chart.series[1].values[0], 2_854_312.0);
    }

    #[test]
    fn party_shares_sum_to_the_whole_house() {
        let pie = party_seats_pie(dataset::sample_catalog());
        assert_eq!(pie.slices.len(), 8);
        let nc = &pie.slices[0];
        assert_eq!(nc.label, "NC");
        assert_eq!(nc.value, 89);
        assert_eq!(nc.share_pct, 33.6);
        let seats: u64 = pie.slices.iter().map(|s| s.value).sum();
        assert_eq!(seats, 265);
    }

    #[test]
    fn gender_pie_shares_are_of_the_full_roll() {
        let pie = gender_pie(dataset::sample_catalog());
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].share_pct, 48.1);
        assert_eq!(pie.slices[1].share_pct, 51.9);
    }

    #[test]
    fn age_chart_covers_every_band() {
        let chart = age_distribution_chart(dataset::sample_catalog());
        assert_eq!(chart.categories.len(), 6);
        assert_eq!(chart.categories[0], "18-25");
        assert_eq!(chart.categories[5], "65+");
        assert_eq!(chart.series[0].values[0], 1_823_456.0);
        assert_eq!(chart.series[1].values[0], 1_967_834.0);
    }

    #[test]
    fn trend_chart_follows_election_years() {
        let chart = gender_trend_chart(dataset::sample_catalog());
        assert_eq!(chart.categories, vec!["2064", "2070", "2074", "2079"]);
        assert_eq!(chart.series[1].values[3], 9_336_466.0);
    }

    #[test]
    fn caste_rows_classify_growth_on_the_shared_thresholds() {
        let rows = caste_breakdown(dataset::sample_catalog());
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].name, "Brahmin");
        assert_eq!(rows[0].growth_class, GrowthClass::Moderate);
        assert_eq!(rows[3].name, "Tharu");
        assert_eq!(rows[3].growth_class, GrowthClass::High);
        assert_eq!(rows[5].name, "Newar");
        assert_eq!(rows[5].growth_class, GrowthClass::Low);
        assert_eq!(rows[7].growth_class, GrowthClass::High);
    }

    #[test]
    fn scatter_scales_rolls_to_millions_and_classifies_growth() {
        let points = growth_scatter(dataset::sample_catalog());
        assert_eq!(points.len(), 7);
        let koshi = &points[0];
        assert_eq!(koshi.name, "Koshi");
        assert_eq!(koshi.prior_millions, 2.46);
        assert_eq!(koshi.current_millions, 2.85);
        assert_eq!(koshi.growth_pct, 16.2);
        assert_eq!(koshi.bubble_size, 162.0);
        assert_eq!(koshi.growth_class, GrowthClass::Moderate);
        let sudurpashchim = &points[6];
        assert_eq!(sudurpashchim.growth_class, GrowthClass::High);
    }
}
