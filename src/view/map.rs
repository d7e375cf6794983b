// Map view models: circle markers sized by voter count, the density
// legend and the side panel for the selected province.

use serde::Serialize;

use crate::metrics::{self, DensityBand, GrowthClass};
use crate::model::catalog::EntityCatalog;
use crate::model::{ColorToken, ProvinceId};
use crate::util;

/// Map center and zoom fitting the whole country.
pub const MAP_CENTER: LatLng = LatLng {
    lat: 28.3949,
    lng: 84.1240,
};
pub const MAP_ZOOM: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Marker scaling configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    pub base_scale: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig { base_scale: 3.0 }
    }
}

/// One circle marker, fully computed. The renderer draws it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvinceMarker {
    pub province: ProvinceId,
    pub label: String,
    pub position: LatLng,
    pub radius: f64,
    #[serde(rename = "fillColor")]
    pub fill_color: ColorToken,
    #[serde(rename = "popupText")]
    pub popup_text: String,
}

/// Approximate province centers. A province missing here simply gets no
/// marker.
fn province_center(id: ProvinceId) -> Option<LatLng> {
    let (lat, lng) = match id.0 {
        1 => (27.0, 87.3),
        2 => (26.8, 85.9),
        3 => (27.7, 85.4),
        4 => (28.3, 84.1),
        5 => (27.9, 82.8),
        6 => (29.3, 82.2),
        7 => (29.3, 80.5),
        _ => return None,
    };
    Some(LatLng { lat, lng })
}

/// Build one marker per province with known coordinates.
pub fn province_markers(catalog: &EntityCatalog, config: &MapConfig) -> Vec<ProvinceMarker> {
    let mut markers = Vec::new();
    for stat in catalog.voter_stats() {
        let province = match catalog.province(stat.province) {
            Some(province) => province,
            None => continue,
        };
        let position = match province_center(province.id) {
            Some(position) => position,
            None => continue,
        };
        let growth = metrics::round1(stat.growth_pct());
        let popup_text = format!(
            "{} Province\nTotal Voters: {}\nMale: {}\nFemale: {}\nGrowth: {}",
            province.short_name,
            util::group_digits(stat.voters_current),
            util::group_digits(stat.male),
            util::group_digits(stat.female),
            util::signed_pct(growth),
        );
        markers.push(ProvinceMarker {
            province: province.id,
            label: province.short_name.clone(),
            position,
            radius: metrics::marker_radius(stat.voters_current as i64, config.base_scale),
            fill_color: stat.color.clone(),
            popup_text,
        });
    }
    markers
}

/// One row of the map legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub band: DensityBand,
    pub label: &'static str,
}

pub fn map_legend() -> Vec<LegendEntry> {
    DensityBand::ALL
        .iter()
        .map(|band| LegendEntry {
            band: *band,
            label: band.label(),
        })
        .collect()
}

/// Expanded details for the selected province.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvinceDetail {
    pub province: ProvinceId,
    pub name: String,
    #[serde(rename = "capitalCity")]
    pub capital_city: String,
    #[serde(rename = "districtCount")]
    pub district_count: u32,
    #[serde(rename = "votersCurrent")]
    pub voters_current: u64,
    #[serde(rename = "votersPrior")]
    pub voters_prior: u64,
    #[serde(rename = "growthPct")]
    pub growth_pct: f64,
    #[serde(rename = "growthClass")]
    pub growth_class: GrowthClass,
    pub male: u64,
    pub female: u64,
    #[serde(rename = "malePct")]
    pub male_pct: f64,
    #[serde(rename = "femalePct")]
    pub female_pct: f64,
    pub density: DensityBand,
    pub color: ColorToken,
}

/// Side panel contents. A selection that cannot be resolved against the
/// catalog shows the no-data state, never a stale or coincidental record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DetailPanel {
    NoData,
    Province(ProvinceDetail),
}

pub fn detail_panel(catalog: &EntityCatalog, selected: Option<ProvinceId>) -> DetailPanel {
    let id = match selected {
        Some(id) => id,
        None => return DetailPanel::NoData,
    };
    let (province, stat) = match (catalog.province(id), catalog.stat_for(id)) {
        (Some(province), Some(stat)) => (province, stat),
        _ => {
            tracing::debug!(province = id.0, "selected province missing from catalog");
            return DetailPanel::NoData;
        }
    };

    let growth = metrics::round1(stat.growth_pct());
    DetailPanel::Province(ProvinceDetail {
        province: province.id,
        name: province.name.clone(),
        capital_city: province.capital_city.clone(),
        district_count: province.district_count,
        voters_current: stat.voters_current,
        voters_prior: stat.voters_prior,
        growth_pct: growth,
        growth_class: GrowthClass::from_pct(growth),
        male: stat.male,
        female: stat.female,
        male_pct: metrics::gender_share_pct(stat.male, stat.voters_current),
        female_pct: metrics::gender_share_pct(stat.female, stat.voters_current),
        density: DensityBand::from_voters(stat.voters_current),
        color: stat.color.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn markers_cover_all_provinces_with_coordinates() {
        let catalog = dataset::sample_catalog();
        let markers = province_markers(catalog, &MapConfig::default());
        assert_eq!(markers.len(), 7);

        let koshi = &markers[0];
        assert_eq!(koshi.label, "Koshi");
        assert!((koshi.radius - 16.03).abs() < 0.01);
        assert_eq!(koshi.position, LatLng { lat: 27.0, lng: 87.3 });
        assert!(koshi.popup_text.contains("Total Voters: 2,854,312"));
        assert!(koshi.popup_text.contains("Growth: +16.2%"));
    }

    #[test]
    fn marker_radius_orders_by_population() {
        let catalog = dataset::sample_catalog();
        let markers = province_markers(catalog, &MapConfig::default());
        let bagmati = markers.iter().find(|m| m.label == "Bagmati").unwrap();
        let karnali = markers.iter().find(|m| m.label == "Karnali").unwrap();
        assert!(bagmati.radius > karnali.radius);
    }

    #[test]
    fn detail_panel_resolves_selection_or_degrades() {
        let catalog = dataset::sample_catalog();

        match detail_panel(catalog, Some(ProvinceId(3))) {
            DetailPanel::Province(detail) => {
                assert_eq!(detail.name, "Province 3 (Bagmati)");
                assert_eq!(detail.capital_city, "Hetauda");
                assert_eq!(detail.voters_current, 4_235_612);
                assert_eq!(detail.density, DensityBand::High);
                assert_eq!(detail.growth_class, GrowthClass::Moderate);
            }
            DetailPanel::NoData => panic!("expected province detail"),
        }

        assert_eq!(detail_panel(catalog, None), DetailPanel::NoData);
        assert_eq!(detail_panel(catalog, Some(ProvinceId(99))), DetailPanel::NoData);
    }

    #[test]
    fn legend_lists_the_three_density_bands() {
        let legend = map_legend();
        assert_eq!(legend.len(), 3);
        assert_eq!(legend[0].label, "Low Density (<2M voters)");
        assert_eq!(legend[2].label, "High Density (>3M voters)");
    }
}
