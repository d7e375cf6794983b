pub mod cards;
pub mod charts;
pub mod map;
pub mod tooltip;

pub use cards::{overview_cards, GrowthBadge, StatCard, TrendBadge};
pub use charts::{CategoryChart, ChartSeries, PieChart, PieSlice};
pub use map::{DetailPanel, MapConfig, ProvinceMarker};
pub use tooltip::TooltipPayload;

use crate::model::catalog::EntityCatalog;
use crate::model::ProvinceId;

/// Short axis/legend label for a province, falling back to the numeric id
/// when the catalog row is missing.
pub(crate) fn province_label(catalog: &EntityCatalog, id: ProvinceId) -> String {
    catalog
        .province(id)
        .map(|p| p.short_name.clone())
        .unwrap_or_else(|| format!("Province {}", id.0))
}
