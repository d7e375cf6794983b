use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::catalog::EntityCatalog;
use crate::model::ProvinceId;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("{0} requires a province scope")]
    ScopeRequired(ReportKind),
}

pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Report offered on the picker cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    #[serde(rename = "executive")]
    ExecutiveSummary,
    #[serde(rename = "province")]
    Province,
    #[serde(rename = "district")]
    District,
    #[serde(rename = "full")]
    FullDataset,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::ExecutiveSummary,
        ReportKind::Province,
        ReportKind::District,
        ReportKind::FullDataset,
    ];

    /// Stable id used in manifests and picker state.
    pub fn id(&self) -> &'static str {
        match self {
            ReportKind::ExecutiveSummary => "executive",
            ReportKind::Province => "province",
            ReportKind::District => "district",
            ReportKind::FullDataset => "full",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::ExecutiveSummary => "Executive Summary",
            ReportKind::Province => "Province Report",
            ReportKind::District => "District Report",
            ReportKind::FullDataset => "Full Dataset Export",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::ExecutiveSummary => "High-level overview with key metrics and insights",
            ReportKind::Province => "Detailed analysis for a specific province",
            ReportKind::District => "Granular data at district level",
            ReportKind::FullDataset => "Complete voter database export",
        }
    }

    /// Province- and district-level reports cannot run roll-wide.
    pub fn requires_scope(&self) -> bool {
        matches!(self, ReportKind::Province | ReportKind::District)
    }

    pub fn from_id(id: &str) -> Option<ReportKind> {
        ReportKind::ALL.iter().copied().find(|kind| kind.id() == id)
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// File format an export is delivered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "xlsx")]
    Xlsx,
    #[serde(rename = "pdf")]
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Pdf];

    pub fn id(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "Excel (XLSX)",
            ExportFormat::Pdf => "PDF Report",
        }
    }

    /// Only the PDF rendering embeds chart images.
    pub fn supports_charts(&self) -> bool {
        matches!(self, ExportFormat::Pdf)
    }

    pub fn from_id(id: &str) -> Option<ExportFormat> {
        ExportFormat::ALL.iter().copied().find(|f| f.id() == id)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Content checklist printed on every manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportSection {
    #[serde(rename = "executiveSummary")]
    ExecutiveSummary,
    #[serde(rename = "provinceDistribution")]
    ProvinceDistribution,
    #[serde(rename = "genderRatio")]
    GenderRatio,
    #[serde(rename = "ageDemographics")]
    AgeDemographics,
    #[serde(rename = "growthComparison")]
    GrowthComparison,
    #[serde(rename = "constituencyResults")]
    ConstituencyResults,
}

impl ReportSection {
    /// Canonical section order.
    pub const ALL: [ReportSection; 6] = [
        ReportSection::ExecutiveSummary,
        ReportSection::ProvinceDistribution,
        ReportSection::GenderRatio,
        ReportSection::AgeDemographics,
        ReportSection::GrowthComparison,
        ReportSection::ConstituencyResults,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReportSection::ExecutiveSummary => "Executive summary with key findings",
            ReportSection::ProvinceDistribution => "Province-wise voter distribution",
            ReportSection::GenderRatio => "Gender ratio analysis",
            ReportSection::AgeDemographics => "Age group demographics",
            ReportSection::GrowthComparison => "Growth comparison (2074 vs 2079)",
            ReportSection::ConstituencyResults => "Constituency-wise results",
        }
    }
}

/// Geographic slice a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeFilter {
    #[serde(rename = "allProvinces")]
    AllProvinces,
    #[serde(rename = "province")]
    Province(ProvinceId),
}

/// Validated export request ready for the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    pub report: ReportKind,
    pub scope: ScopeFilter,
    pub format: ExportFormat,
    #[serde(rename = "includeCharts")]
    pub include_charts: bool,
    pub sections: Vec<ReportSection>,
    #[serde(rename = "requestedAt")]
    pub requested_at: DateTime<Utc>,
}

impl ExportManifest {
    /// Builds a manifest, rejecting scope-less province and district
    /// reports and stripping the charts flag from formats that cannot
    /// carry them.
    pub fn new(
        report: ReportKind,
        scope: ScopeFilter,
        format: ExportFormat,
        include_charts: bool,
    ) -> ManifestResult<ExportManifest> {
        if report.requires_scope() && !matches!(scope, ScopeFilter::Province(_)) {
            return Err(ManifestError::ScopeRequired(report));
        }
        Ok(ExportManifest {
            report,
            scope,
            format,
            include_charts: include_charts && format.supports_charts(),
            sections: ReportSection::ALL.to_vec(),
            requested_at: Utc::now(),
        })
    }
}

/// Summary tiles shown under the report picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPreview {
    #[serde(rename = "totalRecords")]
    pub total_records: u64,
    #[serde(rename = "provinceCount")]
    pub province_count: u32,
    #[serde(rename = "districtCount")]
    pub district_count: u32,
    #[serde(rename = "localLevelCount")]
    pub local_level_count: u32,
}

/// Preview figures for the chosen scope. A scoped preview narrows the
/// record and district counts to the one province; local levels stay
/// roll-wide because the catalog does not break them down. Returns None
/// when the scoped province is not in the catalog.
pub fn report_preview(catalog: &EntityCatalog, scope: &ScopeFilter) -> Option<ReportPreview> {
    let overview = catalog.overview();
    match scope {
        ScopeFilter::AllProvinces => Some(ReportPreview {
            total_records: overview.voters_current,
            province_count: catalog.provinces().len() as u32,
            district_count: catalog.total_districts(),
            local_level_count: overview.local_level_count,
        }),
        ScopeFilter::Province(id) => {
            let province = catalog.province(*id)?;
            let voters = catalog
                .stat_for(*id)
                .map(|stat| stat.voters_current)
                .unwrap_or(0);
            Some(ReportPreview {
                total_records: voters,
                province_count: 1,
                district_count: province.district_count,
                local_level_count: overview.local_level_count,
            })
        }
    }
}
