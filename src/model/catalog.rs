use std::collections::HashSet;

use crate::metrics;
use crate::model::{
    AgeBand, CasteGroup, ConstituencyId, ConstituencyResult, GenderTrendPoint, OverviewStats,
    Party, PartyId, Province, ProvinceId, ProvinceVoterStat, VoterId, VoterRecord,
};

/// Tolerance in percentage points when comparing a published growth figure
/// against the value recomputed from the raw counts.
const GROWTH_TOLERANCE_PP: f64 = 0.05;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Data integrity error: {0}")]
    Integrity(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Inconsistency found while loading a snapshot. Warnings never block the
/// load; the recomputed value wins and the published one is reported here.
#[derive(Debug, Clone, PartialEq)]
pub enum DataQualityWarning {
    GrowthMismatch {
        province: ProvinceId,
        reported: f64,
        recomputed: f64,
    },
    MarginMismatch {
        constituency: ConstituencyId,
        reported: u64,
        recomputed: u64,
    },
    GenderCountDrift {
        province: ProvinceId,
        counted: u64,
        total: u64,
    },
}

impl std::fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataQualityWarning::GrowthMismatch {
                province,
                reported,
                recomputed,
            } => write!(
                f,
                "province {}: published growth {:.2}% differs from recomputed {:.2}%",
                province.0, reported, recomputed
            ),
            DataQualityWarning::MarginMismatch {
                constituency,
                reported,
                recomputed,
            } => write!(
                f,
                "constituency {}: published margin {} differs from recomputed {}",
                constituency.0, reported, recomputed
            ),
            DataQualityWarning::GenderCountDrift {
                province,
                counted,
                total,
            } => write!(
                f,
                "province {}: male + female is {} but the roll total is {}",
                province.0, counted, total
            ),
        }
    }
}

/// Raw collections for one dataset snapshot, as published.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    pub provinces: Vec<Province>,
    pub voter_stats: Vec<ProvinceVoterStat>,
    pub parties: Vec<Party>,
    pub results: Vec<ConstituencyResult>,
    pub age_bands: Vec<AgeBand>,
    pub caste_groups: Vec<CasteGroup>,
    pub gender_trend: Vec<GenderTrendPoint>,
    pub voters: Vec<VoterRecord>,
    pub overview: OverviewStats,
}

/// Immutable snapshot of every collection the dashboard renders from.
/// Built once per page session; views borrow from it and never mutate it.
#[derive(Debug, Clone)]
pub struct EntityCatalog {
    provinces: Vec<Province>,
    voter_stats: Vec<ProvinceVoterStat>,
    parties: Vec<Party>,
    results: Vec<ConstituencyResult>,
    age_bands: Vec<AgeBand>,
    caste_groups: Vec<CasteGroup>,
    gender_trend: Vec<GenderTrendPoint>,
    voters: Vec<VoterRecord>,
    overview: OverviewStats,
    warnings: Vec<DataQualityWarning>,
}

impl EntityCatalog {
    /// Validate cross-references, recompute derived columns and collect
    /// data-quality warnings, then freeze the snapshot.
    pub fn from_source(source: CatalogSource) -> Result<EntityCatalog> {
        let CatalogSource {
            provinces,
            voter_stats,
            parties,
            mut results,
            age_bands,
            caste_groups,
            gender_trend,
            voters,
            overview,
        } = source;

        let province_ids: HashSet<ProvinceId> = provinces.iter().map(|p| p.id).collect();
        let party_ids: HashSet<PartyId> = parties.iter().map(|p| p.id).collect();
        let mut warnings = Vec::new();

        // Step 1: every row that points at a province or party must resolve.
        for stat in &voter_stats {
            if !province_ids.contains(&stat.province) {
                return Err(CatalogError::Integrity(format!(
                    "voter stat references unknown province {}",
                    stat.province.0
                )));
            }
        }
        for result in &results {
            if !province_ids.contains(&result.province) {
                return Err(CatalogError::Integrity(format!(
                    "result {} references unknown province {}",
                    result.constituency_name, result.province.0
                )));
            }
            for party in [result.winner_party, result.runner_up_party] {
                if !party_ids.contains(&party) {
                    return Err(CatalogError::Integrity(format!(
                        "result {} references unknown party {}",
                        result.constituency_name, party.0
                    )));
                }
            }
        }
        for voter in &voters {
            if !province_ids.contains(&voter.province) {
                return Err(CatalogError::Integrity(format!(
                    "voter {} references unknown province {}",
                    voter.id, voter.province.0
                )));
            }
        }

        // Step 2: margins are recomputed from the vote counts. A winner
        // with fewer votes than the runner-up is corrupt data, not a
        // warning.
        for result in &mut results {
            if result.is_elected && result.winner_votes < result.runner_up_votes {
                return Err(CatalogError::Integrity(format!(
                    "result {} marks a winner with fewer votes than the runner-up",
                    result.constituency_name
                )));
            }
            let recomputed = result.winner_votes.saturating_sub(result.runner_up_votes);
            if result.margin != recomputed {
                let warning = DataQualityWarning::MarginMismatch {
                    constituency: result.id,
                    reported: result.margin,
                    recomputed,
                };
                tracing::warn!(%warning, "margin recomputed");
                warnings.push(warning);
                result.margin = recomputed;
            }
        }

        // Step 3: published growth and gender splits are checked against
        // the raw counts.
        for stat in &voter_stats {
            let recomputed = metrics::growth_pct(stat.voters_current, stat.voters_prior);
            if (recomputed - stat.reported_growth_pct).abs() > GROWTH_TOLERANCE_PP {
                let warning = DataQualityWarning::GrowthMismatch {
                    province: stat.province,
                    reported: stat.reported_growth_pct,
                    recomputed,
                };
                tracing::warn!(%warning, "growth recomputed");
                warnings.push(warning);
            }
            let counted = stat.male + stat.female;
            if counted != stat.voters_current {
                let warning = DataQualityWarning::GenderCountDrift {
                    province: stat.province,
                    counted,
                    total: stat.voters_current,
                };
                tracing::warn!(%warning, "gender split drifts from roll total");
                warnings.push(warning);
            }
        }

        Ok(EntityCatalog {
            provinces,
            voter_stats,
            parties,
            results,
            age_bands,
            caste_groups,
            gender_trend,
            voters,
            overview,
            warnings,
        })
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn voter_stats(&self) -> &[ProvinceVoterStat] {
        &self.voter_stats
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn results(&self) -> &[ConstituencyResult] {
        &self.results
    }

    pub fn age_bands(&self) -> &[AgeBand] {
        &self.age_bands
    }

    pub fn caste_groups(&self) -> &[CasteGroup] {
        &self.caste_groups
    }

    pub fn gender_trend(&self) -> &[GenderTrendPoint] {
        &self.gender_trend
    }

    pub fn voter_records(&self) -> &[VoterRecord] {
        &self.voters
    }

    pub fn overview(&self) -> &OverviewStats {
        &self.overview
    }

    /// Inconsistencies collected while loading the snapshot.
    pub fn data_warnings(&self) -> &[DataQualityWarning] {
        &self.warnings
    }

    /// Look up a province by id.
    pub fn province(&self, id: ProvinceId) -> Option<&Province> {
        self.provinces.iter().find(|p| p.id == id)
    }

    /// Look up a province by roster name or short label, ignoring case.
    pub fn province_by_name(&self, name: &str) -> Option<&Province> {
        self.provinces.iter().find(|p| {
            p.name.eq_ignore_ascii_case(name) || p.short_name.eq_ignore_ascii_case(name)
        })
    }

    /// Look up a party by id.
    pub fn party(&self, id: PartyId) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    /// Look up a party by full name or short name, ignoring case.
    pub fn party_by_name(&self, name: &str) -> Option<&Party> {
        self.parties.iter().find(|p| {
            p.name.eq_ignore_ascii_case(name) || p.short_name.eq_ignore_ascii_case(name)
        })
    }

    /// Voter statistics for one province.
    pub fn stat_for(&self, province: ProvinceId) -> Option<&ProvinceVoterStat> {
        self.voter_stats.iter().find(|s| s.province == province)
    }

    /// Look up a constituency result by id.
    pub fn result(&self, id: ConstituencyId) -> Option<&ConstituencyResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Look up a voter record by roll id.
    pub fn voter(&self, id: &VoterId) -> Option<&VoterRecord> {
        self.voters.iter().find(|v| &v.id == id)
    }

    /// Total parliament seats across all parties in the snapshot.
    pub fn total_seats(&self) -> u32 {
        self.parties.iter().map(|p| p.seat_count).sum()
    }

    /// Sum of district counts across all provinces.
    pub fn total_districts(&self) -> u32 {
        self.provinces.iter().map(|p| p.district_count).sum()
    }
}
