// Typed records backing the dashboard views. Every collection is owned by
// the EntityCatalog; views keep ids and look records up on demand.

pub mod catalog;

use serde::{Deserialize, Serialize};

/// Province identifier (1 through 7 in the current federal structure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProvinceId(pub u16);

/// Party identifier, stable within one dataset snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartyId(pub u16);

/// Constituency identifier, stable within one dataset snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConstituencyId(pub u32);

/// Voter identifier as printed on the roll, e.g. "V001234567".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoterId(pub String);

impl VoterId {
    pub fn new(id: impl Into<String>) -> Self {
        VoterId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CSS color handed to renderers verbatim, e.g. "#C41E3A".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorToken(pub String);

impl ColorToken {
    pub fn new(color: impl Into<String>) -> Self {
        ColorToken(color.into())
    }

    /// Neutral grey used when an entity carries no color of its own.
    pub fn neutral() -> Self {
        ColorToken("#808080".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Gender as recorded on the voter roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: ProvinceId,
    /// Official roster name, e.g. "Province 1 (Koshi)".
    pub name: String,
    /// Short label used on maps and chart axes, e.g. "Koshi".
    #[serde(rename = "shortName")]
    pub short_name: String,
    #[serde(rename = "capitalCity")]
    pub capital_city: String,
    #[serde(rename = "districtCount")]
    pub district_count: u32,
}

/// Registered-voter statistics for one province across the two most recent
/// rolls (2074 and 2079 BS).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceVoterStat {
    pub province: ProvinceId,
    #[serde(rename = "votersCurrent")]
    pub voters_current: u64,
    #[serde(rename = "votersPrior")]
    pub voters_prior: u64,
    /// Growth figure as published with the source data. Display code must
    /// recompute growth from the two counts; this field only feeds the
    /// load-time consistency check.
    #[serde(rename = "reportedGrowthPct")]
    pub reported_growth_pct: f64,
    pub male: u64,
    pub female: u64,
    pub color: ColorToken,
}

impl ProvinceVoterStat {
    /// Growth recomputed from the two roll counts.
    pub fn growth_pct(&self) -> f64 {
        crate::metrics::growth_pct(self.voters_current, self.voters_prior)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub color: ColorToken,
    #[serde(rename = "seatCount")]
    pub seat_count: u32,
}

/// First-past-the-post outcome for a single constituency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituencyResult {
    pub id: ConstituencyId,
    #[serde(rename = "constituencyName")]
    pub constituency_name: String,
    pub province: ProvinceId,
    #[serde(rename = "districtName")]
    pub district_name: String,
    #[serde(rename = "winnerName")]
    pub winner_name: String,
    #[serde(rename = "winnerParty")]
    pub winner_party: PartyId,
    #[serde(rename = "winnerVotes")]
    pub winner_votes: u64,
    #[serde(rename = "runnerUpName")]
    pub runner_up_name: String,
    #[serde(rename = "runnerUpParty")]
    pub runner_up_party: PartyId,
    #[serde(rename = "runnerUpVotes")]
    pub runner_up_votes: u64,
    #[serde(rename = "isElected")]
    pub is_elected: bool,
    /// Winner votes minus runner-up votes. Recomputed at catalog load so a
    /// stale published figure can never reach the views.
    pub margin: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    /// Band label as printed on the chart axis, e.g. "18-25" or "65+".
    pub label: String,
    pub male: u64,
    pub female: u64,
}

impl AgeBand {
    pub fn total(&self) -> u64 {
        self.male + self.female
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasteGroup {
    pub name: String,
    pub population: u64,
    #[serde(rename = "sharePct")]
    pub share_pct: f64,
    #[serde(rename = "growthPct")]
    pub growth_pct: f64,
}

/// Male/female registration totals for one election year. Years follow the
/// Bikram Sambat calendar and are treated as opaque labels, not dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderTrendPoint {
    #[serde(rename = "yearLabel")]
    pub year_label: String,
    pub male: u64,
    pub female: u64,
}

/// One display-ready row of the searchable voter roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoterRecord {
    pub id: VoterId,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub gender: Gender,
    pub age: u32,
    pub province: ProvinceId,
    #[serde(rename = "provinceName")]
    pub province_name: String,
    #[serde(rename = "districtName")]
    pub district_name: String,
    #[serde(rename = "municipalityName")]
    pub municipality_name: String,
    #[serde(rename = "wardNumber")]
    pub ward_number: u32,
    #[serde(rename = "boothNumber")]
    pub booth_number: u32,
}

/// Topline numbers behind the overview cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    #[serde(rename = "votersCurrent")]
    pub voters_current: u64,
    #[serde(rename = "votersPrior")]
    pub voters_prior: u64,
    pub male: u64,
    pub female: u64,
    #[serde(rename = "averageAge")]
    pub average_age: f64,
    #[serde(rename = "constituencyCount")]
    pub constituency_count: u32,
    #[serde(rename = "candidateCount")]
    pub candidate_count: u32,
    #[serde(rename = "boothCount")]
    pub booth_count: u32,
    #[serde(rename = "localLevelCount")]
    pub local_level_count: u32,
}

impl OverviewStats {
    /// Net new registrations between the two rolls.
    pub fn net_growth(&self) -> i64 {
        self.voters_current as i64 - self.voters_prior as i64
    }

    pub fn growth_pct(&self) -> f64 {
        crate::metrics::growth_pct(self.voters_current, self.voters_prior)
    }
}
