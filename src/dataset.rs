// Embedded snapshot of the 2079 federal-election roll. Figures follow the
// Election Commission's published province tables.

use lazy_static::lazy_static;

use crate::model::catalog::{CatalogSource, EntityCatalog};
use crate::model::{
    AgeBand, CasteGroup, ColorToken, ConstituencyId, ConstituencyResult, Gender, GenderTrendPoint,
    OverviewStats, Party, PartyId, Province, ProvinceId, ProvinceVoterStat, VoterId, VoterRecord,
};

fn province(id: u16, name: &str, short_name: &str, capital: &str, districts: u32) -> Province {
    Province {
        id: ProvinceId(id),
        name: name.to_string(),
        short_name: short_name.to_string(),
        capital_city: capital.to_string(),
        district_count: districts,
    }
}

#[allow(clippy::too_many_arguments)]
fn stat(
    province: u16,
    current: u64,
    prior: u64,
    reported: f64,
    male: u64,
    female: u64,
    color: &str,
) -> ProvinceVoterStat {
    ProvinceVoterStat {
        province: ProvinceId(province),
        voters_current: current,
        voters_prior: prior,
        reported_growth_pct: reported,
        male,
        female,
        color: ColorToken::new(color),
    }
}

fn party(id: u16, name: &str, short_name: &str, color: &str, seats: u32) -> Party {
    Party {
        id: PartyId(id),
        name: name.to_string(),
        short_name: short_name.to_string(),
        color: ColorToken::new(color),
        seat_count: seats,
    }
}

#[allow(clippy::too_many_arguments)]
fn result(
    id: u32,
    constituency: &str,
    province: u16,
    district: &str,
    winner: (&str, u16, u64),
    runner_up: (&str, u16, u64),
    margin: u64,
) -> ConstituencyResult {
    ConstituencyResult {
        id: ConstituencyId(id),
        constituency_name: constituency.to_string(),
        province: ProvinceId(province),
        district_name: district.to_string(),
        winner_name: winner.0.to_string(),
        winner_party: PartyId(winner.1),
        winner_votes: winner.2,
        runner_up_name: runner_up.0.to_string(),
        runner_up_party: PartyId(runner_up.1),
        runner_up_votes: runner_up.2,
        is_elected: true,
        margin,
    }
}

fn band(label: &str, male: u64, female: u64) -> AgeBand {
    AgeBand {
        label: label.to_string(),
        male,
        female,
    }
}

fn caste(name: &str, population: u64, share_pct: f64, growth_pct: f64) -> CasteGroup {
    CasteGroup {
        name: name.to_string(),
        population,
        share_pct,
        growth_pct,
    }
}

fn trend(year: &str, male: u64, female: u64) -> GenderTrendPoint {
    GenderTrendPoint {
        year_label: year.to_string(),
        male,
        female,
    }
}

#[allow(clippy::too_many_arguments)]
fn voter(
    id: &str,
    display_name: &str,
    gender: Gender,
    age: u32,
    province: u16,
    province_name: &str,
    district: &str,
    municipality: &str,
    ward: u32,
    booth: u32,
) -> VoterRecord {
    VoterRecord {
        id: VoterId::new(id),
        display_name: display_name.to_string(),
        gender,
        age,
        province: ProvinceId(province),
        province_name: province_name.to_string(),
        district_name: district.to_string(),
        municipality_name: municipality.to_string(),
        ward_number: ward,
        booth_number: booth,
    }
}

fn sample_source() -> CatalogSource {
    CatalogSource {
        provinces: vec![
            province(1, "Province 1 (Koshi)", "Koshi", "Biratnagar", 14),
            province(2, "Province 2 (Madhesh)", "Madhesh", "Janakpur", 8),
            province(3, "Province 3 (Bagmati)", "Bagmati", "Hetauda", 13),
            province(4, "Province 4 (Gandaki)", "Gandaki", "Pokhara", 11),
            province(5, "Province 5 (Lumbini)", "Lumbini", "Deukhuri", 12),
            province(6, "Province 6 (Karnali)", "Karnali", "Birendranagar", 10),
            province(7, "Province 7 (Sudurpashchim)", "Sudurpashchim", "Godawari", 9),
        ],
        voter_stats: vec![
            stat(1, 2_854_312, 2_456_789, 16.2, 1_384_563, 1_469_749, "#C41E3A"),
            stat(2, 3_156_478, 2_678_934, 17.8, 1_608_405, 1_548_073, "#1565C0"),
            stat(3, 4_235_612, 3_678_456, 15.1, 2_075_950, 2_159_662, "#F9A825"),
            stat(4, 1_876_543, 1_623_478, 15.6, 882_375, 994_168, "#2E7D32"),
            stat(5, 2_945_678, 2_534_567, 16.2, 1_414_726, 1_530_952, "#7B1FA2"),
            stat(6, 1_234_567, 1_087_654, 13.5, 592_592, 641_975, "#E65100"),
            stat(7, 1_685_380, 1_367_491, 23.2, 793_493, 891_887, "#00838F"),
        ],
        parties: vec![
            party(1, "Nepali Congress", "NC", "#006400", 89),
            party(2, "CPN (UML)", "UML", "#FF0000", 78),
            party(3, "CPN (Maoist Centre)", "Maoist", "#8B0000", 32),
            party(4, "Rastriya Swatantra Party", "RSP", "#FFD700", 20),
            party(5, "Rastriya Prajatantra Party", "RPP", "#FFA500", 14),
            party(6, "Janata Samajbadi Party", "JSP", "#800080", 12),
            party(7, "Loktantrik Samajbadi Party", "LSP", "#4169E1", 4),
            party(8, "Independents", "IND", "#808080", 16),
        ],
        results: vec![
            result(
                1,
                "Kathmandu-1",
                3,
                "Kathmandu",
                ("Ram Bahadur Thapa", 1, 45_678),
                ("Shyam Kumar Shrestha", 2, 38_456),
                7_222,
            ),
            result(
                2,
                "Lalitpur-1",
                3,
                "Lalitpur",
                ("Sita Devi Maharjan", 2, 52_341),
                ("Hari Prasad Shrestha", 1, 48_976),
                3_365,
            ),
            result(
                3,
                "Pokhara-1",
                4,
                "Kaski",
                ("Bijay Gurung", 4, 38_945),
                ("Mina Kumari Poudel", 1, 32_156),
                6_789,
            ),
            result(
                4,
                "Biratnagar-1",
                1,
                "Morang",
                ("Prakash Rai", 3, 41_234),
                ("Sunita Limbu", 2, 39_876),
                1_358,
            ),
            result(
                5,
                "Janakpur-1",
                2,
                "Dhanusha",
                ("Mahesh Yadav", 6, 35_678),
                ("Ramesh Shah", 1, 28_945),
                6_733,
            ),
            result(
                6,
                "Butwal-1",
                5,
                "Rupandehi",
                ("Krishna Prasad Pant", 1, 44_567),
                ("Gita Sharma", 5, 36_789),
                7_778,
            ),
        ],
        age_bands: vec![
            band("18-25", 1_823_456, 1_967_834),
            band("26-35", 2_156_789, 2_345_678),
            band("36-45", 1_987_654, 2_134_567),
            band("46-55", 1_456_789, 1_567_890),
            band("56-65", 789_456, 834_567),
            band("65+", 438_960, 485_930),
        ],
        caste_groups: vec![
            caste("Brahmin", 2_456_789, 13.7, 12.3),
            caste("Chhetri", 3_156_478, 17.5, 14.5),
            caste("Magar", 1_456_789, 8.1, 16.2),
            caste("Tharu", 1_234_567, 6.9, 18.9),
            caste("Tamang", 1_123_456, 6.2, 15.7),
            caste("Newar", 987_654, 5.5, 11.2),
            caste("Kami", 876_543, 4.9, 17.8),
            caste("Yadav", 789_456, 4.4, 19.5),
            caste("Rai", 756_789, 4.2, 14.3),
            caste("Gurung", 654_321, 3.6, 13.8),
        ],
        gender_trend: vec![
            trend("2064", 7_234_567, 7_123_456),
            trend("2070", 7_856_789, 7_987_654),
            trend("2074", 8_234_567, 8_567_890),
            trend("2079", 8_652_104, 9_336_466),
        ],
        voters: vec![
            voter(
                "V001234567",
                "राम बहादुर थापा",
                Gender::Male,
                45,
                3,
                "Bagmati",
                "Kathmandu",
                "Kathmandu Metro",
                10,
                15,
            ),
            voter(
                "V001234568",
                "सीता देवी शर्मा",
                Gender::Female,
                38,
                3,
                "Bagmati",
                "Lalitpur",
                "Lalitpur Metro",
                5,
                8,
            ),
            voter(
                "V001234569",
                "हरि प्रसाद पौडेल",
                Gender::Male,
                52,
                4,
                "Gandaki",
                "Kaski",
                "Pokhara Metro",
                12,
                23,
            ),
            voter(
                "V001234570",
                "कमला राई",
                Gender::Female,
                29,
                1,
                "Koshi",
                "Morang",
                "Biratnagar Metro",
                7,
                11,
            ),
            voter(
                "V001234571",
                "विष्णु गुरुङ",
                Gender::Male,
                61,
                4,
                "Gandaki",
                "Kaski",
                "Pokhara Metro",
                3,
                5,
            ),
        ],
        overview: OverviewStats {
            voters_current: 17_988_570,
            voters_prior: 15_427_369,
            male: 8_652_104,
            female: 9_336_466,
            average_age: 38.4,
            constituency_count: 165,
            candidate_count: 2_487,
            booth_count: 21_945,
            local_level_count: 753,
        },
    }
}

lazy_static! {
    static ref SAMPLE: EntityCatalog =
        EntityCatalog::from_source(sample_source()).expect("sample roll is self-consistent");
}

/// The embedded roll snapshot. Loaded once, shared for the process lifetime.
pub fn sample_catalog() -> &'static EntityCatalog {
    &SAMPLE
}
