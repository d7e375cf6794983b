// End-to-end flows over the public API: one shared catalog feeding the
// views, selection driving the detail panel, the async search path, and
// the report picker.

use std::sync::Arc;

use election_atlas::dataset;
use election_atlas::metrics::GrowthClass;
use election_atlas::model::ProvinceId;
use election_atlas::reports::{
    report_preview, ExportFormat, ExportManifest, ReportKind, ScopeFilter,
};
use election_atlas::search::{
    InMemoryVoterStore, SearchConfig, SearchEngine, SearchFacets, SearchMode, SearchOutcome,
};
use election_atlas::selection::PageSelections;
use election_atlas::view::cards::{growth_badges, overview_cards};
use election_atlas::view::map::{detail_panel, province_markers, DetailPanel, MapConfig};

#[test]
fn one_catalog_feeds_every_view() {
    let catalog = dataset::sample_catalog();

    let cards = overview_cards(catalog);
    assert_eq!(cards.len(), 8);
    assert_eq!(cards[0].value, "17,988,570");

    let markers = province_markers(catalog, &MapConfig::default());
    assert_eq!(markers.len(), 7);

    let badges = growth_badges(catalog);
    assert_eq!(badges.len(), 7);
    assert_eq!(badges[6].class, GrowthClass::High);
}

#[test]
fn selection_drives_the_detail_panel() {
    let catalog = dataset::sample_catalog();
    let selections = PageSelections::new();

    selections.province.select(ProvinceId(3));
    match detail_panel(catalog, selections.province.selected()) {
        DetailPanel::Province(detail) => {
            assert_eq!(detail.name, "Province 3 (Bagmati)");
            assert_eq!(detail.voters_current, 4_235_612);
        }
        DetailPanel::NoData => panic!("expected a province detail"),
    }

    // Clicking the selected province again deselects it.
    selections.province.select(ProvinceId(3));
    assert_eq!(selections.province.selected(), None);
    assert_eq!(
        detail_panel(catalog, selections.province.selected()),
        DetailPanel::NoData
    );

    // Constituency selection lives in its own domain.
    assert_eq!(selections.constituency.selected(), None);
}

#[tokio::test(start_paused = true)]
async fn roll_search_matches_the_embedded_records() {
    let catalog = dataset::sample_catalog();
    let store = InMemoryVoterStore::new(catalog.voter_records().to_vec(), SearchConfig::default());
    let engine = SearchEngine::new(store);

    match engine
        .search("राम", SearchMode::Name, SearchFacets::default())
        .await
        .unwrap()
    {
        SearchOutcome::Applied(page) => {
            assert_eq!(page.records.len(), 1);
            assert_eq!(page.records[0].id.as_str(), "V001234567");
        }
        other => panic!("expected Applied, got {:?}", other),
    }

    match engine
        .search("pokhara", SearchMode::Location, SearchFacets::default())
        .await
        .unwrap()
    {
        SearchOutcome::Applied(page) => {
            assert_eq!(page.records.len(), 2);
        }
        other => panic!("expected Applied, got {:?}", other),
    }

    let cleared = engine
        .search("", SearchMode::Name, SearchFacets::default())
        .await
        .unwrap();
    assert_eq!(cleared, SearchOutcome::Cleared);
    assert!(engine.visible().page.is_none());
}

#[tokio::test(start_paused = true)]
async fn clearing_discards_the_in_flight_response() {
    let catalog = dataset::sample_catalog();
    let store = InMemoryVoterStore::new(catalog.voter_records().to_vec(), SearchConfig::default());
    let engine = Arc::new(SearchEngine::new(store));

    let pending = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            engine
                .search("कमला", SearchMode::Name, SearchFacets::default())
                .await
                .unwrap()
        })
    };
    tokio::task::yield_now().await;
    engine.clear();

    assert_eq!(pending.await.unwrap(), SearchOutcome::Superseded);
    assert!(engine.visible().page.is_none());

    // A fresh search after the clear becomes visible as usual.
    match engine
        .search("सीता", SearchMode::Name, SearchFacets::default())
        .await
        .unwrap()
    {
        SearchOutcome::Applied(page) => {
            assert_eq!(page.records[0].id.as_str(), "V001234568");
        }
        other => panic!("expected Applied, got {:?}", other),
    }
    assert_eq!(engine.visible().query, "सीता");
}

#[test]
fn report_picker_flow_builds_a_manifest() {
    let catalog = dataset::sample_catalog();
    let selections = PageSelections::new();

    selections.report.select(ReportKind::District);
    selections.export_format.select(ExportFormat::Pdf);
    let report = selections.report.selected().unwrap();
    let format = selections.export_format.selected().unwrap();

    // District reports cannot run roll-wide.
    assert!(ExportManifest::new(report, ScopeFilter::AllProvinces, format, true).is_err());

    let manifest =
        ExportManifest::new(report, ScopeFilter::Province(ProvinceId(3)), format, true).unwrap();
    assert!(manifest.include_charts);
    assert_eq!(manifest.sections.len(), 6);

    let preview = report_preview(catalog, &manifest.scope).unwrap();
    assert_eq!(preview.total_records, 4_235_612);
    assert_eq!(preview.district_count, 13);

    // Switching to CSV drops the charts option.
    selections.export_format.select(ExportFormat::Csv);
    selections.export_format.select(ExportFormat::Csv);
    assert_eq!(selections.export_format.selected(), None);
    let csv = ExportManifest::new(
        report,
        ScopeFilter::Province(ProvinceId(3)),
        ExportFormat::Csv,
        true,
    )
    .unwrap();
    assert!(!csv.include_charts);
}
