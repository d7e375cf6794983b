// Asynchronous voter search with last-request-wins supersession, plus the
// synchronous filter behind the results table.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::model::{ConstituencyResult, Gender, PartyId, ProvinceId, VoterRecord};

pub mod store;

pub use store::{InMemoryVoterStore, VoterStore};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Voter store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Which voter-record field a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Display name, Nepali or transliterated.
    Name,
    /// Roll identifier, e.g. "V001234567".
    VoterId,
    /// Province, district and municipality names.
    Location,
}

/// Optional facets, AND-combined with the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFacets {
    pub province: Option<ProvinceId>,
    pub gender: Option<Gender>,
}

/// One request as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub mode: SearchMode,
    pub facets: SearchFacets,
    pub page: u32,
}

/// Pagination metadata. Advisory: the store may report a logical total far
/// larger than the rows it materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "totalRecords")]
    pub total_records: u64,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "currentPage")]
    pub current_page: u32,
}

impl PageInfo {
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        (self.total_records + self.page_size as u64 - 1) / self.page_size as u64
    }
}

/// One page of results in store order. The engine never resorts records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub records: Vec<VoterRecord>,
    pub page: PageInfo,
}

/// What the results table currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    pub query: String,
    pub page: Option<SearchPage>,
}

impl SearchSnapshot {
    fn empty() -> Self {
        SearchSnapshot {
            query: String::new(),
            page: None,
        }
    }
}

/// How one `search` call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The response became the visible result set.
    Applied(SearchPage),
    /// A later request was issued while this one was in flight; the
    /// response was discarded.
    Superseded,
    /// Blank query: visible results were cleared without consulting the
    /// store.
    Cleared,
}

/// Tuning knobs for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub page_size: u32,
    pub simulated_latency: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            page_size: 10,
            simulated_latency: Duration::from_millis(500),
        }
    }
}

/// Search front end owned by the page session. Requests are stamped with a
/// monotonically increasing sequence number; only the response to the
/// latest stamp may become visible.
pub struct SearchEngine<S> {
    store: S,
    issued: AtomicU64,
    results_tx: watch::Sender<SearchSnapshot>,
}

impl<S: VoterStore> SearchEngine<S> {
    pub fn new(store: S) -> Self {
        let (results_tx, _rx) = watch::channel(SearchSnapshot::empty());
        SearchEngine {
            store,
            issued: AtomicU64::new(0),
            results_tx,
        }
    }

    /// Run a search. A blank or whitespace query acts like `clear`: it
    /// drops the visible results and invalidates any in-flight request
    /// without consulting the store.
    pub async fn search(
        &self,
        query: &str,
        mode: SearchMode,
        facets: SearchFacets,
    ) -> Result<SearchOutcome> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.clear();
            return Ok(SearchOutcome::Cleared);
        }

        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(seq, query = trimmed, ?mode, "search issued");

        let request = SearchRequest {
            query: trimmed.to_string(),
            mode,
            facets,
            page: 1,
        };
        let page = self.store.fetch_page(&request).await?;

        // A request issued after this one owns the visible state now,
        // whether or not its response has arrived.
        if self.issued.load(Ordering::SeqCst) != seq {
            tracing::debug!(seq, "search superseded, response discarded");
            return Ok(SearchOutcome::Superseded);
        }

        self.results_tx.send_replace(SearchSnapshot {
            query: trimmed.to_string(),
            page: Some(page.clone()),
        });
        Ok(SearchOutcome::Applied(page))
    }

    /// Clear the visible results and invalidate any in-flight request.
    pub fn clear(&self) {
        self.issued.fetch_add(1, Ordering::SeqCst);
        self.results_tx.send_replace(SearchSnapshot::empty());
    }

    /// The currently visible result set.
    pub fn visible(&self) -> SearchSnapshot {
        self.results_tx.borrow().clone()
    }

    /// Subscribe to visible-result changes; the table re-renders from the
    /// receiver.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.results_tx.subscribe()
    }
}

/// Shared match predicate: case-insensitive substring over the mode field,
/// AND-combined with the facets. `needle` must already be lowercased.
pub fn record_matches(
    record: &VoterRecord,
    mode: SearchMode,
    needle: &str,
    facets: &SearchFacets,
) -> bool {
    let haystack = match mode {
        SearchMode::Name => record.display_name.to_lowercase(),
        SearchMode::VoterId => record.id.as_str().to_lowercase(),
        SearchMode::Location => format!(
            "{} {} {}",
            record.province_name, record.district_name, record.municipality_name
        )
        .to_lowercase(),
    };
    if !haystack.contains(needle) {
        return false;
    }
    if let Some(province) = facets.province {
        if record.province != province {
            return false;
        }
    }
    if let Some(gender) = facets.gender {
        if record.gender != gender {
            return false;
        }
    }
    true
}

/// Synchronous filter behind the constituency results table. Unlike voter
/// search, an empty term keeps the table fully populated. Input order is
/// preserved.
pub fn filter_results<'a>(
    results: &'a [ConstituencyResult],
    term: &str,
    party: Option<PartyId>,
) -> Vec<&'a ConstituencyResult> {
    let needle = term.trim().to_lowercase();
    results
        .iter()
        .filter(|result| {
            let matches_term = needle.is_empty()
                || result.constituency_name.to_lowercase().contains(&needle)
                || result.winner_name.to_lowercase().contains(&needle)
                || result.district_name.to_lowercase().contains(&needle);
            let matches_party = party.map_or(true, |p| result.winner_party == p);
            matches_term && matches_party
        })
        .collect()
}
