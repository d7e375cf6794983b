use std::time::Duration;

use crate::model::VoterRecord;
use crate::search::{record_matches, PageInfo, Result, SearchConfig, SearchPage, SearchRequest};

/// Wherever voter records actually live. The dashboard ships an in-memory
/// store; a deployment against the real roll implements this over its
/// query service.
#[allow(async_fn_in_trait)]
pub trait VoterStore: Send + Sync {
    async fn fetch_page(&self, request: &SearchRequest) -> Result<SearchPage>;
}

/// Store backed by the records of a dataset snapshot. Simulates the
/// latency of a remote roll service so the engine's supersession handling
/// is exercised the same way in development as in production.
#[derive(Debug, Clone)]
pub struct InMemoryVoterStore {
    records: Vec<VoterRecord>,
    config: SearchConfig,
    /// Logical roll size advertised in pagination metadata. The real roll
    /// service reports the full roll, not the handful of rows it returns.
    roll_size_hint: Option<u64>,
}

impl InMemoryVoterStore {
    pub fn new(records: Vec<VoterRecord>, config: SearchConfig) -> Self {
        InMemoryVoterStore {
            records,
            config,
            roll_size_hint: None,
        }
    }

    /// Advertise `total` in pagination metadata instead of the matched
    /// count.
    pub fn with_roll_size_hint(mut self, total: u64) -> Self {
        self.roll_size_hint = Some(total);
        self
    }

    fn latency(&self) -> Duration {
        self.config.simulated_latency
    }
}

impl VoterStore for InMemoryVoterStore {
    async fn fetch_page(&self, request: &SearchRequest) -> Result<SearchPage> {
        if !self.latency().is_zero() {
            tokio::time::sleep(self.latency()).await;
        }

        let needle = request.query.to_lowercase();
        let matched: Vec<VoterRecord> = self
            .records
            .iter()
            .filter(|record| record_matches(record, request.mode, &needle, &request.facets))
            .cloned()
            .collect();

        let total_records = self.roll_size_hint.unwrap_or(matched.len() as u64);
        let records: Vec<VoterRecord> = matched
            .into_iter()
            .take(self.config.page_size as usize)
            .collect();

        Ok(SearchPage {
            records,
            page: PageInfo {
                total_records,
                page_size: self.config.page_size,
                current_page: request.page,
            },
        })
    }
}
