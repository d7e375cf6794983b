//! Core library for the election atlas dashboard. Owns the typed entity
//! catalog, the derived-metric rules, per-page selection state, the async
//! voter search, and the display payloads the renderers consume.
//!
//! Rendering, routing and HTTP live elsewhere; everything here is plain
//! data in, finished display values out.

pub mod dataset;
pub mod metrics;
pub mod model;
pub mod reports;
pub mod search;
pub mod selection;
pub mod util;
pub mod view;

pub use model::catalog::{CatalogError, CatalogSource, DataQualityWarning, EntityCatalog};
pub use search::{SearchEngine, SearchFacets, SearchMode, SearchOutcome};
pub use selection::{PageSelections, SelectionCoordinator, SelectionState};
