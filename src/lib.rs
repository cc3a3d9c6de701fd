// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod utils;

pub use api::{CollectionApi, HarvardClient};
pub use components::{
    FactRow, FactValue, FeaturePanel, QueryDispatcher, QueryOutcome, SearchPanel, SearchableFact,
    UiEvent,
};
pub use config::{ApiConfig, Config, ResponseOrdering, SearchConfig};
pub use error::{CollectorError, Result};
pub use models::{ANY, FacetKey, FacetOption, Image, Person, QueryCriteria, SearchResultItem};
pub use state::{AppState, StateOwner, StateSnapshot, TerminalState};
