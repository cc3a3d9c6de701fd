// file: src/components/mod.rs
// description: search and feature panels module exports
// reference: internal module structure

pub mod dispatch;
pub mod event;
pub mod feature_panel;
pub mod search_panel;
pub mod searchable_fact;

pub use dispatch::{QueryDispatcher, QueryOutcome};
pub use event::UiEvent;
pub use feature_panel::{FactRow, FactValue, FeaturePanel};
pub use search_panel::SearchPanel;
pub use searchable_fact::SearchableFact;
