// file: src/state/mod.rs
// description: externally owned loading flag, result list and featured result
// reference: shared state handle injected at composition time

pub mod terminal;

use crate::models::SearchResultItem;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

pub use terminal::TerminalState;

/// Update callbacks the panels receive from whoever owns the canonical state.
pub trait StateOwner: Send + Sync {
    fn set_is_loading(&self, flag: bool);

    fn set_search_results(&self, items: Vec<SearchResultItem>);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateSnapshot {
    pub is_loading: bool,
    pub search_results: Vec<SearchResultItem>,
    pub featured_result: Option<SearchResultItem>,
}

/// Single state holder shared by every panel.
#[derive(Debug, Default)]
pub struct AppState {
    inner: Mutex<StateSnapshot>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, StateSnapshot> {
        // Writes are whole-field replaces, so a poisoned snapshot is still consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn search_results(&self) -> Vec<SearchResultItem> {
        self.lock().search_results.clone()
    }

    pub fn featured_result(&self) -> Option<SearchResultItem> {
        self.lock().featured_result.clone()
    }

    pub fn set_featured_result(&self, item: Option<SearchResultItem>) {
        self.lock().featured_result = item;
    }

    /// Features the result at `index`; out-of-range clears the selection.
    pub fn feature_index(&self, index: usize) -> Option<SearchResultItem> {
        let selected = self.lock().search_results.get(index).cloned();
        self.set_featured_result(selected.clone());
        selected
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.lock().clone()
    }
}

impl StateOwner for AppState {
    fn set_is_loading(&self, flag: bool) {
        debug!(is_loading = flag, "Loading flag updated");
        self.lock().is_loading = flag;
    }

    fn set_search_results(&self, items: Vec<SearchResultItem>) {
        debug!(count = items.len(), "Search results replaced");
        self.lock().search_results = items;
    }
}
