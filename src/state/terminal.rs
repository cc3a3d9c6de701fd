// file: src/state/terminal.rs
// description: state owner wrapper that mirrors the loading flag as a spinner
// reference: uses indicatif for progress reporting

use crate::models::SearchResultItem;
use crate::state::{AppState, StateOwner};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

pub struct TerminalState {
    state: Arc<AppState>,
    spinner: ProgressBar,
}

impl TerminalState {
    pub fn new(state: Arc<AppState>, colored: bool) -> Arc<Self> {
        let spinner = ProgressBar::new_spinner();
        let template = if colored {
            "{spinner:.green} {msg}"
        } else {
            "{spinner} {msg}"
        };
        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            spinner.set_style(style);
        }

        Arc::new(Self { state, spinner })
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

impl StateOwner for TerminalState {
    fn set_is_loading(&self, flag: bool) {
        if flag {
            self.spinner.set_message("Searching the collection...");
            self.spinner.enable_steady_tick(Duration::from_millis(100));
        } else {
            self.spinner.disable_steady_tick();
            self.spinner.set_message("");
            self.spinner.finish_and_clear();
            self.spinner.reset();
        }
        self.state.set_is_loading(flag);
    }

    fn set_search_results(&self, items: Vec<SearchResultItem>) {
        self.state.set_search_results(items);
    }
}

impl Drop for TerminalState {
    fn drop(&mut self) {
        self.spinner.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwards_to_app_state() {
        let state = AppState::new();
        let terminal = TerminalState::new(state.clone(), false);

        terminal.set_is_loading(true);
        assert!(state.is_loading());

        terminal.set_search_results(vec![SearchResultItem::default()]);
        terminal.set_is_loading(false);

        let snapshot = terminal.state().snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.search_results.len(), 1);
    }
}
