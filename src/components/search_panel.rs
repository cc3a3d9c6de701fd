// file: src/components/search_panel.rs
// description: search form with vocabulary-backed selectors and submit handling
// reference: https://docs.rs/maud

use crate::components::dispatch::{QueryDispatcher, QueryOutcome};
use crate::components::event::UiEvent;
use crate::models::{ANY, FacetOption, QueryCriteria};
use maud::{Markup, Render, html};
use tracing::{debug, error, info, warn};

pub struct SearchPanel {
    dispatcher: QueryDispatcher,
    century_list: Vec<FacetOption>,
    classification_list: Vec<FacetOption>,
    query_string: String,
    century: String,
    classification: String,
}

impl SearchPanel {
    pub fn new(dispatcher: QueryDispatcher) -> Self {
        Self {
            dispatcher,
            century_list: Vec::new(),
            classification_list: Vec::new(),
            query_string: String::new(),
            century: ANY.to_string(),
            classification: ANY.to_string(),
        }
    }

    /// Loads both vocabularies concurrently. Lists are only populated once both
    /// fetches have settled; a failed fetch leaves its list empty.
    pub async fn mount(&mut self) {
        let api = self.dispatcher.api();
        let (centuries, classifications) =
            futures::join!(api.fetch_all_centuries(), api.fetch_all_classifications());

        match centuries {
            Ok(list) => self.century_list = list,
            Err(e) => error!(error = %e, "Failed to load centuries"),
        }

        match classifications {
            Ok(list) => self.classification_list = list,
            Err(e) => error!(error = %e, "Failed to load classifications"),
        }

        info!(
            centuries = self.century_list.len(),
            classifications = self.classification_list.len(),
            "Search vocabularies loaded"
        );
    }

    pub fn century_list(&self) -> &[FacetOption] {
        &self.century_list
    }

    pub fn classification_list(&self) -> &[FacetOption] {
        &self.classification_list
    }

    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    pub fn century(&self) -> &str {
        &self.century
    }

    pub fn classification(&self) -> &str {
        &self.classification
    }

    pub fn set_query_string(&mut self, value: impl Into<String>) {
        self.query_string = value.into();
    }

    pub fn set_century(&mut self, value: impl Into<String>) {
        self.century = value.into();
        warn_unknown("century", &self.century, &self.century_list);
    }

    pub fn set_classification(&mut self, value: impl Into<String>) {
        self.classification = value.into();
        warn_unknown("classification", &self.classification, &self.classification_list);
    }

    /// Criteria rebuilt from the current field values.
    pub fn criteria(&self) -> QueryCriteria {
        QueryCriteria::new(
            self.query_string.clone(),
            self.century.clone(),
            self.classification.clone(),
        )
    }

    pub async fn submit(&self, event: &mut UiEvent) -> QueryOutcome {
        event.prevent_default();
        let criteria = self.criteria();
        debug!(unfiltered = criteria.is_unfiltered(), ?criteria, "Submitting search");
        self.dispatcher.query(&criteria).await
    }
}

fn warn_unknown(axis: &str, value: &str, options: &[FacetOption]) {
    if value != ANY && !options.is_empty() && !options.iter().any(|option| option.id == value) {
        warn!(axis, value, "Selected value is not in the loaded vocabulary");
    }
}

fn selector(id: &str, name: &str, selected: &str, options: &[FacetOption]) -> Markup {
    html! {
        select name=(name) id=(id) {
            option value=(ANY) selected[selected == ANY] { "Any" }
            @for option in options {
                option value=(option.id) selected[selected == option.id] { (option.name) }
            }
        }
    }
}

impl Render for SearchPanel {
    fn render(&self) -> Markup {
        html! {
            form id="search" {
                fieldset {
                    label for="keywords" { "Query" }
                    input
                        id="keywords"
                        type="text"
                        placeholder="enter keywords..."
                        value=(self.query_string);
                }
                fieldset {
                    label for="select-classification" {
                        "Classification "
                        span class="classification-count" {
                            "(" (self.classification_list.len()) ")"
                        }
                    }
                    (selector(
                        "select-classification",
                        "classification",
                        &self.classification,
                        &self.classification_list,
                    ))
                }
                fieldset {
                    label for="select-century" {
                        "Century "
                        span class="century-count" { "(" (self.century_list.len()) ")" }
                    }
                    (selector("select-century", "century", &self.century, &self.century_list))
                }
                button { "SEARCH" }
            }
        }
    }
}
