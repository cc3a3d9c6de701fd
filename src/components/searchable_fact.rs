// file: src/components/searchable_fact.rs
// description: clickable facet value that issues a scoped query
// reference: https://docs.rs/maud

use crate::components::dispatch::{QueryDispatcher, QueryOutcome};
use crate::components::event::UiEvent;
use crate::models::FacetKey;
use maud::{Markup, Render, html};

#[derive(Clone)]
pub struct SearchableFact {
    key: FacetKey,
    value: Option<String>,
    dispatcher: QueryDispatcher,
}

impl SearchableFact {
    pub fn new(key: FacetKey, value: Option<&str>, dispatcher: QueryDispatcher) -> Self {
        Self {
            key,
            value: value.map(str::to_string),
            dispatcher,
        }
    }

    pub fn key(&self) -> FacetKey {
        self.key
    }

    /// Text shown on the link; empty when the value is missing.
    pub fn label(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Value sent with the scoped query.
    pub fn query_value(&self) -> String {
        self.key.normalize(self.label())
    }

    pub async fn click(&self, event: &mut UiEvent) -> QueryOutcome {
        event.prevent_default();
        let value = self.query_value();
        self.dispatcher.query_facet(self.key, &value).await
    }
}

impl Render for SearchableFact {
    fn render(&self) -> Markup {
        html! {
            span class="content" {
                a href="#" { (self.label()) }
            }
        }
    }
}
