// file: src/api/mod.rs
// description: consumed collection API capabilities
// reference: https://docs.rs/async-trait

pub mod harvard;
#[cfg(test)]
pub(crate) mod scripted;

use crate::error::Result;
use crate::models::{FacetOption, QueryCriteria, SearchResultItem};
use async_trait::async_trait;

pub use harvard::HarvardClient;

/// Remote collection capabilities the panels depend on, treated as opaque.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    async fn fetch_all_centuries(&self) -> Result<Vec<FacetOption>>;

    async fn fetch_all_classifications(&self) -> Result<Vec<FacetOption>>;

    async fn fetch_query_results(&self, criteria: &QueryCriteria) -> Result<Vec<SearchResultItem>>;

    async fn fetch_query_results_from_term_and_value(
        &self,
        facet_key: &str,
        value: &str,
    ) -> Result<Vec<SearchResultItem>>;
}
