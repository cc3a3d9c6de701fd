// file: src/components/dispatch.rs
// description: shared loading/result discipline for every query trigger
// reference: idle -> loading -> idle, failures logged and swallowed

use crate::api::CollectionApi;
use crate::config::ResponseOrdering;
use crate::models::{FacetKey, QueryCriteria, SearchResultItem};
use crate::state::StateOwner;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info};

/// How a single dispatched query settled. Never surfaced to the state owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    Applied { count: usize },
    Failed,
    Discarded,
}

#[derive(Debug)]
enum Request<'a> {
    Criteria(&'a QueryCriteria),
    Facet { key: FacetKey, value: &'a str },
}

/// Handle shared by every panel: the collection api, the state owner's
/// callbacks, and the ordering policy for overlapping responses.
#[derive(Clone)]
pub struct QueryDispatcher {
    api: Arc<dyn CollectionApi>,
    owner: Arc<dyn StateOwner>,
    ordering: ResponseOrdering,
    issued: Arc<AtomicU64>,
}

impl QueryDispatcher {
    pub fn new(api: Arc<dyn CollectionApi>, owner: Arc<dyn StateOwner>) -> Self {
        Self {
            api,
            owner,
            ordering: ResponseOrdering::default(),
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn api(&self) -> &dyn CollectionApi {
        self.api.as_ref()
    }

    pub async fn query(&self, criteria: &QueryCriteria) -> QueryOutcome {
        self.dispatch(Request::Criteria(criteria)).await
    }

    pub async fn query_facet(&self, key: FacetKey, value: &str) -> QueryOutcome {
        self.dispatch(Request::Facet { key, value }).await
    }

    async fn dispatch(&self, request: Request<'_>) -> QueryOutcome {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::engage(self.owner.as_ref());

        let result = match &request {
            Request::Criteria(criteria) => self.api.fetch_query_results(criteria).await,
            Request::Facet { key, value } => {
                self.api
                    .fetch_query_results_from_term_and_value(key.as_str(), value)
                    .await
            }
        };

        match result {
            Ok(items) => self.apply(ticket, items),
            Err(e) => {
                error!(
                    error = %e,
                    fetch_failure = e.is_fetch_failure(),
                    ?request,
                    "Collection query failed"
                );
                QueryOutcome::Failed
            }
        }
    }

    fn apply(&self, ticket: u64, items: Vec<SearchResultItem>) -> QueryOutcome {
        if self.ordering == ResponseOrdering::LatestIssued {
            let latest = self.issued.load(Ordering::SeqCst);
            if ticket < latest {
                debug!(ticket, latest, "Discarding stale query response");
                return QueryOutcome::Discarded;
            }
        }

        let count = items.len();
        self.owner.set_search_results(items);
        info!(ticket, count, "Search results updated");
        QueryOutcome::Applied { count }
    }
}

/// Raises the loading flag on creation and clears it on drop, so the clear
/// runs on success, failure, panic, or cancellation.
struct LoadingGuard<'a> {
    owner: &'a dyn StateOwner,
}

impl<'a> LoadingGuard<'a> {
    fn engage(owner: &'a dyn StateOwner) -> Self {
        owner.set_is_loading(true);
        Self { owner }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.owner.set_is_loading(false);
    }
}
