// file: src/api/scripted.rs
// description: in-memory collection api with scripted replies for tests

use crate::api::CollectionApi;
use crate::error::{CollectorError, Result};
use crate::models::{FacetOption, QueryCriteria, SearchResultItem};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;

pub enum Reply {
    Items(Vec<SearchResultItem>),
    Fail,
    Deferred(oneshot::Receiver<Vec<SearchResultItem>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query(QueryCriteria),
    Term(String, String),
}

#[derive(Default)]
pub struct ScriptedApi {
    centuries: Option<Vec<FacetOption>>,
    classifications: Option<Vec<FacetOption>>,
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_centuries(mut self, options: Vec<FacetOption>) -> Self {
        self.centuries = Some(options);
        self
    }

    pub fn with_classifications(mut self, options: Vec<FacetOption>) -> Self {
        self.classifications = Some(options);
        self
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn next_reply(&self, call: Call) -> Result<Vec<SearchResultItem>> {
        self.calls.lock().unwrap().push(call);
        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            Some(Reply::Items(items)) => Ok(items),
            Some(Reply::Deferred(rx)) => rx
                .await
                .map_err(|_| CollectorError::Request("reply dropped".to_string())),
            Some(Reply::Fail) | None => Err(CollectorError::Status {
                status: 503,
                body: "scripted failure".to_string(),
            }),
        }
    }
}

fn vocabulary(options: &Option<Vec<FacetOption>>) -> Result<Vec<FacetOption>> {
    options
        .clone()
        .ok_or_else(|| CollectorError::Payload("scripted vocabulary failure".to_string()))
}

#[async_trait]
impl CollectionApi for ScriptedApi {
    async fn fetch_all_centuries(&self) -> Result<Vec<FacetOption>> {
        tokio::task::yield_now().await;
        vocabulary(&self.centuries)
    }

    async fn fetch_all_classifications(&self) -> Result<Vec<FacetOption>> {
        vocabulary(&self.classifications)
    }

    async fn fetch_query_results(&self, criteria: &QueryCriteria) -> Result<Vec<SearchResultItem>> {
        self.next_reply(Call::Query(criteria.clone())).await
    }

    async fn fetch_query_results_from_term_and_value(
        &self,
        facet_key: &str,
        value: &str,
    ) -> Result<Vec<SearchResultItem>> {
        self.next_reply(Call::Term(facet_key.to_string(), value.to_string()))
            .await
    }
}

pub fn titled(title: &str) -> SearchResultItem {
    SearchResultItem {
        title: Some(title.to_string()),
        ..Default::default()
    }
}
