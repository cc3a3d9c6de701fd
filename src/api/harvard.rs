// file: src/api/harvard.rs
// description: Harvard Art Museums REST client implementing the collection api
// reference: https://github.com/harvardartmuseums/api-docs

use crate::api::CollectionApi;
use crate::config::ApiConfig;
use crate::error::{CollectorError, Result};
use crate::models::{FacetOption, QueryCriteria, SearchResultItem};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RecordsResponse<T> {
    #[serde(default = "Vec::new")]
    records: Vec<T>,
}

pub struct HarvardClient {
    client: Client,
    base_url: String,
    api_key: String,
    vocabulary_page_size: usize,
}

impl HarvardClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CollectorError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            vocabulary_page_size: config.vocabulary_page_size,
        })
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    async fn get_records<T>(&self, resource: &str, params: &[(&str, &str)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(resource);

        debug!(resource, ?params, "Requesting collection records");

        let response = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CollectorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let payload: RecordsResponse<T> = serde_json::from_str(&body)?;

        debug!(resource, count = payload.records.len(), "Received collection records");
        Ok(payload.records)
    }

    async fn fetch_vocabulary(&self, resource: &str, sort: &str) -> Result<Vec<FacetOption>> {
        let size = self.vocabulary_page_size.to_string();
        self.get_records(resource, &[("size", size.as_str()), ("sort", sort)])
            .await
    }
}

#[async_trait]
impl CollectionApi for HarvardClient {
    async fn fetch_all_centuries(&self) -> Result<Vec<FacetOption>> {
        self.fetch_vocabulary("century", "temporalorder").await
    }

    async fn fetch_all_classifications(&self) -> Result<Vec<FacetOption>> {
        self.fetch_vocabulary("classification", "name").await
    }

    async fn fetch_query_results(&self, criteria: &QueryCriteria) -> Result<Vec<SearchResultItem>> {
        self.get_records(
            "object",
            &[
                ("classification", criteria.classification.as_str()),
                ("century", criteria.century.as_str()),
                ("keyword", criteria.query_string.as_str()),
            ],
        )
        .await
    }

    async fn fetch_query_results_from_term_and_value(
        &self,
        facet_key: &str,
        value: &str,
    ) -> Result<Vec<SearchResultItem>> {
        self.get_records("object", &[(facet_key, value)]).await
    }
}
