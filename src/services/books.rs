// src/services/books.rs

//! Book search service.
//!
//! `BookSource` is the seam between search state and the network; the
//! production implementation talks to the volumes endpoint over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, VolumesResponse};
use crate::utils::http::create_async_client;

/// One page request against the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query, already trimmed
    pub query: String,
    /// Zero-based offset of the first result
    pub start_index: usize,
    /// Page size
    pub max_results: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, start_index: usize, max_results: u32) -> Self {
        Self {
            query: query.into(),
            start_index,
            max_results,
        }
    }

    /// Whether this request starts a fresh result list.
    pub fn is_first_page(&self) -> bool {
        self.start_index == 0
    }

    /// Build the full request URL with encoded query parameters.
    pub fn to_url(&self, api: &ApiConfig) -> Result<Url> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", self.query.clone()),
            ("startIndex", self.start_index.to_string()),
            ("maxResults", self.max_results.to_string()),
            ("printType", api.print_type.clone()),
            ("projection", api.projection.clone()),
        ];
        if let Some(key) = &api.api_key {
            params.push(("key", key.clone()));
        }
        Ok(Url::parse_with_params(&api.base_url, &params)?)
    }
}

/// Source of search result pages.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Fetch one page of results.
    ///
    /// Any transport failure or non-success status is an error.
    async fn search(&self, request: &SearchRequest) -> Result<VolumesResponse>;
}

/// Client for the public volumes search endpoint.
pub struct GoogleBooksClient {
    api: ApiConfig,
    client: Client,
}

impl GoogleBooksClient {
    /// Create a client with its own configured HTTP client.
    pub fn new(api: ApiConfig) -> Result<Self> {
        let client = create_async_client(&api)?;
        Ok(Self { api, client })
    }

    /// Create a client that reuses an existing HTTP client.
    pub fn with_client(api: ApiConfig, client: Client) -> Self {
        Self { api, client }
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

#[async_trait]
impl BookSource for GoogleBooksClient {
    async fn search(&self, request: &SearchRequest) -> Result<VolumesResponse> {
        let url = request.to_url(&self.api)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Search for {:?} failed with status {}", request.query, status);
            return Err(AppError::SearchStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let volumes: VolumesResponse = serde_json::from_str(&body)?;
        log::debug!(
            "Search for {:?} at {} returned {} of {} items",
            request.query,
            request.start_index,
            volumes.items.as_ref().map_or(0, Vec::len),
            volumes.total_items
        );
        Ok(volumes)
    }
}
