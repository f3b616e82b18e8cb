// src/state/search.rs

//! Search result state.
//!
//! Holds the displayed result list together with its loading, error and
//! "has searched" flags. A fresh search replaces the list; load-more
//! appends the next page at offset = current length.
//!
//! Every request is tagged with a generation number. Only the completion
//! of the most recently started request is applied; older completions are
//! dropped so that overlapping searches cannot overwrite newer results.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{BookSummary, VolumesResponse};
use crate::services::{BookSource, SearchRequest};

/// A request that has been started but not yet applied.
#[derive(Debug, Clone)]
pub struct PendingFetch {
    generation: u64,
    request: SearchRequest,
}

impl PendingFetch {
    /// The request to send to the book source.
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Observable search state for one result list.
pub struct SearchState<S> {
    source: Arc<S>,
    page_size: u32,
    books: Vec<BookSummary>,
    query: Option<String>,
    is_loading: bool,
    error: Option<String>,
    has_searched: bool,
    last_page_len: usize,
    generation: u64,
}

impl<S: BookSource> SearchState<S> {
    /// Create an empty state fetching pages of `page_size` from `source`.
    pub fn new(source: S, page_size: u32) -> Self {
        Self::with_shared(Arc::new(source), page_size)
    }

    /// Create an empty state over a shared source.
    pub fn with_shared(source: Arc<S>, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            books: Vec::new(),
            query: None,
            is_loading: false,
            error: None,
            has_searched: false,
            last_page_len: 0,
            generation: 0,
        }
    }

    /// Shared handle to the book source, for driving pending fetches.
    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    pub fn books(&self) -> &[BookSummary] {
        &self.books
    }

    /// Query that produced the current list.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message describing the last failed request.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Whether another page is worth requesting: the last page came back full
    /// and the last request did not fail.
    pub fn can_load_more(&self) -> bool {
        !self.is_loading
            && self.error.is_none()
            && self.page_size > 0
            && !self.books.is_empty()
            && self.last_page_len >= self.page_size as usize
    }

    /// Run a fresh search, replacing the current list.
    ///
    /// Empty or whitespace-only queries are ignored.
    pub async fn search(&mut self, query: &str) {
        if let Some(pending) = self.begin_search(query) {
            let result = self.source.search(pending.request()).await;
            self.finish(pending, result);
        }
    }

    /// Fetch the next page and append it to the current list.
    ///
    /// Ignored while a request is in flight or when there is nothing to extend.
    pub async fn load_more(&mut self, query: &str) {
        if let Some(pending) = self.begin_load_more(query) {
            let result = self.source.search(pending.request()).await;
            self.finish(pending, result);
        }
    }

    /// Start a fresh search and return the request to issue.
    pub fn begin_search(&mut self, query: &str) -> Option<PendingFetch> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(self.start(SearchRequest::new(query, 0, self.page_size)))
    }

    /// Start a load-more and return the request to issue.
    pub fn begin_load_more(&mut self, query: &str) -> Option<PendingFetch> {
        let query = query.trim();
        if query.is_empty() || self.is_loading || self.books.is_empty() {
            return None;
        }
        Some(self.start(SearchRequest::new(query, self.books.len(), self.page_size)))
    }

    /// Apply the outcome of a started request.
    ///
    /// Returns `false` when a newer request has been started since, in which
    /// case the outcome is discarded and the state is left untouched.
    pub fn finish(&mut self, pending: PendingFetch, result: Result<VolumesResponse>) -> bool {
        if pending.generation != self.generation {
            log::debug!(
                "Discarding stale response for {:?} (generation {} < {})",
                pending.request.query,
                pending.generation,
                self.generation
            );
            return false;
        }

        self.is_loading = false;
        let PendingFetch { request, .. } = pending;

        match result {
            Ok(response) => {
                let page: Vec<BookSummary> = response
                    .into_items()
                    .into_iter()
                    .map(BookSummary::from)
                    .collect();
                self.last_page_len = page.len();

                if request.is_first_page() {
                    log::info!("Search for {:?} returned {} books", request.query, page.len());
                    self.books = page;
                } else {
                    log::info!(
                        "Loaded {} more books for {:?} (offset {})",
                        page.len(),
                        request.query,
                        request.start_index
                    );
                    self.books.extend(page);
                }
                self.query = Some(request.query);
                self.has_searched = true;
            }
            Err(e) => {
                log::warn!("Search for {:?} failed: {}", request.query, e);
                self.error = Some(e.user_message());
                if request.is_first_page() {
                    self.books.clear();
                    self.last_page_len = 0;
                }
            }
        }
        true
    }

    fn start(&mut self, request: SearchRequest) -> PendingFetch {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        PendingFetch {
            generation: self.generation,
            request,
        }
    }
}
