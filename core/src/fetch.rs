//! Async driver for the list, search and detail flows.
//!
//! # Design
//! `Pokedex` pairs a `PokedexClient` with a `Transport`. List aggregation
//! fans out one request per page entry and joins them with `try_join_all`:
//! results are collected by position, so the output follows page order no
//! matter which response lands first, and the first failure fails the whole
//! list. There is no concurrency cap, no retry and no partial result.
//! Each card keeps the name its page entry was listed under.

use futures_util::future::try_join_all;
use tracing::{debug, warn};

use crate::client::PokedexClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::screen::ListQuery;
use crate::search::normalize_query;
use crate::types::{DetailRecord, SummaryRecord};

pub struct Pokedex<T> {
    client: PokedexClient,
    transport: T,
}

impl<T: Transport> Pokedex<T> {
    pub fn new(client: PokedexClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &PokedexClient {
        &self.client
    }

    /// First `page_size` entries of the index, resolved into summaries.
    pub async fn fetch_summaries(&self, page_size: u32) -> Result<Vec<SummaryRecord>, ApiError> {
        let result = self.aggregate(page_size).await;
        if let Err(e) = &result {
            warn!(page_size, error = %e, "list aggregation failed");
        }
        result
    }

    async fn aggregate(&self, page_size: u32) -> Result<Vec<SummaryRecord>, ApiError> {
        let request = self.client.build_list_page(page_size)?;
        debug!(url = %request.url, "fetching list page");
        let entries = self
            .client
            .parse_list_page(self.transport.execute(request).await?)?;

        debug!(entries = entries.len(), "resolving page entries");
        let lookups = entries.iter().map(|entry| async move {
            let request = self.client.build_get_by_reference(&entry.url);
            let response = self.transport.execute(request).await?;
            let mut summary = self.client.parse_summary(response)?;
            if !entry.name.is_empty() {
                summary.name.clone_from(&entry.name);
            }
            Ok::<_, ApiError>(summary)
        });
        try_join_all(lookups).await
    }

    /// Exact-name lookup. Blank input falls back to `fetch_summaries`.
    pub async fn search_summary(
        &self,
        term: &str,
        fallback_page_size: u32,
    ) -> Result<Vec<SummaryRecord>, ApiError> {
        match normalize_query(term) {
            Some(key) => self.lookup(&key).await,
            None => self.fetch_summaries(fallback_page_size).await,
        }
    }

    async fn lookup(&self, key: &str) -> Result<Vec<SummaryRecord>, ApiError> {
        debug!(key, "searching");
        let request = match self.client.build_get_pokemon(key) {
            Ok(request) => request,
            Err(ApiError::NotFound) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let result = match self.transport.execute(request).await {
            Ok(response) => self.client.parse_search(response),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            warn!(key, error = %e, "search failed");
        }
        result
    }

    /// Full record for a canonical name taken from a summary.
    pub async fn fetch_detail(&self, name: &str) -> Result<DetailRecord, ApiError> {
        let request = self.client.build_get_pokemon(name)?;
        debug!(url = %request.url, "fetching detail");
        let result = match self.transport.execute(request).await {
            Ok(response) => self.client.parse_detail(response),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            warn!(name, error = %e, "detail fetch failed");
        }
        result
    }

    /// Run a query produced by `ListScreen`.
    pub async fn run_list_query(&self, query: &ListQuery) -> Result<Vec<SummaryRecord>, ApiError> {
        match query {
            ListQuery::Page(page_size) => self.fetch_summaries(*page_size).await,
            ListQuery::Search(key) => self.lookup(key).await,
        }
    }
}
