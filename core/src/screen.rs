//! Per-screen load state.
//!
//! # Design
//! Every trigger (mount, page-size change, search submission) calls
//! `begin`, which moves the screen to `Loading` and hands out a `Ticket`
//! stamped with a fresh generation. The host runs the fetch and reports the
//! outcome with `finish`. Only the ticket from the latest `begin` may write
//! the result; an older request that resolves late is dropped, so a slow
//! stale fetch can never overwrite a newer one. In-flight requests are not
//! cancelled.

use tracing::{debug, warn};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::ApiError;
use crate::search::normalize_query;
use crate::types::{DetailRecord, SummaryRecord, DETAIL_ERROR_TEXT, EMPTY_LIST_TEXT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Identifies one load cycle of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Screen<T> {
    state: LoadState<T>,
    generation: u64,
}

impl<T> Default for Screen<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
        }
    }
}

impl<T> Screen<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = LoadState::Loading;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply the outcome of the cycle identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer cycle has
    /// started since `ticket` was issued.
    pub fn finish(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping stale result"
            );
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => {
                warn!(error = %e, "load failed");
                LoadState::Failed(e.to_string())
            }
        };
        true
    }
}

/// What the list screen needs fetched for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    Page(u32),
    Search(String),
}

/// A started list cycle: run `query`, then report back with `ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingList {
    pub ticket: Ticket,
    pub query: ListQuery,
}

/// State of the browse/search screen.
#[derive(Debug)]
pub struct ListScreen {
    page_size: u32,
    screen: Screen<Vec<SummaryRecord>>,
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListScreen {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            screen: Screen::new(),
        }
    }

    /// Last page size the user picked.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Start loading a page. A zero page size keeps the previous one.
    pub fn request_list(&mut self, page_size: u32) -> PendingList {
        if page_size > 0 {
            self.page_size = page_size;
        }
        PendingList {
            ticket: self.screen.begin(),
            query: ListQuery::Page(self.page_size),
        }
    }

    /// Start a search. Blank input reloads the list at the last page size.
    pub fn request_search(&mut self, term: &str) -> PendingList {
        let query = match normalize_query(term) {
            Some(key) => ListQuery::Search(key),
            None => ListQuery::Page(self.page_size),
        };
        PendingList {
            ticket: self.screen.begin(),
            query,
        }
    }

    pub fn finish(&mut self, ticket: Ticket, result: Result<Vec<SummaryRecord>, ApiError>) -> bool {
        self.screen.finish(ticket, result)
    }

    pub fn state(&self) -> &LoadState<Vec<SummaryRecord>> {
        self.screen.state()
    }

    pub fn is_loading(&self) -> bool {
        self.screen.is_loading()
    }

    /// Records to render. A failed cycle clears the list.
    pub fn items(&self) -> &[SummaryRecord] {
        match self.screen.state() {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Text for the empty state, once a cycle has finished with nothing to show.
    pub fn empty_text(&self) -> Option<&'static str> {
        match self.screen.state() {
            LoadState::Idle | LoadState::Loading => None,
            _ if self.items().is_empty() => Some(EMPTY_LIST_TEXT),
            _ => None,
        }
    }
}

/// State of the detail screen for one creature.
#[derive(Debug, Default)]
pub struct DetailScreen {
    name: Option<String>,
    screen: Screen<DetailRecord>,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `name`; the host then calls `Pokedex::fetch_detail`.
    pub fn request(&mut self, name: &str) -> Ticket {
        self.name = Some(name.to_string());
        self.screen.begin()
    }

    pub fn finish(&mut self, ticket: Ticket, result: Result<DetailRecord, ApiError>) -> bool {
        self.screen.finish(ticket, result)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn state(&self) -> &LoadState<DetailRecord> {
        self.screen.state()
    }

    pub fn is_loading(&self) -> bool {
        self.screen.is_loading()
    }

    pub fn record(&self) -> Option<&DetailRecord> {
        match self.screen.state() {
            LoadState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Text to show instead of the record once a cycle has failed.
    pub fn error_text(&self) -> Option<&'static str> {
        match self.screen.state() {
            LoadState::Failed(_) => Some(DETAIL_ERROR_TEXT),
            _ => None,
        }
    }
}
