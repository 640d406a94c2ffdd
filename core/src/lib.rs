//! API client core for the Pokédex app.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! PokeAPI without touching the network (host-does-IO pattern). The mobile
//! shell executes the round-trips through the C ABI in `pokedex-ffi`; Rust
//! callers can instead plug a `Transport` into `Pokedex` and let the core run
//! the list aggregation, search and detail flows itself.
//!
//! # Design
//! - `PokedexClient` is stateless; it holds only `base_url`.
//! - Each outbound operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Response DTOs (`wire`) tolerate missing fields; display records
//!   (`types`) never carry `Option`s.
//! - `screen` keeps per-screen load state and drops stale results.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod colors;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod screen;
pub mod search;
pub mod types;
pub mod wire;

pub use client::PokedexClient;
pub use config::{ClientConfig, PAGE_SIZE_OPTIONS};
pub use error::ApiError;
pub use fetch::Pokedex;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use screen::{DetailScreen, ListQuery, ListScreen, LoadState, PendingList, Screen, Ticket};
pub use search::normalize_query;
pub use types::{DetailRecord, Stat, SummaryRecord, TypeBadge};
pub use wire::NamedResource;
