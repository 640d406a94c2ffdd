//! Stateless HTTP request builder and response parser for the PokeAPI.
//!
//! # Design
//! `PokedexClient` holds only a `base_url` and carries no mutable state
//! between calls. Each outbound operation is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::search::path_segment;
use crate::types::{DetailRecord, SummaryRecord};
use crate::wire::{NamedResource, PokemonResource, ResourcePage};

/// Synchronous, stateless client for the PokeAPI.
#[derive(Debug, Clone)]
pub struct PokedexClient {
    base_url: String,
}

impl PokedexClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /pokemon?limit={limit}`: the first `limit` entries of the index.
    pub fn build_list_page(&self, limit: u32) -> Result<HttpRequest, ApiError> {
        if limit == 0 {
            return Err(ApiError::InvalidPageSize);
        }
        Ok(HttpRequest::get(format!(
            "{}/pokemon?limit={limit}",
            self.base_url
        )))
    }

    /// `GET /pokemon/{name}` for an already-normalized name or numeric id.
    ///
    /// A name with no path of its own (empty, `.` or `..`) cannot exist and
    /// yields `ApiError::NotFound` without a request.
    pub fn build_get_pokemon(&self, name: &str) -> Result<HttpRequest, ApiError> {
        let segment = path_segment(name).ok_or(ApiError::NotFound)?;
        Ok(HttpRequest::get(format!("{}/pokemon/{segment}", self.base_url)))
    }

    /// `GET {url}` for a reference taken from a list page. The URL is used
    /// verbatim; the source decides where its records live.
    pub fn build_get_by_reference(&self, url: &str) -> HttpRequest {
        HttpRequest::get(url.to_string())
    }

    /// Entries of a list page, in source order.
    pub fn parse_list_page(&self, response: HttpResponse) -> Result<Vec<NamedResource>, ApiError> {
        check_status(&response, 200)?;
        let page: ResourcePage = decode(&response)?;
        Ok(page.results)
    }

    /// A full record projected for the list screen.
    pub fn parse_summary(&self, response: HttpResponse) -> Result<SummaryRecord, ApiError> {
        check_status(&response, 200)?;
        let resource: PokemonResource = decode(&response)?;
        Ok(resource.into())
    }

    /// Result of a name search: 404 is an empty result, not an error.
    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<SummaryRecord>, ApiError> {
        match self.parse_summary(response) {
            Ok(summary) => Ok(vec![summary]),
            Err(ApiError::NotFound) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// A full record projected for the detail screen.
    pub fn parse_detail(&self, response: HttpResponse) -> Result<DetailRecord, ApiError> {
        check_status(&response, 200)?;
        let resource: PokemonResource = decode(&response)?;
        Ok(resource.into())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn client() -> PokedexClient {
        PokedexClient::new("https://pokeapi.co/api/v2")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "sprites": {"front_default": "https://img/25.png", "back_default": "https://img/back/25.png"},
        "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
        "stats": [
            {"base_stat": 35, "stat": {"name": "hp"}},
            {"base_stat": 55, "stat": {"name": "attack"}}
        ]
    }"#;

    #[test]
    fn build_list_page_produces_correct_request() {
        let req = client().build_list_page(20).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://pokeapi.co/api/v2/pokemon?limit=20");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_list_page_rejects_zero() {
        let err = client().build_list_page(0).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPageSize));
    }

    #[test]
    fn build_get_pokemon_produces_correct_request() {
        let req = client().build_get_pokemon("ditto").unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://pokeapi.co/api/v2/pokemon/ditto");
    }

    #[test]
    fn build_get_pokemon_escapes_the_name() {
        let req = client().build_get_pokemon("../type").unwrap();
        assert_eq!(req.url, "https://pokeapi.co/api/v2/pokemon/..%2Ftype");
    }

    #[test]
    fn build_get_pokemon_rejects_dot_segments() {
        for name in ["", ".", ".."] {
            let err = client().build_get_pokemon(name).unwrap_err();
            assert!(matches!(err, ApiError::NotFound), "{name:?}");
        }
    }

    #[test]
    fn build_get_by_reference_uses_url_verbatim() {
        let req = client().build_get_by_reference("https://pokeapi.co/api/v2/pokemon/1/");
        assert_eq!(req.url, "https://pokeapi.co/api/v2/pokemon/1/");
        assert_eq!(req.method, HttpMethod::Get);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PokedexClient::new("https://pokeapi.co/api/v2/");
        let req = client.build_list_page(10).unwrap();
        assert_eq!(req.url, "https://pokeapi.co/api/v2/pokemon?limit=10");
    }

    #[test]
    fn parse_list_page_preserves_order() {
        let body = r#"{"count":1302,"next":"n","previous":null,"results":[
            {"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"},
            {"name":"ivysaur","url":"https://pokeapi.co/api/v2/pokemon/2/"}]}"#;
        let entries = client().parse_list_page(response(200, body)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "bulbasaur");
        assert_eq!(entries[1].url, "https://pokeapi.co/api/v2/pokemon/2/");
    }

    #[test]
    fn parse_list_page_bad_json() {
        let err = client().parse_list_page(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_summary_success() {
        let summary = client().parse_summary(response(200, PIKACHU)).unwrap();
        assert_eq!(summary.name, "pikachu");
        assert_eq!(summary.image, "https://img/25.png");
        assert_eq!(summary.types, vec!["electric"]);
    }

    #[test]
    fn parse_summary_server_error() {
        let err = client().parse_summary(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_search_found() {
        let found = client().parse_search(response(200, PIKACHU)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "pikachu");
    }

    #[test]
    fn parse_search_not_found_is_empty() {
        let found = client().parse_search(response(404, "Not Found")).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn parse_search_other_errors_surface() {
        let err = client().parse_search(response(502, "bad gateway")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 502, .. }));
    }

    #[test]
    fn parse_detail_success() {
        let detail = client().parse_detail(response(200, PIKACHU)).unwrap();
        assert_eq!(detail.name, "pikachu");
        assert_eq!(detail.stats.len(), 2);
        assert_eq!(detail.stats[1].name, "attack");
        assert_eq!(detail.stats[1].base_value, 55);
    }

    #[test]
    fn parse_detail_not_found() {
        let err = client().parse_detail(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }
}
