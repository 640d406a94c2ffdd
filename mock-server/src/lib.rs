//! Local stand-in for the read-only PokeAPI.
//!
//! Serves `GET /api/v2/pokemon?limit=&offset=` and
//! `GET /api/v2/pokemon/{id or name}` over a fixed seed. Species listed in
//! `Dex::failing` answer 500, so clients can be tested against a source
//! where one record is broken.

pub mod data;

use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use data::{Species, SPECIES, STAT_NAMES};

const SPRITE_ROOT: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
const DEFAULT_LIMIT: usize = 20;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedRef {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedRef,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Server state: which species misbehave.
#[derive(Clone, Debug, Default)]
pub struct Dex {
    pub failing: HashSet<String>,
}

impl Dex {
    pub fn with_failing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failing: names.into_iter().map(Into::into).collect(),
        }
    }

    fn find(&self, key: &str) -> Option<&'static Species> {
        match key.parse::<u32>() {
            Ok(id) => SPECIES.iter().find(|s| s.id == id),
            Err(_) => SPECIES.iter().find(|s| s.name == key),
        }
    }
}

pub fn app() -> Router {
    app_with(Dex::default())
}

pub fn app_with(dex: Dex) -> Router {
    Router::new()
        .route("/api/v2/pokemon", get(list_pokemon))
        .route("/api/v2/pokemon/", get(list_pokemon))
        .route("/api/v2/pokemon/{key}", get(get_pokemon))
        .route("/api/v2/pokemon/{key}/", get(get_pokemon))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(dex))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Dex::default()).await
}

pub async fn run_with(listener: TcpListener, dex: Dex) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, failing = dex.failing.len(), "mock PokeAPI listening");
    }
    axum::serve(listener, app_with(dex)).await
}

/// API root as seen by the caller, so page references point back at us.
fn api_root(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}/api/v2")
}

async fn list_pokemon(
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Json<Page> {
    let root = api_root(&headers);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = params.offset.unwrap_or(0);
    let count = SPECIES.len();

    let results = SPECIES
        .iter()
        .skip(offset)
        .take(limit)
        .map(|s| NamedRef {
            name: s.name.to_string(),
            url: format!("{root}/pokemon/{}/", s.id),
        })
        .collect();

    let end = offset.saturating_add(limit);
    let next = (end < count).then(|| format!("{root}/pokemon?offset={end}&limit={limit}"));
    let previous = (offset > 0).then(|| {
        format!(
            "{root}/pokemon?offset={}&limit={limit}",
            offset.saturating_sub(limit)
        )
    });

    Json(Page {
        count,
        next,
        previous,
        results,
    })
}

async fn get_pokemon(
    State(dex): State<Arc<Dex>>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Result<Json<Pokemon>, (StatusCode, &'static str)> {
    let species = dex
        .find(&key)
        .ok_or((StatusCode::NOT_FOUND, "Not Found"))?;
    if dex.failing.contains(species.name) {
        debug!(name = species.name, "injected failure");
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"));
    }
    Ok(Json(render(species, &api_root(&headers))))
}

fn render(species: &Species, root: &str) -> Pokemon {
    let types = species
        .types
        .iter()
        .zip(1..)
        .map(|(name, slot)| TypeSlot {
            slot,
            kind: NamedRef {
                name: name.to_string(),
                url: format!("{root}/type/{name}/"),
            },
        })
        .collect();
    let stats = STAT_NAMES
        .iter()
        .zip(species.stats)
        .zip(1..)
        .map(|((name, base_stat), idx)| StatSlot {
            base_stat,
            effort: 0,
            stat: NamedRef {
                name: name.to_string(),
                url: format!("{root}/stat/{idx}/"),
            },
        })
        .collect();
    Pokemon {
        id: species.id,
        name: species.name.to_string(),
        sprites: Sprites {
            front_default: Some(format!("{SPRITE_ROOT}/{}.png", species.id)),
            back_default: Some(format!("{SPRITE_ROOT}/back/{}.png", species.id)),
        },
        types,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_enough_entries_for_largest_page() {
        assert!(SPECIES.len() >= 50);
    }

    #[test]
    fn seed_names_are_unique_lowercase() {
        let names: HashSet<&str> = SPECIES.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SPECIES.len());
        for s in SPECIES {
            assert_eq!(s.name, s.name.to_lowercase());
            assert!(!s.name.contains(char::is_whitespace));
        }
    }

    #[test]
    fn find_by_id_or_name() {
        let dex = Dex::default();
        assert_eq!(dex.find("25").map(|s| s.name), Some("pikachu"));
        assert_eq!(dex.find("ditto").map(|s| s.id), Some(132));
        assert!(dex.find("nonexistent123").is_none());
        assert!(dex.find("999").is_none());
    }

    #[test]
    fn render_orders_stats_and_types() {
        let bulbasaur = &SPECIES[0];
        let rendered = render(bulbasaur, "http://localhost/api/v2");
        let stat_names: Vec<&str> = rendered.stats.iter().map(|s| s.stat.name.as_str()).collect();
        assert_eq!(stat_names, STAT_NAMES.to_vec());
        assert_eq!(rendered.types[0].slot, 1);
        assert_eq!(rendered.types[1].kind.name, "poison");
        assert_eq!(
            rendered.sprites.front_default.as_deref(),
            Some("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png")
        );
    }

    #[test]
    fn pokemon_serializes_type_key() {
        let rendered = render(&SPECIES[24], "http://localhost/api/v2");
        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(json["types"][0]["type"]["name"], "electric");
        assert_eq!(json["stats"][0]["base_stat"], 35);
    }

    #[test]
    fn with_failing_collects_names() {
        let dex = Dex::with_failing(["pikachu", "ditto"]);
        assert!(dex.failing.contains("ditto"));
        assert_eq!(dex.failing.len(), 2);
    }
}
