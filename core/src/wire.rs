//! PokeAPI response DTOs.
//!
//! # Design
//! These mirror the subset of the PokeAPI schema the app reads, defined
//! independently from the mock-server crate; integration tests catch drift.
//! Only a resource's `name` and a page's `results` are required. Everything
//! else is optional or defaulted, and explicit `null`s are folded into the
//! default, so a record with missing sprites or stats still projects into a
//! displayable record instead of failing the whole response.

use serde::{Deserialize, Deserializer};

/// `{ name, url }` pair used by list pages and nested references.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// One page of `GET /pokemon?limit=N`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Full record returned by `GET /pokemon/{name}` and by a page entry's `url`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResource {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sprites: Sprites,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<TypeSlot>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type", default)]
    pub kind: Option<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    #[serde(default)]
    pub base_stat: i64,
    #[serde(default)]
    pub stat: Option<NamedResource>,
}

impl PokemonResource {
    /// Type labels in source order, skipping slots without a type.
    pub fn type_labels(&self) -> Vec<String> {
        self.types
            .iter()
            .filter_map(|slot| slot.kind.as_ref())
            .map(|kind| kind.name.clone())
            .collect()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
