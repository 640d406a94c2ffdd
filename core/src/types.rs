//! Display records handed to the presentation layer.
//!
//! # Design
//! Records are projections of `wire::PokemonResource` and are immutable once
//! built. Absent sprites become empty strings, absent types or stats become
//! empty lists, and stat values below zero clamp to zero, so projection
//! itself never fails.

use serde::{Deserialize, Serialize};

use crate::colors;
use crate::wire::{PokemonResource, StatSlot};

/// Empty-state text shown when a list has no records.
pub const EMPTY_LIST_TEXT: &str = "No Pokémon found.";

/// Text shown in place of a detail record that failed to load.
pub const DETAIL_ERROR_TEXT: &str = "Pokémon not found";

/// A list-screen card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRecord {
    pub name: String,
    pub image: String,
    pub image_back: String,
    pub types: Vec<String>,
}

/// A single base stat on the detail screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base_value: u32,
}

/// The detail-screen record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailRecord {
    pub name: String,
    pub image: String,
    pub image_back: String,
    pub types: Vec<String>,
    pub stats: Vec<Stat>,
}

/// A type label paired with the color of its badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBadge {
    pub label: String,
    pub color: &'static str,
}

impl From<PokemonResource> for SummaryRecord {
    fn from(resource: PokemonResource) -> Self {
        let types = resource.type_labels();
        SummaryRecord {
            name: resource.name,
            image: resource.sprites.front_default.unwrap_or_default(),
            image_back: resource.sprites.back_default.unwrap_or_default(),
            types,
        }
    }
}

impl From<PokemonResource> for DetailRecord {
    fn from(resource: PokemonResource) -> Self {
        let types = resource.type_labels();
        let stats = resource.stats.iter().filter_map(project_stat).collect();
        DetailRecord {
            name: resource.name,
            image: resource.sprites.front_default.unwrap_or_default(),
            image_back: resource.sprites.back_default.unwrap_or_default(),
            types,
            stats,
        }
    }
}

fn project_stat(slot: &StatSlot) -> Option<Stat> {
    let stat = slot.stat.as_ref()?;
    Some(Stat {
        name: stat.name.clone(),
        base_value: u32::try_from(slot.base_stat.max(0)).unwrap_or(u32::MAX),
    })
}

impl SummaryRecord {
    /// Name with the first letter capitalised, as shown on list cards.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Label of the primary type, if the record has any.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    pub fn theme_color(&self) -> &'static str {
        colors::primary_color(&self.types)
    }

    /// Card background: the theme color at reduced opacity.
    pub fn background(&self) -> String {
        colors::tint(self.theme_color())
    }
}

impl DetailRecord {
    /// Upper-cased name used as the screen title.
    pub fn title(&self) -> String {
        self.name.to_uppercase()
    }

    pub fn theme_color(&self) -> &'static str {
        colors::primary_color(&self.types)
    }

    pub fn background(&self) -> String {
        colors::tint(self.theme_color())
    }

    /// One badge per type, in type order. Empty when the record has no types.
    pub fn badges(&self) -> Vec<TypeBadge> {
        self.types
            .iter()
            .map(|label| TypeBadge {
                label: label.clone(),
                color: colors::type_color(label),
            })
            .collect()
    }
}

impl Stat {
    /// Upper-cased stat name as rendered in the stats table.
    pub fn label(&self) -> String {
        self.name.to_uppercase()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
