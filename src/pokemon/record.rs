//! Canonical Pokémon record definitions

use serde::Serialize;

/// A type badge: catalog type name plus its display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBadge {
    pub name: String,
    pub color: String,
}

/// A single base stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseStat {
    pub name: String,
    pub value: u32,
}

/// The normalized representation of one catalog entry.
///
/// Built only from a complete raw entry and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonRecord {
    /// Display identifier, `#` followed by the zero-padded catalog id
    pub id: String,
    /// Numeric catalog id
    pub number: u32,
    /// Display name, first letter capitalized
    pub name: String,
    pub front_image_url: Option<String>,
    pub back_image_url: Option<String>,
    pub types: Vec<TypeBadge>,
    /// Meters with one fractional digit
    pub height_meters: String,
    /// Kilograms with one fractional digit
    pub weight_kilograms: String,
    pub base_stats: Vec<BaseStat>,
    pub abilities: Vec<String>,
    /// At most the first five moves
    pub moves: Vec<String>,
}

/// Compact view of a record for list screens
#[derive(Debug, Clone, Serialize)]
pub struct PokemonSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub image: Option<&'a str>,
    pub types: &'a [TypeBadge],
}

impl PokemonRecord {
    pub fn summary(&self) -> PokemonSummary<'_> {
        PokemonSummary {
            id: &self.id,
            name: &self.name,
            image: self.front_image_url.as_deref(),
            types: &self.types,
        }
    }
}
