//! Raw payload shapes returned by the catalog API
//!
//! Only the fields the normalizer reads are declared. Anything else in the
//! document is ignored; a missing or mistyped declared field fails the parse.

use serde::Deserialize;

/// A `{ name, url }` reference as used throughout PokéAPI
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbility {
    pub ability: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMove {
    #[serde(rename = "move")]
    pub kind: NamedRef,
}

/// One catalog entry as served by `/pokemon/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub sprites: RawSprites,
    pub types: Vec<RawTypeSlot>,
    /// Decimeters
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub stats: Vec<RawStat>,
    pub abilities: Vec<RawAbility>,
    pub moves: Vec<RawMove>,
}
