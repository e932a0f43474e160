//! Catalog source module
//!
//! Defines the CatalogSource trait, the raw payload models and the PokéAPI
//! implementation.

mod models;
mod pokeapi;
mod traits;

pub use models::*;
pub use pokeapi::PokeApi;
pub use traits::*;
