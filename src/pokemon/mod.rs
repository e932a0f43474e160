//! Pokémon record module
//!
//! The canonical record type, the raw → record normalizer and the type color
//! table.

mod colors;
mod normalize;
mod record;

pub use colors::{type_color, FALLBACK_TYPE_COLOR};
pub use normalize::{capitalize_first, display_id, parse_display_id, tenths, MAX_MOVES};
pub use record::*;
