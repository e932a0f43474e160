//! Raw catalog entry → PokemonRecord mapping

use super::colors::type_color;
use super::record::{BaseStat, PokemonRecord, TypeBadge};
use crate::catalog::RawPokemon;
use crate::error::LookupError;

/// Number of moves kept on a record
pub const MAX_MOVES: usize = 5;

impl TryFrom<RawPokemon> for PokemonRecord {
    type Error = LookupError;

    fn try_from(raw: RawPokemon) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err(LookupError::MalformedPayload(format!(
                "entry {} has an empty name",
                raw.id
            )));
        }

        Ok(Self {
            id: display_id(raw.id),
            number: raw.id,
            name: capitalize_first(&raw.name),
            front_image_url: raw.sprites.front_default,
            back_image_url: raw.sprites.back_default,
            types: raw
                .types
                .into_iter()
                .map(|slot| TypeBadge {
                    color: type_color(&slot.kind.name).to_string(),
                    name: slot.kind.name,
                })
                .collect(),
            height_meters: tenths(raw.height),
            weight_kilograms: tenths(raw.weight),
            base_stats: raw
                .stats
                .into_iter()
                .map(|s| BaseStat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            abilities: raw.abilities.into_iter().map(|a| a.ability.name).collect(),
            moves: raw
                .moves
                .into_iter()
                .take(MAX_MOVES)
                .map(|m| m.kind.name)
                .collect(),
        })
    }
}

/// `1` → `#001`, `1000` → `#1000`
pub fn display_id(number: u32) -> String {
    format!("#{:03}", number)
}

/// Parse `7`, `007` or `#007` back into a catalog id
pub fn parse_display_id(input: &str) -> Option<u32> {
    let digits = input.trim().trim_start_matches('#');
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Integer tenths rendered with exactly one fractional digit (`69` → `6.9`)
pub fn tenths(raw: u32) -> String {
    format!("{}.{}", raw / 10, raw % 10)
}
