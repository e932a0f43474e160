//! Static type → badge color table

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Color used for any type name missing from the table
pub const FALLBACK_TYPE_COLOR: &str = "#A8A77A";

static TYPE_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("normal", "#A8A77A"),
        ("fire", "#EE8130"),
        ("water", "#6390F0"),
        ("electric", "#F7D02C"),
        ("grass", "#7AC74C"),
        ("ice", "#96D9D6"),
        ("fighting", "#C22E28"),
        ("poison", "#A33EA1"),
        ("ground", "#E2BF65"),
        ("flying", "#A98FF3"),
        ("psychic", "#F95587"),
        ("bug", "#A6B91A"),
        ("rock", "#B6A136"),
        ("ghost", "#735797"),
        ("dragon", "#6F35FC"),
        ("dark", "#705746"),
        ("steel", "#B7B7CE"),
        ("fairy", "#D685AD"),
    ])
});

/// Resolve the badge color for a type name
pub fn type_color(name: &str) -> &'static str {
    TYPE_COLORS
        .get(name)
        .copied()
        .unwrap_or(FALLBACK_TYPE_COLOR)
}
