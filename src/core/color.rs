//! Color utilities
//!
//! Type color table and hex/RGBA conversions for renderers.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::constants::FALLBACK_TYPE_COLOR;

/// Display color of each known creature type
///
/// Built once and only ever read afterwards.
pub static TYPE_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("normal", FALLBACK_TYPE_COLOR),
        ("fire", "#F08030"),
        ("water", "#6890F0"),
        ("electric", "#F8D030"),
        ("grass", "#78C850"),
        ("ice", "#98D8D8"),
        ("fighting", "#C03028"),
        ("poison", "#A040A0"),
        ("ground", "#E0C068"),
        ("flying", "#A890F0"),
        ("psychic", "#F85888"),
        ("bug", "#A8B820"),
        ("rock", "#B8A038"),
        ("ghost", "#705898"),
        ("dragon", "#7038F8"),
        ("dark", "#705848"),
        ("steel", "#B8B8D0"),
        ("fairy", "#EE99AC"),
    ])
});

/// Look up the hex color of a type name
///
/// Unknown names get the "normal" color.
///
/// # Examples
///
/// ```
/// use pokedex_client::core::color::color_for_type;
///
/// assert_eq!(color_for_type("fire"), "#F08030");
/// assert_eq!(color_for_type("shadow"), "#A8A878");
/// ```
pub fn color_for_type(type_name: &str) -> &'static str {
    TYPE_COLORS
        .get(type_name)
        .copied()
        .unwrap_or(FALLBACK_TYPE_COLOR)
}

/// Parse hex color "#RRGGBB" to RGBA floats
///
/// Returns RGBA in the range [0.0, 1.0].
/// Falls back to white if the hex string is invalid.
///
/// # Examples
///
/// ```
/// use pokedex_client::core::color::parse_hex_color;
///
/// let red = parse_hex_color("#FF0000", 1.0);
/// assert_eq!(red, [1.0, 0.0, 0.0, 1.0]);
///
/// let semi_transparent_green = parse_hex_color("#00FF00", 0.5);
/// assert_eq!(semi_transparent_green, [0.0, 1.0, 0.0, 0.5]);
/// ```
pub fn parse_hex_color(hex: &str, alpha: f32) -> [f32; 4] {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return [1.0, 1.0, 1.0, alpha]; // Fallback to white
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(255)
    };
    let r = channel(0..2);
    let g = channel(2..4);
    let b = channel(4..6);
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha]
}

/// Convert RGBA [f32; 4] back to hex "#RRGGBB" (ignoring alpha)
pub fn to_hex_color(rgba: [f32; 4]) -> String {
    let r = (rgba[0] * 255.0).round() as u8;
    let g = (rgba[1] * 255.0).round() as u8;
    let b = (rgba[2] * 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
