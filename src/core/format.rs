//! Formatting utilities for catalog data display.
//!
//! Every function here is total: any value of the input type produces
//! a display string, nothing is validated.

use std::fmt::Display;

use super::constants::{
    ARTWORK_URL_PREFIX, DEFAULT_ID_WIDTH, HIDDEN_ABILITY_SUFFIX, MAX_BASE_STAT, MISSING_VALUE_TEXT,
};

/// Width of a stat bar as a percentage of the 255 maximum.
///
/// Not clamped: values above 255 give more than 100.
pub fn stat_bar_width_percent(base_value: u32) -> f64 {
    base_value as f64 / MAX_BASE_STAT as f64 * 100.0
}

/// Format decimetres as metres with one decimal, e.g. `7` -> `0.7m`.
pub fn format_height(decimetres: u32) -> String {
    format!("{}.{}m", decimetres / 10, decimetres % 10)
}

/// Format hectograms as kilograms with one decimal, e.g. `690` -> `69.0kg`.
pub fn format_weight(hectograms: u32) -> String {
    format!("{}.{}kg", hectograms / 10, hectograms % 10)
}

/// Base experience as a number, `-` when upstream has none.
pub fn format_base_experience(base_experience: Option<u32>) -> String {
    match base_experience {
        Some(xp) => xp.to_string(),
        None => MISSING_VALUE_TEXT.to_string(),
    }
}

/// Uppercase the first character, leave the rest unchanged.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `special-attack` -> `SPECIAL ATTACK`
///
/// Every hyphen becomes a space, not only the first one.
pub fn humanize_stat_name(name: &str) -> String {
    name.replace('-', " ").to_uppercase()
}

/// `solar-power` -> `solar power`, with a suffix for hidden abilities.
///
/// Like [`humanize_stat_name`], replaces every hyphen.
pub fn humanize_ability_name(name: &str, is_hidden: bool) -> String {
    let label = name.replace('-', " ");
    if is_hidden {
        format!("{}{}", label, HIDDEN_ABILITY_SUFFIX)
    } else {
        label
    }
}

/// Zero-pad an id to three digits. Longer ids are left as is.
pub fn pad_id(id: u32) -> String {
    pad_id_to(id, DEFAULT_ID_WIDTH)
}

/// Zero-pad an id to `width` digits, never truncating.
pub fn pad_id_to(id: u32, width: usize) -> String {
    format!("{:0width$}", id, width = width)
}

/// Zero-pad an id segment taken from a resource URL.
pub fn pad_id_str(id: &str) -> String {
    format!("{:0>width$}", id, width = DEFAULT_ID_WIDTH)
}

/// Official artwork URL for an id. The asset is not checked to exist.
pub fn artwork_url_for(id: impl Display) -> String {
    format!("{}{}.png", ARTWORK_URL_PREFIX, id)
}
