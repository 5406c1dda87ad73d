//! View models - render-ready values for the list and detail screens
//!
//! Built from catalog records through the pure functions of `format`
//! and `color`. A renderer only needs to lay these out.

use super::color::{color_for_type, parse_hex_color};
use super::constants::FALLBACK_TYPE_COLOR;
use super::format::{
    artwork_url_for, capitalize, format_base_experience, format_height, format_weight,
    humanize_ability_name, humanize_stat_name, pad_id, pad_id_str, stat_bar_width_percent,
};
use super::resource_id::ExtractIdError;
use super::types::{EntityDetail, EntitySummary};

// =============================================================================
// SUMMARY CARD
// =============================================================================

/// One tile of the list screen
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    /// Raw name, used to open the detail screen
    pub name: String,
    pub display_name: String,
    /// Id segment extracted from the resource URL
    pub id: String,
    /// `#001`
    pub padded_id: String,
    pub artwork_url: String,
}

impl SummaryCard {
    pub fn from_summary(summary: &EntitySummary) -> Result<Self, ExtractIdError> {
        let id = summary.id()?;
        Ok(Self {
            name: summary.name.clone(),
            display_name: capitalize(&summary.name),
            id: id.to_string(),
            padded_id: format!("#{}", pad_id_str(id)),
            artwork_url: artwork_url_for(id),
        })
    }
}

// =============================================================================
// DETAIL VIEW
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TypeBadge {
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub label: String,
    pub value: u32,
    pub width_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbilityLabel {
    pub label: String,
    pub is_hidden: bool,
}

/// Everything the detail screen shows, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub display_name: String,
    pub padded_id: String,
    /// Hex color of the first type
    pub accent_color: &'static str,
    pub accent_rgba: [f32; 4],
    pub artwork_url: String,
    pub types: Vec<TypeBadge>,
    pub height: String,
    pub weight: String,
    pub base_experience: String,
    pub stats: Vec<StatBar>,
    pub abilities: Vec<AbilityLabel>,
}

impl DetailView {
    pub fn from_detail(detail: &EntityDetail) -> Self {
        let accent_color = detail
            .primary_type()
            .map(color_for_type)
            .unwrap_or(FALLBACK_TYPE_COLOR);

        Self {
            display_name: capitalize(&detail.name),
            padded_id: format!("#{}", pad_id(detail.id)),
            accent_color,
            accent_rgba: parse_hex_color(accent_color, 1.0),
            artwork_url: detail.artwork_url.clone(),
            types: detail
                .types
                .iter()
                .map(|t| TypeBadge {
                    label: capitalize(&t.type_name),
                    color: color_for_type(&t.type_name),
                })
                .collect(),
            height: format_height(detail.height),
            weight: format_weight(detail.weight),
            base_experience: format_base_experience(detail.base_experience),
            stats: detail
                .stats
                .iter()
                .map(|s| StatBar {
                    label: humanize_stat_name(&s.stat_name),
                    value: s.base_value,
                    width_percent: stat_bar_width_percent(s.base_value),
                })
                .collect(),
            abilities: detail
                .abilities
                .iter()
                .map(|a| AbilityLabel {
                    label: humanize_ability_name(&a.ability_name, a.is_hidden),
                    is_hidden: a.is_hidden,
                })
                .collect(),
        }
    }
}
