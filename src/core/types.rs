//! Core types - catalog records handed to the screens
//!
//! Records are immutable once received and live as long as the screen
//! state that owns them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::resource_id::{extract_id, parse_id, ExtractIdError};

// =============================================================================
// ENTITY SUMMARY
// =============================================================================

/// Minimal list-view record, as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub name: String,
    /// Resource URL, e.g. `https://pokeapi.co/api/v2/pokemon/1/`
    pub url: String,
}

impl EntitySummary {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Identifier segment of the resource URL
    pub fn id(&self) -> Result<&str, ExtractIdError> {
        extract_id(&self.url)
    }

    /// Identifier segment of the resource URL, parsed as a number
    pub fn numeric_id(&self) -> Result<u32, ExtractIdError> {
        parse_id(&self.url)
    }
}

// =============================================================================
// ENTITY DETAIL
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot {
    pub slot: u32,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub stat_name: String,
    /// 0..=255, never validated locally
    pub base_value: u32,
    pub effort: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilitySlot {
    pub ability_name: String,
    pub slot: u32,
    pub is_hidden: bool,
}

/// Full record of one creature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilitySlot>,
    pub artwork_url: String,
}

impl EntityDetail {
    /// Name of the first type; it drives the accent color
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.type_name.as_str())
    }
}

// =============================================================================
// ENTITY REFERENCE
// =============================================================================

/// Path identifier accepted by the detail endpoint: a name or a numeric id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Name(String),
    Id(u32),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Name(name) => f.write_str(name),
            EntityRef::Id(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for EntityRef {
    fn from(name: &str) -> Self {
        EntityRef::Name(name.to_string())
    }
}

impl From<String> for EntityRef {
    fn from(name: String) -> Self {
        EntityRef::Name(name)
    }
}

impl From<u32> for EntityRef {
    fn from(id: u32) -> Self {
        EntityRef::Id(id)
    }
}
