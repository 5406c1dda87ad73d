//! Catalog constants - endpoints, page sizes, display fallbacks
//!
//! Fixed values of the PokeAPI contract and the screens built on it.

use std::time::Duration;

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Default PokeAPI base URL (no trailing slash)
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Resource path of the creature collection, relative to the base URL
pub const POKEMON_RESOURCE: &str = "pokemon";

/// Official artwork URL prefix; the numeric id and `.png` are appended
pub const ARTWORK_URL_PREFIX: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/";

/// Key of the official artwork entry under `sprites.other`
pub const OFFICIAL_ARTWORK_KEY: &str = "official-artwork";

// =============================================================================
// PAGING & TRANSPORT
// =============================================================================

/// Number of summaries requested by the list screen
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Offset of the single page requested by the list screen
pub const DEFAULT_PAGE_OFFSET: u32 = 0;

/// HTTP timeout applied to each catalog request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Capacity of the worker request/response channels
pub const WORKER_CHANNEL_CAPACITY: usize = 16;

// =============================================================================
// DISPLAY
// =============================================================================

/// Upper bound of a base stat, used as the 100% mark of a stat bar
pub const MAX_BASE_STAT: u32 = 255;

/// Width used when zero-padding ids for display ("#001")
pub const DEFAULT_ID_WIDTH: usize = 3;

/// Color of the "normal" type, used for any unknown type name
pub const FALLBACK_TYPE_COLOR: &str = "#A8A878";

/// Shown when a record has no base experience
pub const MISSING_VALUE_TEXT: &str = "-";

/// Suffix appended to hidden ability labels
pub const HIDDEN_ABILITY_SUFFIX: &str = " (hidden)";

/// Message surfaced by the list screen on any fetch failure
pub const LIST_ERROR_MESSAGE: &str = "failed to load list";

/// Message surfaced by the detail screen on any fetch failure
pub const DETAIL_ERROR_MESSAGE: &str = "failed to load details";
