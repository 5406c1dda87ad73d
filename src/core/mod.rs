//! Core module - transport-independent catalog logic

pub mod catalog;
pub mod color;
pub mod constants;
pub mod format;
pub mod io_traits;
pub mod protocol;
pub mod resource_id;
pub mod screen;
pub mod types;
pub mod view;

pub use catalog::{CatalogClient, CatalogRequest, CatalogResponse, FetchError, FetchOperation};
pub use color::color_for_type;
pub use format::{
    artwork_url_for, capitalize, format_height, format_weight, humanize_stat_name, pad_id,
    stat_bar_width_percent,
};
pub use io_traits::{CatalogTransport, TransportError, TransportResponse};
pub use resource_id::{extract_id, ExtractIdError};
pub use screen::{DetailScreen, ListScreen, LoadState, RequestTicket, ScreenId};
pub use types::{EntityDetail, EntityRef, EntitySummary};
pub use view::{DetailView, SummaryCard};
