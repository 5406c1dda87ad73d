//! Catalog client - the two read-only calls against the creature catalog
//!
//! Every call performs exactly one transport request. Nothing is cached
//! and nothing is retried; a repeated call always re-fetches.

use std::fmt;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

use super::constants::{
    DEFAULT_BASE_URL, DETAIL_ERROR_MESSAGE, LIST_ERROR_MESSAGE, POKEMON_RESOURCE,
};
use super::io_traits::{CatalogTransport, TransportError};
use super::protocol::{DetailResponse, ListResponse};
use super::types::{EntityDetail, EntityRef, EntitySummary};

// =============================================================================
// ERRORS
// =============================================================================

/// Which catalog call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchOperation {
    List,
    Detail,
}

impl FetchOperation {
    pub fn label(self) -> &'static str {
        match self {
            FetchOperation::List => "list",
            FetchOperation::Detail => "detail",
        }
    }

    /// Fixed message surfaced to the screen for any failure of this call
    pub fn user_message(self) -> &'static str {
        match self {
            FetchOperation::List => LIST_ERROR_MESSAGE,
            FetchOperation::Detail => DETAIL_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for FetchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Underlying reason of a fetch failure. Logged, never branched on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchCause {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed body: {0}")]
    Decode(String),
}

/// The single error kind of the catalog client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} fetch failed: {cause}")]
pub struct FetchError {
    pub operation: FetchOperation,
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(operation: FetchOperation, cause: impl Into<FetchCause>) -> Self {
        Self {
            operation,
            cause: cause.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.operation.label()
    }

    pub fn user_message(&self) -> &'static str {
        self.operation.user_message()
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// A catalog call queued by a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    List { limit: u32, offset: u32 },
    Detail(EntityRef),
}

/// Outcome of a [`CatalogRequest`]
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogResponse {
    List(Result<Vec<EntitySummary>, FetchError>),
    Detail(Result<EntityDetail, FetchError>),
}

impl CatalogRequest {
    pub fn operation(&self) -> FetchOperation {
        match self {
            CatalogRequest::List { .. } => FetchOperation::List,
            CatalogRequest::Detail(_) => FetchOperation::Detail,
        }
    }
}

impl CatalogResponse {
    /// Failed response for a request that never reached the transport
    pub fn failed(operation: FetchOperation, cause: FetchCause) -> Self {
        let error = FetchError::new(operation, cause);
        match operation {
            FetchOperation::List => CatalogResponse::List(Err(error)),
            FetchOperation::Detail => CatalogResponse::Detail(Err(error)),
        }
    }
}

// =============================================================================
// CATALOG CLIENT
// =============================================================================

pub struct CatalogClient<T> {
    transport: T,
    base_url: String,
}

impl<T: CatalogTransport> CatalogClient<T> {
    /// Client against the public PokeAPI
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_url(&self, limit: u32, offset: u32) -> String {
        format!(
            "{}/{}?limit={}&offset={}",
            self.base_url, POKEMON_RESOURCE, limit, offset
        )
    }

    pub fn detail_url(&self, identifier: &EntityRef) -> String {
        format!("{}/{}/{}", self.base_url, POKEMON_RESOURCE, identifier)
    }

    /// Fetch one page of summaries, in server order
    pub fn list_entities(&self, limit: u32, offset: u32) -> Result<Vec<EntitySummary>, FetchError> {
        let url = self.list_url(limit, offset);
        let page: ListResponse = self.fetch(FetchOperation::List, &url)?;
        debug!(
            count = page.results.len(),
            total = ?page.count,
            "[api] Received summary page"
        );
        Ok(page.results)
    }

    /// Fetch the full record of one creature by name or numeric id
    pub fn get_entity_detail(
        &self,
        identifier: impl Into<EntityRef>,
    ) -> Result<EntityDetail, FetchError> {
        let url = self.detail_url(&identifier.into());
        let wire: DetailResponse = self.fetch(FetchOperation::Detail, &url)?;
        Ok(wire.into())
    }

    pub fn execute(&self, request: CatalogRequest) -> CatalogResponse {
        match request {
            CatalogRequest::List { limit, offset } => {
                CatalogResponse::List(self.list_entities(limit, offset))
            }
            CatalogRequest::Detail(identifier) => {
                CatalogResponse::Detail(self.get_entity_detail(identifier))
            }
        }
    }

    fn fetch<R: DeserializeOwned>(&self, operation: FetchOperation, url: &str) -> Result<R, FetchError> {
        debug!(%operation, url, "[api] GET");

        let result = self
            .transport
            .get(url)
            .map_err(FetchCause::from)
            .and_then(|response| {
                if !response.is_success() {
                    return Err(FetchCause::Status(response.status));
                }
                serde_json::from_str(&response.body).map_err(|e| FetchCause::Decode(e.to_string()))
            });

        result.map_err(|cause| {
            error!(%operation, url, error = %cause, "[api] Request failed");
            FetchError::new(operation, cause)
        })
    }
}
