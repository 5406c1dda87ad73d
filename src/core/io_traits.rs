//! I/O traits for catalog requests
//!
//! These traits abstract the HTTP layer, enabling client and worker
//! tests with mock implementations.

use std::sync::Arc;

use thiserror::Error;

// =============================================================================
// TRANSPORT TYPES
// =============================================================================

/// Status and body of one completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure below the HTTP status level (DNS, connect, TLS, timeout, body read)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

// =============================================================================
// I/O TRAITS
// =============================================================================

/// Issues read-only GET requests against the catalog
pub trait CatalogTransport {
    /// Perform one GET request. Non-2xx statuses are returned, not raised.
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

impl<T: CatalogTransport + ?Sized> CatalogTransport for Arc<T> {
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: CatalogTransport + ?Sized> CatalogTransport for &T {
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        (**self).get(url)
    }
}

// =============================================================================
// MOCK IMPLEMENTATIONS FOR TESTING
// =============================================================================


// =============================================================================
// TESTS
// =============================================================================
