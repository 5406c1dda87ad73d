//! Runtime module - HTTP transport, background worker, app and configuration
//!
//! This module contains the code that touches the outside world:
//! - PokedexApp: navigation stack and response routing
//! - CatalogWorker: background thread running catalog requests
//! - HttpTransport: reqwest-based transport
//! - Configuration loading
//! - Logging setup

pub mod app;
pub mod config;
pub mod http;
pub mod logging;
pub mod worker;

pub use app::PokedexApp;
pub use config::{ApiSettings, Config, ConfigError, LoggingSettings};
pub use http::HttpTransport;
pub use logging::init_logging;
pub use worker::{CatalogWorker, WorkerReply};
