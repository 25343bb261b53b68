//! # HTTP Server Module
//!
//! Axum server exposing the property search API.
//!
//! # Endpoints
//!
//! - `/` - Welcome message
//! - `/search` - Property listings, optionally filtered by exact city
//! - `/health` - Health check

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod search_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
