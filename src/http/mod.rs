//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the catalog endpoints
//! - JSON listing and taxonomy classification
//! - Range-capable video streaming
//! - CORS middleware

pub mod handlers;
pub mod routes;
pub mod stream;

pub use routes::create_router;
