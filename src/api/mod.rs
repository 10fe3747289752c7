//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and formats the results.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration for `/api/v1`

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
