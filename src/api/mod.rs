//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service operations and formats responses:
//!
//! - [`dto`] - Data Transfer Objects and payload validation
//! - [`handlers`] - HTTP request handlers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod routes;
