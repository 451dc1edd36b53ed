//! Utility functions shared across the application.
//!
//! - [`key_generator`] - Random short key generation
//! - [`db_error`] - SQLx error classification helpers

pub mod db_error;
pub mod key_generator;
