//! Data Transfer Objects for API requests and responses.

pub mod health;
pub mod link;

pub use link::{FieldError, LinkRequest, LinkResponse, validate_link_request};
