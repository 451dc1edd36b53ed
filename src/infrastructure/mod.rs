//! Infrastructure layer: database access and external integrations.
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`liveness`] - outbound URL liveness validation

pub mod liveness;
pub mod persistence;
