//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-checked queries and bind parameters.

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
