//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! is modelled by a separate struct ([`NewLink`]) so the store-assigned
//! fields (`id`, `created_at`) cannot be faked by callers.

pub mod link;

pub use link::{Link, NewLink};
