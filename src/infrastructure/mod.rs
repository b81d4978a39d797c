//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer:
//!
//! - [`cache`] - caching abstractions (Redis, in-memory, and no-op)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
