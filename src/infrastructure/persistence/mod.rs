//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-bound queries.
//!
//! - [`PgLinkRepository`] - short link storage and click counters
//! - [`PgVisitRepository`] - append-only visit log

pub mod pg_link_repository;
pub mod pg_visit_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_visit_repository::PgVisitRepository;
