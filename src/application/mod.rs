//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and business rules,
//! providing a clean API for HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - link creation, lookup, deletion
//! - [`services::stats_service::StatsService`] - click statistics and top lists

pub mod services;
