//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`ShortLink`] - an identifier to target URL mapping with a click counter
//! - [`Visit`] - an append-only per-click analytics record
//!
//! Creation inputs use separate `New*` structs so that store-assigned fields
//! (id, timestamps, counters) never appear in write paths.

pub mod short_link;
pub mod visit;

pub use short_link::{NewShortLink, ShortLink};
pub use visit::{NewVisit, Visit};
