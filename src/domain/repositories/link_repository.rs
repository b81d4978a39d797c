//! Repository trait for the short link entry store.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Entry store interface for short links.
///
/// The store is the single owner of the `code -> target_url` mapping and its
/// click counters. Implementations must allow concurrent readers and serialize
/// writes per identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken and
    /// [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds an entry by its short code.
    ///
    /// Returns `Ok(None)` when the code is unknown.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the click counter and returns the updated entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    async fn increment_clicks(&self, code: &str) -> Result<ShortLink, AppError>;

    /// Removes an entry. Returns `Ok(true)` if a row was deleted.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists entries ordered by click count descending, ties broken by
    /// creation time ascending.
    async fn list_by_clicks(&self, limit: i64) -> Result<Vec<ShortLink>, AppError>;

    /// Counts stored entries. Used by health reporting.
    async fn count(&self) -> Result<i64, AppError>;
}
