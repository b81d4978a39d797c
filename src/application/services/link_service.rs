//! Short link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Upper bound on collision retries before creation fails.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating, retrieving, and deleting short links.
///
/// Handles target URL normalization and code generation/validation. Every
/// create issues a fresh identifier; codes are never reused or repointed.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    code_length: usize,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix used to build full short URLs;
    /// `code_length` is the length of generated identifiers.
    pub fn new(links: Arc<dyn LinkRepository>, code_length: usize, base_url: String) -> Self {
        Self {
            links,
            code_length,
            base_url,
        }
    }

    /// Creates a short link for a target URL.
    ///
    /// The target is normalized first; a missing or non-http(s) scheme is
    /// rejected. With a `custom_code` the code is validated and
    /// uniqueness-checked; otherwise a random code is generated with bounded
    /// collision retries.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a malformed target or custom code
    /// - [`AppError::Conflict`] if the custom code is already taken
    /// - [`AppError::Exhausted`] if generation keeps colliding
    pub async fn create_link(
        &self,
        original_url: String,
        custom_code: Option<String>,
    ) -> Result<ShortLink, AppError> {
        let target_url = normalize_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let code = if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            if self.links.find_by_code(&custom).await?.is_some() {
                return Err(AppError::conflict(
                    "Custom code already exists",
                    json!({ "code": custom }),
                ));
            }

            custom
        } else {
            self.generate_unique_code().await?
        };

        self.links
            .create(NewShortLink { code, target_url })
            .await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<ShortLink, AppError> {
        self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })
    }

    /// Deletes a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.links.delete(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Draws random codes until one is free, up to the attempt bound.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(self.code_length);

            if self.links.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::generation_exhausted(
            "Failed to generate a unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}
