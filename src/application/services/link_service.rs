//! Link registry: creation, listing, lookup, and deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::validate::{is_valid_code, is_valid_url};
use serde_json::json;

/// Upper bound on random-code generation attempts. With a 62^6 code space a
/// single attempt succeeds almost always; the cap exists so a pathological
/// collision storm fails loudly instead of looping forever.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Orchestrates validation, code generation, and the link store to enforce
/// all creation and deletion rules.
///
/// The store handle is injected so tests can substitute an in-memory or
/// mock implementation.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new registry service.
    ///
    /// `base_url` is the public prefix short URLs are built from, without a
    /// trailing slash (one is trimmed if present).
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: String) -> Self {
        Self {
            repository,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a short link, either with the caller's explicit code or a
    /// freshly generated one.
    ///
    /// An explicit code is used exactly as given: if the store reports it
    /// taken, the caller gets [`AppError::Conflict`] rather than a silently
    /// substituted code. Without an explicit code, generation retries on
    /// collision up to [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// A failed create leaves no row behind.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a missing/invalid URL or malformed code
    /// - [`AppError::Conflict`] when the explicit code already exists
    /// - [`AppError::Internal`] when code generation exhausts its retry cap
    pub async fn create_link(
        &self,
        url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        if !is_valid_url(&url) {
            return Err(AppError::bad_request(
                "Invalid or missing URL",
                json!({ "url": url }),
            ));
        }

        if let Some(code) = custom_code {
            if !is_valid_code(&code) {
                return Err(AppError::bad_request(
                    "Code must match [A-Za-z0-9]{6,8}",
                    json!({ "code": code }),
                ));
            }

            return match self
                .repository
                .insert(NewLink {
                    code: code.clone(),
                    target_url: url,
                })
                .await
            {
                Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                    "Code already exists",
                    json!({ "code": code }),
                )),
                other => other,
            };
        }

        self.create_with_generated_code(url).await
    }

    /// Lists all links, newest creation first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_all().await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Code not found", json!({ "code": code })))
    }

    /// Permanently deletes a link, freeing its code for future creations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete_by_code(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Code not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Generates a candidate, probes for existence, and inserts, retrying on
    /// collision.
    ///
    /// The probe is only an optimization that skips a doomed insert; the
    /// insert's own atomicity is what guarantees uniqueness when two
    /// creations race past the probe with the same candidate.
    async fn create_with_generated_code(&self, url: String) -> Result<Link, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(DEFAULT_CODE_LENGTH);

            if self.repository.exists_by_code(&code).await? {
                continue;
            }

            match self
                .repository
                .insert(NewLink {
                    code,
                    target_url: url.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}
