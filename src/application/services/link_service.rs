//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::liveness::UrlValidator;
use crate::utils::key_generator::{DEFAULT_KEY_LENGTH, KeyGenerator};

/// Service for creating and resolving short links.
///
/// Holds its collaborators directly (repository, key generator, URL
/// validator); everything is wired by explicit constructor injection at
/// process start.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    generator: KeyGenerator,
    validator: Arc<dyn UrlValidator>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, generator: KeyGenerator, validator: Arc<dyn UrlValidator>) -> Self {
        Self {
            repository,
            generator,
            validator,
        }
    }

    /// Resolves a key to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyNotFound`] when no link has the key.
    pub async fn get_by_key(&self, key: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::key_not_found(key))
    }

    /// Creates a link under a freshly generated 6-character key.
    ///
    /// The generated key is re-drawn on collision (bounded attempts); the
    /// store's unique constraint remains the final backstop for the race
    /// between the check and the insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadUrl`] if the URL fails liveness validation;
    /// [`AppError::Internal`] if no free key is found within the bounded
    /// number of attempts.
    pub async fn create(&self, url: &str) -> Result<Link, AppError> {
        let key = self.generate_unique_key().await?;
        self.save_url(url, key).await
    }

    /// Creates a link under a caller-supplied key.
    ///
    /// The existence check runs before URL validation so a duplicate key
    /// fails fast without the outbound network round trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyAlreadyExists`] if the key is taken;
    /// [`AppError::BadUrl`] if the URL fails liveness validation.
    pub async fn create_with_key(&self, url: &str, key: &str) -> Result<Link, AppError> {
        if self.repository.exists_by_key(key).await? {
            return Err(AppError::key_already_exists(key));
        }
        self.save_url(url, key.to_string()).await
    }

    /// Shared creation tail: validate the URL, then persist.
    ///
    /// Validation happens strictly before persistence; a rejected URL never
    /// touches the store.
    async fn save_url(&self, url: &str, key: String) -> Result<Link, AppError> {
        self.validator.validate(url).await?;

        self.repository
            .save(NewLink {
                key,
                url: url.to_string(),
            })
            .await
    }

    /// Draws generated keys until one is free, up to a bounded number of
    /// attempts.
    async fn generate_unique_key(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let key = self.generator.generate(DEFAULT_KEY_LENGTH);

            if !self.repository.exists_by_key(&key).await? {
                return Ok(key);
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique key: too many collisions",
        ))
    }
}
