//! Alias assignment, resolution and removal.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingStore, StoreError, UniqueField};
use crate::utils::alias::{generate_alias, is_reserved, validate_alias};

/// Failures surfaced by [`AliasService`].
#[derive(Debug, Error)]
pub enum AliasError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("alias '{0}' already exists")]
    AliasConflict(String),

    #[error("url '{0}' already exists")]
    UrlAlreadyExists(String),

    #[error("alias '{0}' not found")]
    AliasNotFound(String),

    #[error("no free alias found after {0} attempts")]
    AliasGenerationExhausted(usize),

    #[error("storage error: {0}")]
    Storage(#[source] StoreError),
}

/// Parameters for generated aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    /// Length of generated aliases.
    pub length: usize,
    /// Upper bound on generation attempts before giving up.
    pub max_attempts: usize,
}

/// Why an [`AliasPolicy`] was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPolicy {
    #[error("generated alias length must be between 4 and 32, got {0}")]
    Length(usize),

    #[error("alias generation attempts must be between 1 and 20, got {0}")]
    Attempts(usize),
}

impl AliasPolicy {
    /// Checks that generated aliases fit the alias column and that at least
    /// one attempt is made.
    pub fn validate(&self) -> Result<(), InvalidPolicy> {
        if !(4..=32).contains(&self.length) {
            return Err(InvalidPolicy::Length(self.length));
        }
        if !(1..=20).contains(&self.max_attempts) {
            return Err(InvalidPolicy::Attempts(self.max_attempts));
        }
        Ok(())
    }
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            length: 6,
            max_attempts: 5,
        }
    }
}

/// Service deciding, persisting and resolving aliases.
///
/// Holds no state between calls besides the store handle and policy, so a
/// single instance is shared by all request handlers.
pub struct AliasService {
    store: Arc<dyn MappingStore>,
    policy: AliasPolicy,
}

impl AliasService {
    /// Creates a new alias service.
    pub fn new(store: Arc<dyn MappingStore>, policy: AliasPolicy) -> Self {
        Self { store, policy }
    }

    /// Creates a mapping for `url`, using `requested_alias` when given.
    ///
    /// An absent or empty `requested_alias` means "generate one".
    ///
    /// # Errors
    ///
    /// - [`AliasError::InvalidRequest`] if the URL or the requested alias is malformed
    /// - [`AliasError::AliasConflict`] if the requested alias is taken
    /// - [`AliasError::UrlAlreadyExists`] if the store enforces URL uniqueness and the URL is taken
    /// - [`AliasError::AliasGenerationExhausted`] if every generated alias collided
    /// - [`AliasError::Storage`] on any other store failure
    pub async fn create_mapping(
        &self,
        url: &str,
        requested_alias: Option<&str>,
    ) -> Result<Mapping, AliasError> {
        validate_url(url)?;

        match requested_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => self.create_with_alias(url, alias).await,
            None => self.create_with_generated_alias(url).await,
        }
    }

    /// Returns the URL mapped to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::AliasNotFound`] if no mapping has this alias.
    pub async fn resolve_alias(&self, alias: &str) -> Result<String, AliasError> {
        if alias.is_empty() {
            return Err(AliasError::InvalidRequest("alias is empty".into()));
        }

        self.store
            .find_by_alias(alias)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => AliasError::AliasNotFound(alias.to_string()),
                other => AliasError::Storage(other),
            })
    }

    /// Deletes the mapping for `alias`.
    ///
    /// Deleting an alias that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::InvalidRequest`] for an empty alias, without
    /// touching the store.
    pub async fn delete_mapping(&self, alias: &str) -> Result<(), AliasError> {
        if alias.is_empty() {
            return Err(AliasError::InvalidRequest("alias is empty".into()));
        }

        self.store
            .delete_by_alias(alias)
            .await
            .map_err(AliasError::Storage)?;

        info!(alias, "mapping deleted");
        Ok(())
    }

    /// Reports whether the underlying store is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }

    async fn create_with_alias(&self, url: &str, alias: &str) -> Result<Mapping, AliasError> {
        validate_alias(alias).map_err(|e| AliasError::InvalidRequest(e.to_string()))?;

        if self.alias_exists(alias).await? {
            info!(alias, "alias already exists");
            return Err(AliasError::AliasConflict(alias.to_string()));
        }

        let new_mapping = NewMapping::new(url, alias);
        match self.store.insert(new_mapping.clone()).await {
            Ok(id) => Ok(created(new_mapping, id)),
            // Another request claimed the alias between the check and the insert.
            Err(StoreError::DuplicateKey(UniqueField::Alias)) => {
                Err(AliasError::AliasConflict(alias.to_string()))
            }
            Err(e) => Err(classify_insert_error(e, url)),
        }
    }

    async fn create_with_generated_alias(&self, url: &str) -> Result<Mapping, AliasError> {
        let AliasPolicy {
            length,
            max_attempts,
        } = self.policy;

        for attempt in 1..=max_attempts {
            let alias = generate_alias(length);

            if is_reserved(&alias) {
                debug!(alias, attempt, "generated alias is reserved, regenerating");
                continue;
            }

            if self.alias_exists(&alias).await? {
                debug!(alias, attempt, "generated alias collided, regenerating");
                continue;
            }

            let new_mapping = NewMapping::new(url, alias);
            match self.store.insert(new_mapping.clone()).await {
                Ok(id) => return Ok(created(new_mapping, id)),
                Err(StoreError::DuplicateKey(UniqueField::Alias)) => {
                    debug!(
                        alias = new_mapping.alias,
                        attempt, "generated alias taken on insert, regenerating"
                    );
                }
                Err(e) => return Err(classify_insert_error(e, url)),
            }
        }

        warn!(max_attempts, "failed to generate a free alias");
        Err(AliasError::AliasGenerationExhausted(max_attempts))
    }

    async fn alias_exists(&self, alias: &str) -> Result<bool, AliasError> {
        self.store
            .exists_by_alias(alias)
            .await
            .map_err(AliasError::Storage)
    }
}

fn created(new_mapping: NewMapping, id: i64) -> Mapping {
    let mapping = new_mapping.into_mapping(id);
    info!(id, alias = mapping.alias, "url added");
    mapping
}

fn classify_insert_error(e: StoreError, url: &str) -> AliasError {
    match e {
        StoreError::DuplicateKey(UniqueField::Url) => {
            info!(url, "url already exists");
            AliasError::UrlAlreadyExists(url.to_string())
        }
        other => AliasError::Storage(other),
    }
}

fn validate_url(url: &str) -> Result<(), AliasError> {
    if url.is_empty() {
        return Err(AliasError::InvalidRequest("url is empty".into()));
    }

    // The stored URL becomes a `Location` header verbatim, and `Url::parse`
    // silently strips tabs and newlines.
    if !url.chars().all(|c| c.is_ascii_graphic()) {
        return Err(AliasError::InvalidRequest(
            "url must be printable ASCII without whitespace; percent-encode other characters"
                .into(),
        ));
    }

    url::Url::parse(url)
        .map(|_| ())
        .map_err(|e| AliasError::InvalidRequest(format!("invalid url: {e}")))
}
