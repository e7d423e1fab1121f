//! Mapping entity: the persisted association between an alias and a long URL.

/// A stored alias → URL mapping.
///
/// The `url` is kept exactly as submitted; no normalization is applied.
/// The `alias` is unique across all live mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub url: String,
    pub alias: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, url: String, alias: String) -> Self {
        Self { id, url, alias }
    }

    /// Builds the public short URL for this mapping under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.alias)
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub url: String,
    pub alias: String,
}

impl NewMapping {
    pub fn new(url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alias: alias.into(),
        }
    }

    /// Attaches the store-assigned id, producing the persisted entity.
    pub fn into_mapping(self, id: i64) -> Mapping {
        Mapping::new(id, self.url, self.alias)
    }
}
