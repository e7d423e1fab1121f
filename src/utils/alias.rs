//! Alias generation and validation utilities.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Maximum length of any alias, generated or caller-supplied.
pub const MAX_ALIAS_LENGTH: usize = 100;

/// Aliases that would shadow a fixed route.
const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Generates a random alphanumeric alias of `length` characters.
///
/// Characters are drawn uniformly from `[A-Za-z0-9]`.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Whether `alias` would be shadowed by a fixed route.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(alias))
}

/// Why a caller-supplied alias was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAlias {
    #[error("alias must be 1-100 characters, got {0}")]
    Length(usize),

    #[error("alias can only contain letters, digits, hyphens and underscores")]
    Charset,

    #[error("alias '{0}' is reserved")]
    Reserved(String),
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-100 characters
/// - Allowed characters: ASCII letters, digits, `-`, `_`
/// - Cannot be a reserved route word
pub fn validate_alias(alias: &str) -> Result<(), InvalidAlias> {
    let len = alias.chars().count();
    if len == 0 || len > MAX_ALIAS_LENGTH {
        return Err(InvalidAlias::Length(len));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(InvalidAlias::Charset);
    }

    if is_reserved(alias) {
        return Err(InvalidAlias::Reserved(alias.to_string()));
    }

    Ok(())
}
