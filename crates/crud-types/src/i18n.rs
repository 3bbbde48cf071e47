use std::collections::HashMap;

use crate::error::CrudError;

/// Looks up a localized message for a dotted key such as `posts.titles.list`.
///
/// `fallback` is what the caller wants shown when no message exists for the
/// key. Implementations may reject keys they cannot interpret.
pub trait Translator {
    fn translate(&self, key: &str, fallback: &str) -> Result<String, CrudError>;
}

/// Translator used when the application registers no catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FallbackTranslator;

impl Translator for FallbackTranslator {
    fn translate(&self, _key: &str, fallback: &str) -> Result<String, CrudError> {
        Ok(fallback.to_string())
    }
}

/// Flat key → message catalogue, usually loaded from the `[translations]` table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogTranslator {
    messages: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str, fallback: &str) -> Result<String, CrudError> {
        validate_key(key)?;
        match self.messages.get(key) {
            Some(message) => Ok(message.clone()),
            None => {
                tracing::debug!(key, "translation missing, using fallback");
                Ok(fallback.to_string())
            }
        }
    }
}

/// A key is one or more non-empty segments joined by `.`.
pub fn validate_key(key: &str) -> Result<(), CrudError> {
    if key.is_empty() {
        return Err(CrudError::translation("translation key is empty"));
    }
    if key.split('.').any(|segment| segment.trim().is_empty()) {
        return Err(CrudError::translation(format!(
            "translation key `{key}` has an empty segment"
        )));
    }
    Ok(())
}
