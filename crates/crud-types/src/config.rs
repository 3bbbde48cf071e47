use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::CrudError;
use crate::i18n::CatalogTranslator;
use crate::resource::{ResourceDescriptor, ResourceRegistry};

fn default_true() -> bool {
    true
}

/// Application-wide presentation options (`[options]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionsConfig {
    /// `false` suppresses the default breadcrumb on every page.
    #[serde(default = "default_true")]
    pub breadcrumb: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self { breadcrumb: true }
    }
}

/// Top-level config file structure, e.g. `crud.toml`.
///
/// Every field is optional so an empty file yields a usable (if empty)
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CrudConfig {
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub resources: Vec<ResourceDescriptor>,
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

impl CrudConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, CrudError> {
        toml::from_str(contents).map_err(|e| CrudError::config(e.to_string()))
    }

    /// Read and parse a config file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CrudError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::from_toml_str(&contents)?;
                tracing::debug!(
                    path = %path.display(),
                    resources = config.resources.len(),
                    translations = config.translations.len(),
                    "loaded crud config"
                );
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(CrudError::config(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn registry(&self) -> ResourceRegistry {
        ResourceRegistry::new(self.resources.clone())
    }

    pub fn translator(&self) -> CatalogTranslator {
        CatalogTranslator::new(self.translations.clone())
    }
}
