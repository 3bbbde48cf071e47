use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of errors raised by the scaffolding collaborators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CrudErrorKind {
    MissingResource,
    ResourceNotFound,
    Translation,
    Config,
}

impl fmt::Display for CrudErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrudErrorKind::MissingResource => write!(f, "MissingResource"),
            CrudErrorKind::ResourceNotFound => write!(f, "ResourceNotFound"),
            CrudErrorKind::Translation => write!(f, "Translation"),
            CrudErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Structured error shared by the resource registry, translators and config loader.
///
/// Components never catch these; they bubble up through `?` to the nearest
/// error boundary of the host application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrudError {
    pub kind: CrudErrorKind,
    pub message: String,
}

impl CrudError {
    /// Neither a prop nor the active route named a resource.
    pub fn missing_resource() -> Self {
        Self {
            kind: CrudErrorKind::MissingResource,
            message: "no resource identifier was given and none is present in the route"
                .to_string(),
        }
    }

    pub fn not_found(identifier: &str) -> Self {
        Self {
            kind: CrudErrorKind::ResourceNotFound,
            message: format!("no resource is registered under `{identifier}`"),
        }
    }

    pub fn translation(message: impl Into<String>) -> Self {
        Self {
            kind: CrudErrorKind::Translation,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: CrudErrorKind::Config,
            message: message.into(),
        }
    }
}

impl fmt::Display for CrudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CrudError {}
