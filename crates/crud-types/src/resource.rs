use serde::{Deserialize, Serialize};

use crate::error::CrudError;
use crate::text::{user_friendly_resource_name, Plurality};

/// Metadata for a resource managed by the scaffolding (e.g. `posts`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ResourceDescriptor {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub can_create: bool,
}

impl ResourceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn creatable(mut self, can_create: bool) -> Self {
        self.can_create = can_create;
        self
    }

    /// Route segment used for links, falling back to the name.
    pub fn route_or_name(&self) -> &str {
        self.route.as_deref().unwrap_or(&self.name)
    }

    /// Human-friendly label derived from `label`, or from `name` when unset.
    pub fn display_label(&self, plurality: Plurality) -> String {
        user_friendly_resource_name(self.label.as_deref().unwrap_or(&self.name), plurality)
    }
}

/// Ordered set of the resources an application exposes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceRegistry {
    resources: Vec<ResourceDescriptor>,
}

impl ResourceRegistry {
    pub fn new(resources: Vec<ResourceDescriptor>) -> Self {
        Self { resources }
    }

    /// Find the descriptor for a route segment or resource name.
    ///
    /// Routes are matched before names and leading slashes are ignored on
    /// both sides. The first registered match wins.
    pub fn resolve(&self, identifier: Option<&str>) -> Result<ResourceDescriptor, CrudError> {
        let identifier = identifier
            .map(trim_route)
            .filter(|id| !id.is_empty())
            .ok_or_else(CrudError::missing_resource)?;

        let by_route = self
            .resources
            .iter()
            .find(|r| r.route.as_deref().map(trim_route) == Some(identifier));
        let found = by_route.or_else(|| self.resources.iter().find(|r| r.name == identifier));

        match found {
            Some(resource) => {
                tracing::debug!(identifier, resource = %resource.name, "resolved resource");
                Ok(resource.clone())
            }
            None => Err(CrudError::not_found(identifier)),
        }
    }
}

fn trim_route(route: &str) -> &str {
    route.trim().trim_start_matches('/')
}
