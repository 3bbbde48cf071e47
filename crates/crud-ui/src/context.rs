use std::rc::Rc;

use crud_types::{
    CrudConfig, CrudError, FallbackTranslator, OptionsConfig, ResourceDescriptor,
    ResourceRegistry, Translator,
};
use dioxus::prelude::*;

/// Application-wide presentation defaults read by the layout components.
#[derive(Clone, PartialEq, Default)]
pub struct CrudOptions {
    /// Breadcrumb shown when a page does not pass its own.
    ///
    /// `None` renders the stock [`Breadcrumb`](crate::components::Breadcrumb);
    /// `Some(VNode::empty())` hides breadcrumbs everywhere.
    pub breadcrumb: Option<Element>,
}

impl CrudOptions {
    pub fn from_settings(settings: &OptionsConfig) -> Self {
        Self {
            breadcrumb: (!settings.breadcrumb).then(VNode::empty),
        }
    }
}

/// Parameters the host router extracted from the active route.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteParams {
    pub resource: Option<String>,
    pub action: Option<String>,
    pub id: Option<String>,
}

impl RouteParams {
    pub fn list(resource: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
            action: Some("list".to_string()),
            id: None,
        }
    }
}

/// Active route, shared as context so the router can update it on navigation.
#[derive(Clone, Copy)]
pub struct RouteState {
    pub params: Signal<RouteParams>,
}

/// Collaborators shared by every scaffolded page.
#[derive(Clone)]
pub struct CrudContext {
    pub registry: Rc<ResourceRegistry>,
    pub translator: Rc<dyn Translator>,
    pub options: CrudOptions,
}

impl CrudContext {
    pub fn new(
        registry: ResourceRegistry,
        translator: impl Translator + 'static,
        options: CrudOptions,
    ) -> Self {
        Self {
            registry: Rc::new(registry),
            translator: Rc::new(translator),
            options,
        }
    }

    /// Build the collaborators described by `config`. `breadcrumb`, when
    /// set, wins over the `[options] breadcrumb` setting.
    pub fn from_config(config: &CrudConfig, breadcrumb: Option<Element>) -> Self {
        let options = match breadcrumb {
            Some(element) => CrudOptions {
                breadcrumb: Some(element),
            },
            None => CrudOptions::from_settings(&config.options),
        };
        tracing::debug!(resources = config.resources.len(), "providing crud context");
        Self::new(config.registry(), config.translator(), options)
    }
}

impl Default for CrudContext {
    fn default() -> Self {
        Self::new(
            ResourceRegistry::default(),
            FallbackTranslator,
            CrudOptions::default(),
        )
    }
}

/// Shared collaborators, held in a signal so pages re-render when the
/// provider's props change.
#[derive(Clone, Copy)]
pub struct CrudState {
    pub context: Signal<CrudContext>,
}

/// Provide the registry, translator, options and route to every descendant.
///
/// `breadcrumb` overrides the `[options] breadcrumb` setting of `config`
/// with an application-wide breadcrumb element. New prop values are pushed
/// to the shared state on every render.
#[component]
pub fn CrudProvider(
    config: CrudConfig,
    #[props(default)] route: RouteParams,
    breadcrumb: Option<Element>,
    children: Element,
) -> Element {
    let mut applied = use_signal(|| (config.clone(), breadcrumb.clone()));
    let mut context = use_context_provider(|| CrudState {
        context: Signal::new(CrudContext::from_config(&config, breadcrumb.clone())),
    })
    .context;
    let mut params = use_context_provider(|| RouteState {
        params: Signal::new(route.clone()),
    })
    .params;

    let stale = {
        let (old_config, old_breadcrumb) = &*applied.peek();
        *old_config != config || *old_breadcrumb != breadcrumb
    };
    if stale {
        context.set(CrudContext::from_config(&config, breadcrumb.clone()));
        applied.set((config.clone(), breadcrumb.clone()));
    }
    if *params.peek() != route {
        tracing::debug!(resource = ?route.resource, action = ?route.action, "route changed");
        params.set(route.clone());
    }

    rsx! {
        {children}
    }
}

/// The shared collaborators, or empty defaults outside a [`CrudProvider`].
pub fn use_crud() -> CrudContext {
    try_use_context::<CrudState>()
        .map(|state| state.context.read().clone())
        .unwrap_or_default()
}

pub fn use_crud_options() -> CrudOptions {
    use_crud().options
}

/// Current route parameters; empty outside a [`CrudProvider`].
pub fn use_route_params() -> RouteParams {
    try_use_context::<RouteState>()
        .map(|state| state.params.read().clone())
        .unwrap_or_default()
}

/// Handle for translating keys with a fallback.
#[derive(Clone)]
pub struct Translate(Rc<dyn Translator>);

impl Translate {
    pub fn t(&self, key: &str, fallback: &str) -> Result<String, CrudError> {
        self.0.translate(key, fallback)
    }
}

pub fn use_translate() -> Translate {
    Translate(use_crud().translator)
}

/// Resolves resource identifiers (route segments or names) to descriptors.
#[derive(Clone)]
pub struct ResourceResolver(Rc<ResourceRegistry>);

impl ResourceResolver {
    pub fn resolve(&self, identifier: Option<&str>) -> Result<ResourceDescriptor, CrudError> {
        self.0.resolve(identifier)
    }
}

pub fn use_resource_with_route() -> ResourceResolver {
    ResourceResolver(use_crud().registry)
}
