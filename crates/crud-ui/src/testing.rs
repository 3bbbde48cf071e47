//! Render harness shared by the component tests.

use std::cell::RefCell;

use crud_types::{CrudConfig, ResourceDescriptor};
use dioxus::dioxus_core::{AttributeValue, ScopeId};
use dioxus::prelude::*;

use crate::context::{CrudProvider, RouteParams};

/// A page body rendered inside a [`CrudProvider`].
#[derive(Clone)]
pub(crate) struct Fixture {
    config: CrudConfig,
    route: RouteParams,
    app_breadcrumb: Option<fn() -> Element>,
    body: fn() -> Element,
}

impl Fixture {
    pub(crate) fn new(config: CrudConfig, route: RouteParams, body: fn() -> Element) -> Self {
        Self {
            config,
            route,
            app_breadcrumb: None,
            body,
        }
    }

    pub(crate) fn with_app_breadcrumb(mut self, breadcrumb: fn() -> Element) -> Self {
        self.app_breadcrumb = Some(breadcrumb);
        self
    }
}

thread_local! {
    /// Replaces the root's fixture on its next render.
    static NEXT_FIXTURE: RefCell<Option<Fixture>> = const { RefCell::new(None) };
}

fn fixture_root(fixture: Fixture) -> Element {
    let fixture = NEXT_FIXTURE.with_borrow(|next| next.clone()).unwrap_or(fixture);
    let config = fixture.config.clone();
    let route = fixture.route.clone();
    let provider = match fixture.app_breadcrumb {
        Some(app_breadcrumb) => rsx! {
            CrudProvider { config, route, breadcrumb: app_breadcrumb(), {(fixture.body)()} }
        },
        None => rsx! {
            CrudProvider { config, route, {(fixture.body)()} }
        },
    };

    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                pre { class: "render-error", "{errors:?}" }
            },
            {provider}
        }
    }
}

/// Render a fixture to HTML. Errors raised by the body show up as a
/// `pre.render-error` element.
pub(crate) fn render(fixture: Fixture) -> String {
    let mut dom = VirtualDom::new_with_props(fixture_root, fixture);
    dom.rebuild_in_place();
    dom.render_immediate_to_vec();
    dioxus_ssr::render(&dom)
}

/// Render `first`, then re-render the same tree with the props of `next`.
///
/// Returns the HTML before and after the update.
pub(crate) fn render_after(first: Fixture, next: Fixture) -> (String, String) {
    let mut dom = VirtualDom::new_with_props(fixture_root, first);
    dom.rebuild_in_place();
    dom.render_immediate_to_vec();
    let before = dioxus_ssr::render(&dom);

    NEXT_FIXTURE.set(Some(next));
    dom.mark_dirty(ScopeId::APP);
    dom.render_immediate_to_vec();
    NEXT_FIXTURE.set(None);

    (before, dioxus_ssr::render(&dom))
}

/// `posts` (creatable), `categories` (labelled "Topics", nested route) and
/// `logs` (read-only).
pub(crate) fn posts_config() -> CrudConfig {
    CrudConfig {
        resources: vec![
            ResourceDescriptor::new("posts").creatable(true),
            ResourceDescriptor::new("categories")
                .with_label("Topics")
                .with_route("cms/categories"),
            ResourceDescriptor::new("logs"),
        ],
        ..Default::default()
    }
}

/// Text value of a plain (non-style) attribute in a bag.
pub(crate) fn text_value(bag: &[Attribute], name: &str) -> Option<String> {
    bag.iter()
        .find(|a| a.name == name && a.namespace.is_none())
        .and_then(|a| match &a.value {
            AttributeValue::Text(text) => Some(text.clone()),
            _ => None,
        })
}
