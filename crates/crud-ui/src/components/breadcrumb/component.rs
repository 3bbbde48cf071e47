use crud_types::{humanize, CrudError, Plurality, ResourceDescriptor, Translator};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaHouse;
use dioxus_free_icons::Icon;

use crate::context::{use_crud, use_route_params};

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
    pub home: bool,
}

/// Build the trail for a page: home, the resource list, then the action.
///
/// The `list` action adds no crumb of its own since the resource crumb
/// already points at the list page.
pub fn breadcrumb_trail(
    resource: Option<&ResourceDescriptor>,
    action: Option<&str>,
    show_home: bool,
    translator: &dyn Translator,
) -> Result<Vec<Crumb>, CrudError> {
    let mut trail = Vec::new();

    if show_home {
        trail.push(Crumb {
            label: translator.translate("breadcrumb.home", "Home")?,
            href: Some("/".to_string()),
            home: true,
        });
    }

    if let Some(resource) = resource {
        let key = format!("{}.{}", resource.name, resource.name);
        let label = translator.translate(&key, &resource.display_label(Plurality::Plural))?;
        trail.push(Crumb {
            label,
            href: Some(format!(
                "/{}",
                resource.route_or_name().trim_start_matches('/')
            )),
            home: false,
        });

        if let Some(action) = action.filter(|a| !a.is_empty() && *a != "list") {
            trail.push(Crumb {
                label: translator.translate(&format!("actions.{action}"), &humanize(action))?,
                href: None,
                home: false,
            });
        }
    }

    Ok(trail)
}

/// Breadcrumb trail for the active route.
///
/// Renders nothing when the trail is shorter than `min_items`. An
/// unregistered resource in the route is an error.
#[component]
pub fn Breadcrumb(
    #[props(default = false)] show_home: bool,
    #[props(default = 1)] min_items: usize,
    /// Resource to describe instead of the one in the route.
    resource: Option<String>,
) -> Element {
    let crud = use_crud();
    let route = use_route_params();

    let descriptor = match resource.as_deref().or(route.resource.as_deref()) {
        Some(identifier) => Some(crud.registry.resolve(Some(identifier))?),
        None => None,
    };
    let trail = breadcrumb_trail(
        descriptor.as_ref(),
        route.action.as_deref(),
        show_home,
        crud.translator.as_ref(),
    )?;

    if trail.len() < min_items.max(1) {
        return rsx! {};
    }
    let last = trail.len() - 1;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "breadcrumb", "aria-label": "breadcrumb",
            ol {
                for (i, crumb) in trail.into_iter().enumerate() {
                    li { key: "{i}", class: "breadcrumb-item",
                        match (crumb.href, crumb.home) {
                            (Some(href), true) => rsx! {
                                a { href: "{href}", "aria-label": "{crumb.label}",
                                    Icon { width: 12, height: 12, icon: FaHouse }
                                }
                            },
                            (Some(href), false) if i != last => rsx! {
                                a { href: "{href}", "{crumb.label}" }
                            },
                            _ => rsx! {
                                span { "aria-current": "page", "{crumb.label}" }
                            },
                        }
                    }
                }
            }
        }
    }
}
