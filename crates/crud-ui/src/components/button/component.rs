use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::context::{use_resource_with_route, use_route_params, use_translate};

/// A link styled as a primary button.
///
/// A disabled button keeps its look but drops the target.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(into)]
    pub href: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", "primary", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let href = (!props.disabled).then_some(props.href);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        a {
            href,
            "aria-disabled": props.disabled,
            ..merged,
            {props.children}
        }
    }
}

/// Settings forwarded from a page layout to its create button.
///
/// Passing this at all (even `CreateButtonConfig::default()`) asks the layout
/// to show the button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateButtonConfig {
    /// Resource to create; defaults to the page's resource.
    pub resource_name_or_route_name: Option<String>,
    pub hide_text: bool,
    pub disabled: bool,
    pub attributes: Vec<Attribute>,
}

/// Path of the create page for a resource route.
pub fn create_path(route: &str) -> String {
    format!("/{}/create", route.trim_start_matches('/'))
}

/// Link to the create page of a resource, labelled "Create" with a plus icon.
#[component]
pub fn CreateButton(
    /// Route segment or name of the resource; falls back to the active route.
    resource_name_or_route_name: Option<String>,
    #[props(default = false)] hide_text: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] attributes: Vec<Attribute>,
) -> Element {
    let resolver = use_resource_with_route();
    let translate = use_translate();
    let route = use_route_params();

    let identifier = resource_name_or_route_name.as_deref().or(route.resource.as_deref());
    let resource = resolver.resolve(identifier)?;
    let label = translate.t("buttons.create", "Create")?;

    let mut bag = vec![
        Attribute::new("class", "create-button", None, false),
        Attribute::new("data-resource", resource.name.clone(), None, false),
    ];
    if hide_text {
        bag.push(Attribute::new("aria-label", label.clone(), None, false));
        bag.push(Attribute::new("title", label.clone(), None, false));
    }
    bag.extend(attributes);

    rsx! {
        Button {
            href: create_path(resource.route_or_name()),
            disabled,
            attributes: bag,
            Icon { width: 14, height: 14, icon: FaPlus }
            if !hide_text {
                span { "{label}" }
            }
        }
    }
}
