use dioxus::prelude::*;

use super::resolve::{
    default_action_bag, default_list_title, is_create_button_visible, normalize_regions,
    resolve_breadcrumb, resolve_header_buttons, BreadcrumbSlot, HeaderButtons, RegionBags,
};
use crate::attributes::merge_bags;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::button::{CreateButton, CreateButtonConfig};
use crate::components::card::{Card, CardAction, CardContent, CardHeader, CardTitle};
use crate::context::{use_crud, use_route_params};

/// Props for [`List`]. Every field is optional; a bare `List {}` inside a
/// resource route renders a complete page shell.
#[derive(Props, Clone, PartialEq)]
pub struct ListProps {
    /// Replaces the generated title.
    pub title: Option<Element>,
    /// Forces the create button on or off.
    pub can_create: Option<bool>,
    /// Resource to describe instead of the one in the active route.
    pub resource: Option<String>,
    /// Forwarded to the create button. Setting it shows the button unless
    /// `can_create` says otherwise.
    pub create_button_props: Option<CreateButtonConfig>,
    /// Replaces the breadcrumb. Any value, including an empty element,
    /// suppresses both the application default and the stock trail.
    pub breadcrumb: Option<Element>,
    pub header_buttons: Option<HeaderButtons>,
    #[props(default)]
    pub header_button_props: Vec<Attribute>,
    #[props(default)]
    pub wrapper_props: Vec<Attribute>,
    #[props(default)]
    pub header_props: Vec<Attribute>,
    #[props(default)]
    pub content_props: Vec<Attribute>,
    /// Deprecated: use `wrapper_props`.
    #[props(default)]
    pub card_props: Vec<Attribute>,
    /// Deprecated: use `header_props`.
    #[props(default)]
    pub card_header_props: Vec<Attribute>,
    /// Deprecated: use `content_props`.
    #[props(default)]
    pub card_content_props: Vec<Attribute>,
    pub children: Element,
}

/// Page shell for a resource's list view: breadcrumb, a header with the
/// title and a create button, and the caller's content.
#[component]
pub fn List(props: ListProps) -> Element {
    let crud = use_crud();
    let route = use_route_params();

    let regions = normalize_regions(RegionBags {
        card_props: props.card_props,
        card_header_props: props.card_header_props,
        card_content_props: props.card_content_props,
        wrapper_props: props.wrapper_props,
        header_props: props.header_props,
        content_props: props.content_props,
    });

    let identifier = props.resource.as_deref().or(route.resource.as_deref());
    let resource = crud.registry.resolve(identifier)?;

    let create_visible = is_create_button_visible(
        props.can_create,
        &resource,
        props.create_button_props.as_ref(),
    );
    tracing::debug!(resource = %resource.name, create_visible, "rendering list layout");

    let breadcrumb = match resolve_breadcrumb(props.breadcrumb, crud.options.breadcrumb.clone()) {
        BreadcrumbSlot::Default => rsx! {
            Breadcrumb { resource: resource.route_or_name().to_string() }
        },
        BreadcrumbSlot::Custom(content) => content,
    };

    let default_buttons = if create_visible {
        let config = props.create_button_props.unwrap_or_default();
        let target = config
            .resource_name_or_route_name
            .unwrap_or_else(|| resource.route_or_name().to_string());
        rsx! {
            CreateButton {
                resource_name_or_route_name: target,
                hide_text: config.hide_text,
                disabled: config.disabled,
                attributes: config.attributes,
            }
        }
    } else {
        VNode::empty()
    };
    let actions = resolve_header_buttons(props.header_buttons.as_ref(), default_buttons);

    let title = match props.title {
        Some(title) => title,
        None => {
            let text = default_list_title(&resource, crud.translator.as_ref())?;
            rsx! { "{text}" }
        }
    };

    let action_bag = merge_bags([default_action_bag(), props.header_button_props]);

    rsx! {
        Card { attributes: regions.wrapper,
            {breadcrumb}
            CardHeader { attributes: regions.header,
                CardTitle { {title} }
                CardAction { attributes: action_bag, {actions} }
            }
            CardContent { attributes: regions.content, {props.children} }
        }
    }
}
