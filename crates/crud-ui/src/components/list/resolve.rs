//! Prop resolution for the list layout, kept free of rendering so each
//! decision can be checked on its own.

use crud_types::{CrudError, Plurality, ResourceDescriptor, Translator};
use dioxus::prelude::*;

use crate::attributes::{merge_bags, style_attr};
use crate::components::button::CreateButtonConfig;

/// Argument handed to [`HeaderButtons::Customize`].
pub struct DefaultButtons {
    /// What the header would show without customization: the create button,
    /// or nothing when it is hidden.
    pub default_buttons: Element,
}

/// Replacement for the header action area.
#[derive(Clone, PartialEq)]
pub enum HeaderButtons {
    /// Show this content instead of the default buttons.
    Replace(Element),
    /// Build the content from the default buttons.
    Customize(Callback<DefaultButtons, Element>),
}

impl HeaderButtons {
    /// Must be called while a component is rendering.
    pub fn customize(f: impl FnMut(DefaultButtons) -> Element + 'static) -> Self {
        HeaderButtons::Customize(Callback::new(f))
    }
}

/// What goes above the card header.
#[derive(Clone, PartialEq)]
pub enum BreadcrumbSlot {
    /// The stock breadcrumb trail for the active route.
    Default,
    /// Caller-supplied content, rendered as given even when empty.
    Custom(Element),
}

/// Attribute bags for the three card regions after deprecated aliases are folded in.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Regions {
    pub wrapper: Vec<Attribute>,
    pub header: Vec<Attribute>,
    pub content: Vec<Attribute>,
}

/// Region bags as passed to the layout, deprecated aliases included.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct RegionBags {
    pub card_props: Vec<Attribute>,
    pub card_header_props: Vec<Attribute>,
    pub card_content_props: Vec<Attribute>,
    pub wrapper_props: Vec<Attribute>,
    pub header_props: Vec<Attribute>,
    pub content_props: Vec<Attribute>,
}

/// Fold deprecated `card*_props` into their replacements.
///
/// The replacement bag wins per attribute, so `card_props = {a: 1, b: 2}`
/// with `wrapper_props = {b: 3}` gives the wrapper `{a: 1, b: 3}`.
pub fn normalize_regions(bags: RegionBags) -> Regions {
    let legacy = [
        ("card_props", &bags.card_props),
        ("card_header_props", &bags.card_header_props),
        ("card_content_props", &bags.card_content_props),
    ];
    for (name, bag) in legacy {
        if !bag.is_empty() {
            tracing::warn!(prop = name, "deprecated list layout prop in use");
        }
    }

    Regions {
        wrapper: merge_bags([bags.card_props, bags.wrapper_props]),
        header: merge_bags([bags.card_header_props, bags.header_props]),
        content: merge_bags([bags.card_content_props, bags.content_props]),
    }
}

/// An explicit `can_create` always decides. Otherwise the button shows when
/// the resource allows creation or the caller configured the button.
pub fn is_create_button_visible(
    can_create: Option<bool>,
    resource: &ResourceDescriptor,
    create_button_props: Option<&CreateButtonConfig>,
) -> bool {
    can_create.unwrap_or(resource.can_create || create_button_props.is_some())
}

/// Page breadcrumb, then the application default, then the stock trail.
pub fn resolve_breadcrumb(
    from_props: Option<Element>,
    from_options: Option<Element>,
) -> BreadcrumbSlot {
    match from_props.or(from_options) {
        Some(content) => BreadcrumbSlot::Custom(content),
        None => BreadcrumbSlot::Default,
    }
}

pub fn resolve_header_buttons(
    header_buttons: Option<&HeaderButtons>,
    default_buttons: Element,
) -> Element {
    match header_buttons {
        Some(HeaderButtons::Customize(build)) => build.call(DefaultButtons { default_buttons }),
        Some(HeaderButtons::Replace(content)) => content.clone(),
        None => default_buttons,
    }
}

/// Translation key of a resource's list title, e.g. `posts.titles.list`.
pub fn list_title_key(resource: &ResourceDescriptor) -> String {
    format!("{}.titles.list", resource.name)
}

pub fn default_list_title(
    resource: &ResourceDescriptor,
    translator: &dyn Translator,
) -> Result<String, CrudError> {
    translator.translate(
        &list_title_key(resource),
        &resource.display_label(Plurality::Plural),
    )
}

/// Layout of the header action area before caller overrides.
pub fn default_action_bag() -> Vec<Attribute> {
    vec![style_attr("display", "flex"), style_attr("gap", "16px")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::text_value;
    use crud_types::{CatalogTranslator, CrudErrorKind, FallbackTranslator};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn data(name: &'static str, value: &str) -> Attribute {
        Attribute::new(name, value.to_string(), None, false)
    }

    #[test]
    fn explicit_false_always_hides() {
        let resource = ResourceDescriptor::new("posts").creatable(true);
        let config = CreateButtonConfig::default();
        assert!(!is_create_button_visible(Some(false), &resource, None));
        assert!(!is_create_button_visible(Some(false), &resource, Some(&config)));
    }

    #[test]
    fn explicit_true_always_shows() {
        let resource = ResourceDescriptor::new("posts");
        assert!(is_create_button_visible(Some(true), &resource, None));
    }

    #[test]
    fn resource_capability_shows_by_default() {
        let resource = ResourceDescriptor::new("posts").creatable(true);
        assert!(is_create_button_visible(None, &resource, None));
        let readonly = ResourceDescriptor::new("logs");
        assert!(!is_create_button_visible(None, &readonly, None));
    }

    #[test]
    fn empty_button_config_implies_visible() {
        let readonly = ResourceDescriptor::new("logs");
        let config = CreateButtonConfig::default();
        assert!(is_create_button_visible(None, &readonly, Some(&config)));
    }

    #[test]
    fn any_breadcrumb_value_is_custom() {
        assert!(matches!(
            resolve_breadcrumb(Some(VNode::empty()), None),
            BreadcrumbSlot::Custom(_)
        ));
        assert!(matches!(
            resolve_breadcrumb(None, Some(VNode::empty())),
            BreadcrumbSlot::Custom(_)
        ));
    }

    #[test]
    fn breadcrumb_falls_back_to_default_trail() {
        assert!(matches!(
            resolve_breadcrumb(None, None),
            BreadcrumbSlot::Default
        ));
    }

    #[test]
    fn legacy_bags_merge_under_new_ones() {
        let regions = normalize_regions(RegionBags {
            card_props: vec![data("data-a", "1"), data("data-b", "2")],
            wrapper_props: vec![data("data-b", "3")],
            card_content_props: vec![data("data-c", "legacy")],
            ..Default::default()
        });
        assert_eq!(regions.wrapper.len(), 2);
        assert_eq!(text_value(&regions.wrapper, "data-a").as_deref(), Some("1"));
        assert_eq!(text_value(&regions.wrapper, "data-b").as_deref(), Some("3"));
        assert!(regions.header.is_empty());
        assert_eq!(
            text_value(&regions.content, "data-c").as_deref(),
            Some("legacy")
        );
    }

    #[test]
    fn title_uses_translation_then_label() {
        let posts = ResourceDescriptor::new("posts");
        assert_eq!(list_title_key(&posts), "posts.titles.list");
        assert_eq!(default_list_title(&posts, &FallbackTranslator).unwrap(), "Posts");

        let labelled = ResourceDescriptor::new("blog_posts").with_label("blogEntry");
        assert_eq!(
            default_list_title(&labelled, &FallbackTranslator).unwrap(),
            "Blog entries"
        );

        let catalog = CatalogTranslator::new(HashMap::from([(
            "posts.titles.list".to_string(),
            "All posts".to_string(),
        )]));
        assert_eq!(default_list_title(&posts, &catalog).unwrap(), "All posts");
    }

    #[test]
    fn title_translation_errors_propagate() {
        let unnamed = ResourceDescriptor::new("");
        let err = default_list_title(&unnamed, &CatalogTranslator::default()).unwrap_err();
        assert_eq!(err.kind, CrudErrorKind::Translation);
    }
}
