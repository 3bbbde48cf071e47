use dioxus::prelude::*;

use crate::attributes::style_attr;

fn with_base(class: &'static str, bag: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, bag])
}

/// Bordered container that wraps a whole scaffolded page.
///
/// `attributes` is forwarded onto the outer element after the base class,
/// so callers can add classes, ids, data attributes or inline styles.
#[component]
pub fn Card(#[props(default)] attributes: Vec<Attribute>, children: Element) -> Element {
    let merged = with_base("card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Header row of a Card: title on the left, actions on the right, wrapping
/// onto a second line when space runs out.
#[component]
pub fn CardHeader(#[props(default)] attributes: Vec<Attribute>, children: Element) -> Element {
    let mut bag = vec![style_attr("display", "flex"), style_attr("flex-wrap", "wrap")];
    bag.extend(attributes);
    let merged = with_base("card-header", bag);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Page title inside a CardHeader.
#[component]
pub fn CardTitle(#[props(default)] attributes: Vec<Attribute>, children: Element) -> Element {
    let merged = with_base("card-title", attributes);

    rsx! {
        h5 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardAction(#[props(default)] attributes: Vec<Attribute>, children: Element) -> Element {
    let merged = with_base("card-action", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Body of a Card; page content is rendered here verbatim.
#[component]
pub fn CardContent(#[props(default)] attributes: Vec<Attribute>, children: Element) -> Element {
    let merged = with_base("card-content", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
