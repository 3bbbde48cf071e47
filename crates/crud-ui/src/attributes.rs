//! Attribute bags ("config bags") forwarded onto layout regions.

use dioxus::prelude::*;

/// Shallow merge of attribute bags.
///
/// Later bags override earlier ones one attribute at a time, keyed on the
/// attribute name and namespace, so `[{a: 1, b: 2}, {b: 3}]` yields
/// `{a: 1, b: 3}`. Unlike [`dioxus_primitives::merge_attributes`], `class`
/// is replaced rather than concatenated.
pub fn merge_bags<I>(bags: I) -> Vec<Attribute>
where
    I: IntoIterator<Item = Vec<Attribute>>,
{
    let mut merged: Vec<Attribute> = Vec::new();
    for bag in bags {
        for attr in bag {
            match merged
                .iter_mut()
                .find(|a| a.name == attr.name && a.namespace == attr.namespace)
            {
                Some(existing) => *existing = attr,
                None => merged.push(attr),
            }
        }
    }
    merged
}

/// Inline style declaration usable inside a bag, e.g. `style_attr("gap", "8px")`.
pub fn style_attr(property: &'static str, value: &'static str) -> Attribute {
    Attribute::new(property, value, Some("style"), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::text_value;
    use pretty_assertions::assert_eq;

    fn attr(name: &'static str, value: &str) -> Attribute {
        Attribute::new(name, value.to_string(), None, false)
    }

    #[test]
    fn later_bag_wins_per_key() {
        let merged = merge_bags([
            vec![attr("data-a", "1"), attr("data-b", "2")],
            vec![attr("data-b", "3")],
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(text_value(&merged, "data-a").as_deref(), Some("1"));
        assert_eq!(text_value(&merged, "data-b").as_deref(), Some("3"));
    }

    #[test]
    fn namespace_is_part_of_the_key() {
        let merged = merge_bags([
            vec![style_attr("gap", "16px")],
            vec![attr("gap", "x"), style_attr("gap", "8px")],
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].namespace, Some("style"));
        assert_eq!(
            merged[0].value,
            dioxus::dioxus_core::AttributeValue::Text("8px".to_string())
        );
    }

    #[test]
    fn empty_bags_merge_to_empty() {
        assert!(merge_bags(Vec::<Vec<Attribute>>::new()).is_empty());
        assert!(merge_bags([vec![], vec![]]).is_empty());
    }
}
