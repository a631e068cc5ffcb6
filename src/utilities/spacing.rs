//! Margin, padding, gap, and space-between utilities.

use super::spacing_utility;
use gcss::ast::AstNode;
use gcss::registry::{Utility, UtilityPriority, UtilityRegistry};
use gcss::value::resolve_spacing;

const MARGIN_KEYWORDS: &[(&str, &str)] = &[("auto", "auto")];
const NO_KEYWORDS: &[(&str, &str)] = &[];

pub(super) fn register(registry: &mut UtilityRegistry) {
    for (root, properties) in [
        ("m", &["margin"] as &'static [&'static str]),
        ("mx", &["margin-left", "margin-right"]),
        ("my", &["margin-top", "margin-bottom"]),
        ("mt", &["margin-top"]),
        ("mr", &["margin-right"]),
        ("mb", &["margin-bottom"]),
        ("ml", &["margin-left"]),
    ] {
        registry.add(spacing_utility(root, properties, true, MARGIN_KEYWORDS));
    }

    for (root, properties) in [
        ("p", &["padding"] as &'static [&'static str]),
        ("px", &["padding-left", "padding-right"]),
        ("py", &["padding-top", "padding-bottom"]),
        ("pt", &["padding-top"]),
        ("pr", &["padding-right"]),
        ("pb", &["padding-bottom"]),
        ("pl", &["padding-left"]),
    ] {
        registry.add(spacing_utility(root, properties, false, NO_KEYWORDS));
    }

    for (root, properties) in [
        ("gap", &["gap"] as &'static [&'static str]),
        ("gap-x", &["column-gap"]),
        ("gap-y", &["row-gap"]),
    ] {
        registry.add(spacing_utility(root, properties, false, NO_KEYWORDS));
    }

    registry.add(space_between("space-x", "margin-left"));
    registry.add(space_between("space-y", "margin-top"));
}

/// `space-x-4` puts margin between siblings via a child-combinator rule.
fn space_between(root: &'static str, property: &'static str) -> Utility {
    Utility::new(root, UtilityPriority::StandardFunctional, move |c, cx| {
        if c.modifier().is_some() {
            return None;
        }
        let resolved = resolve_spacing(c.value()?, c.negative, cx.theme)?;
        Some(vec![AstNode::NestedRule {
            selector: "& > :not(:last-child)".to_string(),
            children: vec![AstNode::decl(property, resolved)],
        }])
    })
    .with_namespaces(&["spacing"])
}
