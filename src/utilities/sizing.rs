//! Width, height, and min/max sizing utilities.

use super::spacing_utility;
use gcss::ast::AstNode;
use gcss::parser::CandidateValue;
use gcss::registry::{Utility, UtilityPriority, UtilityRegistry};
use gcss::value::resolve_spacing;

const WIDTH_KEYWORDS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("full", "100%"),
    ("screen", "100vw"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const HEIGHT_KEYWORDS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("full", "100%"),
    ("screen", "100vh"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const MIN_WIDTH_KEYWORDS: &[(&str, &str)] = &[
    ("full", "100%"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const MAX_WIDTH_KEYWORDS: &[(&str, &str)] = &[
    ("none", "none"),
    ("full", "100%"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

pub(super) fn register(registry: &mut UtilityRegistry) {
    registry.add(spacing_utility("w", &["width"], false, WIDTH_KEYWORDS));
    registry.add(spacing_utility("h", &["height"], false, HEIGHT_KEYWORDS));
    registry.add(spacing_utility(
        "min-w",
        &["min-width"],
        false,
        MIN_WIDTH_KEYWORDS,
    ));
    registry.add(spacing_utility(
        "min-h",
        &["min-height"],
        false,
        MIN_WIDTH_KEYWORDS,
    ));
    registry.add(max_size("max-w", "max-width", &["container"]));
    registry.add(max_size("max-h", "max-height", &[]));
    registry.add(spacing_utility(
        "size",
        &["width", "height"],
        false,
        WIDTH_KEYWORDS,
    ));
}

/// `max-w-*` consults the container-size namespace before the spacing
/// scale, so `max-w-md` reads `--container-md`.
fn max_size(
    root: &'static str,
    property: &'static str,
    namespaces: &'static [&'static str],
) -> Utility {
    Utility::new(root, UtilityPriority::StandardFunctional, move |c, cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let value = c.value()?;
        if let CandidateValue::Named(name) = value {
            if let Some((_, keyword)) = MAX_WIDTH_KEYWORDS.iter().find(|(k, _)| *k == name) {
                return Some(vec![AstNode::decl(property, *keyword)]);
            }
            if !namespaces.is_empty() {
                if let Some(resolved) = cx.theme.resolve_var(name, namespaces) {
                    return Some(vec![AstNode::decl(property, resolved)]);
                }
            }
        }
        let resolved = resolve_spacing(value, false, cx.theme)?;
        Some(vec![AstNode::decl(property, resolved)])
    })
    .with_namespaces(namespaces)
}
