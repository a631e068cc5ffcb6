//! Border width/color/style, radius, ring, and outline utilities.
//!
//! The `border-*` family is the canonical constrained-functional shape:
//! one root serving two declaration families, split by value type. A bare
//! integer or length-shaped arbitrary value sets widths; a palette token
//! or color-shaped value sets colors; the namespace chain for colors is
//! `--border-color-*` then `--color-*`.

use gcss::ast::AstNode;
use gcss::parser::CandidateValue;
use gcss::registry::{CompileCx, Utility, UtilityPriority, UtilityRegistry};
use gcss::value::{
    infer_type, resolve_color, resolve_line_width, AllowedTypes, DataType,
};

const BORDER_COLOR_CHAIN: &[&str] = &["border-color", "color"];

const STYLE_STATICS: &[(&str, &str)] = &[
    ("border-solid", "solid"),
    ("border-dashed", "dashed"),
    ("border-dotted", "dotted"),
    ("border-double", "double"),
    ("border-hidden", "hidden"),
    ("border-none", "none"),
];

pub(super) fn register(registry: &mut UtilityRegistry) {
    for (root, style) in STYLE_STATICS {
        registry.add(Utility::stat(*root, &[("border-style", style)]));
    }

    for (root, width_props, color_props) in [
        (
            "border",
            &["border-width"] as &'static [&'static str],
            &["border-color"] as &'static [&'static str],
        ),
        (
            "border-x",
            &["border-left-width", "border-right-width"],
            &["border-left-color", "border-right-color"],
        ),
        (
            "border-y",
            &["border-top-width", "border-bottom-width"],
            &["border-top-color", "border-bottom-color"],
        ),
        ("border-t", &["border-top-width"], &["border-top-color"]),
        ("border-r", &["border-right-width"], &["border-right-color"]),
        ("border-b", &["border-bottom-width"], &["border-bottom-color"]),
        ("border-l", &["border-left-width"], &["border-left-color"]),
    ] {
        registry.add(border_side(root, width_props, color_props));
    }

    for (root, properties) in [
        ("rounded", &["border-radius"] as &'static [&'static str]),
        (
            "rounded-t",
            &["border-top-left-radius", "border-top-right-radius"],
        ),
        (
            "rounded-r",
            &["border-top-right-radius", "border-bottom-right-radius"],
        ),
        (
            "rounded-b",
            &["border-bottom-left-radius", "border-bottom-right-radius"],
        ),
        (
            "rounded-l",
            &["border-top-left-radius", "border-bottom-left-radius"],
        ),
        ("rounded-tl", &["border-top-left-radius"]),
        ("rounded-tr", &["border-top-right-radius"]),
        ("rounded-br", &["border-bottom-right-radius"]),
        ("rounded-bl", &["border-bottom-left-radius"]),
    ] {
        registry.add(rounded(root, properties));
    }

    registry.add(ring_width());
    registry.add(ring_color());
    registry.add(outline());
    registry.add(color_chain_outline());
}

/// One `border*` root handling the width/color dispatch.
fn border_side(
    root: &'static str,
    width_props: &'static [&'static str],
    color_props: &'static [&'static str],
) -> Utility {
    Utility::new(root, UtilityPriority::ConstrainedFunctional, move |c, cx| {
        if c.negative {
            return None;
        }
        let Some(value) = c.value() else {
            // Bare `border` defaults to a hairline width.
            if c.modifier().is_some() {
                return None;
            }
            return Some(decls(width_props, "1px"));
        };

        if let CandidateValue::Arbitrary(raw) = value {
            return match infer_type(
                raw,
                AllowedTypes::COLOR | AllowedTypes::LENGTH | AllowedTypes::LINE_WIDTH,
            )? {
                DataType::Color => {
                    let color = resolve_color(value, c.modifier(), BORDER_COLOR_CHAIN, cx.theme)?;
                    Some(decls(color_props, &color))
                }
                _ => {
                    let width = resolve_line_width(value)?;
                    Some(decls(width_props, &width))
                }
            };
        }

        if let Some(width) = resolve_line_width(value) {
            if c.modifier().is_some() {
                return None;
            }
            return Some(decls(width_props, &width));
        }
        let color = resolve_color(value, c.modifier(), BORDER_COLOR_CHAIN, cx.theme)?;
        Some(decls(color_props, &color))
    })
    .with_namespaces(BORDER_COLOR_CHAIN)
}

fn rounded(root: &'static str, properties: &'static [&'static str]) -> Utility {
    Utility::new(root, UtilityPriority::StandardFunctional, move |c, cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let value = match c.value() {
            None => cx.theme.resolve_var("sm", &["radius"])?,
            Some(CandidateValue::Named(name)) => match name.as_str() {
                "none" => "0".to_string(),
                "full" => "calc(infinity * 1px)".to_string(),
                _ => cx.theme.resolve_var(name, &["radius"])?,
            },
            Some(CandidateValue::Arbitrary(raw)) => {
                infer_type(raw, AllowedTypes::LENGTH | AllowedTypes::PERCENTAGE)?;
                raw.clone()
            }
            Some(CandidateValue::Fraction(_)) => return None,
        };
        Some(decls(properties, &value))
    })
    .with_namespaces(&["radius"])
}

/// Ring width: a box-shadow composed through the `--gale-ring-color`
/// slot, whose process-wide default registers once per batch.
fn ring_width() -> Utility {
    Utility::new("ring", UtilityPriority::ConstrainedFunctional, |c, cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let width = match c.value() {
            None => "1px".to_string(),
            Some(value) => resolve_line_width(value)?,
        };
        register_ring_color(cx);
        Some(vec![AstNode::decl(
            "box-shadow",
            format!("0 0 0 {width} var(--gale-ring-color)"),
        )])
    })
}

/// Ring color: writes the slot the width utility reads.
fn ring_color() -> Utility {
    Utility::new("ring", UtilityPriority::StandardFunctional, |c, cx| {
        if c.negative {
            return None;
        }
        let color = resolve_color(c.value()?, c.modifier(), &["ring-color", "color"], cx.theme)?;
        register_ring_color(cx);
        Some(vec![AstNode::decl("--gale-ring-color", color)])
    })
    .with_namespaces(&["ring-color", "color"])
}

fn register_ring_color(cx: &mut CompileCx<'_>) {
    cx.properties
        .register("--gale-ring-color", "*", false, Some("currentcolor"));
}

fn outline() -> Utility {
    Utility::new("outline", UtilityPriority::ConstrainedFunctional, |c, _cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let width = match c.value() {
            None => "1px".to_string(),
            Some(CandidateValue::Named(name)) if name == "none" => {
                return Some(vec![
                    AstNode::decl("outline", "2px solid transparent"),
                    AstNode::decl("outline-offset", "2px"),
                ]);
            }
            Some(value) => resolve_line_width(value)?,
        };
        Some(vec![AstNode::decl("outline-width", width)])
    })
}

fn color_chain_outline() -> Utility {
    Utility::new("outline", UtilityPriority::StandardFunctional, |c, cx| {
        if c.negative {
            return None;
        }
        let color = resolve_color(
            c.value()?,
            c.modifier(),
            &["outline-color", "color"],
            cx.theme,
        )?;
        Some(vec![AstNode::decl("outline-color", color)])
    })
    .with_namespaces(&["outline-color", "color"])
}

fn decls(properties: &[&str], value: &str) -> Vec<AstNode> {
    properties
        .iter()
        .map(|p| AstNode::decl(*p, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::default_theme;
    use gcss::ast::PropertyRegistry;
    use gcss::parser::parse_candidate;
    use gcss::theme::ThemeTracker;
    use gcss::registry::UtilityRegistry;

    fn compile(raw: &str) -> Option<Vec<AstNode>> {
        let mut registry = UtilityRegistry::new();
        register(&mut registry);
        let theme = default_theme();
        let tracker = ThemeTracker::new(&theme);
        let mut properties = PropertyRegistry::new();
        let candidate = parse_candidate(raw, &registry).ok()?;
        let mut cx = CompileCx {
            theme: &tracker,
            properties: &mut properties,
        };
        registry.dispatch(&candidate, &mut cx)
    }

    #[test]
    fn test_border_length_is_width_not_color() {
        let nodes = compile("border-[3px]").unwrap();
        assert_eq!(nodes, vec![AstNode::decl("border-width", "3px")]);
    }

    #[test]
    fn test_border_color_literal_is_color_not_width() {
        let nodes = compile("border-[red]").unwrap();
        assert_eq!(nodes, vec![AstNode::decl("border-color", "red")]);
    }

    #[test]
    fn test_border_palette_token() {
        let nodes = compile("border-red-500").unwrap();
        assert_eq!(
            nodes,
            vec![AstNode::decl("border-color", "var(--color-red-500)")]
        );
    }

    #[test]
    fn test_bare_border_defaults_to_hairline() {
        let nodes = compile("border").unwrap();
        assert_eq!(nodes, vec![AstNode::decl("border-width", "1px")]);
    }

    #[test]
    fn test_ring_width_and_color_share_slot() {
        let nodes = compile("ring-2").unwrap();
        assert_eq!(
            nodes,
            vec![AstNode::decl(
                "box-shadow",
                "0 0 0 2px var(--gale-ring-color)"
            )]
        );

        let nodes = compile("ring-red-500").unwrap();
        assert_eq!(
            nodes,
            vec![AstNode::decl(
                "--gale-ring-color",
                "var(--color-red-500)"
            )]
        );
    }
}
