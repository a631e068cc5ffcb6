//! Typography utilities.
//!
//! The `text-*` root is overloaded: font sizes (`text-lg`) and colors
//! (`text-red-500`) share it. The size handler registers at
//! `NamespaceHandler` priority so it pre-empts the generic color chain,
//! and declines anything outside the `--text-*` namespace.

use super::{color_utility, register_statics};
use gcss::ast::AstNode;
use gcss::parser::CandidateValue;
use gcss::registry::{Utility, UtilityPriority, UtilityRegistry};
use gcss::value::{infer_type, AllowedTypes};

const STATICS: &[(&str, &[(&str, &str)])] = &[
    // Text alignment
    ("text-left", &[("text-align", "left")]),
    ("text-center", &[("text-align", "center")]),
    ("text-right", &[("text-align", "right")]),
    ("text-justify", &[("text-align", "justify")]),
    // Style / weight modifiers as fixed literals
    ("italic", &[("font-style", "italic")]),
    ("not-italic", &[("font-style", "normal")]),
    ("underline", &[("text-decoration-line", "underline")]),
    ("overline", &[("text-decoration-line", "overline")]),
    ("line-through", &[("text-decoration-line", "line-through")]),
    ("no-underline", &[("text-decoration-line", "none")]),
    // Transform
    ("uppercase", &[("text-transform", "uppercase")]),
    ("lowercase", &[("text-transform", "lowercase")]),
    ("capitalize", &[("text-transform", "capitalize")]),
    ("normal-case", &[("text-transform", "none")]),
    // Wrapping / overflow
    (
        "truncate",
        &[
            ("overflow", "hidden"),
            ("text-overflow", "ellipsis"),
            ("white-space", "nowrap"),
        ],
    ),
    ("text-ellipsis", &[("text-overflow", "ellipsis")]),
    ("text-clip", &[("text-overflow", "clip")]),
    ("text-wrap", &[("text-wrap", "wrap")]),
    ("text-nowrap", &[("text-wrap", "nowrap")]),
    ("text-balance", &[("text-wrap", "balance")]),
    ("text-pretty", &[("text-wrap", "pretty")]),
    // Smoothing
    (
        "antialiased",
        &[
            ("-webkit-font-smoothing", "antialiased"),
            ("-moz-osx-font-smoothing", "grayscale"),
        ],
    ),
    (
        "subpixel-antialiased",
        &[
            ("-webkit-font-smoothing", "auto"),
            ("-moz-osx-font-smoothing", "auto"),
        ],
    ),
];

pub(super) fn register(registry: &mut UtilityRegistry) {
    register_statics(registry, STATICS);

    registry.add(text_size());
    registry.add(color_utility("text", "color", &["text-color", "color"]));
    registry.add(font());
    registry.add(leading());
    registry.add(tracking());
}

/// `text-lg` → font-size plus the paired default line-height. A `/n`
/// modifier overrides the line height (`text-lg/7`).
fn text_size() -> Utility {
    Utility::new("text", UtilityPriority::NamespaceHandler, |c, cx| {
        match c.value()? {
            CandidateValue::Named(name) => {
                let size = cx.theme.resolve_var(name, &["text"])?;
                let line_height = match c.modifier() {
                    Some(modifier) => line_height_modifier(modifier.text(), cx)?,
                    None => cx.theme.var(&format!("--text-{name}--line-height"))?,
                };
                Some(vec![
                    AstNode::decl("font-size", size),
                    AstNode::decl("line-height", line_height),
                ])
            }
            CandidateValue::Arbitrary(raw) => {
                // Size-shaped arbitrary values only; color literals fall
                // through to the color handler for this root.
                infer_type(
                    raw,
                    AllowedTypes::LENGTH
                        | AllowedTypes::PERCENTAGE
                        | AllowedTypes::ABSOLUTE_SIZE
                        | AllowedTypes::RELATIVE_SIZE,
                )?;
                let mut nodes = vec![AstNode::decl("font-size", raw.clone())];
                if let Some(modifier) = c.modifier() {
                    nodes.push(AstNode::decl(
                        "line-height",
                        line_height_modifier(modifier.text(), cx)?,
                    ));
                }
                Some(nodes)
            }
            CandidateValue::Fraction(_) => None,
        }
    })
    .with_namespaces(&["text"])
}

fn line_height_modifier(text: &str, cx: &mut gcss::registry::CompileCx<'_>) -> Option<String> {
    if let Some(resolved) = cx.theme.resolve_var(text, &["leading"]) {
        return Some(resolved);
    }
    if text.parse::<f64>().is_ok() {
        let unit = cx.theme.var("--spacing")?;
        return Some(format!("calc({unit} * {text})"));
    }
    infer_type(text, AllowedTypes::LENGTH | AllowedTypes::NUMBER).map(|_| text.to_string())
}

/// `font-*` resolves weights (`font-bold`) before families (`font-sans`).
fn font() -> Utility {
    Utility::new("font", UtilityPriority::StandardFunctional, |c, cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        match c.value()? {
            CandidateValue::Named(name) => {
                if let Some(weight) = cx.theme.resolve_var(name, &["font-weight"]) {
                    return Some(vec![AstNode::decl("font-weight", weight)]);
                }
                let family = cx.theme.resolve_var(name, &["font"])?;
                Some(vec![AstNode::decl("font-family", family)])
            }
            CandidateValue::Arbitrary(raw) => {
                if infer_type(raw, AllowedTypes::NUMBER).is_some() {
                    Some(vec![AstNode::decl("font-weight", raw.clone())])
                } else {
                    Some(vec![AstNode::decl("font-family", raw.clone())])
                }
            }
            CandidateValue::Fraction(_) => None,
        }
    })
    .with_namespaces(&["font-weight", "font"])
}

fn leading() -> Utility {
    Utility::new("leading", UtilityPriority::StandardFunctional, |c, cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let value = match c.value()? {
            CandidateValue::Named(name) => match cx.theme.resolve_var(name, &["leading"]) {
                Some(resolved) => resolved,
                None => {
                    name.parse::<f64>().ok()?;
                    let unit = cx.theme.var("--spacing")?;
                    format!("calc({unit} * {name})")
                }
            },
            CandidateValue::Arbitrary(raw) => {
                infer_type(raw, AllowedTypes::LENGTH | AllowedTypes::NUMBER)?;
                raw.clone()
            }
            CandidateValue::Fraction(_) => return None,
        };
        Some(vec![AstNode::decl("line-height", value)])
    })
    .with_namespaces(&["leading", "spacing"])
}

fn tracking() -> Utility {
    Utility::new("tracking", UtilityPriority::StandardFunctional, |c, cx| {
        if c.modifier().is_some() {
            return None;
        }
        let value = match c.value()? {
            CandidateValue::Named(name) => {
                if c.negative {
                    let literal = cx.theme.resolve(name, &["tracking"])?;
                    format!("calc({literal} * -1)")
                } else {
                    cx.theme.resolve_var(name, &["tracking"])?
                }
            }
            CandidateValue::Arbitrary(raw) => {
                infer_type(raw, AllowedTypes::LENGTH)?;
                if c.negative {
                    format!("calc({raw} * -1)")
                } else {
                    raw.clone()
                }
            }
            CandidateValue::Fraction(_) => return None,
        };
        Some(vec![AstNode::decl("letter-spacing", value)])
    })
    .with_namespaces(&["tracking"])
}
