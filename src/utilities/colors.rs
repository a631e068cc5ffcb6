//! Color-chain utilities: backgrounds, SVG paint, accents.

use super::color_utility;
use gcss::ast::AstNode;
use gcss::registry::{Utility, UtilityPriority, UtilityRegistry};
use gcss::value::{infer_type, resolve_color, AllowedTypes, DataType};

pub(super) fn register(registry: &mut UtilityRegistry) {
    registry.add(color_utility(
        "bg",
        "background-color",
        &["background-color", "color"],
    ));
    registry.add(color_utility("fill", "fill", &["fill", "color"]));
    registry.add(stroke());
    registry.add(color_utility("accent", "accent-color", &["color"]));
    registry.add(color_utility("caret", "caret-color", &["color"]));
    registry.add(color_utility(
        "decoration",
        "text-decoration-color",
        &["color"],
    ));
}

/// `stroke-*` splits on inferred type: lengths and bare integers set the
/// stroke width, anything color-shaped sets the paint.
fn stroke() -> Utility {
    Utility::new("stroke", UtilityPriority::ConstrainedFunctional, |c, cx| {
        if c.negative {
            return None;
        }
        let value = c.value()?;
        if let gcss::parser::CandidateValue::Arbitrary(raw) = value {
            match infer_type(
                raw,
                AllowedTypes::COLOR | AllowedTypes::LENGTH | AllowedTypes::LINE_WIDTH,
            )? {
                DataType::Color => {
                    let color =
                        resolve_color(value, c.modifier(), &["stroke", "color"], cx.theme)?;
                    return Some(vec![AstNode::decl("stroke", color)]);
                }
                DataType::LineWidth => {
                    return Some(vec![AstNode::decl("stroke-width", format!("{raw}px"))]);
                }
                _ => return Some(vec![AstNode::decl("stroke-width", raw.clone())]),
            }
        }
        if let gcss::parser::CandidateValue::Named(name) = value {
            if name.parse::<u32>().is_ok() {
                return Some(vec![AstNode::decl("stroke-width", name.clone())]);
            }
        }
        let color = resolve_color(value, c.modifier(), &["stroke", "color"], cx.theme)?;
        Some(vec![AstNode::decl("stroke", color)])
    })
    .with_namespaces(&["stroke", "color"])
}
