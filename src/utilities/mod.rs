//! Built-in utility registrations.
//!
//! Every concrete utility is a data-driven registration over the core
//! contracts: a root, a priority, and a compile closure composed from the
//! free resolver functions in `gcss::value`. There is no utility type
//! hierarchy — a static table entry, a spacing-scale lookup, and a
//! color-chain lookup are all just closures over the same [`Utility`]
//! shape.
//!
//! ## Submodules
//!
//! - [`layout`]: Display, position, flex/grid, overflow, inset, z-index
//! - [`spacing`]: Margin, padding, gap, space-between
//! - [`sizing`]: Width, height, min/max sizes
//! - [`typography`]: Font size/family/weight, leading, tracking
//! - [`colors`]: Background, text, fill, stroke, accent, caret colors
//! - [`borders`]: Border width/color/style, radius, ring, outline
//! - [`effects`]: Opacity, shadow, blur

pub mod borders;
pub mod colors;
pub mod effects;
pub mod layout;
pub mod sizing;
pub mod spacing;
pub mod typography;

use gcss::ast::AstNode;
use gcss::parser::CandidateValue;
use gcss::registry::{Utility, UtilityPriority, UtilityRegistry};
use gcss::value::{resolve_color, resolve_spacing};

/// Registers the full built-in utility set.
pub fn register_all(registry: &mut UtilityRegistry) {
    layout::register(registry);
    spacing::register(registry);
    sizing::register(registry);
    typography::register(registry);
    colors::register(registry);
    borders::register(registry);
    effects::register(registry);
}

/// A color utility: one property fed by a theme namespace chain, with
/// opacity modifier support.
pub(crate) fn color_utility(
    root: &'static str,
    property: &'static str,
    namespaces: &'static [&'static str],
) -> Utility {
    Utility::new(root, UtilityPriority::StandardFunctional, move |c, cx| {
        if c.negative {
            return None;
        }
        let value = resolve_color(c.value()?, c.modifier(), namespaces, cx.theme)?;
        Some(vec![AstNode::decl(property, value)])
    })
    .with_namespaces(namespaces)
}

/// A spacing-scale utility: N properties fed by numeric multiples of
/// `--spacing`, plus per-utility keyword entries (`auto`, `full`, …).
pub(crate) fn spacing_utility(
    root: &'static str,
    properties: &'static [&'static str],
    allow_negative: bool,
    keywords: &'static [(&'static str, &'static str)],
) -> Utility {
    Utility::new(root, UtilityPriority::StandardFunctional, move |c, cx| {
        if (c.negative && !allow_negative) || c.modifier().is_some() {
            return None;
        }
        let value = c.value()?;
        if let CandidateValue::Named(name) = value {
            if let Some((_, keyword_value)) = keywords.iter().find(|(k, _)| *k == name) {
                if c.negative {
                    return None;
                }
                return Some(
                    properties
                        .iter()
                        .map(|p| AstNode::decl(*p, *keyword_value))
                        .collect(),
                );
            }
        }
        let resolved = resolve_spacing(value, c.negative, cx.theme)?;
        Some(
            properties
                .iter()
                .map(|p| AstNode::decl(*p, resolved.clone()))
                .collect(),
        )
    })
    .with_namespaces(&["spacing"])
}

/// Registers a batch of exact-static utilities from a declaration table.
pub(crate) fn register_statics(
    registry: &mut UtilityRegistry,
    table: &[(&str, &[(&str, &str)])],
) {
    for (root, declarations) in table {
        registry.add(Utility::stat(*root, declarations));
    }
}
