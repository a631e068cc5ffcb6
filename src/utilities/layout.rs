//! Display, position, flex/grid, overflow, inset, and z-index utilities.

use super::{register_statics, spacing_utility};
use gcss::ast::AstNode;
use gcss::parser::CandidateValue;
use gcss::registry::{Utility, UtilityPriority, UtilityRegistry};
use gcss::value::{infer_type, AllowedTypes};

const STATICS: &[(&str, &[(&str, &str)])] = &[
    // Display
    ("block", &[("display", "block")]),
    ("inline-block", &[("display", "inline-block")]),
    ("inline", &[("display", "inline")]),
    ("flex", &[("display", "flex")]),
    ("inline-flex", &[("display", "inline-flex")]),
    ("grid", &[("display", "grid")]),
    ("inline-grid", &[("display", "inline-grid")]),
    ("contents", &[("display", "contents")]),
    ("flow-root", &[("display", "flow-root")]),
    ("table", &[("display", "table")]),
    ("table-row", &[("display", "table-row")]),
    ("table-cell", &[("display", "table-cell")]),
    ("hidden", &[("display", "none")]),
    // Position
    ("static", &[("position", "static")]),
    ("fixed", &[("position", "fixed")]),
    ("absolute", &[("position", "absolute")]),
    ("relative", &[("position", "relative")]),
    ("sticky", &[("position", "sticky")]),
    // Visibility
    ("visible", &[("visibility", "visible")]),
    ("invisible", &[("visibility", "hidden")]),
    ("collapse", &[("visibility", "collapse")]),
    // Isolation
    ("isolate", &[("isolation", "isolate")]),
    ("isolation-auto", &[("isolation", "auto")]),
    // Flex direction / wrap
    ("flex-row", &[("flex-direction", "row")]),
    ("flex-row-reverse", &[("flex-direction", "row-reverse")]),
    ("flex-col", &[("flex-direction", "column")]),
    ("flex-col-reverse", &[("flex-direction", "column-reverse")]),
    ("flex-wrap", &[("flex-wrap", "wrap")]),
    ("flex-wrap-reverse", &[("flex-wrap", "wrap-reverse")]),
    ("flex-nowrap", &[("flex-wrap", "nowrap")]),
    // Flex shorthands
    ("flex-1", &[("flex", "1")]),
    ("flex-auto", &[("flex", "1 1 auto")]),
    ("flex-initial", &[("flex", "0 1 auto")]),
    ("flex-none", &[("flex", "none")]),
    ("grow", &[("flex-grow", "1")]),
    ("grow-0", &[("flex-grow", "0")]),
    ("shrink", &[("flex-shrink", "1")]),
    ("shrink-0", &[("flex-shrink", "0")]),
    // Box alignment
    ("items-start", &[("align-items", "flex-start")]),
    ("items-end", &[("align-items", "flex-end")]),
    ("items-center", &[("align-items", "center")]),
    ("items-baseline", &[("align-items", "baseline")]),
    ("items-stretch", &[("align-items", "stretch")]),
    ("justify-start", &[("justify-content", "flex-start")]),
    ("justify-end", &[("justify-content", "flex-end")]),
    ("justify-center", &[("justify-content", "center")]),
    ("justify-between", &[("justify-content", "space-between")]),
    ("justify-around", &[("justify-content", "space-around")]),
    ("justify-evenly", &[("justify-content", "space-evenly")]),
    ("justify-stretch", &[("justify-content", "stretch")]),
    ("self-auto", &[("align-self", "auto")]),
    ("self-start", &[("align-self", "flex-start")]),
    ("self-end", &[("align-self", "flex-end")]),
    ("self-center", &[("align-self", "center")]),
    ("self-stretch", &[("align-self", "stretch")]),
    // Overflow
    ("overflow-auto", &[("overflow", "auto")]),
    ("overflow-hidden", &[("overflow", "hidden")]),
    ("overflow-clip", &[("overflow", "clip")]),
    ("overflow-visible", &[("overflow", "visible")]),
    ("overflow-scroll", &[("overflow", "scroll")]),
    ("overflow-x-auto", &[("overflow-x", "auto")]),
    ("overflow-x-hidden", &[("overflow-x", "hidden")]),
    ("overflow-x-scroll", &[("overflow-x", "scroll")]),
    ("overflow-y-auto", &[("overflow-y", "auto")]),
    ("overflow-y-hidden", &[("overflow-y", "hidden")]),
    ("overflow-y-scroll", &[("overflow-y", "scroll")]),
    // Interactivity
    ("pointer-events-none", &[("pointer-events", "none")]),
    ("pointer-events-auto", &[("pointer-events", "auto")]),
    ("select-none", &[("user-select", "none")]),
    ("select-text", &[("user-select", "text")]),
    ("select-all", &[("user-select", "all")]),
    ("select-auto", &[("user-select", "auto")]),
    // Screen-reader helpers
    (
        "sr-only",
        &[
            ("position", "absolute"),
            ("width", "1px"),
            ("height", "1px"),
            ("padding", "0"),
            ("margin", "-1px"),
            ("overflow", "hidden"),
            ("clip-path", "inset(50%)"),
            ("white-space", "nowrap"),
            ("border-width", "0"),
        ],
    ),
    (
        "not-sr-only",
        &[
            ("position", "static"),
            ("width", "auto"),
            ("height", "auto"),
            ("padding", "0"),
            ("margin", "0"),
            ("overflow", "visible"),
            ("clip-path", "none"),
            ("white-space", "normal"),
        ],
    ),
];

const INSET_KEYWORDS: &[(&str, &str)] = &[("auto", "auto"), ("full", "100%")];

pub(super) fn register(registry: &mut UtilityRegistry) {
    register_statics(registry, STATICS);

    // Inset family: spacing scale with negatives and `auto`/`full`.
    for (root, properties) in [
        ("inset", &["inset"] as &'static [&'static str]),
        ("inset-x", &["left", "right"]),
        ("inset-y", &["top", "bottom"]),
        ("top", &["top"]),
        ("right", &["right"]),
        ("bottom", &["bottom"]),
        ("left", &["left"]),
    ] {
        registry.add(spacing_utility(root, properties, true, INSET_KEYWORDS));
    }

    registry.add(z_index());
    registry.add(grid_cols());
    registry.add(grid_rows());
    registry.add(span_utility("col-span", "grid-column", "span {n} / span {n}"));
    registry.add(span_utility("row-span", "grid-row", "span {n} / span {n}"));
    registry.add(order());
    registry.add(aspect());
}

fn z_index() -> Utility {
    Utility::new("z", UtilityPriority::StandardFunctional, |c, _cx| {
        if c.modifier().is_some() {
            return None;
        }
        let value = match c.value()? {
            CandidateValue::Named(name) if name == "auto" => {
                if c.negative {
                    return None;
                }
                "auto".to_string()
            }
            CandidateValue::Named(name) => {
                let index: i64 = name.parse().ok()?;
                let index = if c.negative { -index } else { index };
                index.to_string()
            }
            CandidateValue::Arbitrary(raw) => {
                infer_type(raw, AllowedTypes::NUMBER | AllowedTypes::LINE_WIDTH)?;
                raw.clone()
            }
            CandidateValue::Fraction(_) => return None,
        };
        Some(vec![AstNode::decl("z-index", value)])
    })
}

fn grid_cols() -> Utility {
    grid_template("grid-cols", "grid-template-columns")
}

fn grid_rows() -> Utility {
    grid_template("grid-rows", "grid-template-rows")
}

fn grid_template(root: &'static str, property: &'static str) -> Utility {
    Utility::new(root, UtilityPriority::StandardFunctional, move |c, _cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let value = match c.value()? {
            CandidateValue::Named(name) if name == "none" => "none".to_string(),
            CandidateValue::Named(name) => {
                let count: u32 = name.parse().ok()?;
                format!("repeat({count}, minmax(0, 1fr))")
            }
            CandidateValue::Arbitrary(raw) => raw.clone(),
            CandidateValue::Fraction(_) => return None,
        };
        Some(vec![AstNode::decl(property, value)])
    })
}

fn span_utility(root: &'static str, property: &'static str, template: &'static str) -> Utility {
    Utility::new(root, UtilityPriority::StandardFunctional, move |c, _cx| {
        if c.negative || c.modifier().is_some() {
            return None;
        }
        let value = match c.value()? {
            CandidateValue::Named(name) if name == "full" => "1 / -1".to_string(),
            CandidateValue::Named(name) => {
                let count: u32 = name.parse().ok()?;
                template.replace("{n}", &count.to_string())
            }
            CandidateValue::Arbitrary(raw) => raw.clone(),
            CandidateValue::Fraction(_) => return None,
        };
        Some(vec![AstNode::decl(property, value)])
    })
}

fn order() -> Utility {
    Utility::new("order", UtilityPriority::StandardFunctional, |c, _cx| {
        if c.modifier().is_some() {
            return None;
        }
        let value = match c.value()? {
            CandidateValue::Named(name) if name == "first" => "-9999".to_string(),
            CandidateValue::Named(name) if name == "last" => "9999".to_string(),
            CandidateValue::Named(name) if name == "none" => "0".to_string(),
            CandidateValue::Named(name) => {
                let index: i64 = name.parse().ok()?;
                let index = if c.negative { -index } else { index };
                index.to_string()
            }
            CandidateValue::Arbitrary(raw) => raw.clone(),
            CandidateValue::Fraction(_) => return None,
        };
        Some(vec![AstNode::decl("order", value)])
    })
}

fn aspect() -> Utility {
    Utility::new("aspect", UtilityPriority::StandardFunctional, |c, _cx| {
        if c.negative {
            return None;
        }
        let value = match c.value()? {
            CandidateValue::Named(name) if name == "auto" => "auto".to_string(),
            CandidateValue::Named(name) if name == "square" => "1 / 1".to_string(),
            CandidateValue::Named(name) if name == "video" => "16 / 9".to_string(),
            CandidateValue::Fraction(text) => text.replace('/', " / "),
            CandidateValue::Arbitrary(raw) => raw.clone(),
            CandidateValue::Named(_) => return None,
        };
        Some(vec![AstNode::decl("aspect-ratio", value)])
    })
}
