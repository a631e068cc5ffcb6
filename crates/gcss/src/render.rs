//! Text rendering and layer assembly.
//!
//! Compiled rules accumulate into a [`LayeredSheet`] with the four fixed
//! cascade layers — `theme`, `base`, `components`, `utilities` — always
//! emitted in that order behind a header declaring it:
//!
//! ```css
//! @layer theme, base, components, utilities;
//!
//! @layer theme { :root { --color-red-500: …; } }
//! @layer utilities { .bg-red-500 { background-color: …; } }
//! ```
//!
//! Identical rules deduplicate across the batch (`mb-4 mb-4` renders
//! once). The theme layer contains only the variables the usage tracker
//! saw during this batch; custom-property defaults registered during the
//! batch render as trailing `@property` blocks.

use crate::ast::{AstNode, PropertyRegistry};
use crate::theme::ThemeTracker;
use std::collections::HashSet;

const INDENT: &str = "  ";

/// Rendered rules bucketed by cascade layer, with per-layer dedup.
#[derive(Debug, Default)]
pub struct LayeredSheet {
    base: Vec<String>,
    components: Vec<String>,
    utilities: Vec<String>,
    seen_components: HashSet<String>,
    seen_utilities: HashSet<String>,
}

impl LayeredSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fully-resolved rule tree to the utilities layer.
    pub fn push_utility(&mut self, node: &AstNode) {
        let text = render_node(node, 1);
        if self.seen_utilities.insert(text.clone()) {
            self.utilities.push(text);
        }
    }

    /// Adds a fully-resolved rule tree to the components layer.
    pub fn push_component(&mut self, node: &AstNode) {
        let text = render_node(node, 1);
        if self.seen_components.insert(text.clone()) {
            self.components.push(text);
        }
    }

    /// Adds a pre-rendered chunk (preflight styles) to the base layer.
    pub fn push_base_raw(&mut self, css: &str) {
        let trimmed = css.trim();
        if !trimmed.is_empty() {
            self.base.push(reindent(trimmed, 1));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.components.is_empty() && self.utilities.is_empty()
    }
}

/// Serializes the whole batch: layer header, populated layer blocks in
/// fixed order, then registered `@property` defaults.
pub fn render_stylesheet(
    sheet: &LayeredSheet,
    tracker: &ThemeTracker<'_>,
    properties: &PropertyRegistry,
) -> String {
    let mut out = String::from("@layer theme, base, components, utilities;\n");

    let theme_block = render_theme_block(tracker);
    for (layer, body) in [
        ("theme", theme_block),
        ("base", sheet.base.join("\n")),
        ("components", sheet.components.join("\n")),
        ("utilities", sheet.utilities.join("\n")),
    ] {
        if body.is_empty() {
            continue;
        }
        out.push_str("\n@layer ");
        out.push_str(layer);
        out.push_str(" {\n");
        out.push_str(&body);
        out.push_str("}\n");
    }

    for default in properties.defaults() {
        out.push_str("\n@property ");
        out.push_str(&default.name);
        out.push_str(" {\n");
        out.push_str(&format!("{INDENT}syntax: \"{}\";\n", default.syntax));
        out.push_str(&format!("{INDENT}inherits: {};\n", default.inherits));
        if let Some(initial) = &default.initial {
            out.push_str(&format!("{INDENT}initial-value: {initial};\n"));
        }
        out.push_str("}\n");
    }

    out
}

/// The `:root` block of theme variables the batch actually used, in theme
/// definition order.
fn render_theme_block(tracker: &ThemeTracker<'_>) -> String {
    let used: Vec<(&str, &str)> = tracker
        .theme()
        .entries()
        .filter(|(name, _)| tracker.is_used(name))
        .collect();
    if used.is_empty() {
        return String::new();
    }
    let mut block = format!("{INDENT}:root {{\n");
    for (name, value) in used {
        block.push_str(&format!("{INDENT}{INDENT}{name}: {value};\n"));
    }
    block.push_str(&format!("{INDENT}}}\n"));
    block
}

/// Serializes one rule tree at the given indent depth.
pub fn render_node(node: &AstNode, depth: usize) -> String {
    let pad = INDENT.repeat(depth);
    match node {
        AstNode::Declaration {
            property,
            value,
            important,
        } => {
            let bang = if *important { " !important" } else { "" };
            format!("{pad}{property}: {value}{bang};\n")
        }
        AstNode::NestedRule { selector, children } => {
            let mut out = format!("{pad}{selector} {{\n");
            for child in children {
                out.push_str(&render_node(child, depth + 1));
            }
            out.push_str(&format!("{pad}}}\n"));
            out
        }
        AstNode::AtRule {
            name,
            params,
            children,
        } => {
            let head = if params.is_empty() {
                format!("{pad}@{name} {{\n")
            } else {
                format!("{pad}@{name} {params} {{\n")
            };
            let mut out = head;
            for child in children {
                out.push_str(&render_node(child, depth + 1));
            }
            out.push_str(&format!("{pad}}}\n"));
            out
        }
        // A bare component rule at render time means the engine did not
        // attach a selector; render children only.
        AstNode::ComponentRule {
            declarations,
            children,
        } => {
            let mut out = String::new();
            for child in declarations.iter().chain(children) {
                out.push_str(&render_node(child, depth));
            }
            out
        }
    }
}

fn reindent(css: &str, depth: usize) -> String {
    let pad = INDENT.repeat(depth);
    let mut out = String::new();
    for line in css.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&pad);
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_declaration_rendering() {
        let node = AstNode::NestedRule {
            selector: ".mb-4".to_string(),
            children: vec![AstNode::decl("margin-bottom", "1rem")],
        };
        assert_eq!(render_node(&node, 0), ".mb-4 {\n  margin-bottom: 1rem;\n}\n");
    }

    #[test]
    fn test_important_inside_value() {
        let node = AstNode::Declaration {
            property: "color".to_string(),
            value: "red".to_string(),
            important: true,
        };
        assert_eq!(render_node(&node, 0), "color: red !important;\n");
    }

    #[test]
    fn test_dedup() {
        let theme = Theme::new();
        let tracker = ThemeTracker::new(&theme);
        let mut sheet = LayeredSheet::new();
        let node = AstNode::NestedRule {
            selector: ".mb-4".to_string(),
            children: vec![AstNode::decl("margin-bottom", "1rem")],
        };
        sheet.push_utility(&node);
        sheet.push_utility(&node);
        let css = render_stylesheet(&sheet, &tracker, &PropertyRegistry::new());
        assert_eq!(css.matches(".mb-4").count(), 1);
    }

    #[test]
    fn test_layer_order() {
        let theme = Theme::from_entries([("--color-red-500", "red")]);
        let tracker = ThemeTracker::new(&theme);
        tracker.mark("--color-red-500");

        let mut sheet = LayeredSheet::new();
        sheet.push_utility(&AstNode::NestedRule {
            selector: ".x".to_string(),
            children: vec![AstNode::decl("color", "var(--color-red-500)")],
        });

        let css = render_stylesheet(&sheet, &tracker, &PropertyRegistry::new());
        assert!(css.starts_with("@layer theme, base, components, utilities;\n"));
        let theme_at = css.find("@layer theme {").unwrap();
        let utilities_at = css.find("@layer utilities {").unwrap();
        assert!(theme_at < utilities_at);
    }

    #[test]
    fn test_unused_theme_vars_are_dropped() {
        let theme = Theme::from_entries([
            ("--color-red-500", "red"),
            ("--color-blue-500", "blue"),
        ]);
        let tracker = ThemeTracker::new(&theme);
        tracker.mark("--color-red-500");

        let css = render_stylesheet(&LayeredSheet::new(), &tracker, &PropertyRegistry::new());
        assert!(css.contains("--color-red-500"));
        assert!(!css.contains("--color-blue-500"));
    }

    #[test]
    fn test_property_defaults_render() {
        let theme = Theme::new();
        let tracker = ThemeTracker::new(&theme);
        let mut properties = PropertyRegistry::new();
        properties.register("--gale-ring-color", "*", false, Some("currentcolor"));

        let css = render_stylesheet(&LayeredSheet::new(), &tracker, &properties);
        assert!(css.contains("@property --gale-ring-color {"));
        assert!(css.contains("  syntax: \"*\";"));
        assert!(css.contains("  inherits: false;"));
        assert!(css.contains("  initial-value: currentcolor;"));
    }
}
