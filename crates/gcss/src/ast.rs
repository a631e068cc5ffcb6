//! CSS AST nodes and the custom-property registry.
//!
//! A successful utility compilation returns a list of [`AstNode`]s — the
//! intermediate representation between dispatch and text rendering. Trees
//! are built bottom-up per candidate and never mutated afterwards (the one
//! exception is the engine stamping the `!important` flag onto
//! declarations for `!`-marked candidates before the tree is stored).
//!
//! The [`PropertyRegistry`] collects `@property` defaults for composable
//! custom properties (`--gale-ring-color` and friends). It is per-call
//! state threaded through compilation explicitly — never ambient shared
//! mutable state — so concurrent `process` calls stay independent.

/// One node of generated CSS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstNode {
    /// `property: value;`
    Declaration {
        property: String,
        value: String,
        important: bool,
    },
    /// `selector { children }` nested under the candidate's rule.
    NestedRule {
        selector: String,
        children: Vec<AstNode>,
    },
    /// `@name params { children }`.
    AtRule {
        name: String,
        params: String,
        children: Vec<AstNode>,
    },
    /// A composite utility's output: declarations for the base class plus
    /// descendant child rules, rendered as one base rule and N siblings.
    ComponentRule {
        declarations: Vec<AstNode>,
        children: Vec<AstNode>,
    },
}

impl AstNode {
    /// Shorthand declaration constructor.
    pub fn decl(property: impl Into<String>, value: impl Into<String>) -> Self {
        AstNode::Declaration {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Recursively stamps the important flag on every declaration.
    pub fn into_important(self) -> Self {
        match self {
            AstNode::Declaration {
                property, value, ..
            } => AstNode::Declaration {
                property,
                value,
                important: true,
            },
            AstNode::NestedRule { selector, children } => AstNode::NestedRule {
                selector,
                children: children.into_iter().map(Self::into_important).collect(),
            },
            AstNode::AtRule {
                name,
                params,
                children,
            } => AstNode::AtRule {
                name,
                params,
                children: children.into_iter().map(Self::into_important).collect(),
            },
            AstNode::ComponentRule {
                declarations,
                children,
            } => AstNode::ComponentRule {
                declarations: declarations
                    .into_iter()
                    .map(Self::into_important)
                    .collect(),
                children: children.into_iter().map(Self::into_important).collect(),
            },
        }
    }
}

/// A registered custom-property default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDefault {
    pub name: String,
    pub syntax: String,
    pub inherits: bool,
    pub initial: Option<String>,
}

/// Registry of `@property` defaults populated during one `process` call.
///
/// Registration is idempotent: dozens of utilities may reference the same
/// composable property, but its default is emitted exactly once per batch.
#[derive(Debug, Default)]
pub struct PropertyRegistry {
    defaults: Vec<PropertyDefault>,
}

impl PropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom-property default. Re-registering the same name
    /// is a no-op; names must start with `--`.
    pub fn register(
        &mut self,
        name: &str,
        syntax: &str,
        inherits: bool,
        initial: Option<&str>,
    ) {
        assert!(
            name.starts_with("--"),
            "custom property names start with `--`: `{name}`"
        );
        if self.defaults.iter().any(|d| d.name == name) {
            return;
        }
        self.defaults.push(PropertyDefault {
            name: name.to_string(),
            syntax: syntax.to_string(),
            inherits,
            initial: initial.map(str::to_string),
        });
    }

    /// Registered defaults in registration order.
    pub fn defaults(&self) -> &[PropertyDefault] {
        &self.defaults
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_important_stamps_recursively() {
        let node = AstNode::NestedRule {
            selector: "& > *".to_string(),
            children: vec![AstNode::decl("margin-top", "1rem")],
        };
        match node.into_important() {
            AstNode::NestedRule { children, .. } => {
                assert_eq!(
                    children[0],
                    AstNode::Declaration {
                        property: "margin-top".to_string(),
                        value: "1rem".to_string(),
                        important: true,
                    }
                );
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_property_registration_is_idempotent() {
        let mut registry = PropertyRegistry::new();
        registry.register("--gale-ring-color", "*", false, Some("currentcolor"));
        registry.register("--gale-ring-color", "*", false, Some("currentcolor"));
        assert_eq!(registry.defaults().len(), 1);
    }
}
