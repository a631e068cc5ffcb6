//! Variant resolution and selector composition.
//!
//! A candidate's variant stack (`sm:hover:bg-red-500`) is applied
//! left-to-right over an [`AppliedSelector`]: each variant transforms the
//! *accumulated* selector, so the stack nests in token order. Two families
//! of transformation exist:
//!
//! - **Selector-affecting** variants fuse into the compound selector text:
//!   pseudo-classes (`:hover`), pseudo-elements (`::before`),
//!   ancestor/sibling patterns (`group-*`/`peer-*`), class wrappers
//!   (`dark`), attribute suffixes (`data-*`/`aria-*`), and arbitrary
//!   selector splices (`[&:nth-child(3)]`).
//! - **Range-affecting** variants (breakpoints, container queries,
//!   `@supports`) become enclosing at-rules around the whole rule, with
//!   the leftmost variant outermost.
//!
//! An unknown variant name fails resolution; the engine then treats the
//! whole candidate as an invalid class rather than emitting a partial
//! match.

use crate::parser::VariantToken;
use std::collections::HashMap;
use std::fmt;

/// A resolved variant's effect on the rule under construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariantKind {
    /// Appends `:name` to the compound selector (`hover` → `:hover`).
    Pseudo(String),
    /// Appends `::name` — the double colon is required.
    PseudoElement(String),
    /// Appends a raw selector fragment: attribute selectors and the
    /// `:is(:where(.group):hover *)` ancestor patterns.
    SelectorSuffix(String),
    /// Prepends an ancestor pattern (`dark` → `:where(.dark, .dark *)`).
    Ancestor(String),
    /// Wraps the rule in an at-rule (`media`, `container`, `supports`).
    AtRule { name: String, params: String },
    /// Splices the accumulated selector into a raw `&` template.
    Arbitrary(String),
}

type DynamicVariantFn = Box<dyn Fn(&VariantToken) -> Option<VariantKind> + Send + Sync>;

/// Registered variants: exact names plus dynamic matchers for
/// parameterized families (`group-*`, `data-*`, `min-[…]`).
#[derive(Default)]
pub struct VariantRegistry {
    statics: HashMap<String, VariantKind>,
    dynamics: Vec<(String, DynamicVariantFn)>,
}

impl VariantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an exact-name variant.
    ///
    /// # Panics
    ///
    /// Panics on an empty name (registration-time precondition).
    pub fn add(&mut self, name: impl Into<String>, kind: VariantKind) {
        let name = name.into();
        assert!(!name.is_empty(), "variant names must be non-empty");
        self.statics.insert(name, kind);
    }

    /// Registers a dynamic matcher, tried in registration order after the
    /// exact-name table. The label is for diagnostics only.
    pub fn add_dynamic(
        &mut self,
        label: impl Into<String>,
        matcher: impl Fn(&VariantToken) -> Option<VariantKind> + Send + Sync + 'static,
    ) {
        self.dynamics.push((label.into(), Box::new(matcher)));
    }

    /// Resolves one variant token; `None` invalidates the candidate.
    pub fn resolve(&self, token: &VariantToken) -> Option<VariantKind> {
        if token.is_arbitrary() {
            return parse_arbitrary_variant(token.argument.as_deref()?);
        }
        if token.argument.is_none() {
            if let Some(kind) = self.statics.get(&token.name) {
                return Some(kind.clone());
            }
        }
        for (label, matcher) in &self.dynamics {
            if let Some(kind) = matcher(token) {
                log::trace!("variant `{}` matched dynamic `{label}`", token.name);
                return Some(kind);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.statics.len() + self.dynamics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statics.is_empty() && self.dynamics.is_empty()
    }
}

impl fmt::Debug for VariantRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("statics", &self.statics.len())
            .field("dynamics", &self.dynamics.len())
            .finish()
    }
}

/// Builds a variant from a fully bracketed segment: either a raw selector
/// template (`&:nth-child(3)`) or an at-rule (`@media(width>=600px)`).
fn parse_arbitrary_variant(argument: &str) -> Option<VariantKind> {
    let argument = argument.trim();
    if argument.is_empty() {
        return None;
    }
    if let Some(rest) = argument.strip_prefix('@') {
        let (name, params) = match rest.find(['(', ' ']) {
            Some(idx) => (&rest[..idx], rest[idx..].trim().to_string()),
            None => (rest, String::new()),
        };
        if name.is_empty() {
            return None;
        }
        return Some(VariantKind::AtRule {
            name: name.to_string(),
            params,
        });
    }
    Some(VariantKind::Arbitrary(argument.to_string()))
}

/// The selector under construction for one candidate: compound selector
/// text plus the enclosing at-rule wrappers collected so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedSelector {
    pub selector: String,
    /// `(name, params)` pairs; the first entry renders outermost.
    pub wrappers: Vec<(String, String)>,
}

impl AppliedSelector {
    /// Starts from a class token, escaping it into a class selector.
    pub fn for_class(class: &str) -> Self {
        Self {
            selector: format!(".{}", escape_class(class)),
            wrappers: Vec::new(),
        }
    }

    /// Starts from an already-formed selector (component rules).
    pub fn for_selector(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            wrappers: Vec::new(),
        }
    }

    /// Applies one resolved variant to the accumulated selector.
    pub fn apply(&mut self, kind: &VariantKind) {
        match kind {
            VariantKind::Pseudo(name) => {
                self.selector.push(':');
                self.selector.push_str(name);
            }
            VariantKind::PseudoElement(name) => {
                self.selector.push_str("::");
                self.selector.push_str(name);
            }
            VariantKind::SelectorSuffix(suffix) => self.selector.push_str(suffix),
            VariantKind::Ancestor(prefix) => {
                self.selector = format!("{prefix} {}", self.selector);
            }
            VariantKind::AtRule { name, params } => {
                self.wrappers.push((name.clone(), params.clone()));
            }
            VariantKind::Arbitrary(template) => {
                if template.contains('&') {
                    self.selector = template.replace('&', &self.selector);
                } else {
                    self.selector.push_str(template);
                }
            }
        }
    }
}

/// CSS-escapes a class token for use in a selector.
///
/// Every character that is not selector-safe in a class name is
/// backslash-escaped, independent of how many variants were stacked:
/// `hover:bg-red-500/50` → `hover\:bg-red-500\/50`.
pub fn escape_class(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len() * 2);
    for (i, c) in class.chars().enumerate() {
        match c {
            ':' | '/' | '[' | ']' | '(' | ')' | '%' | ',' | '#' | '!' | '.' | '&' | '>' | '+'
            | '~' | '*' | '@' | '=' | '\'' | '"' | ';' | '<' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_ascii_digit() && i == 0 => {
                // A leading digit needs a code-point escape.
                escaped.push_str(&format!("\\3{c} "));
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_class() {
        assert_eq!(escape_class("hover:bg-red-500"), "hover\\:bg-red-500");
        assert_eq!(escape_class("bg-red-500/50"), "bg-red-500\\/50");
        assert_eq!(escape_class("w-[10px]"), "w-\\[10px\\]");
        assert_eq!(escape_class("2xl:flex"), "\\32 xl\\:flex");
    }

    #[test]
    fn test_pseudo_stacking_in_token_order() {
        let mut applied = AppliedSelector::for_class("hover:focus:bg-red-500");
        applied.apply(&VariantKind::Pseudo("hover".into()));
        applied.apply(&VariantKind::Pseudo("focus".into()));
        assert_eq!(
            applied.selector,
            ".hover\\:focus\\:bg-red-500:hover:focus"
        );
    }

    #[test]
    fn test_at_rule_wrappers_accumulate_in_order() {
        let mut applied = AppliedSelector::for_class("c");
        applied.apply(&VariantKind::AtRule {
            name: "media".into(),
            params: "(width >= 40rem)".into(),
        });
        applied.apply(&VariantKind::AtRule {
            name: "supports".into(),
            params: "(display: grid)".into(),
        });
        assert_eq!(applied.wrappers[0].0, "media");
        assert_eq!(applied.wrappers[1].0, "supports");
    }

    #[test]
    fn test_ancestor_prepends() {
        let mut applied = AppliedSelector::for_class("dark:flex");
        applied.apply(&VariantKind::Ancestor(":where(.dark, .dark *)".into()));
        assert_eq!(applied.selector, ":where(.dark, .dark *) .dark\\:flex");
    }

    #[test]
    fn test_arbitrary_selector_splice() {
        let mut applied = AppliedSelector::for_selector(".c");
        applied.apply(&VariantKind::Arbitrary("&:nth-child(3)".into()));
        assert_eq!(applied.selector, ".c:nth-child(3)");

        let mut applied = AppliedSelector::for_selector(".c");
        applied.apply(&VariantKind::Arbitrary(".group &".into()));
        assert_eq!(applied.selector, ".group .c");
    }

    #[test]
    fn test_arbitrary_at_rule_variant() {
        let kind = parse_arbitrary_variant("@media (width >= 600px)").unwrap();
        assert_eq!(
            kind,
            VariantKind::AtRule {
                name: "media".into(),
                params: "(width >= 600px)".into(),
            }
        );
    }

    #[test]
    fn test_registry_resolution_order() {
        let mut registry = VariantRegistry::new();
        registry.add("hover", VariantKind::Pseudo("hover".into()));
        registry.add_dynamic("data", |token| {
            let arg = token.argument.as_deref()?;
            (token.name == "data").then(|| VariantKind::SelectorSuffix(format!("[data-{arg}]")))
        });

        let hover = registry.resolve(&VariantToken::named("hover")).unwrap();
        assert_eq!(hover, VariantKind::Pseudo("hover".into()));

        let data = registry
            .resolve(&VariantToken::with_argument("data", "open"))
            .unwrap();
        assert_eq!(data, VariantKind::SelectorSuffix("[data-open]".into()));

        assert!(registry.resolve(&VariantToken::named("bogus")).is_none());
    }
}
