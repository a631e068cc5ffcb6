//! The batch compilation front: raw class strings in, CSS text out.
//!
//! An [`Engine`] owns the frozen configuration — theme, utility registry,
//! variant registry, component definitions — and compiles batches:
//!
//! 1. Whitespace-split the input into class tokens
//! 2. Parse each token into a [`Candidate`](crate::parser::Candidate)
//! 3. Resolve the variant stack (unknown variant → invalid class)
//! 4. Dispatch utilities in priority order for the AST fragment
//! 5. Compose the final selector and at-rule wrappers
//! 6. Assemble layers, deduplicate, and render
//!
//! `process` is a pure function of its input for a fixed engine: the only
//! per-call mutable state (`ThemeTracker`, `PropertyRegistry`) is created
//! inside the call, so one frozen engine may serve concurrent calls from
//! multiple threads.

use crate::ast::{AstNode, PropertyRegistry};
use crate::parser::{parse_candidate, Candidate, CandidateKind};
use crate::registry::{CompileCx, UtilityRegistry};
use crate::render::{render_stylesheet, LayeredSheet};
use crate::theme::{Theme, ThemeTracker};
use crate::variants::{AppliedSelector, VariantRegistry};

/// A frozen compilation pipeline.
///
/// Registration happens before construction; the engine itself only hands
/// out `&self` APIs.
#[derive(Debug)]
pub struct Engine {
    theme: Theme,
    utilities: UtilityRegistry,
    variants: VariantRegistry,
    components: Vec<(String, String)>,
    base_css: Option<String>,
}

/// One successfully compiled class from a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledClass {
    pub raw: String,
    /// The utility root (or arbitrary property name) that matched.
    pub matched: String,
    /// The final selector, with variants applied.
    pub selector: String,
    /// The finalized rule trees contributed to the utilities layer.
    pub nodes: Vec<AstNode>,
}

/// Per-token outcome of a batch, alongside the rendered CSS.
#[derive(Clone, Debug, Default)]
pub struct ProcessDetails {
    pub css: String,
    pub classes: Vec<CompiledClass>,
    pub invalid: Vec<String>,
}

impl Engine {
    pub fn new(theme: Theme, utilities: UtilityRegistry, variants: VariantRegistry) -> Self {
        Self {
            theme,
            utilities,
            variants,
            components: Vec::new(),
            base_css: None,
        }
    }

    /// Adds a component definition: a selector whose declarations come
    /// from compiling the given utility tokens (`@apply` semantics).
    #[must_use]
    pub fn with_component(
        mut self,
        selector: impl Into<String>,
        tokens: impl Into<String>,
    ) -> Self {
        self.components.push((selector.into(), tokens.into()));
        self
    }

    /// Sets pre-rendered CSS for the base layer (preflight styles).
    #[must_use]
    pub fn with_base_css(mut self, css: impl Into<String>) -> Self {
        self.base_css = Some(css.into());
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn utilities(&self) -> &UtilityRegistry {
        &self.utilities
    }

    pub fn variants(&self) -> &VariantRegistry {
        &self.variants
    }

    /// Compiles a whitespace-separated class list to CSS text.
    pub fn process(&self, input: &str) -> String {
        self.process_with_details(input).css
    }

    /// Compiles a batch and reports per-token outcomes.
    ///
    /// Invalid classes (parse failures, unknown variants, dispatch misses)
    /// are collected, not raised; the rendered CSS simply omits them.
    pub fn process_with_details(&self, input: &str) -> ProcessDetails {
        self.process_tokens(input.split_whitespace())
    }

    /// Same as [`Engine::process_with_details`], over pre-split tokens.
    pub fn process_tokens<'t>(
        &self,
        tokens: impl IntoIterator<Item = &'t str>,
    ) -> ProcessDetails {
        let tracker = ThemeTracker::new(&self.theme);
        let mut properties = PropertyRegistry::new();
        let mut sheet = LayeredSheet::new();

        if let Some(css) = &self.base_css {
            sheet.push_base_raw(css);
        }

        for (selector, applied_tokens) in &self.components {
            self.compile_component(selector, applied_tokens, &tracker, &mut properties, &mut sheet);
        }

        let mut classes = Vec::new();
        let mut invalid = Vec::new();
        for token in tokens {
            match self.compile_class(token, &tracker, &mut properties) {
                Some(compiled) => {
                    for node in &compiled.nodes {
                        sheet.push_utility(node);
                    }
                    classes.push(compiled);
                }
                None => {
                    log::debug!("invalid class `{token}`");
                    invalid.push(token.to_string());
                }
            }
        }

        let css = render_stylesheet(&sheet, &tracker, &properties);
        ProcessDetails {
            css,
            classes,
            invalid,
        }
    }

    /// Runs one token through parse → variants → dispatch → composition.
    fn compile_class(
        &self,
        token: &str,
        tracker: &ThemeTracker<'_>,
        properties: &mut PropertyRegistry,
    ) -> Option<CompiledClass> {
        let candidate = parse_candidate(token, &self.utilities).ok()?;

        let mut resolved = Vec::with_capacity(candidate.variants.len());
        for variant in &candidate.variants {
            resolved.push(self.variants.resolve(variant)?);
        }

        let nodes = self.compile_candidate(&candidate, tracker, properties)?;
        let nodes = if candidate.important {
            nodes.into_iter().map(AstNode::into_important).collect()
        } else {
            nodes
        };

        let mut applied = AppliedSelector::for_class(token);
        for kind in &resolved {
            applied.apply(kind);
        }

        let matched = match &candidate.kind {
            CandidateKind::ArbitraryProperty { property, .. } => property.clone(),
            _ => candidate.root().unwrap_or_default().to_string(),
        };
        let selector = applied.selector.clone();
        let nodes = finalize_rules(applied, nodes);

        Some(CompiledClass {
            raw: token.to_string(),
            matched,
            selector,
            nodes,
        })
    }

    /// Produces the raw AST fragment for one candidate.
    fn compile_candidate(
        &self,
        candidate: &Candidate,
        tracker: &ThemeTracker<'_>,
        properties: &mut PropertyRegistry,
    ) -> Option<Vec<AstNode>> {
        if let CandidateKind::ArbitraryProperty { property, value } = &candidate.kind {
            return Some(vec![AstNode::decl(property.clone(), value.clone())]);
        }
        let mut cx = CompileCx {
            theme: tracker,
            properties,
        };
        self.utilities.dispatch(candidate, &mut cx)
    }

    /// Resolves one component definition into the components layer.
    ///
    /// Flat declarations merge into the named selector with later tokens
    /// winning per CSS property name; variant-bearing tokens become
    /// sibling rules built from the component's selector.
    fn compile_component(
        &self,
        selector: &str,
        tokens: &str,
        tracker: &ThemeTracker<'_>,
        properties: &mut PropertyRegistry,
        sheet: &mut LayeredSheet,
    ) {
        let mut merged: Vec<(String, AstNode)> = Vec::new();
        let mut extra: Vec<AstNode> = Vec::new();

        for token in tokens.split_whitespace() {
            let Some(candidate) = parse_candidate(token, &self.utilities).ok() else {
                log::warn!("ignoring invalid applied utility `{token}` for `{selector}`");
                continue;
            };

            let mut resolved = Vec::new();
            let mut unknown = false;
            for variant in &candidate.variants {
                match self.variants.resolve(variant) {
                    Some(kind) => resolved.push(kind),
                    None => {
                        unknown = true;
                        break;
                    }
                }
            }
            if unknown {
                log::warn!("ignoring applied utility `{token}` with unknown variant");
                continue;
            }

            let Some(nodes) = self.compile_candidate(&candidate, tracker, properties) else {
                log::warn!("ignoring unmatched applied utility `{token}` for `{selector}`");
                continue;
            };
            let nodes = if candidate.important {
                nodes.into_iter().map(AstNode::into_important).collect()
            } else {
                nodes
            };

            let mut applied = AppliedSelector::for_selector(selector);
            for kind in &resolved {
                applied.apply(kind);
            }
            let plain = applied.selector == selector && applied.wrappers.is_empty();

            for rule in finalize_rules(applied, nodes) {
                match rule {
                    AstNode::NestedRule {
                        selector: rule_selector,
                        children,
                    } if plain && rule_selector == selector => {
                        for child in children {
                            if let AstNode::Declaration { ref property, .. } = child {
                                // Last-write-wins per property name.
                                let property = property.clone();
                                if let Some(slot) =
                                    merged.iter_mut().find(|(p, _)| *p == property)
                                {
                                    slot.1 = child;
                                } else {
                                    merged.push((property, child));
                                }
                            } else {
                                extra.push(child);
                            }
                        }
                    }
                    other => extra.push(other),
                }
            }
        }

        if !merged.is_empty() {
            sheet.push_component(&AstNode::NestedRule {
                selector: selector.to_string(),
                children: merged.into_iter().map(|(_, node)| node).collect(),
            });
        }
        for node in extra {
            sheet.push_component(&node);
        }
    }
}

/// Turns a utility's AST fragment into top-level rule trees.
///
/// Flat declarations form the base rule; nested `&` rules become siblings
/// with the accumulated selector spliced in; at-rule wrappers from range
/// variants enclose everything, leftmost variant outermost.
fn finalize_rules(applied: AppliedSelector, nodes: Vec<AstNode>) -> Vec<AstNode> {
    let mut declarations = Vec::new();
    let mut siblings = Vec::new();

    for node in nodes {
        match node {
            AstNode::Declaration { .. } => declarations.push(node),
            AstNode::NestedRule { selector, children } => siblings.push(AstNode::NestedRule {
                selector: resolve_child_selector(&applied.selector, &selector),
                children,
            }),
            AstNode::AtRule { .. } => declarations.push(node),
            AstNode::ComponentRule {
                declarations: base,
                children,
            } => {
                declarations.extend(base);
                for child in children {
                    match child {
                        AstNode::NestedRule { selector, children } => {
                            siblings.push(AstNode::NestedRule {
                                selector: resolve_child_selector(&applied.selector, &selector),
                                children,
                            });
                        }
                        other => declarations.push(other),
                    }
                }
            }
        }
    }

    let mut rules = Vec::new();
    if !declarations.is_empty() {
        rules.push(AstNode::NestedRule {
            selector: applied.selector.clone(),
            children: declarations,
        });
    }
    rules.extend(siblings);

    if applied.wrappers.is_empty() || rules.is_empty() {
        return rules;
    }

    let mut inner = rules;
    for (name, params) in applied.wrappers.iter().rev() {
        inner = vec![AstNode::AtRule {
            name: name.clone(),
            params: params.clone(),
            children: inner,
        }];
    }
    inner
}

/// Splices a child selector against the base: `&`-templates substitute,
/// anything else nests as a descendant.
fn resolve_child_selector(base: &str, child: &str) -> String {
    if child.contains('&') {
        child.replace('&', base)
    } else {
        format!("{base} {child}")
    }
}
