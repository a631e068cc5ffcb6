//! Utility registration and priority dispatch.
//!
//! Every utility — built-in or registered at runtime from parsed
//! `@utility` blocks — is a [`Utility`]: a root name, a [`UtilityPriority`],
//! the theme namespaces it consults (introspection only), and a compile
//! function from candidate to AST nodes. The [`UtilityRegistry`] groups
//! utilities by root and tries them in ascending priority order; the first
//! successful compilation wins, with ties broken by registration order.
//!
//! Static utilities always sit at [`UtilityPriority::ExactStatic`] and are
//! matched by exact root string, so a static literal never loses to a
//! same-named functional utility regardless of registration order.
//!
//! Registration must complete before any `process` call: the registry is
//! single-writer during setup, then read-only for every batch.

use crate::ast::{AstNode, PropertyRegistry};
use crate::parser::segment::parse_ident;
use crate::parser::{Candidate, CandidateKind, RootLookup};
use crate::theme::ThemeTracker;
use std::collections::HashMap;
use std::fmt;

/// Dispatch order. Lower sorts first and is tried first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum UtilityPriority {
    /// Fixed literal → fixed declarations (`flex`, `hidden`).
    ExactStatic,
    /// Pre-empts generic namespace resolution for a shared root
    /// (`text-*` font-size before `text-*` color).
    NamespaceHandler,
    /// Functional with a restricted value shape (`border-*` width/color).
    ConstrainedFunctional,
    /// Ordinary functional utilities.
    StandardFunctional,
    /// Last-resort handlers.
    Fallback,
}

impl UtilityPriority {
    pub const ALL: [UtilityPriority; 5] = [
        UtilityPriority::ExactStatic,
        UtilityPriority::NamespaceHandler,
        UtilityPriority::ConstrainedFunctional,
        UtilityPriority::StandardFunctional,
        UtilityPriority::Fallback,
    ];
}

/// Per-call compilation context handed to every utility.
///
/// Carries the theme usage tracker and the custom-property registry as an
/// explicit accumulator — one signature for all utilities, with the
/// registry always available and possibly unused.
pub struct CompileCx<'a> {
    pub theme: &'a ThemeTracker<'a>,
    pub properties: &'a mut PropertyRegistry,
}

/// A utility's compile function. Returning `None` declines the candidate
/// and lets the dispatcher move on; it is never an error.
pub type CompileFn =
    Box<dyn Fn(&Candidate, &mut CompileCx<'_>) -> Option<Vec<AstNode>> + Send + Sync>;

/// A matcher+compiler for one class of utility names.
pub struct Utility {
    root: String,
    priority: UtilityPriority,
    namespaces: Vec<&'static str>,
    compile: CompileFn,
}

impl Utility {
    /// Creates a functional utility from a compile closure.
    pub fn new(
        root: impl Into<String>,
        priority: UtilityPriority,
        compile: impl Fn(&Candidate, &mut CompileCx<'_>) -> Option<Vec<AstNode>>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            root: root.into(),
            priority,
            namespaces: Vec::new(),
            compile: Box::new(compile),
        }
    }

    /// Creates an exact-static utility: a fixed literal producing fixed
    /// declarations.
    pub fn stat(root: impl Into<String>, declarations: &[(&str, &str)]) -> Self {
        let nodes: Vec<AstNode> = declarations
            .iter()
            .map(|(p, v)| AstNode::decl(*p, *v))
            .collect();
        Self::new(root, UtilityPriority::ExactStatic, move |candidate, _cx| {
            match candidate.kind {
                CandidateKind::Static { .. } if !candidate.negative => Some(nodes.clone()),
                _ => None,
            }
        })
    }

    /// Declares the theme namespaces this utility consults, for
    /// introspection and namespace-resolution tooling.
    #[must_use]
    pub fn with_namespaces(mut self, namespaces: &[&'static str]) -> Self {
        self.namespaces = namespaces.to_vec();
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn priority(&self) -> UtilityPriority {
        self.priority
    }

    pub fn namespaces(&self) -> &[&'static str] {
        &self.namespaces
    }

    /// Attempts to compile the candidate. `None` means "not mine".
    pub fn try_compile(
        &self,
        candidate: &Candidate,
        cx: &mut CompileCx<'_>,
    ) -> Option<Vec<AstNode>> {
        (self.compile)(candidate, cx)
    }
}

impl fmt::Debug for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Utility")
            .field("root", &self.root)
            .field("priority", &self.priority)
            .field("namespaces", &self.namespaces)
            .finish_non_exhaustive()
    }
}

/// All registered utilities, grouped by root.
#[derive(Debug, Default)]
pub struct UtilityRegistry {
    by_root: HashMap<String, Vec<Utility>>,
}

impl UtilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a utility.
    ///
    /// # Panics
    ///
    /// Panics when the root is empty or not a valid utility identifier —
    /// a registration-time precondition violation, the one place where a
    /// coding mistake (rather than malformed input) surfaces as a panic.
    pub fn add(&mut self, utility: Utility) {
        let root = utility.root.clone();
        let valid = matches!(parse_ident(&root), Ok((rest, _)) if rest.is_empty());
        assert!(valid, "invalid utility root: `{root}`");
        self.by_root.entry(root).or_default().push(utility);
    }

    /// Tries all utilities registered for the candidate's root in
    /// ascending priority order; first success wins.
    pub fn dispatch(
        &self,
        candidate: &Candidate,
        cx: &mut CompileCx<'_>,
    ) -> Option<Vec<AstNode>> {
        let root = candidate.root()?;
        let group = self.by_root.get(root)?;
        for priority in UtilityPriority::ALL {
            for utility in group.iter().filter(|u| u.priority == priority) {
                if let Some(nodes) = utility.try_compile(candidate, cx) {
                    log::trace!("`{}` compiled by {priority:?} `{root}`", candidate.raw);
                    return Some(nodes);
                }
            }
        }
        None
    }

    /// All registered roots, in arbitrary order.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.by_root.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_root.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_root.is_empty()
    }
}

impl RootLookup for UtilityRegistry {
    fn contains_root(&self, root: &str) -> bool {
        self.by_root.contains_key(root)
    }
}
