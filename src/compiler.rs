//! The assembled compiler: default theme + built-ins + user additions.
//!
//! [`Compiler::new`] gives the stock engine. [`Compiler::builder`] layers
//! user configuration on top before freezing: theme entries, custom
//! utilities (from `@utility` definitions), custom variants, component
//! `applies` definitions, and preflight CSS for the base layer.
//!
//! Everything is registered before `build()`; the resulting compiler only
//! exposes `&self` compilation methods, so one instance can serve
//! concurrent callers.

use crate::theme::default_theme;
use crate::{utilities, variants};
use gcss::engine::{Engine, ProcessDetails};
use gcss::registry::{Utility, UtilityRegistry};
use gcss::variants::{VariantKind, VariantRegistry};

/// A frozen utility-class compiler with the default theme and built-in
/// utility/variant set.
///
/// # Examples
///
/// ```rust
/// use gale_rs::Compiler;
///
/// let compiler = Compiler::new();
/// let css = compiler.process("flex bg-red-500/50 hover:underline");
///
/// assert!(css.contains("display: flex;"));
/// assert!(css.contains("color-mix(in oklab, var(--color-red-500) 50%, transparent)"));
/// ```
#[derive(Debug)]
pub struct Compiler {
    engine: Engine,
}

impl Compiler {
    /// The stock compiler: default theme, built-in utilities and variants.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::default()
    }

    /// Compiles a whitespace-separated class list to CSS text.
    pub fn process(&self, input: &str) -> String {
        self.engine.process(input)
    }

    /// Compiles a batch and reports per-token outcomes, including the
    /// invalid-class list for diagnostics and linting.
    pub fn process_with_details(&self, input: &str) -> ProcessDetails {
        self.engine.process_with_details(input)
    }

    /// Compiles a pre-split token list.
    pub fn process_tokens<'t>(&self, tokens: impl IntoIterator<Item = &'t str>) -> ProcessDetails {
        self.engine.process_tokens(tokens)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Staged configuration for a [`Compiler`].
#[derive(Default)]
pub struct CompilerBuilder {
    theme_extensions: Vec<(String, String)>,
    extra_utilities: Vec<Utility>,
    extra_variants: Vec<(String, VariantKind)>,
    components: Vec<(String, String)>,
    base_css: Option<String>,
}

impl CompilerBuilder {
    /// Adds or overrides theme entries (`--color-brand-500` → value).
    #[must_use]
    pub fn theme<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.theme_extensions
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Registers a custom utility alongside the built-ins.
    #[must_use]
    pub fn utility(mut self, utility: Utility) -> Self {
        self.extra_utilities.push(utility);
        self
    }

    /// Registers a custom static utility: fixed literal → declarations.
    #[must_use]
    pub fn static_utility(mut self, root: &str, declarations: &[(&str, &str)]) -> Self {
        self.extra_utilities.push(Utility::stat(root, declarations));
        self
    }

    /// Registers a custom exact-name variant.
    #[must_use]
    pub fn variant(mut self, name: impl Into<String>, kind: VariantKind) -> Self {
        self.extra_variants.push((name.into(), kind));
        self
    }

    /// Adds a component definition (`selector` styled by compiling the
    /// given utility tokens).
    #[must_use]
    pub fn component(mut self, selector: impl Into<String>, tokens: impl Into<String>) -> Self {
        self.components.push((selector.into(), tokens.into()));
        self
    }

    /// Sets preflight CSS for the base layer.
    #[must_use]
    pub fn base_css(mut self, css: impl Into<String>) -> Self {
        self.base_css = Some(css.into());
        self
    }

    /// Freezes the configuration into a compiler.
    pub fn build(self) -> Compiler {
        let theme = default_theme().with(self.theme_extensions);

        let mut utility_registry = UtilityRegistry::new();
        utilities::register_all(&mut utility_registry);
        for utility in self.extra_utilities {
            utility_registry.add(utility);
        }

        let mut variant_registry = VariantRegistry::new();
        variants::register_all(&mut variant_registry, &theme);
        for (name, kind) in self.extra_variants {
            variant_registry.add(name, kind);
        }

        log::debug!(
            "assembled compiler: {} utilities, {} variants, {} theme entries",
            utility_registry.len(),
            variant_registry.len(),
            theme.len()
        );

        let mut engine = Engine::new(theme, utility_registry, variant_registry);
        for (selector, tokens) in self.components {
            engine = engine.with_component(selector, tokens);
        }
        if let Some(css) = self.base_css {
            engine = engine.with_base_css(css);
        }
        Compiler { engine }
    }
}
