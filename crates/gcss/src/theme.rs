//! Theme variable storage and usage tracking.
//!
//! A [`Theme`] is an immutable, insertion-ordered map from CSS custom
//! property names (`--color-red-500`) to value strings. Utilities resolve
//! design tokens through *namespace chains*: an ordered list of prefixes
//! probed until one hits, so a border-color utility can consult
//! `--border-color-*` first and fall back to `--color-*`.
//!
//! The [`ThemeTracker`] wraps a theme for the duration of one `process`
//! call and records every variable name actually read, so the renderer can
//! emit only the theme variables a batch used (dead-variable elimination).
//!
//! ## Aliased Palettes
//!
//! A theme entry whose value is itself a `var(--color-…)` reference models
//! "map palette X as Y". Resolving such an entry marks the aliased target
//! as used too, recursively, so neither side is dropped from the output.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

/// Immutable key→value store of design tokens.
///
/// "Copies with additions" are produced by [`Theme::with`]; an existing
/// instance is never mutated after it has been handed to an engine.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a theme from `(name, value)` pairs. Later duplicates replace
    /// earlier ones while keeping the original insertion position.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut theme = Self::new();
        for (name, value) in entries {
            theme.insert(name.into(), value.into());
        }
        theme
    }

    fn insert(&mut self, name: String, value: String) {
        debug_assert!(
            name.starts_with("--"),
            "theme keys are custom property names: `{name}`"
        );
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Returns a copy of this theme extended with the given entries.
    #[must_use]
    pub fn with<I, K, V>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut copy = self.clone();
        for (name, value) in entries {
            copy.insert(name.into(), value.into());
        }
        copy
    }

    /// Direct lookup by full variable name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].1.as_str())
    }

    /// Probes `--{ns}-{key}` for each namespace in order; first hit wins.
    ///
    /// Namespaces are given without the leading `--` (`"color"`,
    /// `"border-color"`).
    pub fn resolve(&self, key: &str, namespaces: &[&str]) -> Option<(String, &str)> {
        for ns in namespaces {
            let name = format!("--{ns}-{key}");
            if let Some(value) = self.get(&name) {
                return Some((name, value));
            }
        }
        None
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Records which theme variables a batch actually touched.
///
/// Created fresh per `process` call and discarded after rendering. Interior
/// mutability is confined here so the engine itself stays `&self` and
/// shareable across threads.
#[derive(Debug)]
pub struct ThemeTracker<'a> {
    theme: &'a Theme,
    used: RefCell<BTreeSet<String>>,
}

impl<'a> ThemeTracker<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            used: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// Namespace-chain lookup returning the literal theme value.
    ///
    /// Marks the resolved variable (and any `var(--…)` references inside
    /// its value, recursively) as used.
    pub fn resolve(&self, key: &str, namespaces: &[&str]) -> Option<String> {
        let (name, value) = self.theme.resolve(key, namespaces)?;
        let value = value.to_string();
        self.mark(&name);
        Some(value)
    }

    /// Namespace-chain lookup returning a `var(--…)` reference instead of
    /// the literal value, for declarations that should stay
    /// indirection-friendly for runtime theming.
    pub fn resolve_var(&self, key: &str, namespaces: &[&str]) -> Option<String> {
        let (name, _) = self.theme.resolve(key, namespaces)?;
        self.mark(&name);
        Some(format!("var({name})"))
    }

    /// Direct `var(--…)` reference to a known variable by full name.
    ///
    /// Used for un-namespaced tokens like the spacing scale unit.
    pub fn var(&self, name: &str) -> Option<String> {
        self.theme.get(name)?;
        self.mark(name);
        Some(format!("var({name})"))
    }

    /// Marks a variable name as used, chasing `var(--…)` references in its
    /// value so palette aliases retain their targets.
    pub fn mark(&self, name: &str) {
        // Set semantics double as the cycle guard for self-referential
        // alias chains.
        if !self.used.borrow_mut().insert(name.to_string()) {
            return;
        }
        if let Some(value) = self.theme.get(name) {
            let value = value.to_string();
            for referenced in var_references(&value) {
                self.mark(&referenced);
            }
        }
    }

    /// The distinct variable names touched during this batch, sorted.
    pub fn used_keys(&self) -> Vec<String> {
        self.used.borrow().iter().cloned().collect()
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.borrow().contains(name)
    }
}

/// Extracts `--name` references from every `var(…)` in a value string.
fn var_references(value: &str) -> Vec<String> {
    let mut refs = Vec::new();
    let mut rest = value;
    while let Some(idx) = rest.find("var(") {
        rest = &rest[idx + 4..];
        let end = rest
            .find(|c: char| c == ',' || c == ')')
            .unwrap_or(rest.len());
        let name = rest[..end].trim();
        if name.starts_with("--") {
            refs.push(name.to_string());
        }
    }
    refs
}
