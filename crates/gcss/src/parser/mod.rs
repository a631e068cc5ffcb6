//! Candidate tokenization.
//!
//! This module turns one raw class-list token (already whitespace-split)
//! into a structured [`Candidate`]:
//!
//! - [`parse_candidate`]: Main entry point for tokenizing one class
//! - [`Candidate`]: The parsed result (variant stack, flags, root, value)
//! - [`RootLookup`]: The set of registered utility roots consulted for the
//!   root/value split
//!
//! ## Token Grammar
//!
//! ```text
//! [variant ":"]* ["!"] ["-"] root ["-" value] ["/" modifier] ["!"]
//! ```
//!
//! Variant separators, value splits, and modifier splits are all
//! bracket-aware: `[&:nth-child(3)]:underline` is one variant plus a base,
//! and `bg-[url(a/b.png)]` has no modifier.
//!
//! ## Classification
//!
//! Static vs. functional vs. arbitrary-property classification is
//! structural: a whole-base root hit with no value and no modifier is
//! [`CandidateKind::Static`], a prefix root hit (or any bracketed value) is
//! [`CandidateKind::Functional`], and `[prop:value]` is
//! [`CandidateKind::ArbitraryProperty`]. No dictionary of known statics is
//! consulted.
//!
//! ## Failure Modes
//!
//! Unbalanced brackets, an empty root, an empty variant segment, or an
//! unknown root all return [`ParseError`]. The caller records the token as
//! an invalid class and keeps going; parsing never panics.

pub mod candidate;
pub mod segment;

pub use candidate::{Candidate, CandidateKind, CandidateValue, Modifier, VariantToken};

use crate::error::ParseError;
use segment::{
    decode_arbitrary, is_balanced, is_integer, rfind_top_level, split_top_level, strip_brackets,
};
use smallvec::SmallVec;
use std::collections::{BTreeSet, HashSet};

/// The set of registered functional/static utility roots.
///
/// The parser probes this set longest-prefix-first to decide where the root
/// ends and the value begins (`text-red-500` → root `text`, value
/// `red-500`). Implemented by the utility registry and, for tests, by plain
/// string sets.
pub trait RootLookup {
    fn contains_root(&self, root: &str) -> bool;
}

impl RootLookup for HashSet<String> {
    fn contains_root(&self, root: &str) -> bool {
        self.contains(root)
    }
}

impl RootLookup for BTreeSet<String> {
    fn contains_root(&self, root: &str) -> bool {
        self.contains(root)
    }
}

impl<T: RootLookup + ?Sized> RootLookup for &T {
    fn contains_root(&self, root: &str) -> bool {
        (*self).contains_root(root)
    }
}

/// Tokenizes one class-list token into a [`Candidate`].
///
/// # Examples
///
/// ```rust
/// use gcss::parser::{parse_candidate, CandidateKind, CandidateValue};
/// use std::collections::HashSet;
///
/// let roots: HashSet<String> = ["bg".to_string()].into();
/// let c = parse_candidate("hover:bg-red-500/50", &roots).unwrap();
///
/// assert_eq!(c.variants.len(), 1);
/// assert_eq!(c.variants[0].name, "hover");
/// match &c.kind {
///     CandidateKind::Functional { root, value, modifier } => {
///         assert_eq!(root, "bg");
///         assert_eq!(value, &Some(CandidateValue::Named("red-500".into())));
///         assert!(modifier.is_some());
///     }
///     _ => panic!("expected functional candidate"),
/// }
/// ```
pub fn parse_candidate(raw: &str, roots: &impl RootLookup) -> Result<Candidate, ParseError> {
    if !is_balanced(raw) {
        return Err(ParseError::UnbalancedBrackets(raw.to_string()));
    }

    let segments = split_top_level(raw, ':')
        .ok_or_else(|| ParseError::UnbalancedBrackets(raw.to_string()))?;
    let (base, variant_segments) = segments
        .split_last()
        .expect("split_top_level returns at least one segment");

    let mut variants: SmallVec<[VariantToken; 2]> = SmallVec::new();
    for seg in variant_segments {
        variants.push(parse_variant_token(seg, raw)?);
    }

    let mut base = *base;
    if base.is_empty() {
        return Err(ParseError::EmptyRoot(raw.to_string()));
    }

    // Important marker: leading or trailing `!`.
    let mut important = false;
    if let Some(rest) = base.strip_prefix('!') {
        important = true;
        base = rest;
    } else if let Some(rest) = base.strip_suffix('!') {
        important = true;
        base = rest;
    }
    if base.is_empty() {
        return Err(ParseError::EmptyRoot(raw.to_string()));
    }

    // Arbitrary property: `[color:red]`. No negative form exists for these.
    if base.starts_with('[') {
        let kind = parse_arbitrary_property(base, raw)?;
        return Ok(Candidate {
            raw: raw.to_string(),
            variants,
            important,
            negative: false,
            kind,
        });
    }

    let mut negative = false;
    if let Some(rest) = base.strip_prefix('-') {
        negative = true;
        base = rest;
    }
    if base.is_empty() {
        return Err(ParseError::EmptyRoot(raw.to_string()));
    }

    // Trailing `/modifier` (only when the modifier part is non-empty).
    let mut modifier = None;
    if let Some(idx) = rfind_top_level(base, '/') {
        let (head, tail) = (&base[..idx], &base[idx + 1..]);
        if !tail.is_empty() && !head.is_empty() {
            modifier = Some(match strip_brackets(tail) {
                Some(inner) => Modifier::Arbitrary(decode_arbitrary(inner)),
                None => Modifier::Named(tail.to_string()),
            });
            base = head;
        }
    }

    // Bracketed arbitrary value: `w-[10px]`, `grid-cols-[repeat(2,1fr)]`.
    if let Some(idx) = base.find("-[") {
        let (root, bracketed) = (&base[..idx], &base[idx + 1..]);
        let inner = strip_brackets(bracketed)
            .ok_or_else(|| ParseError::UnbalancedBrackets(raw.to_string()))?;
        if root.is_empty() {
            return Err(ParseError::EmptyRoot(raw.to_string()));
        }
        if !roots.contains_root(root) {
            return Err(ParseError::UnknownRoot(raw.to_string()));
        }
        return Ok(Candidate {
            raw: raw.to_string(),
            variants,
            important,
            negative,
            kind: CandidateKind::Functional {
                root: root.to_string(),
                value: Some(CandidateValue::Arbitrary(decode_arbitrary(inner))),
                modifier,
            },
        });
    }

    // Named root/value split: probe registered roots longest-prefix-first.
    let (root, value) = split_root(base, roots).ok_or_else(|| {
        log::trace!("no registered root matches `{base}`");
        ParseError::UnknownRoot(raw.to_string())
    })?;

    let kind = match value {
        None => match modifier {
            // A bare root with a modifier is still functional (`text/7`
            // style line-height shorthands).
            Some(m) => CandidateKind::Functional {
                root: root.to_string(),
                value: None,
                modifier: Some(m),
            },
            None => CandidateKind::Static {
                root: root.to_string(),
            },
        },
        Some(v) => {
            // An integer value with an integer modifier reads as a
            // fraction: `w-1/2` → value `1/2`, no modifier.
            let (value, modifier) = match modifier {
                Some(Modifier::Named(m)) if is_integer(v) && is_integer(&m) => {
                    (CandidateValue::Fraction(format!("{v}/{m}")), None)
                }
                other => (CandidateValue::Named(v.to_string()), other),
            };
            CandidateKind::Functional {
                root: root.to_string(),
                value: Some(value),
                modifier,
            }
        }
    };

    Ok(Candidate {
        raw: raw.to_string(),
        variants,
        important,
        negative,
        kind,
    })
}

/// Probes the root set at every `-` boundary, longest root first.
fn split_root<'a>(base: &'a str, roots: &impl RootLookup) -> Option<(&'a str, Option<&'a str>)> {
    if roots.contains_root(base) {
        return Some((base, None));
    }
    let mut idx = base.len();
    while let Some(i) = base[..idx].rfind('-') {
        let (root, value) = (&base[..i], &base[i + 1..]);
        if !root.is_empty() && !value.is_empty() && roots.contains_root(root) {
            return Some((root, Some(value)));
        }
        idx = i;
    }
    None
}

/// Parses one variant segment into a [`VariantToken`].
fn parse_variant_token(seg: &str, raw: &str) -> Result<VariantToken, ParseError> {
    if seg.is_empty() {
        return Err(ParseError::EmptyVariant(raw.to_string()));
    }

    // Fully bracketed arbitrary variant: `[&:nth-child(3)]`.
    if let Some(inner) = strip_brackets(seg) {
        if inner.is_empty() {
            return Err(ParseError::EmptyVariant(raw.to_string()));
        }
        return Ok(VariantToken {
            name: String::new(),
            argument: Some(decode_arbitrary(inner)),
        });
    }

    // Parameterized variant: `data-[open]`, `min-[600px]`, `group-[.sel]`.
    if let Some(idx) = seg.find("-[") {
        let (name, bracketed) = (&seg[..idx], &seg[idx + 1..]);
        let inner = strip_brackets(bracketed)
            .ok_or_else(|| ParseError::UnbalancedBrackets(raw.to_string()))?;
        if name.is_empty() {
            return Err(ParseError::EmptyVariant(raw.to_string()));
        }
        return Ok(VariantToken {
            name: name.to_string(),
            argument: Some(decode_arbitrary(inner)),
        });
    }

    Ok(VariantToken::named(seg))
}

/// Parses an `[prop:value]` base into an arbitrary-property kind.
fn parse_arbitrary_property(base: &str, raw: &str) -> Result<CandidateKind, ParseError> {
    let inner = strip_brackets(base)
        .ok_or_else(|| ParseError::MalformedArbitraryProperty(raw.to_string()))?;
    let (property, value) = inner
        .split_once(':')
        .ok_or_else(|| ParseError::MalformedArbitraryProperty(raw.to_string()))?;

    let valid_property = !property.is_empty()
        && property
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && property.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '-');
    if !valid_property || value.is_empty() {
        return Err(ParseError::MalformedArbitraryProperty(raw.to_string()));
    }

    Ok(CandidateKind::ArbitraryProperty {
        property: property.to_string(),
        value: decode_arbitrary(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots() -> HashSet<String> {
        ["bg", "text", "w", "m", "mt", "border", "flex", "grid-cols", "inset"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_static_candidate() {
        let c = parse_candidate("flex", &roots()).unwrap();
        assert_eq!(
            c.kind,
            CandidateKind::Static {
                root: "flex".to_string()
            }
        );
        assert!(!c.important);
        assert!(!c.negative);
        assert!(c.variants.is_empty());
    }

    #[test]
    fn test_functional_named_value() {
        let c = parse_candidate("bg-red-500", &roots()).unwrap();
        match c.kind {
            CandidateKind::Functional { root, value, .. } => {
                assert_eq!(root, "bg");
                assert_eq!(value, Some(CandidateValue::Named("red-500".to_string())));
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_longest_root_wins() {
        // Both `m` and `mt` are registered; `mt-4` must pick `mt`.
        let c = parse_candidate("mt-4", &roots()).unwrap();
        assert_eq!(c.root(), Some("mt"));
        assert_eq!(c.value(), Some(&CandidateValue::Named("4".to_string())));
    }

    #[test]
    fn test_important_prefix_and_suffix() {
        for raw in ["!bg-red-500", "bg-red-500!"] {
            let c = parse_candidate(raw, &roots()).unwrap();
            assert!(c.important, "{raw} should parse important");
            assert_eq!(c.root(), Some("bg"));
        }
    }

    #[test]
    fn test_negative() {
        let c = parse_candidate("-mt-4", &roots()).unwrap();
        assert!(c.negative);
        assert_eq!(c.root(), Some("mt"));
    }

    #[test]
    fn test_modifier() {
        let c = parse_candidate("bg-red-500/50", &roots()).unwrap();
        assert_eq!(c.modifier(), Some(&Modifier::Named("50".to_string())));
    }

    #[test]
    fn test_fraction() {
        let c = parse_candidate("w-1/2", &roots()).unwrap();
        assert_eq!(c.value(), Some(&CandidateValue::Fraction("1/2".to_string())));
        assert_eq!(c.modifier(), None);
    }

    #[test]
    fn test_arbitrary_value_decodes_underscores() {
        let c = parse_candidate("w-[calc(100%_-_2rem)]", &roots()).unwrap();
        assert_eq!(
            c.value(),
            Some(&CandidateValue::Arbitrary("calc(100% - 2rem)".to_string()))
        );
    }

    #[test]
    fn test_arbitrary_value_keeps_slash_inside_brackets() {
        let c = parse_candidate("bg-[url(a/b.png)]", &roots()).unwrap();
        assert_eq!(
            c.value(),
            Some(&CandidateValue::Arbitrary("url(a/b.png)".to_string()))
        );
        assert_eq!(c.modifier(), None);
    }

    #[test]
    fn test_arbitrary_property() {
        let c = parse_candidate("[color:red]", &roots()).unwrap();
        assert_eq!(
            c.kind,
            CandidateKind::ArbitraryProperty {
                property: "color".to_string(),
                value: "red".to_string()
            }
        );
    }

    #[test]
    fn test_variant_stack_order() {
        let c = parse_candidate("sm:hover:bg-red-500", &roots()).unwrap();
        let names: Vec<_> = c.variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["sm", "hover"]);
    }

    #[test]
    fn test_parameterized_variant() {
        let c = parse_candidate("data-[open]:flex", &roots()).unwrap();
        assert_eq!(c.variants[0].name, "data");
        assert_eq!(c.variants[0].argument.as_deref(), Some("open"));
    }

    #[test]
    fn test_arbitrary_variant() {
        let c = parse_candidate("[&:nth-child(3)]:flex", &roots()).unwrap();
        assert!(c.variants[0].is_arbitrary());
        assert_eq!(c.variants[0].argument.as_deref(), Some("&:nth-child(3)"));
    }

    #[test]
    fn test_unbalanced_brackets_fail() {
        assert_eq!(
            parse_candidate("w-[10px", &roots()),
            Err(ParseError::UnbalancedBrackets("w-[10px".to_string()))
        );
    }

    #[test]
    fn test_unknown_root_fails() {
        assert_eq!(
            parse_candidate("zz-9000", &roots()),
            Err(ParseError::UnknownRoot("zz-9000".to_string()))
        );
    }

    #[test]
    fn test_empty_variant_fails() {
        assert!(matches!(
            parse_candidate(":flex", &roots()),
            Err(ParseError::EmptyVariant(_))
        ));
    }

    #[test]
    fn test_bare_important_fails() {
        assert!(matches!(
            parse_candidate("!", &roots()),
            Err(ParseError::EmptyRoot(_))
        ));
    }
}
