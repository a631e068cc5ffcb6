//! Structured representation of one parsed utility-class token.

use smallvec::SmallVec;

/// A parsed value suffix for a functional candidate.
///
/// `Named` values reference theme keys (`red-500`, `4`), `Arbitrary` values
/// are raw CSS fragments from `[...]` brackets, and `Fraction` values encode
/// `a/b` forms like `1/2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CandidateValue {
    Named(String),
    Arbitrary(String),
    Fraction(String),
}

impl CandidateValue {
    /// The textual payload, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            CandidateValue::Named(s)
            | CandidateValue::Arbitrary(s)
            | CandidateValue::Fraction(s) => s,
        }
    }
}

/// A trailing `/modifier` on a functional candidate (opacity, line-height).
///
/// The reserved modifier text `negative` marks a candidate whose value came
/// from a leading `-`; it must never be interpreted as an opacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modifier {
    Named(String),
    Arbitrary(String),
}

impl Modifier {
    pub fn text(&self) -> &str {
        match self {
            Modifier::Named(s) | Modifier::Arbitrary(s) => s,
        }
    }
}

/// One colon-separated variant segment preceding the base utility.
///
/// `hover` parses as `{ name: "hover", argument: None }`;
/// `data-[open]` as `{ name: "data", argument: Some("open") }`;
/// a fully bracketed segment like `[&:nth-child(3)]` as
/// `{ name: "", argument: Some("&:nth-child(3)") }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantToken {
    pub name: String,
    pub argument: Option<String>,
}

impl VariantToken {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: None,
        }
    }

    pub fn with_argument(name: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: Some(argument.into()),
        }
    }

    /// True for fully bracketed segments (`[&:hover]`, `[@media(...)]`).
    pub fn is_arbitrary(&self) -> bool {
        self.name.is_empty() && self.argument.is_some()
    }
}

/// How the base segment of the token classified, structurally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CandidateKind {
    /// A bare root with no value and no modifier (`flex`, `hidden`).
    Static { root: String },
    /// A root plus optional value and optional modifier (`bg-red-500/50`).
    Functional {
        root: String,
        value: Option<CandidateValue>,
        modifier: Option<Modifier>,
    },
    /// A bracketed property-value pair (`[color:red]`).
    ArbitraryProperty { property: String, value: String },
}

/// A fully parsed utility-class token, immutable after construction.
///
/// `variants` preserves left-to-right textual order; the leftmost variant is
/// applied outermost during selector composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub raw: String,
    pub variants: SmallVec<[VariantToken; 2]>,
    pub important: bool,
    pub negative: bool,
    pub kind: CandidateKind,
}

impl Candidate {
    /// The utility root for static/functional candidates.
    pub fn root(&self) -> Option<&str> {
        match &self.kind {
            CandidateKind::Static { root } => Some(root),
            CandidateKind::Functional { root, .. } => Some(root),
            CandidateKind::ArbitraryProperty { .. } => None,
        }
    }

    /// The candidate value, if this is a functional candidate carrying one.
    pub fn value(&self) -> Option<&CandidateValue> {
        match &self.kind {
            CandidateKind::Functional { value, .. } => value.as_ref(),
            _ => None,
        }
    }

    /// The trailing modifier, if any.
    pub fn modifier(&self) -> Option<&Modifier> {
        match &self.kind {
            CandidateKind::Functional { modifier, .. } => modifier.as_ref(),
            _ => None,
        }
    }
}
