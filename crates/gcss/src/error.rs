//! Error types for candidate parsing.
//!
//! Parse failures are ordinary data: the engine records the offending token
//! as an invalid class and keeps compiling the rest of the batch. Nothing in
//! this module is ever raised as a panic; the only panics in the crate are
//! registration-time precondition violations (programmer error).

use thiserror::Error;

/// Errors that can occur while tokenizing a single utility-class candidate.
///
/// # Examples
///
/// ```rust
/// use gcss::parser::parse_candidate;
/// use std::collections::HashSet;
///
/// let roots: HashSet<String> = HashSet::new();
/// // Unbalanced brackets fail to parse.
/// assert!(parse_candidate("w-[10px", &roots).is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `[` without a matching `]` (or the reverse) in the token.
    #[error("unbalanced brackets in `{0}`")]
    UnbalancedBrackets(String),

    /// The base segment had no root after stripping markers.
    #[error("empty utility root in `{0}`")]
    EmptyRoot(String),

    /// A variant segment between two `:` separators was empty.
    #[error("empty variant segment in `{0}`")]
    EmptyVariant(String),

    /// The root did not match any registered utility root.
    #[error("unknown utility root in `{0}`")]
    UnknownRoot(String),

    /// An arbitrary property candidate (`[prop:value]`) was malformed.
    #[error("malformed arbitrary property in `{0}`")]
    MalformedArbitraryProperty(String),
}
