//! Low-level scanning helpers for candidate tokenization.
//!
//! Utility-class tokens mix plain identifier text with bracketed CSS
//! fragments (`w-[calc(100%_-_2rem)]`), so the splitters here are all
//! bracket-aware: separators only count at depth zero. The identifier and
//! number sub-grammars are nom parsers in the same style as the rest of the
//! workspace.

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    sequence::separated_pair,
};

/// Parses a utility identifier (alphanumerics, dashes, underscores, `@`).
///
/// The leading `@` form covers container-query variant names (`@sm`).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_' || c == '@' || c == '.')(
        input,
    )
}

/// Parses an `a/b` integer fraction (`1/2`, `11/12`).
pub fn parse_fraction(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(digit1, char('/'), digit1)(input)
}

/// True if the string is a bare unsigned integer.
pub fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Splits `input` on `separator`, ignoring separators nested inside
/// `[...]` or `(...)` and separators preceded by a backslash.
///
/// Returns `None` when delimiters are unbalanced.
pub fn split_top_level(input: &str, separator: char) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' | '(' => depth += 1,
            ']' | ')' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            c if c == separator && depth == 0 => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    parts.push(&input[start..]);
    Some(parts)
}

/// Finds the byte index of the last top-level occurrence of `separator`.
pub fn rfind_top_level(input: &str, separator: char) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut found = None;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            c if c == separator && depth == 0 => found = Some(i),
            _ => {}
        }
    }
    found
}

/// True if every `[`/`]` and `(`/`)` pair in the string balances.
pub fn is_balanced(input: &str) -> bool {
    let mut square: i32 = 0;
    let mut paren: i32 = 0;
    let mut escaped = false;
    for c in input.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' => square += 1,
            ']' => square -= 1,
            '(' => paren += 1,
            ')' => paren -= 1,
            _ => {}
        }
        if square < 0 || paren < 0 {
            return false;
        }
    }
    square == 0 && paren == 0
}

/// Decodes the whitespace-escaping convention used inside brackets:
/// `_` becomes a space, while `\_` stays a literal underscore.
///
/// The convention only applies inside `[...]`; callers must not run this
/// over plain identifier text.
pub fn decode_arbitrary(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'_') => {
                chars.next();
                out.push('_');
            }
            '_' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Strips one matching pair of surrounding brackets, if present.
pub fn strip_brackets(input: &str) -> Option<&str> {
    input.strip_prefix('[')?.strip_suffix(']')
}
