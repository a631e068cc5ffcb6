//! Value resolution and arbitrary-value data-type inference.
//!
//! Named candidate values resolve through theme namespace chains (see
//! [`crate::theme`]). Arbitrary (bracketed) values carry no type
//! information, so before a utility can decide which declaration shape to
//! emit it asks [`infer_type`] to classify the raw text — `border-[3px]`
//! infers Length and becomes a width declaration, `border-[red]` infers
//! Color and becomes a color declaration.
//!
//! ## Classification priority
//!
//! 1. Known CSS color syntax (hex, color functions, named keywords,
//!    `currentcolor`/`transparent`/`inherit`)
//! 2. Numeric value with a recognized length unit, or `%`
//! 3. Bare small integer → LineWidth, any bare number → Number
//! 4. Absolute/relative font-size keywords
//! 5. `var()`/`calc()`-style function values pass through unresolved and
//!    satisfy whichever type the caller allows
//!
//! The caller supplies an [`AllowedTypes`] set; inference outside that set
//! fails the calling utility (the dispatcher then tries the next one)
//! rather than guessing.

use crate::parser::candidate::{CandidateValue, Modifier};
use crate::parser::segment::parse_fraction;
use crate::theme::ThemeTracker;
use bitflags::bitflags;
use phf::phf_set;

/// The CSS data type inferred for one arbitrary value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Color,
    Length,
    Percentage,
    LineWidth,
    Number,
    AbsoluteSize,
    RelativeSize,
}

bitflags! {
    /// The set of data types a utility accepts for arbitrary values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AllowedTypes: u8 {
        const COLOR         = 0b0000_0001;
        const LENGTH        = 0b0000_0010;
        const PERCENTAGE    = 0b0000_0100;
        const LINE_WIDTH    = 0b0000_1000;
        const NUMBER        = 0b0001_0000;
        const ABSOLUTE_SIZE = 0b0010_0000;
        const RELATIVE_SIZE = 0b0100_0000;
    }
}

impl DataType {
    fn flag(self) -> AllowedTypes {
        match self {
            DataType::Color => AllowedTypes::COLOR,
            DataType::Length => AllowedTypes::LENGTH,
            DataType::Percentage => AllowedTypes::PERCENTAGE,
            DataType::LineWidth => AllowedTypes::LINE_WIDTH,
            DataType::Number => AllowedTypes::NUMBER,
            DataType::AbsoluteSize => AllowedTypes::ABSOLUTE_SIZE,
            DataType::RelativeSize => AllowedTypes::RELATIVE_SIZE,
        }
    }

    /// Classification order; also the priority used for function values.
    const ALL: [DataType; 7] = [
        DataType::Color,
        DataType::Length,
        DataType::Percentage,
        DataType::LineWidth,
        DataType::Number,
        DataType::AbsoluteSize,
        DataType::RelativeSize,
    ];
}

/// CSS named colors plus the special color keywords.
static NAMED_COLORS: phf::Set<&'static str> = phf_set! {
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige",
    "bisque", "black", "blanchedalmond", "blue", "blueviolet", "brown",
    "burlywood", "cadetblue", "chartreuse", "chocolate", "coral",
    "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred",
    "darksalmon", "darkseagreen", "darkslateblue", "darkslategray",
    "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite",
    "gold", "goldenrod", "gray", "green", "greenyellow", "grey", "honeydew",
    "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral",
    "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen",
    "lightgrey", "lightpink", "lightsalmon", "lightseagreen",
    "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon",
    "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen",
    "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive",
    "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip",
    "peachpuff", "peru", "pink", "plum", "powderblue", "purple",
    "rebeccapurple", "red", "rosybrown", "royalblue", "saddlebrown",
    "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen",
    "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
    "currentcolor", "transparent", "inherit",
};

/// Color function prefixes recognized as color syntax.
static COLOR_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch",
    "color", "color-mix", "light-dark",
};

static LENGTH_UNITS: phf::Set<&'static str> = phf_set! {
    "px", "em", "rem", "ex", "ch", "cap", "ic", "lh", "rlh",
    "vw", "vh", "vmin", "vmax", "svw", "svh", "lvw", "lvh", "dvw", "dvh",
    "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax",
    "cm", "mm", "q", "in", "pt", "pc",
};

static ABSOLUTE_SIZES: phf::Set<&'static str> = phf_set! {
    "xx-small", "x-small", "small", "medium", "large", "x-large",
    "xx-large", "xxx-large",
};

static RELATIVE_SIZES: phf::Set<&'static str> = phf_set! {
    "larger", "smaller",
};

/// Math/indirection functions forwarded verbatim.
static PASSTHROUGH_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "var", "calc", "min", "max", "clamp", "env",
};

/// The largest bare integer still classified as a line width.
const MAX_LINE_WIDTH: f64 = 32.0;

/// Classifies one raw arbitrary value against the caller's allowed set.
///
/// Returns `None` when the inferred type falls outside `allowed`; the
/// calling utility must then decline the candidate.
pub fn infer_type(raw: &str, allowed: AllowedTypes) -> Option<DataType> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // Function values satisfy any caller-declared type.
    if is_passthrough_function(raw) {
        return DataType::ALL
            .into_iter()
            .find(|t| allowed.contains(t.flag()));
    }

    if is_color_syntax(raw) {
        return allowed.contains(AllowedTypes::COLOR).then_some(DataType::Color);
    }

    if let Some((value, unit)) = split_numeric_unit(raw) {
        if unit == "%" {
            return allowed
                .contains(AllowedTypes::PERCENTAGE)
                .then_some(DataType::Percentage);
        }
        if LENGTH_UNITS.contains(unit) {
            return allowed
                .contains(AllowedTypes::LENGTH)
                .then_some(DataType::Length);
        }
        if unit.is_empty() {
            if allowed.contains(AllowedTypes::LINE_WIDTH)
                && value.fract() == 0.0
                && (0.0..=MAX_LINE_WIDTH).contains(&value)
            {
                return Some(DataType::LineWidth);
            }
            return allowed.contains(AllowedTypes::NUMBER).then_some(DataType::Number);
        }
        return None;
    }

    if ABSOLUTE_SIZES.contains(raw) {
        return allowed
            .contains(AllowedTypes::ABSOLUTE_SIZE)
            .then_some(DataType::AbsoluteSize);
    }
    if RELATIVE_SIZES.contains(raw) {
        return allowed
            .contains(AllowedTypes::RELATIVE_SIZE)
            .then_some(DataType::RelativeSize);
    }

    None
}

/// True for hex colors, color functions, and named color keywords.
pub fn is_color_syntax(raw: &str) -> bool {
    if let Some(hex) = raw.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8)
            && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }
    if let Some(open) = raw.find('(') {
        return raw.ends_with(')') && COLOR_FUNCTIONS.contains(&raw[..open]);
    }
    NAMED_COLORS.contains(raw.to_ascii_lowercase().as_str())
}

fn is_passthrough_function(raw: &str) -> bool {
    match raw.find('(') {
        Some(open) => raw.ends_with(')') && PASSTHROUGH_FUNCTIONS.contains(&raw[..open]),
        None => false,
    }
}

/// Splits `12px` → `(12.0, "px")`, `50%` → `(50.0, "%")`, `3` → `(3.0, "")`.
fn split_numeric_unit(raw: &str) -> Option<(f64, &str)> {
    let unit_start = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.' && *c != '-' && *c != '+')
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    if unit_start == 0 {
        return None;
    }
    let value: f64 = raw[..unit_start].parse().ok()?;
    Some((value, &raw[unit_start..]))
}

/// Renders a fraction value (`"1/2"`) as `calc(1/2 * 100%)`.
pub fn fraction_to_percent(text: &str) -> Option<String> {
    let (rest, (a, b)) = parse_fraction(text).ok()?;
    if !rest.is_empty() || b == "0" {
        return None;
    }
    Some(format!("calc({a}/{b} * 100%)"))
}

/// The reserved modifier sentinel for values produced by a leading `-`.
pub const NEGATIVE_SENTINEL: &str = "negative";

/// Applies an opacity modifier to a resolved color via `color-mix`.
///
/// `bg-red-500/50` → `color-mix(in oklab, var(--color-red-500) 50%,
/// transparent)`. The sentinel modifier `negative` never reads as an
/// opacity. Returns `None` for modifiers that are not opacity-shaped, so
/// the calling utility declines the whole candidate.
pub fn apply_opacity(color: &str, modifier: &Modifier) -> Option<String> {
    let pct = match modifier {
        Modifier::Named(text) => {
            if text == NEGATIVE_SENTINEL {
                return None;
            }
            let value: f64 = text.parse().ok()?;
            if !(0.0..=100.0).contains(&value) {
                return None;
            }
            format!("{}%", trim_float(value))
        }
        Modifier::Arbitrary(text) => {
            if let Some(stripped) = text.strip_suffix('%') {
                let value: f64 = stripped.trim().parse().ok()?;
                format!("{}%", trim_float(value))
            } else if let Ok(value) = text.parse::<f64>() {
                // Bare arbitrary fractions read as 0..1 alphas.
                if (0.0..=1.0).contains(&value) {
                    let pct = (value * 100.0 * 1e6).round() / 1e6;
                    format!("{}%", trim_float(pct))
                } else {
                    return None;
                }
            } else if text.starts_with("var(") {
                text.clone()
            } else {
                return None;
            }
        }
    };
    Some(format!("color-mix(in oklab, {color} {pct}, transparent)"))
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Resolves a color-shaped candidate value through a theme namespace chain.
///
/// Named values probe the chain as `var(--…)` references; arbitrary values
/// must infer as colors. An opacity modifier, when present, wraps the
/// result in `color-mix`.
pub fn resolve_color(
    value: &CandidateValue,
    modifier: Option<&Modifier>,
    namespaces: &[&str],
    theme: &ThemeTracker<'_>,
) -> Option<String> {
    let base = match value {
        CandidateValue::Named(name) => match name.as_str() {
            "inherit" => "inherit".to_string(),
            "current" => "currentcolor".to_string(),
            "transparent" => "transparent".to_string(),
            _ => theme.resolve_var(name, namespaces)?,
        },
        CandidateValue::Arbitrary(raw) => {
            infer_type(raw, AllowedTypes::COLOR)?;
            raw.clone()
        }
        CandidateValue::Fraction(_) => return None,
    };
    match modifier {
        None => Some(base),
        Some(m) => apply_opacity(&base, m),
    }
}

/// Resolves a spacing-scale value: numeric multiples of `--spacing`,
/// `px`, fractions, and length/percentage arbitrary values.
pub fn resolve_spacing(
    value: &CandidateValue,
    negative: bool,
    theme: &ThemeTracker<'_>,
) -> Option<String> {
    let sign = if negative { "-1 * " } else { "" };
    match value {
        CandidateValue::Named(name) => match name.as_str() {
            "px" => Some(if negative { "-1px".into() } else { "1px".into() }),
            "0" => Some("0".into()),
            _ => {
                name.parse::<f64>().ok()?;
                let unit = theme.var("--spacing")?;
                Some(format!("calc({sign}{unit} * {name})"))
            }
        },
        CandidateValue::Arbitrary(raw) => {
            infer_type(
                raw,
                AllowedTypes::LENGTH | AllowedTypes::PERCENTAGE | AllowedTypes::NUMBER,
            )?;
            if negative {
                Some(format!("calc({raw} * -1)"))
            } else {
                Some(raw.clone())
            }
        }
        CandidateValue::Fraction(text) => {
            let pct = fraction_to_percent(text)?;
            if negative {
                Some(format!("calc({pct} * -1)"))
            } else {
                Some(pct)
            }
        }
    }
}

/// Resolves a line-width-shaped value: bare integers become pixel widths,
/// arbitrary values must infer as lengths or line widths.
pub fn resolve_line_width(value: &CandidateValue) -> Option<String> {
    match value {
        CandidateValue::Named(name) => {
            let width: f64 = name.parse().ok()?;
            (width.fract() == 0.0 && (0.0..=MAX_LINE_WIDTH).contains(&width))
                .then(|| format!("{}px", width as i64))
        }
        CandidateValue::Arbitrary(raw) => {
            match infer_type(raw, AllowedTypes::LENGTH | AllowedTypes::LINE_WIDTH)? {
                DataType::LineWidth => Some(format!("{raw}px")),
                _ => Some(raw.clone()),
            }
        }
        CandidateValue::Fraction(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_classification_first() {
        let any = AllowedTypes::all();
        assert_eq!(infer_type("#fff", any), Some(DataType::Color));
        assert_eq!(infer_type("#ff0000cc", any), Some(DataType::Color));
        assert_eq!(infer_type("rgb(1 2 3)", any), Some(DataType::Color));
        assert_eq!(infer_type("oklch(63.7% 0.237 25.331)", any), Some(DataType::Color));
        assert_eq!(infer_type("rebeccapurple", any), Some(DataType::Color));
        assert_eq!(infer_type("currentColor", any), Some(DataType::Color));
    }

    #[test]
    fn test_length_and_percentage() {
        let any = AllowedTypes::all();
        assert_eq!(infer_type("3px", any), Some(DataType::Length));
        assert_eq!(infer_type("1.5rem", any), Some(DataType::Length));
        assert_eq!(infer_type("50%", any), Some(DataType::Percentage));
        assert_eq!(infer_type("10banana", any), None);
    }

    #[test]
    fn test_bare_numbers() {
        let any = AllowedTypes::all();
        assert_eq!(infer_type("3", any), Some(DataType::LineWidth));
        assert_eq!(infer_type("3.5", any), Some(DataType::Number));
        assert_eq!(infer_type("400", any), Some(DataType::Number));
        assert_eq!(infer_type("3", AllowedTypes::NUMBER), Some(DataType::Number));
    }

    #[test]
    fn test_allowed_set_constrains() {
        // A color literal offered to a width-only utility must fail, not
        // guess.
        assert_eq!(infer_type("red", AllowedTypes::LENGTH), None);
        assert_eq!(infer_type("3px", AllowedTypes::COLOR), None);
    }

    #[test]
    fn test_function_values_pass_through() {
        assert_eq!(
            infer_type("var(--anything)", AllowedTypes::COLOR),
            Some(DataType::Color)
        );
        assert_eq!(
            infer_type("calc(100% - 2rem)", AllowedTypes::LENGTH),
            Some(DataType::Length)
        );
    }

    #[test]
    fn test_size_keywords() {
        let any = AllowedTypes::all();
        assert_eq!(infer_type("x-small", any), Some(DataType::AbsoluteSize));
        assert_eq!(infer_type("larger", any), Some(DataType::RelativeSize));
    }

    #[test]
    fn test_fraction_to_percent() {
        assert_eq!(fraction_to_percent("1/2").as_deref(), Some("calc(1/2 * 100%)"));
        assert_eq!(fraction_to_percent("1/0"), None);
        assert_eq!(fraction_to_percent("banana"), None);
    }

    #[test]
    fn test_apply_opacity() {
        let mixed = apply_opacity("var(--color-red-500)", &Modifier::Named("50".into())).unwrap();
        assert_eq!(
            mixed,
            "color-mix(in oklab, var(--color-red-500) 50%, transparent)"
        );
    }

    #[test]
    fn test_negative_sentinel_is_not_opacity() {
        assert_eq!(
            apply_opacity("red", &Modifier::Named(NEGATIVE_SENTINEL.into())),
            None
        );
    }

    #[test]
    fn test_arbitrary_alpha_modifier() {
        let mixed = apply_opacity("red", &Modifier::Arbitrary("0.06".into())).unwrap();
        assert!(mixed.contains("red 6%"));
    }
}
