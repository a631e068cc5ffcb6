//! The default Gale theme.
//!
//! Generates the stock design-token set: a full color palette (22 hue
//! families, 11 shades each, generated from per-family hue/chroma seeds),
//! the spacing scale unit, responsive and container breakpoints, the type
//! scale, and the radius/shadow/blur ramps.
//!
//! Palette generation works the way a color system does: a small seed per
//! family expands into a fixed shade ramp, rather than hand-maintaining
//! hundreds of literals. Values are oklch so that opacity modifiers
//! (`color-mix(in oklab, …)`) interpolate in a perceptual space.

use gcss::theme::Theme;
use once_cell::sync::Lazy;

/// Shade ramp: (shade name, lightness %, chroma multiplier).
///
/// The chroma multiplier scales each family's peak chroma so ramps keep a
/// consistent saturation envelope across hues.
const SHADE_RAMP: [(&str, f32, f32); 11] = [
    ("50", 97.0, 0.10),
    ("100", 93.6, 0.25),
    ("200", 88.5, 0.45),
    ("300", 80.8, 0.65),
    ("400", 70.4, 0.85),
    ("500", 63.7, 1.00),
    ("600", 57.7, 0.95),
    ("700", 50.5, 0.80),
    ("800", 44.4, 0.65),
    ("900", 39.6, 0.50),
    ("950", 25.8, 0.35),
];

/// Color families: (name, hue angle, peak chroma).
const FAMILIES: [(&str, f32, f32); 22] = [
    ("slate", 257.0, 0.041),
    ("gray", 264.0, 0.033),
    ("zinc", 286.0, 0.016),
    ("neutral", 0.0, 0.000),
    ("stone", 58.0, 0.016),
    ("red", 25.3, 0.237),
    ("orange", 47.6, 0.217),
    ("amber", 70.1, 0.213),
    ("yellow", 86.0, 0.196),
    ("lime", 130.8, 0.247),
    ("green", 149.6, 0.219),
    ("emerald", 163.2, 0.177),
    ("teal", 182.5, 0.146),
    ("cyan", 215.0, 0.152),
    ("sky", 237.3, 0.178),
    ("blue", 259.8, 0.214),
    ("indigo", 275.3, 0.218),
    ("violet", 293.5, 0.243),
    ("purple", 303.9, 0.244),
    ("fuchsia", 322.1, 0.262),
    ("pink", 354.3, 0.247),
    ("rose", 16.4, 0.246),
];

/// Fixed (non-generated) theme entries.
const STATIC_ENTRIES: &[(&str, &str)] = &[
    ("--color-black", "#000"),
    ("--color-white", "#fff"),
    // Spacing scale unit; numeric utilities multiply it.
    ("--spacing", "0.25rem"),
    // Responsive breakpoints.
    ("--breakpoint-sm", "40rem"),
    ("--breakpoint-md", "48rem"),
    ("--breakpoint-lg", "64rem"),
    ("--breakpoint-xl", "80rem"),
    ("--breakpoint-2xl", "96rem"),
    // Container query sizes.
    ("--container-3xs", "16rem"),
    ("--container-2xs", "18rem"),
    ("--container-xs", "20rem"),
    ("--container-sm", "24rem"),
    ("--container-md", "28rem"),
    ("--container-lg", "32rem"),
    ("--container-xl", "36rem"),
    ("--container-2xl", "42rem"),
    ("--container-3xl", "48rem"),
    ("--container-4xl", "56rem"),
    ("--container-5xl", "64rem"),
    ("--container-6xl", "72rem"),
    ("--container-7xl", "80rem"),
    // Font stacks.
    (
        "--font-sans",
        "ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\"",
    ),
    (
        "--font-serif",
        "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif",
    ),
    (
        "--font-mono",
        "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", monospace",
    ),
    // Type scale: size plus a paired default line-height.
    ("--text-xs", "0.75rem"),
    ("--text-xs--line-height", "calc(1 / 0.75)"),
    ("--text-sm", "0.875rem"),
    ("--text-sm--line-height", "calc(1.25 / 0.875)"),
    ("--text-base", "1rem"),
    ("--text-base--line-height", "calc(1.5 / 1)"),
    ("--text-lg", "1.125rem"),
    ("--text-lg--line-height", "calc(1.75 / 1.125)"),
    ("--text-xl", "1.25rem"),
    ("--text-xl--line-height", "calc(1.75 / 1.25)"),
    ("--text-2xl", "1.5rem"),
    ("--text-2xl--line-height", "calc(2 / 1.5)"),
    ("--text-3xl", "1.875rem"),
    ("--text-3xl--line-height", "calc(2.25 / 1.875)"),
    ("--text-4xl", "2.25rem"),
    ("--text-4xl--line-height", "calc(2.5 / 2.25)"),
    ("--text-5xl", "3rem"),
    ("--text-5xl--line-height", "1"),
    ("--text-6xl", "3.75rem"),
    ("--text-6xl--line-height", "1"),
    ("--text-7xl", "4.5rem"),
    ("--text-7xl--line-height", "1"),
    ("--text-8xl", "6rem"),
    ("--text-8xl--line-height", "1"),
    ("--text-9xl", "8rem"),
    ("--text-9xl--line-height", "1"),
    // Font weights.
    ("--font-weight-thin", "100"),
    ("--font-weight-extralight", "200"),
    ("--font-weight-light", "300"),
    ("--font-weight-normal", "400"),
    ("--font-weight-medium", "500"),
    ("--font-weight-semibold", "600"),
    ("--font-weight-bold", "700"),
    ("--font-weight-extrabold", "800"),
    ("--font-weight-black", "900"),
    // Letter spacing.
    ("--tracking-tighter", "-0.05em"),
    ("--tracking-tight", "-0.025em"),
    ("--tracking-normal", "0em"),
    ("--tracking-wide", "0.025em"),
    ("--tracking-wider", "0.05em"),
    ("--tracking-widest", "0.1em"),
    // Line heights.
    ("--leading-none", "1"),
    ("--leading-tight", "1.25"),
    ("--leading-snug", "1.375"),
    ("--leading-normal", "1.5"),
    ("--leading-relaxed", "1.625"),
    ("--leading-loose", "2"),
    // Border radii.
    ("--radius-xs", "0.125rem"),
    ("--radius-sm", "0.25rem"),
    ("--radius-md", "0.375rem"),
    ("--radius-lg", "0.5rem"),
    ("--radius-xl", "0.75rem"),
    ("--radius-2xl", "1rem"),
    ("--radius-3xl", "1.5rem"),
    ("--radius-4xl", "2rem"),
    // Shadows.
    ("--shadow-2xs", "0 1px rgb(0 0 0 / 0.05)"),
    ("--shadow-xs", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "--shadow-sm",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    ),
    (
        "--shadow-md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "--shadow-lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "--shadow-xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("--shadow-2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    // Blur sizes.
    ("--blur-xs", "4px"),
    ("--blur-sm", "8px"),
    ("--blur-md", "12px"),
    ("--blur-lg", "16px"),
    ("--blur-xl", "24px"),
    ("--blur-2xl", "40px"),
    ("--blur-3xl", "64px"),
    // Transitions.
    ("--default-transition-duration", "150ms"),
    (
        "--default-transition-timing-function",
        "cubic-bezier(0.4, 0, 0.2, 1)",
    ),
];

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(build_default_theme);

/// Lists `(suffix, value)` pairs for every theme entry under a prefix,
/// in theme order (`--breakpoint-` → `[("sm", "40rem"), …]`).
pub fn theme_prefix_entries(theme: &Theme, prefix: &str) -> Vec<(String, String)> {
    theme
        .entries()
        .filter_map(|(name, value)| {
            let suffix = name.strip_prefix(prefix)?;
            Some((suffix.to_string(), value.to_string()))
        })
        .collect()
}

/// The stock theme shared by every default compiler.
pub fn default_theme() -> Theme {
    DEFAULT_THEME.clone()
}

fn build_default_theme() -> Theme {
    let mut entries: Vec<(String, String)> = Vec::new();

    for (family, hue, peak_chroma) in FAMILIES {
        for (shade, lightness, chroma_scale) in SHADE_RAMP {
            let chroma = peak_chroma * chroma_scale;
            let value = if chroma < 0.001 {
                format!("oklch({lightness:.1}% 0 0)")
            } else {
                format!("oklch({lightness:.1}% {chroma:.3} {hue})")
            };
            entries.push((format!("--color-{family}-{shade}"), value));
        }
    }

    for (name, value) in STATIC_ENTRIES {
        entries.push(((*name).to_string(), (*value).to_string()));
    }

    Theme::from_entries(entries)
}
