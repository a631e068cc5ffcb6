//! Built-in variant registrations.
//!
//! Exact-name variants (pseudo-classes, pseudo-elements, media states)
//! register against the static table; parameterized families (`group-*`,
//! `peer-*`, `data-*`, `min-[…]`, `supports-[…]`) register as dynamic
//! matchers. Responsive and container breakpoints are read from the theme
//! at assembly time, so a custom `--breakpoint-*` entry automatically
//! becomes a variant.

use crate::theme::theme_prefix_entries;
use gcss::theme::Theme;
use gcss::variants::{VariantKind, VariantRegistry};
use phf::phf_map;

/// Variant name → CSS pseudo-class fragment (without the leading colon).
///
/// Utility-language names often differ from their CSS equivalents
/// (`first` → `first-child`, `odd` → `nth-child(odd)`); this table is the
/// single source of truth for the mapping, shared with the `group-*` and
/// `peer-*` resolvers.
static PSEUDO_CLASSES: phf::Map<&'static str, &'static str> = phf_map! {
    "hover" => "hover",
    "focus" => "focus",
    "focus-within" => "focus-within",
    "focus-visible" => "focus-visible",
    "active" => "active",
    "visited" => "visited",
    "target" => "target",
    "empty" => "empty",
    "disabled" => "disabled",
    "enabled" => "enabled",
    "checked" => "checked",
    "indeterminate" => "indeterminate",
    "default" => "default",
    "required" => "required",
    "optional" => "optional",
    "valid" => "valid",
    "invalid" => "invalid",
    "in-range" => "in-range",
    "out-of-range" => "out-of-range",
    "placeholder-shown" => "placeholder-shown",
    "autofill" => "autofill",
    "read-only" => "read-only",
    "first" => "first-child",
    "last" => "last-child",
    "only" => "only-child",
    "odd" => "nth-child(odd)",
    "even" => "nth-child(even)",
    "first-of-type" => "first-of-type",
    "last-of-type" => "last-of-type",
    "only-of-type" => "only-of-type",
};

/// Variant name → CSS pseudo-element (double-colon form).
const PSEUDO_ELEMENTS: &[(&str, &str)] = &[
    ("before", "before"),
    ("after", "after"),
    ("placeholder", "placeholder"),
    ("selection", "selection"),
    ("marker", "marker"),
    ("backdrop", "backdrop"),
    ("first-line", "first-line"),
    ("first-letter", "first-letter"),
    ("file", "file-selector-button"),
];

/// Media-state variants with fixed queries.
const MEDIA_STATES: &[(&str, &str)] = &[
    ("motion-safe", "(prefers-reduced-motion: no-preference)"),
    ("motion-reduce", "(prefers-reduced-motion: reduce)"),
    ("contrast-more", "(prefers-contrast: more)"),
    ("contrast-less", "(prefers-contrast: less)"),
    ("portrait", "(orientation: portrait)"),
    ("landscape", "(orientation: landscape)"),
    ("print", "print"),
    ("forced-colors", "(forced-colors: active)"),
    ("pointer-fine", "(pointer: fine)"),
    ("pointer-coarse", "(pointer: coarse)"),
    ("pointer-none", "(pointer: none)"),
];

/// Registers the full built-in variant set against the given theme.
pub fn register_all(registry: &mut VariantRegistry, theme: &Theme) {
    for (name, fragment) in PSEUDO_CLASSES.entries() {
        registry.add(*name, VariantKind::Pseudo((*fragment).to_string()));
    }
    for (name, element) in PSEUDO_ELEMENTS {
        registry.add(*name, VariantKind::PseudoElement((*element).to_string()));
    }
    for (name, query) in MEDIA_STATES {
        registry.add(
            *name,
            VariantKind::AtRule {
                name: "media".to_string(),
                params: (*query).to_string(),
            },
        );
    }

    // Dark mode: class strategy, matching `.dark` on any ancestor.
    registry.add(
        "dark",
        VariantKind::Ancestor(":where(.dark, .dark *)".to_string()),
    );

    // Text direction.
    registry.add(
        "rtl",
        VariantKind::SelectorSuffix(
            ":where(:dir(rtl), [dir=\"rtl\"], [dir=\"rtl\"] *)".to_string(),
        ),
    );
    registry.add(
        "ltr",
        VariantKind::SelectorSuffix(
            ":where(:dir(ltr), [dir=\"ltr\"], [dir=\"ltr\"] *)".to_string(),
        ),
    );

    register_breakpoints(registry, theme);
    register_dynamics(registry);
}

/// Responsive (`sm`, `max-sm`) and container (`@sm`, `@max-sm`) variants,
/// with widths inlined from the theme at assembly time.
fn register_breakpoints(registry: &mut VariantRegistry, theme: &Theme) {
    for (name, width) in theme_prefix_entries(theme, "--breakpoint-") {
        registry.add(
            name.clone(),
            VariantKind::AtRule {
                name: "media".to_string(),
                params: format!("(width >= {width})"),
            },
        );
        registry.add(
            format!("max-{name}"),
            VariantKind::AtRule {
                name: "media".to_string(),
                params: format!("(width < {width})"),
            },
        );
    }

    for (name, width) in theme_prefix_entries(theme, "--container-") {
        registry.add(
            format!("@{name}"),
            VariantKind::AtRule {
                name: "container".to_string(),
                params: format!("(width >= {width})"),
            },
        );
        registry.add(
            format!("@max-{name}"),
            VariantKind::AtRule {
                name: "container".to_string(),
                params: format!("(width < {width})"),
            },
        );
    }
}

fn register_dynamics(registry: &mut VariantRegistry) {
    registry.add_dynamic("min-width", |token| {
        let arg = token.argument.as_deref()?;
        (token.name == "min").then(|| VariantKind::AtRule {
            name: "media".to_string(),
            params: format!("(width >= {arg})"),
        })
    });
    registry.add_dynamic("max-width", |token| {
        let arg = token.argument.as_deref()?;
        (token.name == "max").then(|| VariantKind::AtRule {
            name: "media".to_string(),
            params: format!("(width < {arg})"),
        })
    });
    registry.add_dynamic("container-min-width", |token| {
        let arg = token.argument.as_deref()?;
        (token.name == "@min").then(|| VariantKind::AtRule {
            name: "container".to_string(),
            params: format!("(width >= {arg})"),
        })
    });
    registry.add_dynamic("supports", |token| {
        let arg = token.argument.as_deref()?;
        if token.name != "supports" {
            return None;
        }
        let params = if arg.starts_with('(') {
            arg.to_string()
        } else {
            format!("({arg})")
        };
        Some(VariantKind::AtRule {
            name: "supports".to_string(),
            params,
        })
    });

    registry.add_dynamic("data-attribute", |token| {
        let arg = token.argument.as_deref()?;
        (token.name == "data").then(|| VariantKind::SelectorSuffix(format!("[data-{arg}]")))
    });
    registry.add_dynamic("aria-attribute", |token| {
        if let Some(arg) = token.argument.as_deref() {
            return (token.name == "aria")
                .then(|| VariantKind::SelectorSuffix(format!("[aria-{arg}]")));
        }
        let state = token.name.strip_prefix("aria-")?;
        Some(VariantKind::SelectorSuffix(format!("[aria-{state}=\"true\"]")))
    });

    registry.add_dynamic("group", |token| {
        if token.name == "group" {
            let arg = token.argument.as_deref()?;
            return Some(VariantKind::SelectorSuffix(format!(
                ":is(:where(.group){arg} *)"
            )));
        }
        let rest = token.name.strip_prefix("group-")?;
        let fragment = pseudo_class_fragment(rest)?;
        Some(VariantKind::SelectorSuffix(format!(
            ":is(:where(.group):{fragment} *)"
        )))
    });
    registry.add_dynamic("peer", |token| {
        if token.name == "peer" {
            let arg = token.argument.as_deref()?;
            return Some(VariantKind::SelectorSuffix(format!(
                ":is(:where(.peer){arg} ~ *)"
            )));
        }
        let rest = token.name.strip_prefix("peer-")?;
        let fragment = pseudo_class_fragment(rest)?;
        Some(VariantKind::SelectorSuffix(format!(
            ":is(:where(.peer):{fragment} ~ *)"
        )))
    });

    registry.add_dynamic("relational-pseudo", |token| {
        let arg = token.argument.as_deref()?;
        let pseudo = match token.name.as_str() {
            "has" => format!(":has({arg})"),
            "not" => format!(":not({arg})"),
            "nth" => format!(":nth-child({arg})"),
            "nth-last" => format!(":nth-last-child({arg})"),
            "nth-of-type" => format!(":nth-of-type({arg})"),
            "nth-last-of-type" => format!(":nth-last-of-type({arg})"),
            _ => return None,
        };
        Some(VariantKind::SelectorSuffix(pseudo))
    });
}

/// Shared pseudo-class lookup for the `group-*`/`peer-*` resolvers.
fn pseudo_class_fragment(name: &str) -> Option<&'static str> {
    PSEUDO_CLASSES.get(name).copied()
}
