//! # Gale - A utility-first CSS engine
//!
//! Gale compiles streams of utility-class tokens (`bg-red-500/50`,
//! `hover:rounded-[10px]`, `md:flex`) into layered CSS, resolving tokens
//! against a themed namespace of design values and a stack of
//! structural/selector variants. It is a build-time compiler meant to sit
//! behind web tooling: hand it the class lists your templates use, get
//! back one deduplicated stylesheet containing only what was used.
//!
//! The compilation core lives in the [`gcss`] crate; this crate assembles
//! it into a working engine: the default theme (palette, spacing scale,
//! type scale, breakpoints), the built-in utility and variant sets, and
//! the [`Compiler`] facade.
//!
//! ## Quick Start
//!
//! ```rust
//! use gale_rs::Compiler;
//!
//! let compiler = Compiler::new();
//! let css = compiler.process("flex mb-4 hover:bg-blue-500 md:text-lg");
//!
//! assert!(css.starts_with("@layer theme, base, components, utilities;"));
//! assert!(css.contains(".hover\\:bg-blue-500:hover {"));
//! assert!(css.contains("@media (width >= 48rem) {"));
//! ```
//!
//! ## Customization
//!
//! ```rust
//! use gale_rs::{Compiler, VariantKind};
//!
//! let compiler = Compiler::builder()
//!     .theme([("--color-brand-500", "oklch(63.7% 0.237 25.331)")])
//!     .static_utility("tab-grid", &[("display", "grid"), ("gap", "0.5rem")])
//!     .variant("hocus", VariantKind::SelectorSuffix(":is(:hover, :focus)".into()))
//!     .component(".btn", "inline-flex px-4 py-2 rounded-lg bg-blue-500")
//!     .build();
//!
//! let css = compiler.process("bg-brand-500 tab-grid hocus:underline");
//! assert!(css.contains("--color-brand-500"));
//! ```
//!
//! ## Diagnostics
//!
//! Unmatched or malformed tokens never raise errors; they are reported in
//! [`ProcessDetails::invalid`] and simply omitted from the output:
//!
//! ```rust
//! use gale_rs::Compiler;
//!
//! let details = Compiler::new().process_with_details("flex not-a-thing");
//! assert_eq!(details.classes.len(), 1);
//! assert_eq!(details.invalid, vec!["not-a-thing".to_string()]);
//! ```
//!
//! ## Modules
//!
//! - [`compiler`]: The assembled engine facade
//! - [`theme`]: The default design-token set
//! - [`utilities`]: Built-in utility registrations
//! - [`variants`]: Built-in variant registrations

pub mod compiler;
pub mod theme;
pub mod utilities;
pub mod variants;

pub use compiler::{Compiler, CompilerBuilder};
pub use gcss::engine::{CompiledClass, ProcessDetails};
pub use gcss::registry::{Utility, UtilityPriority};
pub use gcss::theme::Theme;
pub use gcss::variants::VariantKind;
pub use theme::default_theme;

// The core pipeline, for callers composing their own engines.
pub use gcss;
