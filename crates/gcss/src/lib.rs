//! # GCSS - Gale CSS Compiler Core
//!
//! The compilation core of the Gale utility-first CSS engine. GCSS turns a
//! stream of utility-class tokens (`bg-red-500/50`, `hover:rounded-[10px]`,
//! `md:flex`) into CSS rules, resolving each token against a themed
//! namespace of design values and a stack of structural/selector variants.
//! This crate provides:
//!
//! - **Parsing**: Tokenize class strings into structured [`parser::Candidate`]s
//! - **Theme**: Namespace-chain token resolution with usage tracking for
//!   dead-variable elimination
//! - **Inference**: CSS data-type classification for arbitrary values
//! - **Dispatch**: Priority-ordered utility matching
//! - **Variants**: Selector composition and at-rule wrapping
//! - **Rendering**: Layered, deduplicated CSS text emission
//!
//! ## Quick Start
//!
//! ```rust
//! use gcss::ast::AstNode;
//! use gcss::engine::Engine;
//! use gcss::registry::{Utility, UtilityPriority, UtilityRegistry};
//! use gcss::theme::Theme;
//! use gcss::value::resolve_color;
//! use gcss::variants::{VariantKind, VariantRegistry};
//!
//! let theme = Theme::from_entries([("--color-red-500", "oklch(63.7% 0.237 25.331)")]);
//!
//! let mut utilities = UtilityRegistry::new();
//! utilities.add(
//!     Utility::new("bg", UtilityPriority::StandardFunctional, |c, cx| {
//!         let value = resolve_color(c.value()?, c.modifier(), &["color"], cx.theme)?;
//!         Some(vec![AstNode::decl("background-color", value)])
//!     })
//!     .with_namespaces(&["color"]),
//! );
//!
//! let mut variants = VariantRegistry::new();
//! variants.add("hover", VariantKind::Pseudo("hover".into()));
//!
//! let engine = Engine::new(theme, utilities, variants);
//! let css = engine.process("hover:bg-red-500");
//!
//! assert!(css.contains(".hover\\:bg-red-500:hover {"));
//! assert!(css.contains("--color-red-500: oklch(63.7% 0.237 25.331);"));
//! ```
//!
//! ## Pipeline
//!
//! Raw strings → parser → `Candidate` → utility dispatch (consulting the
//! theme through the usage tracker) → AST fragment → variant engine wraps
//! the selector → layer assembler accumulates → renderer emits text.
//!
//! The whole pipeline is batch-oriented and synchronous. A frozen
//! [`engine::Engine`] is shareable across threads: the only per-call
//! mutable state lives inside `process`.
//!
//! ## Modules
//!
//! - [`parser`]: Candidate tokenization
//! - [`theme`]: Theme storage and usage tracking
//! - [`value`]: Value resolution and data-type inference
//! - [`registry`]: Utility registration and priority dispatch
//! - [`variants`]: Variant resolution and selector composition
//! - [`ast`]: CSS AST nodes and the custom-property registry
//! - [`render`]: Layer assembly and text rendering
//! - [`engine`]: The batch compilation front
//! - [`error`]: Parse-error taxonomy

pub mod ast;
pub mod engine;
pub mod error;
pub mod parser;
pub mod registry;
pub mod render;
pub mod theme;
pub mod value;
pub mod variants;

pub use ast::{AstNode, PropertyRegistry};
pub use engine::{CompiledClass, Engine, ProcessDetails};
pub use error::ParseError;
pub use parser::{parse_candidate, Candidate, CandidateKind, CandidateValue};
pub use registry::{CompileCx, Utility, UtilityPriority, UtilityRegistry};
pub use theme::{Theme, ThemeTracker};
pub use value::{AllowedTypes, DataType};
pub use variants::{VariantKind, VariantRegistry};
