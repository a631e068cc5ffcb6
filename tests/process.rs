//! End-to-end pipeline guarantees over the stock compiler.
//!
//! These tests pin the externally observable contract: determinism,
//! deduplication, dispatch priority, dead-variable elimination, selector
//! composition, modifier handling, invalid-class tracking, and layer
//! ordering.

use gale_rs::gcss::ast::AstNode;
use gale_rs::{Compiler, Utility, UtilityPriority};
use pretty_assertions::assert_eq;

// ============================================================================
// DETERMINISM AND DEDUPLICATION
// ============================================================================

#[test]
fn test_process_is_pure_for_fixed_configuration() {
    let compiler = Compiler::new();
    let input = "flex mb-4 md:hover:bg-red-500/50 w-1/2 -mt-4 [color:red]";
    assert_eq!(compiler.process(input), compiler.process(input));
}

#[test]
fn test_duplicate_input_yields_one_rule() {
    let css = Compiler::new().process("mb-4 mb-4");
    assert_eq!(css.matches(".mb-4 {").count(), 1);
}

// ============================================================================
// DISPATCH PRIORITY
// ============================================================================

#[test]
fn test_static_wins_over_functional_for_same_literal() {
    // The functional utility is registered first and would happily match;
    // dispatch must still pick the static.
    let compiler = Compiler::builder()
        .utility(Utility::new(
            "foo",
            UtilityPriority::StandardFunctional,
            |_c, _cx| Some(vec![AstNode::decl("--matched-by", "functional")]),
        ))
        .static_utility("foo", &[("--matched-by", "static")])
        .build();

    let css = compiler.process("foo");
    assert!(css.contains("--matched-by: static;"));
    assert!(!css.contains("--matched-by: functional;"));
}

#[test]
fn test_namespace_handler_preempts_color_on_shared_root() {
    let compiler = Compiler::new();
    // `text-lg` is a size, `text-red-500` a color; one root serves both.
    let css = compiler.process("text-lg text-red-500");
    assert!(css.contains("font-size: var(--text-lg);"));
    assert!(css.contains("color: var(--color-red-500);"));
}

// ============================================================================
// DEAD-VARIABLE ELIMINATION
// ============================================================================

#[test]
fn test_only_used_theme_variables_are_emitted() {
    let css = Compiler::new().process("bg-red-500");
    assert!(css.contains("--color-red-500:"));
    assert!(!css.contains("--color-blue-500"));
    assert!(!css.contains("--color-emerald-300"));
}

// ============================================================================
// TYPE-DRIVEN NAMESPACE FALLBACK
// ============================================================================

#[test]
fn test_border_arbitrary_length_is_width() {
    let css = Compiler::new().process("border-[3px]");
    assert!(css.contains("border-width: 3px;"));
    assert!(!css.contains("border-color"));
}

#[test]
fn test_border_arbitrary_color_is_color() {
    let css = Compiler::new().process("border-[red]");
    assert!(css.contains("border-color: red;"));
    assert!(!css.contains("border-width"));
}

// ============================================================================
// VARIANTS, MODIFIERS, MARKERS
// ============================================================================

#[test]
fn test_variant_composition_order() {
    let css = Compiler::new().process("hover:focus:bg-red-500");
    assert!(css.contains(".hover\\:focus\\:bg-red-500:hover:focus {"));
}

#[test]
fn test_opacity_modifier_uses_color_mix() {
    let css = Compiler::new().process("bg-red-500/50");
    assert!(css.contains(
        "background-color: color-mix(in oklab, var(--color-red-500) 50%, transparent);"
    ));
}

#[test]
fn test_important_marker_both_spellings() {
    let compiler = Compiler::new();
    for input in ["!bg-red-500", "bg-red-500!"] {
        let css = compiler.process(input);
        assert!(
            css.contains("background-color: var(--color-red-500) !important;"),
            "{input} should render !important"
        );
    }
}

#[test]
fn test_fraction_value() {
    let css = Compiler::new().process("w-1/2");
    assert!(css.contains(".w-1\\/2 {"));
    assert!(css.contains("width: calc(1/2 * 100%);"));
}

#[test]
fn test_negative_spacing() {
    let css = Compiler::new().process("-mt-4");
    assert!(css.contains("margin-top: calc(-1 * var(--spacing) * 4);"));
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

#[test]
fn test_invalid_classes_are_tracked_not_rendered() {
    let details = Compiler::new().process_with_details("bg-red-500 not-a-real-utility");
    assert_eq!(details.classes.len(), 1);
    assert_eq!(details.classes[0].raw, "bg-red-500");
    assert_eq!(details.classes[0].matched, "bg");
    assert_eq!(details.invalid, vec!["not-a-real-utility".to_string()]);
    assert!(!details.css.contains("not-a-real-utility"));
}

#[test]
fn test_malformed_tokens_do_not_abort_the_batch() {
    let details = Compiler::new().process_with_details("w-[10px flex");
    assert_eq!(details.invalid, vec!["w-[10px".to_string()]);
    assert!(details.css.contains("display: flex;"));
}

#[test]
fn test_type_mismatch_is_a_miss_not_an_error() {
    // A color offered to the width-only opacity utility fails inference;
    // nothing else claims the root, so the class is invalid.
    let details = Compiler::new().process_with_details("opacity-[red]");
    assert_eq!(details.invalid, vec!["opacity-[red]".to_string()]);
}

// ============================================================================
// OUTPUT STRUCTURE
// ============================================================================

#[test]
fn test_layer_header_and_order() {
    let css = Compiler::new().process("bg-red-500");
    assert!(css.starts_with("@layer theme, base, components, utilities;"));
    let theme_at = css.find("@layer theme {").unwrap();
    let utilities_at = css.find("@layer utilities {").unwrap();
    assert!(theme_at < utilities_at);
}

#[test]
fn test_arbitrary_property_passthrough() {
    let css = Compiler::new().process("[color:red]");
    assert!(css.contains(".\\[color\\:red\\] {"));
    assert!(css.contains("color: red;"));
}

#[test]
fn test_concurrent_batches_share_one_compiler() {
    let compiler = Compiler::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| compiler.process("bg-red-500 hover:flex")))
            .collect();
        let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    });
}
