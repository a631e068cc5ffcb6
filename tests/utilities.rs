//! Built-in utility coverage: one representative assertion per family.

use gale_rs::Compiler;

fn css_for(input: &str) -> String {
    Compiler::new().process(input)
}

// ============================================================================
// LAYOUT
// ============================================================================

#[test]
fn test_display_statics() {
    assert!(css_for("flex").contains("display: flex;"));
    assert!(css_for("hidden").contains("display: none;"));
    assert!(css_for("inline-grid").contains("display: inline-grid;"));
}

#[test]
fn test_flex_helpers() {
    assert!(css_for("flex-col").contains("flex-direction: column;"));
    assert!(css_for("grow-0").contains("flex-grow: 0;"));
    assert!(css_for("flex-1").contains("flex: 1;"));
}

#[test]
fn test_alignment() {
    assert!(css_for("items-center").contains("align-items: center;"));
    assert!(css_for("justify-between").contains("justify-content: space-between;"));
}

#[test]
fn test_inset_family() {
    let css = css_for("inset-x-0");
    assert!(css.contains("left: 0;"));
    assert!(css.contains("right: 0;"));
    assert!(css_for("top-4").contains("top: calc(var(--spacing) * 4);"));
    assert!(css_for("-left-2").contains("left: calc(-1 * var(--spacing) * 2);"));
}

#[test]
fn test_z_index() {
    assert!(css_for("z-10").contains("z-index: 10;"));
    assert!(css_for("-z-10").contains("z-index: -10;"));
    assert!(css_for("z-auto").contains("z-index: auto;"));
}

#[test]
fn test_grid_template_and_span() {
    assert!(css_for("grid-cols-3").contains("grid-template-columns: repeat(3, minmax(0, 1fr));"));
    assert!(css_for("col-span-2").contains("grid-column: span 2 / span 2;"));
    assert!(css_for("row-span-full").contains("grid-row: 1 / -1;"));
}

#[test]
fn test_aspect_ratio() {
    assert!(css_for("aspect-video").contains("aspect-ratio: 16 / 9;"));
    assert!(css_for("aspect-3/4").contains("aspect-ratio: 3 / 4;"));
}

#[test]
fn test_sr_only_is_multi_declaration() {
    let css = css_for("sr-only");
    assert!(css.contains("clip-path: inset(50%);"));
    assert!(css.contains("white-space: nowrap;"));
}

// ============================================================================
// SPACING
// ============================================================================

#[test]
fn test_spacing_scale() {
    assert!(css_for("mb-4").contains("margin-bottom: calc(var(--spacing) * 4);"));
    assert!(css_for("p-px").contains("padding: 1px;"));
    assert!(css_for("m-auto").contains("margin: auto;"));
    assert!(css_for("gap-2").contains("gap: calc(var(--spacing) * 2);"));
}

#[test]
fn test_spacing_theme_variable_is_emitted_when_used() {
    let css = css_for("mb-4");
    assert!(css.contains("--spacing: 0.25rem;"));
}

#[test]
fn test_padding_rejects_negative() {
    let details = Compiler::new().process_with_details("-p-4");
    assert_eq!(details.invalid, vec!["-p-4".to_string()]);
}

#[test]
fn test_space_between_emits_child_rule() {
    let css = css_for("space-x-2");
    assert!(css.contains(".space-x-2 > :not(:last-child) {"));
    assert!(css.contains("margin-left: calc(var(--spacing) * 2);"));
}

#[test]
fn test_arbitrary_spacing() {
    assert!(css_for("mt-[7px]").contains("margin-top: 7px;"));
    assert!(css_for("w-[calc(100%_-_2rem)]").contains("width: calc(100% - 2rem);"));
}

// ============================================================================
// SIZING
// ============================================================================

#[test]
fn test_sizing_keywords_and_fractions() {
    assert!(css_for("w-full").contains("width: 100%;"));
    assert!(css_for("h-screen").contains("height: 100vh;"));
    assert!(css_for("w-1/3").contains("width: calc(1/3 * 100%);"));
    let css = css_for("size-8");
    assert!(css.contains("width: calc(var(--spacing) * 8);"));
    assert!(css.contains("height: calc(var(--spacing) * 8);"));
}

#[test]
fn test_max_width_uses_container_scale() {
    let css = css_for("max-w-md");
    assert!(css.contains("max-width: var(--container-md);"));
    assert!(css.contains("--container-md: 28rem;"));
}

// ============================================================================
// TYPOGRAPHY
// ============================================================================

#[test]
fn test_text_size_with_paired_line_height() {
    let css = css_for("text-lg");
    assert!(css.contains("font-size: var(--text-lg);"));
    assert!(css.contains("line-height: var(--text-lg--line-height);"));
}

#[test]
fn test_text_size_line_height_modifier() {
    let css = css_for("text-lg/7");
    assert!(css.contains("font-size: var(--text-lg);"));
    assert!(css.contains("line-height: calc(var(--spacing) * 7);"));
}

#[test]
fn test_text_color_and_alignment() {
    assert!(css_for("text-red-500").contains("color: var(--color-red-500);"));
    assert!(css_for("text-center").contains("text-align: center;"));
}

#[test]
fn test_text_arbitrary_size() {
    assert!(css_for("text-[20px]").contains("font-size: 20px;"));
}

#[test]
fn test_font_weight_and_family_share_root() {
    assert!(css_for("font-bold").contains("font-weight: var(--font-weight-bold);"));
    assert!(css_for("font-sans").contains("font-family: var(--font-sans);"));
}

#[test]
fn test_leading_and_tracking() {
    assert!(css_for("leading-tight").contains("line-height: var(--leading-tight);"));
    assert!(css_for("leading-6").contains("line-height: calc(var(--spacing) * 6);"));
    assert!(css_for("tracking-wide").contains("letter-spacing: var(--tracking-wide);"));
    assert!(css_for("-tracking-wide").contains("letter-spacing: calc(0.025em * -1);"));
}

#[test]
fn test_decoration_statics() {
    assert!(css_for("underline").contains("text-decoration-line: underline;"));
    assert!(css_for("uppercase").contains("text-transform: uppercase;"));
    let truncate = css_for("truncate");
    assert!(truncate.contains("text-overflow: ellipsis;"));
    assert!(truncate.contains("white-space: nowrap;"));
}

// ============================================================================
// COLORS
// ============================================================================

#[test]
fn test_color_chain_utilities() {
    assert!(css_for("bg-blue-500").contains("background-color: var(--color-blue-500);"));
    assert!(css_for("fill-red-500").contains("fill: var(--color-red-500);"));
    assert!(css_for("accent-pink-500").contains("accent-color: var(--color-pink-500);"));
}

#[test]
fn test_special_color_keywords() {
    assert!(css_for("bg-transparent").contains("background-color: transparent;"));
    assert!(css_for("text-current").contains("color: currentcolor;"));
    assert!(css_for("bg-inherit").contains("background-color: inherit;"));
}

#[test]
fn test_stroke_splits_width_and_paint() {
    assert!(css_for("stroke-2").contains("stroke-width: 2;"));
    assert!(css_for("stroke-red-500").contains("stroke: var(--color-red-500);"));
}

// ============================================================================
// BORDERS, RADII, RINGS
// ============================================================================

#[test]
fn test_border_widths_and_colors() {
    assert!(css_for("border").contains("border-width: 1px;"));
    assert!(css_for("border-2").contains("border-width: 2px;"));
    assert!(css_for("border-t-2").contains("border-top-width: 2px;"));
    assert!(css_for("border-red-500").contains("border-color: var(--color-red-500);"));
    let css = css_for("border-x-4");
    assert!(css.contains("border-left-width: 4px;"));
    assert!(css.contains("border-right-width: 4px;"));
}

#[test]
fn test_border_style_statics() {
    assert!(css_for("border-dashed").contains("border-style: dashed;"));
}

#[test]
fn test_border_color_with_opacity_modifier() {
    assert!(css_for("border-red-500/25").contains(
        "border-color: color-mix(in oklab, var(--color-red-500) 25%, transparent);"
    ));
}

#[test]
fn test_radius_scale() {
    assert!(css_for("rounded-lg").contains("border-radius: var(--radius-lg);"));
    assert!(css_for("rounded-full").contains("border-radius: calc(infinity * 1px);"));
    let css = css_for("rounded-t-xl");
    assert!(css.contains("border-top-left-radius: var(--radius-xl);"));
    assert!(css.contains("border-top-right-radius: var(--radius-xl);"));
}

#[test]
fn test_ring_slot_and_property_default() {
    let css = css_for("ring-2 ring-red-500");
    assert!(css.contains("box-shadow: 0 0 0 2px var(--gale-ring-color);"));
    assert!(css.contains("--gale-ring-color: var(--color-red-500);"));
    assert_eq!(css.matches("@property --gale-ring-color {").count(), 1);
    assert!(css.contains("initial-value: currentcolor;"));
}

#[test]
fn test_outline() {
    assert!(css_for("outline-2").contains("outline-width: 2px;"));
    assert!(css_for("outline-red-500").contains("outline-color: var(--color-red-500);"));
}

// ============================================================================
// EFFECTS
// ============================================================================

#[test]
fn test_opacity() {
    assert!(css_for("opacity-50").contains("opacity: 50%;"));
    assert!(css_for("opacity-[0.33]").contains("opacity: 0.33;"));
}

#[test]
fn test_shadow_and_blur() {
    assert!(css_for("shadow-md").contains("box-shadow: var(--shadow-md);"));
    assert!(css_for("shadow-none").contains("box-shadow: 0 0 #0000;"));
    assert!(css_for("blur-lg").contains("filter: blur(var(--blur-lg));"));
}
