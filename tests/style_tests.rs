// Host-side tests for CSS value formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn opacity_is_clamped_and_fails_open() {
    assert_eq!(opacity(0.5), "0.500");
    assert_eq!(opacity(-0.2), "0.000");
    assert_eq!(opacity(1.7), "1.000");
    // a broken curve must not hide content
    assert_eq!(opacity(f32::NAN), "1.000");
}

#[test]
fn lengths_and_percentages() {
    assert_eq!(px(76.4), "76px");
    assert_eq!(percent(42.126), "42.13%");
    assert_eq!(percent(120.0), "100.00%");
    assert_eq!(percent(-3.0), "0.00%");
}

#[test]
fn transforms() {
    assert_eq!(translate_y(-150.0), "translateY(-150.00px)");
    assert_eq!(card_transform(0.85, 30.0), "translateY(30.00px) scale(0.850)");
    assert_eq!(card_transform(1.0, 0.0), "translateY(0.00px) scale(1.000)");
}

#[test]
fn glow_shadow_clamps_inputs() {
    assert_eq!(glow_shadow(15.0, 0.6), "0 0 15.0px rgba(255,255,255,0.600)");
    assert_eq!(glow_shadow(-4.0, 2.0), "0 0 0.0px rgba(255,255,255,1.000)");
}

#[test]
fn centered_offset_positions_relative_to_middle() {
    let (left, top) = centered_offset(120.0, -80.5);
    assert_eq!(left, "calc(50% + 120.00px)");
    assert_eq!(top, "calc(50% + -80.50px)");
}

#[test]
fn observer_root_margins() {
    assert_eq!(top_inset_margin(64.0), "-64px 0px 0px 0px");
    assert_eq!(top_inset_margin(-10.0), "-0px 0px 0px 0px");
    assert_eq!(uniform_inset_margin(100.0), "-100px");
}

#[test]
fn opacity_transition_uses_duration() {
    assert_eq!(opacity_transition(800), "opacity 800ms ease");
}
