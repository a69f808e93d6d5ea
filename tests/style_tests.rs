// Host-side tests for redundant style-write filtering.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod style {
        include!("../src/core/style.rs");
    }
}

use crate::core::style::*;
use glam::Vec2;

#[test]
#[allow(clippy::assertions_on_constants)]
fn epsilon_is_below_a_visible_step() {
    assert!(STYLE_EPSILON > 0.0 && STYLE_EPSILON < 0.01);
}

#[test]
fn first_value_is_always_written() {
    let mut w = Written::<f32>::default();
    assert_eq!(w.get(), None);
    assert!(w.update(0.0, false));
    assert_eq!(w.get(), Some(0.0));
}

#[test]
fn small_moves_are_skipped_while_animating() {
    let mut w = Written::default();
    w.update(1.0_f32, false);
    assert!(!w.update(1.0 + STYLE_EPSILON * 0.5, false));
    // the skipped value is not recorded, so drift accumulates
    assert_eq!(w.get(), Some(1.0));
    assert!(w.update(1.0 + STYLE_EPSILON * 2.0, false));
    assert!(!w.update(1.0 + STYLE_EPSILON * 2.0, false));
}

#[test]
fn settled_value_lands_exactly() {
    // a fade ending at 0 whose last step is below the epsilon
    let mut w = Written::default();
    w.update(0.3_f32, false);
    w.update(1e-5, false);
    assert!(!w.update(0.0, false));
    assert!(w.update(0.0, true));
    assert_eq!(w.get(), Some(0.0));
    assert!(!w.update(0.0, true));
}

#[test]
fn vectors_compare_per_component() {
    let mut w = Written::default();
    w.update(Vec2::new(10.0, 10.0), false);
    assert!(!w.update(Vec2::new(10.0005, 9.9995), false));
    assert!(w.update(Vec2::new(10.0, 10.01), false));
}

#[test]
fn reset_reports_whether_anything_was_written() {
    let mut w = Written::<Vec2>::default();
    assert!(!w.reset());
    w.update(Vec2::ONE, false);
    assert!(w.reset());
    assert!(!w.reset());
    // written again after a teardown
    assert!(w.update(Vec2::ONE, false));
}
