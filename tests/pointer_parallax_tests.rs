// Host-side tests for pointer-driven parallax layers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod pointer_parallax {
        include!("../src/core/pointer_parallax.rs");
    }
}

use crate::core::pointer_parallax::*;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 800.0);

#[test]
fn pointer_maps_to_unit_square() {
    assert_eq!(normalized_pointer(VIEWPORT / 2.0, VIEWPORT), Vec2::ZERO);
    assert_eq!(normalized_pointer(Vec2::ZERO, VIEWPORT), Vec2::NEG_ONE);
    assert_eq!(normalized_pointer(VIEWPORT, VIEWPORT), Vec2::ONE);
    assert_eq!(
        normalized_pointer(Vec2::new(960.0, 200.0), VIEWPORT),
        Vec2::new(0.5, -0.5)
    );
}

#[test]
fn pointer_outside_viewport_is_clamped() {
    let n = normalized_pointer(Vec2::new(2000.0, -300.0), VIEWPORT);
    assert_eq!(n, Vec2::new(1.0, -1.0));
}

#[test]
fn empty_viewport_reads_as_centre() {
    assert_eq!(normalized_pointer(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
    assert_eq!(
        normalized_pointer(Vec2::new(10.0, 10.0), Vec2::new(800.0, 0.0)),
        Vec2::ZERO
    );
}

#[test]
fn offset_scales_with_depth() {
    // headline at 15, subtitle at 10, orbit rings against the pointer
    assert_eq!(parallax_offset(Vec2::new(1.0, 0.0), 15.0), Vec2::new(15.0, 0.0));
    assert_eq!(parallax_offset(Vec2::new(-0.5, 1.0), 10.0), Vec2::new(-5.0, 10.0));
    assert_eq!(parallax_offset(Vec2::new(1.0, 1.0), -30.0), Vec2::new(-30.0, -30.0));
}

#[test]
fn tilt_follows_x_and_opposes_y() {
    let tilt = parallax_tilt(Vec2::new(1.0, 0.5), 10.0);
    assert_eq!(tilt, Vec2::new(-5.0, 10.0));
    assert_eq!(parallax_tilt(Vec2::new(0.7, -0.3), 0.0), Vec2::ZERO);
}

#[test]
fn desktop_only() {
    assert!(!pointer_parallax_enabled(1023.0));
    assert!(pointer_parallax_enabled(1024.0));
    assert!(pointer_parallax_enabled(1920.0));
}

#[test]
fn layer_eases_onto_target_within_duration() {
    let mut layer = PointerParallax::new(15.0, 10.0, POINTER_PARALLAX_DURATION_SEC);
    assert!(layer.is_settled());
    layer.pointer_moved(Vec2::new(1.0, -1.0));
    assert!(!layer.is_settled());

    let mid = layer.advance(POINTER_PARALLAX_DURATION_SEC / 2.0);
    assert!(mid.offset.x > 0.0 && mid.offset.x < 15.0);
    assert!(mid.offset.y < 0.0 && mid.offset.y > -15.0);

    let end = layer.advance(POINTER_PARALLAX_DURATION_SEC / 2.0);
    assert_eq!(end, layer.target());
    assert_eq!(end.offset, Vec2::new(15.0, -15.0));
    assert_eq!(end.tilt, Vec2::new(10.0, 10.0));
    assert!(layer.is_settled());
}

#[test]
fn still_pointer_does_not_restart_the_ease() {
    let mut layer = PointerParallax::new(20.0, 0.0, 1.0);
    let n = Vec2::new(0.5, 0.0);
    layer.pointer_moved(n);
    layer.advance(0.6);
    layer.pointer_moved(n);
    let sample = layer.advance(0.4);
    assert_eq!(sample.offset, Vec2::new(10.0, 0.0));
}

#[test]
fn recenter_returns_home() {
    let mut layer = PointerParallax::new(-20.0, 5.0, 1.0);
    layer.pointer_moved(Vec2::new(1.0, 1.0));
    layer.advance(1.0);
    assert_eq!(layer.sample().offset, Vec2::new(-20.0, -20.0));

    layer.recenter();
    let back = layer.advance(1.0);
    assert_eq!(back.offset, Vec2::ZERO);
    assert_eq!(back.tilt, Vec2::ZERO);

    // recentering a resting layer leaves it settled
    layer.recenter();
    assert!(layer.is_settled());
}

#[test]
fn moving_again_after_recenter_retargets() {
    let mut layer = PointerParallax::new(10.0, 0.0, 1.0);
    let n = Vec2::new(1.0, 0.0);
    layer.pointer_moved(n);
    layer.advance(1.0);
    layer.recenter();
    layer.advance(1.0);
    layer.pointer_moved(n);
    assert_eq!(layer.advance(1.0).offset, Vec2::new(10.0, 0.0));
}
