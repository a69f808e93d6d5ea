// Host-side tests for magnetic hover easing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod magnetic {
        include!("../src/core/magnetic.rs");
    }
}

use crate::core::easing::SpringParams;
use crate::core::geometry::Rect;
use crate::core::magnetic::*;
use glam::Vec2;

const FRAME: f32 = 1.0 / 60.0;

// 100x50 button centred on (150, 125)
fn button() -> Rect {
    Rect::new(100.0, 100.0, 100.0, 50.0)
}

fn pointer_right_of_center(dx: f32) -> Vec2 {
    button().center() + Vec2::new(dx, 0.0)
}

#[test]
fn offset_is_pointer_delta_times_strength() {
    let offset = magnetic_offset(pointer_right_of_center(100.0), &button(), 0.3);
    assert!((offset - Vec2::new(30.0, 0.0)).length() < 1e-4);

    let offset = magnetic_offset(Vec2::new(100.0, 100.0), &button(), 0.2);
    assert!((offset - Vec2::new(-10.0, -5.0)).length() < 1e-4);
}

#[test]
fn default_strength_targets_thirty_percent() {
    let mut m = Magnetic::default();
    assert_eq!(m.strength(), DEFAULT_STRENGTH);
    m.pointer_moved(pointer_right_of_center(100.0), &button());
    assert!((m.target() - Vec2::new(30.0, 0.0)).length() < 1e-4);
    // eased, not an instant jump
    assert_eq!(m.offset(), Vec2::ZERO);
}

#[test]
fn strength_is_clamped() {
    assert_eq!(Magnetic::new(2.0, MagneticMotion::default()).strength(), MAX_STRENGTH);
    assert_eq!(Magnetic::new(0.0, MagneticMotion::default()).strength(), MIN_STRENGTH);
    assert_eq!(Magnetic::new(0.25, MagneticMotion::default()).strength(), 0.25);
}

#[test]
fn elastic_motion_settles_on_target_within_overshoot_bound() {
    let mut m = Magnetic::default();
    let bound = 30.0 * (1.0 + m.motion().max_overshoot());
    m.pointer_moved(pointer_right_of_center(100.0), &button());
    for _ in 0..70 {
        let offset = m.advance(FRAME);
        assert!(offset.x <= bound + 1e-3, "offset {offset:?} past {bound}");
        assert!(offset.y.abs() < 1e-4);
    }
    assert!(m.is_settled());
    assert_eq!(m.offset(), m.target());
}

#[test]
fn spring_motion_approaches_without_overshoot() {
    let motion = MagneticMotion::Spring(SpringParams::MAGNETIC);
    assert_eq!(motion.max_overshoot(), 0.0);
    let mut m = Magnetic::new(0.3, motion);
    m.pointer_moved(pointer_right_of_center(100.0), &button());
    let mut last = 0.0;
    for _ in 0..120 {
        let x = m.advance(FRAME).x;
        assert!(x >= last && x <= m.target().x + 1e-4);
        last = x;
    }
    assert!(m.is_settled());
    assert!((m.offset().x - 30.0).abs() < 1e-4);
}

#[test]
fn underdamped_spring_reports_overshoot() {
    let loose = SpringParams {
        stiffness: 300.0,
        damping: 2.0,
        mass: 1.0,
    };
    assert!(MagneticMotion::Spring(loose).max_overshoot() > 0.0);
}

#[test]
fn leaving_returns_to_rest() {
    for motion in [
        MagneticMotion::default(),
        MagneticMotion::Spring(SpringParams::MAGNETIC),
    ] {
        let mut m = Magnetic::new(DEFAULT_STRENGTH, motion);
        m.pointer_moved(pointer_right_of_center(-80.0), &button());
        for _ in 0..20 {
            m.advance(FRAME);
        }
        m.pointer_left();
        assert_eq!(m.target(), Vec2::ZERO);
        for _ in 0..150 {
            m.advance(FRAME);
        }
        assert!(m.is_settled(), "{motion:?} did not settle");
        assert!(m.offset().length() < 1e-4);
    }
}

#[test]
fn retarget_mid_flight_does_not_jump() {
    let mut m = Magnetic::default();
    m.pointer_moved(pointer_right_of_center(100.0), &button());
    for _ in 0..10 {
        m.advance(FRAME);
    }
    let before = m.offset();
    m.pointer_moved(pointer_right_of_center(40.0), &button());
    assert!((m.offset() - before).length() < 1e-4);
    m.pointer_left();
    assert!((m.offset() - before).length() < 1e-4);
}
