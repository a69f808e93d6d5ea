// Host-side tests for easing curves, tweens and springs.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
}

use crate::core::easing::*;

const ALL_EASES: [Ease; 8] = [
    Ease::Linear,
    Ease::POWER2_OUT,
    Ease::POWER3_OUT,
    Ease::POWER4_OUT,
    Ease::SineInOut,
    Ease::ExpoOut,
    Ease::back_out(1.7),
    Ease::elastic_out(1.0, 0.3),
];

fn peak(ease: Ease) -> f32 {
    (0..=2000)
        .map(|i| ease.apply(i as f32 / 2000.0))
        .fold(f32::MIN, f32::max)
}

#[test]
fn every_ease_hits_its_endpoints_exactly() {
    for ease in ALL_EASES {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
        // out-of-range progress clamps
        assert_eq!(ease.apply(-0.5), 0.0, "{ease:?} below 0");
        assert_eq!(ease.apply(1.5), 1.0, "{ease:?} above 1");
    }
}

#[test]
fn power_out_curves() {
    assert!((Ease::POWER2_OUT.apply(0.5) - 0.875).abs() < 1e-6);
    assert!((Ease::POWER3_OUT.apply(0.5) - 0.9375).abs() < 1e-6);
    assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Ease::Linear.apply(0.25) - 0.25).abs() < 1e-6);
}

#[test]
fn monotone_eases_never_overshoot() {
    for ease in [Ease::Linear, Ease::POWER3_OUT, Ease::SineInOut, Ease::ExpoOut] {
        assert_eq!(ease.max_overshoot(), 0.0);
        assert!(peak(ease) <= 1.0, "{ease:?} overshot");
    }
}

#[test]
fn elastic_overshoot_stays_within_bound() {
    for ease in [
        Ease::elastic_out(1.0, 0.3),
        Ease::elastic_out(1.0, 0.4),
        Ease::elastic_out(1.2, 0.5),
    ] {
        let over = peak(ease) - 1.0;
        assert!(over > 0.0, "{ease:?} should swing past the target");
        assert!(
            over <= ease.max_overshoot() + 1e-5,
            "{ease:?} overshot {over} > {}",
            ease.max_overshoot()
        );
    }
}

#[test]
fn back_overshoot_matches_bound() {
    let ease = Ease::back_out(1.70158);
    let over = peak(ease) - 1.0;
    // dense sampling lands close to the analytic peak
    assert!((over - ease.max_overshoot()).abs() < 1e-3);
    assert_eq!(Ease::back_out(0.0).max_overshoot(), 0.0);
}

#[test]
fn lerp_and_map_range() {
    assert_eq!(lerp(0.95, 1.0, 0.0), 0.95);
    assert_eq!(lerp(0.95, 1.0, 1.0), 1.0);
    assert_eq!(lerp(-50.0, 50.0, 0.5), 0.0);

    assert_eq!(map_range(0.0, 150.0, 1.6, 1.0, 0.0), 1.6);
    assert!((map_range(0.0, 150.0, 1.6, 1.0, 75.0) - 1.3).abs() < 1e-6);
    // unclamped
    assert!((map_range(0.0, 150.0, 1.6, 1.0, 300.0) - 0.4).abs() < 1e-6);
    // degenerate input range
    assert_eq!(map_range(5.0, 5.0, 2.0, 3.0, 9.0), 2.0);
}

#[test]
fn exp_smooth_approaches_without_passing() {
    let mut v = 0.0;
    for _ in 0..120 {
        let next = exp_smooth(v, 1.0, 1.0 / 60.0, 0.3);
        assert!(next > v && next < 1.0);
        v = next;
    }
    assert!(v > 0.99);
    assert_eq!(exp_smooth(0.2, 0.7, 0.016, 0.0), 0.7);
    assert_eq!(exp_smooth(0.2, 0.7, 0.0, 0.5), 0.2);
}

#[test]
fn exp_smooth_is_frame_rate_independent() {
    let one = exp_smooth(0.0, 10.0, 0.1, 0.4);
    let half = exp_smooth(0.0, 10.0, 0.05, 0.4);
    let two = exp_smooth(half, 10.0, 0.05, 0.4);
    assert!((one - two).abs() < 1e-4);
}

#[test]
fn tween_reaches_target_exactly() {
    let mut t = Tween::settled(0.0, 0.3, Ease::POWER3_OUT);
    assert!(t.is_finished());
    t.retarget(1.6);
    assert!(!t.is_finished());
    for _ in 0..30 {
        t.advance(1.0 / 60.0);
    }
    assert!(t.is_finished());
    assert_eq!(t.value(), 1.6);
}

#[test]
fn tween_retarget_continues_from_current_value() {
    let mut t = Tween::settled(0.0, 1.0, Ease::POWER2_OUT);
    t.retarget(100.0);
    let mid = t.advance(0.4);
    t.retarget(-20.0);
    assert!((t.value() - mid).abs() < 1e-4);
    t.retarget_with(5.0, 0.2, Ease::Linear);
    assert!((t.value() - mid).abs() < 1e-4);
    assert_eq!(t.ease(), Ease::Linear);
    t.advance(0.2);
    assert_eq!(t.value(), 5.0);
}

#[test]
fn zero_length_tween_jumps() {
    let mut t = Tween::settled(3.0, 0.0, Ease::Linear);
    t.retarget(8.0);
    assert_eq!(t.value(), 8.0);
    assert!(t.is_finished());
}

#[test]
fn magnetic_spring_is_overdamped() {
    assert!(SpringParams::MAGNETIC.damping_ratio() > 1.0);
}

#[test]
fn overdamped_spring_converges_without_overshoot() {
    let mut f = Follower::spring(0.0, SpringParams::MAGNETIC);
    f.retarget(30.0);
    for _ in 0..120 {
        let v = f.advance(1.0 / 60.0);
        assert!(v <= 30.0, "spring overshot to {v}");
    }
    assert!(f.is_settled());
    assert_eq!(f.value(), 30.0);
}

#[test]
fn underdamped_spring_swings_past_target() {
    let params = SpringParams {
        stiffness: 200.0,
        damping: 2.0,
        mass: 1.0,
    };
    let mut state = SpringState::default();
    let mut highest = 0.0f32;
    for _ in 0..120 {
        state = spring_step(state, 1.0, 1.0 / 60.0, params);
        highest = highest.max(state.value);
    }
    assert!(highest > 1.0);
}

#[test]
fn spring_ignores_non_positive_dt() {
    let state = SpringState {
        value: 0.5,
        velocity: 2.0,
    };
    assert_eq!(spring_step(state, 1.0, 0.0, SpringParams::MAGNETIC), state);
    assert_eq!(spring_step(state, 1.0, -0.1, SpringParams::MAGNETIC), state);
}

#[test]
fn follower_tween_and_spring_share_targets() {
    let mut tween = Follower::tween(0.0, 1.0, Ease::elastic_out(1.0, 0.3));
    let mut spring = Follower::spring(0.0, SpringParams::MAGNETIC);
    tween.retarget(12.0);
    spring.retarget(12.0);
    assert_eq!(tween.target(), 12.0);
    assert_eq!(spring.target(), 12.0);
    assert!(!tween.is_settled());
    assert!(!spring.is_settled());
}
