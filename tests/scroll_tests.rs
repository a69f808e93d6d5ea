// Host-side tests for scroll-linked bindings and reveals.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::easing::Ease;
use crate::core::geometry::Rect;
use crate::core::scroll::*;

const VIEWPORT_H: f32 = 1000.0;
const FRAME: f32 = 1.0 / 60.0;

// 400 px tall section starting 2000 px down the document
fn section() -> Rect {
    Rect::new(0.0, 2000.0, 800.0, 400.0)
}

#[test]
fn anchors_parse_keywords_percentages_and_pixels() {
    assert_eq!("top".parse::<Anchor>().ok(), Some(Anchor::Fraction(0.0)));
    assert_eq!("center".parse::<Anchor>().ok(), Some(Anchor::Fraction(0.5)));
    assert_eq!(" bottom ".parse::<Anchor>().ok(), Some(Anchor::Fraction(1.0)));
    assert_eq!("85%".parse::<Anchor>().ok(), Some(Anchor::Fraction(0.85)));
    assert_eq!("120px".parse::<Anchor>().ok(), Some(Anchor::Pixels(120.0)));
    assert_eq!("-40".parse::<Anchor>().ok(), Some(Anchor::Pixels(-40.0)));
    assert!("middle".parse::<Anchor>().is_err());
    assert!("abc%".parse::<Anchor>().is_err());
}

#[test]
fn edges_need_exactly_two_anchors() {
    let edge: TriggerEdge = "top 85%".parse().expect("valid edge");
    assert_eq!(edge, TriggerEdge::new(Anchor::Fraction(0.0), Anchor::Fraction(0.85)));
    assert!("top".parse::<TriggerEdge>().is_err());
    assert!("top bottom center".parse::<TriggerEdge>().is_err());
    assert!("".parse::<TriggerEdge>().is_err());
    assert!("top sideways".parse::<TriggerEdge>().is_err());
}

#[test]
fn non_finite_anchors_are_rejected() {
    for raw in ["nan", "inf", "-infinity", "NaN%", "infpx"] {
        assert!(raw.parse::<Anchor>().is_err(), "{raw} should not parse");
    }
    assert!("top nan".parse::<TriggerEdge>().is_err());
    assert!("inf bottom".parse::<TriggerEdge>().is_err());
}

#[test]
fn parsed_edges_always_give_finite_progress() {
    for (start, end) in [("top 85%", "bottom 10px"), ("center -20", "120% top")] {
        let start: TriggerEdge = start.parse().expect("valid edge");
        let end: TriggerEdge = end.parse().expect("valid edge");
        let mut binding = ScrollBinding::parallax_up(1.0).with_edges(start, end);
        let region = binding.region(&section(), VIEWPORT_H);
        for scroll in [0.0, 1500.0, 2200.0, 5000.0] {
            let p = binding.update(&region, scroll, FRAME);
            assert!((0.0..=1.0).contains(&p), "{scroll} -> {p}");
            assert!(binding.values().all(|(_, v)| v.is_finite()));
        }
    }
}

#[test]
fn full_pass_region_spans_entry_to_exit() {
    let region = ScrollBinding::full_pass().region(&section(), VIEWPORT_H);
    // top meets viewport bottom
    assert_eq!(region.start, 1000.0);
    // bottom meets viewport top
    assert_eq!(region.end, 2400.0);
}

#[test]
fn progress_is_clamped_and_linear() {
    let region = TriggerRegion {
        start: 1000.0,
        end: 2400.0,
    };
    assert_eq!(region.progress(1000.0), 0.0);
    assert_eq!(region.progress(2400.0), 1.0);
    assert_eq!(region.progress(0.0), 0.0);
    assert_eq!(region.progress(9000.0), 1.0);
    assert!((region.progress(1700.0) - 0.5).abs() < 1e-6);
}

#[test]
fn zero_length_region_is_a_step() {
    let region = TriggerRegion {
        start: 500.0,
        end: 500.0,
    };
    assert_eq!(region.progress(499.0), 0.0);
    assert_eq!(region.progress(500.0), 1.0);
    assert_eq!(region.progress(800.0), 1.0);
}

#[test]
fn boundary_progress_yields_exact_boundary_values() {
    let up = ScrollBinding::parallax_up(1.0);
    assert_eq!(up.value_at(Property::TranslateY, 0.0), Some(0.0));
    assert_eq!(up.value_at(Property::TranslateY, 1.0), Some(-PARALLAX_DISTANCE_PX));
    assert_eq!(up.value_at(Property::Opacity, 0.5), None);

    let down = ScrollBinding::parallax_down(2.0);
    assert_eq!(down.value_at(Property::TranslateY, 1.0), Some(100.0));

    let scale = ScrollBinding::parallax_scale(SCALE_FROM, SCALE_TO);
    assert_eq!(scale.value_at(Property::Scale, 0.0), Some(SCALE_FROM));
    assert_eq!(scale.value_at(Property::Scale, 1.0), Some(SCALE_TO));

    let eased = ScrollBinding::full_pass()
        .track(Property::Opacity, 0.2, 1.0)
        .ease(Ease::POWER3_OUT);
    assert_eq!(eased.value_at(Property::Opacity, 0.0), Some(0.2));
    assert_eq!(eased.value_at(Property::Opacity, 1.0), Some(1.0));
}

#[test]
fn unscrubbed_binding_follows_scroll_immediately() {
    let mut binding = ScrollBinding::full_pass().track(Property::TranslateX, -20.0, 20.0);
    let region = binding.region(&section(), VIEWPORT_H);
    assert_eq!(binding.update(&region, 1700.0, FRAME), 0.5);
    assert_eq!(binding.update(&region, 2400.0, FRAME), 1.0);
    let values: Vec<_> = binding.values().collect();
    assert_eq!(values, vec![(Property::TranslateX, 20.0)]);
}

#[test]
fn scrubbed_binding_lags_then_lands_exactly() {
    let mut binding = ScrollBinding::parallax_up(1.0);
    let region = binding.region(&section(), VIEWPORT_H);

    // first sample matches the page with no catch-up
    assert_eq!(binding.update(&region, 2400.0, FRAME), 1.0);

    let first = binding.update(&region, 1000.0, FRAME);
    assert!(first < 1.0 && first > 0.0, "scrub lags behind, got {first}");
    let mut last = first;
    for _ in 0..1200 {
        let p = binding.update(&region, 1000.0, FRAME);
        assert!(p <= last);
        last = p;
    }
    assert_eq!(binding.progress(), 0.0);
    let values: Vec<_> = binding.values().collect();
    assert_eq!(values, vec![(Property::TranslateY, 0.0)]);
}

#[test]
fn custom_edges_replace_full_pass() {
    let start: TriggerEdge = "top 80%".parse().expect("valid edge");
    let end: TriggerEdge = "center center".parse().expect("valid edge");
    let binding = ScrollBinding::parallax_up(1.0).with_edges(start, end);
    assert_eq!(binding.edges(), (&start, &end));
    let region = binding.region(&section(), VIEWPORT_H);
    assert_eq!(region.start, 2000.0 - 800.0);
    assert_eq!(region.end, 2200.0 - 500.0);
}

#[test]
fn reveal_waits_for_trigger_then_plays_once() {
    let mut reveal = ScrollReveal::fade_up();
    let start = reveal.start_offset(&section(), VIEWPORT_H);
    assert_eq!(start, 2000.0 - 850.0);

    assert_eq!(reveal.update(start, 0.0, FRAME), 0.0);
    assert!(!reveal.is_triggered());
    let before: Vec<_> = reveal.values().collect();
    assert_eq!(
        before,
        vec![(Property::Opacity, 0.0), (Property::TranslateY, REVEAL_OFFSET_Y_PX)]
    );

    reveal.update(start, start, 0.0);
    assert!(reveal.is_triggered());
    assert!(!reveal.is_finished());

    let mid = reveal.update(start, start, REVEAL_DURATION_SEC / 2.0);
    assert!(mid > 0.5 && mid < 1.0, "power3.out front-loads, got {mid}");

    reveal.update(start, start, REVEAL_DURATION_SEC);
    assert!(reveal.is_finished());
    assert_eq!(reveal.progress(), 1.0);

    // scrolling back up never reverses it
    assert_eq!(reveal.update(start, 0.0, FRAME), 1.0);
    let after: Vec<_> = reveal.values().collect();
    assert_eq!(after, vec![(Property::Opacity, 1.0), (Property::TranslateY, 0.0)]);
}

#[test]
fn reveal_delay_holds_first_frame() {
    let mut reveal = ScrollReveal::fade_up().delay(0.5);
    reveal.update(100.0, 200.0, 0.0);
    assert_eq!(reveal.update(100.0, 200.0, 0.4), 0.0);
    assert!(reveal.update(100.0, 200.0, 0.2) > 0.0);
    reveal.update(100.0, 200.0, REVEAL_DURATION_SEC);
    assert!(reveal.is_finished());
}

#[test]
fn reveal_start_can_be_moved() {
    let edge = TriggerEdge::new(Anchor::Fraction(0.0), Anchor::Fraction(1.0));
    let reveal = ScrollReveal::fade_up().starting_at(edge);
    assert_eq!(reveal.start_offset(&section(), VIEWPORT_H), 1000.0);
}
