use super::{element_attached, Effect, EffectStatus};
use crate::constants::POINTER_DEPTH_SELECTOR;
use crate::core::pointer_parallax::{
    normalized_pointer, pointer_parallax_enabled, ParallaxSample, PointerParallax,
    POINTER_PARALLAX_DURATION_SEC,
};
use crate::core::style::Written;
use crate::dom;
use crate::frame::FrameInput;
use glam::Vec2;
use web_sys as web;

/// `[data-pointer-depth="15"]`: the element drifts with the pointer across
/// the viewport, up to `depth` px each way. Negative depths move against it.
/// Optional `data-pointer-tilt` degrees and `data-pointer-duration` seconds.
pub struct PointerParallaxEffect {
    el: web::HtmlElement,
    model: PointerParallax,
    written_offset: Written<Vec2>,
    written_tilt: Written<Vec2>,
}

impl PointerParallaxEffect {
    pub fn attach_all(document: &web::Document) -> Vec<Self> {
        let effects: Vec<Self> = dom::query_all_in_document(document, POINTER_DEPTH_SELECTOR)
            .into_iter()
            .filter_map(Self::attach)
            .collect();
        if !effects.is_empty() {
            log::info!("[pointer-parallax] {} layers", effects.len());
        }
        effects
    }

    fn attach(el: web::HtmlElement) -> Option<Self> {
        let Some(depth) = dom::data_f32(&el, "data-pointer-depth") else {
            log::warn!("[pointer-parallax] <{}> without a depth; skipping", el.tag_name());
            return None;
        };
        let tilt = dom::data_f32(&el, "data-pointer-tilt").unwrap_or(0.0);
        let duration = dom::data_f32(&el, "data-pointer-duration")
            .filter(|d| *d > 0.0)
            .unwrap_or(POINTER_PARALLAX_DURATION_SEC);
        Some(Self {
            el,
            model: PointerParallax::new(depth, tilt, duration),
            written_offset: Written::default(),
            written_tilt: Written::default(),
        })
    }
}

fn parallax_css(sample: ParallaxSample) -> String {
    format!(
        "translate3d({:.3}px, {:.3}px, 0) rotateX({:.3}deg) rotateY({:.3}deg)",
        sample.offset.x, sample.offset.y, sample.tilt.x, sample.tilt.y
    )
}

impl Effect for PointerParallaxEffect {
    fn name(&self) -> &'static str {
        "pointer-parallax"
    }

    fn tick(&mut self, frame: &FrameInput) -> EffectStatus {
        if element_attached(&self.el) == EffectStatus::Detached {
            return EffectStatus::Detached;
        }
        match frame.pointer.position {
            _ if !pointer_parallax_enabled(frame.viewport.x) => self.model.recenter(),
            Some(p) => self.model.pointer_moved(normalized_pointer(p, frame.viewport)),
            // hold the last pose until the pointer comes back
            None => {}
        }
        let sample = self.model.advance(frame.dt_sec);
        let settled = self.model.is_settled();
        let moved = self.written_offset.update(sample.offset, settled);
        let turned = self.written_tilt.update(sample.tilt, settled);
        if moved || turned {
            dom::set_style(&self.el, "transform", &parallax_css(sample));
        }
        EffectStatus::Alive
    }

    fn teardown(&mut self) {
        self.model.recenter();
        let moved = self.written_offset.reset();
        let turned = self.written_tilt.reset();
        if moved || turned {
            dom::clear_style(&self.el, "transform");
        }
    }
}
