use super::{element_attached, Effect, EffectStatus};
use crate::constants::FLOAT_SELECTOR;
use crate::core::float_loop::{
    FloatMotion, FloatSample, FLOAT_DEFAULT_HALF_PERIOD_SEC, FLOAT_DEFAULT_LIFT_PX,
    FLOAT_DEFAULT_SWAY_DEG,
};
use crate::core::style::Written;
use crate::dom;
use crate::frame::FrameInput;
use glam::Vec2;
use web_sys as web;

/// `[data-float="-20"]`: endless idle bob by the given px (empty for the
/// default). Optional `data-float-rotate` degrees, `data-float-duration`
/// seconds per leg and `data-float-delay` seconds.
pub struct FloatEffect {
    el: web::HtmlElement,
    motion: FloatMotion,
    // (lift, sway)
    written: Written<Vec2>,
}

impl FloatEffect {
    pub fn attach_all(document: &web::Document) -> Vec<Self> {
        let effects: Vec<Self> = dom::query_all_in_document(document, FLOAT_SELECTOR)
            .into_iter()
            .map(Self::attach)
            .collect();
        if !effects.is_empty() {
            log::info!("[float] {} floating elements", effects.len());
        }
        effects
    }

    fn attach(el: web::HtmlElement) -> Self {
        let lift = dom::data_f32(&el, "data-float").unwrap_or(FLOAT_DEFAULT_LIFT_PX);
        let sway = dom::data_f32(&el, "data-float-rotate").unwrap_or(FLOAT_DEFAULT_SWAY_DEG);
        let half_period = dom::data_f32(&el, "data-float-duration")
            .filter(|d| *d > 0.0)
            .unwrap_or(FLOAT_DEFAULT_HALF_PERIOD_SEC);
        let delay = dom::data_f32(&el, "data-float-delay").unwrap_or(0.0);
        Self {
            el,
            motion: FloatMotion::new(lift, sway, half_period, delay),
            written: Written::default(),
        }
    }
}

fn float_css(sample: FloatSample) -> String {
    format!(
        "translate3d(0, {:.3}px, 0) rotate({:.3}deg)",
        sample.lift, sample.sway_deg
    )
}

impl Effect for FloatEffect {
    fn name(&self) -> &'static str {
        "float"
    }

    fn tick(&mut self, frame: &FrameInput) -> EffectStatus {
        if element_attached(&self.el) == EffectStatus::Detached {
            return EffectStatus::Detached;
        }
        let sample = self.motion.advance(frame.dt_sec);
        if self.written.update(Vec2::new(sample.lift, sample.sway_deg), false) {
            dom::set_style(&self.el, "transform", &float_css(sample));
        }
        EffectStatus::Alive
    }

    fn teardown(&mut self) {
        self.motion.cancel();
        if self.written.reset() {
            dom::clear_style(&self.el, "transform");
        }
    }
}
