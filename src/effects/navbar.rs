use super::{element_attached, Effect, EffectStatus};
use crate::constants::NAVBAR_ID;
use crate::core::navbar::AutoHideNav;
use crate::core::style::Written;
use crate::dom;
use crate::frame::FrameInput;
use web_sys as web;

pub struct NavbarEffect {
    el: web::HtmlElement,
    model: AutoHideNav,
    written_y: Written<f32>,
    written_alpha: Written<f32>,
}

impl NavbarEffect {
    pub fn attach(document: &web::Document) -> Option<Self> {
        let el = dom::html_element_by_id(document, NAVBAR_ID)?;
        Some(Self {
            el,
            model: AutoHideNav::new(),
            written_y: Written::default(),
            written_alpha: Written::default(),
        })
    }
}

impl Effect for NavbarEffect {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn tick(&mut self, frame: &FrameInput) -> EffectStatus {
        if element_attached(&self.el) == EffectStatus::Detached {
            return EffectStatus::Detached;
        }
        self.model.update(frame.scroll_y);
        self.model.advance(frame.dt_sec);
        let settled = self.model.is_settled();
        let y = self.model.y_percent();
        if self.written_y.update(y, settled) {
            dom::set_style(&self.el, "transform", &format!("translateY({:.3}%)", y));
        }
        let alpha = self.model.alpha();
        if self.written_alpha.update(alpha, settled) {
            dom::set_style(&self.el, "opacity", &format!("{:.4}", alpha));
            dom::set_style(
                &self.el,
                "visibility",
                if alpha <= 0.0 { "hidden" } else { "visible" },
            );
        }
        EffectStatus::Alive
    }

    fn teardown(&mut self) {
        for prop in ["transform", "opacity", "visibility"] {
            dom::clear_style(&self.el, prop);
        }
        self.written_y.reset();
        self.written_alpha.reset();
    }
}
