use super::{element_attached, transform_css, Effect, EffectStatus};
use crate::constants::MAGNETIC_SELECTOR;
use crate::core::easing::SpringParams;
use crate::core::magnetic::{Magnetic, MagneticMotion, DEFAULT_STRENGTH};
use crate::core::style::Written;
use crate::dom;
use crate::frame::FrameInput;
use crate::input;
use crate::listener::EventListener;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `[data-magnetic="0.4"]`: the element leans toward the pointer.
/// `data-magnetic-motion="spring"` swaps the elastic tween for a spring.
pub struct MagneticEffect {
    el: web::HtmlElement,
    model: Rc<RefCell<Magnetic>>,
    listeners: Vec<EventListener>,
    written: Written<Vec2>,
}

impl MagneticEffect {
    pub fn attach_all(document: &web::Document) -> Vec<Self> {
        dom::query_all_in_document(document, MAGNETIC_SELECTOR)
            .into_iter()
            .map(Self::attach)
            .collect()
    }

    fn attach(el: web::HtmlElement) -> Self {
        let strength = dom::data_f32(&el, "data-magnetic").unwrap_or(DEFAULT_STRENGTH);
        let motion = match el.get_attribute("data-magnetic-motion").as_deref() {
            Some("spring") => MagneticMotion::Spring(SpringParams::MAGNETIC),
            _ => MagneticMotion::default(),
        };
        let model = Rc::new(RefCell::new(Magnetic::new(strength, motion)));

        let move_model = model.clone();
        let move_el = el.clone();
        let on_move = EventListener::new(&el, "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let bounds = dom::element_rect(&move_el);
                move_model
                    .borrow_mut()
                    .pointer_moved(input::pointer_client_px(ev), &bounds);
            }
        });
        let leave_model = model.clone();
        let on_leave = EventListener::new(&el, "pointerleave", move |_ev| {
            leave_model.borrow_mut().pointer_left();
        });

        Self {
            el,
            model,
            listeners: vec![on_move, on_leave],
            written: Written::default(),
        }
    }
}

impl Effect for MagneticEffect {
    fn name(&self) -> &'static str {
        "magnetic"
    }

    fn tick(&mut self, frame: &FrameInput) -> EffectStatus {
        if element_attached(&self.el) == EffectStatus::Detached {
            return EffectStatus::Detached;
        }
        let mut model = self.model.borrow_mut();
        let offset = model.advance(frame.dt_sec);
        let settled = model.is_settled();
        drop(model);
        if self.written.update(offset, settled) {
            dom::set_style(&self.el, "transform", &transform_css(offset, 1.0));
        }
        EffectStatus::Alive
    }

    fn teardown(&mut self) {
        for l in &mut self.listeners {
            l.remove();
        }
        if self.written.reset() {
            dom::clear_style(&self.el, "transform");
        }
    }
}
