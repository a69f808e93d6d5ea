use super::{element_attached, Effect, EffectStatus};
use crate::constants::{CURSOR_DOT_ID, CURSOR_RING_ID, INTERACTIVE_SELECTOR};
use crate::core::cursor::{CursorSample, CustomCursor};
use crate::core::style::Written;
use crate::dom;
use crate::frame::FrameInput;
use crate::listener::EventListener;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Dot + ring cursor on `#fx-cursor-dot` / `#fx-cursor-ring`.
pub struct CursorEffect {
    dot: web::HtmlElement,
    ring: web::HtmlElement,
    model: Rc<RefCell<CustomCursor>>,
    listeners: Vec<EventListener>,
    written: [LayerWrites; 2],
}

#[derive(Default)]
struct LayerWrites {
    position: Written<Vec2>,
    // (scale, opacity)
    look: Written<Vec2>,
}

impl CursorEffect {
    pub fn attach(window: &web::Window, document: &web::Document) -> Option<Self> {
        if dom::is_touch_device(window) {
            log::info!("[cursor] touch device; keeping the native cursor");
            return None;
        }
        let dot = dom::html_element_by_id(document, CURSOR_DOT_ID)?;
        let ring = dom::html_element_by_id(document, CURSOR_RING_ID)?;
        let model = Rc::new(RefCell::new(CustomCursor::new()));

        // position and button state arrive through the frame's pointer snapshot
        let mut listeners = Vec::with_capacity(2);
        let m = model.clone();
        let w = window.clone();
        listeners.push(EventListener::new(document, "pointerover", move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
                return;
            };
            if dom::is_interactive(&w, &target, INTERACTIVE_SELECTOR) {
                m.borrow_mut().set_hovering(true);
            }
        }));
        let m = model.clone();
        listeners.push(EventListener::new(document, "pointerout", move |_ev| {
            m.borrow_mut().set_hovering(false);
        }));

        Some(Self {
            dot,
            ring,
            model,
            listeners,
            written: Default::default(),
        })
    }
}

fn paint(el: &web::HtmlElement, sample: CursorSample, settled: bool, written: &mut LayerWrites) {
    let moved = written.position.update(sample.position, settled);
    let restyled = written.look.update(Vec2::new(sample.scale, sample.opacity), settled);
    if moved || restyled {
        // centre the element on the pointer, then scale in place
        dom::set_style(
            el,
            "transform",
            &format!(
                "translate3d({:.3}px, {:.3}px, 0) translate(-50%, -50%) scale({:.4})",
                sample.position.x, sample.position.y, sample.scale
            ),
        );
    }
    if restyled {
        dom::set_style(el, "opacity", &format!("{:.4}", sample.opacity));
    }
}

impl Effect for CursorEffect {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn tick(&mut self, frame: &FrameInput) -> EffectStatus {
        if element_attached(&self.dot) == EffectStatus::Detached
            || element_attached(&self.ring) == EffectStatus::Detached
        {
            return EffectStatus::Detached;
        }
        let mut model = self.model.borrow_mut();
        model.track(&frame.pointer);
        model.advance(frame.dt_sec);
        let (dot, ring) = (model.dot(), model.ring());
        let settled = model.is_settled();
        drop(model);
        // hide both layers until the pointer has entered the window
        let visible = frame.pointer.position.is_some();
        let [dot_writes, ring_writes] = &mut self.written;
        for (el, mut sample, writes) in [(&self.dot, dot, dot_writes), (&self.ring, ring, ring_writes)] {
            if !visible {
                sample.opacity = 0.0;
            }
            paint(el, sample, settled, writes);
        }
        EffectStatus::Alive
    }

    fn teardown(&mut self) {
        for l in &mut self.listeners {
            l.remove();
        }
        for el in [&self.dot, &self.ring] {
            dom::clear_style(el, "transform");
            dom::clear_style(el, "opacity");
        }
        self.written = Default::default();
    }
}
