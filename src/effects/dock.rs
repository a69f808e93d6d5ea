use super::{element_attached, transform_css, Effect, EffectStatus};
use crate::constants::{DOCK_ITEM_SELECTOR, DOCK_SELECTOR};
use crate::core::dock::{dock_enabled_for_width, dock_float_loop, Dock};
use crate::core::float_loop::FloatLoop;
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

/// `[data-dock]` with `[data-dock-item]` children: hover magnification plus
/// an idle float of the whole dock.
pub struct DockEffect {
    container: web::HtmlElement,
    icons: Vec<web::HtmlElement>,
    model: Rc<RefCell<Dock>>,
    float: FloatLoop,
    listeners: Vec<EventListener>,
    written_scales: Vec<Written<f32>>,
    written_lift: Written<f32>,
}

impl DockEffect {
    pub fn attach_all(document: &web::Document) -> Vec<Self> {
        dom::query_all_in_document(document, DOCK_SELECTOR)
            .into_iter()
            .filter_map(Self::attach)
            .collect()
    }

    fn attach(container: web::HtmlElement) -> Option<Self> {
        let icons = dom::query_all(&container, DOCK_ITEM_SELECTOR);
        if icons.is_empty() {
            log::warn!("[dock] container without {} items; skipping", DOCK_ITEM_SELECTOR);
            return None;
        }
        let icon_count = icons.len();
        let model = Rc::new(RefCell::new(Dock::new(icon_count)));

        // Distances are recomputed per pointer event, not per frame.
        let move_model = model.clone();
        let move_icons = icons.clone();
        let on_move = EventListener::new(&container, "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let pointer_x = input::pointer_client_px(ev).x;
                let centers: Vec<f32> = move_icons
                    .iter()
                    .map(|icon| dom::element_rect(icon).center().x)
                    .collect();
                move_model.borrow_mut().pointer_moved(pointer_x, &centers);
            }
        });
        let leave_model = model.clone();
        let on_leave = EventListener::new(&container, "pointerleave", move |_ev| {
            leave_model.borrow_mut().pointer_left();
        });

        log::info!("[dock] attached with {} icons", icon_count);
        Some(Self {
            container,
            icons,
            model,
            float: dock_float_loop(),
            listeners: vec![on_move, on_leave],
            written_scales: vec![Written::default(); icon_count],
            written_lift: Written::default(),
        })
    }
}

impl Effect for DockEffect {
    fn name(&self) -> &'static str {
        "dock"
    }

    fn tick(&mut self, frame: &FrameInput) -> EffectStatus {
        if element_attached(&self.container) == EffectStatus::Detached {
            return EffectStatus::Detached;
        }
        let mut model = self.model.borrow_mut();
        model.set_enabled(dock_enabled_for_width(frame.viewport.x));
        model.advance(frame.dt_sec);
        let settled = model.is_settled();
        for ((icon, scale), written) in self
            .icons
            .iter()
            .zip(model.scales())
            .zip(&mut self.written_scales)
        {
            if written.update(scale, settled) {
                dom::set_style(icon, "transform", &format!("scale({:.4})", scale));
            }
        }
        drop(model);

        let lift = self.float.advance(frame.dt_sec);
        if self.written_lift.update(lift, !self.float.is_running()) {
            dom::set_style(&self.container, "transform", &transform_css(Vec2::new(0.0, lift), 1.0));
        }
        EffectStatus::Alive
    }

    fn teardown(&mut self) {
        self.float.cancel();
        for l in &mut self.listeners {
            l.remove();
        }
        for (icon, written) in self.icons.iter().zip(&mut self.written_scales) {
            if written.reset() {
                dom::clear_style(icon, "transform");
            }
        }
        if self.written_lift.reset() {
            dom::clear_style(&self.container, "transform");
        }
    }
}
