//! DOM-bound effects. Each effect owns its element, its event listeners and a
//! model from `core`, and is ticked once per frame in registration order.

use crate::frame::FrameInput;
use glam::Vec2;
use web_sys as web;

mod cursor;
mod dock;
mod float;
mod magnetic;
mod navbar;
mod particles;
mod pointer_parallax;
mod scroll;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectStatus {
    Alive,
    /// The owning element has left the document.
    Detached,
}

pub trait Effect {
    fn name(&self) -> &'static str;

    fn tick(&mut self, frame: &FrameInput) -> EffectStatus;

    /// Remove listeners and restore anything written to the page. Must be
    /// idempotent.
    fn teardown(&mut self);
}

/// Build every effect whose element is present on the page.
pub fn discover(window: &web::Window, document: &web::Document) -> Vec<Box<dyn Effect>> {
    let mut effects: Vec<Box<dyn Effect>> = Vec::new();
    if let Some(fx) = particles::ParticleEffect::attach(window, document) {
        effects.push(Box::new(fx));
    }
    effects.extend(
        magnetic::MagneticEffect::attach_all(document)
            .into_iter()
            .map(|fx| Box::new(fx) as Box<dyn Effect>),
    );
    effects.extend(
        dock::DockEffect::attach_all(document)
            .into_iter()
            .map(|fx| Box::new(fx) as Box<dyn Effect>),
    );
    effects.extend(
        scroll::ScrollEffect::attach_all(window, document)
            .into_iter()
            .map(|fx| Box::new(fx) as Box<dyn Effect>),
    );
    effects.extend(
        float::FloatEffect::attach_all(document)
            .into_iter()
            .map(|fx| Box::new(fx) as Box<dyn Effect>),
    );
    effects.extend(
        pointer_parallax::PointerParallaxEffect::attach_all(document)
            .into_iter()
            .map(|fx| Box::new(fx) as Box<dyn Effect>),
    );
    if let Some(fx) = navbar::NavbarEffect::attach(document) {
        effects.push(Box::new(fx));
    }
    // cursor last so it paints over everything it reads
    if let Some(fx) = cursor::CursorEffect::attach(window, document) {
        effects.push(Box::new(fx));
    }
    log::info!(
        "[fx] attached {} effects: {:?}",
        effects.len(),
        effects.iter().map(|fx| fx.name()).collect::<Vec<_>>()
    );
    effects
}

/// CSS transform for a translate followed by a uniform scale.
pub(crate) fn transform_css(translate: Vec2, scale: f32) -> String {
    format!(
        "translate3d({:.3}px, {:.3}px, 0) scale({:.4})",
        translate.x, translate.y, scale
    )
}

#[inline]
pub(crate) fn element_attached(el: &web::Element) -> EffectStatus {
    if el.is_connected() {
        EffectStatus::Alive
    } else {
        EffectStatus::Detached
    }
}
