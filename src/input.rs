use crate::core::PointerSnapshot;
use glam::Vec2;
use web_sys as web;

/// Live pointer state written by the page-level event handlers and read once
/// per frame as a [`PointerSnapshot`].
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub position: Option<Vec2>,
    pub down: bool,
}

impl PointerState {
    pub fn snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            position: self.position,
            down: self.down,
        }
    }
}

/// Page-level state owned by the frame loop.
#[derive(Default, Clone, Copy)]
pub struct PageState {
    pub pointer: PointerState,
    pub hidden: bool,
}

/// Pointer position in viewport CSS pixels.
#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
