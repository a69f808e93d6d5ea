// Two-layer custom cursor: a dot pinned to the pointer and a ring that
// trails it slightly.

use super::easing::{Ease, Tween};
use super::pointer::PointerSnapshot;
use glam::Vec2;

pub const RING_LAG_SEC: f32 = 0.12;
pub const RING_EASE: Ease = Ease::POWER3_OUT;
pub const LOOK_EASE: Ease = Ease::POWER2_OUT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    Default,
    /// Over a link or button; the native pointer takes over.
    Hover,
    Pressed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorLook {
    pub scale: f32,
    pub opacity: f32,
}

impl CursorMode {
    pub fn dot_look(self) -> CursorLook {
        match self {
            CursorMode::Default => CursorLook {
                scale: 1.0,
                opacity: 1.0,
            },
            CursorMode::Hover => CursorLook {
                scale: 0.5,
                opacity: 0.0,
            },
            CursorMode::Pressed => CursorLook {
                scale: 1.15,
                opacity: 1.0,
            },
        }
    }

    pub fn ring_look(self) -> CursorLook {
        match self {
            CursorMode::Default => CursorLook {
                scale: 1.0,
                opacity: 1.0,
            },
            CursorMode::Hover => CursorLook {
                scale: 0.5,
                opacity: 0.0,
            },
            CursorMode::Pressed => CursorLook {
                scale: 0.85,
                opacity: 1.0,
            },
        }
    }

    pub fn transition_sec(self) -> f32 {
        match self {
            CursorMode::Default => 0.3,
            CursorMode::Hover | CursorMode::Pressed => 0.2,
        }
    }
}

/// Rendered state of one cursor layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorSample {
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
struct Layer {
    x: Tween,
    y: Tween,
    scale: Tween,
    opacity: Tween,
}

impl Layer {
    fn new(lag: f32, ease: Ease) -> Self {
        Self {
            x: Tween::settled(0.0, lag, ease),
            y: Tween::settled(0.0, lag, ease),
            scale: Tween::settled(1.0, 0.3, LOOK_EASE),
            opacity: Tween::settled(1.0, 0.3, LOOK_EASE),
        }
    }

    fn move_to(&mut self, p: Vec2) {
        self.x.retarget(p.x);
        self.y.retarget(p.y);
    }

    fn restyle(&mut self, look: CursorLook, duration: f32) {
        self.scale.retarget_with(look.scale, duration, LOOK_EASE);
        self.opacity.retarget_with(look.opacity, duration, LOOK_EASE);
    }

    fn advance(&mut self, dt: f32) {
        self.x.advance(dt);
        self.y.advance(dt);
        self.scale.advance(dt);
        self.opacity.advance(dt);
    }

    fn is_settled(&self) -> bool {
        [&self.x, &self.y, &self.scale, &self.opacity]
            .iter()
            .all(|t| t.is_finished())
    }

    fn sample(&self) -> CursorSample {
        CursorSample {
            position: Vec2::new(self.x.value(), self.y.value()),
            scale: self.scale.value(),
            opacity: self.opacity.value(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CustomCursor {
    dot: Layer,
    ring: Layer,
    last_pointer: Option<Vec2>,
    hovering: bool,
    pressed: bool,
}

impl Default for CustomCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomCursor {
    pub fn new() -> Self {
        Self {
            dot: Layer::new(0.0, Ease::Linear),
            ring: Layer::new(RING_LAG_SEC, RING_EASE),
            last_pointer: None,
            hovering: false,
            pressed: false,
        }
    }

    pub fn mode(&self) -> CursorMode {
        if self.pressed {
            CursorMode::Pressed
        } else if self.hovering {
            CursorMode::Hover
        } else {
            CursorMode::Default
        }
    }

    pub fn pointer_moved(&mut self, p: Vec2) {
        self.last_pointer = Some(p);
        self.dot.move_to(p);
        self.ring.move_to(p);
    }

    /// Follow the frame's pointer snapshot: position changes retarget both
    /// layers and the button state drives the pressed look.
    pub fn track(&mut self, pointer: &PointerSnapshot) {
        if let Some(p) = pointer.position {
            if self.last_pointer != Some(p) {
                self.pointer_moved(p);
            }
        }
        self.set_pressed(pointer.down);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        if self.hovering != hovering {
            self.hovering = hovering;
            self.restyle();
        }
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.restyle();
        }
    }

    fn restyle(&mut self) {
        let mode = self.mode();
        let duration = mode.transition_sec();
        self.dot.restyle(mode.dot_look(), duration);
        self.ring.restyle(mode.ring_look(), duration);
    }

    pub fn advance(&mut self, dt_sec: f32) {
        self.dot.advance(dt_sec);
        self.ring.advance(dt_sec);
    }

    pub fn is_settled(&self) -> bool {
        self.dot.is_settled() && self.ring.is_settled()
    }

    pub fn dot(&self) -> CursorSample {
        self.dot.sample()
    }

    pub fn ring(&self) -> CursorSample {
        self.ring.sample()
    }
}
