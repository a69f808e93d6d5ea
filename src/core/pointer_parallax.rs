// Pointer parallax: layers drift with the pointer's position across the
// viewport, each by its own depth. Negative depths move against the pointer.

use super::easing::{Ease, Tween};
use glam::Vec2;

pub const POINTER_PARALLAX_DURATION_SEC: f32 = 1.0;
pub const POINTER_PARALLAX_EASE: Ease = Ease::POWER2_OUT;

// Narrower viewports keep the layers static.
pub const POINTER_PARALLAX_MIN_WIDTH_PX: f32 = 1024.0;

#[inline]
pub fn pointer_parallax_enabled(viewport_width: f32) -> bool {
    viewport_width >= POINTER_PARALLAX_MIN_WIDTH_PX
}

/// Pointer position mapped to \[-1, 1\] on both axes, 0 at the viewport centre.
#[inline]
pub fn normalized_pointer(pointer: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    ((pointer / viewport - 0.5) * 2.0).clamp(Vec2::NEG_ONE, Vec2::ONE)
}

/// Offset in px for a layer `depth` px deep.
#[inline]
pub fn parallax_offset(normalized: Vec2, depth: f32) -> Vec2 {
    normalized * depth
}

/// (rotateX, rotateY) in degrees: turns about Y with the pointer's x and
/// about X against its y.
#[inline]
pub fn parallax_tilt(normalized: Vec2, tilt_deg: f32) -> Vec2 {
    Vec2::new(-normalized.y * tilt_deg, normalized.x * tilt_deg)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxSample {
    pub offset: Vec2,
    /// (rotateX, rotateY) in degrees.
    pub tilt: Vec2,
}

/// One layer easing toward the offset of the latest pointer position.
#[derive(Clone, Debug)]
pub struct PointerParallax {
    depth: f32,
    tilt_deg: f32,
    last_pointer: Option<Vec2>,
    axes: [Tween; 4],
}

impl PointerParallax {
    pub fn new(depth: f32, tilt_deg: f32, duration: f32) -> Self {
        let rest = Tween::settled(0.0, duration, POINTER_PARALLAX_EASE);
        Self {
            depth,
            tilt_deg,
            last_pointer: None,
            axes: [rest; 4],
        }
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Retarget from a normalized pointer. Repeats of the same position are
    /// ignored so a still pointer lets the tween finish.
    pub fn pointer_moved(&mut self, normalized: Vec2) {
        if self.last_pointer == Some(normalized) {
            return;
        }
        self.last_pointer = Some(normalized);
        let offset = parallax_offset(normalized, self.depth);
        let tilt = parallax_tilt(normalized, self.tilt_deg);
        for (axis, target) in self.axes.iter_mut().zip([offset.x, offset.y, tilt.x, tilt.y]) {
            axis.retarget(target);
        }
    }

    /// Ease back to the resting position.
    pub fn recenter(&mut self) {
        self.last_pointer = None;
        for axis in &mut self.axes {
            if axis.target() != 0.0 {
                axis.retarget(0.0);
            }
        }
    }

    pub fn advance(&mut self, dt_sec: f32) -> ParallaxSample {
        for axis in &mut self.axes {
            axis.advance(dt_sec);
        }
        self.sample()
    }

    pub fn sample(&self) -> ParallaxSample {
        let [x, y, rx, ry] = self.axes.map(|a| a.value());
        ParallaxSample {
            offset: Vec2::new(x, y),
            tilt: Vec2::new(rx, ry),
        }
    }

    pub fn target(&self) -> ParallaxSample {
        let [x, y, rx, ry] = self.axes.map(|a| a.target());
        ParallaxSample {
            offset: Vec2::new(x, y),
            tilt: Vec2::new(rx, ry),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.axes.iter().all(Tween::is_finished)
    }
}
