// Magnetic hover: an element leans toward the pointer while it is inside the
// element's box and eases back to rest when it leaves.

use super::easing::{Ease, Follower, SpringParams};
use super::geometry::Rect;
use glam::Vec2;

pub const DEFAULT_STRENGTH: f32 = 0.3;
pub const MIN_STRENGTH: f32 = 0.05;
pub const MAX_STRENGTH: f32 = 0.5;

pub const ELASTIC_DURATION_SEC: f32 = 1.0;
pub const ELASTIC_EASE: Ease = Ease::elastic_out(1.0, 0.3);

/// Target offset for a pointer at `pointer` over an element with `bounds`.
#[inline]
pub fn magnetic_offset(pointer: Vec2, bounds: &Rect, strength: f32) -> Vec2 {
    (pointer - bounds.center()) * strength
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MagneticMotion {
    Elastic { duration: f32, ease: Ease },
    Spring(SpringParams),
}

impl Default for MagneticMotion {
    fn default() -> Self {
        MagneticMotion::Elastic {
            duration: ELASTIC_DURATION_SEC,
            ease: ELASTIC_EASE,
        }
    }
}

impl MagneticMotion {
    fn follower(self) -> Follower {
        match self {
            MagneticMotion::Elastic { duration, ease } => Follower::tween(0.0, duration, ease),
            MagneticMotion::Spring(params) => Follower::spring(0.0, params),
        }
    }

    /// How far past its target the rendered offset may swing, relative to the
    /// distance of the last retarget.
    pub fn max_overshoot(self) -> f32 {
        match self {
            MagneticMotion::Elastic { ease, .. } => ease.max_overshoot(),
            MagneticMotion::Spring(params) if params.damping_ratio() >= 1.0 => 0.0,
            MagneticMotion::Spring(_) => 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Magnetic {
    strength: f32,
    motion: MagneticMotion,
    x: Follower,
    y: Follower,
}

impl Magnetic {
    pub fn new(strength: f32, motion: MagneticMotion) -> Self {
        Self {
            strength: strength.clamp(MIN_STRENGTH, MAX_STRENGTH),
            motion,
            x: motion.follower(),
            y: motion.follower(),
        }
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn motion(&self) -> MagneticMotion {
        self.motion
    }

    pub fn pointer_moved(&mut self, pointer: Vec2, bounds: &Rect) {
        let target = magnetic_offset(pointer, bounds, self.strength);
        self.x.retarget(target.x);
        self.y.retarget(target.y);
    }

    pub fn pointer_left(&mut self) {
        self.x.retarget(0.0);
        self.y.retarget(0.0);
    }

    pub fn advance(&mut self, dt_sec: f32) -> Vec2 {
        Vec2::new(self.x.advance(dt_sec), self.y.advance(dt_sec))
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}

impl Default for Magnetic {
    fn default() -> Self {
        Self::new(DEFAULT_STRENGTH, MagneticMotion::default())
    }
}
