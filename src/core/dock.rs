// Dock magnification: icons near the pointer grow, falling off linearly with
// horizontal distance.

use super::easing::{map_range, Ease, Tween};
use super::float_loop::FloatLoop;

pub const DOCK_FALLOFF_PX: f32 = 150.0;
pub const DOCK_MAX_SCALE: f32 = 1.6;
pub const DOCK_REST_SCALE: f32 = 1.0;

pub const DOCK_HOVER_DURATION_SEC: f32 = 0.3;
pub const DOCK_HOVER_EASE: Ease = Ease::POWER3_OUT;
pub const DOCK_RESET_DURATION_SEC: f32 = 0.5;
pub const DOCK_RESET_EASE: Ease = Ease::elastic_out(1.0, 0.4);

// At or below this viewport width the dock stays static. Note the particle
// breakpoint of the same value counts 768 itself as desktop.
pub const DOCK_MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Idle float of the whole dock
pub const DOCK_FLOAT_AMPLITUDE_PX: f32 = -5.0;
pub const DOCK_FLOAT_HALF_PERIOD_SEC: f32 = 2.0;
pub const DOCK_FLOAT_DELAY_SEC: f32 = 1.5;

/// Scale for an icon whose centre is `distance` px from the pointer.
#[inline]
pub fn dock_scale(distance: f32) -> f32 {
    map_range(
        0.0,
        DOCK_FALLOFF_PX,
        DOCK_MAX_SCALE,
        DOCK_REST_SCALE,
        distance.abs(),
    )
    .clamp(DOCK_REST_SCALE, DOCK_MAX_SCALE)
}

#[inline]
pub fn dock_enabled_for_width(viewport_width: f32) -> bool {
    viewport_width > DOCK_MOBILE_BREAKPOINT_PX
}

pub fn dock_float_loop() -> FloatLoop {
    FloatLoop::new(
        DOCK_FLOAT_AMPLITUDE_PX,
        DOCK_FLOAT_HALF_PERIOD_SEC,
        DOCK_FLOAT_DELAY_SEC,
        Ease::SineInOut,
    )
}

#[derive(Clone, Debug)]
pub struct Dock {
    icons: Vec<Tween>,
    enabled: bool,
}

impl Dock {
    pub fn new(icon_count: usize) -> Self {
        Self {
            icons: vec![
                Tween::settled(DOCK_REST_SCALE, DOCK_HOVER_DURATION_SEC, DOCK_HOVER_EASE);
                icon_count
            ],
            enabled: true,
        }
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable magnification; disabling sends every icon home.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.pointer_left();
        }
        self.enabled = enabled;
    }

    /// Retarget every icon from the pointer x and the icons' current centre x.
    /// Extra centres (or icons) beyond the shorter list are ignored.
    pub fn pointer_moved(&mut self, pointer_x: f32, icon_centers_x: &[f32]) {
        if !self.enabled {
            return;
        }
        for (icon, center) in self.icons.iter_mut().zip(icon_centers_x) {
            icon.retarget_with(
                dock_scale(pointer_x - center),
                DOCK_HOVER_DURATION_SEC,
                DOCK_HOVER_EASE,
            );
        }
    }

    pub fn pointer_left(&mut self) {
        for icon in &mut self.icons {
            icon.retarget_with(DOCK_REST_SCALE, DOCK_RESET_DURATION_SEC, DOCK_RESET_EASE);
        }
    }

    pub fn advance(&mut self, dt_sec: f32) {
        for icon in &mut self.icons {
            icon.advance(dt_sec);
        }
    }

    pub fn scales(&self) -> impl Iterator<Item = f32> + '_ {
        self.icons.iter().map(Tween::value)
    }

    pub fn targets(&self) -> impl Iterator<Item = f32> + '_ {
        self.icons.iter().map(Tween::target)
    }

    pub fn is_settled(&self) -> bool {
        self.icons.iter().all(Tween::is_finished)
    }
}
