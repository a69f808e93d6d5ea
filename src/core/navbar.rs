// Navbar that slides away while scrolling down and returns on scroll up.

use super::easing::{Ease, Tween};

pub const NAV_TOP_THRESHOLD_PX: f32 = 10.0;
pub const NAV_TRANSITION_SEC: f32 = 0.3;
pub const NAV_EASE: Ease = Ease::POWER3_OUT;
pub const NAV_HIDDEN_Y_PERCENT: f32 = -100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Still,
}

#[inline]
pub fn scroll_direction(previous: f32, current: f32) -> ScrollDirection {
    if current > previous {
        ScrollDirection::Down
    } else if current < previous {
        ScrollDirection::Up
    } else {
        ScrollDirection::Still
    }
}

#[derive(Clone, Debug)]
pub struct AutoHideNav {
    last_scroll: Option<f32>,
    visible: bool,
    y_percent: Tween,
    alpha: Tween,
}

impl Default for AutoHideNav {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoHideNav {
    pub fn new() -> Self {
        Self {
            last_scroll: None,
            visible: true,
            y_percent: Tween::settled(0.0, NAV_TRANSITION_SEC, NAV_EASE),
            alpha: Tween::settled(1.0, NAV_TRANSITION_SEC, NAV_EASE),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the current scroll offset.
    pub fn update(&mut self, scroll_y: f32) {
        let direction = match self.last_scroll {
            Some(prev) => scroll_direction(prev, scroll_y),
            None => ScrollDirection::Still,
        };
        self.last_scroll = Some(scroll_y);
        let show = if scroll_y < NAV_TOP_THRESHOLD_PX {
            true
        } else {
            match direction {
                ScrollDirection::Down => false,
                ScrollDirection::Up => true,
                ScrollDirection::Still => self.visible,
            }
        };
        if show != self.visible {
            self.visible = show;
            let (y, a) = if show {
                (0.0, 1.0)
            } else {
                (NAV_HIDDEN_Y_PERCENT, 0.0)
            };
            self.y_percent.retarget(y);
            self.alpha.retarget(a);
        }
    }

    pub fn advance(&mut self, dt_sec: f32) {
        self.y_percent.advance(dt_sec);
        self.alpha.advance(dt_sec);
    }

    pub fn is_settled(&self) -> bool {
        self.y_percent.is_finished() && self.alpha.is_finished()
    }

    pub fn y_percent(&self) -> f32 {
        self.y_percent.value()
    }

    pub fn alpha(&self) -> f32 {
        self.alpha.value()
    }
}
