use glam::Vec2;

/// Axis-aligned box in CSS pixels, as reported by `getBoundingClientRect`
/// (viewport space) or shifted by the scroll offset (document space).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Shift a viewport-space box into document space.
    #[inline]
    pub fn offset_by_scroll(&self, scroll_y: f32) -> Self {
        Self {
            top: self.top + scroll_y,
            ..*self
        }
    }
}
