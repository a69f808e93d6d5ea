// Redundant style-write filtering.

use glam::Vec2;

// Skip style writes for changes smaller than this
pub const STYLE_EPSILON: f32 = 1e-3;

/// Values a style property can be derived from.
pub trait StyleValue: Copy + PartialEq {
    /// Largest per-component difference from `other`.
    fn drift(self, other: Self) -> f32;
}

impl StyleValue for f32 {
    #[inline]
    fn drift(self, other: Self) -> f32 {
        (self - other).abs()
    }
}

impl StyleValue for Vec2 {
    #[inline]
    fn drift(self, other: Self) -> f32 {
        (self - other).abs().max_element()
    }
}

/// The last value pushed to one style property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Written<T>(Option<T>);

impl<T> Default for Written<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: StyleValue> Written<T> {
    pub fn get(&self) -> Option<T> {
        self.0
    }

    /// Record `value` and report whether it needs writing. While animating,
    /// moves of at most `STYLE_EPSILON` are skipped; once `settled`, any
    /// change is written so the resting value lands exactly.
    pub fn update(&mut self, value: T, settled: bool) -> bool {
        let stale = match self.0 {
            None => true,
            Some(prev) if settled => prev != value,
            Some(prev) => prev.drift(value) > STYLE_EPSILON,
        };
        if stale {
            self.0 = Some(value);
        }
        stale
    }

    /// Forget the last value; returns whether anything had been written.
    pub fn reset(&mut self) -> bool {
        self.0.take().is_some()
    }
}
