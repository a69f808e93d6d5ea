use glam::Vec2;

/// Immutable view of the pointer for one frame.
///
/// `position` is `None` while the pointer is outside the window (or has never
/// entered it), which effects treat the same as a pointer parked off-screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSnapshot {
    pub position: Option<Vec2>,
    pub down: bool,
}

impl PointerSnapshot {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Some(Vec2::new(x, y)),
            down: false,
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }
}
