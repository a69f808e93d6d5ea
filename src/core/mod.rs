pub mod cursor;
pub mod dock;
pub mod easing;
pub mod float_loop;
pub mod geometry;
pub mod magnetic;
pub mod navbar;
pub mod particles;
pub mod pointer;
pub mod pointer_parallax;
pub mod scroll;
pub mod style;

pub use easing::{Ease, Follower, Tween};
pub use geometry::Rect;
pub use pointer::PointerSnapshot;
