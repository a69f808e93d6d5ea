pub mod pointer;
pub mod visibility;

pub use pointer::wire_pointer_tracking;
pub use visibility::wire_visibility;
