/// Browser-facing tuning: element hooks, colours and frame pacing.
///
/// Effect math lives next to each model in `core/`; these constants only
/// describe how the page is found and painted.
// Element hooks
pub const PARTICLE_CANVAS_ID: &str = "fx-particles";
pub const CURSOR_DOT_ID: &str = "fx-cursor-dot";
pub const CURSOR_RING_ID: &str = "fx-cursor-ring";
pub const NAVBAR_ID: &str = "fx-navbar";
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const DOCK_SELECTOR: &str = "[data-dock]";
pub const DOCK_ITEM_SELECTOR: &str = "[data-dock-item]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const FLOAT_SELECTOR: &str = "[data-float]";
pub const POINTER_DEPTH_SELECTOR: &str = "[data-pointer-depth]";

// Elements that hand the pointer back to the native cursor
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, input, textarea, select, [role='button'], .cursor-pointer";

// Particle paint
pub const PARTICLE_RGB: [u8; 3] = [160, 174, 192];
pub const LINK_LINE_WIDTH: f64 = 0.5;

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches or long stalls
