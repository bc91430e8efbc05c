//!
//! Controller view rendering: icon layout plus the SDL2 display driver.

pub mod layout;
pub mod sdl;

pub use layout::{axis_overlay, button_overlay, overlays, Overlay, Position, DEADZONE, ICON_SIZE};
pub use sdl::{GraphicsDriver, Icon, Rgb};
