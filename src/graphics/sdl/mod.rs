//!
//! SDL2 display driver for the controller view.
//!
//! # Architecture
//!
//! - `common`: the [`GraphicsDriver`] trait, colors, icons and error types
//! - `sdl2`: the renderer-backed driver and the BMP texture loader

pub mod common;
pub mod sdl2;

pub use self::common::{DriverError, DriverResult, GraphicsDriver, Icon, Rgb};
pub use self::sdl2::{create_canvas, load_texture, SdlDisplay, TextureError, Textures};
