//!
//! Common types, traits, and errors for the display driver.
//!

use std::fmt;

use crate::graphics::layout::Overlay;

/// Error types for driver operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// Window creation failed.
    WindowCreationFailed(String),
    /// Renderer creation failed.
    RendererCreationFailed(String),
    /// A draw or window call was rejected.
    InvalidOperation(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowCreationFailed(msg) => write!(f, "Couldn't create window: {}", msg),
            Self::RendererCreationFailed(msg) => write!(f, "Couldn't create renderer: {}", msg),
            Self::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for DriverError {}

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    /// Tint applied to the button and axis highlight textures.
    pub const HIGHLIGHT: Rgb = Rgb::new(10, 255, 21);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Which highlight texture an overlay uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Button,
    Axis,
}

/// Drawing surface the frame loop renders into.
///
/// Implementations own the background and highlight textures; the frame
/// loop only says where they go.
pub trait GraphicsDriver {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Copy the background image over the full logical surface.
    fn draw_background(&mut self) -> DriverResult<()>;

    /// Copy a highlight icon, rotated by `overlay.angle` degrees.
    fn draw_overlay(&mut self, overlay: &Overlay) -> DriverResult<()>;

    fn set_title(&mut self, title: &str) -> DriverResult<()>;

    /// Show the composed frame.
    fn present(&mut self);
}
