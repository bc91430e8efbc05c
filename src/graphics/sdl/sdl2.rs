//!
//! SDL2 renderer driver.
//!
//! Owns the window canvas and the three textures the frame loop draws:
//! the controller background and the button/axis highlight icons.
//! Textures borrow the [`TextureCreator`] they came from, so the creator
//! must outlive the driver.
//!

use std::path::Path;

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::sys;
use sdl2::video::Window;
use sdl2::VideoSubsystem;

use crate::config::{Options, Resolution};
use crate::graphics::layout::{Overlay, ICON_SIZE};
use crate::graphics::sdl::common::{DriverError, DriverResult, GraphicsDriver, Icon, Rgb};

/// Title shown until a controller is bound.
pub const WINDOW_TITLE: &str = "Game Controller Test";

/// Errors from loading an image into a texture.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextureError {
    #[error("Couldn't load {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Couldn't create texture: {0}")]
    Create(String),
}

/// Color key for a surface whose top-left pixel should be transparent.
///
/// Only single-byte (palettized) pixels are keyed; the key is the palette
/// index found in the first pixel.
#[must_use]
pub fn color_key_for(bytes_per_pixel: usize, first_pixel: Option<u8>) -> Option<u32> {
    if bytes_per_pixel == 1 {
        first_pixel.map(u32::from)
    } else {
        None
    }
}

/// Load a BMP file into a texture.
///
/// The decoded surface is released before returning, whatever the outcome.
pub fn load_texture<'t, T>(
    creator: &'t TextureCreator<T>,
    path: &Path,
    transparent: bool,
) -> Result<Texture<'t>, TextureError> {
    let surface = Surface::load_bmp(path).map_err(|reason| {
        let err = TextureError::Load {
            path: path.display().to_string(),
            reason,
        };
        log::error!("{}", err);
        err
    })?;

    if transparent {
        apply_corner_color_key(&surface);
    }

    creator.create_texture_from_surface(&surface).map_err(|e| {
        let err = TextureError::Create(e.to_string());
        log::error!("{}", err);
        err
    })
}

fn bytes_per_pixel(surface: &Surface<'_>) -> usize {
    // SAFETY: a live surface always carries a valid format pointer.
    usize::from(unsafe { (*(*surface.raw()).format).BytesPerPixel })
}

fn apply_corner_color_key(surface: &Surface<'_>) {
    let bytes_per_pixel = bytes_per_pixel(surface);
    let first_pixel = surface.with_lock(|pixels| pixels.first().copied());

    if let Some(key) = color_key_for(bytes_per_pixel, first_pixel) {
        // SAFETY: the surface is live for this call and keyed by palette index,
        // which the safe wrapper can only express as an RGB lookup.
        let rc = unsafe { sys::SDL_SetColorKey(surface.raw(), 1, key) };
        if rc < 0 {
            log::warn!("Couldn't set color key: {}", sdl2::get_error());
        }
    }
}

/// The three images drawn every frame.
pub struct Textures<'t> {
    pub background: Texture<'t>,
    pub button: Texture<'t>,
    pub axis: Texture<'t>,
}

impl<'t> Textures<'t> {
    /// Load all three images, attempting each even when an earlier one
    /// fails, and tint the highlights.
    pub fn load<T>(
        creator: &'t TextureCreator<T>,
        options: &Options,
    ) -> Result<Self, TextureError> {
        let background = load_texture(creator, &options.asset_path(&options.background_image), false);
        let button = load_texture(creator, &options.asset_path(&options.button_image), true);
        let axis = load_texture(creator, &options.asset_path(&options.axis_image), true);

        let mut textures = Self {
            background: background?,
            button: button?,
            axis: axis?,
        };

        let Rgb { r, g, b } = Rgb::HIGHLIGHT;
        textures.button.set_color_mod(r, g, b);
        textures.axis.set_color_mod(r, g, b);

        Ok(textures)
    }
}

/// Create the centered window and its renderer.
///
/// The renderer is cleared to black once and scaled to `resolution`
/// regardless of the size the platform actually grants.
pub fn create_canvas(video: &VideoSubsystem, resolution: Resolution) -> DriverResult<Canvas<Window>> {
    log::info!("Creating window: {}x{}", resolution.width, resolution.height);

    let window = video
        .window(WINDOW_TITLE, resolution.width, resolution.height)
        .position_centered()
        .build()
        .map_err(|e| DriverError::WindowCreationFailed(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| DriverError::RendererCreationFailed(e.to_string()))?;

    log::debug!("SDL2 renderer: {}", canvas.info().name);

    canvas.set_draw_color(to_sdl_color(Rgb::BLACK));
    canvas.clear();
    canvas.present();

    if let Err(e) = canvas.set_logical_size(resolution.width, resolution.height) {
        log::warn!("Couldn't set logical size: {}", e);
    }

    Ok(canvas)
}

fn to_sdl_color(color: Rgb) -> Color {
    Color::RGB(color.r, color.g, color.b)
}

/// Destination rectangle for an overlay.
#[must_use]
pub fn overlay_rect(overlay: &Overlay) -> Rect {
    Rect::new(overlay.position.x, overlay.position.y, ICON_SIZE, ICON_SIZE)
}

/// SDL2 renderer-backed driver.
pub struct SdlDisplay<'t> {
    canvas: Canvas<Window>,
    textures: Textures<'t>,
}

impl<'t> SdlDisplay<'t> {
    pub fn new(canvas: Canvas<Window>, textures: Textures<'t>) -> Self {
        Self { canvas, textures }
    }
}

impl GraphicsDriver for SdlDisplay<'_> {
    fn clear(&mut self, color: Rgb) {
        self.canvas.set_draw_color(to_sdl_color(color));
        self.canvas.clear();
    }

    fn draw_background(&mut self) -> DriverResult<()> {
        self.canvas
            .copy(&self.textures.background, None, None)
            .map_err(DriverError::InvalidOperation)
    }

    fn draw_overlay(&mut self, overlay: &Overlay) -> DriverResult<()> {
        let texture = match overlay.icon {
            Icon::Button => &self.textures.button,
            Icon::Axis => &self.textures.axis,
        };
        self.canvas
            .copy_ex(
                texture,
                None,
                Some(overlay_rect(overlay)),
                overlay.angle,
                None,
                false,
                false,
            )
            .map_err(DriverError::InvalidOperation)
    }

    fn set_title(&mut self, title: &str) -> DriverResult<()> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| DriverError::InvalidOperation(format!("set title: {}", e)))
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
