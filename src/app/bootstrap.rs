//! Startup and shutdown of the SDL session.
//!
//! Resources are held in locals declared in acquisition order, so an early
//! return releases whatever was already created and a normal return tears
//! everything down in reverse. The input backend only holds a clone of
//! the controller subsystem handle; the subsystem itself is shut down after the
//! renderer and window are gone.

use sdl2::{GameControllerSubsystem, JoystickSubsystem};

use crate::app::main_loop::run_blocking;
use crate::app::state::App;
use crate::config::Options;
use crate::graphics::sdl::common::DriverError;
use crate::graphics::sdl::sdl2::{create_canvas, SdlDisplay, TextureError, Textures};
use crate::input::device::summary_line;
use crate::input::events::InputError;
use crate::input::joystick::{self, SdlController, SdlInput};

/// Fatal startup failures.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Couldn't initialize SDL: {0}")]
    Init(String),

    #[error(transparent)]
    Display(#[from] DriverError),

    #[error("Required images could not be loaded")]
    Texture(#[from] TextureError),
}

impl StartupError {
    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Init(_) => 1,
            Self::Display(_) | Self::Texture(_) => 2,
        }
    }
}

impl From<InputError> for StartupError {
    fn from(err: InputError) -> Self {
        Self::Init(err.to_string())
    }
}

/// Initialize everything, run the frame loop until quit, then shut down.
pub fn run(options: &Options) -> Result<(), StartupError> {
    let sdl = sdl2::init().map_err(StartupError::Init)?;
    let video = sdl.video().map_err(StartupError::Init)?;
    let joysticks = sdl.joystick().map_err(StartupError::Init)?;
    let controllers = sdl.game_controller().map_err(StartupError::Init)?;

    joystick::load_mappings(&controllers, &options.mapping_path());

    if options.dump_mappings {
        log_mappings(&controllers);
    }
    log_devices(&joysticks, &controllers);

    let canvas = create_canvas(&video, options.resolution)?;
    let texture_creator = canvas.texture_creator();
    let textures = Textures::load(&texture_creator, options)?;
    let mut display = SdlDisplay::new(canvas, textures);

    let mut input = SdlInput::new(&sdl, controllers.clone())?;
    let mut app: App<SdlController> = App::new();

    let frames = run_blocking(|| app.step(&mut input, &mut display));
    log::debug!("Frame loop finished after {} frames", frames);

    drop(app);
    drop(input);
    drop(display);
    drop(texture_creator);
    drop(controllers);
    drop(joysticks);
    drop(video);
    log::info!("Shutting down");
    Ok(())
}

fn log_mappings(controllers: &GameControllerSubsystem) {
    log::info!("Supported mappings:");
    for mapping in joystick::mapping_strings(controllers) {
        log::info!("\t{}", mapping);
    }
    log::info!("");
}

fn log_devices(joysticks: &JoystickSubsystem, controllers: &GameControllerSubsystem) {
    match joystick::enumerate_devices(joysticks, controllers) {
        Ok(devices) => {
            for device in &devices {
                log::info!("{}", device);
            }
            log::info!("{}", summary_line(&devices));
        }
        Err(e) => log::warn!("Couldn't enumerate devices: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(StartupError::Init("no video".to_string()).exit_code(), 1);
        assert_eq!(
            StartupError::from(DriverError::WindowCreationFailed("x".to_string())).exit_code(),
            2
        );
        assert_eq!(
            StartupError::from(DriverError::RendererCreationFailed("x".to_string())).exit_code(),
            2
        );
        let missing = TextureError::Load {
            path: "axis.bmp".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(StartupError::from(missing).exit_code(), 2);
    }

    #[test]
    fn test_input_error_is_init_failure() {
        let err = StartupError::from(InputError::Subsystem("no event pump".to_string()));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Couldn't initialize SDL: Input subsystem error: no event pump"
        );
    }

    #[test]
    fn test_display_error_is_transparent() {
        let err = StartupError::from(DriverError::WindowCreationFailed("no display".to_string()));
        assert_eq!(err.to_string(), "Couldn't create window: no display");
    }

    #[test]
    #[ignore] // Requires SDL with game controller support
    fn test_input_shares_controller_subsystem() {
        let sdl = sdl2::init().unwrap();
        let controllers = sdl.game_controller().unwrap();
        let input = SdlInput::new(&sdl, controllers.clone()).unwrap();
        drop(input);

        // The subsystem stays initialized while the original handle lives.
        // SAFETY: plain query of SDL's initialized-subsystem mask.
        let live = unsafe { sdl2::sys::SDL_WasInit(sdl2::sys::SDL_INIT_GAMECONTROLLER) };
        assert_ne!(live, 0);
        drop(controllers);
    }

    #[test]
    #[ignore] // Requires a video device and the BMP assets
    fn test_run_without_assets_exits_with_two() {
        let options = Options {
            asset_dir: std::env::temp_dir().join("controllermap-missing-assets"),
            ..Options::default()
        };
        let err = run(&options).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
