//! SDL2 game controller backend.
//!
//! Wraps the controller subsystem, the event pump and opened controllers
//! behind the [`InputBackend`] and [`Controller`] traits. Per-index device
//! details the safe wrapper does not expose go through `sdl2::sys`.

use std::ffi::CStr;
use std::path::Path;

use sdl2::controller::GameController;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::sys;
use sdl2::{EventPump, GameControllerSubsystem, JoystickSubsystem, Sdl};

use crate::input::controls::{Axis, Button};
use crate::input::device::{ControllerType, DeviceInfo, DeviceKind};
use crate::input::events::{Controller, InputBackend, InputError, InputEvent, Key, RumbleCommand};

// SDL_GameControllerType gains variants with each SDL release, so the type
// is read as a plain integer rather than as the bindings' closed enum.
#[allow(clashing_extern_declarations)]
extern "C" {
    fn SDL_GameControllerTypeForIndex(joystick_index: libc::c_int) -> libc::c_int;
}

/// Controller sub-type for a device index, tolerating values newer than
/// [`ControllerType`] knows.
fn controller_type_for_index(index: libc::c_int) -> ControllerType {
    // SAFETY: callers pass an index below SDL_NumJoysticks() while the
    // controller subsystem is live.
    let raw = unsafe { SDL_GameControllerTypeForIndex(index) };
    u32::try_from(raw).map_or(ControllerType::Unknown, ControllerType::from_raw)
}

/// An opened SDL game controller.
pub struct SdlController {
    inner: GameController,
}

impl Controller for SdlController {
    fn name(&self) -> String {
        self.inner.name()
    }

    fn instance_id(&self) -> u32 {
        self.inner.instance_id()
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.inner.button(button.to_sdl())
    }

    fn axis_value(&self, axis: Axis) -> i16 {
        self.inner.axis(axis.to_sdl())
    }

    fn rumble(&mut self, command: RumbleCommand) -> Result<(), InputError> {
        self.inner
            .set_rumble(
                command.low_frequency,
                command.high_frequency,
                command.duration_ms,
            )
            .map_err(|e| InputError::Rumble(e.to_string()))
    }
}

/// Event pump plus controller subsystem.
///
/// SDL requires both to be used from the thread that initialized it.
pub struct SdlInput {
    controllers: GameControllerSubsystem,
    event_pump: EventPump,
}

impl SdlInput {
    pub fn new(sdl: &Sdl, controllers: GameControllerSubsystem) -> Result<Self, InputError> {
        let event_pump = sdl.event_pump().map_err(InputError::Subsystem)?;
        Ok(Self {
            controllers,
            event_pump,
        })
    }
}

impl InputBackend for SdlInput {
    type Controller = SdlController;

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.event_pump.poll_iter().map(translate_event).collect()
    }

    fn open_controller(&mut self, device_index: u32) -> Result<SdlController, InputError> {
        self.controllers
            .open(device_index)
            .map(|inner| SdlController { inner })
            .map_err(|e| InputError::Open {
                index: device_index,
                reason: e.to_string(),
            })
    }
}

/// Convert an SDL event into the frame loop's vocabulary.
pub fn translate_event(event: Event) -> InputEvent {
    match event {
        Event::ControllerDeviceAdded { which, .. } => InputEvent::ControllerAdded {
            device_index: which,
        },
        Event::ControllerDeviceRemoved { which, .. } => InputEvent::ControllerRemoved {
            instance_id: which,
        },
        Event::ControllerAxisMotion { axis, value, .. } => InputEvent::AxisMotion {
            axis: axis.string(),
            value,
        },
        Event::ControllerButtonDown { button, .. } => InputEvent::ButtonChanged {
            button: button.string(),
            pressed: true,
        },
        Event::ControllerButtonUp { button, .. } => InputEvent::ButtonChanged {
            button: button.string(),
            pressed: false,
        },
        Event::KeyDown { keycode, .. } => {
            if keycode == Some(Keycode::Escape) {
                InputEvent::KeyDown(Key::Escape)
            } else {
                InputEvent::KeyDown(Key::Other)
            }
        }
        Event::Quit { .. } => InputEvent::Quit,
        _ => InputEvent::Other,
    }
}

/// Load mapping definitions from `path`. A missing file is expected.
pub fn load_mappings(controllers: &GameControllerSubsystem, path: &Path) {
    match controllers.load_mappings(path) {
        Ok(count) => log::debug!("Loaded {} mappings from {}", count, path.display()),
        Err(e) => log::debug!("No mappings loaded from {}: {}", path.display(), e),
    }
}

/// Every mapping string SDL currently knows.
pub fn mapping_strings(_controllers: &GameControllerSubsystem) -> Vec<String> {
    // SAFETY: the controller subsystem is initialized for the borrow's lifetime.
    let count = unsafe { sys::SDL_GameControllerNumMappings() };

    (0..count)
        .filter_map(|index| {
            // SAFETY: index is in range; the returned string is owned by us
            // and released with SDL_free after copying.
            unsafe {
                let raw = sys::SDL_GameControllerMappingForIndex(index);
                if raw.is_null() {
                    return None;
                }
                let mapping = CStr::from_ptr(raw).to_string_lossy().into_owned();
                sys::SDL_free(raw.cast());
                Some(mapping)
            }
        })
        .collect()
}

/// Describe every attached joystick, controller or not.
pub fn enumerate_devices(
    joysticks: &JoystickSubsystem,
    controllers: &GameControllerSubsystem,
) -> Result<Vec<DeviceInfo>, InputError> {
    let count = joysticks.num_joysticks().map_err(InputError::Subsystem)?;
    let mut devices = Vec::with_capacity(count as usize);

    for index in 0..count {
        let raw_index = index as libc::c_int;

        let guid = joysticks
            .device_guid(index)
            .map(|guid| guid.string())
            .unwrap_or_default();

        let (kind, name) = if controllers.is_game_controller(index) {
            (
                DeviceKind::Controller(controller_type_for_index(raw_index)),
                controllers.name_for_index(index).ok(),
            )
        } else {
            (DeviceKind::Joystick, joysticks.name_for_index(index).ok())
        };

        // SAFETY: index < SDL_NumJoysticks() and the subsystem is live;
        // these only read SDL's device list.
        let (vendor, product, player_index) = unsafe {
            (
                sys::SDL_JoystickGetDeviceVendor(raw_index),
                sys::SDL_JoystickGetDeviceProduct(raw_index),
                sys::SDL_JoystickGetDevicePlayerIndex(raw_index),
            )
        };

        devices.push(DeviceInfo {
            index,
            kind,
            name,
            guid,
            vendor,
            product,
            player_index,
        });
    }

    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::controller::{Axis as SdlAxis, Button as SdlButton};

    #[test]
    fn test_translate_device_events() {
        assert_eq!(
            translate_event(Event::ControllerDeviceAdded {
                timestamp: 0,
                which: 2
            }),
            InputEvent::ControllerAdded { device_index: 2 }
        );
        assert_eq!(
            translate_event(Event::ControllerDeviceRemoved {
                timestamp: 0,
                which: 7
            }),
            InputEvent::ControllerRemoved { instance_id: 7 }
        );
    }

    #[test]
    fn test_translate_axis_and_buttons() {
        assert_eq!(
            translate_event(Event::ControllerAxisMotion {
                timestamp: 0,
                which: 0,
                axis: SdlAxis::TriggerLeft,
                value: 1234
            }),
            InputEvent::AxisMotion {
                axis: "lefttrigger".to_string(),
                value: 1234
            }
        );
        assert_eq!(
            translate_event(Event::ControllerButtonDown {
                timestamp: 0,
                which: 0,
                button: SdlButton::Start
            }),
            InputEvent::ButtonChanged {
                button: "start".to_string(),
                pressed: true
            }
        );
        assert_eq!(
            translate_event(Event::ControllerButtonUp {
                timestamp: 0,
                which: 0,
                button: SdlButton::DPadLeft
            }),
            InputEvent::ButtonChanged {
                button: "dpleft".to_string(),
                pressed: false
            }
        );
    }

    #[test]
    fn test_translate_quit() {
        assert_eq!(
            translate_event(Event::Quit { timestamp: 0 }),
            InputEvent::Quit
        );
    }

    #[test]
    #[ignore] // Requires SDL with joystick support
    fn test_enumerate_devices_live() {
        let sdl = sdl2::init().unwrap();
        let joysticks = sdl.joystick().unwrap();
        let controllers = sdl.game_controller().unwrap();
        let devices = enumerate_devices(&joysticks, &controllers).unwrap();
        assert_eq!(devices.len() as u32, joysticks.num_joysticks().unwrap());
        assert!(!mapping_strings(&controllers).is_empty());
    }

    #[test]
    #[ignore] // Requires SDL with joystick support
    fn test_controller_type_out_of_range_index() {
        let sdl = sdl2::init().unwrap();
        let _controllers = sdl.game_controller().unwrap();
        // SDL answers SDL_CONTROLLER_TYPE_UNKNOWN for an index it doesn't have.
        assert_eq!(controller_type_for_index(-1), ControllerType::Unknown);
    }
}
