//! Backend-neutral input events and the controller seams the frame loop
//! runs against.

use crate::input::controls::{Axis, Button};

/// Rumble duration in milliseconds, re-issued every frame.
pub const RUMBLE_DURATION_MS: u32 = 250;

/// Keys the frame loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// One pending event, drained once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A controller was attached; `device_index` is its enumeration index.
    ControllerAdded { device_index: u32 },
    /// A controller was removed; `instance_id` identifies the opened device.
    ControllerRemoved { instance_id: u32 },
    AxisMotion { axis: String, value: i16 },
    ButtonChanged { button: String, pressed: bool },
    KeyDown(Key),
    Quit,
    Other,
}

/// Errors reported by an input backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Couldn't open controller {index}: {reason}")]
    Open { index: u32, reason: String },

    #[error("Rumble failed: {0}")]
    Rumble(String),

    #[error("Input subsystem error: {0}")]
    Subsystem(String),
}

/// Rumble intensities derived from trigger readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RumbleCommand {
    pub low_frequency: u16,
    pub high_frequency: u16,
    pub duration_ms: u32,
}

impl RumbleCommand {
    /// Scale each trigger reading by two, clamped to the intensity range.
    #[must_use]
    pub fn from_triggers(left: i16, right: i16) -> Self {
        Self {
            low_frequency: scale_trigger(left),
            high_frequency: scale_trigger(right),
            duration_ms: RUMBLE_DURATION_MS,
        }
    }
}

fn scale_trigger(value: i16) -> u16 {
    let scaled = i32::from(value) * 2;
    scaled.clamp(0, i32::from(u16::MAX)) as u16
}

/// An opened game controller.
pub trait Controller {
    /// Name reported by the device.
    fn name(&self) -> String;

    /// Instance id used by removal events.
    fn instance_id(&self) -> u32;

    fn is_pressed(&self, button: Button) -> bool;

    fn axis_value(&self, axis: Axis) -> i16;

    fn rumble(&mut self, command: RumbleCommand) -> Result<(), InputError>;
}

/// Source of input events and controllers.
pub trait InputBackend {
    type Controller: Controller;

    /// Drain every queued event without blocking.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn open_controller(&mut self, device_index: u32) -> Result<Self::Controller, InputError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rumble_from_triggers() {
        let command = RumbleCommand::from_triggers(1000, 20000);
        assert_eq!(command.low_frequency, 2000);
        assert_eq!(command.high_frequency, 40000);
        assert_eq!(command.duration_ms, 250);
    }

    #[test]
    fn test_rumble_full_trigger() {
        let command = RumbleCommand::from_triggers(i16::MAX, 0);
        assert_eq!(command.low_frequency, 65534);
        assert_eq!(command.high_frequency, 0);
    }

    #[test]
    fn test_rumble_negative_reading_clamps_to_zero() {
        let command = RumbleCommand::from_triggers(-5, i16::MIN);
        assert_eq!(command.low_frequency, 0);
        assert_eq!(command.high_frequency, 0);
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::Open {
            index: 3,
            reason: "Invalid joystick index".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Couldn't open controller 3: Invalid joystick index"
        );
    }
}
