//! Controller input
//!
//! Logical buttons and axes, device classification, and the event/controller
//! seams the frame loop is written against.
//!
//! # Architecture
//!
//! - `controls`: the closed button and axis enumerations
//! - `device`: controller sub-type classification and identity lines
//! - `events`: backend-neutral events, rumble commands and backend traits
//! - `joystick`: the SDL2 implementation of those traits

pub mod controls;
pub mod device;
pub mod events;
pub mod joystick;

pub use controls::{Axis, Button};
pub use device::{ControllerType, DeviceInfo, DeviceKind};
pub use events::{Controller, InputBackend, InputError, InputEvent, Key, RumbleCommand};
pub use joystick::{SdlController, SdlInput};
