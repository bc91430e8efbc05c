//! Application state and the per-frame function.

use crate::app::main_loop::LoopControl;
use crate::graphics::layout::overlays;
use crate::graphics::sdl::common::{GraphicsDriver, Rgb};
use crate::input::controls::Axis;
use crate::input::events::{Controller, InputBackend, InputEvent, Key, RumbleCommand};

/// Prefix of the window title once a controller is bound.
pub const TITLE_PREFIX: &str = "Game Controller Test: ";

/// Window title for a bound device.
#[must_use]
pub fn window_title(device_name: &str) -> String {
    format!("{}{}", TITLE_PREFIX, device_name)
}

/// Whether a controller is currently bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Unbound,
    Bound { instance_id: u32 },
}

/// Everything the frame loop mutates.
///
/// At most one controller is bound. Drawing and rumble each frame depend
/// only on that controller's current state.
pub struct App<C> {
    controller: Option<C>,
    done: bool,
}

impl<C: Controller> App<C> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            controller: None,
            done: false,
        }
    }

    /// True once a quit request has been seen. Never cleared.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn connection(&self) -> Connection {
        match &self.controller {
            Some(controller) => Connection::Bound {
                instance_id: controller.instance_id(),
            },
            None => Connection::Unbound,
        }
    }

    /// Run one frame and report whether the loop should continue.
    pub fn step<I, D>(&mut self, input: &mut I, display: &mut D) -> LoopControl
    where
        I: InputBackend<Controller = C>,
        D: GraphicsDriver,
    {
        self.frame(input, display);
        if self.done {
            LoopControl::Exit
        } else {
            LoopControl::Continue
        }
    }

    /// Draw the background, drain events, draw overlays, rumble, present.
    ///
    /// A quit request mid-drain still lets the rest of the frame run.
    pub fn frame<I, D>(&mut self, input: &mut I, display: &mut D)
    where
        I: InputBackend<Controller = C>,
        D: GraphicsDriver,
    {
        display.clear(Rgb::WHITE);
        if let Err(e) = display.draw_background() {
            log::debug!("Background draw failed: {}", e);
        }

        for event in input.poll_events() {
            self.handle_event(event, input, display);
        }

        if let Some(controller) = self.controller.as_mut() {
            let drawn = overlays(
                |button| controller.is_pressed(button),
                |axis| controller.axis_value(axis),
            );
            for overlay in &drawn {
                if let Err(e) = display.draw_overlay(overlay) {
                    log::debug!("Overlay draw failed: {}", e);
                }
            }

            let command = RumbleCommand::from_triggers(
                controller.axis_value(Axis::TriggerLeft),
                controller.axis_value(Axis::TriggerRight),
            );
            if let Err(e) = controller.rumble(command) {
                log::debug!("{}", e);
            }
        }

        display.present();
    }

    fn handle_event<I, D>(&mut self, event: InputEvent, input: &mut I, display: &mut D)
    where
        I: InputBackend<Controller = C>,
        D: GraphicsDriver,
    {
        match event {
            InputEvent::ControllerAdded { device_index } => {
                log::info!("Game controller device {} added.", device_index);
                if self.controller.is_none() {
                    match input.open_controller(device_index) {
                        Ok(controller) => self.connect(controller, display),
                        Err(e) => log::info!("{}", e),
                    }
                }
            }
            InputEvent::ControllerRemoved { instance_id } => {
                log::info!("Game controller device {} removed.", instance_id);
                if self.connection() == (Connection::Bound { instance_id }) {
                    self.controller = None;
                    match input.open_controller(0) {
                        Ok(controller) => self.connect(controller, display),
                        Err(e) => log::debug!("No controller left to bind: {}", e),
                    }
                }
            }
            InputEvent::AxisMotion { axis, value } => {
                log::info!("Controller axis {} changed to {}", axis, value);
            }
            InputEvent::ButtonChanged { button, pressed } => {
                log::info!(
                    "Controller button {} {}",
                    button,
                    if pressed { "pressed" } else { "released" }
                );
            }
            InputEvent::KeyDown(Key::Escape) | InputEvent::Quit => self.done = true,
            InputEvent::KeyDown(Key::Other) | InputEvent::Other => {}
        }
    }

    /// Device-just-connected transition: bind and retitle the window.
    fn connect<D: GraphicsDriver>(&mut self, controller: C, display: &mut D) {
        let title = window_title(&controller.name());
        if let Err(e) = display.set_title(&title) {
            log::debug!("Window title not updated: {}", e);
        }
        self.controller = Some(controller);
    }
}

impl<C: Controller> Default for App<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title() {
        assert_eq!(
            window_title("PS4 Controller"),
            "Game Controller Test: PS4 Controller"
        );
        assert_eq!(window_title(""), TITLE_PREFIX);
    }
}
