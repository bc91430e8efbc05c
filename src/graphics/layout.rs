//! Screen placement of the highlight icons over the controller image.

use crate::graphics::sdl::common::Icon;
use crate::input::controls::{Axis, Button};

/// Axis readings within this magnitude count as centered.
pub const DEADZONE: i16 = 8000;

/// Highlight icons are drawn into a square of this size.
pub const ICON_SIZE: u32 = 50;

/// Top-left corner of an icon in logical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Axis icon placement with the angle it points along for negative deflection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPosition {
    pub position: Position,
    pub angle: f64,
}

const fn pos(x: i32, y: i32) -> Position {
    Position { x, y }
}

const fn axis_pos(x: i32, y: i32, angle: f64) -> AxisPosition {
    AxisPosition {
        position: pos(x, y),
        angle,
    }
}

/// Indexed by [`Button::index`].
pub const BUTTON_POSITIONS: [Position; Button::COUNT] = [
    pos(387, 167), // a
    pos(431, 132), // b
    pos(342, 132), // x
    pos(389, 101), // y
    pos(174, 132), // back
    pos(233, 132), // guide
    pos(289, 132), // start
    pos(75, 154),  // leftstick
    pos(305, 230), // rightstick
    pos(77, 40),   // leftshoulder
    pos(396, 36),  // rightshoulder
    pos(154, 188), // dpup
    pos(154, 249), // dpdown
    pos(116, 217), // dpleft
    pos(186, 217), // dpright
];

/// Indexed by [`Axis::index`].
pub const AXIS_POSITIONS: [AxisPosition; Axis::COUNT] = [
    axis_pos(74, 153, 270.0),  // leftx
    axis_pos(74, 153, 0.0),    // lefty
    axis_pos(306, 231, 270.0), // rightx
    axis_pos(306, 231, 0.0),   // righty
    axis_pos(91, -20, 0.0),    // lefttrigger
    axis_pos(375, -20, 0.0),   // righttrigger
];

#[must_use]
pub const fn button_position(button: Button) -> Position {
    BUTTON_POSITIONS[button.index()]
}

#[must_use]
pub const fn axis_position(axis: Axis) -> AxisPosition {
    AXIS_POSITIONS[axis.index()]
}

/// One icon to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub icon: Icon,
    pub position: Position,
    pub angle: f64,
}

/// Highlight for a pressed button, never rotated.
#[must_use]
pub const fn button_overlay(button: Button) -> Overlay {
    Overlay {
        icon: Icon::Button,
        position: button_position(button),
        angle: 0.0,
    }
}

/// Directional highlight for an axis, or `None` inside the deadzone.
///
/// Negative deflection points along the table angle, positive deflection
/// is turned around by 180 degrees.
#[must_use]
pub fn axis_overlay(axis: Axis, value: i16) -> Option<Overlay> {
    let entry = axis_position(axis);
    let angle = if value < -DEADZONE {
        entry.angle
    } else if value > DEADZONE {
        entry.angle + 180.0
    } else {
        return None;
    };

    Some(Overlay {
        icon: Icon::Axis,
        position: entry.position,
        angle,
    })
}

/// All overlays for one controller snapshot: buttons first, then axes.
pub fn overlays<P, A>(is_pressed: P, axis_value: A) -> Vec<Overlay>
where
    P: Fn(Button) -> bool,
    A: Fn(Axis) -> i16,
{
    let buttons = Button::ALL
        .into_iter()
        .filter(|&button| is_pressed(button))
        .map(button_overlay);
    let axes = Axis::ALL
        .into_iter()
        .filter_map(|axis| axis_overlay(axis, axis_value(axis)));

    buttons.chain(axes).collect()
}
