//! Logical controller buttons and axes.
//!
//! Ordinals follow SDL's `SDL_GameControllerButton` / `SDL_GameControllerAxis`
//! numbering so the layout tables can be indexed positionally.

/// Logical controller button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    A = 0,
    B,
    X,
    Y,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

impl Button {
    pub const COUNT: usize = 15;

    pub const ALL: [Button; Button::COUNT] = [
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::Back,
        Button::Guide,
        Button::Start,
        Button::LeftStick,
        Button::RightStick,
        Button::LeftShoulder,
        Button::RightShoulder,
        Button::DPadUp,
        Button::DPadDown,
        Button::DPadLeft,
        Button::DPadRight,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbolic name as used in mapping strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::X => "x",
            Self::Y => "y",
            Self::Back => "back",
            Self::Guide => "guide",
            Self::Start => "start",
            Self::LeftStick => "leftstick",
            Self::RightStick => "rightstick",
            Self::LeftShoulder => "leftshoulder",
            Self::RightShoulder => "rightshoulder",
            Self::DPadUp => "dpup",
            Self::DPadDown => "dpdown",
            Self::DPadLeft => "dpleft",
            Self::DPadRight => "dpright",
        }
    }

    /// Convert from the `sdl2` crate's button. Buttons without a place on
    /// the controller image (paddles, touchpad, misc) have no counterpart.
    #[must_use]
    pub fn from_sdl(button: sdl2::controller::Button) -> Option<Self> {
        use sdl2::controller::Button as Sdl;
        Some(match button {
            Sdl::A => Self::A,
            Sdl::B => Self::B,
            Sdl::X => Self::X,
            Sdl::Y => Self::Y,
            Sdl::Back => Self::Back,
            Sdl::Guide => Self::Guide,
            Sdl::Start => Self::Start,
            Sdl::LeftStick => Self::LeftStick,
            Sdl::RightStick => Self::RightStick,
            Sdl::LeftShoulder => Self::LeftShoulder,
            Sdl::RightShoulder => Self::RightShoulder,
            Sdl::DPadUp => Self::DPadUp,
            Sdl::DPadDown => Self::DPadDown,
            Sdl::DPadLeft => Self::DPadLeft,
            Sdl::DPadRight => Self::DPadRight,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn to_sdl(self) -> sdl2::controller::Button {
        use sdl2::controller::Button as Sdl;
        match self {
            Self::A => Sdl::A,
            Self::B => Sdl::B,
            Self::X => Sdl::X,
            Self::Y => Sdl::Y,
            Self::Back => Sdl::Back,
            Self::Guide => Sdl::Guide,
            Self::Start => Sdl::Start,
            Self::LeftStick => Sdl::LeftStick,
            Self::RightStick => Sdl::RightStick,
            Self::LeftShoulder => Sdl::LeftShoulder,
            Self::RightShoulder => Sdl::RightShoulder,
            Self::DPadUp => Sdl::DPadUp,
            Self::DPadDown => Sdl::DPadDown,
            Self::DPadLeft => Sdl::DPadLeft,
            Self::DPadRight => Sdl::DPadRight,
        }
    }
}

/// Logical controller axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Axis {
    LeftX = 0,
    LeftY,
    RightX,
    RightY,
    TriggerLeft,
    TriggerRight,
}

impl Axis {
    pub const COUNT: usize = 6;

    pub const ALL: [Axis; Axis::COUNT] = [
        Axis::LeftX,
        Axis::LeftY,
        Axis::RightX,
        Axis::RightY,
        Axis::TriggerLeft,
        Axis::TriggerRight,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbolic name as used in mapping strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftX => "leftx",
            Self::LeftY => "lefty",
            Self::RightX => "rightx",
            Self::RightY => "righty",
            Self::TriggerLeft => "lefttrigger",
            Self::TriggerRight => "righttrigger",
        }
    }

    #[must_use]
    pub const fn from_sdl(axis: sdl2::controller::Axis) -> Self {
        use sdl2::controller::Axis as Sdl;
        match axis {
            Sdl::LeftX => Self::LeftX,
            Sdl::LeftY => Self::LeftY,
            Sdl::RightX => Self::RightX,
            Sdl::RightY => Self::RightY,
            Sdl::TriggerLeft => Self::TriggerLeft,
            Sdl::TriggerRight => Self::TriggerRight,
        }
    }

    #[must_use]
    pub const fn to_sdl(self) -> sdl2::controller::Axis {
        use sdl2::controller::Axis as Sdl;
        match self {
            Self::LeftX => Sdl::LeftX,
            Self::LeftY => Sdl::LeftY,
            Self::RightX => Sdl::RightX,
            Self::RightY => Sdl::RightY,
            Self::TriggerLeft => Sdl::TriggerLeft,
            Self::TriggerRight => Sdl::TriggerRight,
        }
    }
}
