//! Attached device identity and classification.

use std::fmt;

/// Controller sub-type reported for a device index.
///
/// Raw values follow `SDL_GameControllerType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerType {
    Unknown,
    Xbox360,
    XboxOne,
    Ps3,
    Ps4,
    NintendoSwitchPro,
    Virtual,
    Ps5,
    AmazonLuna,
    GoogleStadia,
    NvidiaShield,
    JoyConLeft,
    JoyConRight,
    JoyConPair,
}

impl ControllerType {
    /// Classify a raw type value. Unrecognized values are `Unknown`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Xbox360,
            2 => Self::XboxOne,
            3 => Self::Ps3,
            4 => Self::Ps4,
            5 => Self::NintendoSwitchPro,
            6 => Self::Virtual,
            7 => Self::Ps5,
            8 => Self::AmazonLuna,
            9 => Self::GoogleStadia,
            10 => Self::NvidiaShield,
            11 => Self::JoyConLeft,
            12 => Self::JoyConRight,
            13 => Self::JoyConPair,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Xbox360 => "XBox 360 Controller",
            Self::XboxOne => "XBox One Controller",
            Self::Ps3 => "PS3 Controller",
            Self::Ps4 => "PS4 Controller",
            Self::NintendoSwitchPro => "Nintendo Switch Pro Controller",
            Self::Virtual => "Virtual Game Controller",
            Self::Ps5 => "PS5 Controller",
            Self::AmazonLuna => "Amazon Luna Controller",
            Self::GoogleStadia => "Google Stadia Controller",
            Self::NvidiaShield => "NVIDIA Shield Controller",
            Self::JoyConLeft => "Nintendo Switch Joy-Con (L)",
            Self::JoyConRight => "Nintendo Switch Joy-Con (R)",
            Self::JoyConPair => "Nintendo Switch Joy-Con Pair",
            Self::Unknown => "Game Controller",
        }
    }
}

/// Whether the device has a controller mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Controller(ControllerType),
    Joystick,
}

impl DeviceKind {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Controller(kind) => kind.description(),
            Self::Joystick => "Joystick",
        }
    }

    #[must_use]
    pub const fn is_controller(self) -> bool {
        matches!(self, Self::Controller(_))
    }
}

/// Identity of one attached device, as logged at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub index: u32,
    pub kind: DeviceKind,
    pub name: Option<String>,
    pub guid: String,
    pub vendor: u16,
    pub product: u16,
    pub player_index: i32,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} (guid {}, VID 0x{:04x}, PID 0x{:04x}, player index = {})",
            self.kind.description(),
            self.index,
            self.name.as_deref().unwrap_or("Unknown"),
            self.guid,
            self.vendor,
            self.product,
            self.player_index
        )
    }
}

/// Closing line of the device listing.
#[must_use]
pub fn summary_line(devices: &[DeviceInfo]) -> String {
    let controllers = devices.iter().filter(|d| d.kind.is_controller()).count();
    format!(
        "There are {} game controller(s) attached ({} joystick(s))",
        controllers,
        devices.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Game Controller")]
    #[case(1, "XBox 360 Controller")]
    #[case(2, "XBox One Controller")]
    #[case(3, "PS3 Controller")]
    #[case(4, "PS4 Controller")]
    #[case(5, "Nintendo Switch Pro Controller")]
    #[case(6, "Virtual Game Controller")]
    #[case(7, "PS5 Controller")]
    #[case(99, "Game Controller")]
    fn test_controller_type_description(#[case] raw: u32, #[case] expected: &str) {
        assert_eq!(ControllerType::from_raw(raw).description(), expected);
    }

    fn sample(kind: DeviceKind, name: Option<&str>) -> DeviceInfo {
        DeviceInfo {
            index: 0,
            kind,
            name: name.map(str::to_string),
            guid: "030000005e0400008e02000014010000".to_string(),
            vendor: 0x045e,
            product: 0x028e,
            player_index: 0,
        }
    }

    #[test]
    fn test_device_line() {
        let info = sample(
            DeviceKind::Controller(ControllerType::Xbox360),
            Some("Xbox 360 Controller"),
        );
        assert_eq!(
            info.to_string(),
            "XBox 360 Controller 0: Xbox 360 Controller \
             (guid 030000005e0400008e02000014010000, VID 0x045e, PID 0x028e, player index = 0)"
        );
    }

    #[test]
    fn test_joystick_without_name() {
        let mut info = sample(DeviceKind::Joystick, None);
        info.index = 2;
        info.player_index = -1;
        let line = info.to_string();
        assert!(line.starts_with("Joystick 2: Unknown (guid "));
        assert!(line.ends_with("player index = -1)"));
    }

    #[test]
    fn test_summary_line() {
        let devices = vec![
            sample(DeviceKind::Controller(ControllerType::Ps4), Some("pad")),
            sample(DeviceKind::Joystick, Some("stick")),
        ];
        assert_eq!(
            summary_line(&devices),
            "There are 1 game controller(s) attached (2 joystick(s))"
        );
        assert_eq!(
            summary_line(&[]),
            "There are 0 game controller(s) attached (0 joystick(s))"
        );
    }
}
