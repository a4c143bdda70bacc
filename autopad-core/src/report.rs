//! Controller report types: Buttons, Hat, Report.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Neutral stick position (sticks are unsigned bytes, 128 = centered).
pub const STICK_CENTER: u8 = 128;
/// Minimum stick deflection.
pub const STICK_MIN: u8 = 0;
/// Maximum stick deflection.
pub const STICK_MAX: u8 = 255;

/// Button state represented as a bitfield.
///
/// The bit layout matches the Pokken Tournament Pro Pad report the Switch
/// expects, so the raw value can be copied straight into the wire report.
///
/// # Example
///
/// ```
/// use autopad_core::Buttons;
///
/// let buttons = Buttons::A | Buttons::B;
/// assert!(buttons.contains(Buttons::A));
/// assert!(!buttons.contains(Buttons::X));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u16);

impl Buttons {
    pub const Y: Self = Self(1 << 0);
    pub const B: Self = Self(1 << 1);
    pub const A: Self = Self(1 << 2);
    pub const X: Self = Self(1 << 3);
    pub const L: Self = Self(1 << 4);
    pub const R: Self = Self(1 << 5);
    pub const ZL: Self = Self(1 << 6);
    pub const ZR: Self = Self(1 << 7);
    pub const MINUS: Self = Self(1 << 8);
    pub const PLUS: Self = Self(1 << 9);
    pub const LCLICK: Self = Self(1 << 10);
    pub const RCLICK: Self = Self(1 << 11);
    pub const HOME: Self = Self(1 << 12);
    pub const CAPTURE: Self = Self(1 << 13);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Buttons {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Buttons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Hat switch direction: 0 (top) to 7 (top-left) clockwise, or centered.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Hat {
    Top = 0,
    TopRight = 1,
    Right = 2,
    BottomRight = 3,
    Bottom = 4,
    BottomLeft = 5,
    Left = 6,
    TopLeft = 7,
    #[default]
    Center = 8,
}

impl Hat {
    /// Convert a raw byte into a hat direction.
    ///
    /// Values outside 0-7 map to [`Hat::Center`].
    #[must_use]
    pub const fn from_raw(value: u8) -> Self {
        match value {
            0 => Hat::Top,
            1 => Hat::TopRight,
            2 => Hat::Right,
            3 => Hat::BottomRight,
            4 => Hat::Bottom,
            5 => Hat::BottomLeft,
            6 => Hat::Left,
            7 => Hat::TopLeft,
            _ => Hat::Center,
        }
    }

    /// Get the raw wire value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// One controller input snapshot, sent to the host once per poll.
///
/// Sticks are unsigned bytes with 128 as the neutral position. A freshly
/// constructed report is always fully centered with no buttons pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub buttons: Buttons,
    pub lx: u8,
    pub ly: u8,
    pub rx: u8,
    pub ry: u8,
    pub hat: Hat,
}

impl Report {
    /// Size of the wire report in bytes.
    pub const SIZE: usize = 8;

    /// Create a centered report: sticks at 128, hat centered, no buttons.
    #[must_use]
    pub const fn centered() -> Self {
        Self {
            buttons: Buttons::NONE,
            lx: STICK_CENTER,
            ly: STICK_CENTER,
            rx: STICK_CENTER,
            ry: STICK_CENTER,
            hat: Hat::Center,
        }
    }

    /// Reset all four stick axes and the hat to their neutral position.
    ///
    /// Buttons are left untouched.
    #[inline]
    pub fn recenter_axes(&mut self) {
        self.lx = STICK_CENTER;
        self.ly = STICK_CENTER;
        self.rx = STICK_CENTER;
        self.ry = STICK_CENTER;
        self.hat = Hat::Center;
    }

    /// Serialize to the 8-byte Pokken pad wire layout.
    ///
    /// Layout: buttons (little-endian u16), hat, LX, LY, RX, RY, vendor (0).
    #[must_use]
    pub fn as_bytes(&self) -> [u8; Self::SIZE] {
        let buttons = self.buttons.raw().to_le_bytes();
        [
            buttons[0],
            buttons[1],
            self.hat.raw(),
            self.lx,
            self.ly,
            self.rx,
            self.ry,
            0,
        ]
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::centered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_report() {
        let report = Report::centered();
        assert_eq!(report.lx, STICK_CENTER);
        assert_eq!(report.ly, STICK_CENTER);
        assert_eq!(report.rx, STICK_CENTER);
        assert_eq!(report.ry, STICK_CENTER);
        assert_eq!(report.hat, Hat::Center);
        assert!(report.buttons.is_empty());
    }

    #[test]
    fn test_buttons_bitwise_or() {
        let buttons = Buttons::A | Buttons::ZR;
        assert!(buttons.contains(Buttons::A));
        assert!(buttons.contains(Buttons::ZR));
        assert!(!buttons.contains(Buttons::HOME));
    }

    #[test]
    fn test_hat_from_raw() {
        assert_eq!(Hat::from_raw(0), Hat::Top);
        assert_eq!(Hat::from_raw(3), Hat::BottomRight);
        assert_eq!(Hat::from_raw(7), Hat::TopLeft);
        assert_eq!(Hat::from_raw(8), Hat::Center);
        assert_eq!(Hat::from_raw(200), Hat::Center);
    }

    #[test]
    fn test_wire_layout() {
        let mut report = Report::centered();
        report.buttons = Buttons::CAPTURE | Buttons::Y;
        report.hat = Hat::Right;
        report.lx = 0;
        report.ly = 255;
        let bytes = report.as_bytes();
        assert_eq!(bytes, [0x01, 0x20, 2, 0, 255, 128, 128, 0]);
    }

    #[test]
    fn test_recenter_axes_keeps_buttons() {
        let mut report = Report::centered();
        report.buttons = Buttons::B;
        report.lx = 0;
        report.hat = Hat::Bottom;
        report.recenter_axes();
        assert_eq!(report.lx, STICK_CENTER);
        assert_eq!(report.hat, Hat::Center);
        assert!(report.buttons.contains(Buttons::B));
    }
}
