//! Macro command tokens and their effect on a report.

use crate::report::{Buttons, Report, STICK_MAX, STICK_MIN};

/// A single abstract controller input used in macro tables.
///
/// Directional tokens deflect the left stick, diagonals deflect both axes,
/// button tokens OR one bit into the report's button field. [`Button::Nothing`]
/// recenters the sticks and hat without touching buttons, mirroring the
/// fall-through behavior the host sees between presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    A,
    B,
    X,
    Y,
    L,
    R,
    Zl,
    Zr,
    /// Both shoulder triggers at once (used by the sync preamble).
    Triggers,
    Plus,
    Minus,
    Lclick,
    Rclick,
    Home,
    Capture,
    /// No input; recenters sticks and hat.
    Nothing,
}

impl Button {
    /// Apply this token's single semantic effect to `report`.
    ///
    /// Button bits accumulate across calls; stick writes overwrite the axis.
    pub fn apply(self, report: &mut Report) {
        match self {
            Button::Up => report.ly = STICK_MIN,
            Button::Down => report.ly = STICK_MAX,
            Button::Left => report.lx = STICK_MIN,
            Button::Right => report.lx = STICK_MAX,
            Button::UpLeft => {
                report.lx = STICK_MIN;
                report.ly = STICK_MIN;
            }
            Button::UpRight => {
                report.lx = STICK_MAX;
                report.ly = STICK_MIN;
            }
            Button::DownLeft => {
                report.lx = STICK_MIN;
                report.ly = STICK_MAX;
            }
            Button::DownRight => {
                report.lx = STICK_MAX;
                report.ly = STICK_MAX;
            }
            Button::A => report.buttons |= Buttons::A,
            Button::B => report.buttons |= Buttons::B,
            Button::X => report.buttons |= Buttons::X,
            Button::Y => report.buttons |= Buttons::Y,
            Button::L => report.buttons |= Buttons::L,
            Button::R => report.buttons |= Buttons::R,
            Button::Zl => report.buttons |= Buttons::ZL,
            Button::Zr => report.buttons |= Buttons::ZR,
            Button::Triggers => report.buttons |= Buttons::L | Buttons::R,
            Button::Plus => report.buttons |= Buttons::PLUS,
            Button::Minus => report.buttons |= Buttons::MINUS,
            Button::Lclick => report.buttons |= Buttons::LCLICK,
            Button::Rclick => report.buttons |= Buttons::RCLICK,
            Button::Home => report.buttons |= Buttons::HOME,
            Button::Capture => report.buttons |= Buttons::CAPTURE,
            Button::Nothing => report.recenter_axes(),
        }
    }
}

/// One timed macro step: a token held for `duration` poll ticks.
///
/// Commands only ever live in read-only `&'static [Command]` tables and are
/// never mutated at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    pub button: Button,
    pub duration: u16,
}

impl Command {
    #[must_use]
    pub const fn new(button: Button, duration: u16) -> Self {
        Self { button, duration }
    }
}
