//! Built-in macro tables.
//!
//! Each table is an ordered, immutable choreography of timed button commands.
//! Durations are in poll ticks before the table's echo ratio is applied.

use crate::command::{Button, Command};

/// A macro table: the command sequence plus the echo ratio it was authored for.
///
/// The echo ratio is an integer multiplier applied to every command's duration
/// while the table is active. The farming tables were authored against a
/// slower assumed repeat cadence than the mash table, so they carry a ratio
/// of 3 to play back at the intended speed.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroTable {
    pub commands: &'static [Command],
    pub echo_ratio: u32,
}

impl MacroTable {
    #[must_use]
    pub const fn new(commands: &'static [Command], echo_ratio: u32) -> Self {
        Self {
            commands,
            echo_ratio,
        }
    }

    /// Number of steps in the table.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Controller-registration preamble.
///
/// Wakes the console with the trigger pair, then confirms with A. Run once
/// before any macro so the host pairs the pad and reaches a known screen.
pub static SYNC: MacroTable = MacroTable::new(
    &[
        Command::new(Button::Nothing, 250),
        Command::new(Button::Triggers, 5),
        Command::new(Button::Nothing, 150),
        Command::new(Button::Triggers, 5),
        Command::new(Button::Nothing, 150),
        Command::new(Button::A, 5),
        Command::new(Button::Nothing, 250),
    ],
    1,
);

/// Mash the A button forever.
pub static MASH_A: MacroTable = MacroTable::new(
    &[
        Command::new(Button::A, 5),
        Command::new(Button::Nothing, 5),
    ],
    1,
);

/// Farming macro A: collect watts from a raid den and re-roll it.
pub static WATT_FARM: MacroTable = MacroTable::new(
    &[
        Command::new(Button::A, 15),
        Command::new(Button::Nothing, 40),
        Command::new(Button::A, 4),
        Command::new(Button::Nothing, 60),
        Command::new(Button::B, 4),
        Command::new(Button::Nothing, 30),
        Command::new(Button::B, 4),
        Command::new(Button::Nothing, 30),
        Command::new(Button::A, 4),
        Command::new(Button::Nothing, 100),
    ],
    3,
);

/// Farming macro B: watt collection combined with the ID lottery loop.
///
/// Longer choreography that walks the menu cursor, so it leans on the
/// directional tokens as well as face buttons.
pub static WATT_DATE_FARM: MacroTable = MacroTable::new(
    &[
        Command::new(Button::A, 15),
        Command::new(Button::Nothing, 40),
        Command::new(Button::X, 4),
        Command::new(Button::Nothing, 30),
        Command::new(Button::UpRight, 10),
        Command::new(Button::Nothing, 10),
        Command::new(Button::A, 4),
        Command::new(Button::Nothing, 60),
        Command::new(Button::Down, 8),
        Command::new(Button::Nothing, 10),
        Command::new(Button::A, 4),
        Command::new(Button::Nothing, 40),
        Command::new(Button::B, 4),
        Command::new(Button::Nothing, 60),
        Command::new(Button::B, 4),
        Command::new(Button::Nothing, 100),
    ],
    3,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_nonempty() {
        assert!(!SYNC.is_empty());
        assert!(!MASH_A.is_empty());
        assert!(!WATT_FARM.is_empty());
        assert!(!WATT_DATE_FARM.is_empty());
    }

    #[test]
    fn test_farming_tables_use_echo_ratio() {
        assert_eq!(SYNC.echo_ratio, 1);
        assert_eq!(MASH_A.echo_ratio, 1);
        assert_eq!(WATT_FARM.echo_ratio, 3);
        assert_eq!(WATT_DATE_FARM.echo_ratio, 3);
    }
}
