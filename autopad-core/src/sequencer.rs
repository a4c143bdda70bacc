//! Macro table playback: one command per call, held for its duration.

use crate::report::Report;
use crate::tables::MacroTable;

/// Mutable playback position inside one macro table.
///
/// Holds the step index, the remaining-duration counter for the hold phase,
/// and the last-emitted report so it can be repeated verbatim while a
/// duration elapses. Reset whenever the active table changes.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencerCursor {
    step: usize,
    remaining: u32,
    last: Report,
}

impl SequencerCursor {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: 0,
            remaining: 0,
            last: Report::centered(),
        }
    }

    /// Rewind to a fresh table start.
    pub fn reset(&mut self) {
        self.step = 0;
        self.remaining = 0;
        self.last = Report::centered();
    }

    /// Produce the next report of `table`.
    ///
    /// A command with duration `d` under echo ratio `r` yields the identical
    /// report for exactly `d * r` consecutive calls, counting the call that
    /// reads it; a duration of 0 skips the hold phase entirely. After the
    /// last command has been held to completion the next call emits a
    /// centered report, returns `exhausted = true`, and rewinds to step 0,
    /// so playback loops until the caller switches tables.
    pub fn advance(&mut self, table: &MacroTable) -> (Report, bool) {
        // Hold phase: repeat the last report while its duration elapses.
        if self.remaining > 0 {
            self.remaining -= 1;
            return (self.last, false);
        }

        // End of table: emit one centered report and rewind.
        if self.step >= table.len() {
            self.step = 0;
            self.last = Report::centered();
            return (self.last, true);
        }

        let command = table.commands[self.step];
        self.step += 1;
        self.remaining = (command.duration as u32 * table.echo_ratio).saturating_sub(1);

        let mut report = Report::centered();
        command.button.apply(&mut report);
        self.last = report;
        (report, false)
    }
}

impl Default for SequencerCursor {
    fn default() -> Self {
        Self::new()
    }
}
