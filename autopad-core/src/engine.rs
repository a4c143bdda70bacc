//! The top-level report engine: selects which source produces each report.

use crate::override_line::OverrideSlot;
use crate::report::Report;
use crate::sequencer::SequencerCursor;
use crate::tables::{self, MacroTable};

/// Engine lifecycle state.
///
/// `Cleanup` and `Done` are only reachable through [`ReportEngine::shutdown`];
/// normal operation stays in `Process` indefinitely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineState {
    Init,
    Sync,
    Process,
    Cleanup,
    Done,
}

/// Which source drives the report while the engine is in `Process`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineMode {
    /// Emit centered reports only.
    Idle,
    /// Replay [`tables::MASH_A`].
    MashA,
    /// Replay [`tables::WATT_FARM`].
    WattFarm,
    /// Replay [`tables::WATT_DATE_FARM`].
    WattDateFarm,
    /// Consume reports injected over the serial line channel.
    LiveOverride,
}

impl EngineMode {
    /// The macro table this mode replays, if it is a sequencer mode.
    #[must_use]
    fn table(self) -> Option<&'static MacroTable> {
        match self {
            EngineMode::MashA => Some(&tables::MASH_A),
            EngineMode::WattFarm => Some(&tables::WATT_FARM),
            EngineMode::WattDateFarm => Some(&tables::WATT_DATE_FARM),
            EngineMode::Idle | EngineMode::LiveOverride => None,
        }
    }
}

/// Pull-based report state machine, driven once per poll tick.
///
/// Owns all mutable runtime state (cursor, override slot, mode) so several
/// independent engines can coexist and tests need no globals. The caller
/// provides the concurrency boundary around [`ReportEngine::submit_override`]
/// when overrides arrive from another execution context.
#[derive(Debug)]
pub struct ReportEngine {
    state: EngineState,
    mode: EngineMode,
    cursor: SequencerCursor,
    slot: OverrideSlot,
    use_sync: bool,
}

impl ReportEngine {
    /// Create an engine in the given mode.
    ///
    /// With `use_sync` set, the first reports replay the registration
    /// preamble before the selected mode takes over.
    #[must_use]
    pub const fn new(mode: EngineMode, use_sync: bool) -> Self {
        Self {
            state: EngineState::Init,
            mode,
            cursor: SequencerCursor::new(),
            slot: OverrideSlot::empty(),
            use_sync,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> EngineMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, EngineState::Done)
    }

    /// Switch the active mode; a change restarts table playback from step 0.
    pub fn set_mode(&mut self, mode: EngineMode) {
        if mode != self.mode {
            self.mode = mode;
            self.cursor.reset();
        }
    }

    /// Install a live override report, replacing any pending one outright.
    pub fn submit_override(&mut self, report: Report) {
        self.slot.replace(report);
    }

    /// External shutdown signal: drains through `Cleanup` into `Done`.
    pub fn shutdown(&mut self) {
        self.state = EngineState::Cleanup;
    }

    /// Produce the report for this poll tick.
    ///
    /// Every transition and in-state action happens once per call; the
    /// engine never blocks and never schedules itself.
    pub fn next_report(&mut self) -> Report {
        let mut report = Report::centered();

        match self.state {
            EngineState::Init => {
                self.cursor.reset();
                self.state = if self.use_sync {
                    EngineState::Sync
                } else {
                    EngineState::Process
                };
            }

            EngineState::Sync => {
                let (sync_report, exhausted) = self.cursor.advance(&tables::SYNC);
                report = sync_report;
                if exhausted {
                    self.cursor.reset();
                    self.state = EngineState::Process;
                }
            }

            EngineState::Process => match self.mode {
                EngineMode::Idle => {}
                EngineMode::LiveOverride => {
                    // Exhausted budget falls back to the centered report.
                    if let Some(pending) = self.slot.consume() {
                        report = pending;
                    }
                }
                mode => {
                    if let Some(table) = mode.table() {
                        let (next, _) = self.cursor.advance(table);
                        report = next;
                    }
                }
            },

            EngineState::Cleanup => {
                self.state = EngineState::Done;
            }

            // Terminal; the caller may watch `is_done` to drive an alert.
            EngineState::Done => {}
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::override_line::parse_line;
    use crate::report::Buttons;

    #[test]
    fn test_init_without_sync_goes_straight_to_process() {
        let mut engine = ReportEngine::new(EngineMode::MashA, false);
        assert_eq!(engine.next_report(), Report::centered());
        assert_eq!(engine.state(), EngineState::Process);
    }

    #[test]
    fn test_sync_preamble_runs_to_completion() {
        let mut engine = ReportEngine::new(EngineMode::Idle, true);
        let _ = engine.next_report();
        assert_eq!(engine.state(), EngineState::Sync);

        let mut saw_triggers = false;
        for _ in 0..2000 {
            let report = engine.next_report();
            if report.buttons.contains(Buttons::L | Buttons::R) {
                saw_triggers = true;
            }
            if engine.state() == EngineState::Process {
                break;
            }
        }
        assert!(saw_triggers, "preamble should press both triggers");
        assert_eq!(engine.state(), EngineState::Process);
    }

    #[test]
    fn test_mash_mode_presses_and_releases() {
        let mut engine = ReportEngine::new(EngineMode::MashA, false);
        let _ = engine.next_report(); // Init tick

        // MASH_A: A held 5 ticks, then 5 centered ticks.
        for _ in 0..5 {
            assert!(engine.next_report().buttons.contains(Buttons::A));
        }
        for _ in 0..5 {
            assert!(engine.next_report().buttons.is_empty());
        }
        // Loop boundary tick, then A again.
        assert_eq!(engine.next_report(), Report::centered());
        assert!(engine.next_report().buttons.contains(Buttons::A));
    }

    #[test]
    fn test_idle_mode_emits_centered_reports() {
        let mut engine = ReportEngine::new(EngineMode::Idle, false);
        for _ in 0..10 {
            assert_eq!(engine.next_report(), Report::centered());
        }
    }

    #[test]
    fn test_override_budget_then_centered_fallback() {
        let mut engine = ReportEngine::new(EngineMode::LiveOverride, false);
        let _ = engine.next_report(); // Init tick

        let injected = parse_line(b"10000000000000 200 50 128 128 3");
        engine.submit_override(injected);

        for _ in 0..5 {
            assert_eq!(engine.next_report(), injected);
        }
        // Budget spent: fall back to centered until a new line arrives.
        assert_eq!(engine.next_report(), Report::centered());

        engine.submit_override(injected);
        assert_eq!(engine.next_report(), injected);
    }

    #[test]
    fn test_new_override_replaces_pending_one() {
        let mut engine = ReportEngine::new(EngineMode::LiveOverride, false);
        let _ = engine.next_report();

        engine.submit_override(parse_line(b"10000000000000"));
        engine.submit_override(parse_line(b"01000000000000"));
        assert_eq!(engine.next_report().buttons, Buttons::B);
    }

    #[test]
    fn test_mode_change_restarts_table() {
        let mut engine = ReportEngine::new(EngineMode::MashA, false);
        let _ = engine.next_report();
        // Advance into the middle of the A hold.
        let _ = engine.next_report();
        let _ = engine.next_report();

        engine.set_mode(EngineMode::WattFarm);
        // Fresh table start: WATT_FARM opens with an A press, not a stale hold.
        assert!(engine.next_report().buttons.contains(Buttons::A));
    }

    #[test]
    fn test_shutdown_drains_through_cleanup_to_done() {
        let mut engine = ReportEngine::new(EngineMode::MashA, false);
        let _ = engine.next_report();
        engine.shutdown();
        assert_eq!(engine.state(), EngineState::Cleanup);

        assert_eq!(engine.next_report(), Report::centered());
        assert_eq!(engine.state(), EngineState::Done);

        // Terminal: centered reports forever.
        assert_eq!(engine.next_report(), Report::centered());
        assert!(engine.is_done());
    }
}
