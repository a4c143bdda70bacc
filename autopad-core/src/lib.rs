//! Platform-agnostic Switch controller report engine.
//!
//! This crate holds everything needed to decide, once per USB poll, what the
//! next controller input report contains, without any platform-specific
//! dependencies. It can be used both in embedded `no_std` environments and
//! on host for testing.
//!
//! # Overview
//!
//! - [`report`]: Report data model ([`Report`], [`Buttons`], [`Hat`])
//! - [`command`]: Macro command tokens ([`Button`], [`Command`])
//! - [`tables`]: Built-in macro tables ([`MacroTable`])
//! - [`sequencer`]: Timed table playback ([`SequencerCursor`])
//! - [`override_line`]: Serial override protocol ([`LineAssembler`], [`OverrideSlot`])
//! - [`engine`]: Top-level state machine ([`ReportEngine`])
//!
//! # Example
//!
//! ```rust
//! use autopad_core::{EngineMode, Report, ReportEngine};
//!
//! // An engine that mashes A, skipping the registration preamble.
//! let mut engine = ReportEngine::new(EngineMode::MashA, false);
//! let first = engine.next_report(); // Init tick is always centered
//! assert_eq!(first, Report::centered());
//! assert!(!engine.next_report().buttons.is_empty());
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod command;
pub mod engine;
pub mod override_line;
pub mod report;
pub mod sequencer;
pub mod tables;

// Re-export main types at crate root
pub use command::{Button, Command};
pub use engine::{EngineMode, EngineState, ReportEngine};
pub use override_line::{parse_line, LineAssembler, OverrideSlot, MAX_LINE_LENGTH, OVERRIDE_BUDGET};
pub use report::{Buttons, Hat, Report, STICK_CENTER, STICK_MAX, STICK_MIN};
pub use sequencer::SequencerCursor;
pub use tables::MacroTable;
