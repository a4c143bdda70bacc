//! Live override channel: line assembly, parsing, and the one-shot slot.
//!
//! Line grammar (ASCII, space-separated, carriage-return terminated):
//!
//! ```text
//! <flags> <LX> <LY> <RX> <RY> <HAT>\r
//! ```
//!
//! `<flags>` is 14 positional characters, `'1'` meaning pressed, in the order
//! A B X Y L R ZL ZR MINUS PLUS LCLICK RCLICK HOME CAPTURE. The numeric
//! fields are unsigned bytes; HAT is 0-7 clockwise from top, 8 = centered.
//!
//! Parsing is deliberately best-effort: a malformed numeric field keeps its
//! centered default but still consumes its position, and a line is never
//! rejected outright. This mirrors the permissive contract of the serial
//! remote-control protocol rather than a strict parser.

use heapless::Vec;

use crate::report::{Buttons, Hat, Report};

/// Maximum line length; bytes beyond this are silently dropped.
pub const MAX_LINE_LENGTH: usize = 32;

/// Number of poll ticks a parsed override report stays valid.
pub const OVERRIDE_BUDGET: u8 = 5;

/// Flag characters in their positional order within the `<flags>` token.
const FLAG_ORDER: [Buttons; 14] = [
    Buttons::A,
    Buttons::B,
    Buttons::X,
    Buttons::Y,
    Buttons::L,
    Buttons::R,
    Buttons::ZL,
    Buttons::ZR,
    Buttons::MINUS,
    Buttons::PLUS,
    Buttons::LCLICK,
    Buttons::RCLICK,
    Buttons::HOME,
    Buttons::CAPTURE,
];

/// Parse one completed override line into a report.
///
/// Always succeeds; missing or malformed fields keep the centered defaults.
#[must_use]
pub fn parse_line(line: &[u8]) -> Report {
    let mut report = Report::centered();
    let mut fields = line.split(|&b| b == b' ').filter(|f| !f.is_empty());

    if let Some(flags) = fields.next() {
        for (i, &flag) in FLAG_ORDER.iter().enumerate() {
            if flags.get(i) == Some(&b'1') {
                report.buttons |= flag;
            }
        }
    }

    for axis in [&mut report.lx, &mut report.ly, &mut report.rx, &mut report.ry] {
        if let Some(value) = fields.next().and_then(parse_u8) {
            *axis = value;
        }
    }

    if let Some(value) = fields.next().and_then(parse_u8) {
        report.hat = Hat::from_raw(value);
    }

    report
}

/// Permissive unsigned byte parse; `None` on any non-digit or overflow.
fn parse_u8(field: &[u8]) -> Option<u8> {
    if field.is_empty() {
        return None;
    }
    let mut value: u16 = 0;
    for &b in field {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + (b - b'0') as u16;
        if value > u8::MAX as u16 {
            return None;
        }
    }
    Some(value as u8)
}

/// Assembles override lines one byte at a time.
///
/// Carriage return terminates the line and triggers a parse; line feeds are
/// ignored; anything else is appended to the fixed-size buffer, with excess
/// bytes silently dropped.
#[derive(Debug, Default)]
pub struct LineAssembler {
    buffer: Vec<u8, MAX_LINE_LENGTH>,
}

impl LineAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Feed one received byte; returns a parsed report on line completion.
    pub fn push(&mut self, byte: u8) -> Option<Report> {
        match byte {
            b'\r' => {
                let report = parse_line(&self.buffer);
                self.buffer.clear();
                Some(report)
            }
            b'\n' => None,
            _ => {
                let _ = self.buffer.push(byte);
                None
            }
        }
    }
}

/// The most recently received override report and its remaining validity.
///
/// Replaced outright by each completed line; once the budget is spent,
/// [`OverrideSlot::consume`] returns `None` until a new line arrives. The
/// slot does not re-arm on its own.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverrideSlot {
    report: Report,
    remaining: u8,
}

impl OverrideSlot {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            report: Report::centered(),
            remaining: 0,
        }
    }

    /// Install a new override report with a fresh consumption budget.
    pub fn replace(&mut self, report: Report) {
        self.report = report;
        self.remaining = OVERRIDE_BUDGET;
    }

    /// Take one tick's worth of the override, if any budget remains.
    pub fn consume(&mut self) -> Option<Report> {
        if self.remaining > 0 {
            self.remaining -= 1;
            Some(self.report)
        } else {
            None
        }
    }
}

impl Default for OverrideSlot {
    fn default() -> Self {
        Self::empty()
    }
}
