use std::fmt;
use std::str::FromStr;
use regex::{Captures, Regex};
use once_cell::sync::Lazy;
use chrono::{NaiveDateTime, TimeDelta};
use log::debug;

use crate::context::RunContext;
use crate::errors::ShiftError;
use crate::subtitle_processor::CaptionSequence;

// @module: Shift expression parsing and application

/// One accepted shape of a shift expression
struct ShiftLayout {
    // @field: Human-readable shape, used in debug output
    name: &'static str,
    // @field: Anchored pattern with optional h/m/s/f groups
    regex: Regex,
}

impl ShiftLayout {
    fn new(name: &'static str, pattern: &str) -> Self {
        ShiftLayout {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    fn try_parse(&self, body: &str) -> Option<(u32, u32, u32, u32)> {
        let caps = self.regex.captures(body)?;

        let hours = Self::field(&caps, "h")?;
        let minutes = Self::field(&caps, "m")?;
        let seconds = Self::field(&caps, "s")?;
        let millis = caps.name("f").map_or(Some(0), |f| Self::fraction_to_millis(f.as_str()))?;

        if hours >= 24 || minutes >= 60 || seconds >= 60 {
            return None;
        }

        Some((hours, minutes, seconds, millis))
    }

    // Absent groups count as zero
    fn field(caps: &Captures, name: &str) -> Option<u32> {
        match caps.name(name) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    }

    // "5" -> 500, "25" -> 250, "1234" -> 123
    fn fraction_to_millis(digits: &str) -> Option<u32> {
        let head: String = digits.chars().take(3).collect();
        format!("{:0<3}", head).parse().ok()
    }
}

// @const: Layouts tried in order, shortest first; first match wins
static SHIFT_LAYOUTS: Lazy<Vec<ShiftLayout>> = Lazy::new(|| {
    vec![
        ShiftLayout::new("S", r"^(?P<s>[0-9]{1,2})$"),
        ShiftLayout::new("M:S", r"^(?P<m>[0-9]{1,2}):(?P<s>[0-9]{1,2})$"),
        ShiftLayout::new("H:M:S", r"^(?P<h>[0-9]{1,2}):(?P<m>[0-9]{1,2}):(?P<s>[0-9]{1,2})$"),
        ShiftLayout::new("S.f", r"^(?P<s>[0-9]{1,2})[.,](?P<f>[0-9]{1,9})$"),
        ShiftLayout::new("M:S.f", r"^(?P<m>[0-9]{1,2}):(?P<s>[0-9]{1,2})[.,](?P<f>[0-9]{1,9})$"),
        ShiftLayout::new("H:M:S.f", r"^(?P<h>[0-9]{1,2}):(?P<m>[0-9]{1,2}):(?P<s>[0-9]{1,2})[.,](?P<f>[0-9]{1,9})$"),
    ]
});

/// Signed amount every caption is moved by.
///
/// A positive shift delays the subtitles, a negative one advances them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftDuration {
    pub negative: bool,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl ShiftDuration {
    /// Parse a shift expression such as `10`, `1:10`, `-1:10.5` or `+0:0:5.250`
    pub fn parse(expression: &str) -> Result<Self, ShiftError> {
        let trimmed = expression.trim();
        let (negative, body) = if let Some(rest) = trimmed.strip_prefix('-') {
            (true, rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (false, rest.trim())
        } else {
            (false, trimmed)
        };

        for layout in SHIFT_LAYOUTS.iter() {
            if let Some((hours, minutes, seconds, milliseconds)) = layout.try_parse(body) {
                debug!("Shift expression '{}' matched layout {}", expression, layout.name);
                return Ok(ShiftDuration {
                    negative,
                    hours,
                    minutes,
                    seconds,
                    milliseconds,
                });
            }
        }

        Err(ShiftError::Unrecognized(expression.to_string()))
    }

    /// Signed length in milliseconds
    pub fn total_milliseconds(&self) -> i64 {
        let magnitude = i64::from(self.hours) * 3_600_000
            + i64::from(self.minutes) * 60_000
            + i64::from(self.seconds) * 1_000
            + i64::from(self.milliseconds);

        if self.negative { -magnitude } else { magnitude }
    }

    pub fn as_duration(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.total_milliseconds())
    }

    /// Same magnitude, opposite direction
    pub fn negated(self) -> Self {
        ShiftDuration {
            negative: !self.negative,
            ..self
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_milliseconds() == 0
    }
}

impl FromStr for ShiftDuration {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ShiftDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{:02}:{:02}.{:03}",
            if self.negative { '-' } else { '+' },
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds
        )
    }
}

/// Move every caption by `shift`, clamping start and end independently at day-zero.
///
/// Returns how many timestamps were clamped.
pub fn apply_shift(sequence: &mut CaptionSequence, shift: &ShiftDuration, ctx: &RunContext) -> usize {
    let delta = shift.as_duration();
    let floor = ctx.day_zero();
    let mut clamped = 0;

    for caption in sequence.captions.iter_mut() {
        let (start, start_clamped) = shift_time(caption.start, delta, floor);
        let (end, end_clamped) = shift_time(caption.end, delta, floor);

        caption.start = start;
        caption.end = end;
        clamped += usize::from(start_clamped) + usize::from(end_clamped);
    }

    if clamped > 0 {
        debug!("{} timestamps clamped to 00:00:00.000", clamped);
    }

    clamped
}

fn shift_time(time: NaiveDateTime, delta: TimeDelta, floor: NaiveDateTime) -> (NaiveDateTime, bool) {
    match time.checked_add_signed(delta) {
        Some(shifted) if shifted >= floor => (shifted, false),
        _ => (floor, true),
    }
}
