use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use chrono::NaiveDateTime;
use log::{warn, debug};

use crate::clock;
use crate::context::RunContext;

// @module: SRT caption parsing and rendering

// @const: Caption number line
static INDEX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+$").unwrap()
});

// @const: Timing line, either separator accepted before the milliseconds
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}:[0-9]{2}:[0-9,.]+)\s*-->\s*([0-9]{2}:[0-9]{2}:[0-9,.]+)$").unwrap()
});

// @const: Normalized HH:MM:SS.mmm timestamp
static CLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{3})$").unwrap()
});

const BYTE_ORDER_MARK: char = '\u{feff}';

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    // @field: Caption number, kept verbatim
    pub index: String,

    // @field: Start time on the run's reference day
    pub start: NaiveDateTime,

    // @field: End time on the run's reference day
    pub end: NaiveDateTime,

    // @field: Caption body, may span several lines
    pub text: String,
}

impl Caption {
    pub fn new(index: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime, text: impl Into<String>) -> Self {
        Caption {
            index: index.into(),
            start,
            end,
            text: text.into(),
        }
    }

    // @creates: Empty caption timed at day-zero
    fn open(index: &str, ctx: &RunContext) -> Self {
        Self::new(index, ctx.day_zero(), ctx.day_zero(), String::new())
    }

    /// Start time as `HH:MM:SS.mmm`
    pub fn format_start_time(&self) -> String {
        clock::format_clock(self.start)
    }

    /// End time as `HH:MM:SS.mmm`
    pub fn format_end_time(&self) -> String {
        clock::format_clock(self.end)
    }

    /// Render this caption as one SRT block, trailing blank line included
    pub fn render_block(&self, uses_comma: bool) -> String {
        format!(
            "{}\n{} --> {}\n{}\n\n",
            self.index,
            restore_separator(self.format_start_time(), uses_comma),
            restore_separator(self.format_end_time(), uses_comma),
            self.text
        )
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render_block(false))
    }
}

// Only the dot introducing the milliseconds is ever present
fn restore_separator(stamp: String, uses_comma: bool) -> String {
    if uses_comma {
        stamp.replacen('.', ",", 1)
    } else {
        stamp
    }
}

/// What a single cleaned-up input line is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Index,
    Timing { start: &'a str, end: &'a str },
    Blank,
    Text,
}

impl<'a> LineKind<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return LineKind::Blank;
        }
        if INDEX_REGEX.is_match(line) {
            return LineKind::Index;
        }
        if let Some(caps) = TIMING_REGEX.captures(line) {
            if let (Some(start), Some(end)) = (caps.get(1), caps.get(2)) {
                return LineKind::Timing { start: start.as_str(), end: end.as_str() };
            }
        }
        LineKind::Text
    }
}

/// Parser position within the current caption block
#[derive(Debug)]
enum ParserState {
    /// Between blocks, waiting for a caption number
    Idle,
    /// Caption number seen, timing line expected next
    InTiming(Caption),
    /// Timing (or body text) seen, accumulating body lines
    InText(Caption),
}

impl ParserState {
    // Lines that arrive outside a block still open an (unnumbered) caption
    fn into_caption(self, ctx: &RunContext) -> Caption {
        match self {
            ParserState::Idle => Caption::open("", ctx),
            ParserState::InTiming(caption) | ParserState::InText(caption) => caption,
        }
    }

    fn into_open_caption(self) -> Option<Caption> {
        match self {
            ParserState::Idle => None,
            ParserState::InTiming(caption) | ParserState::InText(caption) => Some(caption),
        }
    }
}

/// Ordered captions of one subtitle file plus the file-wide separator flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionSequence {
    /// Completed captions in file order
    pub captions: Vec<Caption>,

    /// Whether any timing line used a comma before the milliseconds
    pub uses_comma: bool,

    /// Caption still open when the input ended without a blank line.
    /// It is never rendered.
    pub dangling: Option<Caption>,
}

impl CaptionSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// Parse SRT content into captions.
    ///
    /// Never fails: lines that are neither a caption number, a timing line nor
    /// blank become body text of the current caption. A caption that is not
    /// closed by a blank line before the end of input ends up in `dangling`
    /// and is left out of the output.
    pub fn parse_srt_string(content: &str, ctx: &RunContext) -> Self {
        let mut sequence = CaptionSequence::new();
        let mut state = ParserState::Idle;

        for raw in content.lines() {
            let line = raw.trim().trim_start_matches(BYTE_ORDER_MARK).trim();

            state = match (state, LineKind::classify(line)) {
                (ParserState::Idle, LineKind::Blank) => ParserState::Idle,
                (ParserState::InTiming(mut caption) | ParserState::InText(mut caption), LineKind::Blank) => {
                    caption.text = caption.text.trim().to_string();
                    sequence.captions.push(caption);
                    ParserState::Idle
                }
                (previous, LineKind::Index) => {
                    if let Some(discarded) = previous.into_open_caption() {
                        debug!("Caption '{}' replaced by '{}' before a blank line", discarded.index, line);
                    }
                    ParserState::InTiming(Caption::open(line, ctx))
                }
                (previous, LineKind::Timing { start, end }) => {
                    let mut caption = previous.into_caption(ctx);
                    let (start, end) = sequence.resolve_timing(start, end, ctx);
                    caption.start = start;
                    caption.end = end;
                    ParserState::InText(caption)
                }
                (previous, LineKind::Text) => {
                    let mut caption = previous.into_caption(ctx);
                    caption.text.push_str(line);
                    caption.text.push('\n');
                    ParserState::InText(caption)
                }
            };
        }

        sequence.dangling = state.into_open_caption();
        if let Some(caption) = &sequence.dangling {
            warn!("Caption '{}' is not followed by a blank line and will be dropped", caption.index);
        }

        debug!("Parsed {} captions (comma separator: {})", sequence.len(), sequence.uses_comma);
        sequence
    }

    // @normalizes: Comma separators to dots, recording that the file used them
    fn resolve_timing(&mut self, start: &str, end: &str, ctx: &RunContext) -> (NaiveDateTime, NaiveDateTime) {
        if start.contains(',') || end.contains(',') {
            self.uses_comma = true;
            let start = start.replacen(',', ".", 1);
            let end = end.replacen(',', ".", 1);
            (Self::parse_clock(&start, ctx), Self::parse_clock(&end, ctx))
        } else {
            (Self::parse_clock(start, ctx), Self::parse_clock(end, ctx))
        }
    }

    fn parse_clock(stamp: &str, ctx: &RunContext) -> NaiveDateTime {
        match Self::clock_fields(stamp) {
            Some((hour, minute, second, millis)) => ctx.at(hour, minute, second, millis),
            None => {
                debug!("Unreadable timestamp '{}', using 00:00:00.000", stamp);
                ctx.day_zero()
            }
        }
    }

    /// Split a normalized `HH:MM:SS.mmm` timestamp into its fields
    pub fn clock_fields(stamp: &str) -> Option<(u32, u32, u32, u32)> {
        let caps = CLOCK_REGEX.captures(stamp)?;
        let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

        let (hours, minutes, seconds, millis) = (field(1)?, field(2)?, field(3)?, field(4)?);
        if hours >= 24 || minutes >= 60 || seconds >= 60 {
            return None;
        }

        Some((hours, minutes, seconds, millis))
    }

    /// Render every caption back into SRT text
    pub fn render_srt(&self) -> String {
        self.captions
            .iter()
            .map(|caption| caption.render_block(self.uses_comma))
            .collect()
    }
}
