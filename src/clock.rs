use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

// @module: Time-of-day arithmetic anchored to a single calendar day

/// Format used for timestamps on the in-memory side (dot before milliseconds)
pub const CLOCK_FORMAT: &str = "%H:%M:%S%.3f";

/// The calendar day every run anchors its timestamps to.
///
/// Deliberately independent of the machine's current date so that two runs of
/// the same file always produce the same output.
pub fn reference_date() -> NaiveDate {
    NaiveDate::default()
}

/// Rebuild a time of day on the same calendar day as `reference`.
///
/// Callers hand over fields that are already range-checked. Fields that still
/// cannot form a valid time of day collapse to day-zero.
pub fn set_clock(reference: NaiveDateTime, hour: u32, minute: u32, second: u32, millisecond: u32) -> NaiveDateTime {
    let date = reference.date();
    date.and_hms_milli_opt(hour, minute, second, millisecond)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

/// 00:00:00.000 on the reference day
pub fn day_zero(reference: NaiveDateTime) -> NaiveDateTime {
    set_clock(reference, 0, 0, 0, 0)
}

/// Render a time of day as `HH:MM:SS.mmm`
pub fn format_clock(time: NaiveDateTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}
