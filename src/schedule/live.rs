use crate::schedule::model::Event;
use crate::schedule::time::{parse_time_range, RANGE_SEPARATOR};
use chrono::{Local, Timelike};

/// Whether an event is in progress at the given minute of the day.
///
/// Only events whose raw time text holds a range are eligible; a
/// single-instant time is never in progress. Both range ends are
/// inclusive.
pub fn is_in_progress(event: &Event, now_minutes: u32) -> bool {
    if !event.time.contains(RANGE_SEPARATOR) {
        return false;
    }

    parse_time_range(&event.time).contains(now_minutes)
}

/// The subsequence of events in progress at the given minute, in input
/// order. Drives both highlighting and the jump-to-now affordance.
pub fn currently_in_progress(events: &[Event], now_minutes: u32) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| is_in_progress(event, now_minutes))
        .collect()
}

/// Local wall-clock time as minutes since midnight.
pub fn local_now_minutes() -> u32 {
    let now = Local::now();

    now.hour() * 60 + now.minute()
}
