use lazy_static::lazy_static;
use regex::Regex;

/// Literal separator between the start and end of a time range,
/// e.g. "7:00pm - 8:00pm".
pub const RANGE_SEPARATOR: &str = " - ";

lazy_static! {
    static ref TWELVE_HOUR: Regex = Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(am|pm)$").unwrap();
    static ref TWENTY_FOUR_HOUR: Regex = Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap();
    static ref SPACED_PERIOD: Regex = Regex::new(r"^(\d{1,2}):(\d{2}) (AM|PM)$").unwrap();
}

/// A start/end pair in minutes since midnight. A single clock time is
/// the degenerate range where `start == end`.
///
/// Values are not date-aware: a range written as "11:30pm - 12:30am"
/// ends up with `end < start` and will never contain a minute after
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
}

impl TimeRange {
    pub fn instant(minute: u32) -> Self {
        Self {
            start: minute,
            end: minute,
        }
    }

    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute <= self.end
    }
}

/// Parses any accepted time text into a [`TimeRange`].
///
/// Accepted forms, in precedence order: a `" - "`-joined range of two
/// clock times, a 12-hour time with a case-insensitive am/pm suffix
/// ("7:00pm", "12:30 AM"), a bare 24-hour "H:MM", and the legacy
/// "H:MM AM"/"H:MM PM" spelling. Anything else resolves to minute 0
/// rather than an error.
pub fn parse_time(text: &str) -> TimeRange {
    let parts: Vec<&str> = text.split(RANGE_SEPARATOR).collect();

    if parts.len() >= 2 {
        TimeRange {
            start: parse_single(parts[0]),
            end: parse_single(parts[1]),
        }
    } else {
        TimeRange::instant(parse_single(text))
    }
}

/// Parses a single clock time into minutes since midnight. For range
/// text only the part before the separator is considered.
pub fn parse_clock_time(text: &str) -> u32 {
    let single = text.split(RANGE_SEPARATOR).next().unwrap_or(text);

    parse_single(single)
}

pub fn parse_time_range(text: &str) -> TimeRange {
    parse_time(text)
}

fn parse_single(text: &str) -> u32 {
    if let Some(caps) = TWELVE_HOUR.captures(text) {
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps[2].parse().unwrap_or(0);

        return to_24_hour(hour, caps[3].eq_ignore_ascii_case("pm")) * 60 + minute;
    }

    if let Some(caps) = TWENTY_FOUR_HOUR.captures(text) {
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps[2].parse().unwrap_or(0);

        return hour * 60 + minute;
    }

    if let Some(caps) = SPACED_PERIOD.captures(text) {
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps[2].parse().unwrap_or(0);

        return to_24_hour(hour, &caps[3] == "PM") * 60 + minute;
    }

    0
}

fn to_24_hour(hour: u32, pm: bool) -> u32 {
    match (pm, hour) {
        (true, 12) => 12,
        (true, hour) => hour + 12,
        (false, 12) => 0,
        (false, hour) => hour,
    }
}
