use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

pub const FIRST_DAY: u8 = 1;
pub const LAST_DAY: u8 = 3;

/// One scheduled performance. `time` keeps the raw source text and is
/// only reparsed on demand; `title` doubles as the favorites key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub time: String,
    pub title: String,
    pub stage: String,
    pub description: String,
    pub day: u8,
    pub date: String,
}

/// Outcome of mapping a day-name field to a day number, keeping the
/// defaulted case distinguishable from a genuine day-1 row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayResolution {
    pub day: u8,
    pub resolved: bool,
}

/// Distinct stage names observed across all ingested events; iteration
/// order is lexicographic, which is also the display order.
pub type StageSet = BTreeSet<String>;

/// Events partitioned by day number, each day ordered ascending by
/// parsed start minute.
#[derive(Debug, Clone, Default)]
pub struct ScheduleByDay {
    days: BTreeMap<u8, Vec<Event>>,
}

impl ScheduleByDay {
    pub fn new() -> Self {
        let days = (FIRST_DAY..=LAST_DAY).map(|day| (day, Vec::new())).collect();

        Self { days }
    }

    pub fn push(&mut self, event: Event) {
        self.days.entry(event.day).or_default().push(event);
    }

    pub fn day(&self, day: u8) -> &[Event] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn days_mut(&mut self) -> impl Iterator<Item = &mut Vec<Event>> {
        self.days.values_mut()
    }

    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Display grouping of events sharing an identical raw time label.
/// Rebuilt on every render, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeGroup {
    pub time: String,
    pub events: Vec<Event>,
}

/// Selection constraining the displayed events to one stage, all
/// stages, or favorited titles only.
#[derive(Debug, Clone, PartialEq, Eq, Default, strum::Display)]
pub enum StageFilter {
    #[default]
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "favorites")]
    Favorites,
    #[strum(to_string = "{0}")]
    Stage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInfo {
    pub id: u8,
    pub name: &'static str,
    pub date: &'static str,
}

const DAYS: [DayInfo; 3] = [
    DayInfo {
        id: 1,
        name: "Day 1",
        date: "Friday, June 14",
    },
    DayInfo {
        id: 2,
        name: "Day 2",
        date: "Saturday, June 15",
    },
    DayInfo {
        id: 3,
        name: "Day 3",
        date: "Sunday, June 16",
    },
];

pub fn day_info(day: u8) -> &'static DayInfo {
    DAYS.iter().find(|info| info.id == day).unwrap_or(&DAYS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_display_stage_filters_as_their_selection() {
        assert_eq!(StageFilter::All.to_string(), "all");
        assert_eq!(StageFilter::Favorites.to_string(), "favorites");
        assert_eq!(
            StageFilter::Stage("Main Stage".to_string()).to_string(),
            "Main Stage"
        );
    }

    #[test_log::test]
    fn should_fall_back_to_the_first_day_label_for_unknown_days() {
        assert_eq!(day_info(2).name, "Day 2");
        assert_eq!(day_info(9).name, "Day 1");
    }
}
