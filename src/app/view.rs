use crate::schedule::live::local_now_minutes;
use crate::schedule::model::Event;
use serde::Serialize;

/// Wall-clock time source. The controller never reads the clock
/// itself; injecting it keeps relevance checks testable with a fixed
/// "now".
pub trait Clock {
    /// Minutes since midnight, local time.
    fn now_minutes(&self) -> u32;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_minutes(&self) -> u32 {
        local_now_minutes()
    }
}

/// A frozen clock, used for dry runs and tests.
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn now_minutes(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Rendering/notification surface. The core hands it structured state
/// and never formats any UI itself.
pub trait Renderer {
    fn render(&self, view: &DayView);
    fn notify(&self, message: &str, level: NoticeLevel);
}

/// One event decorated with its per-render display flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    pub event: Event,
    pub now_playing: bool,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeGroupView {
    pub time: String,
    pub cards: Vec<EventCard>,
}

/// Everything the renderer needs for the selected day: the filtered
/// time groups, the selectable stages, and the relevance flags.
/// Rebuilt from scratch on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub day: u8,
    pub day_name: String,
    pub day_date: String,
    pub filter: String,
    pub stages: Vec<String>,
    pub groups: Vec<TimeGroupView>,
}

impl DayView {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn now_playing_titles(&self) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|group| &group.cards)
            .filter(|card| card.now_playing)
            .map(|card| card.event.title.as_str())
            .collect()
    }

    /// The card a jump-to-now affordance should target, if any event
    /// is currently in progress.
    pub fn first_now_playing(&self) -> Option<&EventCard> {
        self.groups
            .iter()
            .flat_map(|group| &group.cards)
            .find(|card| card.now_playing)
    }
}
