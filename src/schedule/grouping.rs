use crate::favorites::store::FavoritesStore;
use crate::schedule::model::{Event, StageFilter, TimeGroup};

/// Partitions an already-sorted, already-filtered day sequence into
/// groups keyed by exact equality of the raw time string.
///
/// Grouping works on display text, not parsed minutes: "7:00pm" and
/// "19:00" form separate groups even though they denote the same
/// instant. Group order is the first appearance of each distinct
/// label; events inside a group keep their input order.
pub fn group_by_time(events: &[Event]) -> Vec<TimeGroup> {
    let mut groups: Vec<TimeGroup> = Vec::new();

    for event in events {
        match groups.iter_mut().find(|group| group.time == event.time) {
            Some(group) => group.events.push(event.clone()),
            None => groups.push(TimeGroup {
                time: event.time.clone(),
                events: vec![event.clone()],
            }),
        }
    }

    groups
}

/// Applies the active stage/favorites selection to a day's events.
pub fn apply_filter(
    events: &[Event],
    filter: &StageFilter,
    favorites: &FavoritesStore,
) -> Vec<Event> {
    events
        .iter()
        .filter(|event| match filter {
            StageFilter::All => true,
            StageFilter::Favorites => favorites.is_favorite(&event.title),
            StageFilter::Stage(stage) => event.stage == *stage,
        })
        .cloned()
        .collect()
}
