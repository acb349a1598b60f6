use crate::schedule::csv::Row;
use crate::schedule::model::{DayResolution, Event, ScheduleByDay, StageSet, FIRST_DAY, LAST_DAY};
use crate::schedule::time::parse_clock_time;
use tracing::{instrument, warn};

/// Maps a day-name field to a day number. Unrecognized or absent
/// values default to day 1 instead of rejecting the row; the outcome
/// records which case applied.
pub fn resolve_day(name: &str) -> DayResolution {
    let day = match name.to_lowercase().as_str() {
        "friday" | "day 1" | "1" => Some(1),
        "saturday" | "day 2" | "2" => Some(2),
        "sunday" | "day 3" | "3" => Some(3),
        _ => None,
    };

    match day {
        Some(day) => DayResolution {
            day,
            resolved: true,
        },
        None => DayResolution {
            day: FIRST_DAY,
            resolved: false,
        },
    }
}

/// Builds the per-day schedule and the stage set from ingested rows.
///
/// Every row yields an Event, even with empty fields. Each day ends up
/// stably sorted by parsed start minute, so same-time events keep
/// their input order.
#[instrument(skip(rows), fields(row_count = rows.len()))]
pub fn normalize(rows: &[Row]) -> (ScheduleByDay, StageSet) {
    let mut schedule = ScheduleByDay::new();
    let mut stages = StageSet::new();

    for row in rows {
        let day_name = field(row, "day");
        let resolution = resolve_day(&day_name);

        if !resolution.resolved {
            warn!(
                "Unrecognized day '{}', defaulting to day {}",
                day_name, resolution.day
            );
        }

        let event = Event {
            time: field(row, "time"),
            title: field(row, "artist"),
            stage: field(row, "stage"),
            description: field(row, "description"),
            day: resolution.day,
            date: field(row, "date"),
        };

        if (FIRST_DAY..=LAST_DAY).contains(&event.day) {
            if !event.stage.is_empty() {
                stages.insert(event.stage.clone());
            }

            schedule.push(event);
        }
    }

    for events in schedule.days_mut() {
        events.sort_by_key(|event| parse_clock_time(&event.time));
    }

    (schedule, stages)
}

// Upstream header normalization may not cover every producer, so both
// the lower-case and Capitalized spellings are accepted.
fn field(row: &Row, name: &str) -> String {
    row.get(name)
        .or_else(|| row.get(&capitalize(name)))
        .cloned()
        .unwrap_or_default()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(day: &str, time: &str, artist: &str, stage: &str) -> Row {
        HashMap::from([
            ("day".to_string(), day.to_string()),
            ("time".to_string(), time.to_string()),
            ("artist".to_string(), artist.to_string()),
            ("stage".to_string(), stage.to_string()),
        ])
    }

    #[test_log::test]
    fn should_bucket_rows_by_resolved_day() {
        let rows = vec![
            row("Friday", "6:00 PM", "A", "Main"),
            row("Saturday", "5:00 PM", "B", "Main"),
        ];

        let (schedule, stages) = normalize(&rows);

        assert_eq!(schedule.day(1).len(), 1);
        assert_eq!(schedule.day(1)[0].title, "A");
        assert_eq!(schedule.day(2).len(), 1);
        assert_eq!(schedule.day(2)[0].title, "B");
        assert_eq!(stages.len(), 1);
    }

    #[test_log::test]
    fn should_default_unrecognized_days_to_day_one() {
        let rows = vec![row("Monday", "6:00 PM", "A", "Main")];

        let (schedule, _) = normalize(&rows);

        assert_eq!(schedule.day(1).len(), 1);
    }

    #[test_log::test]
    fn should_report_whether_a_day_was_resolved_or_defaulted() {
        assert_eq!(
            resolve_day("SATURDAY"),
            DayResolution {
                day: 2,
                resolved: true
            }
        );
        assert_eq!(
            resolve_day("day 3"),
            DayResolution {
                day: 3,
                resolved: true
            }
        );
        assert_eq!(
            resolve_day("Monday"),
            DayResolution {
                day: 1,
                resolved: false
            }
        );
        assert_eq!(
            resolve_day(""),
            DayResolution {
                day: 1,
                resolved: false
            }
        );
    }

    #[test_log::test]
    fn should_sort_each_day_by_start_minute() {
        let rows = vec![
            row("Friday", "8:00 PM", "Late", "Main"),
            row("Friday", "6:00 PM", "Early", "Main"),
            row("Friday", "7:00 PM - 7:45 PM", "Middle", "Main"),
        ];

        let (schedule, _) = normalize(&rows);
        let titles: Vec<&str> = schedule
            .day(1)
            .iter()
            .map(|event| event.title.as_str())
            .collect();

        assert_eq!(titles, vec!["Early", "Middle", "Late"]);
    }

    #[test_log::test]
    fn should_keep_input_order_for_equal_start_times() {
        let rows = vec![
            row("Friday", "6:30 PM", "First", "Main"),
            row("Friday", "18:30", "Second", "Garden"),
            row("Friday", "6:30 PM", "Third", "Tent"),
        ];

        let (schedule, _) = normalize(&rows);
        let titles: Vec<&str> = schedule
            .day(1)
            .iter()
            .map(|event| event.title.as_str())
            .collect();

        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test_log::test]
    fn should_accept_capitalized_header_variants() {
        let rows = vec![HashMap::from([
            ("Day".to_string(), "Friday".to_string()),
            ("Artist".to_string(), "A".to_string()),
            ("Time".to_string(), "6:00 PM".to_string()),
            ("Stage".to_string(), "Main".to_string()),
        ])];

        let (schedule, _) = normalize(&rows);

        assert_eq!(schedule.day(1)[0].title, "A");
    }

    #[test_log::test]
    fn should_keep_rows_with_missing_fields_as_blank_events() {
        let rows = vec![HashMap::from([(
            "day".to_string(),
            "Friday".to_string(),
        )])];

        let (schedule, stages) = normalize(&rows);

        assert_eq!(schedule.day(1).len(), 1);
        assert_eq!(schedule.day(1)[0].title, "");
        assert!(stages.is_empty());
    }
}
