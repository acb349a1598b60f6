use crate::schedule::model::{Event, ScheduleByDay};

struct SampleEvent {
    day: u8,
    time: &'static str,
    title: &'static str,
    stage: &'static str,
    description: &'static str,
}

const SAMPLE_EVENTS: [SampleEvent; 15] = [
    SampleEvent {
        day: 1,
        time: "6:00 PM",
        title: "Opening Ceremony",
        stage: "Main Stage",
        description: "Welcome to Riot Festival 2024!",
    },
    SampleEvent {
        day: 1,
        time: "6:30 PM",
        title: "The Electric Storm",
        stage: "Main Stage",
        description: "High-energy rock performance",
    },
    SampleEvent {
        day: 1,
        time: "6:30 PM",
        title: "Acoustic Dreams",
        stage: "Garden Stage",
        description: "Intimate acoustic set",
    },
    SampleEvent {
        day: 1,
        time: "7:30 PM",
        title: "Neon Nights",
        stage: "Electronic Tent",
        description: "Electronic dance music showcase",
    },
    SampleEvent {
        day: 1,
        time: "8:00 PM",
        title: "Thunder Road",
        stage: "Main Stage",
        description: "Classic rock revival",
    },
    SampleEvent {
        day: 1,
        time: "9:00 PM",
        title: "Midnight Express",
        stage: "Main Stage",
        description: "Headlining performance",
    },
    SampleEvent {
        day: 2,
        time: "5:00 PM",
        title: "Sunset Sessions",
        stage: "Garden Stage",
        description: "Chill vibes and acoustic melodies",
    },
    SampleEvent {
        day: 2,
        time: "6:00 PM",
        title: "Digital Revolution",
        stage: "Electronic Tent",
        description: "Cutting-edge electronic music",
    },
    SampleEvent {
        day: 2,
        time: "6:30 PM",
        title: "Rock Legends",
        stage: "Main Stage",
        description: "Tribute to rock greats",
    },
    SampleEvent {
        day: 2,
        time: "7:30 PM",
        title: "Jazz Fusion",
        stage: "Garden Stage",
        description: "Modern jazz with electronic elements",
    },
    SampleEvent {
        day: 2,
        time: "8:30 PM",
        title: "The Final Countdown",
        stage: "Main Stage",
        description: "Epic closing performance",
    },
    SampleEvent {
        day: 3,
        time: "4:00 PM",
        title: "Sunday Brunch Beats",
        stage: "Garden Stage",
        description: "Relaxed Sunday afternoon vibes",
    },
    SampleEvent {
        day: 3,
        time: "5:00 PM",
        title: "Indie Showcase",
        stage: "Main Stage",
        description: "Up-and-coming indie artists",
    },
    SampleEvent {
        day: 3,
        time: "6:00 PM",
        title: "Ambient Journey",
        stage: "Electronic Tent",
        description: "Atmospheric electronic soundscapes",
    },
    SampleEvent {
        day: 3,
        time: "7:00 PM",
        title: "Farewell Symphony",
        stage: "Main Stage",
        description: "Grand finale performance",
    },
];

/// The built-in dataset used when the schedule fetch fails. Already in
/// ascending time order per day, so no re-sort is needed.
pub fn sample_schedule() -> ScheduleByDay {
    let mut schedule = ScheduleByDay::new();

    for sample in &SAMPLE_EVENTS {
        schedule.push(Event {
            time: sample.time.to_string(),
            title: sample.title.to_string(),
            stage: sample.stage.to_string(),
            description: sample.description.to_string(),
            day: sample.day,
            date: String::new(),
        });
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::time::parse_clock_time;

    #[test_log::test]
    fn should_cover_all_three_days() {
        let schedule = sample_schedule();

        assert_eq!(schedule.day(1).len(), 6);
        assert_eq!(schedule.day(2).len(), 5);
        assert_eq!(schedule.day(3).len(), 4);
    }

    #[test_log::test]
    fn should_already_be_in_ascending_time_order() {
        let schedule = sample_schedule();

        for day in 1..=3 {
            let minutes: Vec<u32> = schedule
                .day(day)
                .iter()
                .map(|event| parse_clock_time(&event.time))
                .collect();
            let mut sorted = minutes.clone();
            sorted.sort();

            assert_eq!(minutes, sorted);
        }
    }
}
