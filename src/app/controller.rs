use crate::app::view::{DayView, EventCard, NoticeLevel, Renderer, TimeGroupView};
use crate::favorites::store::FavoritesStore;
use crate::schedule::api::ApiError;
use crate::schedule::csv::parse_delimited;
use crate::schedule::grouping::{apply_filter, group_by_time};
use crate::schedule::live::{currently_in_progress, is_in_progress};
use crate::schedule::model::{day_info, ScheduleByDay, StageFilter, StageSet, FIRST_DAY, LAST_DAY};
use crate::schedule::normalize::normalize;
use crate::schedule::sample::sample_schedule;
use itertools::Itertools;
use tracing::{info, instrument, warn};

/// Owns all mutable schedule state: the per-day events, the stage set,
/// the favorites, the selected day and the active filter. Mutation
/// only happens in response to discrete user or timer events, so no
/// locking is involved; collaborators (storage, clock, renderer) come
/// in from the composition root.
pub struct ScheduleController {
    schedule: ScheduleByDay,
    stages: StageSet,
    favorites: FavoritesStore,
    current_day: u8,
    filter: StageFilter,
    renderer: Box<dyn Renderer>,
}

impl ScheduleController {
    pub fn new(favorites: FavoritesStore, renderer: Box<dyn Renderer>) -> Self {
        Self {
            schedule: ScheduleByDay::new(),
            stages: StageSet::new(),
            favorites,
            current_day: FIRST_DAY,
            filter: StageFilter::default(),
            renderer,
        }
    }

    /// Runs the ingest pipeline against fetched text and rebuilds the
    /// schedule and stage set wholesale, then re-renders.
    #[instrument(skip(self, csv_text))]
    pub fn load(&mut self, csv_text: &str, now_minutes: u32) {
        let rows = parse_delimited(csv_text);
        let (schedule, stages) = normalize(&rows);

        info!(
            "Schedule data loaded: {} events across {} stages",
            schedule.len(),
            stages.len()
        );

        self.schedule = schedule;
        self.stages = stages;
        self.refresh(now_minutes);
    }

    /// Installs the built-in sample dataset and warns the user. The
    /// stage set is left as-is; the fallback path never rebuilds the
    /// stage filters.
    #[instrument(skip(self))]
    pub fn load_fallback(&mut self, now_minutes: u32) {
        self.schedule = sample_schedule();
        self.renderer.notify(
            "Using sample data - check console for details",
            NoticeLevel::Warning,
        );
        self.refresh(now_minutes);
    }

    /// Continues the pipeline against whatever the single fetch
    /// attempt produced. A failed fetch degrades to the sample data,
    /// never to a hard failure.
    pub fn load_or_fallback(&mut self, fetched: Result<String, ApiError>, now_minutes: u32) {
        match fetched {
            Ok(text) => self.load(&text, now_minutes),
            Err(err) => {
                warn!("Error loading schedule data: {:?}", err);
                self.load_fallback(now_minutes);
            }
        }
    }

    pub fn switch_day(&mut self, day: u8, now_minutes: u32) {
        if !(FIRST_DAY..=LAST_DAY).contains(&day) {
            return;
        }

        self.current_day = day;
        self.refresh(now_minutes);
    }

    pub fn set_filter(&mut self, filter: StageFilter, now_minutes: u32) {
        self.filter = filter;
        self.refresh(now_minutes);
    }

    /// Flips a favorite and re-renders so star states stay current.
    /// Returns the new state.
    pub fn toggle_favorite(&mut self, title: &str, now_minutes: u32) -> bool {
        let favorited = self.favorites.toggle(title);
        self.refresh(now_minutes);
        favorited
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.is_favorite(title)
    }

    pub fn current_day(&self) -> u8 {
        self.current_day
    }

    pub fn filter(&self) -> &StageFilter {
        &self.filter
    }

    pub fn stages(&self) -> &StageSet {
        &self.stages
    }

    /// Recomputes the filtered, grouped, relevance-flagged view for
    /// the selected day and hands it to the renderer. Called on every
    /// timer tick, after every load, and after every user action.
    #[instrument(skip(self))]
    pub fn refresh(&mut self, now_minutes: u32) -> DayView {
        let playing = currently_in_progress(self.schedule.day(self.current_day), now_minutes);

        if !playing.is_empty() {
            info!(
                "Currently playing: {}",
                playing.iter().map(|event| event.title.as_str()).join(", ")
            );
        }

        let view = self.build_view(now_minutes);

        self.renderer.render(&view);
        view
    }

    fn build_view(&self, now_minutes: u32) -> DayView {
        let day_events = self.schedule.day(self.current_day);
        let filtered = apply_filter(day_events, &self.filter, &self.favorites);

        let groups = group_by_time(&filtered)
            .into_iter()
            .map(|group| TimeGroupView {
                time: group.time,
                cards: group
                    .events
                    .into_iter()
                    .map(|event| EventCard {
                        now_playing: is_in_progress(&event, now_minutes),
                        favorite: self.favorites.is_favorite(&event.title),
                        event,
                    })
                    .collect(),
            })
            .collect();

        let info = day_info(self.current_day);

        DayView {
            day: self.current_day,
            day_name: info.name.to_string(),
            day_date: info.date.to_string(),
            filter: self.filter.to_string(),
            stages: self.stages.iter().cloned().collect(),
            groups,
        }
    }
}
