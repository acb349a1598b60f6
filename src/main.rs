use stagetime::app::controller::ScheduleController;
use stagetime::app::view::{Clock, DayView, FixedClock, NoticeLevel, Renderer, SystemClock};
use stagetime::config::env_loader::load_config;
use stagetime::favorites::store::{FavoritesStore, FileStorage};
use stagetime::schedule::api::ScheduleAPI;
use stagetime::tracing::setup_loki;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info, warn};

/// Renders the structured day view to the log. Stands in for the
/// actual display surface when running headless.
struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&self, view: &DayView) {
        info!(
            "{} ({}) | filter '{}' | {} time group(s)",
            view.day_name,
            view.day_date,
            view.filter,
            view.groups.len()
        );

        for group in &view.groups {
            for card in &group.cards {
                info!(
                    "{} {} {} | {} @ {}",
                    if card.now_playing { ">" } else { " " },
                    if card.favorite { "*" } else { " " },
                    group.time,
                    card.event.title,
                    card.event.stage
                );
            }
        }

        if let Some(card) = view.first_now_playing() {
            info!("Jump to now: {}", card.event.title);
        }
    }

    fn notify(&self, message: &str, level: NoticeLevel) {
        match level {
            NoticeLevel::Info => info!("{}", message),
            NoticeLevel::Warning => warn!("{}", message),
            NoticeLevel::Error => error!("{}", message),
        }
    }
}

#[tokio::main]
async fn main() {
    let _loki = setup_loki().await;
    let config = load_config();

    let clock: Box<dyn Clock> = match config.debug_config.fixed_now {
        Some(minutes) => Box::new(FixedClock(minutes)),
        None => Box::new(SystemClock),
    };

    let favorites = FavoritesStore::load(Box::new(FileStorage::new(config.favorites_path.clone())));
    let mut controller = ScheduleController::new(favorites, Box::new(LogRenderer));

    let fetched = ScheduleAPI::fetch_schedule(&config.schedule_url).await;
    controller.load_or_fallback(fetched, clock.now_minutes());

    if config.debug_config.single_pass {
        return;
    }

    let mut ticker = interval(Duration::from_secs(config.refresh_seconds));
    // A resumed process starts a fresh interval; missed ticks are
    // never replayed.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker.tick().await;

    loop {
        ticker.tick().await;
        controller.refresh(clock.now_minutes());
    }
}
