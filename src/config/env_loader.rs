use crate::config::model::{Config, DebugConfig};
use chrono::{NaiveTime, Timelike};
use std::env;
use std::path::PathBuf;

const DEFAULT_FAVORITES_PATH: &str = "favorites.json";
const DEFAULT_REFRESH_SECONDS: u64 = 60;

pub fn load_config() -> Config {
    let schedule_url =
        env::var("SCHEDULE_URL").unwrap_or_else(|_| panic!("SCHEDULE_URL must be set."));
    let favorites_path = PathBuf::from(
        env::var("FAVORITES_PATH").unwrap_or_else(|_| DEFAULT_FAVORITES_PATH.to_string()),
    );
    let refresh_seconds = load_u64_config("REFRESH_SECONDS", DEFAULT_REFRESH_SECONDS);

    let debug_fixed_now = load_time_config("DEBUG_FIXED_NOW");
    let debug_single_pass = load_bool_config("DEBUG_SINGLE_PASS", false);

    Config {
        schedule_url,
        favorites_path,
        refresh_seconds,
        debug_config: DebugConfig {
            fixed_now: debug_fixed_now,
            single_pass: debug_single_pass,
        },
    }
}

fn load_u64_config(name: &str, default: u64) -> u64 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected a whole number.", name))
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn load_time_config(name: &str) -> Option<u32> {
    match env::var(name) {
        Ok(value) => {
            let time = NaiveTime::parse_from_str(&value, "%H:%M")
                .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected 'H:MM'.", name));

            Some(time.hour() * 60 + time.minute())
        }
        Err(_) => None,
    }
}
