use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub schedule_url: String,
    pub favorites_path: PathBuf,
    pub refresh_seconds: u64,
    pub debug_config: DebugConfig,
}

#[derive(Debug)]
pub struct DebugConfig {
    /// Freezes "now" at a fixed minute of the day for dry runs.
    pub fixed_now: Option<u32>,
    /// Render once and exit instead of running the refresh loop.
    pub single_pass: bool,
}
