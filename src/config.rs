use std::path::PathBuf;

pub const MIN_SEARCH_LEN: usize = 2;
pub const THEME_KEY: &str = "theme";

pub const DEFAULT_NOTIFICATION_MS: i64 = 3000;
/// Length of the slide-out animation that follows the display time.
pub const NOTIFICATION_EXIT_MS: i64 = 300;

pub const TILT_MAX_DEG: f64 = 10.0;
pub const TILT_INERTIA: f64 = 0.12;
pub const TILT_EPSILON: f64 = 0.01;

pub fn prefs_path() -> PathBuf {
    std::env::var("LINKUP_PREFS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("linkup-prefs.json"))
}

pub fn notification_display_ms() -> i64 {
    std::env::var("LINKUP_NOTIFICATION_MS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_NOTIFICATION_MS)
}
