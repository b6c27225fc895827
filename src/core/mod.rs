pub mod errors;
pub mod format;
pub mod helpers;
pub mod prefs;
pub mod seed;
