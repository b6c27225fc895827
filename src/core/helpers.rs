use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Picks the id for a post created at `at`: its millisecond timestamp, bumped
/// past `last_id` when two posts land in the same millisecond.
pub fn next_post_id(last_id: u64, at: DateTime<Utc>) -> u64 {
    let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
    millis.max(last_id.saturating_add(1))
}
