//! Display formatters for timestamps, counters and post bodies.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Short relative age of `timestamp` as seen at `now`: "Just now", "5m",
/// "3h", "2d", and a `M/D/YYYY` date from seven days on. Timestamps in the
/// future count as "Just now".
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp);

    let minutes = diff.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = diff.num_days();
    if days < 7 {
        return format!("{}d", days);
    }

    timestamp.format("%-m/%-d/%Y").to_string()
}

/// Abbreviates large counters: 999 -> "999", 1200 -> "1.2K", 5800000 -> "5.8M".
pub fn format_abbreviated_number(n: u64) -> String {
    if n >= 1_000_000 {
        return one_decimal(n, 1_000_000, 'M');
    }
    if n >= 1_000 {
        return one_decimal(n, 1_000, 'K');
    }
    n.to_string()
}

// Half-up rounding to tenths in integer arithmetic.
fn one_decimal(n: u64, unit: u64, suffix: char) -> String {
    let tenths = n.saturating_add(unit / 20) / (unit / 10);
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"([#@])([0-9A-Za-z_]+)").expect("Regex should compile")
    })
}

/// Wraps `#hashtag` and `@mention` tokens in styling spans. Other text is
/// passed through as is, so the input must already be safe to embed.
///
/// Not idempotent: feeding the output back in wraps the tags again.
pub fn highlight_tags(text: &str) -> String {
    tag_regex()
        .replace_all(text, |caps: &regex::Captures| {
            let class = if &caps[1] == "#" { "hashtag" } else { "mention" };
            format!(r#"<span class="{}">{}</span>"#, class, &caps[0])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(format_abbreviated_number(1_050), "1.1K");
        assert_eq!(format_abbreviated_number(1_049), "1.0K");
        assert_eq!(format_abbreviated_number(1_250_000), "1.3M");
    }

    #[test]
    fn thousand_boundaries() {
        assert_eq!(format_abbreviated_number(0), "0");
        assert_eq!(format_abbreviated_number(1_000), "1.0K");
        assert_eq!(format_abbreviated_number(999_999), "1000.0K");
        assert_eq!(format_abbreviated_number(1_000_000), "1.0M");
    }

    #[test]
    fn word_characters_are_ascii() {
        assert_eq!(
            highlight_tags("#chai-time"),
            r#"<span class="hashtag">#chai</span>-time"#
        );
        assert_eq!(highlight_tags("# alone"), "# alone");
    }
}
