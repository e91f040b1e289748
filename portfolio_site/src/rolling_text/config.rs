use std::sync::LazyLock;
use std::time::Duration;

const DEFAULT_INTERVAL_MS: u64 = 3000;

/// Default rotation interval for rolling text
/// Default: 3000 ms. Zero or unparsable values fall back to the default.
pub static ROLLING_TEXT_INTERVAL: LazyLock<Duration> = LazyLock::new(|| {
    Duration::from_millis(parse_interval_ms(
        std::env::var("ROLLING_TEXT_INTERVAL_MS").ok().as_deref(),
    ))
});

fn parse_interval_ms(value: Option<&str>) -> u64 {
    value
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_INTERVAL_MS)
}
