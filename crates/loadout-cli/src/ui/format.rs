//! Formatting helpers for terminal output.

use std::time::Duration;

/// Human-readable duration: milliseconds below one second, fractional
/// seconds above.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis}ms")
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_durations_use_millis() {
        assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
    }

    #[test]
    fn longer_durations_use_seconds() {
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
    }
}
