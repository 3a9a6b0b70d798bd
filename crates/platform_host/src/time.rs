//! Wall-clock helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Hour and minute of the local wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// Hour in `0..24`.
    pub hour: u8,
    /// Minute in `0..60`.
    pub minute: u8,
}

impl ClockTime {
    /// Derives a UTC clock reading from a unix millisecond timestamp.
    pub fn from_unix_ms(ms: u64) -> Self {
        let minutes_of_day = (ms / 60_000) % (24 * 60);
        Self {
            hour: (minutes_of_day / 60) as u8,
            minute: (minutes_of_day % 60) as u8,
        }
    }
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns the current local wall-clock time.
///
/// Native targets have no timezone database here and report UTC.
pub fn local_clock_time() -> ClockTime {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        ClockTime {
            hour: now.get_hours() as u8,
            minute: now.get_minutes() as u8,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ClockTime::from_unix_ms(unix_time_ms_now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_ms_maps_to_minute_of_day() {
        // 1970-01-02 13:07:59.999 UTC
        let ms = (24 * 60 + 13 * 60 + 7) * 60_000 + 59_999;
        assert_eq!(
            ClockTime::from_unix_ms(ms),
            ClockTime {
                hour: 13,
                minute: 7
            }
        );
    }
}
