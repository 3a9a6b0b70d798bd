//! Taskbar clock label.

use platform_host::ClockTime;

/// Formats a clock reading as zero-padded `HH:MM`.
pub fn clock_label(time: ClockTime) -> String {
    format!("{:02}:{:02}", time.hour, time.minute)
}

/// Clock label that only reports a change when the visible text changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockDisplay {
    label: String,
}

impl ClockDisplay {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` when the label text changed.
    pub fn update(&mut self, time: ClockTime) -> bool {
        let next = clock_label(time);
        if next == self.label {
            return false;
        }
        self.label = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_zero_padded_and_deduplicated() {
        let mut display = ClockDisplay::default();
        assert!(display.update(ClockTime { hour: 9, minute: 5 }));
        assert_eq!(display.label(), "09:05");
        assert!(!display.update(ClockTime { hour: 9, minute: 5 }));
        assert!(display.update(ClockTime {
            hour: 23,
            minute: 59
        }));
        assert_eq!(display.label(), "23:59");
    }
}
