//! Typed boot text shown before the desktop hands over to the monitor scene.

use std::time::Duration;

pub const DEFAULT_BOOT_LINES: [&str; 7] = [
    "Booting PortfolioOS v3.0...",
    "Initializing system components...",
    "Loading kernel modules...",
    "Starting system services...",
    "Mounting filesystems...",
    "Launching desktop environment...",
    "System ready",
];

pub const CONTINUE_PROMPT: &str = "Press any key to continue...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSequenceConfig {
    pub lines: Vec<String>,
    /// Delay between typed characters.
    pub type_interval: Duration,
    /// Cursor blink half-period.
    pub cursor_interval: Duration,
}

impl Default for BootSequenceConfig {
    fn default() -> Self {
        Self {
            lines: DEFAULT_BOOT_LINES.iter().map(|l| l.to_string()).collect(),
            type_interval: Duration::from_millis(30),
            cursor_interval: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Typing,
    AwaitingConfirmation,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSequence {
    lines: Vec<Vec<char>>,
    finished_lines: usize,
    typed_chars: usize,
    cursor_visible: bool,
    confirmed: bool,
}

impl BootSequence {
    pub fn new(config: &BootSequenceConfig) -> Self {
        Self {
            lines: config.lines.iter().map(|l| l.chars().collect()).collect(),
            finished_lines: 0,
            typed_chars: 0,
            cursor_visible: true,
            confirmed: false,
        }
    }

    pub fn phase(&self) -> BootPhase {
        if self.confirmed {
            BootPhase::Done
        } else if self.finished_lines >= self.lines.len() {
            BootPhase::AwaitingConfirmation
        } else {
            BootPhase::Typing
        }
    }

    /// Types one more character, or commits the current line once it is fully typed.
    pub fn tick(&mut self) {
        let Some(line) = self.lines.get(self.finished_lines) else {
            return;
        };
        if self.typed_chars < line.len() {
            self.typed_chars += 1;
        } else {
            self.finished_lines += 1;
            self.typed_chars = 0;
        }
    }

    pub fn blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// Accepts the "press any key" confirmation. Returns `true` exactly once, when the sequence
    /// moves to [`BootPhase::Done`].
    pub fn confirm(&mut self) -> bool {
        if self.phase() != BootPhase::AwaitingConfirmation {
            return false;
        }
        self.confirmed = true;
        true
    }

    pub fn finished_lines(&self) -> Vec<String> {
        self.lines[..self.finished_lines]
            .iter()
            .map(|l| l.iter().collect())
            .collect()
    }

    /// The partially typed line, empty between lines and after the last one.
    pub fn current_line(&self) -> String {
        self.lines
            .get(self.finished_lines)
            .map(|l| l[..self.typed_chars].iter().collect())
            .unwrap_or_default()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible && self.phase() == BootPhase::Typing
    }
}

/// Returns whether a key confirms the boot prompt.
pub fn is_confirm_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
