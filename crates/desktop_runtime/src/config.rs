//! Tunables for the desktop shell window manager.

use serde::{Deserialize, Serialize};

use crate::model::{WindowId, WindowSize};

pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
pub const DEFAULT_STAGGER_OFFSET: i32 = 30;
pub const DEFAULT_TASKBAR_HEIGHT: i32 = 32;
pub const DEFAULT_INITIAL_WINDOW: &str = "portfolio";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    /// Every managed window shares this size; clamping keeps the whole box on screen.
    pub window_size: WindowSize,
    /// Diagonal offset between successively opened windows.
    pub stagger_offset: i32,
    pub taskbar_height: i32,
    /// Window opened (centered) on a fresh boot with no persisted layout.
    pub initial_window: Option<WindowId>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            window_size: WindowSize::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            stagger_offset: DEFAULT_STAGGER_OFFSET,
            taskbar_height: DEFAULT_TASKBAR_HEIGHT,
            initial_window: Some(WindowId::from(DEFAULT_INITIAL_WINDOW)),
        }
    }
}
