use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable window identifier; doubles as the key of the content the window hosts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-left corner of a window in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub id: WindowId,
    /// Always `true` while the descriptor exists; closing removes the descriptor.
    pub is_open: bool,
    pub is_minimized: bool,
    pub position: WindowPosition,
}

impl WindowDescriptor {
    pub fn new(id: WindowId, position: WindowPosition) -> Self {
        Self {
            id,
            is_open: true,
            is_minimized: false,
            position,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    /// Insertion order; also the stacking tiebreak below the active window.
    pub windows: Vec<WindowDescriptor>,
    pub active_window: Option<WindowId>,
    pub show_start_menu: bool,
}

impl DesktopState {
    pub fn window(&self, window_id: &WindowId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn contains(&self, window_id: &WindowId) -> bool {
        self.window(window_id).is_some()
    }

    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.active_window.as_ref() == Some(window_id)
    }

    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowDescriptor> {
        self.windows.iter().filter(|w| !w.is_minimized)
    }

    pub fn minimized_windows(&self) -> impl Iterator<Item = &WindowDescriptor> {
        self.windows.iter().filter(|w| w.is_minimized)
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot {
            windows: self.windows.clone(),
            active_window: self.active_window.clone(),
        }
    }
}

/// Serializable slice of [`DesktopState`] kept across reloads. The start menu always boots
/// closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopSnapshot {
    pub windows: Vec<WindowDescriptor>,
    pub active_window: Option<WindowId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Live drag record. Moves always recompute from the pointer and this offset, never from a
/// previously rendered position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position minus the window's top-left corner at pointer-down.
    pub grab_offset: PointerPosition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// `None` is the idle state of the drag machine.
    pub dragging: Option<DragSession>,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }
}

