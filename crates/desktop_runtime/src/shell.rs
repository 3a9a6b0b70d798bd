//! Static desktop shell catalog: icons, start-menu entries, and taskbar projections.
//!
//! The shell owns no state of its own; every interaction it exposes is a
//! [`crate::reducer::DesktopAction`] handed to the window manager.

use serde::{Deserialize, Serialize};

use crate::model::{DesktopState, WindowId};

/// Résumé opened by the "Documents" start-menu entry.
pub const RESUME_DOCUMENT_URL: &str = "/documents/resume.pdf";

/// Question asked before "Shut Down" restarts the shell.
pub const SHUT_DOWN_PROMPT: &str = "Are you sure you want to shut down?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopIcon {
    pub window_id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Desktop icons in display order. Activating one opens the window of the same id.
pub const DESKTOP_ICONS: [DesktopIcon; 5] = [
    DesktopIcon {
        window_id: "portfolio",
        title: "Portfolio.exe",
        icon: "portfolio",
    },
    DesktopIcon {
        window_id: "about",
        title: "About.txt",
        icon: "about",
    },
    DesktopIcon {
        window_id: "experience",
        title: "Experience.doc",
        icon: "experience",
    },
    DesktopIcon {
        window_id: "projects",
        title: "Projects.fld",
        icon: "projects",
    },
    DesktopIcon {
        window_id: "contact",
        title: "Contact.com",
        icon: "contact",
    },
];

/// Title shown in a window's title bar and on its taskbar button. Unknown ids get an empty
/// title rather than a failure.
pub fn window_title(window_id: &WindowId) -> &'static str {
    DESKTOP_ICONS
        .iter()
        .find(|icon| icon.window_id == window_id.as_str())
        .map(|icon| icon.title)
        .unwrap_or("")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartMenuItem {
    Documents,
    ShutDown,
}

impl StartMenuItem {
    pub const ALL: [Self; 2] = [Self::Documents, Self::ShutDown];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::ShutDown => "Shut Down",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::ShutDown => "shutdown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: &'static str,
}

/// Taskbar buttons: one per minimized window, in insertion order.
pub fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .minimized_windows()
        .map(|w| TaskbarEntry {
            window_id: w.id.clone(),
            title: window_title(&w.id),
        })
        .collect()
}
