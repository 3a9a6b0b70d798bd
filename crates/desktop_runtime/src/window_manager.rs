//! Placement, clamping, and focus helpers shared by the desktop reducer.

use platform_host::ViewportSize;

use crate::model::{DesktopState, WindowDescriptor, WindowId, WindowPosition, WindowSize};

/// z-index of the active window.
pub const ACTIVE_Z_INDEX: u32 = 100;
/// z-index of every other visible window.
pub const INACTIVE_Z_INDEX: u32 = 90;

/// Constrains `position` so a `window`-sized box stays inside `viewport`.
///
/// A viewport smaller than the window pins that axis to `0`.
pub fn clamp_position(
    position: WindowPosition,
    window: WindowSize,
    viewport: ViewportSize,
) -> WindowPosition {
    let max_x = viewport.width.saturating_sub(window.width).max(0);
    let max_y = viewport.height.saturating_sub(window.height).max(0);
    WindowPosition {
        x: position.x.clamp(0, max_x),
        y: position.y.clamp(0, max_y),
    }
}

/// Position that centers a window in the viewport.
pub fn centered_position(window: WindowSize, viewport: ViewportSize) -> WindowPosition {
    clamp_position(
        WindowPosition {
            x: (viewport.width - window.width) / 2,
            y: (viewport.height - window.height) / 2,
        },
        window,
        viewport,
    )
}

/// Position for the next window given how many descriptors already exist.
pub fn staggered_position(
    existing: usize,
    offset: i32,
    window: WindowSize,
    viewport: ViewportSize,
) -> WindowPosition {
    let step = offset.saturating_mul(i32::try_from(existing).unwrap_or(i32::MAX));
    let raw = WindowPosition {
        x: step.min(viewport.width - window.width - offset),
        y: step.min(viewport.height - window.height - offset),
    };
    clamp_position(raw, window, viewport)
}

pub fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Option<&'a mut WindowDescriptor> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

/// Most recently inserted window that is still visible, skipping `except`.
pub fn last_visible_window(state: &DesktopState, except: &WindowId) -> Option<WindowId> {
    state
        .windows
        .iter()
        .rev()
        .find(|w| !w.is_minimized && &w.id != except)
        .map(|w| w.id.clone())
}

/// Re-clamps every stored position against `viewport`. Returns `true` when anything moved.
pub fn clamp_all_windows(
    state: &mut DesktopState,
    window: WindowSize,
    viewport: ViewportSize,
) -> bool {
    let mut changed = false;
    for descriptor in &mut state.windows {
        let clamped = clamp_position(descriptor.position, window, viewport);
        if clamped != descriptor.position {
            descriptor.position = clamped;
            changed = true;
        }
    }
    changed
}

/// Restores the state invariants: unique ids and an `active_window` that points at a live
/// descriptor.
///
/// Duplicates keep their first occurrence. A dangling active id falls back to the first
/// remaining window.
pub fn normalize_window_store(state: &mut DesktopState) {
    let mut seen = std::collections::HashSet::new();
    state.windows.retain(|w| seen.insert(w.id.clone()));
    for descriptor in &mut state.windows {
        descriptor.is_open = true;
    }

    let dangling = state
        .active_window
        .as_ref()
        .is_some_and(|id| !state.windows.iter().any(|w| &w.id == id));
    if dangling {
        state.active_window = state.windows.first().map(|w| w.id.clone());
    }
}

/// Stacking z-index for a window: the active window is always on top.
pub fn z_index_for(state: &DesktopState, window_id: &WindowId) -> u32 {
    if state.is_active(window_id) {
        ACTIVE_Z_INDEX
    } else {
        INACTIVE_Z_INDEX
    }
}

/// Visible windows in paint order (back to front).
pub fn stacking_order(state: &DesktopState) -> Vec<&WindowDescriptor> {
    let mut visible: Vec<&WindowDescriptor> = state.visible_windows().collect();
    // Stable sort keeps insertion order among inactive windows.
    visible.sort_by_key(|w| z_index_for(state, &w.id));
    visible
}
