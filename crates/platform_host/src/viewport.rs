//! Viewport size provider contracts.

use std::{cell::Cell, rc::Rc};

use serde::{Deserialize, Serialize};

/// Current drawable viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    /// Viewport width.
    pub width: i32,
    /// Viewport height.
    pub height: i32,
}

impl ViewportSize {
    /// Builds a viewport size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

/// Host service reporting the live viewport size.
///
/// Callers read it on every clamp, so implementations must reflect resizes immediately rather
/// than caching a startup value.
pub trait ViewportService {
    /// Returns the current viewport size.
    fn viewport_size(&self) -> ViewportSize;
}

#[derive(Debug, Clone, Copy, Default)]
/// Viewport service that always reports the same size.
pub struct FixedViewportService(pub ViewportSize);

impl ViewportService for FixedViewportService {
    fn viewport_size(&self) -> ViewportSize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
/// Viewport service whose size can be changed by the owner, shared across clones.
pub struct SharedViewportService {
    size: Rc<Cell<ViewportSize>>,
}

impl SharedViewportService {
    /// Creates a shared viewport starting at `size`.
    pub fn new(size: ViewportSize) -> Self {
        Self {
            size: Rc::new(Cell::new(size)),
        }
    }

    /// Replaces the reported size.
    pub fn resize(&self, size: ViewportSize) {
        self.size.set(size);
    }
}

impl ViewportService for SharedViewportService {
    fn viewport_size(&self) -> ViewportSize {
        self.size.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_viewport_reports_latest_resize_through_trait_object() {
        let owner = SharedViewportService::new(ViewportSize::new(1000, 700));
        let reader: Rc<dyn ViewportService> = Rc::new(owner.clone());
        assert_eq!(reader.viewport_size(), ViewportSize::new(1000, 700));

        owner.resize(ViewportSize::new(640, 480));
        assert_eq!(reader.viewport_size(), ViewportSize::new(640, 480));
    }
}
