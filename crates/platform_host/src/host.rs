//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    FixedViewportService, NavigationService, NoopNavigationService, NoopPrefsStore,
    NoopSoundService, PrefsStore, SoundService, ViewportService,
};

/// Runtime-selected host services.
///
/// All environment-specific selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the window manager free of browser details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight typed preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Sound notifier.
    pub sound: Rc<dyn SoundService>,
    /// Live viewport size provider.
    pub viewport: Rc<dyn ViewportService>,
    /// Outbound navigation (documents, shut down).
    pub navigation: Rc<dyn NavigationService>,
}

impl HostServices {
    /// Builds a bundle that stores nothing, plays nothing, and reports a fixed default viewport.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            sound: Rc::new(NoopSoundService),
            viewport: Rc::new(FixedViewportService::default()),
            navigation: Rc::new(NoopNavigationService),
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("viewport", &self.viewport.viewport_size())
            .finish_non_exhaustive()
    }
}
