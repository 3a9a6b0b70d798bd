use std::rc::Rc;

use platform_host::HostServices;

use crate::{WebNavigationService, WebPrefsStore, WebSoundService, WebViewportService};

/// Returns the browser preference store.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Assembles the browser host-service bundle injected into `desktop_runtime`.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        sound: Rc::new(WebSoundService),
        viewport: Rc::new(WebViewportService),
        navigation: Rc::new(WebNavigationService),
    }
}
