//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! On native targets every adapter degrades to a harmless fallback so the workspace still builds
//! and tests off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-service bundle assembly for the browser entry layer.
pub mod adapters;
pub mod navigation;
pub mod sound;
pub mod storage;
pub mod viewport;

pub use adapters::{build_host_services, prefs_store};
pub use navigation::WebNavigationService;
pub use sound::WebSoundService;
pub use storage::local_prefs::WebPrefsStore;
pub use viewport::WebViewportService;
