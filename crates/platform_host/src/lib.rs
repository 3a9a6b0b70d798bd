//! Typed host-domain contracts shared by the portfolio desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for everything the window manager consumes from its
//! environment: the sound notifier, the live viewport size, lightweight preference storage, and
//! outbound navigation. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod navigation;
pub mod sound;
pub mod storage;
pub mod time;
pub mod viewport;

pub use host::HostServices;
pub use navigation::{
    NavigationFuture, NavigationService, NoopNavigationService, RecordingNavigationService,
};
pub use sound::{NoopSoundService, RecordingSoundService, SoundEffect, SoundService};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{local_clock_time, unix_time_ms_now, ClockTime};
pub use viewport::{FixedViewportService, SharedViewportService, ViewportService, ViewportSize};
