//! Portfolio desktop runtime: window manager, drag and presentation state machines, and the
//! Leptos shell that renders them inside the CRT monitor scene.

pub mod boot_sequence;
pub mod clock;
pub mod components;
pub mod config;
pub mod content;
mod effect_executor;
pub mod host;
pub mod model;
pub mod persistence;
pub mod portfolio_mode;
pub mod presentation;
pub mod reducer;
mod runtime_context;
pub mod schedule;
pub mod shell;
pub mod window_manager;

pub use components::{
    use_desktop_runtime, CrtScreen, DesktopProvider, DesktopRuntimeContext, DesktopShell,
};
pub use config::DesktopConfig;
pub use model::*;
pub use persistence::{
    load_desktop_snapshot, load_portfolio_mode, save_desktop_snapshot, save_portfolio_mode,
    PersistenceError, DESKTOP_SNAPSHOT_KEY,
};
pub use portfolio_mode::PortfolioMode;
pub use presentation::{
    reduce_presentation, PresentationConfig, PresentationEvent, PresentationPhase,
    PresentationState, ZoomTrigger,
};
pub use reducer::{initial_desktop_state, reduce_desktop, DesktopAction, RuntimeEffect};
