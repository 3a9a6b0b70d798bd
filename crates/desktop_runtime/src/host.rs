//! Host-side runtime helpers for executing reducer effects and querying the environment.
//!
//! The reducer never touches the browser. Everything it asks for (sounds, persistence, document
//! links, shut down) arrives here as a [`RuntimeEffect`] and is carried out through the injected
//! [`HostServices`] bundle.

mod boot;
mod effects;

use std::rc::Rc;

use leptos::{logging, spawn_local, Callback};
use platform_host::{HostServices, PrefsStore, SoundEffect, ViewportSize};

use crate::{
    model::DesktopState,
    persistence,
    portfolio_mode::PortfolioMode,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
    shell::SHUT_DOWN_PROMPT,
};

#[derive(Clone, Debug)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps the services selected by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Live viewport used for placement and clamping.
    pub fn viewport_size(&self) -> ViewportSize {
        self.services.viewport.viewport_size()
    }

    pub fn play_sound(&self, effect: SoundEffect) {
        self.services.sound.play(effect);
    }

    /// Installs boot hydration of the persisted layout and portfolio mode.
    pub fn install_boot_hydration(
        &self,
        dispatch: Callback<DesktopAction>,
        mode: leptos::RwSignal<PortfolioMode>,
    ) {
        boot::install_boot_hydration(self.clone(), dispatch, mode);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    /// Opens a URL outside the desktop shell.
    pub fn open_external_url(&self, url: &str) {
        let navigation = self.services.navigation.clone();
        let url = url.to_string();
        spawn_local(async move {
            if let Err(err) = navigation.open_url(&url).await {
                logging::warn!("open external url failed for `{url}`: {err}");
            }
        });
    }

    /// Restarts the shell once the user confirms.
    pub fn shut_down(&self) {
        let navigation = &self.services.navigation;
        if !navigation.confirm(SHUT_DOWN_PROMPT) {
            return;
        }
        if let Err(err) = navigation.reload() {
            logging::warn!("shut down failed: {err}");
        }
    }

    fn persist_layout_snapshot(&self, state: DesktopState) {
        let prefs = self.prefs_store();
        spawn_local(async move {
            if let Err(err) = persistence::save_desktop_snapshot(prefs.as_ref(), &state).await {
                logging::warn!("persist layout failed: {err}");
            }
        });
    }

    /// Saves the portfolio mode in the background.
    pub fn persist_portfolio_mode(&self, mode: PortfolioMode) {
        let prefs = self.prefs_store();
        spawn_local(async move {
            if let Err(err) = persistence::save_portfolio_mode(prefs.as_ref(), mode).await {
                logging::warn!("persist portfolio mode failed: {err}");
            }
        });
    }
}
