use leptos::{create_effect, logging, spawn_local, Callable, Callback, RwSignal, SignalSet};

use crate::{
    host::DesktopHostContext, persistence, portfolio_mode::PortfolioMode, reducer::DesktopAction,
};

pub(super) fn install_boot_hydration(
    host: DesktopHostContext,
    dispatch: Callback<DesktopAction>,
    mode: RwSignal<PortfolioMode>,
) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();

            match persistence::load_desktop_snapshot(prefs.as_ref()).await {
                Ok(Some(snapshot)) => dispatch.call(DesktopAction::HydrateSnapshot {
                    snapshot,
                    viewport: host.viewport_size(),
                }),
                Ok(None) => {}
                Err(err) => logging::warn!("load layout failed, keeping defaults: {err}"),
            }

            match persistence::load_portfolio_mode(prefs.as_ref()).await {
                Ok(Some(saved)) => mode.set(saved),
                Ok(None) => {}
                Err(err) => logging::warn!("load portfolio mode failed: {err}"),
            }
        });
    });
}
