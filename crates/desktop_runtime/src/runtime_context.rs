//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the presentation
//! machine, the portfolio mode, and host bootstrap wiring. UI composition stays in
//! [`crate::components`].
#![allow(clippy::clone_on_copy)]

use std::rc::Rc;

use leptos::*;
use platform_host::{HostServices, SoundEffect};

use crate::{
    config::DesktopConfig,
    content::{ContentResolver, PortfolioCatalog, WindowContent},
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, PointerPosition, WindowId},
    portfolio_mode::PortfolioMode,
    presentation::{reduce_presentation, PresentationConfig, PresentationEvent, PresentationState},
    reducer::{initial_desktop_state, reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Window manager tunables.
    pub config: StoredValue<DesktopConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Boot/zoom phase of the monitor scene.
    pub presentation: RwSignal<PresentationState>,
    /// Zoom trigger policy and camera tunables.
    pub presentation_config: StoredValue<PresentationConfig>,
    /// Art/software toggle shared by every content view.
    pub portfolio_mode: RwSignal<PortfolioMode>,
    /// Resolves window ids to the content they host.
    pub content: StoredValue<Rc<dyn ContentResolver>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Opens (or restores and focuses) a window using the live viewport for placement.
    pub fn open_window(&self, window_id: WindowId) {
        let viewport = self.host.get_value().viewport_size();
        self.dispatch_action(DesktopAction::OpenWindow {
            window_id,
            viewport,
        });
    }

    /// Forwards a pointer move to the active drag, if any.
    pub fn move_pointer(&self, pointer: PointerPosition) {
        if !self.interaction.get_untracked().is_dragging() {
            return;
        }
        let viewport = self.host.get_value().viewport_size();
        self.dispatch_action(DesktopAction::UpdateMove { pointer, viewport });
    }

    /// Feeds the presentation machine. Returns `true` when the phase or readiness changed.
    pub fn dispatch_presentation(&self, event: PresentationEvent) -> bool {
        let mut next = self.presentation.get_untracked();
        let changed = self
            .presentation_config
            .with_value(|config| reduce_presentation(&mut next, config, event));
        if changed {
            self.presentation.set(next);
        }
        changed
    }

    /// Flips the portfolio mode and saves it.
    pub fn toggle_portfolio_mode(&self) {
        let mode = self.portfolio_mode.get_untracked().toggled();
        self.portfolio_mode.set(mode);
        let host = self.host.get_value();
        host.play_sound(SoundEffect::Click);
        host.persist_portfolio_mode(mode);
    }

    /// Content for `window_id` under the current portfolio mode. Tracks the mode.
    pub fn resolve_content(&self, window_id: &WindowId) -> Option<WindowContent> {
        let mode = self.portfolio_mode.get();
        self.content
            .with_value(|content| content.resolve(window_id, mode))
    }

    /// Like [`Self::resolve_content`] without subscribing to mode changes.
    pub fn resolve_content_untracked(&self, window_id: &WindowId) -> Option<WindowContent> {
        let mode = self.portfolio_mode.get_untracked();
        self.content
            .with_value(|content| content.resolve(window_id, mode))
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch, runtime.portfolio_mode);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Window manager tunables; defaults to [`DesktopConfig::default`].
    #[prop(optional)]
    config: Option<DesktopConfig>,
    /// Boot/zoom tunables; defaults to [`PresentationConfig::default`].
    #[prop(optional)]
    presentation_config: Option<PresentationConfig>,
    children: Children,
) -> impl IntoView {
    let host_context = DesktopHostContext::new(host_services);
    let config = config.unwrap_or_default();
    let initial = initial_desktop_state(&config, host_context.viewport_size());

    let host = store_value(host_context);
    let config = store_value(config);
    let state = create_rw_signal(initial);
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let presentation = create_rw_signal(PresentationState::default());
    let presentation_config = store_value(presentation_config.unwrap_or_default());
    let portfolio_mode = create_rw_signal(PortfolioMode::default());
    let content = store_value(Rc::new(PortfolioCatalog::default()) as Rc<dyn ContentResolver>);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects =
            config.with_value(|config| reduce_desktop(&mut desktop, &mut ui, config, action));

        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        config,
        state,
        interaction,
        effects,
        presentation,
        presentation_config,
        portfolio_mode,
        content,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
