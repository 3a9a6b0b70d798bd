//! Reducer actions, side-effect intents, and transition logic for the desktop window manager.

use platform_host::{SoundEffect, ViewportSize};

use crate::{
    config::DesktopConfig,
    model::{
        DesktopSnapshot, DesktopState, DragSession, InteractionState, PointerPosition,
        WindowDescriptor, WindowId, WindowPosition,
    },
    shell::{StartMenuItem, RESUME_DOCUMENT_URL},
    window_manager::{
        clamp_all_windows, clamp_position, find_window_mut, last_visible_window,
        normalize_window_store, staggered_position,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
///
/// Every action naming a window id that is not in the store is a silent no-op: UI event races
/// routinely deliver stale ids.
pub enum DesktopAction {
    /// Open a window, or restore and focus it when it already exists.
    OpenWindow {
        /// Window (and content) to open.
        window_id: WindowId,
        /// Live viewport used for the initial placement.
        viewport: ViewportSize,
    },
    /// Remove a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Hide a window to the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Bring a minimized window back and focus it.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Make a window active without touching its minimized flag. Silent.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Store a new top-left corner, clamped to the viewport.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// Unclamped target position.
        position: WindowPosition,
        /// Live viewport for clamping.
        viewport: ViewportSize,
    },
    /// Pointer went down on a window's title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at pointer-down.
        pointer: PointerPosition,
    },
    /// Pointer moved while a drag is in progress.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Live viewport for clamping.
        viewport: ViewportSize,
    },
    /// Pointer released; ends any drag.
    EndMove,
    /// The viewport changed size; every window is re-clamped.
    ViewportResized {
        /// New viewport size.
        viewport: ViewportSize,
    },
    /// Toggle the start menu overlay.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Run a start-menu entry (closes the menu).
    ActivateStartMenuItem {
        /// Entry chosen.
        item: StartMenuItem,
    },
    /// Replace windows and focus from a persisted snapshot.
    HydrateSnapshot {
        /// Persisted layout.
        snapshot: DesktopSnapshot,
        /// Live viewport for re-clamping persisted positions.
        viewport: ViewportSize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Ask the sound notifier for a cue.
    PlaySound(SoundEffect),
    /// Persist the current desktop snapshot.
    PersistLayout,
    /// Open a document outside the shell.
    OpenDocument(String),
    /// Restart the whole shell.
    ShutDown,
}

/// Applies a [`DesktopAction`] and collects the resulting side effects.
///
/// This is the single source of truth for which windows exist, their visibility, position, and
/// focus. It never fails; invalid targets simply produce no state change and no effects.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    config: &DesktopConfig,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow {
            window_id,
            viewport,
        } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.is_minimized = false;
            } else {
                let position = staggered_position(
                    state.windows.len(),
                    config.stagger_offset,
                    config.window_size,
                    viewport,
                );
                state
                    .windows
                    .push(WindowDescriptor::new(window_id.clone(), position));
            }
            state.active_window = Some(window_id);
            effects.push(RuntimeEffect::PlaySound(SoundEffect::Click));
            effects.push(RuntimeEffect::PersistLayout);
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() != before_len {
                if state.is_active(&window_id) {
                    state.active_window = state.windows.first().map(|w| w.id.clone());
                }
                if interaction
                    .dragging
                    .as_ref()
                    .is_some_and(|session| session.window_id == window_id)
                {
                    interaction.dragging = None;
                }
                effects.push(RuntimeEffect::PlaySound(SoundEffect::Close));
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                let newly_minimized = !window.is_minimized;
                window.is_minimized = true;
                // A minimized window can hold focus after `FocusWindow`; hand it on either way.
                let focus_moved = state.is_active(&window_id);
                if focus_moved {
                    state.active_window = last_visible_window(state, &window_id);
                }
                if newly_minimized {
                    effects.push(RuntimeEffect::PlaySound(SoundEffect::Click));
                }
                if newly_minimized || focus_moved {
                    effects.push(RuntimeEffect::PersistLayout);
                }
            }
        }
        DesktopAction::RestoreWindow { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.is_minimized = false;
                state.active_window = Some(window_id);
                effects.push(RuntimeEffect::PlaySound(SoundEffect::Click));
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if state.contains(&window_id) && !state.is_active(&window_id) {
                state.active_window = Some(window_id);
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
            viewport,
        } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                let clamped = clamp_position(position, config.window_size, viewport);
                if clamped != window.position {
                    window.position = clamped;
                    effects.push(RuntimeEffect::PersistLayout);
                }
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            if let Some(window) = state.window(&window_id) {
                interaction.dragging = Some(DragSession {
                    grab_offset: PointerPosition {
                        x: pointer.x - window.position.x,
                        y: pointer.y - window.position.y,
                    },
                    window_id: window_id.clone(),
                });
                if !state.is_active(&window_id) {
                    state.active_window = Some(window_id);
                }
            }
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let target = WindowPosition {
                    x: pointer.x - session.grab_offset.x,
                    y: pointer.y - session.grab_offset.y,
                };
                match find_window_mut(state, &session.window_id) {
                    Some(window) => {
                        window.position = clamp_position(target, config.window_size, viewport);
                    }
                    None => interaction.dragging = None,
                }
            }
        }
        DesktopAction::EndMove => {
            if interaction.dragging.take().is_some() {
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        DesktopAction::ViewportResized { viewport } => {
            if clamp_all_windows(state, config.window_size, viewport) {
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.show_start_menu = !state.show_start_menu;
            effects.push(RuntimeEffect::PlaySound(SoundEffect::Click));
        }
        DesktopAction::CloseStartMenu => {
            state.show_start_menu = false;
        }
        DesktopAction::ActivateStartMenuItem { item } => {
            state.show_start_menu = false;
            effects.push(match item {
                StartMenuItem::Documents => {
                    RuntimeEffect::OpenDocument(RESUME_DOCUMENT_URL.to_string())
                }
                StartMenuItem::ShutDown => RuntimeEffect::ShutDown,
            });
        }
        DesktopAction::HydrateSnapshot { snapshot, viewport } => {
            interaction.dragging = None;
            state.windows = snapshot.windows;
            state.active_window = snapshot.active_window;
            normalize_window_store(state);
            clamp_all_windows(state, config.window_size, viewport);
        }
    }

    normalize_window_store(state);
    effects
}

/// Builds the fresh-boot desktop: the configured initial window, centered and active.
pub fn initial_desktop_state(config: &DesktopConfig, viewport: ViewportSize) -> DesktopState {
    let mut state = DesktopState::default();
    if let Some(window_id) = config.initial_window.clone() {
        let position = crate::window_manager::centered_position(config.window_size, viewport);
        state
            .windows
            .push(WindowDescriptor::new(window_id.clone(), position));
        state.active_window = Some(window_id);
    }
    state
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowSize;

    const VIEWPORT: ViewportSize = ViewportSize::new(1000, 700);

    struct Harness {
        state: DesktopState,
        interaction: InteractionState,
        config: DesktopConfig,
    }

    impl Harness {
        fn empty() -> Self {
            Self {
                state: DesktopState::default(),
                interaction: InteractionState::default(),
                config: DesktopConfig::default(),
            }
        }

        fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
            reduce_desktop(&mut self.state, &mut self.interaction, &self.config, action)
        }

        fn open(&mut self, id: &str) -> Vec<RuntimeEffect> {
            self.dispatch(DesktopAction::OpenWindow {
                window_id: id.into(),
                viewport: VIEWPORT,
            })
        }

        fn close(&mut self, id: &str) -> Vec<RuntimeEffect> {
            self.dispatch(DesktopAction::CloseWindow {
                window_id: id.into(),
            })
        }

        fn minimize(&mut self, id: &str) -> Vec<RuntimeEffect> {
            self.dispatch(DesktopAction::MinimizeWindow {
                window_id: id.into(),
            })
        }

        fn restore(&mut self, id: &str) -> Vec<RuntimeEffect> {
            self.dispatch(DesktopAction::RestoreWindow {
                window_id: id.into(),
            })
        }

        fn window(&self, id: &str) -> &WindowDescriptor {
            self.state.window(&id.into()).expect("window exists")
        }

        fn active(&self) -> Option<&str> {
            self.state.active_window.as_ref().map(WindowId::as_str)
        }

        fn assert_invariants(&self) {
            let mut ids: Vec<&str> = self.state.windows.iter().map(|w| w.id.as_str()).collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total, "duplicate window ids: {:?}", self.state);
            if let Some(active) = &self.state.active_window {
                assert!(self.state.contains(active), "dangling active window");
            }
            for w in &self.state.windows {
                assert!(w.is_open);
                assert!(w.position.x >= 0 && w.position.x <= VIEWPORT.width - 800);
                assert!(w.position.y >= 0 && w.position.y <= VIEWPORT.height - 600);
            }
        }
    }

    /// Small deterministic generator so sequence tests are reproducible without extra crates.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            self.0 >> 33
        }

        fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
            items[(self.next() as usize) % items.len()]
        }

        fn coord(&mut self) -> i32 {
            (self.next() % 6_000) as i32 - 3_000
        }
    }

    const IDS: [&str; 6] = ["portfolio", "about", "experience", "projects", "contact", "ghost"];

    #[test]
    fn open_about_then_projects_then_close_about_focuses_projects() {
        let mut h = Harness::empty();
        h.open("about");
        h.open("projects");
        h.close("about");

        assert_eq!(h.active(), Some("projects"));
        h.assert_invariants();
    }

    #[test]
    fn opening_same_window_twice_keeps_one_descriptor() {
        let mut h = Harness::empty();
        h.open("about");
        h.open("about");

        assert_eq!(
            h.state
                .windows
                .iter()
                .filter(|w| w.id.as_str() == "about")
                .count(),
            1
        );
    }

    #[test]
    fn move_clamps_to_viewport_minus_window_size() {
        let mut h = Harness::empty();
        h.open("x");
        h.dispatch(DesktopAction::MoveWindow {
            window_id: "x".into(),
            position: WindowPosition::new(500, 500),
            viewport: VIEWPORT,
        });

        assert_eq!(h.window("x").position, WindowPosition::new(200, 100));
    }

    #[test]
    fn minimize_then_restore_round_trips_visibility_and_focus() {
        let mut h = Harness::empty();
        h.open("about");
        h.open("projects");

        h.minimize("about");
        assert!(h.window("about").is_minimized);
        let effects = h.restore("about");

        assert!(!h.window("about").is_minimized);
        assert_eq!(h.active(), Some("about"));
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PlaySound(SoundEffect::Click),
                RuntimeEffect::PersistLayout
            ]
        );
    }

    #[test]
    fn minimizing_the_active_window_moves_focus_to_last_visible_window() {
        let mut h = Harness::empty();
        h.open("portfolio");
        h.open("about");
        h.open("projects");
        h.minimize("about");
        assert_eq!(h.active(), Some("projects"));

        h.minimize("projects");
        assert_eq!(h.active(), Some("portfolio"));

        h.minimize("portfolio");
        assert_eq!(h.active(), None);
        h.assert_invariants();
    }

    #[test]
    fn minimizing_an_inactive_window_keeps_focus() {
        let mut h = Harness::empty();
        h.open("about");
        h.open("projects");
        h.minimize("about");
        assert_eq!(h.active(), Some("projects"));
    }

    #[test]
    fn minimizing_a_focused_minimized_window_hands_focus_on() {
        let mut h = Harness::empty();
        h.open("about");
        h.open("projects");
        h.minimize("about");
        h.dispatch(DesktopAction::FocusWindow {
            window_id: "about".into(),
        });
        assert_eq!(h.active(), Some("about"));
        assert!(h.window("about").is_minimized);

        let effects = h.minimize("about");

        assert_eq!(h.active(), Some("projects"));
        assert_eq!(effects, vec![RuntimeEffect::PersistLayout]);
        h.assert_invariants();
    }

    #[test]
    fn opening_a_minimized_window_restores_and_focuses_it() {
        let mut h = Harness::empty();
        h.open("about");
        h.open("projects");
        h.minimize("about");
        let before = h.window("about").position;

        h.open("about");

        assert!(!h.window("about").is_minimized);
        assert_eq!(h.window("about").position, before);
        assert_eq!(h.active(), Some("about"));
        assert_eq!(h.state.windows.len(), 2);
    }

    #[test]
    fn focus_is_silent_and_leaves_minimized_flag_alone() {
        let mut h = Harness::empty();
        h.open("about");
        h.open("projects");
        h.minimize("about");

        let effects = h.dispatch(DesktopAction::FocusWindow {
            window_id: "about".into(),
        });

        assert_eq!(h.active(), Some("about"));
        assert!(h.window("about").is_minimized);
        assert!(!effects
            .iter()
            .any(|e| matches!(e, RuntimeEffect::PlaySound(_))));
    }

    #[test]
    fn sound_cues_follow_user_actions() {
        let mut h = Harness::empty();
        assert!(h
            .open("about")
            .contains(&RuntimeEffect::PlaySound(SoundEffect::Click)));
        assert!(h
            .minimize("about")
            .contains(&RuntimeEffect::PlaySound(SoundEffect::Click)));
        assert!(h
            .close("about")
            .contains(&RuntimeEffect::PlaySound(SoundEffect::Close)));
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut h = Harness::empty();
        h.open("about");
        let before = h.state.clone();

        for action in [
            DesktopAction::CloseWindow {
                window_id: "ghost".into(),
            },
            DesktopAction::MinimizeWindow {
                window_id: "ghost".into(),
            },
            DesktopAction::RestoreWindow {
                window_id: "ghost".into(),
            },
            DesktopAction::FocusWindow {
                window_id: "ghost".into(),
            },
            DesktopAction::MoveWindow {
                window_id: "ghost".into(),
                position: WindowPosition::new(10, 10),
                viewport: VIEWPORT,
            },
            DesktopAction::BeginMove {
                window_id: "ghost".into(),
                pointer: PointerPosition::new(0, 0),
            },
        ] {
            assert_eq!(h.dispatch(action), Vec::new());
        }

        assert_eq!(h.state, before);
        assert!(!h.interaction.is_dragging());
    }

    #[test]
    fn closing_last_window_clears_focus() {
        let mut h = Harness::empty();
        h.open("about");
        h.close("about");
        assert_eq!(h.active(), None);
        assert!(h.state.windows.is_empty());
    }

    #[test]
    fn new_windows_are_staggered_from_the_current_count() {
        let mut h = Harness::empty();
        h.open("portfolio");
        h.open("about");
        h.open("projects");

        assert_eq!(h.window("portfolio").position, WindowPosition::new(0, 0));
        assert_eq!(h.window("about").position, WindowPosition::new(30, 30));
        assert_eq!(h.window("projects").position, WindowPosition::new(60, 60));
    }

    #[test]
    fn drag_endpoint_is_independent_of_intermediate_moves() {
        let end = PointerPosition::new(420, 333);

        let mut direct = Harness::empty();
        direct.open("about");
        direct.dispatch(DesktopAction::BeginMove {
            window_id: "about".into(),
            pointer: PointerPosition::new(15, 10),
        });
        direct.dispatch(DesktopAction::UpdateMove {
            pointer: end,
            viewport: VIEWPORT,
        });
        direct.dispatch(DesktopAction::EndMove);

        let mut wandering = Harness::empty();
        wandering.open("about");
        wandering.dispatch(DesktopAction::BeginMove {
            window_id: "about".into(),
            pointer: PointerPosition::new(15, 10),
        });
        let mut rng = Lcg(7);
        for _ in 0..250 {
            wandering.dispatch(DesktopAction::UpdateMove {
                pointer: PointerPosition::new(rng.coord(), rng.coord()),
                viewport: VIEWPORT,
            });
            wandering.assert_invariants();
        }
        wandering.dispatch(DesktopAction::UpdateMove {
            pointer: end,
            viewport: VIEWPORT,
        });
        let effects = wandering.dispatch(DesktopAction::EndMove);

        // Grab offset is (15, 10); (420 - 15, 333 - 10) clamps to (200, 100).
        let expected = WindowPosition::new(200, 100);
        assert_eq!(direct.window("about").position, expected);
        assert_eq!(wandering.window("about").position, expected);
        assert_eq!(effects, vec![RuntimeEffect::PersistLayout]);
        assert!(!wandering.interaction.is_dragging());
    }

    #[test]
    fn begin_move_records_grab_offset_and_focuses() {
        let mut h = Harness::empty();
        h.open("about");
        h.open("projects");
        h.dispatch(DesktopAction::MoveWindow {
            window_id: "about".into(),
            position: WindowPosition::new(40, 50),
            viewport: VIEWPORT,
        });

        h.dispatch(DesktopAction::BeginMove {
            window_id: "about".into(),
            pointer: PointerPosition::new(100, 60),
        });

        assert_eq!(h.active(), Some("about"));
        assert_eq!(
            h.interaction.dragging,
            Some(DragSession {
                window_id: "about".into(),
                grab_offset: PointerPosition::new(60, 10),
            })
        );
    }

    #[test]
    fn update_move_without_session_is_ignored() {
        let mut h = Harness::empty();
        h.open("about");
        let before = h.state.clone();
        h.dispatch(DesktopAction::UpdateMove {
            pointer: PointerPosition::new(300, 300),
            viewport: VIEWPORT,
        });
        assert_eq!(h.state, before);
        assert_eq!(h.dispatch(DesktopAction::EndMove), Vec::new());
    }

    #[test]
    fn closing_the_dragged_window_ends_the_drag() {
        let mut h = Harness::empty();
        h.open("about");
        h.dispatch(DesktopAction::BeginMove {
            window_id: "about".into(),
            pointer: PointerPosition::new(5, 5),
        });
        h.close("about");
        assert!(!h.interaction.is_dragging());
    }

    #[test]
    fn shrinking_viewport_reclamps_every_window() {
        let mut h = Harness::empty();
        h.open("about");
        h.dispatch(DesktopAction::MoveWindow {
            window_id: "about".into(),
            position: WindowPosition::new(200, 100),
            viewport: VIEWPORT,
        });

        let effects = h.dispatch(DesktopAction::ViewportResized {
            viewport: ViewportSize::new(900, 650),
        });

        assert_eq!(h.window("about").position, WindowPosition::new(100, 50));
        assert_eq!(effects, vec![RuntimeEffect::PersistLayout]);
    }

    #[test]
    fn start_menu_toggles_independently_of_windows() {
        let mut h = Harness::empty();
        h.open("about");
        let effects = h.dispatch(DesktopAction::ToggleStartMenu);
        assert!(h.state.show_start_menu);
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SoundEffect::Click)]);

        h.close("about");
        assert!(h.state.show_start_menu);

        let effects = h.dispatch(DesktopAction::ActivateStartMenuItem {
            item: StartMenuItem::Documents,
        });
        assert!(!h.state.show_start_menu);
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenDocument(RESUME_DOCUMENT_URL.to_string())]
        );

        h.dispatch(DesktopAction::ToggleStartMenu);
        let effects = h.dispatch(DesktopAction::ActivateStartMenuItem {
            item: StartMenuItem::ShutDown,
        });
        assert_eq!(effects, vec![RuntimeEffect::ShutDown]);
    }

    #[test]
    fn hydration_reclamps_dedupes_and_repairs_focus() {
        let mut h = Harness::empty();
        h.state.show_start_menu = true;
        let snapshot = DesktopSnapshot {
            windows: vec![
                WindowDescriptor::new("about".into(), WindowPosition::new(5_000, -40)),
                WindowDescriptor::new("about".into(), WindowPosition::new(1, 1)),
                WindowDescriptor::new("contact".into(), WindowPosition::new(10, 10)),
            ],
            active_window: Some("ghost".into()),
        };

        let effects = h.dispatch(DesktopAction::HydrateSnapshot {
            snapshot,
            viewport: VIEWPORT,
        });

        assert_eq!(effects, Vec::new());
        assert_eq!(h.state.windows.len(), 2);
        assert_eq!(h.window("about").position, WindowPosition::new(200, 0));
        assert_eq!(h.active(), Some("about"));
        assert!(h.state.show_start_menu);
        h.assert_invariants();
    }

    #[test]
    fn initial_state_centers_the_configured_window() {
        let config = DesktopConfig::default();
        let state = initial_desktop_state(&config, ViewportSize::new(1200, 800));
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].id.as_str(), "portfolio");
        assert_eq!(state.windows[0].position, WindowPosition::new(200, 100));
        assert_eq!(state.active_window, Some("portfolio".into()));

        let config = DesktopConfig {
            initial_window: None,
            window_size: WindowSize::new(300, 200),
            ..DesktopConfig::default()
        };
        assert_eq!(
            initial_desktop_state(&config, VIEWPORT),
            DesktopState::default()
        );
    }

    #[test]
    fn random_operation_sequences_preserve_store_invariants() {
        for seed in 0..40 {
            let mut h = Harness::empty();
            let mut rng = Lcg(seed);
            for _ in 0..200 {
                let id = rng.pick(&IDS);
                let was_active = h.state.is_active(&id.into());
                match rng.next() % 7 {
                    0 | 1 => {
                        h.open(id);
                        assert_eq!(h.active(), Some(id));
                    }
                    2 => {
                        h.close(id);
                        if was_active {
                            let first = h.state.windows.first().map(|w| w.id.as_str());
                            assert_eq!(h.active(), first);
                        }
                    }
                    3 => {
                        h.minimize(id);
                        assert_ne!(h.active(), Some(id));
                    }
                    4 => {
                        h.restore(id);
                    }
                    5 => {
                        h.dispatch(DesktopAction::FocusWindow {
                            window_id: id.into(),
                        });
                    }
                    _ => {
                        h.dispatch(DesktopAction::MoveWindow {
                            window_id: id.into(),
                            position: WindowPosition::new(rng.coord(), rng.coord()),
                            viewport: VIEWPORT,
                        });
                    }
                }
                h.assert_invariants();
            }
        }
    }
}
