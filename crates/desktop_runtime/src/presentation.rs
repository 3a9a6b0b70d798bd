//! Boot/zoom presentation state machine for the CRT monitor scene.
//!
//! This machine only drives what the camera looks at. It owns no desktop data and is reduced
//! independently from [`crate::reducer::reduce_desktop`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationPhase {
    /// Boot text is still running; nothing but the boot overlay is interactive.
    #[default]
    Booting,
    /// Monitor shown at a distance, waiting for the user.
    Waiting,
    /// Camera travelling toward (or settled at) the screen.
    Zoomed,
    /// Pointer is over the screen; camera pushed in close.
    ZoomedIn,
}

impl PresentationPhase {
    pub const fn is_zoomed(self) -> bool {
        matches!(self, Self::Zoomed | Self::ZoomedIn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomTrigger {
    /// Click anywhere outside the interactive screen region.
    ClickOutside,
    /// Any key press (Escape excluded).
    AnyKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationEvent {
    /// The boot sequence collaborator finished.
    BootCompleted,
    /// Click landed outside the screen region.
    ClickOutsideScreen,
    /// Click landed inside the screen region.
    ClickInsideScreen,
    /// A non-Escape key was pressed.
    KeyPressed,
    /// Escape or equivalent.
    Cancel,
    /// Pointer entered (`true`) or left (`false`) the screen region.
    ScreenHover(bool),
    /// The camera reached its zoom target.
    ZoomSettled,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfig {
    pub trigger: ZoomTrigger,
    /// Camera distance per phase: waiting, zoomed, zoomed-in.
    pub camera_depths: [f32; 3],
    /// Pointer parallax strength per phase: waiting, zoomed, zoomed-in.
    pub parallax: [f32; 3],
    /// Fraction of the remaining distance covered each frame.
    pub follow_factor: f32,
    /// Distance under which a zoom counts as settled.
    pub settle_epsilon: f32,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            trigger: ZoomTrigger::ClickOutside,
            camera_depths: [9.0, 6.0, 4.3],
            parallax: [0.7, 0.4, 0.1],
            follow_factor: 0.1,
            settle_epsilon: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationState {
    pub phase: PresentationPhase,
    /// Set once the current zoom has settled; hover only switches to `ZoomedIn` after that.
    pub interaction_ready: bool,
    /// Pointer is over the screen region, whatever the phase.
    pub hovering: bool,
}

/// Applies one event. Returns `true` when the state changed.
pub fn reduce_presentation(
    state: &mut PresentationState,
    config: &PresentationConfig,
    event: PresentationEvent,
) -> bool {
    use PresentationEvent as E;
    use PresentationPhase as P;

    let before = *state;
    if let E::ScreenHover(over) = event {
        state.hovering = over;
    }
    match (state.phase, event) {
        (P::Booting, E::BootCompleted) => state.phase = P::Waiting,
        (P::Booting, _) => {}
        (P::Waiting, E::ClickOutsideScreen) if config.trigger == ZoomTrigger::ClickOutside => {
            start_zoom(state);
        }
        (P::Waiting, E::KeyPressed) if config.trigger == ZoomTrigger::AnyKey => start_zoom(state),
        (P::Zoomed | P::ZoomedIn, E::Cancel | E::ClickInsideScreen) => {
            state.phase = P::Waiting;
            state.interaction_ready = false;
        }
        (P::Zoomed, E::ZoomSettled) => {
            state.interaction_ready = true;
            if state.hovering {
                state.phase = P::ZoomedIn;
            }
        }
        (P::Zoomed, E::ScreenHover(true)) if state.interaction_ready => state.phase = P::ZoomedIn,
        (P::ZoomedIn, E::ScreenHover(false)) => state.phase = P::Zoomed,
        _ => {}
    }
    *state != before
}

fn start_zoom(state: &mut PresentationState) {
    state.phase = PresentationPhase::Zoomed;
    state.interaction_ready = false;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(self, other: Self) -> f32 {
        let (dx, dy, dz) = (other.x - self.x, other.y - self.y, other.z - self.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

/// Camera that follows the phase target with pointer parallax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
        }
    }
}

impl CameraRig {
    /// Target for `phase` given a pointer in normalized device coordinates (`-1..=1`).
    pub fn target(
        config: &PresentationConfig,
        phase: PresentationPhase,
        pointer: (f32, f32),
    ) -> Vec3 {
        let slot = match phase {
            PresentationPhase::Booting | PresentationPhase::Waiting => 0,
            PresentationPhase::Zoomed => 1,
            PresentationPhase::ZoomedIn => 2,
        };
        let factor = config.parallax[slot];
        Vec3::new(
            pointer.0 * factor,
            pointer.1 * factor * 0.5,
            config.camera_depths[slot],
        )
    }

    /// Advances one frame. Returns [`PresentationEvent::ZoomSettled`] when a zoom in progress
    /// has reached its target.
    pub fn step(
        &mut self,
        config: &PresentationConfig,
        state: &PresentationState,
        pointer: (f32, f32),
    ) -> Option<PresentationEvent> {
        let target = Self::target(config, state.phase, pointer);
        self.position = self.position.lerp(target, config.follow_factor);
        let settled = self.position.distance_to(target) < config.settle_epsilon;
        (state.phase == PresentationPhase::Zoomed && settled && !state.interaction_ready)
            .then_some(PresentationEvent::ZoomSettled)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn booted() -> PresentationState {
        let mut state = PresentationState::default();
        reduce_presentation(
            &mut state,
            &PresentationConfig::default(),
            PresentationEvent::BootCompleted,
        );
        state
    }

    #[test]
    fn booting_ignores_everything_but_boot_completion() {
        let config = PresentationConfig::default();
        let mut state = PresentationState::default();
        for event in [
            PresentationEvent::ClickOutsideScreen,
            PresentationEvent::Cancel,
            PresentationEvent::KeyPressed,
            PresentationEvent::ZoomSettled,
        ] {
            assert!(!reduce_presentation(&mut state, &config, event));
        }
        reduce_presentation(&mut state, &config, PresentationEvent::ScreenHover(true));
        assert_eq!(state.phase, PresentationPhase::Booting);
        assert!(state.hovering);

        assert!(reduce_presentation(
            &mut state,
            &config,
            PresentationEvent::BootCompleted
        ));
        assert_eq!(state.phase, PresentationPhase::Waiting);
    }

    #[test]
    fn hover_only_zooms_in_after_settle() {
        let config = PresentationConfig::default();
        let mut state = booted();
        reduce_presentation(&mut state, &config, PresentationEvent::ClickOutsideScreen);
        assert_eq!(state.phase, PresentationPhase::Zoomed);

        reduce_presentation(&mut state, &config, PresentationEvent::ScreenHover(true));
        assert_eq!(state.phase, PresentationPhase::Zoomed);

        reduce_presentation(&mut state, &config, PresentationEvent::ZoomSettled);
        reduce_presentation(&mut state, &config, PresentationEvent::ScreenHover(true));
        assert_eq!(state.phase, PresentationPhase::ZoomedIn);

        reduce_presentation(&mut state, &config, PresentationEvent::ScreenHover(false));
        assert_eq!(state.phase, PresentationPhase::Zoomed);
    }

    #[test]
    fn hover_during_camera_travel_zooms_in_once_settled() {
        let config = PresentationConfig::default();
        let mut state = booted();
        reduce_presentation(&mut state, &config, PresentationEvent::ClickOutsideScreen);
        reduce_presentation(&mut state, &config, PresentationEvent::ScreenHover(true));
        assert_eq!(state.phase, PresentationPhase::Zoomed);

        assert!(reduce_presentation(
            &mut state,
            &config,
            PresentationEvent::ZoomSettled
        ));
        assert_eq!(state.phase, PresentationPhase::ZoomedIn);
        assert!(state.interaction_ready);

        reduce_presentation(&mut state, &config, PresentationEvent::ScreenHover(false));
        assert_eq!(state.phase, PresentationPhase::Zoomed);
    }

    #[test]
    fn settling_away_from_the_screen_stays_zoomed() {
        let config = PresentationConfig::default();
        let mut state = booted();
        reduce_presentation(&mut state, &config, PresentationEvent::ClickOutsideScreen);
        reduce_presentation(&mut state, &config, PresentationEvent::ZoomSettled);
        assert_eq!(state.phase, PresentationPhase::Zoomed);
    }

    #[test]
    fn cancel_returns_to_waiting_from_any_zoom_phase() {
        let config = PresentationConfig::default();
        for hover in [false, true] {
            let mut state = booted();
            reduce_presentation(&mut state, &config, PresentationEvent::ClickOutsideScreen);
            reduce_presentation(&mut state, &config, PresentationEvent::ZoomSettled);
            reduce_presentation(&mut state, &config, PresentationEvent::ScreenHover(hover));

            reduce_presentation(&mut state, &config, PresentationEvent::Cancel);
            assert_eq!(
                state,
                PresentationState {
                    phase: PresentationPhase::Waiting,
                    interaction_ready: false,
                    hovering: hover,
                }
            );
        }
    }

    #[test]
    fn trigger_policy_selects_click_or_key() {
        let key_config = PresentationConfig {
            trigger: ZoomTrigger::AnyKey,
            ..PresentationConfig::default()
        };
        let mut state = booted();
        reduce_presentation(&mut state, &key_config, PresentationEvent::ClickOutsideScreen);
        assert_eq!(state.phase, PresentationPhase::Waiting);
        reduce_presentation(&mut state, &key_config, PresentationEvent::KeyPressed);
        assert_eq!(state.phase, PresentationPhase::Zoomed);

        let mut state = booted();
        reduce_presentation(
            &mut state,
            &PresentationConfig::default(),
            PresentationEvent::KeyPressed,
        );
        assert_eq!(state.phase, PresentationPhase::Waiting);
    }

    #[test]
    fn camera_settles_on_zoom_target_and_reports_once() {
        let config = PresentationConfig::default();
        let mut state = booted();
        reduce_presentation(&mut state, &config, PresentationEvent::ClickOutsideScreen);
        let mut rig = CameraRig::default();

        let mut frames = 0;
        let settled = loop {
            frames += 1;
            assert!(frames < 500, "camera never settled");
            if let Some(event) = rig.step(&config, &state, (0.0, 0.0)) {
                break event;
            }
        };
        assert_eq!(settled, PresentationEvent::ZoomSettled);
        assert!(rig.position.distance_to(Vec3::new(0.0, 0.0, 6.0)) < 0.05);

        reduce_presentation(&mut state, &config, settled);
        assert_eq!(rig.step(&config, &state, (0.0, 0.0)), None);
    }

    #[test]
    fn parallax_shrinks_as_the_camera_moves_closer() {
        let config = PresentationConfig::default();
        let far = CameraRig::target(&config, PresentationPhase::Waiting, (1.0, 1.0));
        let near = CameraRig::target(&config, PresentationPhase::ZoomedIn, (1.0, 1.0));
        assert_eq!(far, Vec3::new(0.7, 0.35, 9.0));
        assert!(near.x < far.x && near.z < far.z);
    }
}
