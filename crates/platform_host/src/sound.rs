//! Sound notifier contracts.
//!
//! The window manager asks for a cue and moves on. Playback success or failure never feeds back
//! into desktop state, so the contract is synchronous and infallible from the caller's side.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

/// UI sound cues requested by the desktop shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Played once the boot sequence hands over to the desktop.
    Startup,
    /// Played for explicit user actions (open, minimize, restore, start menu).
    Click,
    /// Played when a window closes.
    Close,
}

impl SoundEffect {
    /// Returns the stable cue name used for asset lookup and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Click => "click",
            Self::Close => "close",
        }
    }
}

/// Host service that turns a [`SoundEffect`] into audio.
pub trait SoundService {
    /// Plays a cue. Implementations swallow their own failures.
    fn play(&self, effect: SoundEffect);
}

#[derive(Debug, Clone, Copy, Default)]
/// Silent sound service for unsupported targets and muted sessions.
pub struct NoopSoundService;

impl SoundService for NoopSoundService {
    fn play(&self, _effect: SoundEffect) {}
}

#[derive(Debug, Clone, Default)]
/// Sound service that records every requested cue in order.
pub struct RecordingSoundService {
    played: Rc<RefCell<Vec<SoundEffect>>>,
}

impl RecordingSoundService {
    /// Returns all cues requested so far.
    pub fn played(&self) -> Vec<SoundEffect> {
        self.played.borrow().clone()
    }

    /// Forgets all recorded cues.
    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl SoundService for RecordingSoundService {
    fn play(&self, effect: SoundEffect) {
        self.played.borrow_mut().push(effect);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recording_service_keeps_request_order_across_clones() {
        let service = RecordingSoundService::default();
        let shared: Rc<dyn SoundService> = Rc::new(service.clone());

        shared.play(SoundEffect::Click);
        shared.play(SoundEffect::Close);

        assert_eq!(service.played(), vec![SoundEffect::Click, SoundEffect::Close]);
        service.clear();
        assert!(service.played().is_empty());
    }

    #[test]
    fn cue_names_match_serialized_form() {
        for effect in [SoundEffect::Startup, SoundEffect::Click, SoundEffect::Close] {
            let json = serde_json::to_string(&effect).expect("serialize cue");
            assert_eq!(json, format!("\"{}\"", effect.as_str()));
        }
    }
}
