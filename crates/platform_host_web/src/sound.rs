//! Sound notifier backed by `HtmlAudioElement`.

use platform_host::{SoundEffect, SoundService};

/// Directory the cue files are served from.
pub const SOUND_ASSET_DIR: &str = "/sounds";

/// Returns the asset URL for a cue.
pub fn sound_asset_url(effect: SoundEffect) -> String {
    format!("{SOUND_ASSET_DIR}/{}.mp3", effect.as_str())
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser sound service; each cue gets a fresh audio element so overlapping cues do not cut
/// each other off.
pub struct WebSoundService;

impl SoundService for WebSoundService {
    fn play(&self, effect: SoundEffect) {
        #[cfg(all(target_arch = "wasm32", not(feature = "muted")))]
        {
            let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(&sound_asset_url(effect))
            else {
                return;
            };
            // Autoplay policies reject the promise before the first user gesture.
            let _ = audio.play();
        }

        #[cfg(not(all(target_arch = "wasm32", not(feature = "muted"))))]
        {
            let _ = effect;
        }
    }
}
