//! Desktop runtime persistence: layout snapshot and portfolio mode.

use platform_host::{load_pref_with, save_pref_with, PrefsStore};
use thiserror::Error;

use crate::{
    model::{DesktopSnapshot, DesktopState},
    portfolio_mode::{PortfolioMode, PORTFOLIO_MODE_KEY},
};

/// Preference key of the persisted desktop layout.
pub const DESKTOP_SNAPSHOT_KEY: &str = "portfolio.desktop.v1";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("preference store failed for `{key}`: {message}")]
    Store { key: &'static str, message: String },
    #[error("unrecognized portfolio mode `{0}`")]
    UnknownMode(String),
}

fn store_error(key: &'static str) -> impl FnOnce(String) -> PersistenceError {
    move |message| PersistenceError::Store { key, message }
}

/// Loads the persisted layout, if any.
pub async fn load_desktop_snapshot<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Option<DesktopSnapshot>, PersistenceError> {
    load_pref_with(store, DESKTOP_SNAPSHOT_KEY)
        .await
        .map_err(store_error(DESKTOP_SNAPSHOT_KEY))
}

/// Persists the windows and focus of `state`.
pub async fn save_desktop_snapshot<S: PrefsStore + ?Sized>(
    store: &S,
    state: &DesktopState,
) -> Result<(), PersistenceError> {
    save_pref_with(store, DESKTOP_SNAPSHOT_KEY, &state.snapshot())
        .await
        .map_err(store_error(DESKTOP_SNAPSHOT_KEY))
}

/// Loads the portfolio mode.
///
/// Older builds wrote the bare token (`art`) rather than JSON (`"art"`); both are accepted.
pub async fn load_portfolio_mode<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Option<PortfolioMode>, PersistenceError> {
    let Some(raw) = store
        .load_pref(PORTFOLIO_MODE_KEY)
        .await
        .map_err(store_error(PORTFOLIO_MODE_KEY))?
    else {
        return Ok(None);
    };
    match raw.trim().trim_matches('"') {
        "software" => Ok(Some(PortfolioMode::Software)),
        "art" => Ok(Some(PortfolioMode::Art)),
        other => Err(PersistenceError::UnknownMode(other.to_string())),
    }
}

pub async fn save_portfolio_mode<S: PrefsStore + ?Sized>(
    store: &S,
    mode: PortfolioMode,
) -> Result<(), PersistenceError> {
    save_pref_with(store, PORTFOLIO_MODE_KEY, &mode)
        .await
        .map_err(store_error(PORTFOLIO_MODE_KEY))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowDescriptor, WindowPosition};

    #[test]
    fn desktop_snapshot_round_trips_without_start_menu_state() {
        let store = MemoryPrefsStore::default();
        let mut state = DesktopState::default();
        state.windows.push(WindowDescriptor::new(
            "about".into(),
            WindowPosition::new(30, 40),
        ));
        state.active_window = Some("about".into());
        state.show_start_menu = true;

        block_on(save_desktop_snapshot(&store, &state)).expect("save snapshot");
        let loaded = block_on(load_desktop_snapshot(&store)).expect("load snapshot");

        assert_eq!(loaded, Some(state.snapshot()));
        let raw = store.raw(DESKTOP_SNAPSHOT_KEY).expect("raw snapshot");
        assert!(!raw.contains("show_start_menu"));
    }

    #[test]
    fn missing_snapshot_is_not_an_error() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(load_desktop_snapshot(&store)), Ok(None));
    }

    #[test]
    fn corrupt_snapshot_reports_the_key() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(DESKTOP_SNAPSHOT_KEY, "[1, 2");
        let err = block_on(load_desktop_snapshot(&store)).expect_err("corrupt snapshot");
        assert!(matches!(
            err,
            PersistenceError::Store {
                key: DESKTOP_SNAPSHOT_KEY,
                ..
            }
        ));
    }

    #[test]
    fn portfolio_mode_accepts_bare_and_json_tokens() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(PORTFOLIO_MODE_KEY, "art");
        assert_eq!(
            block_on(load_portfolio_mode(&store)),
            Ok(Some(PortfolioMode::Art))
        );

        block_on(save_portfolio_mode(&store, PortfolioMode::Software)).expect("save mode");
        assert_eq!(store.raw(PORTFOLIO_MODE_KEY), Some("\"software\"".to_string()));
        assert_eq!(
            block_on(load_portfolio_mode(&store)),
            Ok(Some(PortfolioMode::Software))
        );

        store.insert_raw(PORTFOLIO_MODE_KEY, "music");
        assert_eq!(
            block_on(load_portfolio_mode(&store)),
            Err(PersistenceError::UnknownMode("music".to_string()))
        );
    }
}
