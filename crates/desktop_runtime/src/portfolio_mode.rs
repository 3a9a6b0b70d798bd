//! Software/art portfolio mode.
//!
//! The mode lives in an explicit context value with persistence injected through
//! [`platform_host::PrefsStore`]: loaded once at startup, saved after every toggle.

use serde::{Deserialize, Serialize};

/// Preference key holding the mode as a JSON string.
pub const PORTFOLIO_MODE_KEY: &str = "portfolioMode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioMode {
    #[default]
    Software,
    Art,
}

impl PortfolioMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Software => Self::Art,
            Self::Art => Self::Software,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Software => "Software",
            Self::Art => "Art",
        }
    }
}
