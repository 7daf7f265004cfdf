//! Maps a session to the screen the shell should show.
use crate::state::SessionState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Setup,
    Entry,
    Results,
}

impl Screen {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Entry => "Participants",
            Self::Results => "Draw",
        }
    }
}

/// Pure; recompute after every transition instead of tracking the screen separately.
///
/// Impossible combinations (setup complete with an empty roster) fall back to `Setup`.
#[must_use]
pub fn resolve(state: &SessionState) -> Screen {
    if state.is_setup_complete {
        if state.participants.is_empty() {
            Screen::Setup
        } else {
            Screen::Results
        }
    } else if state.config.is_configured() {
        Screen::Entry
    } else {
        Screen::Setup
    }
}
