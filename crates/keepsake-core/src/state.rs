//! Interaction states for page elements.
//!
//! Every interactive element on a page owns one of these small enums instead
//! of a loose boolean flag. The generator renders the *initial* state into
//! the HTML; [`toggle`](Disclosure::toggle) describes the single transition
//! the element supports.
//!
//! All states deserialize from `snake_case` strings so they can be set in the
//! configuration file:
//!
//! ```toml
//! [interaction]
//! memories = "expanded"
//! quotes = "back"
//! soundtrack = "paused"
//! ```

use std::fmt;

use serde::Deserialize;

/// Collapsed/expanded state of a panel, modal, or reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    /// Returns the state after one user toggle.
    pub fn toggle(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    /// Returns `true` if the content is visible.
    pub fn is_expanded(self) -> bool {
        matches!(self, Disclosure::Expanded)
    }
}

/// Which face of a flip card is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    /// Returns the face showing after one flip.
    pub fn toggle(self) -> Self {
        match self {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        }
    }

    /// Returns `true` if the back face is showing.
    pub fn shows_back(self) -> bool {
        matches!(self, CardFace::Back)
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Front => write!(f, "front"),
            CardFace::Back => write!(f, "back"),
        }
    }
}

/// Play/pause state of the soundtrack player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Playback {
    #[default]
    Paused,
    Playing,
}

impl Playback {
    /// Returns the state after pressing play/pause.
    pub fn toggle(self) -> Self {
        match self {
            Playback::Paused => Playback::Playing,
            Playback::Playing => Playback::Paused,
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, Playback::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_resting_states() {
        assert_eq!(Disclosure::default(), Disclosure::Collapsed);
        assert_eq!(CardFace::default(), CardFace::Front);
        assert_eq!(Playback::default(), Playback::Paused);
    }

    #[test]
    fn test_disclosure_toggle_is_involution() {
        for state in [Disclosure::Collapsed, Disclosure::Expanded] {
            assert_ne!(state.toggle(), state);
            assert_eq!(state.toggle().toggle(), state);
        }
        assert!(Disclosure::Collapsed.toggle().is_expanded());
    }

    #[test]
    fn test_card_face_toggle() {
        assert!(CardFace::Front.toggle().shows_back());
        assert_eq!(CardFace::Back.toggle(), CardFace::Front);
        assert_eq!(CardFace::Back.to_string(), "back");
    }

    #[test]
    fn test_playback_toggle() {
        assert!(Playback::Paused.toggle().is_playing());
        assert!(!Playback::Playing.toggle().is_playing());
    }
}
