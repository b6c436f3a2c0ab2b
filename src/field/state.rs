// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Focus / display-mode state machine for the amount input

use serde::{Deserialize, Serialize};

/// Unit the input currently shows
///
/// Only the display changes with the mode; the stored value is always in
/// the asset's own unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Token,
    Usd,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Token => DisplayMode::Usd,
            DisplayMode::Usd => DisplayMode::Token,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Token => "token",
            DisplayMode::Usd => "usd",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where focus went when the input blurred
///
/// A blur towards the submit control must not reflow the input, or the
/// click on that control is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurCause {
    /// Focus moved to a submit-type control
    SubmitControl,
    /// Any other blur (tab away, click elsewhere, MAX button)
    Elsewhere,
}

/// The four states of the input
///
/// ```text
///               focus                          focus
/// UnfocusedToken ───▶ FocusedToken   UnfocusedUsd ───▶ FocusedUsd
///        ▲      ◀───       ▲                ▲    ◀───      ▲
///        │      blur       │                │    blur      │
///        └──── toggle ─────┼────────────────┘              │
///                          └──────────── toggle ───────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldState {
    #[default]
    UnfocusedToken,
    UnfocusedUsd,
    FocusedToken,
    FocusedUsd,
}

impl FieldState {
    pub fn new(focused: bool, mode: DisplayMode) -> Self {
        match (focused, mode) {
            (false, DisplayMode::Token) => FieldState::UnfocusedToken,
            (false, DisplayMode::Usd) => FieldState::UnfocusedUsd,
            (true, DisplayMode::Token) => FieldState::FocusedToken,
            (true, DisplayMode::Usd) => FieldState::FocusedUsd,
        }
    }

    pub fn is_focused(self) -> bool {
        matches!(self, FieldState::FocusedToken | FieldState::FocusedUsd)
    }

    pub fn mode(self) -> DisplayMode {
        match self {
            FieldState::UnfocusedToken | FieldState::FocusedToken => DisplayMode::Token,
            FieldState::UnfocusedUsd | FieldState::FocusedUsd => DisplayMode::Usd,
        }
    }

    pub fn focus(self) -> Self {
        Self::new(true, self.mode())
    }

    pub fn blur(self) -> Self {
        Self::new(false, self.mode())
    }

    /// Flip the display mode, keeping focus
    pub fn toggle_mode(self) -> Self {
        Self::new(self.is_focused(), self.mode().toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FieldState; 4] = [
        FieldState::UnfocusedToken,
        FieldState::UnfocusedUsd,
        FieldState::FocusedToken,
        FieldState::FocusedUsd,
    ];

    #[test]
    fn test_focus_and_blur_keep_mode() {
        for state in ALL {
            assert_eq!(state.focus().mode(), state.mode());
            assert!(state.focus().is_focused());
            assert_eq!(state.blur().mode(), state.mode());
            assert!(!state.blur().is_focused());
        }
    }

    #[test]
    fn test_toggle_keeps_focus() {
        for state in ALL {
            let toggled = state.toggle_mode();
            assert_eq!(toggled.is_focused(), state.is_focused());
            assert_ne!(toggled.mode(), state.mode());
            assert_eq!(toggled.toggle_mode(), state);
        }
    }

    #[test]
    fn test_default_is_unfocused_token() {
        assert_eq!(FieldState::default(), FieldState::UnfocusedToken);
        assert_eq!(DisplayMode::default(), DisplayMode::Token);
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&DisplayMode::Usd).unwrap(), "\"usd\"");
    }
}
