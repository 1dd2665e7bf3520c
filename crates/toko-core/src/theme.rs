//! Dark-mode flag, read by every screen to select a color palette.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether the UI renders in the dark or light palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub dark_mode: bool,
}

impl Theme {
    /// Flips the flag.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Sets the flag explicitly.
    pub fn set(&mut self, value: bool) {
        self.dark_mode = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_light() {
        assert!(!Theme::default().dark_mode);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut theme = Theme::default();
        let before = theme;
        theme.toggle();
        assert!(theme.dark_mode);
        theme.toggle();
        assert_eq!(theme, before);
    }

    #[test]
    fn test_set() {
        let mut theme = Theme::default();
        theme.set(true);
        assert!(theme.dark_mode);
        theme.set(false);
        assert!(!theme.dark_mode);
    }
}
