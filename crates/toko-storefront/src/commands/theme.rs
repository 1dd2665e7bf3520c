//! # Theme Commands
//!
//! Dark-mode control from the settings screen. The returned snapshot is
//! the whole theme state, small as it is.

use tracing::debug;

use crate::state::ThemeState;
use toko_core::theme::Theme;

/// Gets the current theme.
pub fn get_theme(theme: &ThemeState) -> Theme {
    debug!("get_theme command");
    theme.snapshot()
}

/// Flips dark mode and returns the new theme.
pub fn toggle_dark_mode(theme: &ThemeState) -> Theme {
    debug!("toggle_dark_mode command");
    theme.toggle()
}

/// Sets dark mode explicitly and returns the new theme.
pub fn set_dark_mode(theme: &ThemeState, value: bool) -> Theme {
    debug!(value = %value, "set_dark_mode command");
    theme.set(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        let theme = ThemeState::new();
        let before = get_theme(&theme);

        toggle_dark_mode(&theme);
        let after = toggle_dark_mode(&theme);

        assert_eq!(after, before);
    }

    #[test]
    fn test_set_dark_mode() {
        let theme = ThemeState::new();
        assert!(set_dark_mode(&theme, true).dark_mode);
        assert!(!set_dark_mode(&theme, false).dark_mode);
    }
}
