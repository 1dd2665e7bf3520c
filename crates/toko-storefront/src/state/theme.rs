//! # Theme State
//!
//! Single source of truth for the dark-mode flag. Every screen reads the
//! snapshot to pick its palette; the settings screen toggles it.

use std::sync::{Arc, Mutex};

use toko_core::theme::Theme;

/// Shared theme container injected into the presentation shell.
#[derive(Debug)]
pub struct ThemeState {
    theme: Arc<Mutex<Theme>>,
}

impl ThemeState {
    /// Creates a new theme state defaulting to the light palette.
    pub fn new() -> Self {
        ThemeState {
            theme: Arc::new(Mutex::new(Theme::default())),
        }
    }

    /// Returns the current flag snapshot.
    pub fn snapshot(&self) -> Theme {
        *self.theme.lock().expect("Theme mutex poisoned")
    }

    /// Flips the flag and returns the new snapshot.
    pub fn toggle(&self) -> Theme {
        let mut theme = self.theme.lock().expect("Theme mutex poisoned");
        theme.toggle();
        *theme
    }

    /// Sets the flag explicitly and returns the new snapshot.
    pub fn set(&self, value: bool) -> Theme {
        let mut theme = self.theme.lock().expect("Theme mutex poisoned");
        theme.set(value);
        *theme
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_flag() {
        let state = ThemeState::new();
        let before = state.snapshot();

        state.toggle();
        assert!(state.snapshot().dark_mode);

        state.toggle();
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_set_overrides_toggle_history() {
        let state = ThemeState::new();
        state.toggle();
        state.set(false);
        assert!(!state.snapshot().dark_mode);
    }
}
