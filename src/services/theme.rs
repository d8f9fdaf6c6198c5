//! Theme controller - reads, applies and persists the light/dark preference

use crate::model::surface::UiSurface;
use crate::model::theme::ThemeMode;
use crate::services::preferences::PreferenceStore;
use std::env;

/// Key the preference is stored under
pub const THEME_STORAGE_KEY: &str = "rick-morty-theme";

/// Whether the terminal reports a dark background.
///
/// Reads `COLORFGBG` ("fg;bg", sometimes "fg;default;bg"). Only a light
/// background color counts as an explicit "not dark".
pub fn prefers_dark_scheme() -> bool {
    prefers_dark_from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
}

fn prefers_dark_from_colorfgbg(value: Option<&str>) -> bool {
    let Some(bg) = value.and_then(|v| v.rsplit(';').next()) else {
        return true;
    };
    !matches!(bg.trim(), "7" | "15")
}

pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Startup: apply the persisted mode, or light when the system
    /// explicitly does not prefer dark. Otherwise the surface keeps its
    /// initial dark mode and nothing is persisted.
    pub fn load_theme(&mut self, surface: &mut dyn UiSurface, prefers_dark: bool) -> ThemeMode {
        if let Some(saved) = self.store.get(THEME_STORAGE_KEY) {
            let mode = ThemeMode::from_stored(&saved);
            self.apply_theme(surface, mode);
        } else if !prefers_dark {
            self.apply_theme(surface, ThemeMode::Light);
        }
        surface.theme_mode()
    }

    /// Set mode class and icon on the surface, then persist the choice
    pub fn apply_theme(&mut self, surface: &mut dyn UiSurface, mode: ThemeMode) {
        surface.set_theme_mode(mode);
        surface.set_theme_icon(mode.icon());

        if let Err(e) = self.store.set(THEME_STORAGE_KEY, mode.as_str()) {
            tracing::warn!(error = %e, "could not persist theme preference");
        }
        tracing::debug!(theme = %mode, "theme applied");
    }

    /// Apply the opposite of whatever the surface currently shows
    pub fn toggle_theme(&mut self, surface: &mut dyn UiSurface) -> ThemeMode {
        let next = surface.theme_mode().opposite();
        self.apply_theme(surface, next);
        next
    }

    #[cfg(test)]
    pub fn stored_theme(&self) -> Option<String> {
        self.store.get(THEME_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::surface::Surface;
    use crate::services::preferences::MemoryPreferenceStore;

    fn controller_with(saved: Option<&str>) -> ThemeController {
        let mut store = MemoryPreferenceStore::new();
        if let Some(value) = saved {
            store.set(THEME_STORAGE_KEY, value).unwrap();
        }
        ThemeController::new(Box::new(store))
    }

    #[test]
    fn test_no_saved_theme_and_no_dark_preference_applies_light() {
        let mut theme = controller_with(None);
        let mut surface = Surface::new();

        let mode = theme.load_theme(&mut surface, false);

        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(surface.theme, ThemeMode::Light);
        assert_eq!(surface.theme_icon, "☀️");
        assert_eq!(theme.stored_theme(), Some("light".to_string()));
    }

    #[test]
    fn test_no_saved_theme_with_dark_preference_keeps_dark_unpersisted() {
        let mut theme = controller_with(None);
        let mut surface = Surface::new();

        let mode = theme.load_theme(&mut surface, true);

        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(surface.theme_icon, "🌙");
        assert_eq!(theme.stored_theme(), None);
    }

    #[test]
    fn test_saved_theme_wins_over_system() {
        let mut theme = controller_with(Some("light"));
        let mut surface = Surface::new();
        assert_eq!(theme.load_theme(&mut surface, true), ThemeMode::Light);

        let mut theme = controller_with(Some("dark"));
        let mut surface = Surface::new();
        assert_eq!(theme.load_theme(&mut surface, false), ThemeMode::Dark);
    }

    #[test]
    fn test_unrecognised_saved_theme_applies_and_stores_dark() {
        let mut theme = controller_with(Some("sepia"));
        let mut surface = Surface::new();
        assert_eq!(theme.load_theme(&mut surface, false), ThemeMode::Dark);
        assert_eq!(surface.theme_icon, "🌙");
        assert_eq!(theme.stored_theme(), Some("dark".to_string()));
    }

    #[test]
    fn test_toggle_twice_restores_mode_and_stored_value() {
        let mut theme = controller_with(Some("dark"));
        let mut surface = Surface::new();
        theme.load_theme(&mut surface, true);

        assert_eq!(theme.toggle_theme(&mut surface), ThemeMode::Light);
        assert_eq!(theme.stored_theme(), Some("light".to_string()));

        assert_eq!(theme.toggle_theme(&mut surface), ThemeMode::Dark);
        assert_eq!(surface.theme, ThemeMode::Dark);
        assert_eq!(surface.theme_icon, "🌙");
        assert_eq!(theme.stored_theme(), Some("dark".to_string()));
    }

    #[test]
    fn test_colorfgbg_detection() {
        assert!(prefers_dark_from_colorfgbg(None));
        assert!(prefers_dark_from_colorfgbg(Some("15;0")));
        assert!(!prefers_dark_from_colorfgbg(Some("0;15")));
        assert!(!prefers_dark_from_colorfgbg(Some("0;default;7")));
    }
}
