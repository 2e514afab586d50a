//! Theme state for the demo window chrome.

use rtouchpad::{ThemeColors, ThemeManager};

/// State related to the window chrome theme.
///
/// Responsibilities:
/// - Owning the theme manager
/// - Tracking the selected theme, falling back to Dark for unknown names
pub struct ThemeState {
    theme_manager: ThemeManager,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name())
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a theme state with the default theme.
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
        }
    }

    /// Creates a theme state with a stored theme name.
    ///
    /// # Arguments
    /// * `theme_name` - Name loaded from storage; ignored if no such theme exists
    pub fn with_theme(theme_name: &str) -> Self {
        let mut state = Self::new();
        state.set_theme(theme_name);
        state
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.theme_manager.current_theme().name
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.theme_manager.current_theme().colors
    }

    // ===== Theme Mutations =====

    /// Selects a theme by name. Unknown names keep the current theme.
    pub fn set_theme(&mut self, theme_name: &str) {
        if let Err(err) = self.theme_manager.set_current_theme(theme_name) {
            log::warn!("{}", err);
        }
    }
}
