//! UI surface - the set of screen elements the controller writes to
//!
//! The controller never touches ratatui directly. It writes text, flags and
//! result nodes into a `UiSurface`; the components draw whatever `Surface`
//! currently holds. Tests substitute their own surface to capture writes.

use crate::model::character::CharacterStatus;
use crate::model::theme::ThemeMode;

/// A fully built character card, fields in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    pub image_url: String,
    pub name: String,
    pub status: CharacterStatus,
    /// "{status} - {gender}"
    pub status_text: String,
    pub species_text: String,
    pub location_text: String,
}

/// Visual node placed into the results container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultNode {
    Card(CharacterCard),
    /// Centered message shown instead of an empty grid
    Placeholder(String),
}

/// Elements the controller needs, addressed by role
pub trait UiSurface {
    /// Show or hide the loading indicator
    fn set_loading(&mut self, visible: bool);

    /// Put `message` in the error slot and make the banner visible
    fn show_error(&mut self, message: &str);

    fn hide_error(&mut self);

    /// Replace everything in the results container
    fn replace_results(&mut self, nodes: Vec<ResultNode>);

    fn set_page_info(&mut self, text: String);

    fn set_prev_disabled(&mut self, disabled: bool);

    fn set_next_disabled(&mut self, disabled: bool);

    /// Current value of the status select (`None` = all)
    fn status_select(&self) -> Option<String>;

    fn set_status_select(&mut self, value: Option<&str>);

    /// Mode class currently applied to the surface
    fn theme_mode(&self) -> ThemeMode;

    fn set_theme_mode(&mut self, mode: ThemeMode);

    fn set_theme_icon(&mut self, glyph: &'static str);
}

/// Screen model drawn by the terminal components
#[derive(Debug, Clone)]
pub struct Surface {
    pub loading: bool,
    pub error: Option<String>,
    pub results: Vec<ResultNode>,
    pub page_info: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub status_select: Option<String>,
    pub theme: ThemeMode,
    pub theme_icon: &'static str,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// Initial screen: dark mode, nothing loaded, both buttons enabled
    pub fn new() -> Self {
        Self {
            loading: false,
            error: None,
            results: Vec::new(),
            page_info: String::new(),
            prev_disabled: false,
            next_disabled: false,
            status_select: None,
            theme: ThemeMode::Dark,
            theme_icon: ThemeMode::Dark.icon(),
        }
    }

    #[cfg(test)]
    pub fn card_count(&self) -> usize {
        self.results
            .iter()
            .filter(|n| matches!(n, ResultNode::Card(_)))
            .count()
    }
}

impl UiSurface for Surface {
    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn replace_results(&mut self, nodes: Vec<ResultNode>) {
        self.results = nodes;
    }

    fn set_page_info(&mut self, text: String) {
        self.page_info = text;
    }

    fn set_prev_disabled(&mut self, disabled: bool) {
        self.prev_disabled = disabled;
    }

    fn set_next_disabled(&mut self, disabled: bool) {
        self.next_disabled = disabled;
    }

    fn status_select(&self) -> Option<String> {
        self.status_select.clone()
    }

    fn set_status_select(&mut self, value: Option<&str>) {
        self.status_select = value.filter(|v| !v.is_empty()).map(str::to_string);
    }

    fn theme_mode(&self) -> ThemeMode {
        self.theme
    }

    fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme = mode;
    }

    fn set_theme_icon(&mut self, glyph: &'static str) {
        self.theme_icon = glyph;
    }
}
