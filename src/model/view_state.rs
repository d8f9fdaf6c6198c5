//! View state - single source of truth for what the results screen shows
//!
//! The filtered set is never written directly: every mutation of the loaded
//! items or the selected status goes through `recompute`, so it always
//! equals `filter_by_status(all_characters, selected_status)`.

use crate::model::character::{CharacterRecord, PageResult};
use crate::services::filter::filter_by_status;

/// Where the most recent page load stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    current_page: u32,
    total_pages: u32,
    all_characters: Vec<CharacterRecord>,
    filtered_characters: Vec<CharacterRecord>,
    selected_status: Option<String>,
    pub phase: LoadPhase,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            all_characters: Vec::new(),
            filtered_characters: Vec::new(),
            selected_status: None,
            phase: LoadPhase::Idle,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[cfg(test)]
    pub fn all_characters(&self) -> &[CharacterRecord] {
        &self.all_characters
    }

    pub fn filtered_characters(&self) -> &[CharacterRecord] {
        &self.filtered_characters
    }

    pub fn selected_status(&self) -> Option<&str> {
        self.selected_status.as_deref()
    }

    /// Install a freshly fetched page. The selected status is kept.
    pub fn apply_page(&mut self, page: PageResult, page_number: u32) {
        self.total_pages = page.total_pages.max(1);
        self.current_page = page_number.clamp(1, self.total_pages);
        self.all_characters = page.items;
        self.recompute();
    }

    /// Change the selected status. Filtering only narrows the loaded page,
    /// and the page counter goes back to 1.
    pub fn select_status(&mut self, status: Option<&str>) {
        self.selected_status = status
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self.current_page = 1;
        self.recompute();
    }

    /// Target of a "next" action, `None` when already on the last page
    pub fn next_page(&self) -> Option<u32> {
        (self.current_page < self.total_pages).then_some(self.current_page + 1)
    }

    /// Target of a "previous" action, `None` when already on page 1
    pub fn prev_page(&self) -> Option<u32> {
        (self.current_page > 1).then_some(self.current_page - 1)
    }

    fn recompute(&mut self) {
        self.filtered_characters =
            filter_by_status(&self.all_characters, self.selected_status.as_deref());
    }
}
