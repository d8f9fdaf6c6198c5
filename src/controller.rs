//! Page controller - the only writer of `ViewState`
//!
//! Page loads are split into `begin_load` / `finish_load` so the terminal
//! loop can run the request in the background. Each load gets a
//! `LoadTicket`, and only the most recently issued ticket may write state:
//! a response that arrives after a newer request was made is dropped.

use crate::model::character::PageResult;
use crate::model::surface::UiSurface;
use crate::model::view_state::{LoadPhase, ViewState};
use crate::render::{render_characters, update_pagination};
use crate::services::api::{self, FetchError};

/// Identifies one page-load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub id: u64,
    pub page: u32,
}

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer request superseded this one
    Stale,
}

#[derive(Debug, Default)]
pub struct Controller {
    state: ViewState,
    last_ticket: u64,
    pending: Option<LoadTicket>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Page loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Start loading `page`: issue a ticket and open the loading bracket
    pub fn begin_load(&mut self, page: u32, surface: &mut dyn UiSurface) -> LoadTicket {
        self.last_ticket += 1;
        let ticket = LoadTicket {
            id: self.last_ticket,
            page,
        };
        if let Some(previous) = self.pending.replace(ticket) {
            tracing::debug!(superseded = previous.page, page, "page load superseded");
        }
        self.state.phase = LoadPhase::Loading;
        api::begin_fetch(surface);
        ticket
    }

    /// Apply the result of a load. On failure state is left as it was and
    /// the error is returned after the banner has been shown.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<PageResult, FetchError>,
        surface: &mut dyn UiSurface,
    ) -> Result<LoadOutcome, FetchError> {
        if self.pending != Some(ticket) {
            tracing::debug!(page = ticket.page, id = ticket.id, "dropping stale page response");
            return Ok(LoadOutcome::Stale);
        }
        self.pending = None;

        match api::end_fetch(surface, result) {
            Ok(page) => {
                self.state.apply_page(page, ticket.page);
                self.state.phase = LoadPhase::Loaded;
                self.render(surface);
                tracing::info!(
                    page = self.state.current_page(),
                    total_pages = self.state.total_pages(),
                    "page loaded"
                );
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                self.state.phase = LoadPhase::Error;
                Err(e)
            }
        }
    }

    /// Start loading the following page. `None` on the last page.
    pub fn next_page(&mut self, surface: &mut dyn UiSurface) -> Option<LoadTicket> {
        let page = self.state.next_page()?;
        Some(self.begin_load(page, surface))
    }

    /// Start loading the preceding page. `None` on page 1.
    pub fn prev_page(&mut self, surface: &mut dyn UiSurface) -> Option<LoadTicket> {
        let page = self.state.prev_page()?;
        Some(self.begin_load(page, surface))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────────────────────

    /// Narrow the loaded page to `status` and redraw from page 1
    pub fn apply_filter(&mut self, status: Option<&str>, surface: &mut dyn UiSurface) {
        self.state.select_status(status);
        tracing::debug!(
            status = self.state.selected_status().unwrap_or(""),
            matches = self.state.filtered_characters().len(),
            "filter applied"
        );
        self.render(surface);
    }

    /// Clear the status select and show the whole page again
    pub fn reset_filters(&mut self, surface: &mut dyn UiSurface) {
        surface.set_status_select(None);
        self.apply_filter(None, surface);
    }

    fn render(&self, surface: &mut dyn UiSurface) {
        render_characters(surface, self.state.filtered_characters());
        update_pagination(surface, self.state.current_page(), self.state.total_pages());
    }
}
