//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! Page state lives in the Controller and theme state in the ThemeController;
//! App only routes Actions between them and the screen.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, HelpDialog, HomeComponent, QuitDialog, ResultsComponent, StatusFilterDialog,
};
use crate::controller::{Controller, LoadOutcome, LoadTicket};
use crate::model::modal::{Modal, ModalStack};
use crate::model::view_state::LoadPhase;
use crate::model::surface::{Surface, UiSurface};
use crate::model::theme::Palette;
use crate::services::{CharacterSource, FetchCompletion, FetchRunner, PreferenceStore, ThemeController};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

/// Main application state - coordinates between components
pub struct App {
    /// Screen model every render writes into
    pub surface: Surface,

    /// Page loading and filtering
    pub controller: Controller,

    /// Light/dark preference
    pub theme: ThemeController,

    /// Runs page requests in the background
    pub fetch_runner: FetchRunner,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub results: ResultsComponent,
    pub quit_dialog: QuitDialog,
    pub status_filter_dialog: StatusFilterDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    pub fn new(source: Arc<dyn CharacterSource>, preferences: Box<dyn PreferenceStore>) -> App {
        App {
            surface: Surface::new(),
            controller: Controller::new(),
            theme: ThemeController::new(preferences),
            fetch_runner: FetchRunner::new(source),
            modals: ModalStack::new(),
            should_quit: false,
            home: HomeComponent::new(),
            results: ResultsComponent::new(),
            quit_dialog: QuitDialog,
            status_filter_dialog: StatusFilterDialog::new(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Startup: restore the theme, then request the first page.
    ///
    /// Must be called from within the tokio runtime.
    pub fn init(&mut self, prefers_dark: bool) {
        let mode = self.theme.load_theme(&mut self.surface, prefers_dark);
        tracing::info!(theme = %mode, "starting up");
        let ticket = self.controller.begin_load(1, &mut self.surface);
        self.spawn_fetch(ticket);
    }

    /// Palette of the theme currently on screen
    pub fn palette(&self) -> Palette {
        self.surface.theme.palette()
    }

    fn spawn_fetch(&mut self, ticket: LoadTicket) {
        tracing::debug!(page = ticket.page, id = ticket.id, "requesting page");
        self.fetch_runner.spawn(ticket);
    }

    fn handle_fetch_completed(&mut self, completion: FetchCompletion) {
        match self
            .controller
            .finish_load(completion.ticket, completion.result, &mut self.surface)
        {
            Ok(LoadOutcome::Applied) => self.results.scroll_to_top(),
            Ok(LoadOutcome::Stale) => {}
            Err(e) => {
                tracing::debug!(page = completion.ticket.page, error = %e, "page load failed");
            }
        }
    }

    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::StatusFilter => self.status_filter_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(modal) => self.handle_modal_key_event(modal, key),
            None => self.home.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.controller.state().phase == LoadPhase::Loading {
                    self.home.tick();
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::FetchCompleted(completion) => self.handle_fetch_completed(completion),

            // ─────────────────────────────────────────────────────────────────
            // Pagination
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => {
                if let Some(ticket) = self.controller.next_page(&mut self.surface) {
                    self.spawn_fetch(ticket);
                }
            }
            Action::PrevPage => {
                if let Some(ticket) = self.controller.prev_page(&mut self.surface) {
                    self.spawn_fetch(ticket);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp => {
                self.results.update(Action::ScrollUp)?;
            }
            Action::ScrollDown => {
                self.results.update(Action::ScrollDown)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Status Filter
            // ─────────────────────────────────────────────────────────────────
            Action::OpenStatusFilter => {
                let current = self.surface.status_select();
                self.status_filter_dialog.open(current.as_deref());
                self.modals.push(Modal::StatusFilter);
            }
            Action::ApplyFilter(value) => {
                self.surface.set_status_select(Some(value.as_str()));
                // The controller reads the select back, as a change event would
                let selected = self.surface.status_select();
                self.controller
                    .apply_filter(selected.as_deref(), &mut self.surface);
                self.results.scroll_to_top();
                if self.modals.top() == Some(Modal::StatusFilter) {
                    self.modals.pop();
                }
            }
            Action::ResetFilters => {
                self.controller.reset_filters(&mut self.surface);
                self.results.scroll_to_top();
            }

            // ─────────────────────────────────────────────────────────────────
            // Theme
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleTheme => {
                self.theme.toggle_theme(&mut self.surface);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            // Selection already moved inside the dialog
            Action::ModalUp | Action::ModalDown => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) -> Result<()> {
        draw_home_screen(frame, area, &self.home, &mut self.results, &self.surface)?;

        for modal in self.modals.iter() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area, palette)?,
                Modal::StatusFilter => self.status_filter_dialog.draw(frame, area, palette)?,
                Modal::Help => self.help_dialog.draw(frame, area, palette)?,
            }
        }
        Ok(())
    }
}
