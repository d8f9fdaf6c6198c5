//! Status filter dialog component
//!
//! The status select: "Todos" plus every character status.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::model::character::CharacterStatus;
use crate::model::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Label of the option that clears the filter
pub const ALL_STATUSES_LABEL: &str = "Todos";

/// Status filter dialog
pub struct StatusFilterDialog {
    /// Index 0 is "Todos", then one entry per status
    pub selected_index: usize,
    /// List state for rendering
    pub list_state: ListState,
    /// Value of the status select when the dialog was opened
    pub current_filter: Option<String>,
}

impl Default for StatusFilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusFilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
            current_filter: None,
        }
    }

    /// Prepare the dialog for opening, preselecting the active status
    pub fn open(&mut self, current_filter: Option<&str>) {
        self.current_filter = current_filter.map(str::to_string);
        self.selected_index = current_filter
            .and_then(|value| {
                CharacterStatus::all()
                    .iter()
                    .position(|status| status.matches(value))
            })
            .map(|idx| idx + 1)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    /// The selected status value (None means "Todos")
    pub fn selected_status(&self) -> Option<CharacterStatus> {
        match self.selected_index {
            0 => None,
            idx => CharacterStatus::all().get(idx - 1).copied(),
        }
    }

    fn select_next(&mut self) {
        if self.selected_index < CharacterStatus::all().len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn is_current(&self, status: Option<CharacterStatus>) -> bool {
        match (status, self.current_filter.as_deref()) {
            (None, None) => true,
            (Some(status), Some(value)) => status.matches(value),
            _ => false,
        }
    }
}

impl Component for StatusFilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::ApplyFilter(
                self.selected_status()
                    .map(|status| status.as_str().to_string())
                    .unwrap_or_default(),
            )),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) -> Result<()> {
        let popup_area = centered_popup(area, 40, 14);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Options
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header_text = match self.current_filter.as_deref() {
            Some(value) => format!("Atual: {}", value),
            None => "Nenhum filtro ativo".to_string(),
        };
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(palette.accent),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.surface))
                .title(" Filtrar por status ")
                .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(header, chunks[0]);

        let options = std::iter::once(None).chain(CharacterStatus::all().into_iter().map(Some));
        let items: Vec<ListItem> = options
            .map(|status| {
                let is_current = self.is_current(status);
                let marker_style = match status {
                    Some(status) => Style::default().fg(palette.status_color(status)),
                    None => Style::default().fg(palette.accent),
                };
                let label = status.map(|s| s.as_str()).unwrap_or(ALL_STATUSES_LABEL);
                let label_style = if is_current {
                    Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.text)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(if is_current { "● " } else { "  " }, marker_style),
                    Span::styled(label, label_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .style(Style::default().bg(palette.surface)),
            )
            .highlight_style(
                Style::default()
                    .bg(palette.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(palette.accent)),
            Span::raw("Aplicar  "),
            Span::styled(" j/k ", Style::default().fg(palette.accent)),
            Span::raw("Navegar  "),
            Span::styled(" Esc ", Style::default().fg(palette.accent)),
            Span::raw("Cancelar"),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.surface)),
        );
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut StatusFilterDialog, code: KeyCode) -> Option<Action> {
        dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_enter_on_todos_clears_filter() {
        let mut dialog = StatusFilterDialog::new();
        dialog.open(None);
        assert_eq!(
            press(&mut dialog, KeyCode::Enter),
            Some(Action::ApplyFilter(String::new()))
        );
    }

    #[test]
    fn test_navigate_and_select_status() {
        let mut dialog = StatusFilterDialog::new();
        dialog.open(None);

        press(&mut dialog, KeyCode::Char('j'));
        press(&mut dialog, KeyCode::Char('j'));
        assert_eq!(dialog.selected_status(), Some(CharacterStatus::Dead));
        assert_eq!(
            press(&mut dialog, KeyCode::Enter),
            Some(Action::ApplyFilter("Dead".to_string()))
        );

        // Bounded at both ends
        for _ in 0..10 {
            press(&mut dialog, KeyCode::Down);
        }
        assert_eq!(dialog.selected_status(), Some(CharacterStatus::Unknown));
        for _ in 0..10 {
            press(&mut dialog, KeyCode::Up);
        }
        assert_eq!(dialog.selected_status(), None);
    }

    #[test]
    fn test_open_preselects_active_status() {
        let mut dialog = StatusFilterDialog::new();
        dialog.open(Some("unknown"));
        assert_eq!(dialog.selected_status(), Some(CharacterStatus::Unknown));

        dialog.open(Some("alive"));
        assert_eq!(dialog.selected_status(), Some(CharacterStatus::Alive));
    }

    #[test]
    fn test_escape_closes() {
        let mut dialog = StatusFilterDialog::new();
        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CloseModal));
    }
}
