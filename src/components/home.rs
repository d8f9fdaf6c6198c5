//! Home component - the results screen
//!
//! Displays the header with the theme icon, the error banner, the card
//! grid, the pagination bar and the help bar. Maps key presses on this
//! screen to Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_main_layout, centered_popup};
use crate::components::ResultsComponent;
use crate::model::surface::Surface;
use crate::model::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Home component for the main results view
#[derive(Default)]
pub struct HomeComponent {
    /// Advances on every tick while loading
    pub spinner_frame: usize,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Pagination
            KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextPage),
            KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevPage),

            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),

            // Filters
            KeyCode::Char('f') => Some(Action::OpenStatusFilter),
            KeyCode::Char('r') => Some(Action::ResetFilters),

            // Theme
            KeyCode::Char('t') => Some(Action::ToggleTheme),

            // Modals
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect, _palette: &Palette) -> Result<()> {
        // Drawing is done through draw_home_screen which takes the surface
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the results screen from the current surface
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    results: &mut ResultsComponent,
    surface: &Surface,
) -> Result<()> {
    let palette = surface.theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let layout = calculate_main_layout(area, surface.error.is_some());

    render_header(frame, layout.header, surface, &palette);
    if let (Some(error_area), Some(message)) = (layout.error, surface.error.as_deref()) {
        render_error_banner(frame, error_area, message, &palette);
    }
    results.draw_with_results(frame, layout.results, &surface.results, &palette)?;
    render_pagination(frame, layout.pagination, surface, &palette);
    render_help_bar(frame, layout.help, &palette);

    if surface.loading {
        render_loading(frame, layout.results, home.spinner(), &palette);
    }

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, surface: &Surface, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Rick and Morty",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · personagens", Style::default().fg(palette.muted)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(title, chunks[0]);

    let filter_label = surface.status_select.as_deref().unwrap_or("Todos");
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Status: ", Style::default().fg(palette.muted)),
        Span::styled(
            filter_label.to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::raw(surface.theme_icon),
    ]))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(controls, chunks[1]);
}

fn render_error_banner(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let banner = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(palette.error),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.error))
            .title(" Erro ")
            .title_style(Style::default().fg(palette.error).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(banner, area);
}

fn render_pagination(frame: &mut Frame, area: Rect, surface: &Surface, palette: &Palette) {
    let button = |label: &'static str, disabled: bool| {
        let style = if disabled {
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        button("◀ Anterior", surface.prev_disabled),
        Span::raw("    "),
        Span::styled(
            surface.page_info.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        button("Próxima ▶", surface.next_disabled),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, palette: &Palette) {
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    };

    let help = Paragraph::new(Line::from(vec![
        key(" ←/→ "),
        Span::raw("Página  "),
        key(" f "),
        Span::raw("Filtrar  "),
        key(" r "),
        Span::raw("Limpar  "),
        key(" t "),
        Span::raw("Tema  "),
        key(" ? "),
        Span::raw("Ajuda  "),
        key(" q "),
        Span::raw("Sair"),
    ]))
    .style(Style::default().fg(palette.muted));
    frame.render_widget(help, area);
}

fn render_loading(frame: &mut Frame, area: Rect, spinner: &str, palette: &Palette) {
    let popup = centered_popup(area, 28, 3);
    frame.render_widget(Clear, popup);

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(spinner.to_string(), Style::default().fg(palette.accent)),
        Span::raw(" Carregando..."),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.surface)),
    );
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::surface::UiSurface;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw(surface: &Surface) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let home = HomeComponent::new();
        let mut results = ResultsComponent::new();
        terminal
            .draw(|frame| {
                draw_home_screen(frame, frame.area(), &home, &mut results, surface).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_key_mapping() {
        let mut home = HomeComponent::new();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Right)).unwrap(),
            Some(Action::NextPage)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('p'))).unwrap(),
            Some(Action::PrevPage)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('t'))).unwrap(),
            Some(Action::ToggleTheme)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('r'))).unwrap(),
            Some(Action::ResetFilters)
        );
        assert_eq!(home.handle_key_event(key(KeyCode::Char('x'))).unwrap(), None);
    }

    #[test]
    fn test_spinner_wraps() {
        let mut home = HomeComponent::new();
        for _ in 0..SPINNER_FRAMES.len() {
            home.tick();
        }
        assert_eq!(home.spinner_frame, 0);
    }

    #[test]
    fn test_screen_shows_page_info_and_error() {
        let mut surface = Surface::new();
        surface.set_page_info("Página 1 de 42".to_string());
        surface.show_error("Erro ao carregar personagens: offline");

        let text = draw(&surface);
        assert!(text.contains("1 de 42"));
        assert!(text.contains("Erro ao carregar personagens: offline"));
    }

    #[test]
    fn test_screen_shows_loading_indicator() {
        let mut surface = Surface::new();
        assert!(!draw(&surface).contains("Carregando"));

        surface.set_loading(true);
        assert!(draw(&surface).contains("Carregando"));
    }
}
