//! Help dialog component
//!
//! Lists every keyboard shortcut of the results screen.

use crate::action::Action;
use crate::component::Component;
use crate::model::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) -> Result<()> {
        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin / 2,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content(palette);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Atalhos de teclado ")
                    .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(palette.accent))
                    .style(Style::default().bg(palette.surface)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let section_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {} ", title), section_style)));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.chars().count() + 2)),
            muted,
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", key), key_style),
            Span::styled(description.to_string(), text_style),
        ]));
    };

    add_section(&mut lines, "Páginas");
    add_shortcut(&mut lines, "n / l / →", "Próxima página");
    add_shortcut(&mut lines, "p / h / ←", "Página anterior");

    add_section(&mut lines, "Resultados");
    add_shortcut(&mut lines, "j / ↓", "Rolar para baixo");
    add_shortcut(&mut lines, "k / ↑", "Rolar para cima");

    add_section(&mut lines, "Filtros");
    add_shortcut(&mut lines, "f", "Filtrar por status");
    add_shortcut(&mut lines, "r", "Limpar filtros");

    add_section(&mut lines, "Aparência");
    add_shortcut(&mut lines, "t", "Alternar tema claro/escuro");

    add_section(&mut lines, "Geral");
    add_shortcut(&mut lines, "?", "Mostrar esta ajuda");
    add_shortcut(&mut lines, "q / Esc", "Sair");
    add_shortcut(&mut lines, "Ctrl+c", "Sair imediatamente");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Pressione q, Esc ou ? para fechar",
        muted,
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::theme::ThemeMode;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_help_lists_theme_toggle() {
        let content = build_help_content(&ThemeMode::Dark.palette());
        let text: String = content
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        assert!(text.contains("Alternar tema"));
        assert!(text.contains("Filtrar por status"));
    }

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let mut dialog = HelpDialog::default();
        for _ in 0..200 {
            dialog
                .handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE))
                .unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                dialog
                    .draw(frame, frame.area(), &ThemeMode::Light.palette())
                    .unwrap();
            })
            .unwrap();

        let total = build_help_content(&ThemeMode::Light.palette()).len();
        assert!(dialog.scroll_offset < total);
    }
}
