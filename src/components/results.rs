//! Results grid - draws the character cards held by the surface
//!
//! Cards are laid out in as many columns as the terminal width allows and
//! scrolled a row at a time.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{card_columns, card_row_cells, CARD_HEIGHT};
use crate::model::surface::{CharacterCard, ResultNode};
use crate::model::theme::Palette;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[derive(Default)]
pub struct ResultsComponent {
    /// First visible card row
    pub scroll_row: usize,
    /// Card rows in the last drawn result set
    total_rows: usize,
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results were replaced; start from the top again
    pub fn scroll_to_top(&mut self) {
        self.scroll_row = 0;
    }

    pub fn draw_with_results(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        nodes: &[ResultNode],
        palette: &Palette,
    ) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.background))
            .title(" Personagens ")
            .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cards: Vec<&CharacterCard> = nodes
            .iter()
            .filter_map(|n| match n {
                ResultNode::Card(card) => Some(card),
                ResultNode::Placeholder(_) => None,
            })
            .collect();

        if cards.is_empty() {
            self.total_rows = 0;
            self.scroll_row = 0;
            let message = nodes.iter().find_map(|n| match n {
                ResultNode::Placeholder(text) => Some(text.as_str()),
                ResultNode::Card(_) => None,
            });
            if let Some(message) = message {
                draw_placeholder(frame, inner, message, palette);
            }
            return Ok(());
        }

        let columns = card_columns(inner.width);
        let visible_rows = ((inner.height / CARD_HEIGHT) as usize).max(1);
        self.total_rows = cards.len().div_ceil(columns);

        let max_scroll = self.total_rows.saturating_sub(visible_rows);
        if self.scroll_row > max_scroll {
            self.scroll_row = max_scroll;
        }

        for (visible_index, row_cards) in cards
            .chunks(columns)
            .skip(self.scroll_row)
            .take(visible_rows)
            .enumerate()
        {
            let row_area = Rect::new(
                inner.x,
                inner.y + visible_index as u16 * CARD_HEIGHT,
                inner.width,
                CARD_HEIGHT.min(inner.height.saturating_sub(visible_index as u16 * CARD_HEIGHT)),
            );
            for (card, cell) in row_cards.iter().zip(card_row_cells(row_area, columns)) {
                draw_card(frame, cell, card, palette);
            }
        }

        if self.total_rows > visible_rows {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_row);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

impl Component for ResultsComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => {
                if self.scroll_row + 1 < self.total_rows {
                    self.scroll_row += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll_row = self.scroll_row.saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect, _palette: &Palette) -> Result<()> {
        // Needs the surface's nodes, see draw_with_results
        Ok(())
    }
}

/// Draw one card: image, name, status, species, location
fn draw_card(frame: &mut Frame, area: Rect, card: &CharacterCard, palette: &Palette) {
    let width = area.width.saturating_sub(2) as usize;

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&format!("▣ {}", card.image_url), width),
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            truncate_to_width(&card.name, width),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(palette.status_color(card.status))),
            Span::styled(
                truncate_to_width(&card.status_text, width.saturating_sub(2)),
                Style::default().fg(palette.text),
            ),
        ]),
        Line::from(Span::styled(
            truncate_to_width(&card.species_text, width),
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            truncate_to_width(&card.location_text, width),
            Style::default().fg(palette.muted),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_placeholder(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let top_padding = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(palette.muted),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
