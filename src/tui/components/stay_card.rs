//! # StayCard Component
//!
//! One card in the stay grid:
//!
//! ```text
//! ┌ Seaside Loft wi… [i] ─────┐
//! │ ◀ 1/3 front.jpg ▶         │
//! │                           │
//! │ r Reservations  d Remove  │
//! └───────────────────────────┘
//! ```
//!
//! The title is cut with an ellipsis at [`TITLE_MAX_WIDTH`] columns, the
//! width the card gives a name regardless of terminal size.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use super::ellipsize;
use crate::core::panel::StayCard;
use crate::tui::component::Component;

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 5;
/// Widest a stay name is allowed to render before it is ellipsized.
pub const TITLE_MAX_WIDTH: usize = 18;

pub struct StayCardView<'a> {
    pub card: &'a StayCard,
    pub selected: bool,
    pub confirm_remove: bool,
}

impl<'a> StayCardView<'a> {
    pub fn new(card: &'a StayCard, selected: bool, confirm_remove: bool) -> Self {
        Self {
            card,
            selected,
            confirm_remove,
        }
    }

    fn carousel_line(&self) -> Line<'a> {
        let images = &self.card.stay().images;
        match self.card.carousel.current(images.len()) {
            Some(index) => Line::from(vec![
                Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{}/{} ", index + 1, images.len())),
                Span::styled(
                    images[index].file_name().to_string(),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            ]),
            None => Line::default(),
        }
    }

    fn action_line(&self) -> Line<'a> {
        let remove = &self.card.remove;
        if remove.is_busy() || remove.is_awaiting_refresh() {
            return Line::styled(
                "Removing...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            );
        }
        if self.confirm_remove {
            return Line::styled(
                "Press d again to remove",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
        }
        Line::styled(
            "r Reservations  d Remove",
            Style::default().fg(Color::DarkGray),
        )
    }
}

impl Component for StayCardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = Line::from(vec![
            Span::styled(
                format!(" {}", ellipsize(&self.card.stay().name, TITLE_MAX_WIDTH)),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" [i] ", Style::default().fg(Color::Blue)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
            .padding(Padding::horizontal(1));

        let body = Paragraph::new(vec![
            self.carousel_line(),
            Line::default(),
            self.action_line(),
        ])
        .block(block);

        frame.render_widget(body, area);
    }
}
