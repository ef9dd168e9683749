//! # Detail Modal
//!
//! Read-only overlay with a stay's description, address and guest capacity.
//! Renders data the card already holds; nothing is fetched.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use super::centered_rect;
use crate::remote::Stay;
use crate::tui::component::Component;

pub struct DetailModal<'a> {
    stay: &'a Stay,
}

impl<'a> DetailModal<'a> {
    pub fn new(stay: &'a Stay) -> Self {
        Self { stay }
    }
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

impl Component for DetailModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 50, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.stay.name))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let lines = vec![
            field("Description", self.stay.description.clone()),
            Line::default(),
            field("Address", self.stay.address.clone()),
            Line::default(),
            field("Guest Number", self.stay.guest_number.to_string()),
        ];

        let body = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(body, overlay);
    }
}
