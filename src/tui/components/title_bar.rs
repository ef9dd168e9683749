//! # TitleBar Component
//!
//! Top status bar: console title, backend, status text, and a spinner while
//! the stay list is loading.
//!
//! Stateless. Every field is a prop copied from core state each frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&app.backend_label, &app.status_message, loading, frame_no);
//! title_bar.render(frame, area);
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::spinner_glyph;
use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub backend_label: &'a str,
    pub status_message: &'a str,
    pub loading: bool,
    pub spinner_frame: usize,
}

impl<'a> TitleBar<'a> {
    pub fn new(
        backend_label: &'a str,
        status_message: &'a str,
        loading: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            backend_label,
            status_message,
            loading,
            spinner_frame,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "My Stays",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", self.backend_label),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        if self.loading {
            spans.push(Span::styled(
                format!(" {}", spinner_glyph(self.spinner_frame)),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
