//! # Notice Stack
//!
//! Transient toasts in the top-right corner, newest at the bottom.
//! Red for failures, green for confirmations.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::core::notice::{Notice, NoticeKind};
use crate::tui::component::Component;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub struct NoticeStack<'a> {
    notices: Vec<&'a Notice>,
}

impl<'a> NoticeStack<'a> {
    pub fn new(notices: impl IntoIterator<Item = &'a Notice>) -> Self {
        Self {
            notices: notices.into_iter().collect(),
        }
    }
}

fn color_for(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::FetchError | NoticeKind::MutationError => Color::Red,
        NoticeKind::Info => Color::Green,
    }
}

impl Component for NoticeStack<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = TOAST_WIDTH.min(area.width);
        let capacity = usize::from(area.height / TOAST_HEIGHT);
        // Keep the newest notices when the screen is short.
        let skip = self.notices.len().saturating_sub(capacity);

        for (slot, notice) in self.notices.iter().skip(skip).enumerate() {
            let rect = Rect {
                x: area.x + area.width - width,
                y: area.y + slot as u16 * TOAST_HEIGHT,
                width,
                height: TOAST_HEIGHT,
            };
            let color = color_for(notice.kind);
            let toast = Paragraph::new(notice.text.as_str())
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                );
            frame.render_widget(Clear, rect);
            frame.render_widget(toast, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notice::NoticeBoard;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    #[test]
    fn renders_active_notice_text() {
        let now = Instant::now();
        let mut board = NoticeBoard::default();
        board.push_at(
            NoticeKind::MutationError,
            "cannot delete: has active reservations",
            now,
        );

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|f| NoticeStack::new(board.active(now)).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("cannot delete: has active reservations"));
    }

    #[test]
    fn short_screen_keeps_newest() {
        let now = Instant::now();
        let mut board = NoticeBoard::default();
        board.push_at(NoticeKind::Info, "first", now);
        board.push_at(NoticeKind::Info, "second", now);

        let mut terminal = Terminal::new(TestBackend::new(80, TOAST_HEIGHT)).unwrap();
        terminal
            .draw(|f| NoticeStack::new(board.active(now)).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("second"));
        assert!(!text.contains("first"));
    }
}
