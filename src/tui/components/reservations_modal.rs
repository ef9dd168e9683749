//! # Reservations Modal
//!
//! Overlay listing the reservations of one stay: guest, check-in and
//! check-out, one row per reservation in backend order. A spinner sits in
//! the title while the fetch is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Row, Table};

use super::{centered_rect, spinner_glyph};
use crate::core::panel::ReservationList;
use crate::tui::component::Component;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct ReservationsModalView<'a> {
    stay_name: &'a str,
    list: &'a ReservationList,
    /// First visible row; clamped during render.
    offset: &'a mut usize,
    spinner_frame: usize,
}

impl<'a> ReservationsModalView<'a> {
    pub fn new(
        stay_name: &'a str,
        list: &'a ReservationList,
        offset: &'a mut usize,
        spinner_frame: usize,
    ) -> Self {
        Self {
            stay_name,
            list,
            offset,
            spinner_frame,
        }
    }
}

impl Component for ReservationsModalView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);
        frame.render_widget(Clear, overlay);

        let mut title = format!(" Reservations of {} ", self.stay_name);
        if self.list.is_loading() {
            title.push_str(spinner_glyph(self.spinner_frame));
            title.push(' ');
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Scroll  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let rows = self.list.rows();
        if rows.is_empty() {
            let text = if self.list.is_loading() {
                "Loading reservations..."
            } else {
                "No reservations."
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        *self.offset = (*self.offset).min(rows.len() - 1);

        let header = Row::new(vec!["Guest", "Check-in", "Check-out"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let body: Vec<Row> = rows
            .iter()
            .skip(*self.offset)
            .map(|r| {
                Row::new(vec![
                    r.guest.username.clone(),
                    r.checkin_date.format(DATE_FORMAT).to_string(),
                    r.checkout_date.format(DATE_FORMAT).to_string(),
                ])
            })
            .collect();

        let table = Table::new(
            body,
            [
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ],
        )
        .header(header)
        .block(block);

        frame.render_widget(table, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::reservation;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(list: &ReservationList, offset: &mut usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| ReservationsModalView::new("Loft", list, offset, 0).render(f, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn loading_list_shows_spinner_and_placeholder() {
        let mut list = ReservationList::new();
        list.mount();
        let text = render(&list, &mut 0);
        assert!(text.contains("Reservations of Loft"));
        assert!(text.contains(spinner_glyph(0)));
        assert!(text.contains("Loading reservations..."));
    }

    #[test]
    fn rows_render_in_backend_order() {
        let mut list = ReservationList::new();
        let ticket = list.mount();
        list.settle(ticket, Ok(vec![reservation("r2", "zoe"), reservation("r1", "ana")]));

        let text = render(&list, &mut 0);
        assert!(text.contains("Check-in"));
        assert!(text.contains("2024-05-01"));
        assert!(text.find("zoe").unwrap() < text.find("ana").unwrap());
        assert!(!text.contains(spinner_glyph(0)));
    }

    #[test]
    fn failed_fetch_shows_no_rows() {
        let mut list = ReservationList::new();
        let ticket = list.mount();
        list.settle(ticket, Err(crate::remote::RemoteError::Network("down".into())));
        let text = render(&list, &mut 0);
        assert!(text.contains("No reservations."));
    }

    #[test]
    fn offset_is_clamped_to_rows() {
        let mut list = ReservationList::new();
        let ticket = list.mount();
        list.settle(ticket, Ok(vec![reservation("r1", "ana")]));
        let mut offset = 7;
        let text = render(&list, &mut offset);
        assert_eq!(offset, 0);
        assert!(text.contains("ana"));
    }
}
