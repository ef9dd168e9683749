//! # StayGrid Component
//!
//! Responsive grid of stay cards with keyboard selection.
//!
//! Column count follows the terminal width (1, 3 or 4 columns). The grid
//! scrolls by whole rows so the selected card is always visible.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `StayGridState` lives in `TuiState`
//! - `StayGrid` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use super::stay_card::{CARD_HEIGHT, StayCardView};
use crate::core::panel::StayCard;
use crate::core::resource::Phase;
use crate::tui::component::Component;

/// Number of card columns for a given terminal width.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..70 => 1,
        70..140 => 3,
        _ => 4,
    }
}

/// Persistent selection and scroll state for the grid.
#[derive(Debug, Default)]
pub struct StayGridState {
    pub selected: usize,
    /// Column count from the last render, used for up/down movement.
    pub columns: usize,
    /// First visible row.
    pub first_row: usize,
}

impl StayGridState {
    fn columns(&self) -> usize {
        self.columns.max(1)
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= self.columns() {
            self.selected -= self.columns();
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + self.columns() < len {
            self.selected += self.columns();
        }
    }

    /// Adjusts `first_row` so the selected row is inside `visible_rows`.
    fn scroll_to_selected(&mut self, visible_rows: usize) {
        let row = self.selected / self.columns();
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + visible_rows {
            self.first_row = row + 1 - visible_rows;
        }
    }
}

pub struct StayGrid<'a> {
    cards: &'a [StayCard],
    phase: Phase,
    state: &'a mut StayGridState,
    confirm_remove: Option<&'a str>,
}

impl<'a> StayGrid<'a> {
    pub fn new(
        cards: &'a [StayCard],
        phase: Phase,
        state: &'a mut StayGridState,
        confirm_remove: Option<&'a str>,
    ) -> Self {
        Self {
            cards,
            phase,
            state,
            confirm_remove,
        }
    }

    fn empty_text(&self) -> &'static str {
        match self.phase {
            Phase::Idle | Phase::Loading => "Loading stays...",
            Phase::Ready => "No stays yet.",
            Phase::Failed => "No stays to show. Press Ctrl+R to retry.",
        }
    }
}

impl Component for StayGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.cards.is_empty() {
            let empty = Paragraph::new(self.empty_text())
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let columns = grid_columns(area.width);
        self.state.columns = columns;
        self.state.clamp(self.cards.len());

        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        self.state.scroll_to_selected(visible_rows);

        let card_width = area.width / columns as u16;
        let first = self.state.first_row * columns;
        let last = (first + visible_rows * columns).min(self.cards.len());

        for (index, card) in self.cards.iter().enumerate().take(last).skip(first) {
            let slot = index - first;
            let rect = Rect {
                x: area.x + (slot % columns) as u16 * card_width,
                y: area.y + (slot / columns) as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            }
            .intersection(area);

            let confirm = self.confirm_remove == Some(card.id());
            StayCardView::new(card, index == self.state.selected, confirm).render(frame, rect);
        }
    }
}
