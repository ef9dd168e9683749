//! # TUI Components
//!
//! All UI components for the terminal console.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as borrowed props:
//! - `TitleBar`: Top status bar with loading spinner
//! - `StayCardView`: One stay card (title, carousel, remove control)
//! - `DetailModal`: Stay details overlay
//! - `NoticeStack`: Transient notification toasts
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! - `StayGrid`: wraps `&mut StayGridState` (selection, scroll)
//! - `ReservationsModalView`: wraps a scroll offset kept in `TuiState`
//!
//! View-state that matters beyond a frame (dialog visibility, fetch phase,
//! busy flags) lives in `core::panel`. Components only read it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                 (this file, shared helpers)
//! ├── title_bar.rs
//! ├── stay_grid.rs
//! ├── stay_card.rs
//! ├── detail_modal.rs
//! ├── reservations_modal.rs
//! └── notice_stack.rs
//! ```

pub mod detail_modal;
pub mod notice_stack;
pub mod reservations_modal;
pub mod stay_card;
pub mod stay_grid;
pub mod title_bar;

pub use detail_modal::DetailModal;
pub use notice_stack::NoticeStack;
pub use reservations_modal::ReservationsModalView;
pub use stay_grid::{StayGrid, StayGridState};
pub use title_bar::TitleBar;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

/// Cuts `s` to at most `max_width` display columns, ending in "…" if cut.
pub fn ellipsize(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Flattens a buffer into one string, row by row.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
