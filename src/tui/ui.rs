use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    DetailModal, NoticeStack, ReservationsModalView, StayGrid, TitleBar,
};

const HELP_TEXT: &str =
    " ←↑↓→ Select  i Details  r Reservations  , . Photos  d Remove  Ctrl+R Reload  q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        &app.backend_label,
        &app.status_message,
        app.panel.is_loading(),
        tui.spinner_frame,
    )
    .render(frame, title_area);

    StayGrid::new(
        app.panel.cards(),
        app.panel.phase(),
        &mut tui.grid,
        tui.confirm_remove.as_deref(),
    )
    .render(frame, main_area);

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(card) = app.panel.open_modal_card() {
        if let Some(list) = card.reservations.list() {
            ReservationsModalView::new(
                &card.stay().name,
                list,
                &mut tui.reservations_offset,
                tui.spinner_frame,
            )
            .render(frame, main_area);
        } else if card.details.is_open() {
            DetailModal::new(card.stay()).render(frame, main_area);
        }
    }

    NoticeStack::new(app.notices.active(Instant::now())).render(frame, main_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Effect, update};
    use crate::test_support::{stay, test_app};
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn mount(app: &mut App, stays: Vec<crate::remote::Stay>) {
        let Effect::FetchStays(ticket) = update(app, Action::Mount) else {
            panic!("mount must fetch stays");
        };
        update(app, Action::StaysSettled { ticket, result: Ok(stays) });
    }

    #[test]
    fn test_draw_ui_before_load() {
        let app = test_app();
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("My Stays"));
        assert!(text.contains("Loading stays..."));
    }

    #[test]
    fn test_draw_ui_loft_card() {
        let mut app = test_app();
        mount(&mut app, vec![stay("s1", "Loft", &["a.jpg"])]);
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Loft"));
        assert!(text.contains("1/1 a.jpg"));
        assert!(text.contains("1 stay"));
    }

    #[test]
    fn test_draw_ui_details_overlay() {
        let mut app = test_app();
        mount(&mut app, vec![stay("s1", "Loft", &[])]);
        update(&mut app, Action::OpenDetails("s1".into()));
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Address: Loft address"));
    }

    #[test]
    fn test_draw_ui_reservations_overlay_while_loading() {
        let mut app = test_app();
        mount(&mut app, vec![stay("s1", "Loft", &[])]);
        update(&mut app, Action::OpenReservations("s1".into()));
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Reservations of Loft"));
        assert!(text.contains("Loading reservations..."));
    }

    #[test]
    fn test_draw_ui_shows_notice() {
        let mut app = test_app();
        app.notices
            .push(crate::core::notice::NoticeKind::FetchError, "Fail to get stay list");
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Fail to get stay list"));
    }
}
