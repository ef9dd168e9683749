//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the console,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each pass: draw if needed, wait for a key, drain every pending key, then
//! drain settlements sent back by effect tasks. Every `Effect` returned by
//! `update()` is handed to `spawn_effect`; its result comes back through the
//! channel as another `Action`, so state is only ever touched on this loop.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (a fetch in flight, or toasts on screen): draws every
//!   ~80ms so spinners move and toasts expire on time.
//! - **Idle**: sleeps up to 500ms, only redraws on events or settlements.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::effects::spawn_effect;
use crate::core::state::App;
use crate::remote::{HostBackend, HttpBackend};
use crate::tui::components::StayGridState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core view-state)
#[derive(Debug, Default)]
pub struct TuiState {
    pub grid: StayGridState,
    /// Stay armed for removal by a first `d` press.
    pub confirm_remove: Option<String>,
    /// First visible row of the open reservations dialog.
    pub reservations_offset: usize,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Build the HTTP backend from a resolved config.
pub fn build_backend(config: &ResolvedConfig) -> std::io::Result<Arc<dyn HostBackend>> {
    if config.auth_token.is_none() {
        warn!("No auth token configured; backend calls will fail until one is set");
    }
    let backend = HttpBackend::new(
        config.base_url.clone(),
        config.auth_token.clone(),
        config.request_timeout,
    )
    .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(Arc::new(backend))
}

/// Translate a key into an action, given what is on screen.
///
/// An open dialog captures every key. Otherwise keys drive the grid and act
/// on the selected card.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if let Some(card) = app.panel.open_modal_card() {
        let stay_id = card.id().to_string();
        if card.reservations.is_open() {
            return match event {
                TuiEvent::Escape | TuiEvent::InputChar('q') | TuiEvent::InputChar('r') => {
                    Some(Action::CloseReservations(stay_id))
                }
                TuiEvent::CursorUp => {
                    tui.reservations_offset = tui.reservations_offset.saturating_sub(1);
                    None
                }
                TuiEvent::CursorDown => {
                    tui.reservations_offset += 1;
                    None
                }
                _ => None,
            };
        }
        return match event {
            TuiEvent::Escape
            | TuiEvent::Submit
            | TuiEvent::InputChar('q')
            | TuiEvent::InputChar('i') => Some(Action::CloseDetails(stay_id)),
            _ => None,
        };
    }

    let cards = app.panel.cards();
    tui.grid.clamp(cards.len());
    let selected = cards.get(tui.grid.selected).map(|c| c.id().to_string());

    // Any key other than a second `d` disarms a pending removal.
    let armed = tui.confirm_remove.take();

    match event {
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::Reload => Some(Action::ReloadStays),
        TuiEvent::CursorLeft => {
            tui.grid.move_left();
            None
        }
        TuiEvent::CursorRight => {
            tui.grid.move_right(cards.len());
            None
        }
        TuiEvent::CursorUp => {
            tui.grid.move_up();
            None
        }
        TuiEvent::CursorDown => {
            tui.grid.move_down(cards.len());
            None
        }
        TuiEvent::Submit | TuiEvent::InputChar('i') => selected.map(Action::OpenDetails),
        TuiEvent::InputChar('r') => {
            tui.reservations_offset = 0;
            selected.map(Action::OpenReservations)
        }
        TuiEvent::InputChar(',') => selected.map(Action::CarouselPrev),
        TuiEvent::InputChar('.') => selected.map(Action::CarouselNext),
        TuiEvent::InputChar('d') => {
            let stay_id = selected?;
            if armed.as_deref() == Some(stay_id.as_str()) {
                Some(Action::RemoveStay(stay_id))
            } else {
                tui.confirm_remove = Some(stay_id);
                None
            }
        }
        _ => None,
    }
}

/// Apply an action and start whatever effect it asks for.
/// Returns true when the console should exit.
fn dispatch(
    app: &mut App,
    action: Action,
    tx: &mpsc::Sender<Action>,
    in_flight: &mut Vec<tokio::task::AbortHandle>,
) -> bool {
    let effect = update(app, action);
    if effect == Effect::Quit {
        return true;
    }
    if let Some(handle) = spawn_effect(effect, app.backend.clone(), tx.clone()) {
        in_flight.push(handle);
    }
    false
}

fn is_animating(app: &App) -> bool {
    let reservations_loading = app
        .panel
        .open_modal_card()
        .and_then(|card| card.reservations.list())
        .is_some_and(|list| list.is_loading());
    app.panel.is_loading() || reservations_loading || !app.notices.is_empty()
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = build_backend(&config)?;
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::try_init()?;
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for settlements from effect tasks
    let (tx, rx) = mpsc::channel();
    let mut in_flight: Vec<tokio::task::AbortHandle> = Vec::new();

    dispatch(&mut app, Action::Mount, &tx, &mut in_flight);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.notices.prune(Instant::now()) {
            needs_redraw = true;
        }
        in_flight.retain(|handle| !handle.is_finished());

        let animating = is_animating(&app);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&app, &mut tui, &event) {
                debug!("Key produced {:?}", action);
                if dispatch(&mut app, action, &tx, &mut in_flight) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }

        // Settlements from effect tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx, &mut in_flight) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down with {} requests in flight", in_flight.len());
    for handle in in_flight {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}
