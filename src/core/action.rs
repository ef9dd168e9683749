//! # Actions
//!
//! Everything that can happen in the console becomes an `Action`.
//! Host presses `r` on a card? That's `Action::OpenReservations(id)`.
//! The backend answers? That's `Action::ReservationsSettled { .. }`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! event loop should perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch and delete failures are caught here and turned into notices. They
//! never travel further up.

use log::{debug, info};

use crate::core::notice::NoticeKind;
use crate::core::panel::RemoveOutcome;
use crate::core::resource::{Settlement, Ticket};
use crate::core::state::App;
use crate::remote::{RemoteError, Reservation, Stay};

#[derive(Debug)]
pub enum Action {
    /// The console was mounted; load the host's stays.
    Mount,
    ReloadStays,
    StaysSettled {
        ticket: Ticket,
        result: Result<Vec<Stay>, RemoteError>,
    },
    OpenDetails(String),
    CloseDetails(String),
    OpenReservations(String),
    CloseReservations(String),
    ReservationsSettled {
        stay_id: String,
        ticket: Ticket,
        result: Result<Vec<Reservation>, RemoteError>,
    },
    CarouselPrev(String),
    CarouselNext(String),
    RemoveStay(String),
    RemoveSettled {
        stay_id: String,
        result: Result<(), RemoteError>,
    },
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchStays(Ticket),
    FetchReservations { stay_id: String, ticket: Ticket },
    DeleteStay { stay_id: String },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => {
            app.status_message = String::from("Loading stays...");
            Effect::FetchStays(app.panel.mount())
        }
        Action::ReloadStays => {
            app.status_message = String::from("Refreshing...");
            Effect::FetchStays(app.panel.reload())
        }
        Action::StaysSettled { ticket, result } => {
            match app.panel.settle(ticket, result) {
                Settlement::Applied => {
                    app.status_message = match app.panel.cards().len() {
                        1 => String::from("1 stay"),
                        n => format!("{n} stays"),
                    };
                }
                Settlement::Failed(message) => {
                    app.status_message.clear();
                    app.notices.push(NoticeKind::FetchError, message);
                }
                Settlement::Discarded => {}
            }
            Effect::None
        }
        Action::OpenDetails(stay_id) => {
            if let Some(card) = app.panel.card_mut(&stay_id) {
                card.details.open();
            }
            Effect::None
        }
        Action::CloseDetails(stay_id) => {
            if let Some(card) = app.panel.card_mut(&stay_id) {
                card.details.close();
            }
            Effect::None
        }
        Action::OpenReservations(stay_id) => {
            match app
                .panel
                .card_mut(&stay_id)
                .and_then(|card| card.reservations.open())
            {
                Some(ticket) => Effect::FetchReservations { stay_id, ticket },
                None => Effect::None,
            }
        }
        Action::CloseReservations(stay_id) => {
            if let Some(card) = app.panel.card_mut(&stay_id) {
                card.reservations.close();
            }
            Effect::None
        }
        Action::ReservationsSettled {
            stay_id,
            ticket,
            result,
        } => {
            let settlement = match app.panel.card_mut(&stay_id) {
                Some(card) => card.reservations.settle(ticket, result),
                None => Settlement::Discarded,
            };
            if let Settlement::Failed(message) = settlement {
                app.notices.push(NoticeKind::FetchError, message);
            }
            Effect::None
        }
        Action::CarouselPrev(stay_id) => {
            if let Some(card) = app.panel.card_mut(&stay_id) {
                let slides = card.slide_count();
                card.carousel.prev(slides);
            }
            Effect::None
        }
        Action::CarouselNext(stay_id) => {
            if let Some(card) = app.panel.card_mut(&stay_id) {
                let slides = card.slide_count();
                card.carousel.next(slides);
            }
            Effect::None
        }
        Action::RemoveStay(stay_id) => match app.panel.card_mut(&stay_id) {
            Some(card) => {
                if card.remove.activate() {
                    Effect::DeleteStay { stay_id }
                } else {
                    Effect::None
                }
            }
            None => Effect::None,
        },
        Action::RemoveSettled { stay_id, result } => {
            let Some(card) = app.panel.card_mut(&stay_id) else {
                debug!("Delete result for stay {} arrived after its card left", stay_id);
                if let Err(e) = result {
                    app.notices.push(NoticeKind::MutationError, e.message());
                }
                return Effect::None;
            };
            let name = card.stay().name.clone();
            match card.remove.settle(result) {
                RemoveOutcome::Removed(next) => {
                    info!("Stay {} removed, dispatching {:?}", stay_id, next);
                    app.notices.push(NoticeKind::Info, format!("Removed \"{name}\""));
                    update(app, next)
                }
                RemoveOutcome::Failed(message) => {
                    app.notices.push(NoticeKind::MutationError, message);
                    Effect::None
                }
                RemoveOutcome::Ignored => Effect::None,
            }
        }
        Action::Quit => Effect::Quit,
    }
}
