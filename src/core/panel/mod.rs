//! # Panel Components
//!
//! View-state of the host console, one struct per visual component:
//!
//! ```text
//! StayListPanel                      owns AsyncResource<Stay>, reload()
//! └── StayCard (one per stay)
//!     ├── StayDetailModal            open/closed, no fetch
//!     ├── ReservationsModal          Option<ReservationList>
//!     │   └── ReservationList        AsyncResource<Reservation>
//!     ├── Carousel                   slide index
//!     └── RemoveStayAction           busy flag + on_remove_success
//! ```
//!
//! Children never reach into their parent. The only upward path is the
//! [`Callback`] the list hands to each `RemoveStayAction`, which produces the
//! action that reloads the list.

mod detail_modal;
mod remove_action;
mod reservations;
mod stay_card;
mod stay_list;

use std::sync::Arc;

use crate::core::action::Action;

pub use detail_modal::StayDetailModal;
pub use remove_action::{RemoveOutcome, RemoveStayAction};
pub use reservations::{ReservationList, ReservationsModal};
pub use stay_card::{Carousel, StayCard};
pub use stay_list::StayListPanel;

/// Notify-on-success hook passed down from a parent. Invoking it yields the
/// action the parent wants dispatched.
pub type Callback = Arc<dyn Fn() -> Action + Send + Sync>;
