use log::debug;

use crate::core::resource::{AsyncResource, Phase, Settlement, Ticket};
use crate::remote::{RemoteError, Reservation};

/// Reservations of one stay, fetched once per instance.
#[derive(Debug, Default)]
pub struct ReservationList {
    rows: AsyncResource<Reservation>,
}

impl ReservationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) -> Ticket {
        self.rows.begin()
    }

    /// Rows in the order the backend returned them.
    pub fn rows(&self) -> &[Reservation] {
        self.rows.value()
    }

    pub fn phase(&self) -> Phase {
        self.rows.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.rows.is_loading()
    }

    pub fn settle(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Reservation>, RemoteError>,
    ) -> Settlement {
        self.rows.settle(ticket, result)
    }
}

/// Dialog hosting a [`ReservationList`].
///
/// The list only exists while the dialog is open. Closing drops it, and
/// opening builds a new one, so every view starts a fresh fetch and any
/// fetch still in flight at close time has nowhere to land.
#[derive(Debug)]
pub struct ReservationsModal {
    stay_id: String,
    content: Option<ReservationList>,
}

impl ReservationsModal {
    pub fn new(stay_id: impl Into<String>) -> Self {
        Self {
            stay_id: stay_id.into(),
            content: None,
        }
    }

    /// Opens the dialog and returns the ticket of its fetch. Opening an
    /// already open dialog does nothing.
    pub fn open(&mut self) -> Option<Ticket> {
        if self.content.is_some() {
            return None;
        }
        let mut list = ReservationList::new();
        let ticket = list.mount();
        self.content = Some(list);
        Some(ticket)
    }

    pub fn close(&mut self) {
        if let Some(list) = self.content.take()
            && list.is_loading()
        {
            debug!(
                "Reservations dialog for stay {} closed with a fetch in flight",
                self.stay_id
            );
        }
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn list(&self) -> Option<&ReservationList> {
        self.content.as_ref()
    }

    pub fn settle(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Reservation>, RemoteError>,
    ) -> Settlement {
        match self.content.as_mut() {
            Some(list) => list.settle(ticket, result),
            None => {
                debug!(
                    "Discarding reservations for stay {}: dialog closed",
                    self.stay_id
                );
                Settlement::Discarded
            }
        }
    }
}
