//! Runs the effects `update()` asks for.
//!
//! Each effect becomes one backend call on a tokio task. The task sends the
//! settlement back as an `Action`; all state changes stay on the event loop.

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};

use crate::core::action::{Action, Effect};
use crate::remote::HostBackend;

/// Performs `effect` and returns the action that settles it.
/// `Effect::None` and `Effect::Quit` need no I/O and return `None`.
pub async fn run_effect(effect: Effect, backend: &dyn HostBackend) -> Option<Action> {
    match effect {
        Effect::None | Effect::Quit => None,
        Effect::FetchStays(ticket) => {
            debug!("Fetching stays via {}", backend.name());
            let result = backend.list_stays_for_host().await;
            Some(Action::StaysSettled { ticket, result })
        }
        Effect::FetchReservations { stay_id, ticket } => {
            debug!("Fetching reservations for stay {}", stay_id);
            let result = backend.list_reservations_for_stay(&stay_id).await;
            Some(Action::ReservationsSettled {
                stay_id,
                ticket,
                result,
            })
        }
        Effect::DeleteStay { stay_id } => {
            let result = backend.delete_stay(&stay_id).await;
            Some(Action::RemoveSettled { stay_id, result })
        }
    }
}

/// Spawns `effect` on the tokio runtime. Returns `None` when there is
/// nothing to run.
pub fn spawn_effect(
    effect: Effect,
    backend: Arc<dyn HostBackend>,
    tx: mpsc::Sender<Action>,
) -> Option<tokio::task::AbortHandle> {
    if matches!(effect, Effect::None | Effect::Quit) {
        return None;
    }
    info!("Spawning effect: {:?}", effect);

    let handle = tokio::spawn(async move {
        if let Some(action) = run_effect(effect, backend.as_ref()).await
            && tx.send(action).is_err()
        {
            warn!("Failed to deliver settlement: receiver dropped");
        }
    });
    Some(handle.abort_handle())
}
