//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::action::Action;
use crate::core::panel::Callback;
use crate::remote::{Guest, HostBackend, ImageRef, RemoteError, Reservation, Stay};

/// In-memory backend with scripted answers and call counters.
///
/// A successful delete removes the stay from the scripted list, the way a
/// real backend would.
#[derive(Default)]
pub struct ScriptedBackend {
    stays: Mutex<Vec<Stay>>,
    reservations: Mutex<HashMap<String, Vec<Reservation>>>,
    stay_error: Mutex<Option<RemoteError>>,
    reservation_error: Mutex<Option<RemoteError>>,
    delete_error: Mutex<Option<RemoteError>>,
    stay_fetches: AtomicUsize,
    reservation_fetches: AtomicUsize,
}

impl ScriptedBackend {
    pub fn with_stays(stays: Vec<Stay>) -> Self {
        let backend = Self::default();
        *backend.stays.lock().unwrap() = stays;
        backend
    }

    pub fn set_reservations(&self, stay_id: &str, rows: Vec<Reservation>) {
        self.reservations
            .lock()
            .unwrap()
            .insert(stay_id.to_string(), rows);
    }

    pub fn fail_stays(&self, error: RemoteError) {
        *self.stay_error.lock().unwrap() = Some(error);
    }

    pub fn fail_reservations(&self, error: RemoteError) {
        *self.reservation_error.lock().unwrap() = Some(error);
    }

    pub fn fail_delete(&self, error: RemoteError) {
        *self.delete_error.lock().unwrap() = Some(error);
    }

    pub fn stay_fetches(&self) -> usize {
        self.stay_fetches.load(Ordering::SeqCst)
    }

    pub fn reservation_fetches(&self) -> usize {
        self.reservation_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn list_stays_for_host(&self) -> Result<Vec<Stay>, RemoteError> {
        self.stay_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.stay_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.stays.lock().unwrap().clone())
    }

    async fn list_reservations_for_stay(
        &self,
        stay_id: &str,
    ) -> Result<Vec<Reservation>, RemoteError> {
        self.reservation_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.reservation_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .get(stay_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_stay(&self, stay_id: &str) -> Result<(), RemoteError> {
        if let Some(error) = self.delete_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.stays.lock().unwrap().retain(|s| s.id != stay_id);
        Ok(())
    }
}

pub fn stay(id: &str, name: &str, images: &[&str]) -> Stay {
    Stay {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        address: format!("{name} address"),
        guest_number: 2,
        images: images.iter().map(|&i| ImageRef::from(i)).collect(),
    }
}

pub fn reservation(id: &str, guest: &str) -> Reservation {
    Reservation {
        id: id.to_string(),
        guest: Guest {
            username: guest.to_string(),
        },
        checkin_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        checkout_date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
    }
}

pub fn noop_callback() -> Callback {
    Arc::new(|| Action::ReloadStays)
}

/// Creates a test App backed by an empty `ScriptedBackend`.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(ScriptedBackend::default()))
}
