//! # Async Resource
//!
//! One remote-fetch-and-render cycle with a loading/error lifecycle:
//!
//! ```text
//!   Idle ──begin()──▶ Loading ──settle(Ok)──▶ Ready
//!                        ▲    └─settle(Err)─▶ Failed
//!                        └──────reload()──────┘
//! ```
//!
//! `value` is never cleared while loading or after a failure, so stale data
//! stays on screen until a newer fetch succeeds.
//!
//! Every fetch is named by a [`Ticket`]. Only the ticket issued most recently
//! by the same instance may settle it. A settlement carrying an older ticket,
//! or a ticket from an instance that has since been dropped and rebuilt, is
//! discarded.

use log::debug;
use uuid::Uuid;

use crate::remote::RemoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Names one fetch of one resource instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    instance: Uuid,
    generation: u64,
}

/// What `settle()` did with a settled fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The result replaced `value`.
    Applied,
    /// The fetch failed; the message should be surfaced as a notice.
    Failed(String),
    /// The ticket was stale and the state was left untouched.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct AsyncResource<T> {
    instance: Uuid,
    generation: u64,
    phase: Phase,
    value: Vec<T>,
    error: Option<String>,
}

impl<T> Default for AsyncResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsyncResource<T> {
    pub fn new() -> Self {
        Self {
            instance: Uuid::new_v4(),
            generation: 0,
            phase: Phase::Idle,
            value: Vec::new(),
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self) -> &[T] {
        &self.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Starts a fetch. Called on mount.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.phase = Phase::Loading;
        Ticket {
            instance: self.instance,
            generation: self.generation,
        }
    }

    /// Re-runs the mount sequence. Supersedes any fetch still in flight.
    pub fn reload(&mut self) -> Ticket {
        self.begin()
    }

    /// True if `ticket` names the fetch this instance is waiting on.
    pub fn accepts(&self, ticket: Ticket) -> bool {
        ticket.instance == self.instance
            && ticket.generation == self.generation
            && self.phase == Phase::Loading
    }

    pub fn settle(&mut self, ticket: Ticket, result: Result<Vec<T>, RemoteError>) -> Settlement {
        if !self.accepts(ticket) {
            debug!(
                "Discarding stale settlement (generation {} of {}, current {})",
                ticket.generation, ticket.instance, self.generation
            );
            return Settlement::Discarded;
        }

        match result {
            Ok(value) => {
                self.value = value;
                self.error = None;
                self.phase = Phase::Ready;
                Settlement::Applied
            }
            Err(e) => {
                let message = e.message().to_string();
                self.error = Some(message.clone());
                self.phase = Phase::Failed;
                Settlement::Failed(message)
            }
        }
    }
}
