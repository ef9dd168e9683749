use std::fmt;

use async_trait::async_trait;

use super::types::{Reservation, Stay};

/// Errors returned by the remote collaborators.
///
/// Every variant carries a human-readable message. The console shows that
/// message verbatim as a transient notice; no other part of the error is
/// consumed by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Backend misconfigured or the host is not signed in.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The backend rejected the request.
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
}

impl RemoteError {
    /// The text shown to the host.
    pub fn message(&self) -> &str {
        match self {
            RemoteError::Config(msg)
            | RemoteError::Network(msg)
            | RemoteError::Parse(msg)
            | RemoteError::Api { message: msg, .. } => msg,
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Config(msg) => write!(f, "config error: {msg}"),
            RemoteError::Network(msg) => write!(f, "network error: {msg}"),
            RemoteError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            RemoteError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Data access used by the console.
///
/// Implementations own transport concerns, timeouts included.
#[async_trait]
pub trait HostBackend: Send + Sync {
    /// Returns the name of the backend, for logs.
    fn name(&self) -> &str;

    /// All stays owned by the signed-in host, in backend order.
    async fn list_stays_for_host(&self) -> Result<Vec<Stay>, RemoteError>;

    /// Reservations booked against one stay, in backend order.
    async fn list_reservations_for_stay(
        &self,
        stay_id: &str,
    ) -> Result<Vec<Reservation>, RemoteError>;

    /// Removes a stay. Fails if the backend refuses (active reservations,
    /// not found, unauthorized).
    async fn delete_stay(&self, stay_id: &str) -> Result<(), RemoteError>;
}
