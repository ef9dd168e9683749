pub mod backend;
pub mod http;
pub mod types;

pub use backend::{HostBackend, RemoteError};
pub use http::HttpBackend;
pub use types::{Guest, ImageRef, Reservation, Stay};
