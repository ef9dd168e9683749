//! # Application State
//!
//! Core state of the console. No TUI-specific types live here; grid
//! selection and scroll offsets belong to the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn HostBackend>   // remote collaborators
//! ├── panel: StayListPanel            // stays, cards, dialogs
//! ├── notices: NoticeBoard            // transient notifications
//! ├── status_message: String          // status bar text
//! └── backend_label: String           // shown in the title bar
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::notice::NoticeBoard;
use crate::core::panel::StayListPanel;
use crate::remote::HostBackend;

pub struct App {
    pub backend: Arc<dyn HostBackend>,
    pub panel: StayListPanel,
    pub notices: NoticeBoard,
    pub status_message: String,
    pub backend_label: String,
}

impl App {
    pub fn new(backend: Arc<dyn HostBackend>) -> Self {
        let backend_label = backend.name().to_string();
        Self {
            backend,
            panel: StayListPanel::new(),
            notices: NoticeBoard::default(),
            status_message: String::new(),
            backend_label,
        }
    }

    pub fn from_config(backend: Arc<dyn HostBackend>, config: &ResolvedConfig) -> Self {
        Self {
            notices: NoticeBoard::new(config.notice_ttl),
            backend_label: config.base_url.clone(),
            ..Self::new(backend)
        }
    }
}
