//! # Core Application Logic
//!
//! This module contains the console's view-state logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. I/O only via    │
//!                    │  effects.rs             │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   remote   │
//!             │  Adapter   │          │ (backend)  │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`resource`]: The fetch/loading/display lifecycle shared by lists
//! - [`panel`]: Stay list, cards, dialogs, and the remove control
//! - [`effects`]: Runs backend calls and turns results into actions
//! - [`notice`]: Transient notifications
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod effects;
pub mod notice;
pub mod panel;
pub mod resource;
pub mod state;
