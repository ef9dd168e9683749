//! Transient notifications.
//!
//! Failures never propagate past the component that hit them. They end up
//! here as a short-lived notice and expire on their own.

use std::time::{Duration, Instant};

pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Listing stays or reservations failed.
    FetchError,
    /// Removing a stay failed.
    MutationError,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    raised_at: Instant,
}

#[derive(Debug)]
pub struct NoticeBoard {
    ttl: Duration,
    notices: Vec<Notice>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            notices: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.push_at(kind, text, Instant::now());
    }

    pub fn push_at(&mut self, kind: NoticeKind, text: impl Into<String>, now: Instant) {
        self.notices.push(Notice {
            kind,
            text: text.into(),
            raised_at: now,
        });
    }

    /// Notices still visible at `now`, oldest first.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.notices
            .iter()
            .filter(move |n| now.duration_since(n.raised_at) < self.ttl)
    }

    /// Drops expired notices. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.notices.len();
        let ttl = self.ttl;
        self.notices
            .retain(|n| now.duration_since(n.raised_at) < ttl);
        self.notices.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Every notice raised and not yet pruned, oldest first.
    pub fn all(&self) -> &[Notice] {
        &self.notices
    }
}
