//! Per-route view models.
//!
//! Each view is constructed fresh when its route is mounted and fetches its
//! collection exactly once. Results carry the [`Ticket`] issued when the
//! request started; only the most recently issued ticket may commit, so a late
//! answer to a superseded request never overwrites newer state.

pub mod articles;
pub mod cursor;
pub mod home;
pub mod repositories;
pub mod videos;

pub use articles::ArticlesView;
pub use cursor::{Cursor, Movement};
pub use home::HomeView;
pub use repositories::RepositoriesView;
pub use videos::VideosView;

use crate::app::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    /// Holds the error message for display; the collection is empty.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Issues request tickets; only the latest one is current.
#[derive(Debug, Default)]
pub struct Tickets {
    latest: u64,
}

impl Tickets {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Retire every outstanding ticket.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Loading state plus the fetched collection for one view instance.
#[derive(Debug)]
pub struct ViewModel<T> {
    status: LoadStatus,
    items: Vec<T>,
    tickets: Tickets,
}

impl<T> Default for ViewModel<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::Idle,
            items: Vec::new(),
            tickets: Tickets::default(),
        }
    }
}

impl<T> ViewModel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Ticket {
        self.status = LoadStatus::Loading;
        self.tickets.issue()
    }

    /// Store a fetch result. Failures are logged once and leave the
    /// collection empty. Returns `false` if the ticket was stale and the
    /// result was dropped.
    pub fn commit(&mut self, ticket: Ticket, result: Result<Vec<T>>, resource: &str) -> bool {
        if !self.tickets.is_current(ticket) {
            tracing::debug!("Dropping stale {} result", resource);
            return false;
        }

        match result {
            Ok(items) => {
                tracing::info!("Loaded {} {}", items.len(), resource);
                self.items = items;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::error!("Error fetching {}: {}", resource, e);
                self.items.clear();
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Idle | LoadStatus::Loading)
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}
