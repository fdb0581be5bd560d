use crate::app::Result;
use crate::domain::{RepositoryDetail, RepositorySummary};
use crate::view::{Cursor, Movement, Ticket, Tickets, ViewModel};

/// `/github`: a grid of repository cards, replaced by a detail panel once a
/// repository has been opened.
#[derive(Debug, Default)]
pub struct RepositoriesView {
    pub list: ViewModel<RepositorySummary>,
    pub cursor: Cursor,
    pub detail_scroll: u16,
    selected: Option<RepositoryDetail>,
    // Id of the detail request in flight, if any
    pending: Option<String>,
    detail_tickets: Tickets,
}

impl RepositoriesView {
    pub const COLUMNS: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) -> Ticket {
        self.list.begin()
    }

    pub fn commit_list(&mut self, ticket: Ticket, result: Result<Vec<RepositorySummary>>) {
        if self.list.commit(ticket, result, "repositories") {
            self.cursor.clamp(self.list.items().len());
        }
    }

    /// Start loading the highlighted repository. Returns the id to fetch, or
    /// `None` when the detail panel is already showing, that repository is
    /// already loading, or the grid is empty.
    pub fn open_highlighted(&mut self) -> Option<(Ticket, String)> {
        if self.selected.is_some() {
            return None;
        }
        let id = self.highlighted()?.repo_id.clone();
        if self.pending.as_deref() == Some(id.as_str()) {
            return None;
        }
        let ticket = self.detail_tickets.issue();
        self.pending = Some(id.clone());
        Some((ticket, id))
    }

    /// Store a detail result if it answers the most recent request.
    pub fn commit_detail(&mut self, ticket: Ticket, result: Result<RepositoryDetail>) -> bool {
        if !self.detail_tickets.is_current(ticket) {
            tracing::debug!("Dropping superseded repository detail");
            return false;
        }
        let id = self.pending.take().unwrap_or_default();

        match result {
            Ok(detail) => {
                tracing::info!("Loaded repository {}", detail.summary.repo_id);
                self.selected = Some(detail);
                self.detail_scroll = 0;
            }
            Err(e) => {
                tracing::error!("Error fetching repository {}: {}", id, e);
            }
        }
        true
    }

    /// Leave the detail panel (or abandon a pending open) and show the grid
    /// again. The list is not refetched.
    pub fn back(&mut self) -> bool {
        if self.selected.take().is_some() {
            self.detail_scroll = 0;
            return true;
        }
        if self.pending.take().is_some() {
            self.detail_tickets.invalidate();
            return true;
        }
        false
    }

    pub fn move_cursor(&mut self, movement: Movement) {
        if self.selected.is_some() {
            self.detail_scroll = match movement {
                Movement::Up | Movement::Left => self.detail_scroll.saturating_sub(1),
                Movement::Down | Movement::Right => self.detail_scroll.saturating_add(1),
                Movement::PageUp => self.detail_scroll.saturating_sub(10),
                Movement::PageDown => self.detail_scroll.saturating_add(10),
            };
        } else {
            self.cursor
                .apply(movement, self.list.items().len(), Self::COLUMNS);
        }
    }

    /// Keep the detail panel from scrolling past its last line.
    pub fn clamp_detail_scroll(&mut self, max: u16) {
        self.detail_scroll = self.detail_scroll.min(max);
    }

    pub fn highlighted(&self) -> Option<&RepositorySummary> {
        self.list.items().get(self.cursor.index())
    }

    pub fn selected(&self) -> Option<&RepositoryDetail> {
        self.selected.as_ref()
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        match &self.selected {
            Some(detail) => detail.summary.url.as_deref(),
            None => self.highlighted().and_then(|repo| repo.url.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FolioError;
    use serde_json::json;

    fn summary(id: &str) -> RepositorySummary {
        serde_json::from_value(json!({"repo_id": id, "name": id})).unwrap()
    }

    fn detail(id: &str) -> RepositoryDetail {
        serde_json::from_value(json!({"repo_id": id, "name": id, "detailed_summary": "long"}))
            .unwrap()
    }

    fn loaded(ids: &[&str]) -> RepositoriesView {
        let mut view = RepositoriesView::new();
        let ticket = view.mount();
        view.commit_list(ticket, Ok(ids.iter().map(|id| summary(id)).collect()));
        view
    }

    #[test]
    fn test_open_highlighted_uses_cursor() {
        let mut view = loaded(&["r1", "r2"]);
        view.move_cursor(Movement::Right);
        let (_, id) = view.open_highlighted().unwrap();
        assert_eq!(id, "r2");
        assert_eq!(view.pending(), Some("r2"));
    }

    #[test]
    fn test_open_on_empty_grid_does_nothing() {
        let mut view = loaded(&[]);
        assert!(view.open_highlighted().is_none());
    }

    #[test]
    fn test_last_request_wins() {
        let mut view = loaded(&["r1", "r2"]);
        let (first, _) = view.open_highlighted().unwrap();
        view.move_cursor(Movement::Right);
        let (second, _) = view.open_highlighted().unwrap();

        assert!(view.commit_detail(second, Ok(detail("r2"))));
        assert!(!view.commit_detail(first, Ok(detail("r1"))));
        assert_eq!(view.selected().unwrap().summary.repo_id, "r2");
    }

    #[test]
    fn test_failed_detail_keeps_grid() {
        let mut view = loaded(&["r1"]);
        let (ticket, _) = view.open_highlighted().unwrap();
        view.commit_detail(ticket, Err(FolioError::Network("boom".into())));
        assert!(view.selected().is_none());
        assert!(view.pending().is_none());
        assert_eq!(view.list.items().len(), 1);
    }

    #[test]
    fn test_back_from_pending_discards_late_detail() {
        let mut view = loaded(&["r1"]);
        let (ticket, _) = view.open_highlighted().unwrap();
        assert!(view.back());
        assert!(!view.commit_detail(ticket, Ok(detail("r1"))));
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_back_from_detail_keeps_list() {
        let mut view = loaded(&["r1", "r2"]);
        let (ticket, _) = view.open_highlighted().unwrap();
        view.commit_detail(ticket, Ok(detail("r1")));
        view.move_cursor(Movement::Down);
        assert_eq!(view.detail_scroll, 1);

        assert!(view.back());
        assert!(view.selected().is_none());
        assert_eq!(view.detail_scroll, 0);
        assert_eq!(view.list.items().len(), 2);
        assert!(!view.back());
    }

    #[test]
    fn test_open_same_card_twice_while_pending() {
        let mut view = loaded(&["r1", "r2"]);
        assert!(view.open_highlighted().is_some());
        assert!(view.open_highlighted().is_none());
        assert_eq!(view.pending(), Some("r1"));

        view.move_cursor(Movement::Right);
        let (_, id) = view.open_highlighted().unwrap();
        assert_eq!(id, "r2");
    }

    #[test]
    fn test_detail_scroll_is_clamped() {
        let mut view = loaded(&["r1"]);
        let (ticket, _) = view.open_highlighted().unwrap();
        view.commit_detail(ticket, Ok(detail("r1")));
        for _ in 0..5 {
            view.move_cursor(Movement::PageDown);
        }
        view.clamp_detail_scroll(7);
        assert_eq!(view.detail_scroll, 7);
        view.move_cursor(Movement::Up);
        assert_eq!(view.detail_scroll, 6);
    }
}
