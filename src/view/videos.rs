use crate::app::Result;
use crate::domain::Video;
use crate::view::{Cursor, Movement, Ticket, ViewModel};

/// `/youtube`: a three-column grid of video cards.
#[derive(Debug, Default)]
pub struct VideosView {
    pub list: ViewModel<Video>,
    pub cursor: Cursor,
}

impl VideosView {
    pub const COLUMNS: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) -> Ticket {
        self.list.begin()
    }

    pub fn commit(&mut self, ticket: Ticket, result: Result<Vec<Video>>) {
        if self.list.commit(ticket, result, "videos") {
            self.cursor.clamp(self.list.items().len());
        }
    }

    pub fn move_cursor(&mut self, movement: Movement) {
        self.cursor
            .apply(movement, self.list.items().len(), Self::COLUMNS);
    }

    pub fn selected(&self) -> Option<&Video> {
        self.list.items().get(self.cursor.index())
    }

    pub fn link(&self) -> Option<&str> {
        self.selected().and_then(|video| video.url.as_deref())
    }
}
