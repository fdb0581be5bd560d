use crate::app::Result;
use crate::domain::Article;
use crate::view::{Cursor, Movement, Ticket, ViewModel};

/// `/medium`: an ordered list of article cards.
#[derive(Debug, Default)]
pub struct ArticlesView {
    pub list: ViewModel<Article>,
    pub cursor: Cursor,
}

impl ArticlesView {
    pub const COLUMNS: usize = 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) -> Ticket {
        self.list.begin()
    }

    pub fn commit(&mut self, ticket: Ticket, result: Result<Vec<Article>>) {
        if self.list.commit(ticket, result, "articles") {
            self.cursor.clamp(self.list.items().len());
        }
    }

    pub fn move_cursor(&mut self, movement: Movement) {
        self.cursor
            .apply(movement, self.list.items().len(), Self::COLUMNS);
    }

    pub fn selected(&self) -> Option<&Article> {
        self.list.items().get(self.cursor.index())
    }

    pub fn link(&self) -> Option<&str> {
        self.selected().and_then(|article| article.url.as_deref())
    }
}
