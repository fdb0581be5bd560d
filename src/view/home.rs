use crate::route::Route;
use crate::view::{Cursor, Movement};

pub struct HomeCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub link: &'static str,
    pub route: Route,
}

pub const HOME_CARDS: [HomeCard; 3] = [
    HomeCard {
        icon: "💾",
        title: "GitHub Projects",
        blurb: "AI-powered summaries of my repositories and code contributions",
        link: "View Projects →",
        route: Route::Repositories,
    },
    HomeCard {
        icon: "📝",
        title: "Medium Articles",
        blurb: "Latest technical articles and blog posts from Medium",
        link: "Read Articles →",
        route: Route::Articles,
    },
    HomeCard {
        icon: "🎥",
        title: "YouTube Videos",
        blurb: "Educational content and tutorials from my channel",
        link: "Watch Videos →",
        route: Route::Videos,
    },
];

/// The landing view. Static: it never fetches.
#[derive(Debug, Default)]
pub struct HomeView {
    pub cursor: Cursor,
}

impl HomeView {
    pub const COLUMNS: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_cursor(&mut self, movement: Movement) {
        self.cursor.apply(movement, HOME_CARDS.len(), Self::COLUMNS);
    }

    /// Route linked from the highlighted card.
    pub fn target(&self) -> Route {
        HOME_CARDS[self.cursor.index().min(HOME_CARDS.len() - 1)].route
    }
}
