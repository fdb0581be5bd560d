//! The four addressable views and their paths.

use std::fmt;
use std::str::FromStr;

use crate::app::FolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Repositories,
    Articles,
    Videos,
}

impl Route {
    /// Tab order.
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Repositories,
        Route::Articles,
        Route::Videos,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Repositories => "/github",
            Route::Articles => "/medium",
            Route::Videos => "/youtube",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Route::Home => "🏠 Home",
            Route::Repositories => "💾 GitHub",
            Route::Articles => "📝 Medium",
            Route::Videos => "🎥 YouTube",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Route::Home => 0,
            Route::Repositories => 1,
            Route::Articles => 2,
            Route::Videos => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for Route {
    type Err = FolioError;

    /// Exact path match; a trailing slash is tolerated on the non-root paths.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| FolioError::UnknownRoute(s.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        assert_eq!("/youtube/".parse::<Route>().unwrap(), Route::Videos);
        assert_eq!("//".parse::<Route>().unwrap(), Route::Home);
    }

    #[test]
    fn test_unknown_paths_rejected() {
        assert!("/twitter".parse::<Route>().is_err());
        assert!("github".parse::<Route>().is_err());
        assert!("".parse::<Route>().is_err());
        assert!("/github/r1".parse::<Route>().is_err());
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Route::Videos.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::Videos);
        assert_eq!(Route::Repositories.next(), Route::Articles);
    }
}
