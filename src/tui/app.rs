use crate::route::Route;
use crate::tui::event::Action;
use crate::tui::fetch::{FetchMsg, FetchRequest, MountId, Payload, Request};
use crate::view::{ArticlesView, HomeView, Movement, RepositoriesView, VideosView};

/// The view instance bound to the current route.
#[derive(Debug)]
pub enum ActiveView {
    Home(HomeView),
    Repositories(RepositoriesView),
    Articles(ArticlesView),
    Videos(VideosView),
}

impl ActiveView {
    fn move_cursor(&mut self, movement: Movement) {
        match self {
            ActiveView::Home(view) => view.move_cursor(movement),
            ActiveView::Repositories(view) => view.move_cursor(movement),
            ActiveView::Articles(view) => view.move_cursor(movement),
            ActiveView::Videos(view) => view.move_cursor(movement),
        }
    }

    fn link(&self) -> Option<&str> {
        match self {
            ActiveView::Home(_) => None,
            ActiveView::Repositories(view) => view.link(),
            ActiveView::Articles(view) => view.link(),
            ActiveView::Videos(view) => view.link(),
        }
    }
}

/// Side effects the run loop carries out on behalf of the app state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchRequest),
    OpenLink(String),
}

pub struct TuiApp {
    pub route: Route,
    pub view: ActiveView,
    pub should_quit: bool,
    pub status_message: Option<String>,
    mount: MountId,
    mounts: u64,
}

impl TuiApp {
    /// Starts on the home view, which needs no fetch.
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            view: ActiveView::Home(HomeView::new()),
            should_quit: false,
            status_message: None,
            mount: MountId(0),
            mounts: 0,
        }
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    /// Mount a fresh instance of the view for `route`, discarding the
    /// previous one. Returns the fetch the new view needs, if any.
    pub fn navigate(&mut self, route: Route) -> Option<FetchRequest> {
        self.mounts += 1;
        self.mount = MountId(self.mounts);
        self.route = route;
        self.status_message = None;
        tracing::info!("Navigated to {}", route);

        let (view, fetch) = match route {
            Route::Home => (ActiveView::Home(HomeView::new()), None),
            Route::Repositories => {
                let mut view = RepositoriesView::new();
                let ticket = view.mount();
                (
                    ActiveView::Repositories(view),
                    Some((ticket, Request::Repositories)),
                )
            }
            Route::Articles => {
                let mut view = ArticlesView::new();
                let ticket = view.mount();
                (ActiveView::Articles(view), Some((ticket, Request::Articles)))
            }
            Route::Videos => {
                let mut view = VideosView::new();
                let ticket = view.mount();
                (ActiveView::Videos(view), Some((ticket, Request::Videos)))
            }
        };

        self.view = view;
        fetch.map(|(ticket, request)| FetchRequest {
            mount: self.mount,
            ticket,
            request,
        })
    }

    /// Deliver a finished fetch. Results for a view that is no longer mounted
    /// are dropped.
    pub fn apply(&mut self, msg: FetchMsg) {
        if msg.mount != self.mount {
            tracing::debug!("Dropping result for unmounted view {:?}", msg.mount);
            return;
        }

        match (&mut self.view, msg.payload) {
            (ActiveView::Repositories(view), Payload::Repositories(result)) => {
                view.commit_list(msg.ticket, result)
            }
            (ActiveView::Repositories(view), Payload::Repository(result)) => {
                view.commit_detail(msg.ticket, result);
            }
            (ActiveView::Articles(view), Payload::Articles(result)) => {
                view.commit(msg.ticket, result)
            }
            (ActiveView::Videos(view), Payload::Videos(result)) => view.commit(msg.ticket, result),
            (_, payload) => {
                tracing::warn!("Payload does not match view on {}: {:?}", self.route, payload)
            }
        }
    }

    pub fn handle(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::MoveUp => self.move_cursor(Movement::Up),
            Action::MoveDown => self.move_cursor(Movement::Down),
            Action::MoveLeft => self.move_cursor(Movement::Left),
            Action::MoveRight => self.move_cursor(Movement::Right),
            Action::NextPage => self.move_cursor(Movement::PageDown),
            Action::PrevPage => self.move_cursor(Movement::PageUp),
            Action::NextTab => self.navigate(self.route.next()).map(Effect::Fetch),
            Action::PrevTab => self.navigate(self.route.prev()).map(Effect::Fetch),
            Action::GoHome => self.navigate(Route::Home).map(Effect::Fetch),
            Action::GoRepositories => self.navigate(Route::Repositories).map(Effect::Fetch),
            Action::GoArticles => self.navigate(Route::Articles).map(Effect::Fetch),
            Action::GoVideos => self.navigate(Route::Videos).map(Effect::Fetch),
            Action::Select => self.select(),
            Action::Back => {
                if let ActiveView::Repositories(view) = &mut self.view {
                    view.back();
                }
                None
            }
            Action::OpenInBrowser => self.view.link().map(|url| Effect::OpenLink(url.to_string())),
            Action::None => None,
        }
    }

    fn move_cursor(&mut self, movement: Movement) -> Option<Effect> {
        self.view.move_cursor(movement);
        None
    }

    fn select(&mut self) -> Option<Effect> {
        match &mut self.view {
            ActiveView::Home(view) => {
                let target = view.target();
                self.navigate(target).map(Effect::Fetch)
            }
            ActiveView::Repositories(view) => {
                let (ticket, id) = view.open_highlighted()?;
                Some(Effect::Fetch(FetchRequest {
                    mount: self.mount,
                    ticket,
                    request: Request::Repository(id),
                }))
            }
            ActiveView::Articles(view) => view.link().map(|url| Effect::OpenLink(url.to_string())),
            ActiveView::Videos(view) => view.link().map(|url| Effect::OpenLink(url.to_string())),
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
