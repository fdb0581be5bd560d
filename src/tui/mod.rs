pub mod app;
pub mod cards;
pub mod event;
pub mod fetch;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::route::Route;

use self::app::{Effect, TuiApp};
use self::event::{AppEvent, EventHandler};
use self::fetch::FetchMsg;

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>, config: Arc<Config>, route: Route) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, config, route).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Tui,
    ctx: Arc<AppContext>,
    config: Arc<Config>,
    route: Route,
) -> Result<()> {
    let keymap = config.keybindings.keymap();
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchMsg>();

    let mut tui_app = TuiApp::new();
    if let Some(req) = tui_app.navigate(route) {
        fetch::spawn(ctx.api.clone(), req, tx.clone());
    }

    loop {
        while let Ok(msg) = rx.try_recv() {
            tui_app.apply(msg);
        }

        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors))?;

        if let AppEvent::Key(key) = event_handler.next()? {
            tui_app.clear_status();
            match tui_app.handle(keymap.action(&key)) {
                Some(Effect::Fetch(req)) => {
                    fetch::spawn(ctx.api.clone(), req, tx.clone());
                }
                Some(Effect::OpenLink(url)) => {
                    if let Err(e) = open::that(&url) {
                        tracing::warn!("Failed to open {}: {}", url, e);
                        tui_app.set_status(format!("Failed to open browser: {}", e));
                    } else {
                        tui_app.set_status(format!("Opened {}", url));
                    }
                }
                None => {}
            }
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}
