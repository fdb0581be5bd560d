use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::route::Route;
use crate::tui::app::{ActiveView, TuiApp};
use crate::tui::cards::{self, GridLayout};
use crate::view::home::HOME_CARDS;
use crate::view::{ArticlesView, HomeView, RepositoriesView, VideosView, ViewModel};

const BRAND: &str = "VloidCloudTech";
const COPYRIGHT: &str = "© 2024 VloidCloudTech. Auto-synced via AWS Lambda.";
const PROFILE_LINKS: [&str; 4] = [
    "github.com/vloidcloudtech",
    "linkedin.com/in/jaden-walker306",
    "medium.com/@vloidcloudtech",
    "youtube.com/@JayTechLife",
];

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Routed content
            Constraint::Length(2), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app.route, chunks[0], colors);
    render_content(frame, app, chunks[1], colors);
    render_footer(frame, chunks[2], colors, Local::now());
    render_status_bar(frame, app, chunks[3], colors);
}

fn render_header(frame: &mut Frame, route: Route, area: Rect, colors: &ColorConfig) {
    let titles: Vec<Line> = Route::ALL
        .iter()
        .map(|r| Line::from(format!("{} {}", r.index() + 1, r.tab_label())))
        .collect();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", BRAND),
            Style::default()
                .fg(colors.brand)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.inactive_border));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(route.index())
        .style(Style::default().fg(colors.inactive_tab))
        .highlight_style(
            Style::default()
                .fg(colors.active_tab)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    frame.render_widget(tabs, area);
}

fn render_content(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    match &mut app.view {
        ActiveView::Home(view) => render_home(frame, view, area, colors),
        ActiveView::Repositories(view) => render_repositories(frame, view, area, colors),
        ActiveView::Articles(view) => render_articles(frame, view, area, colors),
        ActiveView::Videos(view) => render_videos(frame, view, area, colors),
    }
}

/// Splits off a two-line section header and returns the body area.
fn section(frame: &mut Frame, area: Rect, title: &str, subtitle: &str, colors: &ColorConfig) -> Rect {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    let header = Text::from(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(colors.brand)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(colors.footer),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);
    chunks[1]
}

fn render_home(frame: &mut Frame, view: &mut HomeView, area: Rect, colors: &ColorConfig) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(7),
        Constraint::Min(0),
    ])
    .split(area);

    let hero = Text::from(vec![
        Line::from(Span::styled(
            "Welcome to My Portfolio",
            Style::default()
                .fg(colors.brand)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Automatically aggregated from GitHub, Medium, and YouTube"),
    ]);
    frame.render_widget(Paragraph::new(hero).alignment(Alignment::Center), chunks[0]);

    let home_cards = HOME_CARDS
        .iter()
        .map(|card| cards::home_card(card, colors))
        .collect();
    cards::render_grid(
        frame,
        chunks[1],
        home_cards,
        GridLayout {
            columns: HomeView::COLUMNS,
            card_height: 7,
        },
        &mut view.cursor,
        colors,
    );

    let banner = Text::from(vec![
        Line::from(Span::styled(
            "Auto-Synced Every 12 Hours",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("All content is automatically fetched and updated from external platforms"),
    ]);
    frame.render_widget(
        Paragraph::new(banner)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[2],
    );
}

/// Rows `text` takes up when wrapped to `width` columns.
fn wrapped_height(text: &Text, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Draws the loading / failed / empty line for a collection that has no
/// cards to show. Returns `false` when there are cards to render instead.
fn render_placeholder<T>(
    frame: &mut Frame,
    list: &ViewModel<T>,
    resource: &str,
    area: Rect,
    colors: &ColorConfig,
) -> bool {
    let line = if list.is_loading() {
        Line::from(format!("⏳ Loading {}...", resource))
    } else if let Some(message) = list.failure() {
        Line::from(Span::styled(
            format!("⚠ Failed to load {}: {}", resource, message),
            Style::default().fg(colors.error),
        ))
    } else if list.items().is_empty() {
        Line::from(Span::styled(
            format!("No {} yet.", resource),
            Style::default().fg(colors.footer),
        ))
    } else {
        return false;
    };

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
    true
}

fn render_repositories(frame: &mut Frame, view: &mut RepositoriesView, area: Rect, colors: &ColorConfig) {
    if let Some(detail) = view.selected() {
        let text = cards::repository_detail(detail, colors);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.active_border));
        let inner = block.inner(area);
        let max_scroll = wrapped_height(&text, inner.width).saturating_sub(inner.height);
        view.clamp_detail_scroll(max_scroll);

        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((view.detail_scroll, 0));
        frame.render_widget(paragraph, area);
        return;
    }

    let body = section(
        frame,
        area,
        "GitHub Repositories",
        "Automatically synced with AI-generated summaries",
        colors,
    );
    if render_placeholder(frame, &view.list, "repositories", body, colors) {
        return;
    }

    let repo_cards = view
        .list
        .items()
        .iter()
        .map(|repo| cards::repository_card(repo, colors))
        .collect();
    cards::render_grid(
        frame,
        body,
        repo_cards,
        GridLayout {
            columns: RepositoriesView::COLUMNS,
            card_height: 6,
        },
        &mut view.cursor,
        colors,
    );
}

fn render_articles(frame: &mut Frame, view: &mut ArticlesView, area: Rect, colors: &ColorConfig) {
    let body = section(
        frame,
        area,
        "Medium Articles",
        "Latest posts from my Medium blog",
        colors,
    );
    if render_placeholder(frame, &view.list, "articles", body, colors) {
        return;
    }

    let article_cards = view
        .list
        .items()
        .iter()
        .map(|article| cards::article_card(article, colors))
        .collect();
    cards::render_grid(
        frame,
        body,
        article_cards,
        GridLayout {
            columns: ArticlesView::COLUMNS,
            card_height: 7,
        },
        &mut view.cursor,
        colors,
    );
}

fn render_videos(frame: &mut Frame, view: &mut VideosView, area: Rect, colors: &ColorConfig) {
    let body = section(
        frame,
        area,
        "YouTube Videos",
        "Latest videos from my channel",
        colors,
    );
    if render_placeholder(frame, &view.list, "videos", body, colors) {
        return;
    }

    let video_cards = view
        .list
        .items()
        .iter()
        .map(|video| cards::video_card(video, colors))
        .collect();
    cards::render_grid(
        frame,
        body,
        video_cards,
        GridLayout {
            columns: VideosView::COLUMNS,
            card_height: 8,
        },
        &mut view.cursor,
        colors,
    );
}

/// Footer timestamp. This is the render time, not a backend sync time.
pub fn last_synced_label(now: DateTime<Local>) -> String {
    format!("✓ Last synced: {}", now.format("%-m/%-d/%Y, %-I:%M:%S %p"))
}

fn render_footer(frame: &mut Frame, area: Rect, colors: &ColorConfig, now: DateTime<Local>) {
    let style = Style::default().fg(colors.footer);
    let footer = Text::from(vec![
        Line::from(Span::styled(
            format!("{}  {}", COPYRIGHT, PROFILE_LINKS.join(" · ")),
            style,
        )),
        Line::from(Span::styled(last_synced_label(now), style)),
    ]);
    frame.render_widget(Paragraph::new(footer), area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        let hint = match &app.view {
            ActiveView::Home(_) => "1-4/Tab:Switch  h/l:Move  Enter:Open  q:Quit",
            ActiveView::Repositories(view) if view.selected().is_some() => {
                "j/k:Scroll  Esc:Back  o:Open on GitHub  q:Quit"
            }
            ActiveView::Repositories(view) if view.pending().is_some() => {
                "Loading repository...  Esc:Cancel  q:Quit"
            }
            ActiveView::Repositories(_) => {
                "1-4/Tab:Switch  hjkl:Move  Enter:Details  o:Open  q:Quit"
            }
            ActiveView::Articles(_) | ActiveView::Videos(_) => {
                "1-4/Tab:Switch  hjkl:Move  Enter/o:Open in browser  q:Quit"
            }
        };
        hint.to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
