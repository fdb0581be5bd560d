//! Card content for each resource and the grid they are laid out in.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::article::format_local_date;
use crate::domain::{Article, RepositoryDetail, RepositorySummary, Video};
use crate::view::home::HomeCard;
use crate::view::{truncate_chars, Cursor};

const DESCRIPTION_CHARS: usize = 100;
const EXCERPT_CHARS: usize = 240;
const VIDEO_DESCRIPTION_CHARS: usize = 80;

pub struct Card {
    pub title: String,
    pub lines: Vec<Line<'static>>,
}

#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub columns: usize,
    /// Including borders.
    pub card_height: u16,
}

pub fn home_card(card: &HomeCard, colors: &ColorConfig) -> Card {
    Card {
        title: format!("{} {}", card.icon, card.title),
        lines: vec![
            Line::from(card.blurb),
            Line::from(""),
            Line::from(Span::styled(card.link, Style::default().fg(colors.link))),
        ],
    }
}

fn badge(label: &str, colors: &ColorConfig) -> Span<'static> {
    Span::styled(
        format!(" {} ", label),
        Style::default().fg(colors.badge_fg).bg(colors.badge_bg),
    )
}

pub fn repository_card(repo: &RepositorySummary, colors: &ColorConfig) -> Card {
    let meta = Style::default().fg(colors.metadata);
    Card {
        title: format!("💾 {}", repo.name),
        lines: vec![
            Line::from(vec![
                badge(repo.display_language(), colors),
                Span::raw("  "),
                Span::styled(format!("⭐ {}", repo.stars), meta),
                Span::raw("  "),
                Span::styled(format!("🔀 {}", repo.forks), meta),
            ]),
            Line::from(Span::styled(
                format!("\"{}\"", repo.high_level_summary),
                Style::default()
                    .fg(colors.summary)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(truncate_chars(&repo.description, DESCRIPTION_CHARS)),
            Line::from(Span::styled("View details →", Style::default().fg(colors.link))),
        ],
    }
}

pub fn article_card(article: &Article, colors: &ColorConfig) -> Card {
    Card {
        title: article.title.clone(),
        lines: vec![
            Line::from(Span::styled(
                format!(
                    "📅 {}   ⏱️ {}   👏 {} claps",
                    article.display_date(),
                    article.read_time,
                    article.claps
                ),
                Style::default().fg(colors.metadata),
            )),
            Line::from(truncate_chars(&article.excerpt, EXCERPT_CHARS)),
            Line::from(Span::styled(
                "Read on Medium →",
                Style::default().fg(colors.link),
            )),
        ],
    }
}

pub fn video_card(video: &Video, colors: &ColorConfig) -> Card {
    let thumbnail = video.thumbnail_url.as_deref().unwrap_or("(no thumbnail)");
    Card {
        title: video.title.clone(),
        lines: vec![
            Line::from(vec![
                Span::styled(format!("🖼 {}", thumbnail), Style::default().fg(colors.footer)),
            ]),
            Line::from(vec![badge(&format!("▶ {}", video.duration), colors)]),
            Line::from(truncate_chars(&video.description, VIDEO_DESCRIPTION_CHARS)),
            Line::from(Span::styled(
                format!(
                    "👁️ {} views   📅 {}",
                    video.views,
                    format_local_date(&video.published_date)
                ),
                Style::default().fg(colors.metadata),
            )),
            Line::from(Span::styled(
                "Watch on YouTube →",
                Style::default().fg(colors.link),
            )),
        ],
    }
}

/// Full repository panel shown in place of the grid.
pub fn repository_detail(detail: &RepositoryDetail, colors: &ColorConfig) -> Text<'static> {
    let repo = &detail.summary;
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let ai_badge = || Span::styled(" AI Generated ", Style::default().fg(colors.badge_fg).bg(colors.summary));

    let mut lines = vec![
        Line::from(Span::styled(
            "← Back to repositories",
            Style::default().fg(colors.link),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(repo.name.clone(), heading.fg(colors.brand)),
            Span::raw("  "),
            badge(detail.display_language(), colors),
        ]),
        Line::from(repo.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "⭐ {} stars   🔀 {} forks   🕐 Updated {}",
                repo.stars,
                repo.forks,
                repo.updated_at.as_deref().unwrap_or("unknown")
            ),
            Style::default().fg(colors.metadata),
        )),
    ];
    if let Some(url) = &repo.url {
        lines.push(Line::from(Span::styled(
            url.clone(),
            Style::default().fg(colors.link),
        )));
    }
    lines.extend([
        Line::from(""),
        Line::from(vec![
            Span::styled("💡 High-Level Summary  ", heading),
            ai_badge(),
        ]),
        Line::from(repo.high_level_summary.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("📄 Detailed Summary  ", heading),
            ai_badge(),
        ]),
    ]);
    lines.extend(
        detail
            .detailed_summary
            .lines()
            .map(|line| Line::from(line.to_string())),
    );

    Text::from(lines)
}

/// Lay `cards` out row by row, scrolling so the cursor's card stays visible.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    cards: Vec<Card>,
    grid: GridLayout,
    cursor: &mut Cursor,
    colors: &ColorConfig,
) {
    let columns = grid.columns.max(1);
    let visible_rows = (area.height / grid.card_height.max(1)).max(1) as usize;
    cursor.scroll_into_view(columns, visible_rows);

    let rows = Layout::vertical(vec![Constraint::Length(grid.card_height); visible_rows]).split(area);
    let start = cursor.first_row() * columns;

    for (index, card) in cards
        .into_iter()
        .enumerate()
        .skip(start)
        .take(visible_rows * columns)
    {
        let offset = index - start;
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(rows[offset / columns]);
        render_card(frame, cells[offset % columns], card, index == cursor.index(), colors);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: Card, selected: bool, colors: &ColorConfig) {
    let (border, title) = if selected {
        (
            Style::default().fg(colors.active_border),
            Style::default()
                .fg(colors.active_border)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(colors.inactive_border),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", card.title), title))
        .borders(Borders::ALL)
        .border_style(border);

    let paragraph = Paragraph::new(Text::from(card.lines))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_repository_card_shows_badge_and_counts() {
        let repo: RepositorySummary = serde_json::from_value(json!({
            "repo_id": "r1", "name": "demo", "language": "Go",
            "stars": 10, "forks": 2, "description": "x", "high_level_summary": "y"
        }))
        .unwrap();
        let card = repository_card(&repo, &ColorConfig::default());

        assert_eq!(card.title, "💾 demo");
        let stats = text(&card.lines[0]);
        assert!(stats.contains(" Go "));
        assert!(stats.contains("⭐ 10"));
        assert!(stats.contains("🔀 2"));
        assert_eq!(text(&card.lines[1]), "\"y\"");
        assert_eq!(text(&card.lines[2]), "x");
    }

    #[test]
    fn test_repository_card_truncates_description() {
        let repo: RepositorySummary = serde_json::from_value(json!({
            "repo_id": "r1", "name": "demo", "description": "d".repeat(300)
        }))
        .unwrap();
        let card = repository_card(&repo, &ColorConfig::default());
        assert_eq!(text(&card.lines[2]).chars().count(), DESCRIPTION_CHARS);
    }

    #[test]
    fn test_article_card_meta_line() {
        let article: Article = serde_json::from_value(json!({
            "post_id": "p1", "title": "Hello", "published_date": "2024-03-07",
            "read_time": "5 min read", "claps": 12, "excerpt": "e", "url": "https://medium.com/p1"
        }))
        .unwrap();
        let card = article_card(&article, &ColorConfig::default());
        assert_eq!(card.title, "Hello");
        assert_eq!(text(&card.lines[0]), "📅 3/7/2024   ⏱️ 5 min read   👏 12 claps");
    }

    #[test]
    fn test_video_card_shows_duration_and_views() {
        let video: Video = serde_json::from_value(json!({
            "video_id": "v1", "title": "Intro", "duration": "12:34", "views": "1,234",
            "published_date": "2024-03-07", "thumbnail_url": "https://img/v1.jpg"
        }))
        .unwrap();
        let card = video_card(&video, &ColorConfig::default());
        assert!(text(&card.lines[0]).contains("https://img/v1.jpg"));
        assert!(text(&card.lines[1]).contains("12:34"));
        assert!(text(&card.lines[3]).starts_with("👁️ 1,234 views"));
    }

    #[test]
    fn test_detail_uses_both_summaries() {
        let detail: RepositoryDetail = serde_json::from_value(json!({
            "repo_id": "r1", "name": "demo", "high_level_summary": "y",
            "detailed_summary": "z1\nz2"
        }))
        .unwrap();
        let rendered: Vec<String> = repository_detail(&detail, &ColorConfig::default())
            .lines
            .iter()
            .map(text)
            .collect();
        assert!(rendered.contains(&"y".to_string()));
        assert!(rendered.contains(&"z1".to_string()));
        assert!(rendered.contains(&"z2".to_string()));
        assert!(rendered.iter().any(|l| l.contains("Updated unknown")));
    }
}
