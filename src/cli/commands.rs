use crate::app::{AppContext, Result};
use crate::domain::article::format_local_date;
use crate::view::truncate_chars;

pub async fn list_repositories(ctx: &AppContext) -> Result<()> {
    let repos = ctx.api.list_repositories().await?;

    if repos.is_empty() {
        println!("No repositories found");
        return Ok(());
    }

    for repo in repos {
        println!(
            "{:<24} {:<12} ⭐ {:<6} 🔀 {:<5} {}",
            repo.repo_id,
            repo.display_language(),
            repo.stars,
            repo.forks,
            repo.name
        );
        if !repo.high_level_summary.is_empty() {
            println!("    \"{}\"", truncate_chars(&repo.high_level_summary, 100));
        }
    }

    Ok(())
}

pub async fn show_repository(ctx: &AppContext, id: &str) -> Result<()> {
    let detail = ctx.api.get_repository(id).await?;
    let repo = &detail.summary;

    println!("{} [{}]", repo.name, detail.display_language());
    if !repo.description.is_empty() {
        println!("{}", repo.description);
    }
    println!(
        "⭐ {} stars   🔀 {} forks   🕐 Updated {}",
        repo.stars,
        repo.forks,
        repo.updated_at.as_deref().unwrap_or("unknown")
    );
    if let Some(url) = &repo.url {
        println!("{}", url);
    }
    println!();
    println!("High-Level Summary (AI generated)");
    println!("{}", repo.high_level_summary);
    println!();
    println!("Detailed Summary (AI generated)");
    println!("{}", detail.detailed_summary);

    Ok(())
}

pub async fn list_articles(ctx: &AppContext) -> Result<()> {
    let articles = ctx.api.list_articles().await?;

    if articles.is_empty() {
        println!("No articles found");
        return Ok(());
    }

    for article in articles {
        println!(
            "{:<10} {:<12} 👏 {:<5} {}",
            article.display_date(),
            article.read_time,
            article.claps,
            article.title
        );
        if let Some(url) = &article.url {
            println!("    {}", url);
        }
    }

    Ok(())
}

pub async fn list_videos(ctx: &AppContext) -> Result<()> {
    let videos = ctx.api.list_videos().await?;

    if videos.is_empty() {
        println!("No videos found");
        return Ok(());
    }

    for video in videos {
        println!(
            "{:<10} {:>8} 👁 {:<10} {}",
            format_local_date(&video.published_date),
            video.duration,
            video.views,
            video.title
        );
        if let Some(url) = &video.url {
            println!("    {}", url);
        }
    }

    Ok(())
}
