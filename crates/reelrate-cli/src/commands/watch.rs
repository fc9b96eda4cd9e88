//! Interactive search-and-rate session. All state lives in the core `App`;
//! this module only prompts, renders, and shuttles fetch outcomes back in.

use crate::output::Output;
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use movie_rate_config::PathManager;
use movie_rate_core::{App, QueryDispatch, SearchPhase, SelectDispatch};
use movie_rate_models::WatchedEntry;
use movie_rate_omdb::OmdbClient;
use std::time::Duration;
use tracing::info;

pub async fn run_watch(output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config = super::load_config(&paths)?;
    let client = super::build_client(&config, &paths)?;

    let (_rows, cols) = Term::stdout().size();
    if cols < config.ui.min_terminal_width {
        output.error(format!(
            "This session needs a terminal at least {} columns wide (current: {})",
            config.ui.min_terminal_width, cols
        ));
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    let mut app = App::new();
    info!("interactive session started");

    run_query(&mut app, &client, &config.ui.default_query).await;

    loop {
        if app.session().phase == SearchPhase::Error {
            if let Some(message) = &app.session().error {
                output.error(message);
            }
        }

        let results = app.session().results.clone();
        let mut items: Vec<String> = results
            .iter()
            .map(|r| format!("{} ({})", r.title, r.year))
            .collect();
        let search_index = items.len();
        items.push("🔍 New search".to_string());
        let watchlist_index = items.len();
        items.push(format!("📺 Watchlist ({})", app.watchlist().len()));
        items.push("🚪 Quit".to_string());

        let prompt = if app.session().query.is_empty() {
            "Reelrate".to_string()
        } else {
            format!(
                "Found {} results for \"{}\"",
                results.len(),
                app.session().query
            )
        };

        match Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact_opt()?
        {
            Some(index) if index < results.len() => {
                open_detail(&mut app, &client, &results[index].imdb_id, &theme, output).await?;
            }
            Some(index) if index == search_index => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Search movies")
                    .allow_empty(true)
                    .interact_text()?;
                run_query(&mut app, &client, &text).await;
            }
            Some(index) if index == watchlist_index => {
                watchlist_view(&mut app, &theme, output)?;
            }
            _ => break,
        }
    }

    app.shutdown();
    info!("interactive session ended");
    Ok(())
}

async fn run_query(app: &mut App, client: &OmdbClient, text: &str) {
    match app.set_query(text) {
        QueryDispatch::None => {}
        QueryDispatch::Search {
            generation,
            token,
            query,
        } => {
            let pb = spinner(format!("Searching for \"{}\"...", query));
            let outcome = client.search(&query, &token).await;
            pb.finish_and_clear();
            app.finish_search(generation, outcome);
        }
    }
}

async fn open_detail(
    app: &mut App,
    client: &OmdbClient,
    imdb_id: &str,
    theme: &ColorfulTheme,
    output: &Output,
) -> Result<()> {
    match app.select(imdb_id) {
        // Toggled the already-open movie shut.
        SelectDispatch::None => return Ok(()),
        SelectDispatch::Fetch { imdb_id, token } => {
            let pb = spinner("Fetching details...".to_string());
            let outcome = client.fetch_detail(&imdb_id, &token).await;
            pb.finish_and_clear();
            app.finish_detail(&imdb_id, outcome);
        }
    }

    let Some(detail) = app.selection().detail().cloned() else {
        output.warn("Could not load details for that title (see the session log)");
        app.close_detail();
        return Ok(());
    };

    output.println("");
    for line in super::info::render_detail_lines(&detail) {
        output.println(line);
    }
    output.println("");

    if let Some(rating) = app.selected_watched_rating() {
        output.println(format!(
            "You rated this movie {} {}",
            rating,
            "🌟".repeat(rating as usize)
        ));
    } else {
        // Esc backs out without rating: the close-the-detail-view key.
        let labels: Vec<String> = (1..=10u8)
            .map(|r| format!("{:>2} {}", r, "★".repeat(r as usize)))
            .collect();
        let choice = Select::with_theme(theme)
            .with_prompt("Rate this movie (Esc to go back)")
            .items(&labels)
            .interact_opt()?;
        if let Some(index) = choice {
            let rating = (index + 1) as u8;
            if app.rate_selected(rating).is_some() {
                output.success(format!("Added \"{}\" to the watchlist", detail.title));
            }
        }
    }

    app.close_detail();
    Ok(())
}

fn watchlist_view(app: &mut App, theme: &ColorfulTheme, output: &Output) -> Result<()> {
    loop {
        if app.watchlist().is_empty() {
            output.println("No movies rated yet");
            return Ok(());
        }

        let summary = app.watchlist().summary();
        output.println(render_watchlist_table(app.watchlist().entries()).to_string());
        output.println(format!(
            "{} movies  ⭐ {:.2}  🌟 {:.2}  ⏳ {:.1} min",
            summary.count,
            summary.avg_imdb_rating,
            summary.avg_user_rating,
            summary.avg_runtime_minutes
        ));

        let mut items: Vec<String> = app
            .watchlist()
            .entries()
            .iter()
            .map(|e| format!("❌ Remove {}", e.title))
            .collect();
        let back_index = items.len();
        items.push("⬅ Back".to_string());

        match Select::with_theme(theme)
            .with_prompt("Watchlist")
            .items(&items)
            .default(back_index)
            .interact_opt()?
        {
            Some(index) if index < back_index => {
                let imdb_id = app.watchlist().entries()[index].imdb_id.clone();
                app.remove_watched(&imdb_id);
            }
            _ => return Ok(()),
        }
    }
}

fn render_watchlist_table(entries: &[WatchedEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["Title", "Year", "⭐ IMDb", "🌟 You", "⏳ Min"]);
    for entry in entries {
        table.add_row(vec![
            entry.title.clone(),
            entry.year.clone(),
            entry
                .imdb_rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| "-".to_string()),
            entry.user_rating.to_string(),
            entry
                .runtime_minutes
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
