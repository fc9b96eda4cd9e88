use crate::output::Output;
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use movie_rate_config::PathManager;
use movie_rate_models::SearchResult;
use movie_rate_omdb::FetchError;
use serde_json::json;
use tokio_util::sync::CancellationToken;

pub async fn run_search(query: String, limit: Option<usize>, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config = super::load_config(&paths)?;
    let client = super::build_client(&config, &paths)?;

    // One-shot command: nothing can supersede this request, but the client
    // API is uniformly cancellable.
    let token = CancellationToken::new();
    let mut results = match client.search(&query, &token).await {
        Ok(results) => results,
        Err(FetchError::NotFound(_)) => {
            output.warn(format!("No movies found for \"{}\"", query));
            return Ok(());
        }
        Err(e) => return Err(color_eyre::eyre::eyre!("Search failed: {}", e)),
    };

    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if output.is_human() {
        output.println(format!("Found {} results", results.len()));
        output.println(render_results_table(&results).to_string());
    } else {
        output.json(&json!({
            "query": query,
            "count": results.len(),
            "results": results,
        }));
    }

    Ok(())
}

pub(crate) fn render_results_table(results: &[SearchResult]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["#", "Title", "Year", "IMDb id"]);
    for (index, result) in results.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            result.title.clone(),
            result.year.clone(),
            result.imdb_id.clone(),
        ]);
    }
    table
}
