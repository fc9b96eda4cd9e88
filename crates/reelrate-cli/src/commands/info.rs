use crate::output::Output;
use color_eyre::Result;
use movie_rate_config::PathManager;
use movie_rate_models::MovieDetail;
use movie_rate_omdb::FetchError;
use tokio_util::sync::CancellationToken;

pub async fn run_info(imdb_id: String, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config = super::load_config(&paths)?;
    let client = super::build_client(&config, &paths)?;

    let token = CancellationToken::new();
    let detail = match client.fetch_detail(&imdb_id, &token).await {
        Ok(detail) => detail,
        Err(FetchError::NotFound(message)) => {
            output.warn(format!("{} ({})", message, imdb_id));
            return Ok(());
        }
        Err(e) => return Err(color_eyre::eyre::eyre!("Detail lookup failed: {}", e)),
    };

    if output.is_human() {
        for line in render_detail_lines(&detail) {
            output.println(line);
        }
    } else {
        output.json(&serde_json::to_value(&detail)?);
    }

    Ok(())
}

pub(crate) fn render_detail_lines(detail: &MovieDetail) -> Vec<String> {
    let runtime = detail
        .runtime_minutes
        .map(|m| format!("{} min", m))
        .unwrap_or_else(|| "unknown runtime".to_string());
    let rating = detail
        .imdb_rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "-".to_string());

    vec![
        format!("{} ({})", detail.title, detail.year),
        format!("{} • {}", detail.released, runtime),
        detail.genre.clone(),
        format!("⭐ {} IMDb rating", rating),
        String::new(),
        detail.plot.clone(),
        format!("Starring {}", detail.actors),
        format!("Directed by {}", detail.director),
    ]
}
