use clap::{ArgAction, Parser, Subcommand};
use movie_rate_config::PathManager;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelrate")]
#[command(about = "Reelrate - search movies, rate them, keep a session watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the movie database and print the matches
    #[command(long_about = "Run a one-shot free-text search against the movie database and print the matching titles. Use the interactive session (the default command) to inspect and rate them.")]
    Search {
        /// Free-text query
        query: String,

        /// Keep only the first N results
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Look up full details for one title by IMDb id
    Info {
        /// IMDb id, e.g. tt1375666
        imdb_id: String,
    },

    /// Interactive search-and-rate session (default when no command given)
    #[command(long_about = "Start an interactive session: search, open details, rate titles 1-10, and review the watchlist with aggregate statistics. The watchlist lives in memory for the session only.")]
    Watch,

    /// Configure the API key and settings
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show,

    /// Store the OMDb API key in the credential store
    #[command(long_about = "Prompt for an OMDb API key and store it in the credentials file. Keys are free at https://www.omdbapi.com/apikey.aspx. The OMDB_API_KEY environment variable takes precedence when set.")]
    Key,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Watch);

    // The interactive session logs to a file so tracing output doesn't
    // interleave with the prompts.
    if matches!(command, Commands::Watch) {
        let paths = PathManager::default();
        paths
            .ensure_directories()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to create config directories: {}", e))?;
        logging::init_logging_with_file(cli.verbose, cli.quiet, Some(paths.session_log_file()))
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    } else {
        logging::init_logging(cli.verbose, cli.quiet)
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    }

    let output = output::Output::new(cli.output, cli.quiet);

    match command {
        Commands::Search { query, limit } => commands::search::run_search(query, limit, &output).await,
        Commands::Info { imdb_id } => commands::info::run_info(imdb_id, &output).await,
        Commands::Watch => commands::watch::run_watch(&output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            commands::config::run_config(cmd, &output)
        }
    }
}
