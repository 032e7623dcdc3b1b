//! CLI command implementations

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use cinescope_core::{CinescopeConfig, MovieSummary};
use cinescope_search::{
    MovieProvider, MovieQueryClient, RequestStatus, SearchHandle, SearchSnapshot,
    spawn_search_coordinator,
};
use clap::Subcommand;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (overrides CINESCOPE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides CINESCOPE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Fetch one listing and print it; no query lists popular movies
    Search {
        /// Keywords to search for
        query: Vec<String>,
    },
    /// Read search text from stdin, one line per edit, printing each result
    Interactive,
}

/// Handle the CLI command
///
/// # Errors
/// Returns the error of whichever command failed
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = CinescopeConfig::from_env();

    match command {
        Commands::Serve { host, port } => serve(config, host, port).await,
        Commands::Search { query } => search(config, &query.join(" ")).await,
        Commands::Interactive => interactive(config).await,
    }
}

/// Start the web server
///
/// # Errors
/// - Configuration is invalid or the listener cannot be bound
pub async fn serve(
    mut config: CinescopeConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.web.host = host;
    }
    if let Some(port) = port {
        config.web.port = port;
    }

    println!(
        "Cinescope running on http://{}:{}",
        config.web.host, config.web.port
    );
    cinescope_web::run_server(config)
        .await
        .context("web server failed")
}

/// Run a single search and print the results
///
/// # Errors
/// - Configuration is invalid or the fetch fails
pub async fn search(config: CinescopeConfig, query: &str) -> anyhow::Result<()> {
    config.api.validate()?;
    let client = MovieQueryClient::new(config.api.clone());

    let movies = client
        .fetch_movies(query)
        .await
        .with_context(|| format!("search for '{query}' failed"))?;

    let mut stdout = std::io::stdout().lock();
    write_movies(&mut stdout, &movies)?;
    Ok(())
}

/// Feed stdin lines through the debounced coordinator
///
/// # Errors
/// - Configuration is invalid, stdin fails, or the coordinator stops
pub async fn interactive(config: CinescopeConfig) -> anyhow::Result<()> {
    config.api.validate()?;
    let provider: Arc<dyn MovieProvider> = Arc::new(MovieQueryClient::new(config.api.clone()));
    let handle = spawn_search_coordinator(config.search.clone(), provider);

    println!("Type to search, one edit per line. Ctrl-D quits.");
    print_settled(&handle, "").await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        handle.set_search_text(line.clone()).await?;
        print_settled(&handle, &line).await?;
    }

    handle.shutdown().await?;
    Ok(())
}

async fn print_settled(handle: &SearchHandle, query: &str) -> anyhow::Result<()> {
    let snapshot = handle.wait_for_settled(query).await?;
    let mut stdout = std::io::stdout().lock();
    write_snapshot(&mut stdout, &snapshot)?;
    Ok(())
}

/// Writes a settled snapshot: a heading, then results or the error message.
fn write_snapshot(out: &mut impl Write, snapshot: &SearchSnapshot) -> std::io::Result<()> {
    if snapshot.debounced_text.trim().is_empty() {
        writeln!(out, "== Popular movies ==")?;
    } else {
        writeln!(out, "== Results for \"{}\" ==", snapshot.debounced_text)?;
    }

    match &snapshot.status {
        RequestStatus::Error { message } => writeln!(out, "Error: {message}"),
        RequestStatus::Loading => writeln!(out, "Loading..."),
        RequestStatus::Success => write_movies(out, &snapshot.movies),
    }
}

fn write_movies(out: &mut impl Write, movies: &[MovieSummary]) -> std::io::Result<()> {
    if movies.is_empty() {
        return writeln!(out, "No movies found.");
    }

    for movie in movies {
        writeln!(
            out,
            "{:>8}  {} ({})  ⭐ {}  [{}]",
            movie.id,
            movie.title,
            movie.release_year_label(),
            movie.rating_label(),
            movie.language_label()
        )?;
    }

    Ok(())
}
