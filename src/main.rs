//! wiki-quiz main entry point
//!
//! This is the command-line interface for the wiki-quiz API server.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wiki_quiz::config::{load_config_with_hash, validate, Config};
use wiki_quiz::pipeline::IN_MEMORY_DATABASE;
use wiki_quiz::storage::{open_storage, QuizStore};

/// wiki-quiz: quizzes generated from Wikipedia articles
///
/// Serves an HTTP API that fetches an article, builds a multiple-choice
/// quiz about it and keeps every generated quiz in a local history.
#[derive(Parser, Debug)]
#[command(name = "wiki-quiz")]
#[command(version = "1.0.0")]
#[command(about = "Generate quizzes from Wikipedia articles", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the server bind address (e.g. 0.0.0.0:8000)
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Validate config and print it without starting the server
    #[arg(long, conflicts_with = "history")]
    dry_run: bool,

    /// Print the stored quiz history and exit
    #[arg(long, conflicts_with = "dry_run")]
    history: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_configuration(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
        validate(&config).context("Invalid --bind address")?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.history {
        handle_history(&config)?;
    } else {
        handle_serve(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG` takes precedence over the command-line flags when set.
fn setup_logging(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "wiki_quiz=info,tower_http=info,warn",
            1 => "wiki_quiz=debug,tower_http=debug,info",
            2 => "wiki_quiz=trace,debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, or the defaults when none is given
fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles the --dry-run mode: prints the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== wiki-quiz Dry Run ===\n");

    println!("Server:");
    println!("  Bind: {}", config.server.bind);
    println!("  Allowed origins ({}):", config.server.allowed_origins.len());
    for origin in &config.server.allowed_origins {
        println!("    * {}", origin);
    }

    println!("\nFetcher:");
    println!("  User agent: {}", config.fetcher.user_agent);
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  Connect timeout: {}s", config.fetcher.connect_timeout_secs);
    println!("  Max redirects: {}", config.fetcher.max_redirects);

    println!("\nStorage:");
    println!("  Database: {}", config.storage.database_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the --history mode: lists stored quizzes, newest first
fn handle_history(config: &Config) -> anyhow::Result<()> {
    if config.storage.database_path == IN_MEMORY_DATABASE {
        println!("In-memory store configured; no history is kept between runs");
        return Ok(());
    }

    println!("Database: {}\n", config.storage.database_path);

    let storage = open_storage(Path::new(&config.storage.database_path))
        .context("Failed to open quiz database")?;
    let quizzes = storage.list_all().context("Failed to load quiz history")?;

    if quizzes.is_empty() {
        println!("No quizzes generated yet");
        return Ok(());
    }

    for quiz in &quizzes {
        println!(
            "{:>6}  {}  {}  <{}>",
            quiz.id,
            quiz.created_at.format("%Y-%m-%d %H:%M:%S"),
            quiz.title,
            quiz.source_url
        );
    }
    println!("\n{} quizzes", quizzes.len());

    Ok(())
}

/// Handles the main serve operation
async fn handle_serve(config: Config) -> anyhow::Result<()> {
    let pipeline =
        wiki_quiz::build_pipeline(&config).context("Failed to initialize quiz pipeline")?;

    tracing::info!(
        "Quiz store: {} ({} quizzes), synthesizer: {}",
        config.storage.database_path,
        pipeline.quiz_count()?,
        pipeline.synthesizer_name()
    );

    wiki_quiz::server::serve(pipeline, &config.server)
        .await
        .context("Server failed")?;

    Ok(())
}
