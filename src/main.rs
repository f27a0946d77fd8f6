// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use news_search::utils::logging::{
    format_dim, format_error, format_heading, format_info, format_success, format_warning,
};
use news_search::{
    Article, ArticleClient, BackendClient, CachedSession, Config, DisplayConfig, DocumentParser,
    FileSessionStore, ParseError, QueryClient, ResultListing, SearchController, SearchError,
    SearchOutcome, SessionCache, TaggedDocumentParser, Validator,
};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

type Controller = SearchController<FileSessionStore, TaggedDocumentParser>;

#[derive(Parser)]
#[command(name = "news_search")]
#[command(version)]
#[command(about = "Search a news article collection and read full articles", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", env = "NEWS_SEARCH_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for articles and cache the results for this session
    Search {
        /// Query text, sent to the backend verbatim (may be empty)
        query: String,
    },

    /// Fetch and display a full article
    Article {
        docno: String,
    },

    /// Show the last search of this session without contacting the backend
    Last,

    /// Parse a local tagged document file
    Parse {
        file: PathBuf,
    },

    /// End the session by dropping the cached search
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(cli.color);
    news_search::utils::logging::init_logger(cli.color, cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => Config::load(Some(path))
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        }),
    };
    debug!("Backend: {}", config.backend.base_url);

    match cli.command {
        Commands::Search { query } => cmd_search(&config, &query).await?,
        Commands::Article { docno } => cmd_article(&config, &docno).await?,
        Commands::Last => cmd_last(&config)?,
        Commands::Parse { file } => cmd_parse(&file)?,
        Commands::Clear => cmd_clear(&config)?,
    }

    Ok(())
}

fn build_controller(config: &Config) -> Result<Controller> {
    let backend = BackendClient::new(&config.backend).context("Failed to create backend client")?;

    Ok(SearchController::new(
        QueryClient::new(backend.clone()),
        ArticleClient::new(backend),
        TaggedDocumentParser::new(),
        SessionCache::new(FileSessionStore::new(config.session.path.clone())),
    ))
}

async fn with_spinner<F: Future>(message: String, work: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = work.await;
    spinner.finish_and_clear();
    output
}

async fn cmd_search(config: &Config, query: &str) -> Result<()> {
    let controller = build_controller(config)?;

    let outcome = with_spinner(format!("Searching for \"{}\"", query), controller.search(query))
        .await;

    match outcome {
        Ok(SearchOutcome::Completed(session)) => {
            print_session(&session, &config.display);
            Ok(())
        }
        Ok(SearchOutcome::Superseded { query }) => {
            println!("{}", format_warning(&format!("Search for \"{}\" was superseded", query)));
            Ok(())
        }
        Err(e) if e.is_network() => {
            println!("{}", format_error(&format!("Search service unavailable: {}", e)));
            Err(e).context("Search failed")
        }
        Err(e) => Err(e).context("Search failed"),
    }
}

async fn cmd_article(config: &Config, docno: &str) -> Result<()> {
    let controller = build_controller(config)?;

    let article = with_spinner(format!("Fetching {}", docno), controller.open_article(docno)).await;

    match article {
        Ok(article) => {
            print_article(&article);
            Ok(())
        }
        Err(SearchError::NotFound(docno)) => {
            println!("{}", format_error(&format!("No article with document number {}", docno)));
            Err(SearchError::NotFound(docno)).context("Article lookup failed")
        }
        Err(SearchError::Parse(err)) => {
            report_parse_failure(&err);
            Err(SearchError::Parse(err)).context("Article lookup failed")
        }
        Err(e) => Err(e).context("Article lookup failed"),
    }
}

fn cmd_last(config: &Config) -> Result<()> {
    let cache = SessionCache::new(FileSessionStore::new(config.session.path.clone()));

    match cache.load() {
        Some(session) => print_session(&session, &config.display),
        None => println!("{}", format_info("No previous search in this session")),
    }

    Ok(())
}

fn cmd_parse(file: &Path) -> Result<()> {
    Validator::validate_file_path(file)?;

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    Validator::validate_content_not_empty(&raw)?;

    let article = match TaggedDocumentParser::new().parse(&raw) {
        Ok(article) => article,
        Err(SearchError::Parse(err)) => {
            report_parse_failure(&err);
            return Err(SearchError::Parse(err))
                .with_context(|| format!("Failed to parse {}", file.display()));
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to parse {}", file.display())),
    };

    print_article(&article);
    Ok(())
}

fn cmd_clear(config: &Config) -> Result<()> {
    let cache = SessionCache::new(FileSessionStore::new(config.session.path.clone()));
    cache.clear().context("Failed to clear session")?;

    println!(
        "{}",
        format_success(&format!(
            "Session cleared ({})",
            cache.store().path().display()
        ))
    );
    Ok(())
}

fn report_parse_failure(err: &ParseError) {
    match err.field() {
        Some(field) => println!(
            "{}",
            format_error(&format!("Article is missing or repeats its <{}> field", field))
        ),
        None => println!("{}", format_error("Article markup is malformed")),
    }
}

fn print_session(session: &CachedSession, display: &DisplayConfig) {
    match ResultListing::classify(&session.query, &session.results) {
        ResultListing::Idle => {
            println!("{}", format_info("Enter a query to search"));
            return;
        }
        ResultListing::NoResults => {
            println!("No results found. Try entering a different query!");
            return;
        }
        ResultListing::Results => {}
    }

    println!("\nResults for: \"{}\"", session.query);
    if let Some(header) = ResultListing::header(session.results.len(), session.elapsed_time_seconds)
    {
        println!("{}\n", format_dim(&header));
    }

    for (rank, item) in session
        .results
        .iter()
        .enumerate()
        .take(display.max_results_shown)
    {
        println!("{}", item.format_summary(rank, display.snippet_width));
    }

    let hidden = session
        .results
        .len()
        .saturating_sub(display.max_results_shown);
    if hidden > 0 {
        println!("{}", format_dim(&format!("... and {} more", hidden)));
    }
}

fn print_article(article: &Article) {
    println!("\n{}", format_heading(&article.headline_text()));
    println!("{}", format_dim(&format!("{} | {}", article.date, article.docno)));
    println!("{}", "=".repeat(80));

    for paragraph in &article.paragraphs {
        println!("\n{}", paragraph);
    }

    println!("\n{}", "=".repeat(80));
    println!(
        "{}",
        format_dim(&format!("{} words", article.word_count()))
    );
}
