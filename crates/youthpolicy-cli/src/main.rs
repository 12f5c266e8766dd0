mod display;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use youthpolicy_client::{
    PresenterConfig, SearchClient, SearchOutcome, SearchPresenter,
};
use youthpolicy_core::{CardOptions, FilterSelections, PAGE_SIZE};

use crate::display::TerminalView;

#[derive(Parser)]
#[command(name = "youthpolicy", version, about = "Search government youth-support policies")]
struct Cli {
    /// Site serving the search API.
    #[arg(
        long,
        env = "YOUTHPOLICY_BASE_URL",
        default_value = "http://localhost:8000",
        global = true
    )]
    base_url: String,

    /// Show each result's relevance score.
    #[arg(long, env = "YOUTHPOLICY_SHOW_RELEVANCE", global = true)]
    show_relevance: bool,

    /// Debug-level logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search policies and print a page of result cards.
    Search(SearchArgs),
    /// List the values accepted by the search filters.
    Filters,
}

#[derive(Args)]
struct SearchArgs {
    /// Free-text query; empty lists everything matching the filters.
    #[arg(default_value = "")]
    query: String,

    #[arg(long)]
    category: Option<String>,

    /// Ignored unless --category is given.
    #[arg(long)]
    sub_category: Option<String>,

    #[arg(long)]
    age: Option<String>,

    #[arg(long)]
    region: Option<String>,

    #[arg(long)]
    job_status: Option<String>,

    /// Only policies still accepting applications.
    #[arg(long)]
    open_only: bool,

    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Page through results with n/p/q commands on stdin.
    #[arg(short, long)]
    interactive: bool,
}

impl SearchArgs {
    fn selections(&self) -> FilterSelections {
        FilterSelections {
            category: self.category.clone(),
            sub_category: self.sub_category.clone(),
            age: self.age.clone(),
            region: self.region.clone(),
            job_status: self.job_status.clone(),
            open_only: self.open_only,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    tracing::debug!("youthpolicy v{}", env!("CARGO_PKG_VERSION"));

    let client = SearchClient::new(cli.base_url.clone());
    match cli.command {
        Command::Search(args) => run_search(client, &cli.base_url, cli.show_relevance, &args).await,
        Command::Filters => run_filters(client).await,
    }
}

async fn run_search(
    client: SearchClient,
    base_url: &str,
    show_relevance: bool,
    args: &SearchArgs,
) -> anyhow::Result<ExitCode> {
    let view = TerminalView::new(
        io::stdout(),
        io::stderr(),
        base_url.to_string(),
        io::stdout().is_terminal(),
    );
    let config = PresenterConfig {
        page_size: PAGE_SIZE,
        card: CardOptions { show_relevance },
    };
    let mut presenter = SearchPresenter::new(client, view, config);
    let selections = args.selections();

    let outcome = presenter
        .perform_search(&args.query, &selections, args.page)
        .await;
    if let Some(e) = presenter.view_mut().take_error() {
        return Err(e).context("writing search results");
    }

    if args.interactive {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            eprint!("[n]ext [p]rev [q]uit > ");
            let Some(line) = lines.next_line().await.context("reading command")? else {
                break;
            };
            let moved = match line.trim() {
                "n" | "next" => presenter.next_page(&args.query, &selections).await,
                "p" | "prev" => presenter.previous_page(&args.query, &selections).await,
                "q" | "quit" => break,
                "" => continue,
                other => {
                    eprintln!("unknown command: {other}");
                    continue;
                }
            };
            if moved.is_none() {
                eprintln!("no page in that direction");
            }
            if let Some(e) = presenter.view_mut().take_error() {
                return Err(e).context("writing search results");
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    Ok(match outcome {
        SearchOutcome::Failed { .. } => ExitCode::FAILURE,
        SearchOutcome::Rendered { .. } | SearchOutcome::Empty { .. } => ExitCode::SUCCESS,
    })
}

async fn run_filters(client: SearchClient) -> anyhow::Result<ExitCode> {
    let options = match client.filter_options().await {
        Ok(options) => options,
        Err(err) => {
            tracing::warn!(error = %err, "loading filter options failed");
            eprintln!("알림: {}", err.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };
    display::print_filter_options(&mut io::stdout().lock(), &options)
        .context("writing filter options")?;
    Ok(ExitCode::SUCCESS)
}
