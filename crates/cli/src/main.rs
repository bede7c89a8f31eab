//! Job Board CLI - browse a JSON job listing from the terminal
//! Loads from a URL or a local file, then lists / filters / sorts / shows.

mod config;
mod logging;
mod output;
mod presenter;
mod session;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jobboard_core::application::{Direction, FilterCriteria, JobBoard, Precedence, SortOrder};
use jobboard_core::domain::{JobRecord, SchemaChoice, SchemaKind};
use jobboard_core::port::time_provider::SystemTimeProvider;
use jobboard_core::port::{JobSource, Presenter};
use jobboard_infra_source::{FileJobSource, HttpJobSource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::presenter::TablePresenter;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Browse, filter and sort a JSON job listing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Remote JSON document (default: configured source_url)
    #[arg(long, global = true, conflicts_with = "file")]
    url: Option<String>,

    /// Local JSON file
    #[arg(long, global = true)]
    file: Option<String>,

    /// Field-name schema: auto, upwork or simple
    #[arg(long, global = true)]
    schema: Option<SchemaKind>,

    /// Config file (default: <config dir>/jobboard/jobboard.toml)
    #[arg(long, global = true, env = "JOBBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List jobs, optionally filtered and sorted
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Print the view as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show every field of one job
    Show {
        /// 1-based position in the listed view
        #[arg(required_unless_present = "job_no")]
        position: Option<usize>,

        /// Look the job up by its "Job No" instead
        #[arg(long, conflicts_with = "position")]
        job_no: Option<String>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Distinct levels, types and skills in the data
    Options,

    /// Interactive session (filter / sort / show / load ...)
    Interactive,
}

#[derive(Args)]
struct ViewArgs {
    /// Exact level to keep
    #[arg(long)]
    level: Option<String>,

    /// Exact job type to keep
    #[arg(long = "type")]
    job_type: Option<String>,

    /// Exact skill to keep
    #[arg(long)]
    skill: Option<String>,

    /// Title order: asc or desc
    #[arg(long)]
    sort_title: Option<Direction>,

    /// Posted-time order: asc (newest first) or desc
    #[arg(long)]
    sort_time: Option<Direction>,

    /// Primary rule when both orders are given: time or title
    #[arg(long, default_value = "time")]
    precedence: Precedence,
}

impl ViewArgs {
    fn apply(self, board: &mut JobBoard) {
        board.set_filter(FilterCriteria {
            level: self.level,
            job_type: self.job_type,
            skill: self.skill,
        });
        board.set_sort(SortOrder {
            title: self.sort_title,
            time: self.sort_time,
            precedence: self.precedence,
        });
    }
}

fn build_source(cli: &Cli, config: &AppConfig) -> Result<Box<dyn JobSource>> {
    if let Some(path) = &cli.file {
        return Ok(Box::new(FileJobSource::new(path)));
    }
    let url = cli.url.clone().unwrap_or_else(|| config.source_url.clone());
    Ok(Box::new(HttpJobSource::new(url)?))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Configuration, then logging (log format is configurable)
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init_logging(&config.log_format, cli.verbose)?;

    info!("Job Board v{} starting...", jobboard_core::VERSION);

    // 2. Wiring
    let source = build_source(&cli, &config)?;
    let schema = cli
        .schema
        .map(SchemaChoice::from)
        .unwrap_or_else(|| config.schema_choice());
    let mut board = JobBoard::new(Arc::new(SystemTimeProvider));
    let presenter = TablePresenter;

    // 3. Interactive mode reports load failures and keeps going
    let command = match cli.command {
        Commands::Interactive => {
            let mut session = Session::new(board, presenter, schema);
            session.load(source.as_ref()).await;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            return session.run(stdin).await;
        }
        command => command,
    };

    board
        .load(source.as_ref(), &schema)
        .await
        .with_context(|| format!("Error loading or parsing jobs from {}", source.describe()))?;

    run_once(command, &mut board, &presenter)
}

fn run_once(command: Commands, board: &mut JobBoard, presenter: &TablePresenter) -> Result<()> {
    match command {
        Commands::List { view, json } => {
            view.apply(board);
            if json {
                let view = board.current_view();
                let records: Vec<&JobRecord> = view.iter().map(|r| r.as_ref()).collect();
                let json = serde_json::to_string_pretty(&records)?;
                output::write_line(&mut std::io::stdout().lock(), json)?;
            } else {
                board.render(presenter);
            }
        }

        Commands::Show {
            position,
            job_no,
            view,
        } => {
            view.apply(board);
            let record = match (job_no, position) {
                (Some(job_no), _) => board.find_by_job_number(&job_no)?,
                (None, Some(position)) => board.select(position)?,
                (None, None) => anyhow::bail!("either a position or --job-no is required"),
            };
            presenter.render_detail(&record);
        }

        Commands::Options => presenter.render_options(&board.options()),

        // Needs the session loop, see main
        Commands::Interactive => {}
    }

    Ok(())
}
