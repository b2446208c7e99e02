#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use output::{CliError, OutputMode, render_error};
use standview_core::config;
use standview_core::error::ErrorCode;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "standview: exhibition-stand project records at a glance",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format: pretty, text or json.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Project data file (JSON array of project records).
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Read",
        about = "Show dashboard counts",
        long_about = "Show the dashboard cards and per-status overview for every loaded project.",
        after_help = "EXAMPLES:\n    # Dashboard for data/projects.json\n    sv stats\n\n    # Use another data file\n    sv stats --data exports/projects.json\n\n    # Emit machine-readable output\n    sv stats --format json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        next_help_heading = "Read",
        about = "List projects",
        long_about = "List projects one page at a time, optionally filtered by a case-insensitive query.",
        after_help = "EXAMPLES:\n    # First page of all projects\n    sv list\n\n    # Projects at an expo venue, second page\n    sv list expo --page 2\n\n    # Emit machine-readable output\n    sv list pending --format json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Read",
        about = "Show one project",
        long_about = "Show full details for a single project by its exact ID.",
        after_help = "EXAMPLES:\n    # Show a project\n    sv show PRJ-1042\n\n    # Show it with quick-search suggestions\n    sv show PRJ-1042 --search booth\n\n    # Emit machine-readable output\n    sv show PRJ-1042 --format json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        next_help_heading = "Read",
        about = "Find projects by name",
        long_about = "Quick search: suggest projects whose name contains the query.",
        after_help = "EXAMPLES:\n    # Suggest projects named like 'pavilion'\n    sv find pavilion\n\n    # Only the first five\n    sv find stand -n 5"
    )]
    Find(cmd::find::FindArgs),

    #[command(
        next_help_heading = "Setup",
        about = "Generate shell completions",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    sv completions bash\n\n    # Generate zsh completions\n    sv completions zsh"
    )]
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Output mode from flags alone; `None` defers to env and config.
    fn output_flag(&self) -> Option<OutputMode> {
        if self.format.is_some() {
            self.format
        } else if self.json {
            Some(OutputMode::Json)
        } else {
            None
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("STANDVIEW_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "standview_core=debug,sv=debug,info"
        } else {
            "standview_core=info,sv=info,warn"
        })
    });

    let format = env::var("STANDVIEW_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "sv", &mut std::io::stdout());
        return Ok(());
    }

    let project_root = env::current_dir()?;
    let flag_mode = cli.output_flag();

    let effective = match config::resolve_config(&project_root, cli.json) {
        Ok(effective) => effective,
        Err(err) => {
            let mode = flag_mode.unwrap_or(OutputMode::Text);
            render_error(
                mode,
                &CliError::from_code(format!("{err:#}"), ErrorCode::ConfigParseError),
            )?;
            return Err(err);
        }
    };
    let output = flag_mode.unwrap_or_else(|| OutputMode::from_resolved(&effective.resolved_output));
    debug!(?output, root = %project_root.display(), "resolved invocation");

    let session = cmd::Session::open(&project_root, cli.data.as_deref(), effective.project, output)?;

    match cli.command {
        Commands::Stats(ref args) => cmd::stats::run_stats(args, output, &session),
        Commands::List(ref args) => cmd::list::run_list(args, output, &session),
        Commands::Show(ref args) => cmd::show::run_show(args, output, &session),
        Commands::Find(ref args) => cmd::find::run_find(args, output, &session),
        Commands::Completions { .. } => Ok(()),
    }
}
