mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, detail, feedback, history, leads, policy, Context};
use crate::error::{exit_code_for, report_error};
use flowsure_config as config;
use flowsure_store::paths;

#[derive(Debug, Parser)]
#[command(name = "flowsure", version, about = "flowsure lead dashboard")]
struct Cli {
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List leads visible under the department filter
    List(leads::ListArgs),
    /// Show summary counts for the visible leads
    Summary(leads::SummaryArgs),
    /// Open a lead's detail view
    Show(leads::ShowArgs),
    /// Save a lead's detail view, committing the selected action
    Save(detail::DraftArgs),
    /// Close a lead's detail view without committing
    Cancel(detail::DraftArgs),
    /// Append a history entry to a lead
    Note(history::NoteArgs),
    /// List the actions offered for a department
    Actions(policy::ActionsArgs),
    /// List the department filter roles
    Roles,
    /// Suggest a feature or report a problem
    Feedback(feedback::FeedbackArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let data_path = paths::resolve_data_path(data_path.or_else(|| app_config.data_path.clone()))
        .with_context(|| "resolve data path")?;
    if verbose {
        debug!(path = %data_path.display(), "data path resolved");
    }

    let ctx = Context {
        data_path: &data_path,
        json,
        config: &app_config,
    };

    match command {
        Command::List(args) => leads::list_leads(&ctx, args),
        Command::Summary(args) => leads::show_summary(&ctx, args),
        Command::Show(args) => leads::show_lead(&ctx, args),
        Command::Save(args) => detail::save_detail(&ctx, args),
        Command::Cancel(args) => detail::cancel_detail(&ctx, args),
        Command::Note(args) => history::add_note(&ctx, args),
        Command::Actions(args) => policy::list_actions(&ctx, args),
        Command::Roles => policy::list_roles(&ctx),
        Command::Feedback(args) => feedback::send_feedback(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before data path resolution")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
