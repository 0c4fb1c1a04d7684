use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cmd::{
    self, CommandContext, form_state::FormStateArgs, load::LoadArgs, login::LoginArgs,
    quiz::QuizArgs, replay::ReplayArgs, table::TableArgs, test_ids::TestIdsArgs,
};
use crate::config::LabConfig;
use crate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "practice-lab",
    about = "Drive the QA practice scenarios from the command line",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Lab configuration (TOML); the built-in dataset is used when omitted
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Print structured JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit the login form once
    Login(LoginArgs),
    /// Fill the form-state page and show whether submit is enabled
    FormState(FormStateArgs),
    /// Submit the quiz and show the score
    Quiz(QuizArgs),
    /// Filter, sort and page the people table
    Table(TableArgs),
    /// Run the simulated data load (waits two seconds)
    Load(LoadArgs),
    /// Replay a JSON event script against a page
    Replay(ReplayArgs),
    /// List the stable test ids of each page
    TestIds(TestIdsArgs),
    /// Print the JSON Schema for event scripts
    Schema,
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = LabConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load lab config {}", path.display()),
        None => "failed to load built-in lab config".to_string(),
    })?;
    debug!(rows = config.dataset.rows.len(), "lab config ready");
    let ctx = CommandContext {
        config,
        json: cli.json,
    };

    match cli.command {
        Commands::Login(args) => cmd::login::run(args, &ctx),
        Commands::FormState(args) => cmd::form_state::run(args, &ctx),
        Commands::Quiz(args) => cmd::quiz::run(args, &ctx),
        Commands::Table(args) => cmd::table::run(args, &ctx),
        Commands::Load(args) => runtime()?.block_on(cmd::load::run(args, &ctx)),
        Commands::Replay(args) => runtime()?.block_on(cmd::replay::run(args, &ctx)),
        Commands::TestIds(args) => cmd::test_ids::run(args, &ctx),
        Commands::Schema => cmd::schema::run(),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")
}
