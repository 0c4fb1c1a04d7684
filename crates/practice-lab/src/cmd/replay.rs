use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use practice_core::render_text;

use crate::cmd::CommandContext;
use crate::events::EventScript;
use crate::session::Session;

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Event script (JSON) to run
    #[arg(value_name = "events.json")]
    pub script: PathBuf,
    /// Print only the final page state
    #[arg(long)]
    pub final_only: bool,
}

pub fn load_script(path: &PathBuf) -> Result<EventScript> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read event script {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse event script {}", path.display()))
}

pub async fn run(args: ReplayArgs, ctx: &CommandContext) -> Result<()> {
    let script = load_script(&args.script)?;
    let mut session = Session::new(script.page, &ctx.config)?;
    let reports = session.replay(&script.events).await;

    if args.final_only {
        return ctx.emit(&session.render());
    }

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for report in &reports {
        let status = if report.applied { "applied" } else { "ignored" };
        let target = report.event.target().unwrap_or("-");
        println!(
            "#{} {} {} ({})",
            report.index + 1,
            report.event.kind(),
            target,
            status
        );
        for line in render_text(&report.view).lines() {
            println!("    {line}");
        }
    }
    Ok(())
}
