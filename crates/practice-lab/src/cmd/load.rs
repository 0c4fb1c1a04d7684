use anyhow::Result;
use clap::{Args, ValueEnum};
use practice_core::render::render_loader;
use practice_core::{
    DataLoader, FAILURE_PERCENT, FailureSource, RecordingNotifier, UuidFailureSource,
};
use tracing::info;

use crate::cmd::CommandContext;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedOutcome {
    /// Roll the dice like the page does
    Random,
    Success,
    Failure,
}

#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    #[arg(long, value_enum, default_value = "random")]
    pub outcome: ForcedOutcome,
}

pub async fn run(args: LoadArgs, ctx: &CommandContext) -> Result<()> {
    let mut uuid_source = UuidFailureSource;
    let source = move || match args.outcome {
        ForcedOutcome::Random => uuid_source.roll(),
        ForcedOutcome::Success => 99,
        ForcedOutcome::Failure => FAILURE_PERCENT.saturating_sub(1),
    };
    let toasts = RecordingNotifier::new();
    let mut loader = DataLoader::new(ctx.config.dataset.rows.clone(), source);
    let result = loader.load(&toasts).await;
    info!(ok = result.is_ok(), "load command finished");
    ctx.emit(&render_loader(&loader, toasts.take()))
}
