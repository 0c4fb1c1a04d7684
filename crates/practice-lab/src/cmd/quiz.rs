use anyhow::{Result, bail};
use clap::Args;
use practice_core::QuizForm;
use practice_core::quiz::{Q2_OPTIONS, Q3_OPTIONS};
use practice_core::render::render_quiz;

use crate::cmd::CommandContext;

#[derive(Args, Debug, Clone)]
pub struct QuizArgs {
    /// Free-text answer to question 1
    #[arg(long, default_value = "")]
    pub q1: String,
    /// Checked option for question 2 (repeatable)
    #[arg(long = "q2", value_name = "OPTION")]
    pub q2: Vec<String>,
    /// Selected option for question 3
    #[arg(long, value_name = "OPTION")]
    pub q3: Option<String>,
}

pub fn run(args: QuizArgs, ctx: &CommandContext) -> Result<()> {
    let mut form = QuizForm::new();
    form.set_q1(args.q1);
    for option in &args.q2 {
        if !Q2_OPTIONS.contains(&option.as_str()) {
            bail!(
                "unknown option '{}' for question 2 (expected one of: {})",
                option,
                Q2_OPTIONS.join(", ")
            );
        }
        form.toggle_q2(option, true);
    }
    if let Some(option) = args.q3 {
        if !Q3_OPTIONS.contains(&option.as_str()) {
            bail!(
                "unknown option '{}' for question 3 (expected one of: {})",
                option,
                Q3_OPTIONS.join(", ")
            );
        }
        form.select_q3(option);
    }
    let _ = form.submit();
    ctx.emit(&render_quiz(&form))
}
