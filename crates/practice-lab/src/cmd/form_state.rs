use anyhow::Result;
use clap::Args;
use practice_core::FormState;
use practice_core::render::render_form_state;

use crate::cmd::CommandContext;

#[derive(Args, Debug, Clone)]
pub struct FormStateArgs {
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    /// Tick the terms checkbox
    #[arg(long)]
    pub terms: bool,
    /// Click submit after filling the form
    #[arg(long)]
    pub submit: bool,
}

pub fn run(args: FormStateArgs, ctx: &CommandContext) -> Result<()> {
    let mut form = FormState::new();
    form.set_email(args.email);
    form.set_password(args.password);
    form.set_terms(args.terms);
    if args.submit {
        form.submit();
    }
    ctx.emit(&render_form_state(&form))
}
