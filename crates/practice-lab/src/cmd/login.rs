use anyhow::Result;
use clap::Args;
use practice_core::LoginForm;
use practice_core::render::render_login;

use crate::cmd::CommandContext;

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
}

pub fn run(args: LoginArgs, ctx: &CommandContext) -> Result<()> {
    let mut form = LoginForm::new();
    form.set_email(args.email);
    form.set_password(args.password);
    form.submit();
    ctx.emit(&render_login(&form))
}
