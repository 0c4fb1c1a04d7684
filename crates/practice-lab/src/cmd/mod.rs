pub mod form_state;
pub mod load;
pub mod login;
pub mod quiz;
pub mod replay;
pub mod schema;
pub mod table;
pub mod test_ids;

use anyhow::Result;
use practice_core::{RenderedView, render_json, render_text};

use crate::config::LabConfig;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: LabConfig,
    pub json: bool,
}

impl CommandContext {
    pub fn emit(&self, view: &RenderedView) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&render_json(view))?);
        } else {
            println!("{}", render_text(view));
        }
        Ok(())
    }
}
