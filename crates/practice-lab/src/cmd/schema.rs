use anyhow::Result;

use crate::events::EventScript;

/// Prints the JSON Schema accepted by `replay`.
pub fn run() -> Result<()> {
    let schema = schemars::schema_for!(EventScript);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
