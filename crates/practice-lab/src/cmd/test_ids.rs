use anyhow::Result;
use clap::Args;
use practice_core::{PageId, PageManifest};
use serde_json::{Map, Value};

use crate::cmd::CommandContext;

#[derive(Args, Debug, Clone)]
pub struct TestIdsArgs {
    /// Limit the listing to one page
    #[arg(value_name = "PAGE")]
    pub page: Option<PageId>,
}

pub fn run(args: TestIdsArgs, ctx: &CommandContext) -> Result<()> {
    let pages = match args.page {
        Some(page) => vec![page],
        None => PageId::ALL.to_vec(),
    };
    let manifests = pages
        .into_iter()
        .map(PageManifest::for_page)
        .collect::<Vec<_>>();
    for manifest in &manifests {
        manifest.check()?;
    }

    if ctx.json {
        let mut map = Map::new();
        for manifest in &manifests {
            map.insert(
                manifest.page.to_string(),
                Value::Array(
                    manifest
                        .test_ids
                        .iter()
                        .map(|id| Value::String(id.to_string()))
                        .collect(),
                ),
            );
        }
        println!("{}", serde_json::to_string_pretty(&Value::Object(map))?);
    } else {
        for manifest in &manifests {
            println!("{}:", manifest.page);
            for id in manifest.test_ids {
                println!("  {id}");
            }
        }
    }
    Ok(())
}
