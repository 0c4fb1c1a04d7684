use anyhow::{Result, bail};
use clap::Args;
use practice_core::TableView;
use practice_core::render::render_table;

use crate::cmd::CommandContext;

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Case-insensitive search across every column
    #[arg(long)]
    pub filter: Option<String>,
    /// Click a column header; repeat to toggle the direction
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,
    /// Page to show, using the pagination page's page size
    #[arg(long, value_name = "N")]
    pub page: Option<usize>,
}

pub fn run(args: TableArgs, ctx: &CommandContext) -> Result<()> {
    let dataset = &ctx.config.dataset;
    let mut view = TableView::new(dataset.columns.clone(), dataset.rows.clone());
    if args.page.is_some() {
        view = view.with_pagination(ctx.config.pagination.page_size);
    }

    if let Some(query) = args.filter {
        view.set_filter(query);
    }
    for column in &args.sort {
        if !dataset.columns.contains(column) {
            bail!(
                "unknown column '{}' (expected one of: {})",
                column,
                dataset.columns.join(", ")
            );
        }
        view.sort_by(column);
    }
    if let Some(page) = args.page
        && !view.go_to_page(page)
    {
        let count = view.pager().map(|pager| pager.page_count()).unwrap_or(0);
        bail!("page {page} is out of range (1..={})", count.max(1));
    }
    ctx.emit(&render_table(&view))
}
