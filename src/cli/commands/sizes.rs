//! System size totals

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::Session;
use crate::cli::output::{OutputFormat, format_size, print_formatted};
use crate::model::Sizes;
use crate::query;

#[derive(Args, Debug)]
pub struct SizesArgs {
    /// System to total (defaults to the system whose games are loaded)
    system_id: Option<i64>,
}

pub async fn run(
    args: SizesArgs,
    session: &mut Session,
    format: OutputFormat,
    _quiet: bool,
) -> Result<()> {
    let system_id = args
        .system_id
        .or(session.system_id)
        .context("No system selected. Pass a system id.")?;

    query::get_sizes_by_system_id(session.client.as_ref(), &session.store, system_id)
        .await
        .with_context(|| format!("Failed to fetch sizes for system {}", system_id))?;

    let sizes = session.store.sizes.snapshot();
    print_formatted(&sizes, format, format_sizes_text);

    Ok(())
}

fn format_sizes_text(sizes: &Sizes) -> String {
    [
        format!("Total original size:      {}", format_size(sizes.total_original)),
        format!("One region original size: {}", format_size(sizes.one_region_original)),
        format!("Total actual size:        {}", format_size(sizes.total_actual)),
        format!("One region actual size:   {}", format_size(sizes.one_region_actual)),
    ]
    .join("\n")
}
