//! System listing

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::Session;
use crate::cli::output::{OutputFormat, PageOutput, print_formatted, status_marker};
use crate::model::System;
use crate::query;

#[derive(Args, Debug)]
pub struct SystemsArgs {
    /// Page to show
    #[arg(long)]
    page: Option<usize>,

    /// Fetch systems again even if already loaded
    #[arg(long)]
    refresh: bool,
}

pub async fn run(
    args: SystemsArgs,
    session: &mut Session,
    format: OutputFormat,
    _quiet: bool,
) -> Result<()> {
    let store = &session.store;

    if args.refresh || store.systems.is_empty() {
        query::get_systems(session.client.as_ref(), store)
            .await
            .context("Failed to fetch systems")?;
    }
    if let Some(page) = args.page {
        query::set_systems_page(store, page);
    }

    let output = PageOutput::from_collection(&store.systems);
    print_formatted(&output, format, format_systems_text);

    Ok(())
}

fn format_system_line(system: &System) -> String {
    let mut line = format!(
        "{} {:>5}  {}",
        status_marker(system.complete),
        system.id,
        system.name
    );
    if system.arcade {
        line.push_str(&format!("  (arcade, {})", system.merging.label()));
    }
    line
}

fn format_systems_text(output: &PageOutput<System>) -> String {
    if output.total == 0 {
        return "No systems found".to_string();
    }

    let mut lines: Vec<String> = output.items.iter().map(format_system_line).collect();
    lines.push(output.footer("systems"));
    lines.join("\n")
}
