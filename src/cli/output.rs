//! Output formatting utilities for CLI

use serde::Serialize;

use crate::state::PagedCollection;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One page of a collection, as printed
#[derive(Debug, Serialize)]
pub struct PageOutput<T> {
    pub page: usize,
    pub total_pages: usize,
    /// Items across all pages
    pub total: usize,
    pub items: Vec<T>,
}

impl<T: Clone> PageOutput<T> {
    pub fn from_collection(collection: &PagedCollection<T>) -> Self {
        Self {
            page: collection.page.get(),
            total_pages: collection.total_pages.get(),
            total: collection.len(),
            items: collection.view.get(),
        }
    }
}

impl<T> PageOutput<T> {
    /// E.g. "Page 2/5 (480 games)"
    pub fn footer(&self, noun: &str) -> String {
        format!(
            "Page {}/{} ({} {})",
            self.page, self.total_pages, self.total, noun
        )
    }
}

/// Print a serializable value as JSON or use custom text formatter
pub fn print_formatted<T, F>(value: &T, format: OutputFormat, text_formatter: F)
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => println!("{}", text_formatter(value)),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a success message (suppressed in quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Print an error message (never suppressed)
pub fn print_error(message: &str) {
    eprintln!("Error: {}", message);
}

/// Prefix for a line with a done/not done flag
pub fn status_marker(ok: bool) -> &'static str {
    if ok { "[OK]" } else { "[  ]" }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
