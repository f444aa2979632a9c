//! `mdi list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::task::TaskRecord;

const TABLE_COL_TITLE: usize = 40;
const TABLE_COL_LABELS: usize = 30;

#[derive(Args)]
pub struct ListArgs {
    /// Markdown file with task blocks ("-" reads stdin)
    file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn print_table_header() {
    println!(
        "{:<width_title$} {:<width_labels$} LINES",
        "TITLE",
        "LABELS",
        width_title = TABLE_COL_TITLE,
        width_labels = TABLE_COL_LABELS
    );
    println!("{}", "-".repeat(TABLE_COL_TITLE + TABLE_COL_LABELS + 7));
}

fn print_table_row(task: &TaskRecord) {
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let labels = super::truncate(&task.labels.join(", "), TABLE_COL_LABELS);
    println!(
        "{:<width_title$} {:<width_labels$} {}",
        title,
        labels,
        task.description_lines(),
        width_title = TABLE_COL_TITLE,
        width_labels = TABLE_COL_LABELS
    );
}

pub fn run(config: &Config, args: ListArgs) -> Result<()> {
    let source = super::source_name(&args.file);
    let doc = super::load_document(&args.file)?;

    if args.json || config.list.json {
        println!("{}", serde_json::to_string_pretty(doc.tasks())?);
        return Ok(());
    }

    if doc.is_empty() {
        println!("No tasks found in {}.", source);
        return Ok(());
    }

    print_table_header();
    for task in doc.tasks() {
        print_table_row(task);
    }
    println!("\nTotal: {} tasks", doc.len());

    Ok(())
}
