//! `mdi plan` command implementation

use anyhow::{anyhow, bail, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{config_path, Config};
use crate::task::TaskRecord;
use crate::upload::{upload_all, DryRunSink, RepoName, UploadSummary};

#[derive(Args)]
pub struct PlanArgs {
    /// Markdown file with task blocks ("-" reads stdin)
    pub file: PathBuf,

    /// Target repository as owner/repo (defaults to upload.repo in config)
    pub repo: Option<RepoName>,

    /// Extra label added to every issue (repeatable)
    #[arg(short = 'l', long = "label")]
    pub labels: Vec<String>,

    /// Print the summary as JSON instead of previews
    #[arg(long)]
    pub json: bool,
}

/// Tasks with the configured and command-line labels appended
fn with_extra_labels(tasks: Vec<TaskRecord>, extra: &[String]) -> Vec<TaskRecord> {
    tasks
        .into_iter()
        .map(|mut task| {
            task.add_labels(extra);
            task
        })
        .collect()
}

fn preview<W: Write>(repo: RepoName, tasks: &[TaskRecord], out: W) -> UploadSummary {
    let mut sink = DryRunSink::new(repo, out);
    upload_all(&mut sink, tasks)
}

fn print_summary(summary: &UploadSummary) {
    println!("\n--- Summary ---");
    println!("Would create {} issues.", summary.created_count());
    if summary.failed_count() > 0 {
        println!("Would fail to create {} issues:", summary.failed_count());
        for failed in &summary.failed {
            println!("  '{}': {}", failed.title, failed.reason);
        }
    }
}

pub fn run(config: &Config, args: PlanArgs) -> Result<()> {
    let repo = match args.repo.or_else(|| config.upload.repo.clone()) {
        Some(repo) => repo,
        None => {
            let hint = config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config file".to_string());
            return Err(anyhow!(
                "No repository given. Pass REPO (owner/repo) or set upload.repo in {}",
                hint
            ));
        }
    };

    let source = super::source_name(&args.file);
    let doc = super::load_document(&args.file)?;

    if doc.is_empty() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&UploadSummary::default())?);
        } else {
            println!("No tasks found in {}.", source);
        }
        return Ok(());
    }

    let extra: Vec<String> = config
        .upload
        .labels
        .iter()
        .chain(&args.labels)
        .cloned()
        .collect();
    let tasks = with_extra_labels(doc.into_tasks(), &extra);

    let summary = if args.json {
        let summary = preview(repo, &tasks, std::io::sink());
        println!("{}", serde_json::to_string_pretty(&summary)?);
        summary
    } else {
        println!(
            "Found {} tasks to create in repository '{}'.\n",
            tasks.len(),
            repo
        );
        let summary = preview(repo, &tasks, std::io::stdout().lock());
        print_summary(&summary);
        summary
    };

    if !summary.is_success() {
        bail!(
            "{} of {} issues would fail",
            summary.failed_count(),
            tasks.len()
        );
    }

    Ok(())
}
