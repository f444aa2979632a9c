//! `mdi fmt` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct FmtArgs {
    /// Markdown file with task blocks ("-" reads stdin)
    file: PathBuf,
}

pub fn run(args: FmtArgs) -> Result<()> {
    let doc = super::load_document(&args.file)?;
    print!("{}", doc.to_markdown());
    Ok(())
}
