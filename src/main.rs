//! md-issues - Turn markdown task plans into issue-tracker records

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use md_issues::cli::{self, Cli, Commands};
use md_issues::config::Config;

fn main() -> Result<()> {
    if std::env::var("MD_ISSUES_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("md_issues=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "mdi", &mut std::io::stdout());
            Ok(())
        }
        Commands::Fmt(args) => cli::fmt::run(args),
        Commands::List(args) => cli::list::run(&Config::load()?, args),
        Commands::Plan(args) => cli::plan::run(&Config::load()?, args),
    }
}
