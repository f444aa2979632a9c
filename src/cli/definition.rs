//! Command-line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::fmt::FmtArgs;
use super::list::ListArgs;
use super::plan::PlanArgs;

#[derive(Parser)]
#[command(name = "mdi")]
#[command(about = "Turn markdown task plans into issue-tracker records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the tasks found in a markdown file
    List(ListArgs),

    /// Preview the issues a markdown file would create in a repository
    Plan(PlanArgs),

    /// Print the parsed tasks back in normalized markdown
    Fmt(FmtArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
