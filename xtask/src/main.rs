//! xtask - Development tasks for md-issues

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, Shell};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for md-issues")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the `mdi` CLI reference from clap definitions
    GenDocs {
        /// Output directory
        #[arg(long, default_value = "docs/cli")]
        out: PathBuf,
    },

    /// Write bash, zsh and fish completion scripts for `mdi`
    GenCompletions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs { out } => generate_cli_docs(&out),
        Commands::GenCompletions { out } => generate_completions(&out),
    }
}

fn generate_cli_docs(docs_dir: &Path) {
    let markdown = clap_markdown::help_markdown::<md_issues::cli::Cli>();

    fs::create_dir_all(docs_dir).expect("Failed to create docs directory");

    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Generated CLI documentation at {}", output_path.display());
}

fn generate_completions(out_dir: &Path) {
    fs::create_dir_all(out_dir).expect("Failed to create completions directory");

    let mut cmd = md_issues::cli::Cli::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let path = generate_to(shell, &mut cmd, "mdi", out_dir)
            .expect("Failed to write completion script");
        println!("Generated {} completions at {}", shell, path.display());
    }
}
