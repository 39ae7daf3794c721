use anyhow::Result;
use clap::Parser;

use publication_citations::cli::{Cli, Commands};
use publication_citations::commands::{run_extract, run_fetch};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch(args) => {
            run_fetch(args)?;
        }
        Commands::Extract(args) => {
            run_extract(args)?;
        }
    }

    Ok(())
}
