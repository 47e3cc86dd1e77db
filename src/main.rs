use anyhow::Result;
use clap::{Parser, Subcommand};
use gosat::algorithm::needle;

#[derive(Parser)]
#[command(name = "gosat")]
#[command(version = "0.1.0")]
#[command(about = "Global sequence alignment with affine gap penalties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Needleman-Wunsch global alignment of every query against every subject
    Needle(needle::NeedleArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Needle(args) => {
            needle::run(args)?;
        }
    }
    Ok(())
}
