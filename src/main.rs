use anyhow::Result;
use clap::Parser;
use kakebo::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
