use anyhow::Result;
use clap::Parser;

use hexstr::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
