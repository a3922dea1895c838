use clap::Parser;
use lcd_analyzer::cli::{run, Cli};
use lcd_analyzer::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
