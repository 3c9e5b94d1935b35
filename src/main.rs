//! CLI entry point for maze generation and rendering

use clap::Parser;
use mazetile::io::cli::{Cli, MazeRunner};
use mazetile::io::logging::init_tracing;

fn main() -> mazetile::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut runner = MazeRunner::new(cli);
    runner.run()?;
    Ok(())
}
