//! CLI entry point for the maze generator

use clap::Parser;
use mazegen::io::cli::{Cli, MazeRunner};

fn main() -> mazegen::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut runner = MazeRunner::new(cli);
    runner.run().map(|_| ())
}
