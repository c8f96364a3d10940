//! CLI entry point for building boards and replaying tile activations

use clap::Parser;
use gameboards::io::cli::{Cli, SessionRunner, init_logging};

fn main() -> gameboards::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let runner = SessionRunner::new(cli);
    runner.run(&mut std::io::stdout().lock())
}
