// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use stick_studio::cli::args::{Cli, Commands};
use stick_studio::cli::{edit, snapshot};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Edit(args) => edit::run_edit(&args),
        Commands::Snapshot(args) => snapshot::run_snapshot(&args),
    }
}
