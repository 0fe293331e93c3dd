// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Editor Keys:
    1-7           Select stroke color (black, grey, orange, green, red, blue, purple)
    S             Save the current pose to stick.png
    R             Start recording
    E             Stop recording and encode stick.gif
    Esc           Quit

Examples:
    stick-studio edit
    stick-studio edit --output renders --interval 100
    stick-studio edit --quality 1 --verbose false
    stick-studio snapshot --color red --output renders"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive pose editor
    Edit(EditArgs),
    /// Render the default pose to stick.png without opening a window
    Snapshot(SnapshotArgs),
}

/// Arguments for the edit command.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Directory where stick.png and stick.gif are written
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Animation sampling interval in milliseconds
    #[arg(long, default_value_t = 100)]
    pub interval: u64,

    /// GIF quantization quality (1 = best, 30 = fastest)
    #[arg(long, default_value_t = 10)]
    pub quality: i32,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Arguments for the snapshot command.
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Stroke color (black, grey, orange, green, red, blue, purple)
    #[arg(short, long, default_value = "black")]
    pub color: String,

    /// Directory where stick.png is written
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
