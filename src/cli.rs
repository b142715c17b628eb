use std::path::PathBuf;

use clap::Parser;
use fireworks_intro::Color;

#[derive(Parser)]
#[command(name = "fireworks-intro")]
#[command(about = "Firework show that reveals its message after an intro burst", long_about = None)]
#[command(after_help = "Press 'q', ESC, or Ctrl+C to exit")]
pub struct Cli {
    /// Background color as hex (e.g. --bg-color 1a1b26)
    #[arg(long, value_name = "RRGGBB", value_parser = Color::from_hex)]
    pub bg_color: Option<Color>,

    /// Seed for launch positions, burst speeds and colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Line of text revealed after the intro burst (repeatable)
    #[arg(short, long = "message", value_name = "TEXT")]
    pub messages: Vec<String>,

    /// Write log output to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
