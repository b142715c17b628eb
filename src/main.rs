mod cli;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use fireworks_intro::app::{self, Options};

use crate::cli::Cli;

const DEFAULT_CONTENT: [&str; 2] = ["Welcome!", "Press q to leave the show"];

fn init_logging(cli: &Cli) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if cli.verbose > 0 {
        builder.filter_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    }

    // The show owns the screen, so stderr output would tear through it
    if let Some(path) = &cli.log_file {
        let file = File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let content = if cli.messages.is_empty() {
        DEFAULT_CONTENT.iter().map(|line| line.to_string()).collect()
    } else {
        cli.messages.clone()
    };

    let options = Options {
        bg_color: cli.bg_color.map_or((0, 0, 0), |c| c.to_rgb()),
        seed: cli.seed,
        content,
    };

    app::run(&options).context("firework show failed")
}
