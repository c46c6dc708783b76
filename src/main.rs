//! CLI entry point for sprite outline generation

use clap::Parser;
use sprite_outline::io::cli::{Cli, SpriteBatch};

fn main() -> sprite_outline::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut batch = SpriteBatch::new(cli);
    batch.process().map(|_| ())
}
