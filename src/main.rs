use std::io;

use anyhow::Context;
use clap::Parser;
use lending_desk::{Config, Shell};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt().with_env_filter(config.env_filter()).with_writer(io::stderr).init();

    if config.no_color {
        colored::control::set_override(false);
    }

    let library = config.library();
    tracing::info!(
        items = library.query().items().len(),
        borrowers = library.query().borrowers().len(),
        "lending desk ready"
    );

    let mut shell = Shell::new(library, io::stdin().lock(), io::stdout().lock());
    shell.run().context("interactive session failed")?;

    Ok(())
}
