mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use ride_core::session::{LineIo, Session};
use ride_core::Platform;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter '{filter}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter)?;

    let mut platform = Platform::new(cli.platform_config());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let io = LineIo::new(stdin.lock(), stdout.lock());

    let outcome = Session::new(&mut platform, io)
        .run()
        .context("session i/o failed")?;
    info!(
        rounds = outcome.rounds,
        exited_by_user = outcome.exited_by_user,
        "session finished"
    );

    if cli.summary {
        let snapshot = serde_json::to_string_pretty(&platform.snapshot())
            .context("failed to serialize platform snapshot")?;
        println!("{snapshot}");
    }
    Ok(())
}
