// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `sidereal-clock` binary.
//!
//! Logs go to stderr so the redrawn LST line on stdout stays intact.
//! `RUST_LOG` overrides the `-v` flags. The first Ctrl-C cancels the ticker,
//! so the session finishes its line and returns instead of dying mid-redraw.
//! A second Ctrl-C exits at once, which also covers a blocked prompt.

mod cli;

use anyhow::Context;
use clap::Parser;
use sidereal_clock::{CancelToken, Session, SystemClock};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

use cli::Cli;

/// Conventional status for a process ended by SIGINT (128 + 2).
const INTERRUPTED_EXIT_CODE: i32 = 130;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let config = cli.config();
    let cancel = CancelToken::new();
    let ticker = config.sleep_ticker().with_cancel(cancel.clone());

    ctrlc::set_handler(move || {
        if cancel.is_cancelled() {
            process::exit(INTERRUPTED_EXIT_CODE);
        }
        tracing::info!("interrupt received, stopping");
        cancel.cancel();
    })
    .context("installing the interrupt handler")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(SystemClock, stdin.lock(), stdout.lock(), ticker, config);
    session.run()?;

    Ok(())
}
