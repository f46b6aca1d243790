// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use clap::{ArgAction, Parser};
use qtty::Degrees;
use sidereal_clock::Config;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "sidereal-clock")]
#[command(about = "Track local sidereal time from the system UTC clock")]
pub struct Cli {
    /// Observer longitude in degrees East (skips the prompt)
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Stop after this many LST updates (default: run until interrupted)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub ticks: Option<u64>,

    /// Milliseconds between LST updates
    #[arg(long, default_value_t = 1_000)]
    pub interval_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn config(&self) -> Config {
        Config {
            longitude: self.longitude.map(Degrees::new),
            ticks: self.ticks,
            interval: Duration::from_millis(self.interval_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_is_the_interactive_default() {
        let cli = Cli::try_parse_from(["sidereal-clock"]).unwrap();
        assert_eq!(cli.config(), Config::default());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "sidereal-clock",
            "--longitude",
            "-75.5",
            "--ticks",
            "3",
            "--interval-ms",
            "250",
            "-vv",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.longitude, Some(Degrees::new(-75.5)));
        assert_eq!(config.ticks, Some(3));
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn zero_ticks_is_rejected() {
        assert!(Cli::try_parse_from(["sidereal-clock", "--ticks", "0"]).is_err());
    }
}
