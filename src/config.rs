// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Session configuration.
//!
//! The defaults reproduce the interactive behaviour: prompt for the
//! longitude, tick once per second, run until interrupted.

use qtty::Degrees;
use std::time::Duration;

use crate::ticker::{SleepTicker, DEFAULT_PERIOD};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Observer longitude, degrees East. `None` prompts on the console.
    pub longitude: Option<Degrees>,
    /// Number of LST redraws before stopping. `None` runs forever.
    pub ticks: Option<u64>,
    /// Pause between redraws.
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            longitude: None,
            ticks: None,
            interval: DEFAULT_PERIOD,
        }
    }
}

impl Config {
    /// Wall-clock ticker matching this configuration.
    pub fn sleep_ticker(&self) -> SleepTicker {
        let ticker = SleepTicker::new(self.interval);
        match self.ticks {
            Some(ticks) => ticker.with_limit(ticks),
            None => ticker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::Ticker;

    #[test]
    fn default_prompts_and_runs_forever() {
        let config = Config::default();
        assert!(config.longitude.is_none());
        assert!(config.ticks.is_none());
        assert_eq!(config.interval, Duration::from_secs(1));
    }

    #[test]
    fn tick_limit_reaches_the_ticker() {
        let config = Config {
            ticks: Some(1),
            interval: Duration::ZERO,
            ..Config::default()
        };
        assert!(config.sleep_ticker().wait().is_break());
    }
}
