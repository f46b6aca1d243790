// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Console session: header, longitude prompt, and the LST redraw loop.
//!
//! ```text
//! Date: 2026-10-17, Time: 03:25:41.250
//! J2000.0 Date & Time: Sat Jan  1 12:00:00 2000
//!
//! Julian Date: 2461332.64
//! Greenwich Sidereal Time: 05:14:07.93504328
//! Enter longitude:
//! \rLocal Sidreal Time: 00:12:07.93504328
//! ```
//!
//! The last line is redrawn in place (carriage return, no newline) once per
//! tick. Every collaborator is injected, so a session runs equally against
//! the real console or in-memory buffers.

use qtty::Degrees;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::civil::CivilDateTime;
use crate::clock::Clock;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::julian::JulianDate;
use crate::sidereal::SiderealTime;
use crate::ticker::Ticker;
use crate::tracker::{Event, Tracker};

/// Parse a longitude in degrees from console text.
///
/// Uses the first whitespace-separated token. Anything that is not a finite
/// real number is rejected.
pub fn parse_longitude(text: &str) -> Result<Degrees> {
    let token = text.split_whitespace().next().unwrap_or_default();
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Degrees::new(value)),
        _ => {
            warn!(input = text.trim(), "rejected longitude input");
            Err(Error::InvalidLongitude {
                input: text.trim().to_string(),
            })
        }
    }
}

/// Read lines until one is non-blank, then parse it as a longitude.
pub fn read_longitude<R: BufRead>(input: &mut R) -> Result<Degrees> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput);
        }
        if !line.trim().is_empty() {
            return parse_longitude(&line);
        }
    }
}

/// The fixed J2000.0 verification timestamp in `asctime` layout.
pub fn j2000_banner() -> String {
    CivilDateTime::J2000
        .to_naive()
        .map(|epoch| epoch.format("%c").to_string())
        .unwrap_or_default()
}

/// One interactive tracking session.
pub struct Session<C, R, W, T> {
    clock: C,
    input: R,
    output: W,
    ticker: T,
    config: Config,
}

impl<C, R, W, T> Session<C, R, W, T>
where
    C: Clock,
    R: BufRead,
    W: Write,
    T: Ticker,
{
    pub fn new(clock: C, input: R, output: W, ticker: T, config: Config) -> Self {
        Self {
            clock,
            input,
            output,
            ticker,
            config,
        }
    }

    /// Run until the ticker stops. Returns the tracker in its final state.
    pub fn run(&mut self) -> Result<Tracker> {
        let civil = CivilDateTime::from_utc(self.clock.now());
        info!(%civil, "session started");

        writeln!(self.output, "Date: {civil}")?;
        writeln!(self.output, "J2000.0 Date & Time: {}\n", j2000_banner())?;

        let jd = JulianDate::from_civil(&civil);
        debug!(jd = jd.value(), "computed julian date");
        writeln!(self.output, "Julian Date: {jd:.2}")?;

        let gst = SiderealTime::greenwich(jd, civil.time_of_day());
        writeln!(self.output, "Greenwich Sidereal Time: {gst}")?;

        let longitude = match self.config.longitude {
            Some(longitude) => longitude,
            None => {
                writeln!(self.output, "Enter longitude: ")?;
                self.output.flush()?;
                read_longitude(&mut self.input)?
            }
        };

        let mut tracker = Tracker::new(gst);
        tracker.handle(Event::LongitudeEntered(longitude));

        loop {
            if let Some(lst) = tracker.handle(Event::Tick) {
                write!(self.output, "\rLocal Sidreal Time: {lst}")?;
                self.output.flush()?;
            }
            if self.ticker.wait().is_break() {
                break;
            }
        }

        writeln!(self.output)?;
        self.output.flush()?;
        info!(gst = tracker.gst().hours(), "session stopped");
        Ok(tracker)
    }
}
