// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sidereal Clock
//!
//! Local Sidereal Time from the system UTC clock and an observer longitude.
//!
//! # Pipeline
//!
//! ```text
//! DateTime<Utc> ─▶ CivilDateTime ─▶ JulianDate ─▶ GST ─▶ LST ─▶ HH:MM:SS.ffffffff
//! ```
//!
//! - [`CivilDateTime`] — broken-down UTC date and time, millisecond resolution.
//! - [`JulianDate`] — continuous day count ([`JulianDate::from_civil`]).
//! - [`SiderealTime`] — Greenwich ([`SiderealTime::greenwich`]) and local
//!   ([`SiderealTime::local`]) sidereal time as an hour angle in `[0, 24)`.
//! - [`format_hours`] / [`Hms`] — truncating sexagesimal rendering.
//!
//! # Tracking
//!
//! - [`Tracker`] — `AwaitingLongitude → Tracking` state machine advancing GST
//!   by one second per [`Event::Tick`].
//! - [`Ticker`] — loop pacing: [`SleepTicker`] for wall-clock seconds,
//!   [`ManualTicker`] for tests.
//! - [`Session`] — the console protocol, generic over [`Clock`], input,
//!   output and [`Ticker`].
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use qtty::Degrees;
//! use sidereal_clock::{CivilDateTime, JulianDate, SiderealTime};
//!
//! let now = Utc.with_ymd_and_hms(2026, 10, 17, 3, 25, 41).unwrap();
//! let civil = CivilDateTime::from_utc(now);
//! let jd = JulianDate::from_civil(&civil);
//! let gst = SiderealTime::greenwich(jd, civil.time_of_day());
//! let lst = SiderealTime::local(gst, Degrees::new(-75.5));
//! assert!((0.0..24.0).contains(&lst.hours()));
//! ```

mod civil;
mod clock;
mod config;
mod error;
mod format;
mod julian;
mod session;
pub mod sidereal;
mod ticker;
mod tracker;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use civil::{CivilDateTime, UtcTimeOfDay};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use format::{format_hours, Hms, FRACTION_DIGITS};
pub use julian::{JulianDate, JD_CORRECTION};
pub use session::{j2000_banner, parse_longitude, read_longitude, Session};
pub use sidereal::{longitude_to_hours, SiderealTime};
pub use ticker::{CancelToken, ManualTicker, SleepTicker, Ticker, DEFAULT_PERIOD};
pub use tracker::{Event, Tracker, TrackerState};
