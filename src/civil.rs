// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Broken-down UTC civil date and time.
//!
//! [`CivilDateTime`] is the calendar view of an instant that feeds the
//! Julian Date formula: integer year, month, day and time-of-day fields with
//! millisecond resolution. It is built from a `chrono::DateTime<Utc>` and is
//! never validated; out-of-range fields flow through the formulas unchanged.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Milliseconds in one second.
const MILLIS_PER_SECOND: u32 = 1_000;

/// A UTC calendar date with time of day, at millisecond resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDateTime {
    pub year: i32,
    /// Calendar month, `1..=12`.
    pub month: u32,
    /// Day of the month, `1..=31`.
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Sub-second part, `0..=999`.
    pub millisecond: u32,
}

/// The time-of-day half of a [`CivilDateTime`].
///
/// Sidereal time needs the UT hour separately from the Julian Date, so the
/// fields travel as their own value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtcTimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl UtcTimeOfDay {
    /// Midnight, `00:00:00.000`.
    pub const MIDNIGHT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Universal Time expressed as decimal hours.
    #[inline]
    pub fn ut_hours(&self) -> f64 {
        f64::from(self.hour)
            + f64::from(self.minute) / 60.0
            + f64::from(self.second) / 3_600.0
            + f64::from(self.millisecond) / 3_600_000.0
    }
}

impl CivilDateTime {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from explicit fields. No range checking is performed.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// J2000.0 reference epoch: 2000-01-01T12:00:00.000 UTC.
    pub const J2000: Self = Self::new(2000, 1, 1, 12, 0, 0, 0);

    /// Break a `chrono::DateTime<Utc>` into civil fields.
    ///
    /// chrono encodes a leap second as a nanosecond value of one second or
    /// more; the millisecond field is clamped to `999` in that case.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let millisecond = (datetime.nanosecond() / 1_000_000).min(MILLIS_PER_SECOND - 1);
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
            millisecond,
        }
    }

    /// Back to a naive chrono value, or `None` if a field is out of range.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_milli_opt(
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        )
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Time-of-day fields only.
    #[inline]
    pub const fn time_of_day(&self) -> UtcTimeOfDay {
        UtcTimeOfDay::new(self.hour, self.minute, self.second, self.millisecond)
    }
}

impl From<DateTime<Utc>> for CivilDateTime {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

/// Renders `YYYY-MM-DD, Time: HH:MM:SS.mmm`, the body of the startup `Date:` line.
impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}, Time: {:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}
