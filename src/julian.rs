// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date: continuous day count with the time of day in the fraction.
//!
//! [`JulianDate::from_civil`] evaluates the calendar formula
//!
//! ```text
//! a  = ⌊year / 100⌋
//! b  = 2 − a + ⌊a / 4⌋            (year ≥ 1582, else 0)
//! JD = ⌊365.25 (year + 4716)⌋ + ⌊30.6001 (month + 1)⌋ + day + b − 1524.5
//!      + hour/24 + minute/1440 + second/86400 + millisecond/86400000
//!      + 2.00000006
//! ```
//!
//! The month is used as-is (January is `1`, not `13` of the previous year)
//! and the trailing constant is an empirical calibration term. Both are part
//! of the numeric contract: downstream sidereal times are tuned against them.

use qtty::Days;
use std::fmt;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::civil::CivilDateTime;

/// Empirical correction added to every Julian Date.
pub const JD_CORRECTION: Days = Days::new(2.000_000_06);

/// First year to which the Gregorian century correction applies.
const GREGORIAN_START_YEAR: i32 = 1582;

/// A Julian Date in days.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Evaluate the calendar formula for a civil UTC date and time.
    ///
    /// Total over its inputs: invalid months or days produce a finite but
    /// meaningless day count rather than an error.
    pub fn from_civil(date: &CivilDateTime) -> Self {
        let year = f64::from(date.year);
        let a = (year / 100.0).floor();
        let b = if date.year >= GREGORIAN_START_YEAR {
            2.0 - a + (a / 4.0).floor()
        } else {
            0.0
        };

        let day_number = (365.25 * (year + 4_716.0)).floor()
            + (30.600_1 * (f64::from(date.month) + 1.0)).floor()
            + f64::from(date.day)
            + b
            - 1_524.5;

        let day_fraction = f64::from(date.hour) / 24.0
            + f64::from(date.minute) / 1_440.0
            + f64::from(date.second) / 86_400.0
            + f64::from(date.millisecond) / 86_400_000.0;

        Self::new(day_number + day_fraction) + JD_CORRECTION
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian centuries elapsed since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        (self.value() - Self::J2000.value()) / Self::JULIAN_CENTURY.value()
    }
}

impl From<&CivilDateTime> for JulianDate {
    #[inline]
    fn from(date: &CivilDateTime) -> Self {
        Self::from_civil(date)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

/// Prints the bare day count, honouring a requested precision (`{:.2}`).
impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.value()),
            None => write!(f, "{}", self.value()),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}
