// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich and local sidereal time.
//!
//! # Greenwich Sidereal Time
//!
//! ```text
//! T    = (JD − 2 451 545.0) / 36 525
//! GMST = 6.697374558 + 2400.051336 T + 0.000025862 T² + ms / 3 600 000   (mod 24)
//! GST  = GMST + 1.002737909 UT                                          (mod 24)
//! GST  = GST − (2′ + 36.2607″ + 1.10034″)                               (one wrap)
//! ```
//!
//! `mod` is the IEEE remainder (sign of the dividend) followed by an explicit
//! `+24` for negative results. The trailing subtraction is a fixed
//! calibration offset tied to the Julian Date correction term in
//! [`crate::julian`]; neither constant is derived from theory.
//!
//! # Local Sidereal Time
//!
//! `LST = GST + λ / 15` with `λ` in degrees East, corrected by a single
//! `±24` step. One step is enough for longitudes in `[-180°, 180°]` and for
//! the one-second advances of a tracking loop.

use qtty::{Degrees, HourAngles};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::civil::UtcTimeOfDay;
use crate::format::Hms;
use crate::julian::JulianDate;

/// GMST at J2000.0, in hours.
pub const GMST_AT_J2000: f64 = 6.697_374_558;

/// Linear GMST rate, hours per Julian century.
pub const GMST_RATE: f64 = 2_400.051_336;

/// Quadratic GMST term, hours per Julian century squared.
pub const GMST_QUADRATIC: f64 = 0.000_025_862;

/// Sidereal hours elapsed per UT hour.
pub const SIDEREAL_PER_SOLAR: f64 = 1.002_737_909;

/// Empirical offset subtracted from every GST: 2 min 37.36104 s.
pub const GST_OFFSET: HourAngles =
    HourAngles::new(2.0 / 60.0 + 36.260_7 / 3_600.0 + 1.100_34 / 3_600.0);

/// Longitude degrees per hour of sidereal time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// One second of time, in hours. The tracking loop advances by this much.
pub const TICK_HOURS: f64 = 1.0 / 3_600.0;

const HOURS_PER_DAY: f64 = 24.0;

/// Floating remainder modulo 24 h, lifted into `[0, 24]` when negative.
#[inline]
fn wrap_remainder(hours: f64) -> f64 {
    let rem = hours % HOURS_PER_DAY;
    if rem < 0.0 {
        rem + HOURS_PER_DAY
    } else {
        rem
    }
}

/// Single `±24` correction.
#[inline]
fn wrap_once(hours: f64) -> f64 {
    if hours < 0.0 {
        // A tiny negative value lifts to exactly 24.0 after rounding.
        let lifted = hours + HOURS_PER_DAY;
        if lifted < HOURS_PER_DAY {
            lifted
        } else {
            0.0
        }
    } else if hours >= HOURS_PER_DAY {
        hours - HOURS_PER_DAY
    } else {
        hours
    }
}

/// Convert an East-positive longitude into an hour offset.
#[inline]
pub fn longitude_to_hours(longitude: Degrees) -> HourAngles {
    HourAngles::new(longitude.value() / DEGREES_PER_HOUR)
}

/// A sidereal time (Greenwich or local) as an hour angle.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct SiderealTime {
    hours: HourAngles,
}

impl SiderealTime {
    // ── constructors ──────────────────────────────────────────────────

    /// Wrap a raw hour value. No normalisation is applied.
    #[inline]
    pub const fn from_hours(hours: f64) -> Self {
        Self {
            hours: HourAngles::new(hours),
        }
    }

    /// Greenwich Sidereal Time for a Julian Date and the UT time of day it was
    /// derived from. Always in `[0, 24)`.
    pub fn greenwich(jd: JulianDate, time: UtcTimeOfDay) -> Self {
        let t = jd.julian_centuries();
        let millis = f64::from(time.millisecond);

        let gmst = GMST_AT_J2000 + (GMST_RATE * t + GMST_QUADRATIC * t * t) + millis / 3_600_000.0;
        let gmst = wrap_remainder(gmst);

        let gst = wrap_remainder(gmst + SIDEREAL_PER_SOLAR * time.ut_hours());
        let gst = wrap_once(gst - GST_OFFSET.value());

        tracing::debug!(jd = jd.value(), t, gmst, gst, "computed greenwich sidereal time");
        Self::from_hours(gst)
    }

    /// Local Sidereal Time at `longitude` (degrees East) from a GST.
    pub fn local(gst: Self, longitude: Degrees) -> Self {
        let lst = gst.hours() + longitude_to_hours(longitude).value();
        Self::from_hours(wrap_once(lst))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying hour-angle quantity.
    #[inline]
    pub const fn quantity(&self) -> HourAngles {
        self.hours
    }

    /// The underlying value in hours.
    #[inline]
    pub const fn hours(&self) -> f64 {
        self.hours.value()
    }

    // ── stepping ──────────────────────────────────────────────────────

    /// Advance by `seconds` of time with a single wrap step.
    #[inline]
    pub fn advance(self, seconds: f64) -> Self {
        Self::from_hours(wrap_once(self.hours() + seconds * TICK_HOURS))
    }

    /// Advance by exactly one second (1/3600 h).
    #[inline]
    pub fn tick(self) -> Self {
        self.advance(1.0)
    }
}

/// Renders as `HH:MM:SS.ffffffff`.
impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Hms(self.hours()), f)
    }
}

#[cfg(feature = "serde")]
impl Serialize for SiderealTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.hours())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SiderealTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::from_hours(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::CivilDateTime;

    fn gst_for(date: CivilDateTime) -> SiderealTime {
        SiderealTime::greenwich(JulianDate::from_civil(&date), date.time_of_day())
    }

    #[test]
    fn offset_constant_is_two_minutes_thirty_seven_seconds() {
        let seconds = GST_OFFSET.value() * 3_600.0;
        assert!((seconds - 157.361_04).abs() < 1e-9);
    }

    #[test]
    fn greenwich_regression_values() {
        let cases = [
            (CivilDateTime::J2000, 18.752_227_894_341_48),
            (CivilDateTime::new(2000, 1, 1, 0, 0, 0, 0), 6.686_518_074_144_338),
            (CivilDateTime::new(1990, 6, 15, 0, 0, 0, 0), 17.622_070_471_298_407),
            (
                CivilDateTime::new(2026, 10, 17, 3, 25, 41, 250),
                5.235_537_512_024_143,
            ),
        ];
        for (date, expected) in cases {
            let gst = gst_for(date).hours();
            assert!((gst - expected).abs() < 1e-9, "{date}: {gst}");
        }
    }

    #[test]
    fn greenwich_stays_in_range() {
        for year in [-4000, 100, 1582, 1900, 2000, 2100, 9999] {
            for month in [1, 6, 12] {
                let gst = gst_for(CivilDateTime::new(year, month, 15, 23, 59, 59, 999)).hours();
                assert!((0.0..24.0).contains(&gst), "{year}-{month}: {gst}");
            }
        }
    }

    #[test]
    fn zero_longitude_is_identity() {
        let gst = gst_for(CivilDateTime::new(2026, 10, 17, 0, 0, 0, 0));
        assert_eq!(SiderealTime::local(gst, Degrees::new(0.0)), gst);
    }

    #[test]
    fn local_applies_longitude_with_single_wrap() {
        let gst = SiderealTime::from_hours(5.235_537_512_024_143);

        let west = SiderealTime::local(gst, Degrees::new(-75.5)).hours();
        assert!((west - 0.202_204_178_690_809_75).abs() < 1e-12);

        let east = SiderealTime::local(gst, Degrees::new(170.0)).hours();
        assert!((east - 16.568_870_845_357_477).abs() < 1e-12);

        let late = SiderealTime::from_hours(23.0);
        let wrapped = SiderealTime::local(late, Degrees::new(30.0)).hours();
        assert!((wrapped - 1.0).abs() < 1e-12);

        let early = SiderealTime::from_hours(1.0);
        let wrapped = SiderealTime::local(early, Degrees::new(-30.0)).hours();
        assert!((wrapped - 23.0).abs() < 1e-12);
    }

    #[test]
    fn longitude_outside_half_turn_is_accepted() {
        let lst = SiderealTime::local(SiderealTime::from_hours(0.0), Degrees::new(200.0));
        assert!((lst.hours() - 200.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn an_hour_of_ticks_returns_to_start() {
        for start in [0.0, 7.25, 23.9] {
            let origin = SiderealTime::from_hours(start);
            let mut gst = origin;
            for _ in 0..3_600 {
                gst = gst.tick();
            }
            let diff = (gst.hours() - (origin.hours() + 1.0) % 24.0).abs();
            assert!(diff < 1e-9, "start {start}: {}", gst.hours());
        }
    }

    #[test]
    fn a_day_of_ticks_is_a_full_turn() {
        let origin = SiderealTime::from_hours(0.0);
        let mut gst = origin;
        for _ in 0..86_400 {
            gst = gst.tick();
        }
        let diff = (gst.hours() - origin.hours()).rem_euclid(24.0);
        assert!(diff.min(24.0 - diff) < 1e-9, "{}", gst.hours());
    }

    #[test]
    fn tick_wraps_at_midnight() {
        let gst = SiderealTime::from_hours(24.0 - TICK_HOURS / 2.0).tick();
        assert!(gst.hours() < TICK_HOURS);
        assert!(gst.hours() >= 0.0);
    }

    #[test]
    fn advance_matches_repeated_ticks() {
        let start = SiderealTime::from_hours(3.0);
        assert_eq!(start.tick().hours(), 3.0 + TICK_HOURS);
        assert!((start.advance(2.0).hours() - start.tick().tick().hours()).abs() < 1e-12);
        assert!((start.advance(90.0).hours() - 3.025).abs() < 1e-12);
        assert!((start.advance(-1.0).hours() - (3.0 - TICK_HOURS)).abs() < 1e-12);
    }

    #[test]
    fn display_uses_sexagesimal_form() {
        assert_eq!(SiderealTime::from_hours(6.5).to_string(), "06:30:00.00000000");
    }
}
