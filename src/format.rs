// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sexagesimal rendering of fractional hours as `HH:MM:SS.ffffffff`.
//!
//! Every component is obtained by truncation, never rounding, so a value just
//! below a boundary keeps its lower digits (`23.999999999` renders as
//! `23:59:59.9999…`, not `24:00:00`). No range checking is applied: callers
//! normalise into `[0, 24)` first.

use std::fmt;

/// Number of fractional-second digits printed.
pub const FRACTION_DIGITS: usize = 8;

const FRACTION_SCALE: f64 = 1e8;
const FRACTION_MAX: u64 = 99_999_999;

/// Display adapter rendering a fractional hour value as `HH:MM:SS.ffffffff`.
///
/// ```
/// use sidereal_clock::Hms;
/// assert_eq!(Hms(6.5).to_string(), "06:30:00.00000000");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Hms(pub f64);

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0;
        let h = hours.trunc();
        let fractional_hours = hours - h;

        let minutes = fractional_hours * 60.0;
        let m = minutes.trunc();
        let fractional_minutes = minutes - m;

        let seconds = fractional_minutes * 60.0;
        let s = seconds.trunc();
        let fractional_seconds = seconds - s;

        // fractional_seconds < 1, but the scaled product can still round up to 1e8.
        let digits = ((fractional_seconds * FRACTION_SCALE).trunc() as u64).min(FRACTION_MAX);

        write!(
            f,
            "{:02}:{:02}:{:02}.{:0width$}",
            h as i64,
            m as i64,
            s as i64,
            digits,
            width = FRACTION_DIGITS
        )
    }
}

/// Render `hours` as `HH:MM:SS.ffffffff`.
#[inline]
pub fn format_hours(hours: f64) -> String {
    Hms(hours).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zeros() {
        assert_eq!(format_hours(0.0), "00:00:00.00000000");
    }

    #[test]
    fn truncates_below_midnight() {
        let text = format_hours(23.999_999_999);
        assert!(text.starts_with("23:59:59.9999"), "{text}");
        let fraction = text.rsplit('.').next().unwrap();
        assert_eq!(fraction.len(), FRACTION_DIGITS);
    }

    #[test]
    fn exact_components() {
        assert_eq!(format_hours(12.5), "12:30:00.00000000");
        let text = format_hours(1.0 + 2.0 / 60.0 + 3.25 / 3_600.0);
        assert_eq!(text.len(), 17);
        assert!(text.starts_with("01:02:03.2"), "{text}");
    }

    #[test]
    fn single_digit_fields_are_padded() {
        let text = format_hours(5.0 + 7.0 / 60.0 + 9.5 / 3_600.0);
        assert!(text.starts_with("05:07:09.4999") || text.starts_with("05:07:09.5000"));
    }

    #[test]
    fn hours_beyond_a_day_are_not_wrapped() {
        assert_eq!(format_hours(25.0), "25:00:00.00000000");
    }

    #[test]
    fn fraction_never_exceeds_eight_digits() {
        let just_below = 1.0 - f64::EPSILON;
        let text = format_hours(just_below);
        assert_eq!(text.len(), "00:59:59.99999999".len(), "{text}");
    }

    #[test]
    fn hms_writes_into_formatter() {
        assert_eq!(format!("[{}]", Hms(18.0)), "[18:00:00.00000000]");
    }
}
