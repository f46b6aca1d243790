// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tracking state machine.
//!
//! ```text
//!                  LongitudeEntered(λ)
//! AwaitingLongitude ─────────────────▶ Tracking ◀─┐
//!        │ Tick (ignored)                 │  Tick  │ LongitudeEntered(λ')
//!        └──────┘                         └────────┘
//! ```
//!
//! A `Tick` while tracking reports the LST for the current GST and then
//! advances GST by one second. Entering a new longitude while tracking keeps
//! the running GST.

use qtty::Degrees;

use crate::sidereal::SiderealTime;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TrackerState {
    AwaitingLongitude {
        gst: SiderealTime,
    },
    Tracking {
        gst: SiderealTime,
        longitude: Degrees,
    },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
    LongitudeEntered(Degrees),
    Tick,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tracker {
    state: TrackerState,
}

impl Tracker {
    /// Start awaiting a longitude from a freshly computed GST.
    pub const fn new(gst: SiderealTime) -> Self {
        Self {
            state: TrackerState::AwaitingLongitude { gst },
        }
    }

    pub const fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Current Greenwich sidereal time.
    pub fn gst(&self) -> SiderealTime {
        match self.state {
            TrackerState::AwaitingLongitude { gst } | TrackerState::Tracking { gst, .. } => gst,
        }
    }

    /// Apply an event. Returns the LST to display when the event is a tick
    /// while tracking.
    pub fn handle(&mut self, event: Event) -> Option<SiderealTime> {
        match (self.state, event) {
            (_, Event::LongitudeEntered(longitude)) => {
                tracing::info!(longitude = longitude.value(), "tracking longitude");
                self.state = TrackerState::Tracking {
                    gst: self.gst(),
                    longitude,
                };
                None
            }
            (TrackerState::AwaitingLongitude { .. }, Event::Tick) => None,
            (TrackerState::Tracking { gst, longitude }, Event::Tick) => {
                let lst = SiderealTime::local(gst, longitude);
                tracing::trace!(gst = gst.hours(), lst = lst.hours(), "tick");
                self.state = TrackerState::Tracking {
                    gst: gst.tick(),
                    longitude,
                };
                Some(lst)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidereal::TICK_HOURS;

    #[test]
    fn ticks_are_ignored_until_a_longitude_arrives() {
        let gst = SiderealTime::from_hours(10.0);
        let mut tracker = Tracker::new(gst);
        assert_eq!(tracker.handle(Event::Tick), None);
        assert_eq!(tracker.gst(), gst);
        assert!(matches!(
            tracker.state(),
            TrackerState::AwaitingLongitude { .. }
        ));
    }

    #[test]
    fn tracking_reports_then_advances() {
        let mut tracker = Tracker::new(SiderealTime::from_hours(10.0));
        assert_eq!(tracker.handle(Event::LongitudeEntered(Degrees::new(15.0))), None);

        let first = tracker.handle(Event::Tick).unwrap();
        assert!((first.hours() - 11.0).abs() < 1e-12);

        let second = tracker.handle(Event::Tick).unwrap();
        assert!((second.hours() - (11.0 + TICK_HOURS)).abs() < 1e-12);
        assert!((tracker.gst().hours() - (10.0 + 2.0 * TICK_HOURS)).abs() < 1e-12);
    }

    #[test]
    fn new_longitude_keeps_running_gst() {
        let mut tracker = Tracker::new(SiderealTime::from_hours(0.0));
        tracker.handle(Event::LongitudeEntered(Degrees::new(0.0)));
        tracker.handle(Event::Tick);
        let gst = tracker.gst();

        tracker.handle(Event::LongitudeEntered(Degrees::new(-90.0)));
        assert_eq!(
            tracker.state(),
            &TrackerState::Tracking {
                gst,
                longitude: Degrees::new(-90.0)
            }
        );
        let lst = tracker.handle(Event::Tick).unwrap();
        assert!((lst.hours() - (24.0 - 6.0 + TICK_HOURS)).abs() < 1e-12);
    }
}
