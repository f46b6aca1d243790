// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pacing for the tracking loop.
//!
//! A [`Ticker`] is asked to wait once per displayed tick and answers whether
//! the loop should keep going. [`SleepTicker`] blocks the thread for a fixed
//! period without compensating for the time spent computing, so a long run
//! drifts slowly behind wall-clock time. [`ManualTicker`] never sleeps.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default tick period: one second.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Decides how long the loop pauses between ticks and when it stops.
pub trait Ticker {
    /// Wait for the next tick. `Break` ends the loop.
    fn wait(&mut self) -> ControlFlow<()>;
}

impl<T: Ticker + ?Sized> Ticker for &mut T {
    #[inline]
    fn wait(&mut self) -> ControlFlow<()> {
        (**self).wait()
    }
}

/// Shared stop flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request every ticker holding this token to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Counts down an optional tick budget. `None` never runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Budget(Option<u64>);

impl Budget {
    /// Spend one tick; returns `true` once nothing is left.
    fn spend(&mut self) -> bool {
        match self.0.as_mut() {
            Some(remaining) => {
                *remaining = remaining.saturating_sub(1);
                *remaining == 0
            }
            None => false,
        }
    }
}

/// Sleeps the current thread for a fixed period on every tick.
#[derive(Debug, Clone)]
pub struct SleepTicker {
    period: Duration,
    budget: Budget,
    cancel: CancelToken,
}

impl SleepTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            budget: Budget(None),
            cancel: CancelToken::new(),
        }
    }

    /// Stop after `ticks` ticks have been displayed.
    ///
    /// The first tick is displayed before the ticker is consulted, so the
    /// smallest effective limit is `1`; a limit of `0` is raised to it.
    pub fn with_limit(mut self, ticks: u64) -> Self {
        self.budget = Budget(Some(ticks.max(1)));
        self
    }

    /// Observe an externally owned cancellation flag.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that stops this ticker when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub const fn period(&self) -> Duration {
        self.period
    }
}

impl Default for SleepTicker {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

impl Ticker for SleepTicker {
    fn wait(&mut self) -> ControlFlow<()> {
        if self.budget.spend() || self.cancel.is_cancelled() {
            return ControlFlow::Break(());
        }
        std::thread::sleep(self.period);
        if self.cancel.is_cancelled() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Ticker that returns immediately, stopping after a fixed number of ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualTicker {
    limit: u64,
    waited: u64,
}

impl ManualTicker {
    pub const fn new(limit: u64) -> Self {
        Self { limit, waited: 0 }
    }

    /// Number of times [`Ticker::wait`] has been called.
    pub const fn waited(&self) -> u64 {
        self.waited
    }
}

impl Ticker for ManualTicker {
    fn wait(&mut self) -> ControlFlow<()> {
        self.waited += 1;
        if self.waited >= self.limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
