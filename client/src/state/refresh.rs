//! Auto-refresh scheduling state.
//!
//! DESIGN
//! ======
//! Refresh is a chained delay: a timer is armed only after the previous timed
//! refresh finished. Each arm hands out a [`RefreshTicket`] stamped with the
//! current epoch. Disarming bumps the epoch, so a timer that is already
//! sleeping wakes up holding a stale ticket and does nothing. A fetch that is
//! already in flight still completes and draws; it just does not re-arm.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::time::Duration;

/// Delay between the end of one timed refresh and the start of the next.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(10_000);

/// Proof that a timer was armed at a given epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    epoch: u64,
}

/// Auto-refresh flag plus the epoch of the one pending timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshState {
    pub interval: Duration,
    pub auto_refresh: bool,
    epoch: u64,
    pending: Option<RefreshTicket>,
}

impl Default for RefreshState {
    fn default() -> Self {
        Self { interval: DEFAULT_REFRESH_INTERVAL, auto_refresh: false, epoch: 0, pending: None }
    }
}

impl RefreshState {
    /// Turn auto-refresh on or off.
    ///
    /// Turning it on arms a fresh timer and returns its ticket; turning it off
    /// invalidates whatever timer is pending and returns `None`.
    pub fn set_auto_refresh(&mut self, enabled: bool) -> Option<RefreshTicket> {
        self.auto_refresh = enabled;
        if enabled { Some(self.arm()) } else { self.disarm() }
    }

    /// Called when a timed refresh has finished drawing. Re-arms when
    /// auto-refresh is still on.
    pub fn rearm_after_refresh(&mut self) -> Option<RefreshTicket> {
        if self.auto_refresh { Some(self.arm()) } else { self.disarm() }
    }

    /// Called when a timer wakes up. Returns `true` (and consumes the
    /// pending slot) only when the ticket is still the armed one.
    pub fn fire(&mut self, ticket: RefreshTicket) -> bool {
        if self.auto_refresh && self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Whether a timer is currently armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    fn arm(&mut self) -> RefreshTicket {
        self.epoch += 1;
        let ticket = RefreshTicket { epoch: self.epoch };
        self.pending = Some(ticket);
        ticket
    }

    fn disarm(&mut self) -> Option<RefreshTicket> {
        self.epoch += 1;
        self.pending = None;
        None
    }
}
