//! Session-owned timing: periodic timers and the autosave debouncer.
//!
//! Nothing here touches the wall clock. The session advances its timers
//! with explicit timestamps from an injected [`Clock`], so tests drive
//! virtual time and the timers tolerate arbitrary drift between calls.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Wall-clock implementation used by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// A fixed-period timer that reports how many whole periods have elapsed.
///
/// Ticks are counted arithmetically rather than by looping, so a long gap
/// between advances (a stalled host, a test jumping hours ahead) settles in
/// constant time.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    period_ms: u64,
    next_due_ms: u64,
}

impl PeriodicTimer {
    pub fn new(period_ms: u64, now_ms: u64) -> Self {
        PeriodicTimer {
            period_ms: period_ms.max(1),
            next_due_ms: now_ms + period_ms.max(1),
        }
    }

    /// Number of periods due at `now_ms`; the due cursor advances past all
    /// of them. Returns 0 when called early or out of order.
    pub fn due_ticks(&mut self, now_ms: u64) -> u64 {
        if now_ms < self.next_due_ms {
            return 0;
        }
        let elapsed = now_ms - self.next_due_ms;
        let ticks = 1 + elapsed / self.period_ms;
        self.next_due_ms += ticks * self.period_ms;
        ticks
    }

    /// Restart the cadence from `now_ms`, discarding any accumulated due
    /// ticks.
    pub fn restart(&mut self, now_ms: u64) {
        self.next_due_ms = now_ms + self.period_ms;
    }
}

/// Debounced autosave arming.
///
/// Every state change re-arms the window; only the newest pending save
/// survives. At most one save is in flight at a time, and an explicit
/// "save now" bypasses the window entirely, superseding whatever was
/// pending.
#[derive(Debug, Clone)]
pub struct SaveDebounce {
    debounce_ms: u64,
    fire_at_ms: Option<u64>,
    in_flight: bool,
}

impl SaveDebounce {
    pub fn new(debounce_ms: u64) -> Self {
        SaveDebounce {
            debounce_ms,
            fire_at_ms: None,
            in_flight: false,
        }
    }

    /// A state change occurred; (re-)arm the debounce window.
    pub fn note_change(&mut self, now_ms: u64) {
        self.fire_at_ms = Some(now_ms + self.debounce_ms);
    }

    /// True exactly once per armed window, when it has elapsed and no save
    /// is already in flight. The caller then performs the save and reports
    /// back via [`complete`].
    ///
    /// [`complete`]: SaveDebounce::complete
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        if self.in_flight {
            return false;
        }
        match self.fire_at_ms {
            Some(at) if now_ms >= at => {
                self.fire_at_ms = None;
                self.in_flight = true;
                true
            }
            _ => false,
        }
    }

    /// Explicit user save: clears any pending debounced save and claims the
    /// in-flight slot immediately. Returns false when a save is already in
    /// flight.
    pub fn save_now(&mut self) -> bool {
        if self.in_flight {
            // The pending save is superseded either way.
            self.fire_at_ms = None;
            return false;
        }
        self.fire_at_ms = None;
        self.in_flight = true;
        true
    }

    /// The in-flight save finished (successfully or not).
    pub fn complete(&mut self) {
        self.in_flight = false;
    }

    pub fn is_armed(&self) -> bool {
        self.fire_at_ms.is_some()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_counts_whole_periods() {
        let mut timer = PeriodicTimer::new(100, 0);
        assert_eq!(timer.due_ticks(99), 0);
        assert_eq!(timer.due_ticks(100), 1);
        assert_eq!(timer.due_ticks(100), 0);
        // A late advance yields every missed tick at once.
        assert_eq!(timer.due_ticks(1_000), 9);
        assert_eq!(timer.due_ticks(1_050), 0);
        assert_eq!(timer.due_ticks(1_100), 1);
    }

    #[test]
    fn timer_restart_discards_backlog() {
        let mut timer = PeriodicTimer::new(1_000, 0);
        assert_eq!(timer.due_ticks(5_000), 5);
        timer.restart(5_000);
        assert_eq!(timer.due_ticks(5_999), 0);
        assert_eq!(timer.due_ticks(6_000), 1);
    }

    #[test]
    fn debounce_is_superseded_by_newer_changes() {
        let mut debounce = SaveDebounce::new(5_000);
        debounce.note_change(0);
        debounce.note_change(3_000); // supersedes; window restarts
        assert!(!debounce.take_due(5_000));
        assert!(debounce.take_due(8_000));
        // In flight: nothing else fires until completion.
        debounce.note_change(8_100);
        assert!(!debounce.take_due(20_000));
        debounce.complete();
        assert!(debounce.take_due(20_000));
    }

    #[test]
    fn save_now_bypasses_and_supersedes() {
        let mut debounce = SaveDebounce::new(5_000);
        debounce.note_change(0);
        assert!(debounce.save_now());
        assert!(!debounce.is_armed());
        assert!(!debounce.take_due(10_000));
        debounce.complete();
        assert!(!debounce.take_due(10_000));
    }
}
