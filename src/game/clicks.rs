//! Click streak tracking and the auto-click heuristic.
//!
//! The combo engine and the detector both run on caller-supplied
//! millisecond timestamps, never on wall clock, so sequences replay
//! deterministically in tests.

use std::collections::VecDeque;

use crate::config::DetectorConfig;

/// Combo multiplier tier for a given streak length.
pub fn multiplier_for(count: u64) -> f64 {
    match count {
        0..=9 => 1.0,
        10..=24 => 2.0,
        25..=49 => 3.0,
        50..=99 => 5.0,
        _ => 10.0,
    }
}

/// Click streak state machine. A click within the window extends the
/// streak; a gap of the full window (or more) resets it to `{0, 1}`.
#[derive(Debug, Clone)]
pub struct ComboEngine {
    count: u64,
    last_click_ms: Option<u64>,
    window_ms: u64,
}

impl ComboEngine {
    pub fn new(window_ms: u64) -> Self {
        ComboEngine {
            count: 0,
            last_click_ms: None,
            window_ms,
        }
    }

    /// Register a click at `now_ms` and return the streak count and
    /// multiplier that apply to this click. Callers must use the returned
    /// multiplier rather than re-reading state, so a decay timer firing
    /// right after cannot change what this click earned.
    pub fn register(&mut self, now_ms: u64) -> (u64, f64) {
        let chained = match self.last_click_ms {
            Some(last) => now_ms > last && now_ms - last < self.window_ms,
            None => false,
        };
        self.count = if chained { self.count + 1 } else { 1 };
        self.last_click_ms = Some(now_ms);
        (self.count, multiplier_for(self.count))
    }

    /// Decay check used by the timer path. Agrees with [`register`] on the
    /// window boundary: a gap of exactly the window resets in both.
    ///
    /// [`register`]: ComboEngine::register
    pub fn check_timeout(&mut self, now_ms: u64) -> bool {
        match self.last_click_ms {
            Some(last) if now_ms.saturating_sub(last) >= self.window_ms => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.last_click_ms = None;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn multiplier(&self) -> f64 {
        multiplier_for(self.count)
    }
}

/// Verdict for one observed click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickVerdict {
    Accepted,
    /// This click tripped the heuristic; it must be discarded and clicks
    /// stay suspended until `until_ms`.
    Flagged { until_ms: u64 },
    /// A previous flag is still cooling down.
    Suspended { until_ms: u64 },
}

/// Heuristic auto-clicker detector over recent click timestamps.
///
/// This is a soft client-side gate; the save validator is the trust
/// boundary. Thresholds come from [`DetectorConfig`] because they are tuned
/// by example and can false-positive on batched input hardware.
#[derive(Debug, Clone)]
pub struct AutoClickDetector {
    config: DetectorConfig,
    samples: VecDeque<u64>,
    suspended_until_ms: Option<u64>,
}

impl AutoClickDetector {
    pub fn new(config: DetectorConfig) -> Self {
        AutoClickDetector {
            samples: VecDeque::with_capacity(config.buffer_capacity),
            suspended_until_ms: None,
            config,
        }
    }

    /// Feed one click timestamp through the detector.
    pub fn observe(&mut self, now_ms: u64) -> ClickVerdict {
        if let Some(until_ms) = self.suspended_until_ms {
            if now_ms < until_ms {
                return ClickVerdict::Suspended { until_ms };
            }
            self.suspended_until_ms = None;
        }

        self.samples.push_back(now_ms);
        while self.samples.len() > self.config.buffer_capacity {
            self.samples.pop_front();
        }
        if self.samples.len() < self.config.min_samples {
            return ClickVerdict::Accepted;
        }

        let window = self.samples.len().min(self.config.sample_window);
        let recent: Vec<u64> = self.samples.iter().rev().take(window).rev().copied().collect();
        let intervals: Vec<f64> = recent
            .windows(2)
            .map(|pair| pair[1].saturating_sub(pair[0]) as f64)
            .collect();
        if intervals.is_empty() {
            return ClickVerdict::Accepted;
        }
        let mean = intervals.iter().sum::<f64>() / intervals.len() as f64;
        let deviation =
            intervals.iter().map(|i| (i - mean).abs()).sum::<f64>() / intervals.len() as f64;

        let too_regular = deviation < self.config.max_deviation_ms && mean < self.config.fast_mean_ms;
        let too_fast = mean < self.config.hard_mean_ms;
        if too_regular || too_fast {
            let until_ms = now_ms + self.config.cooldown_ms;
            self.samples.clear();
            self.suspended_until_ms = Some(until_ms);
            return ClickVerdict::Flagged { until_ms };
        }
        ClickVerdict::Accepted
    }

    pub fn suspended_until(&self) -> Option<u64> {
        self.suspended_until_ms
    }
}
