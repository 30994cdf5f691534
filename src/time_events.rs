//! Wall-clock earnings events.
//!
//! A provider maps a point in time to an earnings multiplier. The click
//! engine consumes only the number (sanitized at use); everything else —
//! names, banners, scheduling — belongs to whoever renders it.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

/// A currently applicable time-based event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeEvent {
    pub active: bool,
    /// Always >= 1 for the built-in rules; consumers sanitize anyway.
    pub multiplier: f64,
    pub description: &'static str,
}

impl TimeEvent {
    fn none() -> Self {
        TimeEvent {
            active: false,
            multiplier: 1.0,
            description: "",
        }
    }
}

/// Source of the current event multiplier.
pub trait TimeEventProvider {
    fn current(&self, now: DateTime<Utc>) -> TimeEvent;
}

/// Built-in time-of-day/day-of-week rules, checked in priority order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduledEvents;

impl TimeEventProvider for ScheduledEvents {
    fn current(&self, now: DateTime<Utc>) -> TimeEvent {
        let weekday = now.weekday();
        if weekday == Weekday::Sat || weekday == Weekday::Sun {
            return TimeEvent {
                active: true,
                multiplier: 2.0,
                description: "Weekend Hustle",
            };
        }
        if now.hour() < 5 {
            return TimeEvent {
                active: true,
                multiplier: 1.5,
                description: "Night Owl",
            };
        }
        TimeEvent::none()
    }
}
