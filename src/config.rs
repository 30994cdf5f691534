//! Tunable thresholds for the click detector, the save validator and the
//! session timers.
//!
//! The anti-cheat limits are statistical heuristics, not proofs, so they are
//! kept in plain config structs instead of hard-coded constants: a
//! deployment can loosen them when legitimate hardware (touch devices,
//! batched input) trips them, and tests can tighten them.

/// Largest amount the engine and validator treat as representable without
/// integer-precision loss (2^53 - 1).
pub const MAX_SAFE_AMOUNT: f64 = 9_007_199_254_740_991.0;

/// Thresholds for the client-side auto-click heuristic.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// How many click timestamps are retained.
    pub buffer_capacity: usize,
    /// Minimum samples before the detector evaluates at all.
    pub min_samples: usize,
    /// Intervals are computed over this many most recent samples.
    pub sample_window: usize,
    /// Rule (a): flag when deviation is below this and the mean is fast.
    pub max_deviation_ms: f64,
    /// Rule (a): "fast" mean interval bound.
    pub fast_mean_ms: f64,
    /// Rule (b): flag on mean interval below this regardless of deviation.
    pub hard_mean_ms: f64,
    /// Click processing stays suspended this long after a flag.
    pub cooldown_ms: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            buffer_capacity: 20,
            min_samples: 10,
            sample_window: 10,
            max_deviation_ms: 5.0,
            fast_mean_ms: 100.0,
            hard_mean_ms: 30.0,
            cooldown_ms: 10_000,
        }
    }
}

/// Limits enforced at the save boundary before a record is persisted.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub max_display_name_chars: usize,
    pub max_project_name_chars: usize,
    pub max_project_url_chars: usize,
    pub max_money: f64,
    pub max_prestige_level: u32,
    pub max_prestige_tokens: u64,
    /// Per-click earnings ceiling, scaled by `max(1, prestige_level)`.
    pub max_earnings_per_click: f64,
    /// Sustained click-rate ceiling between two saves.
    pub max_clicks_per_hour: f64,
    /// Elapsed time is floored to this window when deriving the click
    /// rate, so a save moments after the previous one is not judged on a
    /// meaninglessly small denominator.
    pub min_rate_window_ms: u64,
    /// Stored best-combo values above this are clamped on commit.
    pub best_combo_cap: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            max_display_name_chars: 50,
            max_project_name_chars: 100,
            max_project_url_chars: 500,
            max_money: MAX_SAFE_AMOUNT,
            max_prestige_level: 10_000,
            max_prestige_tokens: 1_000_000,
            max_earnings_per_click: 10_000.0,
            max_clicks_per_hour: 50_000.0,
            min_rate_window_ms: 60_000,
            best_combo_cap: 1_000,
        }
    }
}

/// Periods and lifetimes for the session's timers.
#[derive(Debug, Clone)]
pub struct TimerConfig {
    pub production_tick_ms: u64,
    pub frenzy_tick_ms: u64,
    pub frenzy_duration_secs: u64,
    pub golden_spawn_tick_ms: u64,
    pub golden_spawn_chance: f64,
    pub golden_lifetime_ms: u64,
    pub combo_window_ms: u64,
    pub autosave_debounce_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            production_tick_ms: 100,
            frenzy_tick_ms: 1_000,
            frenzy_duration_secs: 77,
            golden_spawn_tick_ms: 5_000,
            golden_spawn_chance: 0.05,
            golden_lifetime_ms: 13_000,
            combo_window_ms: 2_000,
            autosave_debounce_ms: 5_000,
        }
    }
}
