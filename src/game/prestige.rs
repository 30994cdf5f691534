//! The prestige reset: trade resettable progress for permanent tokens.
//!
//! This is the one irreversible transition in the engine. It runs
//! synchronously over a single `&mut PlayerState`, so no reader can observe
//! a partially reset aggregate.

use thiserror::Error;

use super::catalog;
use super::types::{Latch, PlayerState};

#[derive(Debug, Error, PartialEq)]
pub enum PrestigeError {
    /// Neither the epoch earnings nor the current balance reach the
    /// requirement yet.
    #[error("prestige requires {required} banked or earned this epoch, have {value}")]
    BelowRequirement { required: f64, value: f64 },
}

/// What a committed prestige reset yielded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrestigeOutcome {
    pub tokens_gained: u64,
    pub prestige_level: u32,
    pub multiplier: f64,
}

/// Banked value a reset would be scored on.
pub fn prestige_value(state: &PlayerState) -> f64 {
    state.earned_since_prestige.max(state.money)
}

pub fn can_prestige(state: &PlayerState) -> bool {
    prestige_value(state) >= catalog::PRESTIGE_REQUIREMENT
}

/// Permanent multiplier for a token balance.
pub fn multiplier(tokens: u64) -> f64 {
    1.0 + tokens as f64 * catalog::PRESTIGE_TOKEN_BONUS
}

/// Commit the reset. Transient progress (money, epoch earnings, click
/// power, clicks, building counts, upgrade ownership, the challenge set,
/// frenzy and golden-bonus counters) is re-seeded; prestige level/tokens
/// only grow; achievements and building unlock latches are untouched.
pub fn perform(state: &mut PlayerState) -> Result<PrestigeOutcome, PrestigeError> {
    let value = prestige_value(state);
    if value < catalog::PRESTIGE_REQUIREMENT {
        return Err(PrestigeError::BelowRequirement {
            required: catalog::PRESTIGE_REQUIREMENT,
            value,
        });
    }

    let tokens_gained = (value / catalog::PRESTIGE_REQUIREMENT).floor() as u64;
    state.prestige_level += 1;
    state.prestige_tokens += tokens_gained;

    state.money = 0.0;
    state.earned_since_prestige = 0.0;
    state.click_power = catalog::BASE_CLICK_POWER;
    state.total_clicks = 0;
    for building in &mut state.buildings {
        building.count = 0;
    }
    for upgrade in &mut state.upgrades {
        upgrade.owned = Latch::new();
    }
    state.challenges = catalog::initial_challenges();
    state.frenzy_activations = 0;
    state.golden_bonus_clicks = 0;

    Ok(PrestigeOutcome {
        tokens_gained,
        prestige_level: state.prestige_level,
        multiplier: multiplier(state.prestige_tokens),
    })
}
