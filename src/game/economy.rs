//! Economy math: the purchase cost curve and production composition.
//!
//! All functions here are pure; the session feeds them the owned state and
//! the active modifiers. Corrupted numeric input (NaN/Infinity from a bad
//! save) is coerced at the point of use: 0 for production terms, 1 for
//! multiplicative factors.

use super::types::{Building, Upgrade, UpgradeKind};
use crate::config::MAX_SAFE_AMOUNT;

/// Geometric growth applied to a building's cost per copy owned.
pub const GROWTH_RATE: f64 = 1.15;

/// Earnings multiplier while frenzy mode is active.
pub const FRENZY_MULTIPLIER: f64 = 7.0;

/// Cost of the next copy of a building that already has `count` copies.
///
/// `powi` keeps the curve stable out to counts in the hundreds; a result
/// that overflows the safe-integer range saturates there so the curve stays
/// monotone instead of going non-finite.
pub fn purchase_cost(base_cost: f64, count: u64) -> f64 {
    let exponent = count.min(i32::MAX as u64) as i32;
    let cost = base_cost * GROWTH_RATE.powi(exponent);
    if !cost.is_finite() || cost > MAX_SAFE_AMOUNT {
        return MAX_SAFE_AMOUNT;
    }
    cost.floor()
}

/// Coerce a multiplicative factor to 1 when it could zero out or explode
/// the product.
pub fn sanitize_factor(factor: f64) -> f64 {
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

/// Multipliers applied on top of every building's own upgrades.
#[derive(Debug, Clone, Copy)]
pub struct ProductionModifiers {
    pub frenzy_active: bool,
    pub prestige_multiplier: f64,
}

/// Per-second production of one building with every owned multiplier
/// applied: building-targeted upgrades, then global upgrades, then frenzy,
/// then the permanent prestige multiplier.
pub fn building_production(
    building: &Building,
    upgrades: &[Upgrade],
    modifiers: &ProductionModifiers,
) -> f64 {
    let mut production = building.base_production * building.count as f64;
    if !production.is_finite() {
        production = 0.0;
    }
    for upgrade in upgrades.iter().filter(|u| u.owned.is_set()) {
        if let UpgradeKind::Building { target, multiplier } = upgrade.kind {
            if target == building.id {
                production *= multiplier;
            }
        }
    }
    for upgrade in upgrades.iter().filter(|u| u.owned.is_set()) {
        if let UpgradeKind::Global { multiplier } = upgrade.kind {
            production *= multiplier;
        }
    }
    if modifiers.frenzy_active {
        production *= FRENZY_MULTIPLIER;
    }
    production *= sanitize_factor(modifiers.prestige_multiplier);
    if production.is_finite() {
        production
    } else {
        0.0
    }
}

/// Aggregate per-second production over all buildings.
pub fn production_rate(
    buildings: &[Building],
    upgrades: &[Upgrade],
    modifiers: &ProductionModifiers,
) -> f64 {
    buildings
        .iter()
        .map(|b| building_production(b, upgrades, modifiers))
        .sum()
}

/// Compact human-readable amount, e.g. `1.50K`, `2.00 B`. Invalid numbers
/// render as "0".
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    if amount >= 1e18 {
        return format!("{:.3} Qt", amount / 1e18);
    }
    if amount >= 1e15 {
        return format!("{:.3} Qd", amount / 1e15);
    }
    if amount >= 1e12 {
        return format!("{:.2} T", amount / 1e12);
    }
    if amount >= 1e9 {
        return format!("{:.2} B", amount / 1e9);
    }
    if amount >= 1e6 {
        return format!("{:.2} M", amount / 1e6);
    }
    if amount >= 1e3 {
        return format!("{:.1}K", amount / 1e3);
    }
    format!("{}", amount.floor())
}
