//! The in-process game session: one player's live simulation.
//!
//! `GameSession` owns the aggregate [`PlayerState`] plus the ephemeral
//! pieces that never persist (combo streak, detector buffer, frenzy
//! countdown, golden bonus overlay, timers). All mutation happens through
//! its methods on caller-supplied timestamps; the session never reads the
//! wall clock itself.

pub mod catalog;
pub mod clicks;
pub mod economy;
pub mod prestige;
pub mod progression;
pub mod scheduler;
pub mod types;

use rand::{RngCore, SeedableRng};
use rand_pcg::Lcg64Xsh32;

use crate::config::{DetectorConfig, TimerConfig};
use clicks::{AutoClickDetector, ClickVerdict, ComboEngine};
use economy::ProductionModifiers;
use prestige::{PrestigeError, PrestigeOutcome};
use progression::AchievementView;
use scheduler::{PeriodicTimer, SaveDebounce};
use types::{
    BuildingId, ChallengeKind, ChallengeReward, ClickOutcome, GoldenBonus, GoldenBonusKind,
    PlayerState, UpgradeId, UpgradeKind,
};

/// Combo streak lengths that get a one-shot announcement.
const COMBO_MILESTONES: [u64; 3] = [10, 50, 100];

pub struct GameSession {
    state: PlayerState,
    combo: ComboEngine,
    detector: AutoClickDetector,
    frenzy_active: bool,
    frenzy_remaining_secs: u64,
    golden: Option<GoldenBonus>,
    production_timer: PeriodicTimer,
    frenzy_timer: PeriodicTimer,
    golden_timer: PeriodicTimer,
    autosave: SaveDebounce,
    rng: Lcg64Xsh32,
    event_multiplier: f64,
    notices: Vec<String>,
    timers: TimerConfig,
}

impl GameSession {
    pub fn new(seed: u64, now_ms: u64) -> Self {
        Self::from_state(
            catalog::initial_player_state(),
            seed,
            now_ms,
            TimerConfig::default(),
            DetectorConfig::default(),
        )
    }

    /// Resume a session from a previously persisted state. Ephemeral state
    /// (combo, detector, timers, frenzy, golden bonus) starts fresh.
    pub fn from_state(
        state: PlayerState,
        seed: u64,
        now_ms: u64,
        timers: TimerConfig,
        detector: DetectorConfig,
    ) -> Self {
        let mut seed_bytes = [0u8; 16];
        seed_bytes[0..8].copy_from_slice(&seed.to_le_bytes());
        seed_bytes[8..16].copy_from_slice(&seed.to_le_bytes());
        GameSession {
            combo: ComboEngine::new(timers.combo_window_ms),
            detector: AutoClickDetector::new(detector),
            frenzy_active: false,
            frenzy_remaining_secs: 0,
            golden: None,
            production_timer: PeriodicTimer::new(timers.production_tick_ms, now_ms),
            frenzy_timer: PeriodicTimer::new(timers.frenzy_tick_ms, now_ms),
            golden_timer: PeriodicTimer::new(timers.golden_spawn_tick_ms, now_ms),
            autosave: SaveDebounce::new(timers.autosave_debounce_ms),
            rng: Lcg64Xsh32::from_seed(seed_bytes),
            event_multiplier: 1.0,
            notices: Vec::new(),
            state,
            timers,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn frenzy_active(&self) -> bool {
        self.frenzy_active
    }

    pub fn golden_bonus(&self) -> Option<GoldenBonus> {
        self.golden
    }

    pub fn combo_count(&self) -> u64 {
        self.combo.count()
    }

    /// Current multiplier from the time-based event collaborator. Only the
    /// number is consumed; scheduling is the provider's business.
    pub fn set_event_multiplier(&mut self, multiplier: f64) {
        self.event_multiplier = multiplier;
    }

    pub fn prestige_multiplier(&self) -> f64 {
        prestige::multiplier(self.state.prestige_tokens)
    }

    fn modifiers(&self) -> ProductionModifiers {
        ProductionModifiers {
            frenzy_active: self.frenzy_active,
            prestige_multiplier: self.prestige_multiplier(),
        }
    }

    /// Aggregate production in money per second.
    pub fn production_rate(&self) -> f64 {
        economy::production_rate(&self.state.buildings, &self.state.upgrades, &self.modifiers())
    }

    fn earn(&mut self, amount: f64) {
        self.state.money += amount;
        self.state.lifetime_earned += amount;
        self.state.earned_since_prestige += amount;
    }

    /// Process one click event.
    pub fn click(&mut self, now_ms: u64) -> ClickOutcome {
        match self.detector.observe(now_ms) {
            ClickVerdict::Flagged { until_ms } => {
                self.notices
                    .push("Automated clicking detected; clicks suspended".to_string());
                return ClickOutcome::RejectedAutomated { until_ms };
            }
            ClickVerdict::Suspended { until_ms } => {
                return ClickOutcome::RejectedAutomated { until_ms };
            }
            ClickVerdict::Accepted => {}
        }

        // The streak values for this click are fixed here; a decay timer
        // firing right after cannot change what it earned.
        let (combo_count, combo_multiplier) = self.combo.register(now_ms);
        if combo_count > self.state.best_combo {
            for milestone in COMBO_MILESTONES {
                if self.state.best_combo < milestone && combo_count >= milestone {
                    self.notices.push(format!("{milestone}-hit combo!"));
                }
            }
            self.state.best_combo = combo_count;
        }

        let frenzy = if self.frenzy_active {
            economy::FRENZY_MULTIPLIER
        } else {
            1.0
        };
        let earnings = economy::sanitize_factor(self.state.click_power)
            * economy::sanitize_factor(self.prestige_multiplier())
            * frenzy
            * combo_multiplier
            * economy::sanitize_factor(self.event_multiplier);
        self.earn(earnings);
        self.state.total_clicks += 1;
        self.after_state_change(now_ms);

        ClickOutcome::Earned {
            earnings,
            combo_count,
            combo_multiplier,
        }
    }

    /// Buy one copy of a building at the current point on its cost curve.
    /// Returns the price paid.
    pub fn buy_building(&mut self, id: BuildingId, now_ms: u64) -> Result<f64, String> {
        let building = self.state.building(id);
        if !building.unlocked.is_set() {
            return Err(format!("{} is not unlocked yet", id.name()));
        }
        let cost = economy::purchase_cost(building.base_cost, building.count);
        if self.state.money < cost {
            return Err(format!(
                "Not enough money for {}: costs {}",
                id.name(),
                economy::format_amount(cost)
            ));
        }
        self.state.money -= cost;
        self.state.building_mut(id).count += 1;
        self.after_state_change(now_ms);
        Ok(cost)
    }

    pub fn buy_upgrade(&mut self, id: UpgradeId, now_ms: u64) -> Result<(), String> {
        let upgrade = self.state.upgrade(id).clone();
        if upgrade.owned.is_set() {
            return Err(format!("{} is already owned", id.name()));
        }
        match upgrade.kind {
            UpgradeKind::Click { .. } => {
                if self.state.total_clicks < upgrade.requirement {
                    return Err(format!(
                        "Need {} clicks for {}",
                        upgrade.requirement,
                        id.name()
                    ));
                }
            }
            UpgradeKind::Building { target, .. } => {
                if self.state.building(target).count < upgrade.requirement {
                    return Err(format!(
                        "Need {} {}s for {}",
                        upgrade.requirement,
                        target.name(),
                        id.name()
                    ));
                }
            }
            UpgradeKind::Global { .. } => {}
        }
        if self.state.money < upgrade.cost {
            return Err(format!(
                "Not enough money for {}: costs {}",
                id.name(),
                economy::format_amount(upgrade.cost)
            ));
        }
        self.state.money -= upgrade.cost;
        self.state.upgrade_mut(id).owned.set();
        if let UpgradeKind::Click { factor } = upgrade.kind {
            self.state.click_power *= economy::sanitize_factor(factor);
        }
        self.notices.push(format!("{}!", id.name()));
        self.after_state_change(now_ms);
        Ok(())
    }

    /// Click the live golden bonus. It disappears whether or not the effect
    /// was still worth anything; a second click finds nothing.
    pub fn click_golden(&mut self, now_ms: u64) -> Result<GoldenBonusKind, String> {
        let golden = self.golden.ok_or("No golden bonus is active")?;
        if now_ms >= golden.spawned_at_ms + self.timers.golden_lifetime_ms {
            self.golden = None;
            return Err("The golden bonus has expired".to_string());
        }
        self.golden = None;
        self.state.golden_bonus_clicks += 1;
        match golden.kind {
            GoldenBonusKind::Bonus => {
                let amount = (self.production_rate() * 60.0 * 13.0)
                    .max(self.state.click_power * 13.0);
                self.earn(amount);
                self.notices
                    .push(format!("+{}", economy::format_amount(amount)));
            }
            GoldenBonusKind::Frenzy => {
                self.activate_frenzy(now_ms);
            }
            GoldenBonusKind::Lucky => {
                let amount = (self.production_rate() * 900.0).max(self.state.money * 0.15);
                self.earn(amount);
                self.notices
                    .push(format!("Lucky! +{}", economy::format_amount(amount)));
            }
        }
        self.after_state_change(now_ms);
        Ok(golden.kind)
    }

    fn activate_frenzy(&mut self, now_ms: u64) {
        self.frenzy_active = true;
        self.frenzy_remaining_secs = self.timers.frenzy_duration_secs;
        self.frenzy_timer.restart(now_ms);
        self.state.frenzy_activations += 1;
        self.notices.push("FRENZY x7!".to_string());
    }

    /// Advance every timer to `now_ms`, accruing passive income and driving
    /// the frenzy countdown, golden-bonus lifecycle and combo decay. The
    /// timers are independent; this tolerates arbitrary gaps since the last
    /// advance.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.combo.check_timeout(now_ms);

        if let Some(golden) = self.golden {
            if now_ms >= golden.spawned_at_ms + self.timers.golden_lifetime_ms {
                self.golden = None;
            }
        }

        // Frenzy is settled before production so a long gap cannot accrue
        // at x7 past the countdown's end.
        let frenzy_ticks = self.frenzy_timer.due_ticks(now_ms);
        if self.frenzy_active && frenzy_ticks > 0 {
            self.frenzy_remaining_secs = self.frenzy_remaining_secs.saturating_sub(frenzy_ticks);
            if self.frenzy_remaining_secs == 0 {
                self.frenzy_active = false;
                self.notices.push("Frenzy ended".to_string());
            }
        }

        let production_ticks = self.production_timer.due_ticks(now_ms);
        if production_ticks > 0 {
            let rate = self.production_rate();
            let per_tick = self.timers.production_tick_ms as f64 / 1_000.0;
            let accrued = rate * per_tick * production_ticks as f64;
            if accrued > 0.0 {
                self.earn(accrued);
            }
        }

        let spawn_checks = self.golden_timer.due_ticks(now_ms);
        for _ in 0..spawn_checks {
            if self.golden.is_some() {
                continue;
            }
            let roll = self.rng.next_u64() as f64 / u64::MAX as f64;
            if roll < self.timers.golden_spawn_chance {
                let kind = match self.rng.next_u64() % 3 {
                    0 => GoldenBonusKind::Bonus,
                    1 => GoldenBonusKind::Frenzy,
                    _ => GoldenBonusKind::Lucky,
                };
                self.golden = Some(GoldenBonus {
                    kind,
                    spawned_at_ms: now_ms,
                });
            }
        }

        if production_ticks > 0 {
            self.after_state_change(now_ms);
        }
    }

    /// Trigger the prestige reset. On success the ephemeral session state
    /// resets alongside the aggregate: combo, frenzy and any live golden
    /// bonus are all cleared.
    pub fn prestige(&mut self, now_ms: u64) -> Result<PrestigeOutcome, PrestigeError> {
        let outcome = prestige::perform(&mut self.state)?;
        self.combo.reset();
        self.frenzy_active = false;
        self.frenzy_remaining_secs = 0;
        self.golden = None;
        self.notices.push(format!(
            "Prestige {}: +{} token(s), x{:.1} forever",
            outcome.prestige_level, outcome.tokens_gained, outcome.multiplier
        ));
        self.after_state_change(now_ms);
        Ok(outcome)
    }

    /// Run the unlock gates, challenge observers, achievement predicates
    /// and the autosave debouncer after any state mutation.
    fn after_state_change(&mut self, now_ms: u64) {
        self.refresh_unlocks();

        let clicks = self.state.total_clicks as f64;
        let earned = self.state.earned_since_prestige;
        let buildings = self.state.total_buildings() as f64;
        let upgrades = self.state.owned_upgrades() as f64;
        let rate = self.production_rate();

        let mut crossed = Vec::new();
        crossed.extend(progression::observe_metric(
            &mut self.state.challenges,
            ChallengeKind::Clicks,
            clicks,
        ));
        crossed.extend(progression::observe_metric(
            &mut self.state.challenges,
            ChallengeKind::Money,
            earned,
        ));
        crossed.extend(progression::observe_metric(
            &mut self.state.challenges,
            ChallengeKind::Buildings,
            buildings,
        ));
        crossed.extend(progression::observe_metric(
            &mut self.state.challenges,
            ChallengeKind::Upgrades,
            upgrades,
        ));
        crossed.extend(progression::observe_metric(
            &mut self.state.challenges,
            ChallengeKind::ProductionRate,
            rate,
        ));
        for id in crossed {
            if let Some(reward) = progression::claim_reward(&mut self.state.challenges, id) {
                match reward {
                    ChallengeReward::ClickPower { amount } => {
                        self.state.click_power += amount;
                        self.notices
                            .push(format!("Challenge complete: +{amount} click power"));
                    }
                    ChallengeReward::Money { amount } => {
                        self.state.money += amount;
                        self.notices.push(format!(
                            "Challenge complete: +{}",
                            economy::format_amount(amount)
                        ));
                    }
                }
            }
        }

        let view = AchievementView {
            total_clicks: self.state.total_clicks,
            best_combo: self.state.best_combo,
            money: self.state.money,
            total_buildings: self.state.total_buildings(),
            owned_upgrades: self.state.owned_upgrades(),
            upgrade_catalog_size: self.state.upgrades.len() as u64,
            frenzy_activations: self.state.frenzy_activations,
            golden_bonus_clicks: self.state.golden_bonus_clicks,
            production_rate: rate,
        };
        for id in progression::unlock_achievements(&mut self.state.achievements, &view) {
            self.notices.push(format!("Achievement unlocked: {id:?}"));
        }

        self.autosave.note_change(now_ms);
    }

    /// Latch any building whose lifetime-earned threshold is now met.
    fn refresh_unlocks(&mut self) {
        let earned = self.state.lifetime_earned;
        for building in &mut self.state.buildings {
            if building.unlocked.is_set() {
                continue;
            }
            match catalog::unlock_threshold(building.id) {
                Some(threshold) if earned >= threshold => {
                    if building.unlocked.set() {
                        self.notices
                            .push(format!("Unlocked: {}!", building.id.name()));
                    }
                }
                _ => {}
            }
        }
    }

    /// The payload a save request carries: the aggregate without any
    /// ephemeral combo/timer state.
    pub fn save_payload(&self) -> PlayerState {
        self.state.clone()
    }

    /// True exactly once per elapsed debounce window.
    pub fn autosave_due(&mut self, now_ms: u64) -> bool {
        self.autosave.take_due(now_ms)
    }

    /// Explicit "save now": bypasses the debounce window.
    pub fn request_manual_save(&mut self) -> bool {
        self.autosave.save_now()
    }

    pub fn save_completed(&mut self) {
        self.autosave.complete();
    }

    /// Take every pending one-shot notification.
    pub fn drain_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(42, 0)
    }

    #[test]
    fn fresh_player_first_click_earns_one() {
        let mut session = session();
        let outcome = session.click(1_000);
        assert_eq!(
            outcome,
            ClickOutcome::Earned {
                earnings: 1.0,
                combo_count: 1,
                combo_multiplier: 1.0,
            }
        );
        assert_eq!(session.state().money, 1.0);
        assert_eq!(session.state().total_clicks, 1);
        assert_eq!(session.state().lifetime_earned, 1.0);
    }

    #[test]
    fn click_earnings_compose_all_factors() {
        let mut session = session();
        session.state.prestige_tokens = 1; // multiplier 1.1
        session.state.click_power = 10.0;
        session.set_event_multiplier(2.0);
        session.activate_frenzy(0);
        session.drain_notices();

        // Build a 10-streak with clicks spaced inside the window.
        let mut last = ClickOutcome::RejectedAutomated { until_ms: 0 };
        for i in 0..10 {
            last = session.click(1_000 + i * 300);
        }
        match last {
            ClickOutcome::Earned {
                earnings,
                combo_count,
                combo_multiplier,
            } => {
                assert_eq!(combo_count, 10);
                assert_eq!(combo_multiplier, 2.0);
                // 10 (power) * 1.1 (prestige) * 7 (frenzy) * 2 (combo) * 2 (event)
                assert!((earnings - 308.0).abs() < 1e-9);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn corrupted_click_power_earns_base_rate() {
        let mut session = session();
        session.state.click_power = f64::NAN;
        let outcome = session.click(500);
        match outcome {
            ClickOutcome::Earned { earnings, .. } => assert_eq!(earnings, 1.0),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn metronomic_clicking_is_rejected_with_zero_earnings() {
        let mut session = session();
        for i in 0..9 {
            session.click(i * 50);
        }
        let money_before = session.state().money;
        let clicks_before = session.state().total_clicks;
        let outcome = session.click(450);
        assert!(matches!(outcome, ClickOutcome::RejectedAutomated { .. }));
        assert_eq!(session.state().money, money_before);
        assert_eq!(session.state().total_clicks, clicks_before);
        // Cooldown still rejects a later, slower click.
        assert!(matches!(
            session.click(2_450),
            ClickOutcome::RejectedAutomated { .. }
        ));
    }

    #[test]
    fn best_combo_is_monotone_across_resets() {
        let mut session = session();
        for i in 0..12 {
            session.click(i * 500);
        }
        assert_eq!(session.state().best_combo, 12);
        // Let the streak decay, then click again: best combo keeps its high.
        session.advance_to(12 * 500 + 3_000);
        assert_eq!(session.combo_count(), 0);
        session.click(12 * 500 + 3_100);
        assert_eq!(session.state().best_combo, 12);
    }

    #[test]
    fn production_accrues_over_virtual_time() {
        let mut session = session();
        session.state.money = 15.0;
        session.buy_building(BuildingId::JuniorDev, 0).unwrap();
        // 1 building * 0.1/s over 10 seconds = 1.0.
        session.advance_to(10_000);
        assert!((session.state().money - 1.0).abs() < 1e-9);
        assert!((session.state().lifetime_earned - 1.0).abs() < 1e-9);
    }

    #[test]
    fn buying_requires_unlock_and_funds() {
        let mut session = session();
        assert!(session
            .buy_building(BuildingId::Freelancer, 0)
            .unwrap_err()
            .contains("not unlocked"));
        assert!(session
            .buy_building(BuildingId::JuniorDev, 0)
            .unwrap_err()
            .contains("Not enough money"));
        session.state.money = 15.0;
        assert_eq!(session.buy_building(BuildingId::JuniorDev, 0).unwrap(), 15.0);
        assert_eq!(session.state().money, 0.0);
        assert_eq!(session.state().building(BuildingId::JuniorDev).count, 1);
    }

    #[test]
    fn click_upgrade_multiplies_click_power() {
        let mut session = session();
        session.state.money = 100.0;
        session.buy_upgrade(UpgradeId::BetterKeyboard, 0).unwrap();
        assert_eq!(session.state().click_power, 2.0);
        assert!(session
            .buy_upgrade(UpgradeId::BetterKeyboard, 0)
            .unwrap_err()
            .contains("already owned"));
    }

    #[test]
    fn upgrade_requirements_are_enforced() {
        let mut session = session();
        session.state.money = 10_000.0;
        let err = session.buy_upgrade(UpgradeId::GitBasics, 0).unwrap_err();
        assert!(err.contains("Junior Dev"), "{err}");
        session.buy_building(BuildingId::JuniorDev, 0).unwrap();
        session.buy_upgrade(UpgradeId::GitBasics, 0).unwrap();
    }

    #[test]
    fn golden_bonus_is_single_use_and_expires() {
        let mut session = session();
        session.golden = Some(GoldenBonus {
            kind: GoldenBonusKind::Bonus,
            spawned_at_ms: 0,
        });
        session.state.click_power = 10.0;
        assert_eq!(session.click_golden(1_000).unwrap(), GoldenBonusKind::Bonus);
        // clickPower * 13 beats zero production.
        assert_eq!(session.state().money, 130.0);
        assert_eq!(session.state().golden_bonus_clicks, 1);
        assert!(session.click_golden(1_100).is_err());

        session.golden = Some(GoldenBonus {
            kind: GoldenBonusKind::Lucky,
            spawned_at_ms: 2_000,
        });
        assert!(session.click_golden(15_000).unwrap_err().contains("expired"));
        assert!(session.golden_bonus().is_none());
    }

    #[test]
    fn golden_frenzy_runs_its_countdown() {
        let mut session = session();
        session.golden = Some(GoldenBonus {
            kind: GoldenBonusKind::Frenzy,
            spawned_at_ms: 0,
        });
        session.click_golden(100).unwrap();
        assert!(session.frenzy_active());
        assert_eq!(session.state().frenzy_activations, 1);
        // 76 seconds in: still on. 77: over.
        session.advance_to(100 + 76_000);
        assert!(session.frenzy_active());
        session.advance_to(100 + 77_000);
        assert!(!session.frenzy_active());
        assert!(session
            .drain_notices()
            .iter()
            .any(|n| n.contains("Frenzy ended")));
    }

    #[test]
    fn golden_bonus_expires_unclicked() {
        let mut session = session();
        session.golden = Some(GoldenBonus {
            kind: GoldenBonusKind::Lucky,
            spawned_at_ms: 0,
        });
        session.advance_to(13_000);
        assert!(session.golden_bonus().is_none());
    }

    #[test]
    fn challenge_reward_applies_exactly_once() {
        let mut session = session();
        for i in 0..100u64 {
            session.click(i * 2_100); // outside combo window: plain clicks
        }
        // FirstSteps (100 clicks) pays +5 click power on top of base 1.
        assert_eq!(session.state().click_power, 6.0);
        let completed = session
            .state()
            .challenges
            .iter()
            .find(|c| c.id == types::ChallengeId::FirstSteps)
            .unwrap()
            .completed;
        assert!(completed.is_set());
    }

    #[test]
    fn session_prestige_clears_ephemerals() {
        let mut session = session();
        session.state.earned_since_prestige = 1_000_000_000.0;
        session.state.lifetime_earned = 1_000_000_000.0;
        session.activate_frenzy(0);
        session.golden = Some(GoldenBonus {
            kind: GoldenBonusKind::Bonus,
            spawned_at_ms: 0,
        });
        session.click(100);

        let outcome = session.prestige(200).unwrap();
        assert_eq!(outcome.tokens_gained, 1);
        assert!(!session.frenzy_active());
        assert!(session.golden_bonus().is_none());
        assert_eq!(session.combo_count(), 0);
        assert_eq!(session.state().money, 0.0);
        assert_eq!(session.state().total_clicks, 0);
        assert!((session.prestige_multiplier() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn autosave_debounces_and_manual_save_bypasses() {
        let mut session = session();
        session.click(0);
        assert!(!session.autosave_due(4_999));
        assert!(session.autosave_due(5_000));
        session.save_completed();

        session.click(10_000);
        assert!(session.request_manual_save());
        // The pending debounced save was superseded.
        assert!(!session.autosave_due(20_000));
        session.save_completed();
    }

    #[test]
    fn unlock_notices_fire_once() {
        let mut session = session();
        session.state.money = 100.0;
        session.state.lifetime_earned = 100.0;
        session.click(0); // triggers refresh_unlocks
        let notices = session.drain_notices();
        assert!(notices.iter().any(|n| n.contains("Freelancer")));
        assert!(notices.iter().any(|n| n.contains("Blog Writer")));
        session.click(2_500);
        assert!(!session
            .drain_notices()
            .iter()
            .any(|n| n.contains("Freelancer")));
    }

    #[test]
    fn money_stays_non_negative_under_play() {
        let mut session = session();
        let mut t = 0;
        for round in 0..50u64 {
            t += 700;
            session.click(t);
            let _ = session.buy_building(BuildingId::JuniorDev, t);
            let _ = session.buy_upgrade(UpgradeId::BetterKeyboard, t);
            if round % 10 == 0 {
                t += 30_000;
                session.advance_to(t);
            }
            assert!(session.state().money >= 0.0);
            assert!(session.state().click_power > 0.0);
        }
    }
}
