//! Challenge and achievement tracking.
//!
//! Threshold detection and reward application are separate steps:
//! [`observe_metric`] only raises progress and reports which challenges
//! crossed their goal, and [`claim_reward`] latches completion and hands the
//! reward back exactly once. The session applies the reward and emits the
//! notification, so a reward can be audited or retried independently of the
//! latch.

use super::types::{
    AchievementId, AchievementStatus, ChallengeId, ChallengeKind, ChallengeProgress,
    ChallengeReward,
};

/// Raise every matching challenge's progress to `value` (monotone: a metric
/// dip never lowers progress). Returns the challenges that are now at or
/// past their goal and still unclaimed.
pub fn observe_metric(
    challenges: &mut [ChallengeProgress],
    kind: ChallengeKind,
    value: f64,
) -> Vec<ChallengeId> {
    let mut crossed = Vec::new();
    for challenge in challenges.iter_mut().filter(|c| c.kind == kind) {
        if challenge.completed.is_set() {
            continue;
        }
        if value.is_finite() && value > challenge.progress {
            challenge.progress = value;
        }
        if challenge.progress >= challenge.goal {
            crossed.push(challenge.id);
        }
    }
    crossed
}

/// Latch a crossed challenge and return its reward. Returns `None` when the
/// goal is not reached or the reward was already claimed, so calling twice
/// can never double-pay.
pub fn claim_reward(
    challenges: &mut [ChallengeProgress],
    id: ChallengeId,
) -> Option<ChallengeReward> {
    let challenge = challenges.iter_mut().find(|c| c.id == id)?;
    if challenge.progress < challenge.goal {
        return None;
    }
    if !challenge.completed.set() {
        return None;
    }
    challenge.progress = challenge.goal;
    Some(challenge.reward)
}

/// Aggregate snapshot the achievement predicates are evaluated against.
#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementView {
    pub total_clicks: u64,
    pub best_combo: u64,
    pub money: f64,
    pub total_buildings: u64,
    pub owned_upgrades: u64,
    pub upgrade_catalog_size: u64,
    pub frenzy_activations: u64,
    pub golden_bonus_clicks: u64,
    pub production_rate: f64,
}

fn predicate_holds(id: AchievementId, view: &AchievementView) -> bool {
    match id {
        AchievementId::HelloWorld => view.total_clicks >= 1,
        AchievementId::ComboStarter => view.best_combo >= 10,
        AchievementId::FirstHire => view.total_buildings >= 1,
        AchievementId::LuckyFind => view.golden_bonus_clicks >= 1,
        AchievementId::CenturyClub => view.total_clicks >= 100,
        AchievementId::ComboMaster => view.best_combo >= 50,
        AchievementId::TechStack => view.owned_upgrades >= 10,
        AchievementId::FrenzyMaster => view.frenzy_activations >= 5,
        AchievementId::Millionaire => view.money >= 1_000_000.0,
        AchievementId::ComboLegend => view.best_combo >= 100,
        AchievementId::FullyUpgraded => {
            view.upgrade_catalog_size > 0 && view.owned_upgrades >= view.upgrade_catalog_size
        }
        AchievementId::ProductionLine => view.total_buildings >= 100,
        AchievementId::Billionaire => view.money >= 1_000_000_000.0,
        AchievementId::ClickLegend => view.total_clicks >= 100_000,
        AchievementId::EmpireTycoon => view.total_buildings >= 500,
        AchievementId::AutomationKing => view.production_rate >= 10_000_000.0,
    }
}

/// Latch every achievement whose predicate now holds; returns the ones that
/// newly unlocked this call.
pub fn unlock_achievements(
    achievements: &mut [AchievementStatus],
    view: &AchievementView,
) -> Vec<AchievementId> {
    let mut unlocked = Vec::new();
    for achievement in achievements.iter_mut() {
        if achievement.unlocked.is_set() {
            continue;
        }
        if predicate_holds(achievement.id, view) && achievement.unlocked.set() {
            unlocked.push(achievement.id);
        }
    }
    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog;

    #[test]
    fn progress_is_monotone_and_latches_once() {
        let mut challenges = catalog::initial_challenges();
        assert!(observe_metric(&mut challenges, ChallengeKind::Clicks, 40.0).is_empty());
        // A lower reading never lowers progress.
        observe_metric(&mut challenges, ChallengeKind::Clicks, 10.0);
        let first = challenges
            .iter()
            .find(|c| c.id == ChallengeId::FirstSteps)
            .unwrap();
        assert_eq!(first.progress, 40.0);

        let crossed = observe_metric(&mut challenges, ChallengeKind::Clicks, 150.0);
        assert_eq!(crossed, vec![ChallengeId::FirstSteps]);

        let reward = claim_reward(&mut challenges, ChallengeId::FirstSteps);
        assert_eq!(reward, Some(ChallengeReward::ClickPower { amount: 5.0 }));
        // Second claim pays nothing.
        assert_eq!(claim_reward(&mut challenges, ChallengeId::FirstSteps), None);

        // Progress clamps to the goal once latched.
        let first = challenges
            .iter()
            .find(|c| c.id == ChallengeId::FirstSteps)
            .unwrap();
        assert_eq!(first.progress, first.goal);
        assert!(first.completed.is_set());

        // Completed challenges drop out of later observations.
        let crossed = observe_metric(&mut challenges, ChallengeKind::Clicks, 100_000.0);
        assert_eq!(
            crossed,
            vec![ChallengeId::ClickMaster, ChallengeId::SpeedDemon]
        );
    }

    #[test]
    fn claim_before_goal_pays_nothing() {
        let mut challenges = catalog::initial_challenges();
        observe_metric(&mut challenges, ChallengeKind::Money, 500.0);
        assert_eq!(claim_reward(&mut challenges, ChallengeId::StartupCapital), None);
    }

    #[test]
    fn non_finite_metric_is_ignored() {
        let mut challenges = catalog::initial_challenges();
        observe_metric(&mut challenges, ChallengeKind::Money, f64::NAN);
        let cap = challenges
            .iter()
            .find(|c| c.id == ChallengeId::StartupCapital)
            .unwrap();
        assert_eq!(cap.progress, 0.0);
    }

    #[test]
    fn achievements_unlock_once_and_stay() {
        let mut achievements = catalog::initial_achievements();
        let view = AchievementView {
            total_clicks: 1,
            ..Default::default()
        };
        assert_eq!(
            unlock_achievements(&mut achievements, &view),
            vec![AchievementId::HelloWorld]
        );
        // Same view again: nothing new.
        assert!(unlock_achievements(&mut achievements, &view).is_empty());
        // A later dip in the metric does not relock.
        let dipped = AchievementView::default();
        assert!(unlock_achievements(&mut achievements, &dipped).is_empty());
        let hello = achievements
            .iter()
            .find(|a| a.id == AchievementId::HelloWorld)
            .unwrap();
        assert!(hello.unlocked.is_set());
    }

    #[test]
    fn combo_milestones_map_to_tiers() {
        let mut achievements = catalog::initial_achievements();
        let view = AchievementView {
            best_combo: 100,
            ..Default::default()
        };
        let unlocked = unlock_achievements(&mut achievements, &view);
        assert!(unlocked.contains(&AchievementId::ComboStarter));
        assert!(unlocked.contains(&AchievementId::ComboMaster));
        assert!(unlocked.contains(&AchievementId::ComboLegend));
    }
}
