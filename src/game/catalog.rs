//! Immutable reference data: the building, upgrade, challenge and
//! achievement catalogs plus the prestige constants.
//!
//! Definitions here never mutate at runtime; play only flips the latches
//! and counters on the copies seeded into a [`PlayerState`].

use super::types::{
    AchievementId, AchievementStatus, AchievementTier, Building, BuildingId, ChallengeId,
    ChallengeKind, ChallengeProgress, ChallengeReward, Latch, PlayerState, Upgrade, UpgradeId,
    UpgradeKind,
};

/// Resettable progress needed before prestige becomes available.
pub const PRESTIGE_REQUIREMENT: f64 = 1_000_000_000.0;

/// Permanent production/click bonus per prestige token.
pub const PRESTIGE_TOKEN_BONUS: f64 = 0.1;

/// Click power a fresh (or freshly prestiged) player starts with.
pub const BASE_CLICK_POWER: f64 = 1.0;

/// Lifetime-earned threshold at which a building unlocks, or `None` for
/// buildings available from the start.
pub fn unlock_threshold(id: BuildingId) -> Option<f64> {
    match id {
        BuildingId::JuniorDev => None,
        BuildingId::Freelancer => Some(10.0),
        BuildingId::BlogWriter => Some(100.0),
        BuildingId::CourseCreator => Some(1_000.0),
        BuildingId::SaasFounder => Some(10_000.0),
        BuildingId::AgencyOwner => Some(100_000.0),
        BuildingId::AppDeveloper => Some(1_000_000.0),
        BuildingId::TechInfluencer => Some(10_000_000.0),
        BuildingId::SerialEntrepreneur => Some(100_000_000.0),
        BuildingId::VcFounder => Some(1_000_000_000.0),
        BuildingId::TechGiant => Some(10_000_000_000.0),
        BuildingId::InnovationLegend => Some(100_000_000_000.0),
    }
}

fn building(id: BuildingId, base_cost: f64, base_production: f64) -> Building {
    let mut unlocked = Latch::new();
    if unlock_threshold(id).is_none() {
        unlocked.set();
    }
    Building {
        id,
        count: 0,
        base_cost,
        base_production,
        unlocked,
    }
}

pub fn initial_buildings() -> Vec<Building> {
    vec![
        building(BuildingId::JuniorDev, 15.0, 0.1),
        building(BuildingId::Freelancer, 100.0, 1.0),
        building(BuildingId::BlogWriter, 1_100.0, 8.0),
        building(BuildingId::CourseCreator, 12_000.0, 47.0),
        building(BuildingId::SaasFounder, 130_000.0, 260.0),
        building(BuildingId::AgencyOwner, 1_400_000.0, 1_400.0),
        building(BuildingId::AppDeveloper, 20_000_000.0, 7_800.0),
        building(BuildingId::TechInfluencer, 330_000_000.0, 44_000.0),
        building(BuildingId::SerialEntrepreneur, 5_100_000_000.0, 260_000.0),
        building(BuildingId::VcFounder, 75_000_000_000.0, 1_600_000.0),
        building(BuildingId::TechGiant, 1_000_000_000_000.0, 10_000_000.0),
        building(BuildingId::InnovationLegend, 14_000_000_000_000.0, 65_000_000.0),
    ]
}

fn upgrade(id: UpgradeId, cost: f64, requirement: u64, kind: UpgradeKind) -> Upgrade {
    Upgrade {
        id,
        kind,
        cost,
        requirement,
        owned: Latch::new(),
    }
}

pub fn initial_upgrades() -> Vec<Upgrade> {
    let click = |factor| UpgradeKind::Click { factor };
    let boost = |target, multiplier| UpgradeKind::Building { target, multiplier };
    let global = |multiplier| UpgradeKind::Global { multiplier };
    vec![
        // Click upgrades; requirement is a total-click threshold.
        upgrade(UpgradeId::BetterKeyboard, 100.0, 0, click(2.0)),
        upgrade(UpgradeId::DualMonitors, 500.0, 1, click(2.0)),
        upgrade(UpgradeId::StandingDesk, 10_000.0, 10, click(2.0)),
        upgrade(UpgradeId::AiCopilot, 100_000.0, 25, click(2.0)),
        upgrade(UpgradeId::NeuralLink, 10_000_000.0, 50, click(2.0)),
        // Building upgrades; requirement is the target building's count.
        upgrade(UpgradeId::GitBasics, 100.0, 1, boost(BuildingId::JuniorDev, 2.0)),
        upgrade(UpgradeId::CodeReviews, 500.0, 5, boost(BuildingId::JuniorDev, 2.0)),
        upgrade(UpgradeId::SeniorMentorship, 50_000.0, 25, boost(BuildingId::JuniorDev, 2.0)),
        upgrade(UpgradeId::PortfolioSite, 1_000.0, 1, boost(BuildingId::Freelancer, 2.0)),
        upgrade(UpgradeId::ClientPipeline, 5_000.0, 5, boost(BuildingId::Freelancer, 2.0)),
        upgrade(UpgradeId::ReferralNetwork, 500_000.0, 25, boost(BuildingId::Freelancer, 2.0)),
        upgrade(UpgradeId::SeoSkills, 11_000.0, 1, boost(BuildingId::BlogWriter, 2.0)),
        upgrade(UpgradeId::EmailList, 55_000.0, 5, boost(BuildingId::BlogWriter, 2.0)),
        upgrade(UpgradeId::VideoProduction, 120_000.0, 1, boost(BuildingId::CourseCreator, 2.0)),
        upgrade(UpgradeId::CoursePlatform, 600_000.0, 5, boost(BuildingId::CourseCreator, 2.0)),
        upgrade(UpgradeId::PaymentGateway, 1_300_000.0, 1, boost(BuildingId::SaasFounder, 2.0)),
        upgrade(UpgradeId::AutoScaling, 6_500_000.0, 5, boost(BuildingId::SaasFounder, 2.0)),
        // Global upgrades; no requirement beyond the money.
        upgrade(UpgradeId::PremiumCoffee, 50_000.0, 0, global(1.5)),
        upgrade(UpgradeId::Meditation, 500_000.0, 0, global(1.5)),
        upgrade(UpgradeId::HomeOffice, 5_000_000.0, 0, global(1.5)),
        upgrade(UpgradeId::CoworkingSpace, 50_000_000.0, 0, global(2.0)),
        upgrade(UpgradeId::PrivateJet, 500_000_000.0, 0, global(2.0)),
    ]
}

fn challenge(
    id: ChallengeId,
    kind: ChallengeKind,
    goal: f64,
    reward: ChallengeReward,
) -> ChallengeProgress {
    ChallengeProgress {
        id,
        kind,
        goal,
        progress: 0.0,
        completed: Latch::new(),
        reward,
    }
}

/// The challenge set a fresh epoch starts with. Prestige re-seeds from here
/// rather than merging into the old set.
pub fn initial_challenges() -> Vec<ChallengeProgress> {
    let clicks = ChallengeKind::Clicks;
    let money = ChallengeKind::Money;
    let buildings = ChallengeKind::Buildings;
    let upgrades = ChallengeKind::Upgrades;
    let rate = ChallengeKind::ProductionRate;
    let power = |amount| ChallengeReward::ClickPower { amount };
    let grant = |amount| ChallengeReward::Money { amount };
    vec![
        challenge(ChallengeId::FirstSteps, clicks, 100.0, power(5.0)),
        challenge(ChallengeId::ClickMaster, clicks, 1_000.0, power(10.0)),
        challenge(ChallengeId::SpeedDemon, clicks, 10_000.0, power(25.0)),
        challenge(ChallengeId::StartupCapital, money, 1_000.0, grant(500.0)),
        challenge(ChallengeId::SelfFunded, money, 100_000.0, grant(10_000.0)),
        challenge(ChallengeId::AngelInvestor, money, 10_000_000.0, grant(1_000_000.0)),
        challenge(ChallengeId::UnicornStatus, money, 1_000_000_000.0, grant(100_000_000.0)),
        challenge(ChallengeId::SmallTeam, buildings, 10.0, power(10.0)),
        challenge(ChallengeId::GrowingCompany, buildings, 50.0, power(25.0)),
        challenge(ChallengeId::EmpireBuilder, buildings, 200.0, power(50.0)),
        challenge(ChallengeId::TechAdoption, upgrades, 5.0, grant(50_000.0)),
        challenge(ChallengeId::InnovationLeader, upgrades, 15.0, grant(1_000_000.0)),
        challenge(ChallengeId::OptimizationGuru, upgrades, 22.0, grant(100_000_000.0)),
        challenge(ChallengeId::PassiveIncome, rate, 100.0, power(10.0)),
        challenge(ChallengeId::AutomatedEmpire, rate, 10_000.0, power(25.0)),
        challenge(ChallengeId::MoneyPrinter, rate, 1_000_000.0, power(50.0)),
    ]
}

fn achievement(id: AchievementId, tier: AchievementTier) -> AchievementStatus {
    AchievementStatus {
        id,
        tier,
        unlocked: Latch::new(),
    }
}

pub fn initial_achievements() -> Vec<AchievementStatus> {
    use AchievementTier::{Bronze, Gold, Platinum, Silver};
    vec![
        achievement(AchievementId::HelloWorld, Bronze),
        achievement(AchievementId::ComboStarter, Bronze),
        achievement(AchievementId::FirstHire, Bronze),
        achievement(AchievementId::LuckyFind, Bronze),
        achievement(AchievementId::CenturyClub, Silver),
        achievement(AchievementId::ComboMaster, Silver),
        achievement(AchievementId::TechStack, Silver),
        achievement(AchievementId::FrenzyMaster, Silver),
        achievement(AchievementId::Millionaire, Gold),
        achievement(AchievementId::ComboLegend, Gold),
        achievement(AchievementId::FullyUpgraded, Gold),
        achievement(AchievementId::ProductionLine, Gold),
        achievement(AchievementId::Billionaire, Platinum),
        achievement(AchievementId::ClickLegend, Platinum),
        achievement(AchievementId::EmpireTycoon, Platinum),
        achievement(AchievementId::AutomationKing, Platinum),
    ]
}

/// A brand-new player with everything at its defaults.
pub fn initial_player_state() -> PlayerState {
    PlayerState {
        money: 0.0,
        lifetime_earned: 0.0,
        earned_since_prestige: 0.0,
        click_power: BASE_CLICK_POWER,
        total_clicks: 0,
        buildings: initial_buildings(),
        upgrades: initial_upgrades(),
        challenges: initial_challenges(),
        achievements: initial_achievements(),
        prestige_level: 0,
        prestige_tokens: 0,
        frenzy_activations: 0,
        golden_bonus_clicks: 0,
        best_combo: 0,
    }
}
