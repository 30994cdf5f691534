use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

/// One-way latch with a single mutation entry point.
///
/// `set()` closes the latch and reports whether this call was the one that
/// closed it, which is what drives one-shot rewards and notifications.
/// Nothing reopens a latch short of re-seeding the record that contains it
/// (the prestige reset does exactly that for upgrades and challenges).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(crate = "rocket::serde", transparent)]
pub struct Latch(bool);

impl Latch {
    pub fn new() -> Self {
        Latch(false)
    }

    /// Close the latch. Returns true only on the closing transition.
    pub fn set(&mut self) -> bool {
        let newly = !self.0;
        self.0 = true;
        newly
    }

    pub fn is_set(&self) -> bool {
        self.0
    }
}

/// Canonical building identifier enum. The set is closed: every building the
/// economy knows about is a variant here, so production and unlock code can
/// match exhaustively instead of probing a string-keyed map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum BuildingId {
    JuniorDev,
    Freelancer,
    BlogWriter,
    CourseCreator,
    SaasFounder,
    AgencyOwner,
    AppDeveloper,
    TechInfluencer,
    SerialEntrepreneur,
    VcFounder,
    TechGiant,
    InnovationLegend,
}

impl BuildingId {
    pub fn all() -> Vec<BuildingId> {
        vec![
            BuildingId::JuniorDev,
            BuildingId::Freelancer,
            BuildingId::BlogWriter,
            BuildingId::CourseCreator,
            BuildingId::SaasFounder,
            BuildingId::AgencyOwner,
            BuildingId::AppDeveloper,
            BuildingId::TechInfluencer,
            BuildingId::SerialEntrepreneur,
            BuildingId::VcFounder,
            BuildingId::TechGiant,
            BuildingId::InnovationLegend,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuildingId::JuniorDev => "Junior Dev",
            BuildingId::Freelancer => "Freelancer",
            BuildingId::BlogWriter => "Blog Writer",
            BuildingId::CourseCreator => "Course Creator",
            BuildingId::SaasFounder => "SaaS Founder",
            BuildingId::AgencyOwner => "Agency Owner",
            BuildingId::AppDeveloper => "App Developer",
            BuildingId::TechInfluencer => "Tech Influencer",
            BuildingId::SerialEntrepreneur => "Serial Entrepreneur",
            BuildingId::VcFounder => "VC-Backed Founder",
            BuildingId::TechGiant => "Tech Giant CEO",
            BuildingId::InnovationLegend => "Innovation Legend",
        }
    }
}

/// One production building slot owned by the player.
///
/// `count` only grows within a prestige epoch; the prestige reset is the one
/// operation allowed to zero it. `unlocked` is a lifetime latch gated on
/// cumulative earnings and survives prestige.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct Building {
    pub id: BuildingId,
    pub count: u64,
    pub base_cost: f64,
    pub base_production: f64,
    pub unlocked: Latch,
}

/// Canonical upgrade identifier enum, closed like [`BuildingId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum UpgradeId {
    BetterKeyboard,
    DualMonitors,
    StandingDesk,
    AiCopilot,
    NeuralLink,
    GitBasics,
    CodeReviews,
    SeniorMentorship,
    PortfolioSite,
    ClientPipeline,
    ReferralNetwork,
    SeoSkills,
    EmailList,
    VideoProduction,
    CoursePlatform,
    PaymentGateway,
    AutoScaling,
    PremiumCoffee,
    Meditation,
    HomeOffice,
    CoworkingSpace,
    PrivateJet,
}

impl UpgradeId {
    pub fn all() -> Vec<UpgradeId> {
        vec![
            UpgradeId::BetterKeyboard,
            UpgradeId::DualMonitors,
            UpgradeId::StandingDesk,
            UpgradeId::AiCopilot,
            UpgradeId::NeuralLink,
            UpgradeId::GitBasics,
            UpgradeId::CodeReviews,
            UpgradeId::SeniorMentorship,
            UpgradeId::PortfolioSite,
            UpgradeId::ClientPipeline,
            UpgradeId::ReferralNetwork,
            UpgradeId::SeoSkills,
            UpgradeId::EmailList,
            UpgradeId::VideoProduction,
            UpgradeId::CoursePlatform,
            UpgradeId::PaymentGateway,
            UpgradeId::AutoScaling,
            UpgradeId::PremiumCoffee,
            UpgradeId::Meditation,
            UpgradeId::HomeOffice,
            UpgradeId::CoworkingSpace,
            UpgradeId::PrivateJet,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeId::BetterKeyboard => "Better Keyboard",
            UpgradeId::DualMonitors => "Dual Monitors",
            UpgradeId::StandingDesk => "Standing Desk",
            UpgradeId::AiCopilot => "AI Copilot",
            UpgradeId::NeuralLink => "Neural Link",
            UpgradeId::GitBasics => "Git Basics",
            UpgradeId::CodeReviews => "Code Reviews",
            UpgradeId::SeniorMentorship => "Senior Mentorship",
            UpgradeId::PortfolioSite => "Portfolio Site",
            UpgradeId::ClientPipeline => "Client Pipeline",
            UpgradeId::ReferralNetwork => "Referral Network",
            UpgradeId::SeoSkills => "SEO Skills",
            UpgradeId::EmailList => "Email List",
            UpgradeId::VideoProduction => "Video Production",
            UpgradeId::CoursePlatform => "Course Platform",
            UpgradeId::PaymentGateway => "Payment Gateway",
            UpgradeId::AutoScaling => "Auto-Scaling",
            UpgradeId::PremiumCoffee => "Premium Coffee",
            UpgradeId::Meditation => "Meditation",
            UpgradeId::HomeOffice => "Home Office",
            UpgradeId::CoworkingSpace => "Coworking Space",
            UpgradeId::PrivateJet => "Private Jet",
        }
    }
}

/// What an upgrade does once owned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", tag = "upgrade_kind")]
pub enum UpgradeKind {
    /// Multiplies click power when purchased.
    Click { factor: f64 },
    /// Multiplies one building's production while owned.
    Building { target: BuildingId, multiplier: f64 },
    /// Multiplies all production while owned.
    Global { multiplier: f64 },
}

/// A purchasable upgrade. `requirement` is a building count for
/// building-targeted upgrades and a total-click threshold for click
/// upgrades; global upgrades only need the money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct Upgrade {
    pub id: UpgradeId,
    pub kind: UpgradeKind,
    pub cost: f64,
    pub requirement: u64,
    pub owned: Latch,
}

/// Canonical challenge identifier enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum ChallengeId {
    FirstSteps,
    ClickMaster,
    SpeedDemon,
    StartupCapital,
    SelfFunded,
    AngelInvestor,
    UnicornStatus,
    SmallTeam,
    GrowingCompany,
    EmpireBuilder,
    TechAdoption,
    InnovationLeader,
    OptimizationGuru,
    PassiveIncome,
    AutomatedEmpire,
    MoneyPrinter,
}

/// Which aggregate metric a challenge tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum ChallengeKind {
    Clicks,
    Money,
    Buildings,
    Upgrades,
    ProductionRate,
}

/// Reward granted exactly once when a challenge completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", tag = "reward_kind")]
pub enum ChallengeReward {
    /// Additive boost to click power.
    ClickPower { amount: f64 },
    /// Flat money grant.
    Money { amount: f64 },
}

/// Progress record for one challenge. `progress` never decreases even when
/// the underlying metric dips (spending money, prestige aside), and is
/// clamped to `goal` once `completed` latches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct ChallengeProgress {
    pub id: ChallengeId,
    pub kind: ChallengeKind,
    pub goal: f64,
    pub progress: f64,
    pub completed: Latch,
    pub reward: ChallengeReward,
}

/// Canonical achievement identifier enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum AchievementId {
    HelloWorld,
    ComboStarter,
    FirstHire,
    LuckyFind,
    CenturyClub,
    ComboMaster,
    TechStack,
    FrenzyMaster,
    Millionaire,
    ComboLegend,
    FullyUpgraded,
    ProductionLine,
    Billionaire,
    ClickLegend,
    EmpireTycoon,
    AutomationKing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum AchievementTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Unlock state for one achievement. Achievements survive prestige; the
/// reset never touches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct AchievementStatus {
    pub id: AchievementId,
    pub tier: AchievementTier,
    pub unlocked: Latch,
}

/// The aggregate player state: everything that persists across sessions.
///
/// Ephemeral combo state lives in the session, not here, so serializing a
/// `PlayerState` is exactly the save payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct PlayerState {
    pub money: f64,
    /// Cumulative earnings over the player's whole lifetime. Never reset;
    /// gates building unlocks and feeds the leaderboard.
    pub lifetime_earned: f64,
    /// Earnings since the last prestige reset. Gates prestige eligibility
    /// and the money challenges.
    pub earned_since_prestige: f64,
    pub click_power: f64,
    pub total_clicks: u64,
    pub buildings: Vec<Building>,
    pub upgrades: Vec<Upgrade>,
    pub challenges: Vec<ChallengeProgress>,
    pub achievements: Vec<AchievementStatus>,
    pub prestige_level: u32,
    pub prestige_tokens: u64,
    pub frenzy_activations: u64,
    pub golden_bonus_clicks: u64,
    pub best_combo: u64,
}

impl PlayerState {
    /// Look up a building by id. The vectors are seeded from the catalog in
    /// `BuildingId::all()` order, so every id is present exactly once.
    pub fn building(&self, id: BuildingId) -> &Building {
        self.buildings
            .iter()
            .find(|b| b.id == id)
            .expect("catalog seeds every building id")
    }

    pub fn building_mut(&mut self, id: BuildingId) -> &mut Building {
        self.buildings
            .iter_mut()
            .find(|b| b.id == id)
            .expect("catalog seeds every building id")
    }

    pub fn upgrade(&self, id: UpgradeId) -> &Upgrade {
        self.upgrades
            .iter()
            .find(|u| u.id == id)
            .expect("catalog seeds every upgrade id")
    }

    pub fn upgrade_mut(&mut self, id: UpgradeId) -> &mut Upgrade {
        self.upgrades
            .iter_mut()
            .find(|u| u.id == id)
            .expect("catalog seeds every upgrade id")
    }

    pub fn total_buildings(&self) -> u64 {
        self.buildings.iter().map(|b| b.count).sum()
    }

    pub fn owned_upgrades(&self) -> u64 {
        self.upgrades.iter().filter(|u| u.owned.is_set()).count() as u64
    }
}

/// Kinds of golden bonus, each granting a different one-shot effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum GoldenBonusKind {
    /// Flat grant proportional to production rate or click power.
    Bonus,
    /// Activates frenzy mode.
    Frenzy,
    /// Grant proportional to production rate or current balance, whichever
    /// is larger.
    Lucky,
}

/// A live golden bonus overlay. Clickable exactly once, auto-expires.
/// Ephemeral: never part of the save payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldenBonus {
    pub kind: GoldenBonusKind,
    pub spawned_at_ms: u64,
}

/// Result of feeding one click event into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// The click was processed and earned money.
    Earned {
        earnings: f64,
        combo_count: u64,
        combo_multiplier: f64,
    },
    /// The auto-click heuristic flagged or is still suspending clicks; the
    /// click had no effect.
    RejectedAutomated { until_ms: u64 },
}
