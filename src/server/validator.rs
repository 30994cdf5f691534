//! The save validation gate.
//!
//! This is the authoritative trust boundary: everything a client reports is
//! judged here before it can be persisted or ranked. The pipeline
//! short-circuits on the first failure and nothing partial is ever written.
//! Rejections carry a category so callers can tell malformed input apart
//! from suspected cheating.

use rocket::http::uri::Absolute;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;
use thiserror::Error;

use super::SaveRecord;
use crate::config::ValidatorConfig;
use crate::game::types::PlayerState;

/// How a rejection should be treated by the caller: bad input versus
/// implausible play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum RejectCategory {
    Invalid,
    Suspicious,
}

/// Why a save was refused. Every variant renders a distinct reason.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaveRejection {
    #[error("player id must not be empty")]
    MissingPlayerId,
    #[error("project url {0:?} is not an absolute http(s) url")]
    MalformedUrl(String),
    #[error("money {money} is outside [0, {max}]")]
    MoneyOutOfRange { money: f64, max: f64 },
    #[error("lifetime earned {earned} is outside [0, {max}]")]
    LifetimeEarnedOutOfRange { earned: f64, max: f64 },
    #[error("prestige level {level} is outside [0, {max}]")]
    PrestigeLevelOutOfRange { level: u32, max: u32 },
    #[error("prestige tokens {tokens} is outside [0, {max}]")]
    PrestigeTokensOutOfRange { tokens: u64, max: u64 },
    #[error("{per_click:.2} earned per click exceeds the plausible ceiling of {ceiling:.2}")]
    ImplausibleEarningsPerClick { per_click: f64, ceiling: f64 },
    #[error("{clicks_per_hour:.0} clicks/hour exceeds the sustained limit of {limit:.0}")]
    ImplausibleClickRate { clicks_per_hour: f64, limit: f64 },
}

impl SaveRejection {
    pub fn category(&self) -> RejectCategory {
        match self {
            SaveRejection::MissingPlayerId
            | SaveRejection::MalformedUrl(_)
            | SaveRejection::MoneyOutOfRange { .. }
            | SaveRejection::LifetimeEarnedOutOfRange { .. }
            | SaveRejection::PrestigeLevelOutOfRange { .. }
            | SaveRejection::PrestigeTokensOutOfRange { .. } => RejectCategory::Invalid,
            SaveRejection::ImplausibleEarningsPerClick { .. }
            | SaveRejection::ImplausibleClickRate { .. } => RejectCategory::Suspicious,
        }
    }
}

/// Display identity after trimming and length clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedIdentity {
    pub display_name: String,
    pub project_name: Option<String>,
    pub project_url: Option<String>,
}

fn clamp_chars(value: &str, max_chars: usize) -> String {
    value.trim().chars().take(max_chars).collect()
}

/// Step 1: trim and clamp the identity fields. An empty display name falls
/// back to "Anonymous"; empty optional fields become absent.
pub fn sanitize_identity(
    display_name: &str,
    project_name: Option<&str>,
    project_url: Option<&str>,
    config: &ValidatorConfig,
) -> SanitizedIdentity {
    let display_name = clamp_chars(display_name, config.max_display_name_chars);
    let display_name = if display_name.is_empty() {
        "Anonymous".to_string()
    } else {
        display_name
    };
    let project_name = project_name
        .map(|name| clamp_chars(name, config.max_project_name_chars))
        .filter(|name| !name.is_empty());
    let project_url = project_url
        .map(|url| clamp_chars(url, config.max_project_url_chars))
        .filter(|url| !url.is_empty());
    SanitizedIdentity {
        display_name,
        project_name,
        project_url,
    }
}

/// Step 2: a present project URL must be an absolute http(s) URL.
pub fn validate_project_url(url: &str) -> Result<(), SaveRejection> {
    match Absolute::parse(url) {
        Ok(uri) => {
            let scheme = uri.scheme();
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
                Ok(())
            } else {
                Err(SaveRejection::MalformedUrl(url.to_string()))
            }
        }
        Err(_) => Err(SaveRejection::MalformedUrl(url.to_string())),
    }
}

/// Steps 3 and 4: numeric ranges, then earnings-per-click plausibility.
/// Comparisons are phrased so NaN fails them.
pub fn validate_state(state: &PlayerState, config: &ValidatorConfig) -> Result<(), SaveRejection> {
    if !(state.money >= 0.0 && state.money <= config.max_money) {
        return Err(SaveRejection::MoneyOutOfRange {
            money: state.money,
            max: config.max_money,
        });
    }
    if !(state.lifetime_earned >= 0.0 && state.lifetime_earned <= config.max_money) {
        return Err(SaveRejection::LifetimeEarnedOutOfRange {
            earned: state.lifetime_earned,
            max: config.max_money,
        });
    }
    if state.prestige_level > config.max_prestige_level {
        return Err(SaveRejection::PrestigeLevelOutOfRange {
            level: state.prestige_level,
            max: config.max_prestige_level,
        });
    }
    if state.prestige_tokens > config.max_prestige_tokens {
        return Err(SaveRejection::PrestigeTokensOutOfRange {
            tokens: state.prestige_tokens,
            max: config.max_prestige_tokens,
        });
    }
    if state.total_clicks > 0 {
        let per_click = state.lifetime_earned / state.total_clicks as f64;
        let ceiling = config.max_earnings_per_click * state.prestige_level.max(1) as f64;
        if !(per_click <= ceiling) {
            return Err(SaveRejection::ImplausibleEarningsPerClick { per_click, ceiling });
        }
    }
    Ok(())
}

/// Step 5: with a prior record and a click-count increase, the sustained
/// click rate since that save must stay plausible.
pub fn validate_click_rate(
    state: &PlayerState,
    prior: &SaveRecord,
    now_ms: u64,
    config: &ValidatorConfig,
) -> Result<(), SaveRejection> {
    if state.total_clicks <= prior.state.total_clicks {
        return Ok(());
    }
    let delta = (state.total_clicks - prior.state.total_clicks) as f64;
    let elapsed_ms = now_ms
        .saturating_sub(prior.last_saved_at)
        .max(config.min_rate_window_ms.max(1));
    let clicks_per_hour = delta * 3_600_000.0 / elapsed_ms as f64;
    if clicks_per_hour > config.max_clicks_per_hour {
        return Err(SaveRejection::ImplausibleClickRate {
            clicks_per_hour,
            limit: config.max_clicks_per_hour,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog;

    fn config() -> ValidatorConfig {
        ValidatorConfig::default()
    }

    #[test]
    fn identity_is_trimmed_and_clamped() {
        let long_name = "x".repeat(80);
        let identity = sanitize_identity(
            &format!("  {long_name}  "),
            Some("   "),
            Some("  https://example.com  "),
            &config(),
        );
        assert_eq!(identity.display_name.chars().count(), 50);
        assert_eq!(identity.project_name, None);
        assert_eq!(identity.project_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn blank_display_name_becomes_anonymous() {
        let identity = sanitize_identity("   ", None, None, &config());
        assert_eq!(identity.display_name, "Anonymous");
    }

    #[test]
    fn url_must_be_absolute_http() {
        assert!(validate_project_url("https://example.com/game").is_ok());
        assert!(validate_project_url("http://example.com").is_ok());
        assert!(validate_project_url("ftp://example.com").is_err());
        assert!(validate_project_url("example.com").is_err());
        assert!(validate_project_url("not a url").is_err());
    }

    #[test]
    fn negative_money_is_always_rejected() {
        let mut state = catalog::initial_player_state();
        state.money = -1.0;
        let rejection = validate_state(&state, &config()).unwrap_err();
        assert_eq!(rejection.category(), RejectCategory::Invalid);
        assert!(matches!(rejection, SaveRejection::MoneyOutOfRange { .. }));
    }

    #[test]
    fn nan_money_is_rejected() {
        let mut state = catalog::initial_player_state();
        state.money = f64::NAN;
        assert!(validate_state(&state, &config()).is_err());
    }

    #[test]
    fn token_and_level_ranges_are_enforced() {
        let mut state = catalog::initial_player_state();
        state.prestige_tokens = 2_000_000;
        assert!(matches!(
            validate_state(&state, &config()),
            Err(SaveRejection::PrestigeTokensOutOfRange { .. })
        ));

        let mut state = catalog::initial_player_state();
        state.prestige_level = 10_001;
        assert!(matches!(
            validate_state(&state, &config()),
            Err(SaveRejection::PrestigeLevelOutOfRange { .. })
        ));
    }

    #[test]
    fn earnings_per_click_ceiling_scales_with_prestige() {
        let mut state = catalog::initial_player_state();
        state.total_clicks = 100;
        state.lifetime_earned = 100.0 * 10_000.0; // exactly at the ceiling
        assert!(validate_state(&state, &config()).is_ok());

        state.lifetime_earned += 1.0;
        let rejection = validate_state(&state, &config()).unwrap_err();
        assert_eq!(rejection.category(), RejectCategory::Suspicious);

        // A prestige level raises the ceiling proportionally.
        state.prestige_level = 2;
        assert!(validate_state(&state, &config()).is_ok());
    }

    #[test]
    fn zero_clicks_skips_the_per_click_check() {
        let mut state = catalog::initial_player_state();
        state.total_clicks = 0;
        state.lifetime_earned = 1_000_000.0;
        assert!(validate_state(&state, &config()).is_ok());
    }

    #[test]
    fn click_rate_over_an_hour_is_bounded() {
        let prior_state = catalog::initial_player_state();
        let prior = SaveRecord {
            player_id: "p".to_string(),
            display_name: "P".to_string(),
            project_name: None,
            project_url: None,
            state: prior_state,
            last_saved_at: 0,
        };

        let mut incoming = catalog::initial_player_state();
        incoming.total_clicks = 1_000_000;
        let hour_ms = 3_600_000;
        let rejection = validate_click_rate(&incoming, &prior, hour_ms, &config()).unwrap_err();
        assert_eq!(rejection.category(), RejectCategory::Suspicious);

        incoming.total_clicks = 40_000;
        assert!(validate_click_rate(&incoming, &prior, hour_ms, &config()).is_ok());
    }

    #[test]
    fn a_quick_follow_up_save_is_not_penalized() {
        let mut prior_state = catalog::initial_player_state();
        prior_state.total_clicks = 30;
        let prior = SaveRecord {
            player_id: "p".to_string(),
            display_name: "P".to_string(),
            project_name: None,
            project_url: None,
            state: prior_state,
            last_saved_at: 1_000_000,
        };
        // One click, saved five milliseconds later: the rate window floor
        // keeps the denominator meaningful.
        let mut incoming = catalog::initial_player_state();
        incoming.total_clicks = 31;
        assert!(validate_click_rate(&incoming, &prior, 1_000_005, &config()).is_ok());
    }

    #[test]
    fn decreasing_clicks_skip_the_rate_check() {
        let mut prior_state = catalog::initial_player_state();
        prior_state.total_clicks = 500;
        let prior = SaveRecord {
            player_id: "p".to_string(),
            display_name: "P".to_string(),
            project_name: None,
            project_url: None,
            state: prior_state,
            last_saved_at: 0,
        };
        // A prestige reset legitimately lowers total_clicks.
        let incoming = catalog::initial_player_state();
        assert!(validate_click_rate(&incoming, &prior, 1, &config()).is_ok());
    }
}
