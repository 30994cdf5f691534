//! Leaderboard scoring and ranking over persisted records.
//!
//! Prestige level dominates token count, which dominates raw lifetime
//! earnings; the 0.01 factor keeps earnings from ever outranking a prestige
//! level on their own.

use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::SaveRecord;
use crate::game::types::PlayerState;

const LEVEL_WEIGHT: f64 = 10_000_000.0;
const TOKEN_WEIGHT: f64 = 100_000.0;
const EARNED_WEIGHT: f64 = 0.01;

/// Largest page a single query returns.
pub const MAX_PAGE_SIZE: usize = 100;

/// Ranking score for one stored state.
pub fn score(state: &PlayerState) -> f64 {
    state.prestige_level as f64 * LEVEL_WEIGHT
        + state.prestige_tokens as f64 * TOKEN_WEIGHT
        + state.lifetime_earned * EARNED_WEIGHT
}

/// Read-only projection of one ranked record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct LeaderboardRow {
    pub rank: u32,
    pub display_name: String,
    pub project_name: Option<String>,
    pub project_url: Option<String>,
    pub lifetime_earned: f64,
    pub prestige_level: u32,
    pub prestige_tokens: u64,
    pub best_combo: u64,
    pub total_clicks: u64,
}

/// Rank records by descending score with dense 1-based ranks (ties share a
/// rank, the next distinct score gets the next rank). The page size is
/// clamped to `[1, MAX_PAGE_SIZE]`; `None` means a full page.
pub fn rank_records<'a>(
    records: impl Iterator<Item = &'a SaveRecord>,
    limit: Option<usize>,
) -> Vec<LeaderboardRow> {
    let page_size = limit.unwrap_or(MAX_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    let mut scored: Vec<(&SaveRecord, f64)> =
        records.map(|record| (record, score(&record.state))).collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut rows = Vec::with_capacity(page_size.min(scored.len()));
    let mut rank = 0u32;
    let mut previous_score = None;
    for (record, record_score) in scored.into_iter().take(page_size) {
        if previous_score != Some(record_score) {
            rank += 1;
            previous_score = Some(record_score);
        }
        rows.push(LeaderboardRow {
            rank,
            display_name: record.display_name.clone(),
            project_name: record.project_name.clone(),
            project_url: record.project_url.clone(),
            lifetime_earned: record.state.lifetime_earned,
            prestige_level: record.state.prestige_level,
            prestige_tokens: record.state.prestige_tokens,
            best_combo: record.state.best_combo,
            total_clicks: record.state.total_clicks,
        });
    }
    rows
}
