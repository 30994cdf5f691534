//! Server-side persistence: one save record per player, validated before
//! every commit, plus the leaderboard read path.
//!
//! The store lives behind a single async mutex in Rocket's managed state,
//! so the read-prior/patch-or-insert pair inside [`SaveStore::apply_save`]
//! is serialized per process: two racing saves for the same player cannot
//! both validate against the same stale prior record.

pub mod endpoints;
pub mod leaderboard;
pub mod review_log;
pub mod validator;

use std::collections::HashMap;

use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use crate::config::ValidatorConfig;
use crate::game::types::PlayerState;
use leaderboard::LeaderboardRow;
use review_log::ReviewLog;
use validator::{RejectCategory, SaveRejection};

/// One persisted save, keyed by the opaque player identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct SaveRecord {
    pub player_id: String,
    pub display_name: String,
    pub project_name: Option<String>,
    pub project_url: Option<String>,
    pub state: PlayerState,
    /// Server-assigned, epoch milliseconds.
    pub last_saved_at: u64,
}

/// Incoming save payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct SaveRequest {
    pub player_id: String,
    pub display_name: String,
    pub project_name: Option<String>,
    pub project_url: Option<String>,
    pub player_state: PlayerState,
}

/// Result of a committed save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct SaveOutcome {
    pub accepted: bool,
    /// True when this save created the record, false when it updated one.
    pub created: bool,
}

/// Result of the administrative delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct DeleteOutcome {
    pub existed: bool,
}

/// In-memory record store plus the validation gate in front of it.
#[derive(Debug, Default)]
pub struct SaveStore {
    records: HashMap<String, SaveRecord>,
    review: ReviewLog,
    config: ValidatorConfig,
}

impl SaveStore {
    pub fn new() -> Self {
        SaveStore::default()
    }

    pub fn with_config(config: ValidatorConfig, review: ReviewLog) -> Self {
        SaveStore {
            records: HashMap::new(),
            review,
            config,
        }
    }

    /// Run the full validation pipeline and, on success, commit the save.
    /// On rejection nothing is written and the previously persisted record
    /// (if any) is untouched.
    pub fn apply_save(
        &mut self,
        request: SaveRequest,
        now_ms: u64,
    ) -> Result<SaveOutcome, SaveRejection> {
        let identity = validator::sanitize_identity(
            &request.display_name,
            request.project_name.as_deref(),
            request.project_url.as_deref(),
            &self.config,
        );

        let outcome = self.validate(&request, identity.project_url.as_deref(), now_ms);
        if let Err(rejection) = outcome {
            log::warn!(
                "rejected save for {:?}: {} ({:?})",
                request.player_id,
                rejection,
                rejection.category()
            );
            if rejection.category() == RejectCategory::Suspicious {
                // Heuristic thresholds can false-positive; keep the numbers
                // around for human review instead of discarding them.
                self.review.append(
                    &request.player_id,
                    rejection.category(),
                    rejection.to_string(),
                    request.player_state.money,
                    request.player_state.lifetime_earned,
                    request.player_state.total_clicks,
                    now_ms,
                );
            }
            return Err(rejection);
        }

        let mut state = request.player_state;
        if state.best_combo > self.config.best_combo_cap {
            state.best_combo = self.config.best_combo_cap;
        }
        let created = !self.records.contains_key(&request.player_id);
        let record = SaveRecord {
            player_id: request.player_id.clone(),
            display_name: identity.display_name,
            project_name: identity.project_name,
            project_url: identity.project_url,
            state,
            last_saved_at: now_ms,
        };
        self.records.insert(request.player_id, record);
        Ok(SaveOutcome {
            accepted: true,
            created,
        })
    }

    fn validate(
        &self,
        request: &SaveRequest,
        sanitized_url: Option<&str>,
        now_ms: u64,
    ) -> Result<(), SaveRejection> {
        if request.player_id.trim().is_empty() {
            return Err(SaveRejection::MissingPlayerId);
        }
        if let Some(url) = sanitized_url {
            validator::validate_project_url(url)?;
        }
        validator::validate_state(&request.player_state, &self.config)?;
        if let Some(prior) = self.records.get(&request.player_id) {
            validator::validate_click_rate(&request.player_state, prior, now_ms, &self.config)?;
        }
        Ok(())
    }

    /// A missing record is a new player, not an error.
    pub fn load(&self, player_id: &str) -> Option<&SaveRecord> {
        self.records.get(player_id)
    }

    /// Administrative/test path.
    pub fn delete(&mut self, player_id: &str) -> bool {
        self.records.remove(player_id).is_some()
    }

    pub fn leaderboard(&self, limit: Option<usize>) -> Vec<LeaderboardRow> {
        leaderboard::rank_records(self.records.values(), limit)
    }

    pub fn review_entries(&self) -> Vec<review_log::ReviewEntry> {
        self.review.entries()
    }

    /// Flush and close the review log's background writer.
    pub fn shutdown(&self) {
        self.review.shutdown();
    }
}
