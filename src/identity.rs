//! Client-local identity store.
//!
//! The save API keys records by an opaque player identifier that must stay
//! stable across sessions. This store persists that identifier (and the
//! last-known display identity) in a small JSON file on the player's
//! device, creating the identifier exactly once.

use std::fs;
use std::path::PathBuf;

use rand::RngCore;
use rocket::serde::{Deserialize, Serialize};

/// What the device remembers between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct StoredIdentity {
    pub player_id: String,
    pub display_name: Option<String>,
    pub project_name: Option<String>,
    pub project_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    pub fn open(path: PathBuf) -> Self {
        IdentityStore { path }
    }

    /// Load the stored identity, generating and persisting a fresh player
    /// id on first use. The id never changes afterwards.
    pub fn load_or_create<R: RngCore>(
        &self,
        rng: &mut R,
        now_ms: u64,
    ) -> Result<StoredIdentity, String> {
        if let Ok(raw) = fs::read_to_string(&self.path) {
            if let Ok(identity) = serde_json::from_str::<StoredIdentity>(&raw) {
                if !identity.player_id.is_empty() {
                    return Ok(identity);
                }
            }
            // Unreadable or empty file: fall through and re-create.
        }
        let identity = StoredIdentity {
            player_id: format!("user_{:08x}{:08x}_{}", rng.next_u32(), rng.next_u32(), now_ms),
            display_name: None,
            project_name: None,
            project_url: None,
        };
        self.store(&identity)?;
        Ok(identity)
    }

    /// Persist the identity (id plus display fields) back to disk.
    pub fn store(&self, identity: &StoredIdentity) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let raw = serde_json::to_string_pretty(identity).map_err(|e| e.to_string())?;
        fs::write(&self.path, raw).map_err(|e| e.to_string())
    }
}
