//! JSON-file store.
//!
//! A directory of flat JSON files, one per record family. This is the
//! store the CLI and local development use; hosted deployments implement
//! [`ProgressionStore`] against their own backend. Missing or empty files
//! load as empty collections so a fresh data directory just works.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::attempt::ExperimentAttempt;
use crate::badge::{BadgeDefinition, EarnedBadge};
use crate::error::{Result, StoreError};
use crate::progress::UserProfile;
use crate::store::{InsertOutcome, ProgressionStore};

const ATTEMPTS_FILE: &str = "attempts.json";
const BADGES_FILE: &str = "badges.json";
const EARNED_FILE: &str = "earned.json";
const PROFILES_FILE: &str = "profiles.json";

/// File-backed store rooted at a data directory.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open the store at the platform data directory, creating it if needed.
    pub fn open() -> Result<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| StoreError::DataDir("no platform data directory".to_string()))?
            .join("labquest");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open the store at a custom directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load_vec<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(self.dir.join(file), content)?;
        Ok(())
    }

    fn load_profiles(&self) -> Result<HashMap<Uuid, UserProfile>> {
        let path = self.dir.join(PROFILES_FILE);
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl ProgressionStore for JsonStore {
    async fn attempts(&self, user_id: Uuid) -> Result<Vec<ExperimentAttempt>> {
        let all: Vec<ExperimentAttempt> = self.load_vec(ATTEMPTS_FILE)?;
        Ok(all.into_iter().filter(|a| a.user_id == user_id).collect())
    }

    async fn badge_definitions(&self) -> Result<Vec<BadgeDefinition>> {
        self.load_vec(BADGES_FILE)
    }

    async fn earned_badge_ids(&self, user_id: Uuid) -> Result<HashSet<Uuid>> {
        let all: Vec<EarnedBadge> = self.load_vec(EARNED_FILE)?;
        Ok(all
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| e.badge_id)
            .collect())
    }

    async fn insert_earned_badge(
        &self,
        user_id: Uuid,
        badge_id: Uuid,
        earned_at: DateTime<Utc>,
    ) -> Result<InsertOutcome> {
        let mut all: Vec<EarnedBadge> = self.load_vec(EARNED_FILE)?;
        if all
            .iter()
            .any(|e| e.user_id == user_id && e.badge_id == badge_id)
        {
            return Ok(InsertOutcome::Duplicate);
        }
        all.push(EarnedBadge {
            user_id,
            badge_id,
            earned_at,
        });
        self.save(EARNED_FILE, &all)?;
        Ok(InsertOutcome::Inserted)
    }

    async fn profile(&self, user_id: Uuid) -> Result<UserProfile> {
        let profiles = self.load_profiles()?;
        Ok(profiles.get(&user_id).copied().unwrap_or_default())
    }

    async fn set_profile(&self, user_id: Uuid, profile: &UserProfile) -> Result<()> {
        let mut profiles = self.load_profiles()?;
        profiles.insert(user_id, *profile);
        self.save(PROFILES_FILE, &profiles)
    }
}
