//! In-memory store.
//!
//! Backs unit and integration tests, and doubles as an embedded store for
//! callers that manage persistence elsewhere. Grant uniqueness is enforced
//! the same way a hosted backend would, so engine tests exercise the real
//! duplicate-handling path.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

use crate::attempt::ExperimentAttempt;
use crate::badge::{BadgeDefinition, EarnedBadge};
use crate::error::Result;
use crate::progress::UserProfile;
use crate::store::{InsertOutcome, ProgressionStore};

#[derive(Default)]
struct Inner {
    attempts: Vec<ExperimentAttempt>,
    definitions: Vec<BadgeDefinition>,
    earned: Vec<EarnedBadge>,
    profiles: HashMap<Uuid, UserProfile>,
}

/// Mutex-guarded in-memory record store.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an attempt record.
    pub fn push_attempt(&self, attempt: ExperimentAttempt) {
        self.inner.lock().unwrap().attempts.push(attempt);
    }

    /// Seed a catalog row.
    pub fn push_definition(&self, definition: BadgeDefinition) {
        self.inner.lock().unwrap().definitions.push(definition);
    }

    /// Seed a profile.
    pub fn seed_profile(&self, user_id: Uuid, profile: UserProfile) {
        self.inner.lock().unwrap().profiles.insert(user_id, profile);
    }

    /// All grants currently recorded, for assertions.
    pub fn earned_badges(&self) -> Vec<EarnedBadge> {
        self.inner.lock().unwrap().earned.clone()
    }
}

impl ProgressionStore for MemoryStore {
    async fn attempts(&self, user_id: Uuid) -> Result<Vec<ExperimentAttempt>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .attempts
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn badge_definitions(&self) -> Result<Vec<BadgeDefinition>> {
        Ok(self.inner.lock().unwrap().definitions.clone())
    }

    async fn earned_badge_ids(&self, user_id: Uuid) -> Result<HashSet<Uuid>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .earned
            .iter()
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
        let mut inner = self.inner.lock().unwrap();
        if inner
            .earned
            .iter()
            .any(|e| e.user_id == user_id && e.badge_id == badge_id)
        {
            return Ok(InsertOutcome::Duplicate);
        }
        inner.earned.push(EarnedBadge {
            user_id,
            badge_id,
            earned_at,
        });
        Ok(InsertOutcome::Inserted)
    }

    async fn profile(&self, user_id: Uuid) -> Result<UserProfile> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.profiles.get(&user_id).copied().unwrap_or_default())
    }

    async fn set_profile(&self, user_id: Uuid, profile: &UserProfile) -> Result<()> {
        self.inner.lock().unwrap().profiles.insert(user_id, *profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_insert_is_benign() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let badge = Uuid::new_v4();

        assert_eq!(
            store
                .insert_earned_badge(user, badge, Utc::now())
                .await
                .unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(
            store
                .insert_earned_badge(user, badge, Utc::now())
                .await
                .unwrap(),
            InsertOutcome::Duplicate
        );
        assert_eq!(store.earned_badges().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_profile_reads_fresh() {
        let store = MemoryStore::new();
        assert_eq!(
            store.profile(Uuid::new_v4()).await.unwrap(),
            UserProfile::default()
        );
    }
}
