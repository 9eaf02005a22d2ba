//! Store boundary for the progression engine.
//!
//! The engine reads attempts, the badge catalog, earned-badge ids and the
//! user profile, and appends earned-badge grants. At-most-once grant
//! semantics come from the store's uniqueness on (user, badge), not from
//! any in-process lock: a duplicate insert reports [`InsertOutcome::Duplicate`]
//! and is treated as a benign no-op.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

use crate::attempt::ExperimentAttempt;
use crate::badge::BadgeDefinition;
use crate::error::Result;
use crate::progress::UserProfile;

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

/// Result of appending an earned-badge grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The grant was recorded
    Inserted,
    /// A grant for this (user, badge) already existed; nothing changed
    Duplicate,
}

/// External record store consumed by the progression engine.
///
/// Implementations are snapshots-per-call: the engine fetches fresh data on
/// every evaluation and holds no state between invocations. Fetches are
/// awaited sequentially; no parallel fan-out is assumed.
pub trait ProgressionStore {
    /// Complete attempt history for a user, all statuses included.
    fn attempts(
        &self,
        user_id: Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<ExperimentAttempt>>> + Send;

    /// The full badge catalog.
    fn badge_definitions(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<BadgeDefinition>>> + Send;

    /// Ids of badges the user already holds.
    fn earned_badge_ids(
        &self,
        user_id: Uuid,
    ) -> impl std::future::Future<Output = Result<HashSet<Uuid>>> + Send;

    /// Append a grant; duplicates must report [`InsertOutcome::Duplicate`],
    /// never an error.
    fn insert_earned_badge(
        &self,
        user_id: Uuid,
        badge_id: Uuid,
        earned_at: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<InsertOutcome>> + Send;

    /// XP and level snapshot for a user. Unknown users read as a fresh
    /// zero-XP profile.
    fn profile(
        &self,
        user_id: Uuid,
    ) -> impl std::future::Future<Output = Result<UserProfile>> + Send;

    /// Persist the profile the caller applied (the engine computes levels
    /// but never writes them on its own).
    fn set_profile(
        &self,
        user_id: Uuid,
        profile: &UserProfile,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
