//! Progression engine: badge evaluation and awarding.
//!
//! The engine is invoked once per completed experiment and opportunistically
//! on profile view. Each invocation fetches fresh snapshots, runs the pure
//! eligibility computation, and appends grants for newly satisfied badges.
//! No error escapes to the caller: a failed fetch degrades to "nothing
//! earned this round" and the next natural trigger retries.

use chrono::{NaiveDate, Utc};
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::attempt::ExperimentAttempt;
use crate::badge::BadgeDefinition;
use crate::criteria::EvalContext;
use crate::error::Result;
use crate::progress::UserProfile;
use crate::store::{InsertOutcome, ProgressionStore};
use crate::streak::compute_streak;

/// Pure eligibility computation: which definitions does this user newly
/// satisfy?
///
/// Already-earned definitions are skipped entirely (the at-most-once
/// guarantee starts here; the store's uniqueness constraint finishes it).
/// A definition is satisfied if any of its criterion blocks evaluates true.
/// `just_completed` is the attempt that triggered the evaluation, if any;
/// completion-style blocks key off it.
pub fn evaluate_badges(
    current_xp: u32,
    definitions: &[BadgeDefinition],
    earned_ids: &HashSet<Uuid>,
    attempts: &[ExperimentAttempt],
    just_completed: Option<&ExperimentAttempt>,
) -> Vec<BadgeDefinition> {
    let cx = EvalContext {
        current_xp,
        attempts,
        just_completed,
    };
    definitions
        .iter()
        .filter(|def| !earned_ids.contains(&def.id))
        .filter(|def| def.criteria.blocks().iter().any(|c| c.is_satisfied(&cx)))
        .cloned()
        .collect()
}

struct Snapshot {
    profile: UserProfile,
    definitions: Vec<BadgeDefinition>,
    earned_ids: HashSet<Uuid>,
    attempts: Vec<ExperimentAttempt>,
}

/// Evaluation and awarding over a [`ProgressionStore`].
pub struct ProgressionEngine<S> {
    store: S,
}

impl<S: ProgressionStore> ProgressionEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate all badges for a user and record new grants.
    ///
    /// Returns the definitions this call actually granted, in catalog
    /// order; the caller's notification layer shows exactly these. Grants
    /// another evaluation won in a race come back as duplicates and are
    /// excluded. An individual grant failure is logged and skipped; a fetch
    /// failure aborts the whole round with an empty result.
    pub async fn award_new_badges(
        &self,
        user_id: Uuid,
        just_completed: Option<&ExperimentAttempt>,
    ) -> Vec<BadgeDefinition> {
        let snapshot = match self.fetch_snapshot(user_id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(%user_id, error = %e, "badge evaluation aborted, fetch failed");
                return Vec::new();
            }
        };

        let candidates = evaluate_badges(
            snapshot.profile.xp_points,
            &snapshot.definitions,
            &snapshot.earned_ids,
            &snapshot.attempts,
            just_completed,
        );

        let trigger = just_completed.map(|a| a.experiment_name.as_str());
        let mut newly_earned = Vec::with_capacity(candidates.len());
        for definition in candidates {
            match self
                .store
                .insert_earned_badge(user_id, definition.id, Utc::now())
                .await
            {
                Ok(InsertOutcome::Inserted) => {
                    info!(%user_id, badge = %definition.name, ?trigger, "badge earned");
                    newly_earned.push(definition);
                }
                Ok(InsertOutcome::Duplicate) => {
                    debug!(%user_id, badge = %definition.name, "grant already recorded, skipping");
                }
                Err(e) => {
                    warn!(%user_id, badge = %definition.name, error = %e, "failed to record grant, skipping");
                }
            }
        }
        newly_earned
    }

    /// Apply an XP delta for a user and persist the recomputed level.
    ///
    /// Returns the updated profile, or `None` if the store round-trip
    /// failed (logged; the XP is simply not applied this round).
    pub async fn grant_xp(&self, user_id: Uuid, delta: u32) -> Option<UserProfile> {
        let result: Result<UserProfile> = async {
            let mut profile = self.store.profile(user_id).await?;
            profile.add_xp(delta);
            self.store.set_profile(user_id, &profile).await?;
            Ok(profile)
        }
        .await;

        match result {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(%user_id, delta, error = %e, "xp grant aborted, store failed");
                None
            }
        }
    }

    /// Current daily streak for a user. A fetch failure reads as 0.
    pub async fn streak_for(&self, user_id: Uuid, today: NaiveDate) -> u32 {
        match self.store.attempts(user_id).await {
            Ok(attempts) => compute_streak(&attempts, today),
            Err(e) => {
                warn!(%user_id, error = %e, "streak computation aborted, fetch failed");
                0
            }
        }
    }

    async fn fetch_snapshot(&self, user_id: Uuid) -> Result<Snapshot> {
        let profile = self.store.profile(user_id).await?;
        let definitions = self.store.badge_definitions().await?;
        let earned_ids = self.store.earned_badge_ids(user_id).await?;
        let attempts = self.store.attempts(user_id).await?;
        Ok(Snapshot {
            profile,
            definitions,
            earned_ids,
            attempts,
        })
    }
}
