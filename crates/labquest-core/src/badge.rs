//! Badge catalog and grant records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::criteria::CriteriaSpec;

/// Display-only rarity classification of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// A named achievement with a machine-evaluable eligibility rule.
///
/// Catalog rows are static reference data created by administrators; the
/// engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDefinition {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: BadgeTier,
    /// Informational display threshold; does not gate awarding
    pub xp_requirement: u32,
    /// Eligibility rule; a malformed blob parses to the empty spec and the
    /// badge is simply never satisfied
    #[serde(default, deserialize_with = "lenient_criteria")]
    pub criteria: CriteriaSpec,
}

/// A record that a specific user satisfied a specific badge definition.
/// Unique per (user, badge); created exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedBadge {
    pub user_id: Uuid,
    pub badge_id: Uuid,
    pub earned_at: DateTime<Utc>,
}

/// Deserialize criteria tolerantly: a blob that is not a recognizable
/// criteria object becomes the empty spec rather than failing the whole
/// catalog row.
fn lenient_criteria<'de, D>(deserializer: D) -> Result<CriteriaSpec, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
