//! XP and level computation.

use serde::{Deserialize, Serialize};

/// XP required per level.
pub const LEVEL_XP_UNIT: u32 = 500;

/// Level for a given XP total: one level per [`LEVEL_XP_UNIT`] XP,
/// starting at level 1. Pure and total; monotone in `xp_points`.
pub fn compute_level(xp_points: u32) -> u32 {
    xp_points / LEVEL_XP_UNIT + 1
}

/// XP and derived level for one user.
///
/// The engine computes `level`; persisting it back to the profile store
/// is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub xp_points: u32,
    pub level: u32,
}

impl UserProfile {
    pub fn with_xp(xp_points: u32) -> Self {
        Self {
            xp_points,
            level: compute_level(xp_points),
        }
    }

    /// Add XP and recompute the level. Saturates instead of wrapping.
    pub fn add_xp(&mut self, delta: u32) {
        self.xp_points = self.xp_points.saturating_add(delta);
        self.level = compute_level(self.xp_points);
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::with_xp(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(compute_level(0), 1);
        assert_eq!(compute_level(499), 1);
        assert_eq!(compute_level(500), 2);
        assert_eq!(compute_level(999), 2);
        assert_eq!(compute_level(1000), 3);
    }

    #[test]
    fn test_profile_with_xp_derives_level() {
        let profile = UserProfile::with_xp(1200);
        assert_eq!(profile.level, 3);
        assert_eq!(UserProfile::default().level, 1);
    }

    #[test]
    fn test_add_xp_recomputes_level() {
        let mut profile = UserProfile::with_xp(480);
        profile.add_xp(40);
        assert_eq!(profile.xp_points, 520);
        assert_eq!(profile.level, 2);
    }

    #[test]
    fn test_add_xp_saturates() {
        let mut profile = UserProfile::with_xp(u32::MAX - 10);
        profile.add_xp(100);
        assert_eq!(profile.xp_points, u32::MAX);
    }

    #[test]
    fn test_profile_serde_camel_case() {
        let json = serde_json::to_string(&UserProfile::with_xp(750)).unwrap();
        assert!(json.contains("\"xpPoints\":750"));
        assert!(json.contains("\"level\":2"));
    }

    proptest! {
        #[test]
        fn prop_level_monotonic(xp1 in 0u32..2_000_000, delta in 0u32..2_000_000) {
            let xp2 = xp1.saturating_add(delta);
            prop_assert!(compute_level(xp2) >= compute_level(xp1));
        }

        #[test]
        fn prop_level_within_unit(xp in 0u32..2_000_000) {
            let level = compute_level(xp);
            prop_assert_eq!(level, xp / LEVEL_XP_UNIT + 1);
            prop_assert!(level >= 1);
        }
    }
}
