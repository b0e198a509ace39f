//! Experience curve and level-up rules.
//!
//! Leaving level `L` costs `L × per_level` experience. The threshold is
//! re-evaluated after every level gained, using the new level, so a single
//! large award can climb several levels while each step gets more expensive.
//!
//! Starting from level 1 with no experience, reaching level `N` takes a
//! cumulative `per_level × (1 + 2 + … + (N − 1)) = per_level × N × (N − 1) / 2`
//! experience (`50 · N · (N − 1)` with the default of 100).

/// Skill points granted per level gained.
pub const SKILL_POINTS_PER_LEVEL: u32 = 1;

/// Result of adding experience to a (level, experience) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceGain {
    /// Experience awarded.
    pub amount: u64,
    /// Levels climbed by this award.
    pub levels_gained: u32,
    /// Level after the award.
    pub level: u32,
    /// Experience carried into the current level after the award.
    pub experience: u64,
}

impl ExperienceGain {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }

    /// Skill points earned by this award.
    pub fn skill_points(&self) -> u32 {
        self.levels_gained * SKILL_POINTS_PER_LEVEL
    }
}

/// Experience required to leave `level`.
pub fn level_threshold(level: u32, per_level: u64) -> u64 {
    u64::from(level).saturating_mul(per_level)
}

/// Cumulative experience needed to reach `level` from level 1 with no experience.
pub fn cumulative_experience(level: u32, per_level: u64) -> u64 {
    let level = u64::from(level.max(1));
    per_level.saturating_mul(level * (level - 1) / 2)
}

/// Adds `amount` to `experience` and climbs levels while the threshold is met.
pub fn apply_experience(level: u32, experience: u64, amount: u64, per_level: u64) -> ExperienceGain {
    let mut level = level.max(1);
    let mut experience = experience.saturating_add(amount);
    let mut levels_gained = 0;

    // A zero threshold would never drain experience.
    if per_level > 0 {
        while experience >= level_threshold(level, per_level) {
            // Stop at the last representable level; the rest stays as experience.
            let Some(next) = level.checked_add(1) else {
                break;
            };
            experience -= level_threshold(level, per_level);
            level = next;
            levels_gained += 1;
        }
    }

    ExperienceGain {
        amount,
        levels_gained,
        level,
        experience,
    }
}
