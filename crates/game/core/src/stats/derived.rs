//! Derived stats computed from skill levels.
//!
//! These are NOT stored - always recomputed from skills whenever a skill level
//! changes and right after a character is restored from a save record.

use crate::env::SkillKind;
use crate::state::SkillLevels;

/// Combat and travel modifiers granted by skills.
///
/// Pure function of [`SkillLevels`]; see [`DerivedStats::compute`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DerivedStats {
    /// Added to every player strike.
    pub attack_bonus: i32,

    /// Health restored after each won battle.
    pub heal_bonus: i32,

    /// Percentage points added to sneaking chances.
    pub stealth_bonus: i32,

    /// Turns removed from forced transformations.
    pub forced_transform_reduction: i32,
}

impl DerivedStats {
    pub const ATTACK_PER_STRENGTH_LEVEL: i32 = 5;
    pub const HEAL_PER_HEALING_LEVEL: i32 = 5;
    pub const STEALTH_PER_LEVEL: i32 = 10;

    /// Formulas:
    /// - attack bonus = 5 × Enhanced Strength
    /// - heal bonus = 5 × Healing Factor
    /// - stealth bonus = 10 × Stealth
    /// - forced-transform reduction = Beast Control
    pub fn compute(skills: &SkillLevels) -> Self {
        let level = |kind| i32::from(skills.level(kind));

        Self {
            attack_bonus: Self::ATTACK_PER_STRENGTH_LEVEL * level(SkillKind::EnhancedStrength),
            heal_bonus: Self::HEAL_PER_HEALING_LEVEL * level(SkillKind::HealingFactor),
            stealth_bonus: Self::STEALTH_PER_LEVEL * level(SkillKind::Stealth),
            forced_transform_reduction: level(SkillKind::BeastControl),
        }
    }
}
