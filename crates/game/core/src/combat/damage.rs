//! Damage formulas.

use crate::env::{RngOracle, StrikeProfile};

/// Rolls a player strike: `base + attack_bonus + U[-variance, variance]`.
///
/// The result may be negative; callers floor it at zero when applying it.
pub fn roll_strike(profile: &StrikeProfile, attack_bonus: i32, rng: &mut impl RngOracle) -> i32 {
    let spread = rng.range(-profile.variance, profile.variance);
    profile.base_damage + attack_bonus + spread
}

/// Damage actually removed from the target's health.
pub fn applied_damage(damage: i32) -> i32 {
    damage.max(0)
}

/// Current health as a percentage of base health.
pub fn health_percent(current: i32, base: i32) -> f64 {
    if base <= 0 {
        return 0.0;
    }
    f64::from(current) / f64::from(base) * 100.0
}
