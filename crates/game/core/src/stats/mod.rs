//! Character stat rules.
//!
//! ```text
//! [ Skill levels (stored) ] ──► [ Derived stats (recomputed) ]
//! [ Level + experience (stored) ] ◄── progression curve
//! ```
//!
//! Only skill levels, level and experience are persisted; derived stats are
//! always recomputed from skills.

pub mod derived;
pub mod progression;

pub use derived::DerivedStats;
pub use progression::{
    ExperienceGain, SKILL_POINTS_PER_LEVEL, apply_experience, cumulative_experience,
    level_threshold,
};
