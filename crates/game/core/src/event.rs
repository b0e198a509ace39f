//! Observable outcomes of rule resolution.
//!
//! The combat engine reports everything that happens through [`GameEvent`]s
//! delivered to an [`EventSink`](crate::combat::EventSink). Rendering them is
//! left to the client.

use crate::combat::PlayerAction;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    EncounterStarted {
        enemy: String,
        health: i32,
    },
    /// Player strike landed (damage already floored at 0).
    PlayerStruck {
        action: PlayerAction,
        damage: i32,
    },
    /// Health paid for a heavy strike.
    HeavyStrikeRecoil {
        cost: i32,
        health: i32,
    },
    EvadeStance,
    TurnForfeited,
    EnemyDefeated {
        enemy: String,
    },
    ExperienceGained {
        amount: u64,
    },
    LeveledUp {
        level: u32,
        skill_points: u32,
    },
    VictoryHeal {
        amount: i32,
        health: i32,
    },
    /// Enemy chose not to attack this round.
    EnemyHeldBack {
        enemy: String,
    },
    EnemyAttacked {
        enemy: String,
        attack: String,
        damage: i32,
    },
    EvadeSucceeded,
    EvadeFailed,
    DamageTaken {
        damage: i32,
        health: i32,
    },
    PlayerDefeated,
    /// The heavy strike's recoil brought the player to zero health.
    PlayerSelfDefeated,
}

impl GameEvent {
    /// True for the events that end the session.
    pub fn is_defeat(&self) -> bool {
        matches!(self, GameEvent::PlayerDefeated | GameEvent::PlayerSelfDefeated)
    }
}
