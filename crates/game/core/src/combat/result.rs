//! Combat outcomes and per-round reports.

use crate::event::GameEvent;

/// Terminal state of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    PlayerVictory,
    PlayerDefeated,
    /// The heavy strike's health cost brought the player to zero.
    PlayerSelfInflictedDefeat,
}

impl CombatOutcome {
    /// Both defeat outcomes end the session.
    pub fn is_game_over(&self) -> bool {
        !self.is_victory()
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, CombatOutcome::PlayerVictory)
    }
}

/// Everything one resolved round produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    pub events: Vec<GameEvent>,
    /// Set when this round ended the encounter.
    pub outcome: Option<CombatOutcome>,
}

impl RoundReport {
    pub(crate) fn new(round: u32) -> Self {
        Self {
            round,
            events: Vec::new(),
            outcome: None,
        }
    }

    pub(crate) fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn finish(mut self, outcome: CombatOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }
}
