//! Player action selectors.

use super::errors::CombatError;

/// What the player does in one combat round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    /// Medium damage, no cost.
    #[strum(to_string = "Claw Swipe")]
    PrimaryStrike,
    /// High damage, paid for with health before it lands.
    #[strum(to_string = "Bite")]
    HeavyStrike,
    /// Chance to avoid the enemy's attack this round.
    #[strum(to_string = "Evade")]
    Evade,
    /// Unrecognized input; the round is forfeited.
    #[strum(to_string = "Hesitate")]
    Invalid,
}

impl PlayerAction {
    /// Actions offered in the round menu, in menu order.
    pub const MENU: [PlayerAction; 3] = [
        PlayerAction::PrimaryStrike,
        PlayerAction::HeavyStrike,
        PlayerAction::Evade,
    ];

    /// Maps raw menu input (`"1"`, `"2"`, `"3"` or an action name) to an action.
    pub fn from_choice(input: &str) -> Result<Self, CombatError> {
        let choice = input.trim();
        let action = match choice {
            "1" => PlayerAction::PrimaryStrike,
            "2" => PlayerAction::HeavyStrike,
            "3" => PlayerAction::Evade,
            _ => Self::MENU
                .into_iter()
                .find(|action| {
                    action.to_string().eq_ignore_ascii_case(choice)
                        || action.alias().eq_ignore_ascii_case(choice)
                })
                .ok_or_else(|| CombatError::InvalidActionSelector(choice.to_string()))?,
        };
        Ok(action)
    }

    /// Menu hint shown next to the action name.
    pub fn hint(&self) -> &'static str {
        match self {
            PlayerAction::PrimaryStrike => "medium damage",
            PlayerAction::HeavyStrike => "high damage, costs health",
            PlayerAction::Evade => "chance to avoid the next attack",
            PlayerAction::Invalid => "lose your turn",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            PlayerAction::PrimaryStrike => "primary",
            PlayerAction::HeavyStrike => "heavy",
            PlayerAction::Evade => "dodge",
            PlayerAction::Invalid => "",
        }
    }
}
