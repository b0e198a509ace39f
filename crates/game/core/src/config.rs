/// Game configuration constants and tunable parameters.
///
/// Loaded once at startup (see `game-content`'s `config.toml`) and passed to
/// the rules through [`crate::env::GameEnv`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Healing never raises health above this value.
    pub max_health: i32,

    /// Experience threshold multiplier: leaving level `L` costs `L * experience_per_level`.
    pub experience_per_level: u64,

    /// Health of a freshly created character.
    pub starting_health: i32,

    /// Location tag of a freshly created character.
    pub starting_location: String,

    /// Items handed to a new character, in inventory order.
    pub starting_inventory: Vec<String>,

    /// Enemy type guarding the forest path.
    pub quest_enemy: String,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALTH: i32 = 100;
    pub const DEFAULT_EXPERIENCE_PER_LEVEL: u64 = 100;
    pub const DEFAULT_LOCATION: &'static str = "V";
    pub const DEFAULT_QUEST_ENEMY: &'static str = "Alpha Wolf";
    pub const DEFAULT_STARTING_INVENTORY: [&'static str; 6] = [
        "Silver Dagger",
        "Healing Potion",
        "Sacred Herb",
        "Wolf Fang",
        "Enchanted Wood",
        "Gold",
    ];

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            experience_per_level: Self::DEFAULT_EXPERIENCE_PER_LEVEL,
            starting_health: Self::DEFAULT_MAX_HEALTH,
            starting_location: Self::DEFAULT_LOCATION.to_string(),
            starting_inventory: Self::DEFAULT_STARTING_INVENTORY
                .iter()
                .map(|item| item.to_string())
                .collect(),
            quest_enemy: Self::DEFAULT_QUEST_ENEMY.to_string(),
        }
    }

    pub fn with_starting_inventory<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.starting_inventory = items.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
