/// Skills a character can invest points into.
///
/// The set is closed: derived stats are computed from specific skills, so a
/// table can describe or omit a skill but never add a new one.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[strum(ascii_case_insensitive)]
pub enum SkillKind {
    /// Reduces forced transformations.
    #[strum(serialize = "Beast Control")]
    BeastControl,
    /// Adds attack damage.
    #[strum(serialize = "Enhanced Strength")]
    EnhancedStrength,
    /// Heals after each won battle.
    #[strum(serialize = "Healing Factor")]
    HealingFactor,
    /// Helps avoiding fights while travelling.
    #[strum(serialize = "Stealth")]
    Stealth,
}

impl TryFrom<String> for SkillKind {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SkillKind> for String {
    fn from(kind: SkillKind) -> Self {
        kind.to_string()
    }
}

/// Reference definition of a skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub kind: SkillKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub max_level: u8,
}

impl SkillDefinition {
    pub fn new(kind: SkillKind, max_level: u8) -> Self {
        Self {
            kind,
            description: String::new(),
            max_level,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        self.kind.as_ref()
    }
}
