/// Reference template an encounter's enemy is spawned from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    /// Health at the start of every encounter.
    pub health: i32,
    /// Attack names in listed order; policies rely on the first and last entries.
    pub attacks: Vec<String>,
    pub ai: AiPolicy,
}

impl EnemyTemplate {
    pub fn new<I, S>(name: impl Into<String>, health: i32, attacks: I, ai: AiPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            health,
            attacks: attacks.into_iter().map(Into::into).collect(),
            ai,
        }
    }
}

/// Enemy decision strategy.
///
/// Stored in data files as a lowercase tag (`"aggressive"`, `"cautious"`).
/// Tags that match no strategy are kept verbatim and fall back to uniform
/// random attacks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum AiPolicy {
    /// Random attacks while healthy, the first-listed attack when low.
    Aggressive,
    /// Random attacks while healthy; when low, holds back half of the time
    /// and otherwise uses the last-listed attack.
    Cautious,
    /// Unrecognized tag.
    Unrecognized(String),
}

impl AiPolicy {
    pub const AGGRESSIVE_TAG: &'static str = "aggressive";
    pub const CAUTIOUS_TAG: &'static str = "cautious";

    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case(Self::AGGRESSIVE_TAG) {
            AiPolicy::Aggressive
        } else if tag.eq_ignore_ascii_case(Self::CAUTIOUS_TAG) {
            AiPolicy::Cautious
        } else {
            AiPolicy::Unrecognized(tag.to_string())
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            AiPolicy::Aggressive => Self::AGGRESSIVE_TAG,
            AiPolicy::Cautious => Self::CAUTIOUS_TAG,
            AiPolicy::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for AiPolicy {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<AiPolicy> for String {
    fn from(policy: AiPolicy) -> Self {
        policy.tag().to_string()
    }
}

impl core::fmt::Display for AiPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}
