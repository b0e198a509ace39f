use std::collections::BTreeMap;

use crate::env::{ContentTables, SkillKind};

/// Current level of every skill a character knows.
///
/// Skills absent from the map are at level 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillLevels {
    levels: BTreeMap<SkillKind, u8>,
}

impl SkillLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every skill of the tables at level 0.
    pub fn for_tables(tables: &ContentTables) -> Self {
        Self {
            levels: tables.skills().iter().map(|skill| (skill.kind, 0)).collect(),
        }
    }

    pub fn level(&self, kind: SkillKind) -> u8 {
        self.levels.get(&kind).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, kind: SkillKind, level: u8) {
        self.levels.insert(kind, level);
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillKind, u8)> + '_ {
        self.levels.iter().map(|(kind, level)| (*kind, *level))
    }
}
