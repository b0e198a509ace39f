//! Versioned persistence record for a character.
//!
//! The record is a flat key/value shape holding every persisted field.
//! Derived stats are deliberately absent: unknown keys in a stored blob are
//! ignored on deserialization and the stats are recomputed on restore.

use std::collections::BTreeMap;

use crate::env::{ContentTables, SkillKind};

use super::character::Character;
use super::error::RecordError;
use super::inventory::Inventory;
use super::skills::SkillLevels;

/// Current save record format version.
pub const CHARACTER_RECORD_VERSION: u32 = 1;

/// Flat save record of a [`Character`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterRecord {
    pub version: u32,
    pub name: String,
    pub health: i32,
    pub is_werewolf: bool,
    pub inventory: Vec<String>,
    /// Skill name → level.
    pub skills: BTreeMap<String, u8>,
    pub skill_points: u32,
    pub level: u32,
    pub experience: u64,
    pub moral_alignment: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub forced_transform: bool,
    pub location: String,
}

impl Character {
    /// Snapshot of every persisted field.
    pub fn to_record(&self) -> CharacterRecord {
        CharacterRecord {
            version: CHARACTER_RECORD_VERSION,
            name: self.name.clone(),
            health: self.health,
            is_werewolf: self.is_werewolf,
            inventory: self.inventory.items().to_vec(),
            skills: self
                .skills
                .iter()
                .map(|(skill, level)| (skill.to_string(), level))
                .collect(),
            skill_points: self.skill_points,
            level: self.level,
            experience: self.experience,
            moral_alignment: self.moral_alignment,
            forced_transform: self.forced_transform,
            location: self.location.clone(),
        }
    }

    /// Restores a character and recomputes its derived stats.
    ///
    /// Skills of the table missing from the record start at 0; stored levels
    /// above a skill's max level are clamped to it.
    pub fn from_record(
        record: CharacterRecord,
        tables: &ContentTables,
    ) -> Result<Self, RecordError> {
        if record.version != CHARACTER_RECORD_VERSION {
            return Err(RecordError::UnsupportedVersion {
                found: record.version,
                expected: CHARACTER_RECORD_VERSION,
            });
        }
        if record.level == 0 {
            return Err(RecordError::InvalidLevel(record.level));
        }

        let mut skills = SkillLevels::for_tables(tables);
        for (name, level) in &record.skills {
            let skill: SkillKind = name
                .parse()
                .map_err(|_| RecordError::UnknownSkill(name.clone()))?;
            let level = match tables.skill(skill) {
                Some(definition) => (*level).min(definition.max_level),
                None => *level,
            };
            skills.set(skill, level);
        }

        let mut character = Character::new(record.name, tables);
        character.health = record.health;
        character.is_werewolf = record.is_werewolf;
        character.inventory = Inventory::from(record.inventory);
        character.skills = skills;
        character.skill_points = record.skill_points;
        character.level = record.level;
        character.experience = record.experience;
        character.moral_alignment = record.moral_alignment;
        character.forced_transform = record.forced_transform;
        character.location = record.location;
        character.recompute_derived_stats();

        Ok(character)
    }
}
