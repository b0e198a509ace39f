/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (name, description)
/// - `kind` enum holds type-specific data (weapon damage, consumable healing)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Weapon carried by the player.
    Weapon { damage: u16 },

    /// Consumed on use, restoring health.
    Consumable { heal: u16 },

    /// Story item.
    Quest,

    /// Trade currency.
    Currency,

    /// Crafting material.
    Material,
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Weapon { .. } => ItemCategory::Weapon,
            ItemKind::Consumable { .. } => ItemCategory::Consumable,
            ItemKind::Quest => ItemCategory::Quest,
            ItemKind::Currency => ItemCategory::Currency,
            ItemKind::Material => ItemCategory::Material,
        }
    }

    /// Health restored when used, for consumables only.
    pub fn heal_amount(&self) -> Option<u16> {
        match self {
            ItemKind::Consumable { heal } => Some(*heal),
            _ => None,
        }
    }
}

/// Coarse item type tag.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Consumable,
    Quest,
    Currency,
    Material,
}
