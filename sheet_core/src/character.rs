//! The character aggregate and its progression records
//!
//! The host application owns the long-lived aggregate; the rules engine only
//! receives a snapshot (or a caller-owned working copy) of these records and
//! returns updated values.

use crate::pools::{GuardPoints, PowerPoints, SpellPoints, VitalityPoints};
use crate::types::{
    AbilitySource, ArchetypeId, AttributeSet, GainCategory, ResourceDie,
};
use serde::{Deserialize, Serialize};

/// Levels invested in one archetype progression track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: ArchetypeId,
    /// Levels invested, always >= 1 for a held entry
    pub level: u32,
    /// Names of archetype features unlocked so far
    #[serde(default)]
    pub features: Vec<String>,
}

impl Archetype {
    /// Create a level-1 entry for an archetype
    pub fn new(id: ArchetypeId) -> Self {
        Archetype {
            id,
            level: 1,
            features: Vec::new(),
        }
    }
}

/// A class picked at character level 3 or later; class content is host data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub name: String,
    /// Levels invested, always >= 1 for a held entry
    pub level: u32,
}

/// Experience points toward the next character level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub current: u32,
    pub to_next_level: u32,
}

/// An ability gained during progression, tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub name: String,
    pub source: AbilitySource,
    /// Character level at which the ability was gained
    pub gained_at_level: u32,
}

/// A gain the player chose while confirming a level-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialGain {
    pub name: String,
    pub category: GainCategory,
}

/// One line of the character's progression history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionLogEntry {
    /// Character level reached by this level-up
    pub character_level: u32,
    pub archetype: ArchetypeId,
    /// Archetype level reached by this level-up
    pub archetype_level: u32,
    pub guard_gained: i32,
    pub power_gained: i32,
    /// Human-readable summary for the host to display
    pub summary: String,
}

/// Round counter for a character bleeding out at zero Vitality
///
/// The engine keeps the counter and its maximum consistent; which label the
/// host stores on each change (dying vs unconscious) is host policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DyingCounter {
    pub is_dying: bool,
    pub current_rounds: u32,
    pub max_rounds: u32,
}

/// The full character aggregate owned by the host application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Character level, always >= 1
    pub level: u32,
    pub attributes: AttributeSet,
    pub guard: GuardPoints,
    pub vitality: VitalityPoints,
    pub power: PowerPoints,
    pub spell: SpellPoints,
    pub experience: Experience,
    #[serde(default)]
    pub archetypes: Vec<Archetype>,
    #[serde(default)]
    pub classes: Vec<CharacterClass>,
    #[serde(default)]
    pub resource_dice: Vec<ResourceDie>,
    #[serde(default)]
    pub abilities: Vec<AbilityRecord>,
    #[serde(default)]
    pub progression_log: Vec<ProgressionLogEntry>,
    #[serde(default)]
    pub dying: DyingCounter,
}

impl Character {
    /// Create a fresh level-1 character with empty pools and no archetype
    pub fn new(name: impl Into<String>) -> Self {
        Character {
            name: name.into(),
            level: 1,
            attributes: AttributeSet::default(),
            guard: GuardPoints::default(),
            vitality: VitalityPoints::default(),
            power: PowerPoints::default(),
            spell: SpellPoints::default(),
            experience: Experience::default(),
            archetypes: Vec::new(),
            classes: Vec::new(),
            resource_dice: Vec::new(),
            abilities: Vec::new(),
            progression_log: Vec::new(),
            dying: DyingCounter::default(),
        }
    }

    /// Get the held entry for an archetype, if any
    pub fn archetype(&self, id: ArchetypeId) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }

    /// Get the mutable held entry for an archetype, if any
    pub fn archetype_mut(&mut self, id: ArchetypeId) -> Option<&mut Archetype> {
        self.archetypes.iter_mut().find(|a| a.id == id)
    }

    /// Get a resource die by id, if present
    pub fn resource_die(&self, id: &str) -> Option<&ResourceDie> {
        self.resource_dice.iter().find(|r| r.id == id)
    }
}
