//! sheet_core - Character sheet data model for tabletop game entities
//!
//! This library provides the plain data records a character sheet is made of:
//! - Attributes and the six-attribute `AttributeSet`
//! - Resource pools: Guard, Vitality, Power Points, Spell Points
//! - Step-die consumable resources and the `DieSize` scale
//! - Archetype and class progression records
//! - The `Character` aggregate the host application persists
//!
//! All game arithmetic over these records lives in `rules_core`; this crate
//! deliberately contains no rules beyond structural invariant helpers.

pub mod character;
pub mod pools;
pub mod types;

// Core aggregate and progression records
pub use character::{
    AbilityRecord, Archetype, Character, CharacterClass, DyingCounter, Experience,
    ProgressionLogEntry, SpecialGain,
};

// Resource pools
pub use pools::{GuardMaxModifier, GuardPoints, PowerPoints, SpellPoints, VitalityPoints};

// Enumerations and dice
pub use types::{
    AbilitySource, ArchetypeId, Attribute, AttributeSet, CombatState, DieSize, GainCategory,
    ProficiencyLevel, ResourceDie, ResourceDieState, UnknownDieSize,
};
