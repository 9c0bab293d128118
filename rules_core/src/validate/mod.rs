//! Whole-character progression consistency checks
//!
//! Validators return structured reports with descriptive strings rather than
//! erroring; the host decides whether to block an action on a non-empty
//! error list.

use serde::{Deserialize, Serialize};
use sheet_core::{Archetype, Character, CharacterClass};
use std::collections::HashSet;

/// Character level at which classes become available
pub const CLASS_UNLOCK_LEVEL: u32 = 3;

/// Maximum number of distinct classes a character may hold
pub const MAX_CLASSES: usize = 3;

/// Archetype levels must sum to the character level
///
/// The single exemption is a brand-new character: level 1 with no archetype
/// chosen yet.
pub fn archetype_levels_sum_valid(archetypes: &[Archetype], character_level: u32) -> bool {
    if character_level == 1 && archetypes.is_empty() {
        return true;
    }
    archetypes.iter().map(|a| a.level).sum::<u32>() == character_level
}

/// Every held archetype entry must have at least one level
pub fn archetype_levels_positive(archetypes: &[Archetype]) -> bool {
    archetypes.iter().all(|a| a.level >= 1)
}

/// Report from validating the class list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate the class assignments against the character level
pub fn validate_classes(classes: &[CharacterClass], character_level: u32) -> ClassReport {
    let mut errors = Vec::new();

    if !classes.is_empty() && character_level < CLASS_UNLOCK_LEVEL {
        errors.push(format!(
            "Classes are unavailable below character level {CLASS_UNLOCK_LEVEL} (character is level {character_level})"
        ));
    }

    let distinct: HashSet<&str> = classes.iter().map(|c| c.name.as_str()).collect();
    if distinct.len() > MAX_CLASSES {
        errors.push(format!(
            "A character may hold at most {MAX_CLASSES} distinct classes (found {})",
            distinct.len()
        ));
    }

    let level_sum: u32 = classes.iter().map(|c| c.level).sum();
    if level_sum > character_level {
        errors.push(format!(
            "Class levels sum to {level_sum}, exceeding character level {character_level}"
        ));
    }

    ClassReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Report from validating the whole character's progression
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionReport {
    pub valid: bool,
    pub errors: Vec<String>,
    /// Informational only; never blocks an action
    pub warnings: Vec<String>,
}

/// Validate archetype sums, class assignments and history consistency
pub fn validate_progression(character: &Character) -> ProgressionReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !archetype_levels_sum_valid(&character.archetypes, character.level) {
        let sum: u32 = character.archetypes.iter().map(|a| a.level).sum();
        errors.push(format!(
            "Archetype levels sum to {sum} but the character is level {}",
            character.level
        ));
    }

    if !archetype_levels_positive(&character.archetypes) {
        errors.push("Every held archetype must have at least one level".to_string());
    }

    let class_report = validate_classes(&character.classes, character.level);
    errors.extend(class_report.errors);

    for entry in &character.progression_log {
        if entry.character_level > character.level {
            errors.push(format!(
                "Progression history references level {} beyond the character's level {}",
                entry.character_level, character.level
            ));
        }
    }

    if character.level >= CLASS_UNLOCK_LEVEL && character.classes.is_empty() {
        warnings.push(format!(
            "Character is level {} and has not chosen a class",
            character.level
        ));
    }
    if character.level >= 1 && character.archetypes.is_empty() {
        warnings.push("Character has not chosen an archetype".to_string());
    }

    ProgressionReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}
