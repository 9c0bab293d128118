//! Archetype progression - previewing and committing level-ups
//!
//! Leveling one step inside an archetype raises the Guard maximum by the
//! archetype's mapped attribute, the Power Point maximum by the archetype's
//! base plus Essence, and rederives the Vitality maximum from the new Guard
//! maximum. `preview_level_up` computes everything without touching the
//! character; `apply_level_up` commits the same numbers onto a caller-owned
//! working copy.

use crate::config::{archetype_registry, constants};
use serde::{Deserialize, Serialize};
use sheet_core::{
    AbilityRecord, Archetype, ArchetypeId, Attribute, AttributeSet, Character,
    ProgressionLogEntry, SpecialGain,
};

/// Reward categories that trigger at a given archetype level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRewards {
    pub feature: bool,
    pub power_or_talent: bool,
    pub competence: bool,
    pub attribute_increase: bool,
    pub skill_degree: bool,
    pub defense_step: bool,
}

impl LevelRewards {
    /// Whether any reward category triggers at this level
    pub fn any(&self) -> bool {
        self.feature
            || self.power_or_talent
            || self.competence
            || self.attribute_increase
            || self.skill_degree
            || self.defense_step
    }
}

/// Reward categories unlocked at an archetype level
///
/// The tables are fixed for levels 1-15; levels beyond 15 return no flags
/// and are left to host extension rules.
pub fn rewards_at_level(archetype_level: u32) -> LevelRewards {
    LevelRewards {
        feature: matches!(archetype_level, 1 | 5 | 10 | 15),
        power_or_talent: matches!(archetype_level, 2 | 4 | 6 | 8 | 9 | 11 | 13 | 14),
        competence: matches!(archetype_level, 3 | 7 | 12),
        attribute_increase: matches!(archetype_level, 4 | 8 | 13),
        skill_degree: matches!(archetype_level, 5 | 9 | 14),
        defense_step: matches!(archetype_level, 5 | 10 | 15),
    }
}

/// Levels the character holds in an archetype, zero when absent
pub fn archetype_level(character: &Character, id: ArchetypeId) -> u32 {
    character.archetype(id).map(|a| a.level).unwrap_or(0)
}

/// Guard-maximum gain for one level in an archetype
pub fn guard_gain(id: ArchetypeId, attributes: &AttributeSet) -> i32 {
    let config = archetype_registry().get(id);
    attributes.get(config.guard_attribute)
}

/// Power-Point-maximum gain for one level in an archetype
pub fn power_point_gain(id: ArchetypeId, essence: i32) -> i32 {
    let config = archetype_registry().get(id);
    config.power_point_base + essence
}

/// Everything one level-up would change, computed without mutating anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpPreview {
    pub new_character_level: u32,
    pub new_archetype_level: u32,
    pub guard_gained: i32,
    pub power_gained: i32,
    pub new_guard_max: i32,
    pub new_power_max: i32,
    /// Vitality maximum is always derived from the Guard maximum
    pub new_vitality_max: i32,
    pub rewards: LevelRewards,
    /// Classes unlock exactly when the character reaches level 3
    pub unlocks_classes: bool,
    /// XP left after paying for the level; negative means the character
    /// cannot afford it yet and the host must not commit
    pub remaining_xp: i64,
}

/// Preview one level-up in the chosen archetype
pub fn preview_level_up(character: &Character, id: ArchetypeId) -> LevelUpPreview {
    let new_character_level = character.level + 1;
    let new_archetype_level = archetype_level(character, id) + 1;

    let guard_gained = guard_gain(id, &character.attributes);
    let power_gained = power_point_gain(id, character.attributes.get(Attribute::Essence));

    let new_guard_max = character.guard.max + guard_gained;
    let new_power_max = character.power.max + power_gained;
    let new_vitality_max = new_guard_max / constants().derivation.vitality_divisor.max(1);

    LevelUpPreview {
        new_character_level,
        new_archetype_level,
        guard_gained,
        power_gained,
        new_guard_max,
        new_power_max,
        new_vitality_max,
        rewards: rewards_at_level(new_archetype_level),
        unlocks_classes: new_character_level == 3,
        remaining_xp: i64::from(character.experience.current)
            - i64::from(character.experience.to_next_level),
    }
}

/// Commit one level-up onto a caller-owned working copy
///
/// Precondition (host-enforced): `experience.current >=
/// experience.to_next_level`. The host should gate the call on a
/// non-negative `remaining_xp` from the preview; the commit itself does not
/// re-check it.
///
/// Raises Guard and Power current alongside their maxima, rederives the
/// Vitality maximum (current is left where it was - leveling does not heal),
/// mirrors the Spell Point maximum to the new Power maximum, carries the XP
/// remainder, and appends the chosen gains and one progression-log entry.
pub fn apply_level_up(character: &mut Character, id: ArchetypeId, special_gains: &[SpecialGain]) {
    let preview = preview_level_up(character, id);

    character.level = preview.new_character_level;

    match character.archetype_mut(id) {
        Some(archetype) => archetype.level += 1,
        None => character.archetypes.push(Archetype::new(id)),
    }

    character.guard.current += preview.guard_gained;
    character.guard.max = preview.new_guard_max;
    character.power.current += preview.power_gained;
    character.power.max = preview.new_power_max;
    character.vitality.max = preview.new_vitality_max;
    character.vitality.current = character.vitality.current.min(character.vitality.max);

    // PF maximum always mirrors the PP maximum.
    character.spell.max = preview.new_power_max;
    character.spell.current = character.spell.current.min(character.spell.max);

    character.experience.current = character
        .experience
        .current
        .saturating_sub(character.experience.to_next_level);
    character.experience.to_next_level = constants()
        .experience
        .xp_to_next(preview.new_character_level);

    for gain in special_gains {
        character.abilities.push(AbilityRecord {
            name: gain.name.clone(),
            source: gain.category.ability_source(),
            gained_at_level: preview.new_character_level,
        });
        if gain.category == sheet_core::GainCategory::Feature {
            if let Some(archetype) = character.archetype_mut(id) {
                archetype.features.push(gain.name.clone());
            }
        }
    }

    character.progression_log.push(ProgressionLogEntry {
        character_level: preview.new_character_level,
        archetype: id,
        archetype_level: preview.new_archetype_level,
        guard_gained: preview.guard_gained,
        power_gained: preview.power_gained,
        summary: format!(
            "{} {} (character level {}): +{} GA, +{} PP",
            id,
            preview.new_archetype_level,
            preview.new_character_level,
            preview.guard_gained,
            preview.power_gained,
        ),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ensure_archetype_registry_initialized, ensure_constants_initialized};
    use sheet_core::{
        AbilitySource, Experience, GainCategory, GuardPoints, PowerPoints, SpellPoints,
        VitalityPoints,
    };

    fn setup() {
        ensure_constants_initialized();
        ensure_archetype_registry_initialized();
    }

    fn fighter() -> Character {
        let mut character = Character::new("Aldric");
        character.attributes.body = 3;
        character.attributes.essence = 1;
        character.guard = GuardPoints::new(9);
        character.vitality = VitalityPoints::new(3);
        character.power = PowerPoints::new(3);
        character.spell = SpellPoints::new(3);
        character.experience = Experience {
            current: 150,
            to_next_level: 100,
        };
        character.archetypes.push(Archetype::new(ArchetypeId::Warrior));
        character
    }

    #[test]
    fn test_reward_tables_levels_1_to_15() {
        setup();
        let feature_levels = [1, 5, 10, 15];
        let power_levels = [2, 4, 6, 8, 9, 11, 13, 14];
        let competence_levels = [3, 7, 12];
        let attribute_levels = [4, 8, 13];
        let skill_levels = [5, 9, 14];
        let defense_levels = [5, 10, 15];

        for level in 1..=15u32 {
            let rewards = rewards_at_level(level);
            assert_eq!(rewards.feature, feature_levels.contains(&level));
            assert_eq!(rewards.power_or_talent, power_levels.contains(&level));
            assert_eq!(rewards.competence, competence_levels.contains(&level));
            assert_eq!(rewards.attribute_increase, attribute_levels.contains(&level));
            assert_eq!(rewards.skill_degree, skill_levels.contains(&level));
            assert_eq!(rewards.defense_step, defense_levels.contains(&level));
        }
    }

    #[test]
    fn test_rewards_beyond_table_are_empty() {
        setup();
        assert!(!rewards_at_level(16).any());
        assert!(!rewards_at_level(40).any());
    }

    #[test]
    fn test_archetype_level_defaults_to_zero() {
        setup();
        let character = Character::new("Aldric");
        assert_eq!(archetype_level(&character, ArchetypeId::Warrior), 0);
    }

    #[test]
    fn test_fighter_gains_body_and_base_plus_essence() {
        setup();
        let character = fighter();
        assert_eq!(guard_gain(ArchetypeId::Warrior, &character.attributes), 3);
        assert_eq!(power_point_gain(ArchetypeId::Warrior, 1), 3);
    }

    #[test]
    fn test_preview_fighter_level_two() {
        setup();
        let character = fighter();
        let preview = preview_level_up(&character, ArchetypeId::Warrior);

        assert_eq!(preview.new_character_level, 2);
        assert_eq!(preview.new_archetype_level, 2);
        assert_eq!(preview.guard_gained, 3);
        assert_eq!(preview.power_gained, 3);
        assert_eq!(preview.new_guard_max, 12);
        assert_eq!(preview.new_vitality_max, 4);
        assert!(preview.rewards.power_or_talent);
        assert!(!preview.rewards.feature);
        assert!(!preview.unlocks_classes);
        assert_eq!(preview.remaining_xp, 50);
    }

    #[test]
    fn test_preview_reports_class_unlock_at_level_three() {
        setup();
        let mut character = fighter();
        character.level = 2;
        if let Some(archetype) = character.archetype_mut(ArchetypeId::Warrior) {
            archetype.level = 2;
        }

        let preview = preview_level_up(&character, ArchetypeId::Warrior);
        assert!(preview.unlocks_classes);
    }

    #[test]
    fn test_preview_negative_remainder_is_reported_not_hidden() {
        setup();
        let mut character = fighter();
        character.experience = Experience {
            current: 40,
            to_next_level: 100,
        };

        let preview = preview_level_up(&character, ArchetypeId::Warrior);
        assert_eq!(preview.remaining_xp, -60);
    }

    #[test]
    fn test_apply_matches_preview_exactly() {
        setup();
        let mut character = fighter();
        let preview = preview_level_up(&character, ArchetypeId::Warrior);

        apply_level_up(&mut character, ArchetypeId::Warrior, &[]);

        assert_eq!(character.level, preview.new_character_level);
        assert_eq!(character.guard.max, preview.new_guard_max);
        assert_eq!(character.power.max, preview.new_power_max);
        assert_eq!(character.vitality.max, preview.new_vitality_max);
        assert_eq!(character.spell.max, preview.new_power_max);
        assert_eq!(
            archetype_level(&character, ArchetypeId::Warrior),
            preview.new_archetype_level
        );
    }

    #[test]
    fn test_apply_raises_current_with_max_but_not_vitality() {
        setup();
        let mut character = fighter();
        character.guard.current = 4;
        character.vitality.current = 1;

        apply_level_up(&mut character, ArchetypeId::Warrior, &[]);

        assert_eq!(character.guard.current, 7);
        assert_eq!(character.power.current, 6);
        // Leveling does not heal missing Vitality.
        assert_eq!(character.vitality.current, 1);
    }

    #[test]
    fn test_apply_creates_archetype_entry_when_absent() {
        setup();
        let mut character = fighter();
        apply_level_up(&mut character, ArchetypeId::Mystic, &[]);

        assert_eq!(archetype_level(&character, ArchetypeId::Mystic), 1);
        // The existing entry is untouched.
        assert_eq!(archetype_level(&character, ArchetypeId::Warrior), 1);
    }

    #[test]
    fn test_apply_carries_xp_remainder_and_recomputes_curve() {
        setup();
        let mut character = fighter();
        apply_level_up(&mut character, ArchetypeId::Warrior, &[]);

        assert_eq!(character.experience.current, 50);
        // Default curve: level * 100 for the new level.
        assert_eq!(character.experience.to_next_level, 200);
    }

    #[test]
    fn test_apply_records_gains_and_log() {
        setup();
        let mut character = fighter();
        let gains = [
            SpecialGain {
                name: "Searing Bolt".to_string(),
                category: GainCategory::Power,
            },
            SpecialGain {
                name: "Fieldcraft".to_string(),
                category: GainCategory::Competence,
            },
            SpecialGain {
                name: "Stalwart".to_string(),
                category: GainCategory::Feature,
            },
        ];

        apply_level_up(&mut character, ArchetypeId::Warrior, &gains);

        assert_eq!(character.abilities.len(), 3);
        assert_eq!(character.abilities[0].source, AbilitySource::Power);
        assert_eq!(character.abilities[1].source, AbilitySource::Competence);
        assert_eq!(character.abilities[2].source, AbilitySource::ArchetypeFeature);
        assert!(character
            .abilities
            .iter()
            .all(|a| a.gained_at_level == 2));

        let warrior = character.archetype(ArchetypeId::Warrior).unwrap();
        assert_eq!(warrior.features, vec!["Stalwart".to_string()]);

        assert_eq!(character.progression_log.len(), 1);
        let entry = &character.progression_log[0];
        assert_eq!(entry.character_level, 2);
        assert_eq!(entry.guard_gained, 3);
        assert!(entry.summary.contains("Warrior"));
    }
}
