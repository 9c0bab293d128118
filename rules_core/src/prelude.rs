//! Prelude module for convenient imports
//!
//! ```rust
//! use rules_core::prelude::*;
//! ```

// Pool arithmetic
pub use crate::pool::{
    adjust_guard_on_vitality_crossing, apply_damage, apply_power_delta, apply_spell_delta,
    effective_guard_max, heal_guard, heal_vitality, DamageBreakdown, VitalityRecovery,
};

// Step-die tracking
pub use crate::dice::{
    apply_use_result, process_resource_use, restore_resource, step_down, step_up,
    step_up_resource, use_resource_with_rng, ResourceUseResult, SCALE,
};

// Combat state
pub use crate::combat::{begin_dying, determine_combat_state, end_dying, tick_dying, DyingOutcome};

// Progression
pub use crate::progression::{
    apply_level_up, archetype_level, guard_gain, power_point_gain, preview_level_up,
    rewards_at_level, LevelRewards, LevelUpPreview,
};

// Validation
pub use crate::validate::{
    archetype_levels_positive, archetype_levels_sum_valid, validate_classes,
    validate_progression, ClassReport, ProgressionReport,
};

// Config
pub use crate::config::{init_constants, init_constants_default, ConfigError};

// Re-exports from sheet_core
pub use sheet_core::{
    ArchetypeId, Attribute, Character, CombatState, DieSize, ResourceDie, SpecialGain,
};
