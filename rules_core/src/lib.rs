//! rules_core - Core resource and progression rules for tabletop characters
//!
//! This library provides:
//! - Pool arithmetic: damage, healing and spending over Guard, Vitality and
//!   Power Points, with absorption order and clamping
//! - Step-die tracking: degrade/restore/consume named consumable resources
//! - Combat state classification from the pool values
//! - Archetype progression: previewing and committing level-ups
//! - Whole-character progression validation
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rules_core::prelude::*;
//! use sheet_core::{ArchetypeId, Character};
//!
//! rules_core::config::ensure_constants_initialized();
//! rules_core::config::ensure_archetype_registry_initialized();
//!
//! // Take a hit: temporary Guard soaks first, then Guard, then Vitality.
//! let (guard, vitality, breakdown) =
//!     apply_damage(&character.guard, &character.vitality, 7);
//! if breakdown.vitality_emptied {
//!     character.dying = begin_dying(character.attributes.body);
//! }
//!
//! // Level up inside an archetype after the host confirms the preview.
//! let preview = preview_level_up(&character, ArchetypeId::Warrior);
//! if preview.remaining_xp >= 0 {
//!     apply_level_up(&mut character, ArchetypeId::Warrior, &[]);
//! }
//! ```
//!
//! Every function is synchronous and pure; `apply_level_up` mutates only the
//! caller-owned working copy it is given. The host owns the aggregate and is
//! responsible for persisting results atomically.

pub mod combat;
pub mod config;
pub mod dice;
pub mod pool;
pub mod prelude;
pub mod progression;
pub mod validate;

// Core API - what most users need
pub use combat::{begin_dying, determine_combat_state, end_dying, tick_dying, DyingOutcome};
pub use dice::{process_resource_use, step_down, step_up, ResourceUseResult, SCALE};
pub use pool::{apply_damage, apply_power_delta, heal_guard, heal_vitality, DamageBreakdown};
pub use progression::{apply_level_up, preview_level_up, LevelRewards, LevelUpPreview};
pub use validate::{validate_classes, validate_progression, ClassReport, ProgressionReport};

// Configuration
pub use config::{init_constants, init_constants_default, ConfigError};

// Re-export commonly needed sheet_core types
pub use sheet_core::{ArchetypeId, Character, CombatState, DieSize, ResourceDie};
