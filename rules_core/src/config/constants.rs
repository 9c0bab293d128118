//! Game constants configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::ConfigError;

/// Global game constants instance
static GAME_CONSTANTS: OnceLock<GameConstants> = OnceLock::new();

/// Initialize the global game constants from a TOML file
///
/// Must be called once at startup before any rules calculations.
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = GameConstants::load_from_path(path)?;
    GAME_CONSTANTS
        .set(constants)
        .map_err(|_| ConfigError::ValidationError("GameConstants already initialized".to_string()))
}

/// Initialize the global game constants with default values
///
/// Useful for tests or when no config file is available.
pub fn init_constants_default() -> Result<(), ConfigError> {
    GAME_CONSTANTS
        .set(GameConstants::default())
        .map_err(|_| ConfigError::ValidationError("GameConstants already initialized".to_string()))
}

/// Get a reference to the global game constants
///
/// Panics if constants have not been initialized via `init_constants()` or `init_constants_default()`.
pub fn constants() -> &'static GameConstants {
    GAME_CONSTANTS
        .get()
        .expect("GameConstants not initialized - call init_constants() or init_constants_default() first")
}

/// Check if constants have been initialized
pub fn constants_initialized() -> bool {
    GAME_CONSTANTS.get().is_some()
}

/// Ensure constants are initialized with defaults (idempotent, useful for tests)
///
/// If constants are already initialized, this does nothing.
/// If not initialized, initializes with default values.
pub fn ensure_constants_initialized() {
    GAME_CONSTANTS.get_or_init(GameConstants::default);
}

/// Tunable game constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub recovery: RecoveryConstants,
    #[serde(default)]
    pub dying: DyingConstants,
    #[serde(default)]
    pub derivation: DerivationConstants,
    #[serde(default)]
    pub experience: ExperienceConstants,
}

impl Default for GameConstants {
    fn default() -> Self {
        GameConstants {
            recovery: RecoveryConstants::default(),
            dying: DyingConstants::default(),
            derivation: DerivationConstants::default(),
            experience: ExperienceConstants::default(),
        }
    }
}

impl GameConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let constants: GameConstants = toml::from_str(&content)?;
        Ok(constants)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConstants {
    /// Recovery units needed to restore one Vitality point
    #[serde(default = "default_pv_recovery_cost")]
    pub pv_recovery_cost: i32,
}

impl Default for RecoveryConstants {
    fn default() -> Self {
        RecoveryConstants {
            pv_recovery_cost: 5,
        }
    }
}

fn default_pv_recovery_cost() -> i32 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DyingConstants {
    /// Base rounds a character survives at zero Vitality; the relevant
    /// attribute extends this per character
    #[serde(default = "default_base_rounds")]
    pub base_rounds: u32,
}

impl Default for DyingConstants {
    fn default() -> Self {
        DyingConstants { base_rounds: 3 }
    }
}

fn default_base_rounds() -> u32 {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivationConstants {
    /// Vitality maximum = Guard maximum / this divisor (floored)
    #[serde(default = "default_vitality_divisor")]
    pub vitality_divisor: i32,
    /// Guard maximum divisor while Vitality is at zero (floored)
    #[serde(default = "default_wounded_guard_divisor")]
    pub wounded_guard_divisor: i32,
}

impl Default for DerivationConstants {
    fn default() -> Self {
        DerivationConstants {
            vitality_divisor: 3,
            wounded_guard_divisor: 2,
        }
    }
}

fn default_vitality_divisor() -> i32 {
    3
}
fn default_wounded_guard_divisor() -> i32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceConstants {
    /// XP required per character level: to_next = level * xp_per_level
    #[serde(default = "default_xp_per_level")]
    pub xp_per_level: u32,
}

impl Default for ExperienceConstants {
    fn default() -> Self {
        ExperienceConstants { xp_per_level: 100 }
    }
}

fn default_xp_per_level() -> u32 {
    100
}

impl ExperienceConstants {
    /// XP needed to advance from the given character level to the next
    pub fn xp_to_next(&self, level: u32) -> u32 {
        level.max(1) * self.xp_per_level
    }
}
