//! Rules configuration - tunable constants and the archetype registry

mod archetypes;
mod constants;

pub use archetypes::{
    archetype_registry, archetype_registry_initialized, ensure_archetype_registry_initialized,
    init_archetype_registry, init_archetype_registry_default, parse_archetype_configs,
    ArchetypeConfig, ArchetypeRegistry,
};
pub use constants::{
    constants, constants_initialized, ensure_constants_initialized, init_constants,
    init_constants_default, DerivationConstants, DyingConstants, ExperienceConstants,
    GameConstants, RecoveryConstants,
};

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Error loading rules configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Load and deserialize a TOML file
pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Deserialize a TOML string
pub(crate) fn parse_toml<T: DeserializeOwned>(toml: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(toml)?)
}
