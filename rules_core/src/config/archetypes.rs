//! Archetype configuration loading with global registry support

use super::ConfigError;
use serde::{Deserialize, Serialize};
use sheet_core::{ArchetypeId, Attribute};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Global archetype registry instance
static ARCHETYPE_REGISTRY: OnceLock<ArchetypeRegistry> = OnceLock::new();

/// Per-level progression constants for one archetype
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeConfig {
    pub id: ArchetypeId,
    /// Attribute whose value is added to the Guard maximum each level
    pub guard_attribute: Attribute,
    /// Fixed base added to Essence for the Power Point gain each level
    pub power_point_base: i32,
}

/// Container for archetype configurations in a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypesConfig {
    pub archetypes: Vec<ArchetypeConfig>,
}

/// Registry mapping each archetype to its progression constants
///
/// Always holds an entry for every `ArchetypeId`; a loaded config file
/// overrides the built-in defaults per archetype.
#[derive(Debug, Clone)]
pub struct ArchetypeRegistry {
    configs: HashMap<ArchetypeId, ArchetypeConfig>,
}

impl Default for ArchetypeRegistry {
    fn default() -> Self {
        let mut configs = HashMap::new();
        for config in default_archetype_configs() {
            configs.insert(config.id, config);
        }
        ArchetypeRegistry { configs }
    }
}

impl ArchetypeRegistry {
    /// Create a registry with the built-in defaults
    pub fn new() -> Self {
        ArchetypeRegistry::default()
    }

    /// Override the entry for one archetype
    pub fn register(&mut self, config: ArchetypeConfig) {
        self.configs.insert(config.id, config);
    }

    /// Get the configuration for an archetype
    ///
    /// Total: the registry always holds every variant.
    pub fn get(&self, id: ArchetypeId) -> &ArchetypeConfig {
        self.configs
            .get(&id)
            .expect("registry is seeded with every ArchetypeId")
    }
}

/// Built-in per-archetype constants
fn default_archetype_configs() -> Vec<ArchetypeConfig> {
    vec![
        ArchetypeConfig {
            id: ArchetypeId::Warrior,
            guard_attribute: Attribute::Body,
            power_point_base: 2,
        },
        ArchetypeConfig {
            id: ArchetypeId::Hunter,
            guard_attribute: Attribute::Instinct,
            power_point_base: 3,
        },
        ArchetypeConfig {
            id: ArchetypeId::Shadow,
            guard_attribute: Attribute::Agility,
            power_point_base: 3,
        },
        ArchetypeConfig {
            id: ArchetypeId::Mystic,
            guard_attribute: Attribute::Essence,
            power_point_base: 6,
        },
        ArchetypeConfig {
            id: ArchetypeId::Sage,
            guard_attribute: Attribute::Mind,
            power_point_base: 5,
        },
        ArchetypeConfig {
            id: ArchetypeId::Herald,
            guard_attribute: Attribute::Influence,
            power_point_base: 4,
        },
    ]
}

/// Initialize the global archetype registry from a config file
pub fn init_archetype_registry(path: &Path) -> Result<(), ConfigError> {
    let registry = load_archetype_configs(path)?;
    ARCHETYPE_REGISTRY.set(registry).ok();
    Ok(())
}

/// Initialize the global archetype registry with the built-in defaults
pub fn init_archetype_registry_default() {
    ARCHETYPE_REGISTRY.get_or_init(ArchetypeRegistry::default);
}

/// Get a reference to the global archetype registry
/// Panics if not initialized - call init_archetype_registry first
pub fn archetype_registry() -> &'static ArchetypeRegistry {
    ARCHETYPE_REGISTRY
        .get()
        .expect("Archetype registry not initialized. Call init_archetype_registry() first.")
}

/// Check if the archetype registry has been initialized
pub fn archetype_registry_initialized() -> bool {
    ARCHETYPE_REGISTRY.get().is_some()
}

/// Ensure the archetype registry is initialized (for tests)
/// Uses the built-in defaults if not already initialized
pub fn ensure_archetype_registry_initialized() {
    ARCHETYPE_REGISTRY.get_or_init(ArchetypeRegistry::default);
}

/// Load archetype configurations from a TOML file (returns registry, doesn't set global)
pub fn load_archetype_configs(path: &Path) -> Result<ArchetypeRegistry, ConfigError> {
    let config: ArchetypesConfig = super::load_toml(path)?;

    let mut registry = ArchetypeRegistry::new();
    for archetype in config.archetypes {
        registry.register(archetype);
    }

    Ok(registry)
}

/// Parse archetype configurations from a TOML string (for testing)
pub fn parse_archetype_configs(toml: &str) -> Result<ArchetypeRegistry, ConfigError> {
    let config: ArchetypesConfig = super::parse_toml(toml)?;

    let mut registry = ArchetypeRegistry::new();
    for archetype in config.archetypes {
        registry.register(archetype);
    }

    Ok(registry)
}
