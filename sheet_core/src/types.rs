use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Core character attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Agility,
    Body,
    Influence,
    Mind,
    Essence,
    Instinct,
}

impl Attribute {
    /// Get all attribute variants
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Agility,
            Attribute::Body,
            Attribute::Influence,
            Attribute::Mind,
            Attribute::Essence,
            Attribute::Instinct,
        ]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Agility => write!(f, "Agility"),
            Attribute::Body => write!(f, "Body"),
            Attribute::Influence => write!(f, "Influence"),
            Attribute::Mind => write!(f, "Mind"),
            Attribute::Essence => write!(f, "Essence"),
            Attribute::Instinct => write!(f, "Instinct"),
        }
    }
}

/// One value per attribute; each value is non-negative. The engine enforces
/// no upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    pub agility: i32,
    pub body: i32,
    pub influence: i32,
    pub mind: i32,
    pub essence: i32,
    pub instinct: i32,
}

impl AttributeSet {
    /// Get the value of a single attribute
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Agility => self.agility,
            Attribute::Body => self.body,
            Attribute::Influence => self.influence,
            Attribute::Mind => self.mind,
            Attribute::Essence => self.essence,
            Attribute::Instinct => self.instinct,
        }
    }

    /// Set the value of a single attribute
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        let slot = match attribute {
            Attribute::Agility => &mut self.agility,
            Attribute::Body => &mut self.body,
            Attribute::Influence => &mut self.influence,
            Attribute::Mind => &mut self.mind,
            Attribute::Essence => &mut self.essence,
            Attribute::Instinct => &mut self.instinct,
        };
        *slot = value.max(0);
    }
}

/// Die sizes on the fixed ordinal step scale, ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieSize {
    D2,
    D3,
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieSize {
    /// All die sizes in ascending scale order
    pub fn all() -> &'static [DieSize] {
        &[
            DieSize::D2,
            DieSize::D3,
            DieSize::D4,
            DieSize::D6,
            DieSize::D8,
            DieSize::D10,
            DieSize::D12,
            DieSize::D20,
            DieSize::D100,
        ]
    }

    /// Number of sides on this die
    pub fn sides(&self) -> u32 {
        match self {
            DieSize::D2 => 2,
            DieSize::D3 => 3,
            DieSize::D4 => 4,
            DieSize::D6 => 6,
            DieSize::D8 => 8,
            DieSize::D10 => 10,
            DieSize::D12 => 12,
            DieSize::D20 => 20,
            DieSize::D100 => 100,
        }
    }
}

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieSize::D2 => write!(f, "d2"),
            DieSize::D3 => write!(f, "d3"),
            DieSize::D4 => write!(f, "d4"),
            DieSize::D6 => write!(f, "d6"),
            DieSize::D8 => write!(f, "d8"),
            DieSize::D10 => write!(f, "d10"),
            DieSize::D12 => write!(f, "d12"),
            DieSize::D20 => write!(f, "d20"),
            DieSize::D100 => write!(f, "d100"),
        }
    }
}

impl FromStr for DieSize {
    type Err = UnknownDieSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d2" => Ok(DieSize::D2),
            "d3" => Ok(DieSize::D3),
            "d4" => Ok(DieSize::D4),
            "d6" => Ok(DieSize::D6),
            "d8" => Ok(DieSize::D8),
            "d10" => Ok(DieSize::D10),
            "d12" => Ok(DieSize::D12),
            "d20" => Ok(DieSize::D20),
            "d100" => Ok(DieSize::D100),
            _ => Err(UnknownDieSize(s.to_string())),
        }
    }
}

/// Archetype progression tracks; each maps to a guard-gain attribute and a
/// power-point base in the rules configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeId {
    Warrior,
    Hunter,
    Shadow,
    Mystic,
    Sage,
    Herald,
}

impl ArchetypeId {
    /// Get all archetype variants
    pub fn all() -> &'static [ArchetypeId] {
        &[
            ArchetypeId::Warrior,
            ArchetypeId::Hunter,
            ArchetypeId::Shadow,
            ArchetypeId::Mystic,
            ArchetypeId::Sage,
            ArchetypeId::Herald,
        ]
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchetypeId::Warrior => write!(f, "Warrior"),
            ArchetypeId::Hunter => write!(f, "Hunter"),
            ArchetypeId::Shadow => write!(f, "Shadow"),
            ArchetypeId::Mystic => write!(f, "Mystic"),
            ArchetypeId::Sage => write!(f, "Sage"),
            ArchetypeId::Herald => write!(f, "Herald"),
        }
    }
}

/// Combat status label, always derived from the pool values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombatState {
    Normal,
    DirectWound,
    CriticalWound,
    Dying,
    Unconscious,
    Dead,
}

impl fmt::Display for CombatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatState::Normal => write!(f, "normal"),
            CombatState::DirectWound => write!(f, "direct-wound"),
            CombatState::CriticalWound => write!(f, "critical-wound"),
            CombatState::Dying => write!(f, "dying"),
            CombatState::Unconscious => write!(f, "unconscious"),
            CombatState::Dead => write!(f, "dead"),
        }
    }
}

/// Four-tier proficiency scale gating access to certain bonuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    #[default]
    Untrained,
    Basic,
    Expert,
    Master,
}

impl ProficiencyLevel {
    /// Flat bonus granted by this tier
    pub fn bonus(&self) -> i32 {
        match self {
            ProficiencyLevel::Untrained => 0,
            ProficiencyLevel::Basic => 2,
            ProficiencyLevel::Expert => 4,
            ProficiencyLevel::Master => 6,
        }
    }
}

/// Whether a step-die resource still has fuel left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceDieState {
    Active,
    Depleted,
}

/// A named consumable tracked as a step die (torch fuel, rations, ad-hoc
/// gauges added by the player)
///
/// Invariants: `current_die` is `None` exactly when `state` is `Depleted`,
/// and `min_die <= current_die <= max_die` in scale order otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDie {
    /// Unique identifier for this resource instance
    pub id: String,
    /// Display name
    pub name: String,
    /// Die currently rolled for the resource, `None` once depleted
    pub current_die: Option<DieSize>,
    /// Floor of the step scale for this resource
    pub min_die: DieSize,
    /// Ceiling of the step scale for this resource
    pub max_die: DieSize,
    /// Active or depleted
    pub state: ResourceDieState,
    /// Whether the player defined this resource themselves
    pub is_custom: bool,
}

impl ResourceDie {
    /// Create a new resource at its maximum die
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        min_die: DieSize,
        max_die: DieSize,
    ) -> Self {
        ResourceDie {
            id: id.into(),
            name: name.into(),
            current_die: Some(max_die),
            min_die,
            max_die,
            state: ResourceDieState::Active,
            is_custom: false,
        }
    }

    /// Whether the resource has run out
    pub fn is_depleted(&self) -> bool {
        self.state == ResourceDieState::Depleted
    }
}

/// Source category recorded on an ability gained during progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilitySource {
    Power,
    Competence,
    ArchetypeFeature,
}

/// Category of a special gain chosen by the player during a level-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainCategory {
    Power,
    Talent,
    Competence,
    Feature,
}

impl GainCategory {
    /// Map the chosen category onto the ability-record source tag
    pub fn ability_source(&self) -> AbilitySource {
        match self {
            GainCategory::Power | GainCategory::Talent => AbilitySource::Power,
            GainCategory::Competence => AbilitySource::Competence,
            GainCategory::Feature => AbilitySource::ArchetypeFeature,
        }
    }
}

/// Error for die-size text that is not on the scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDieSize(pub String);

impl fmt::Display for UnknownDieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown die size '{}'", self.0)
    }
}

impl std::error::Error for UnknownDieSize {}
