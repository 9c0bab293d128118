//! Defensive and spendable resource pools
//!
//! Guard absorbs damage before Vitality; Power Points and Spell Points are
//! spend pools. These are plain records — all arithmetic over them lives in
//! `rules_core`.

use serde::{Deserialize, Serialize};

/// A bonus or penalty applied to the Guard maximum by an external effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardMaxModifier {
    /// Signed adjustment to the maximum
    pub value: i32,
}

/// Guard (GA) - the absorbing shield layer depleted before Vitality
///
/// Invariants: `0 <= current <= effective_max()`, `temporary >= 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardPoints {
    pub current: i32,
    pub max: i32,
    /// Temporary shield consumed before `current` when taking damage
    pub temporary: i32,
    /// Adjustments to the maximum from external effects
    #[serde(default)]
    pub max_modifiers: Vec<GuardMaxModifier>,
}

impl GuardPoints {
    /// Create a full guard pool with the given maximum
    pub fn new(max: i32) -> Self {
        GuardPoints {
            current: max,
            max,
            temporary: 0,
            max_modifiers: Vec::new(),
        }
    }

    /// Maximum including all modifiers
    pub fn effective_max(&self) -> i32 {
        self.max + self.max_modifiers.iter().map(|m| m.value).sum::<i32>()
    }

    /// Whether both the current pool and the temporary layer are empty
    pub fn is_empty(&self) -> bool {
        self.current <= 0 && self.temporary <= 0
    }
}

/// Vitality (PV) - the character's true health beneath Guard
///
/// Invariant: `0 <= current <= max`. The maximum is always derived from the
/// Guard maximum by the progression rules; no other code path writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalityPoints {
    pub current: i32,
    pub max: i32,
}

impl VitalityPoints {
    /// Create a full vitality pool with the given maximum
    pub fn new(max: i32) -> Self {
        VitalityPoints { current: max, max }
    }

    /// Vitality missing from the maximum
    pub fn missing(&self) -> i32 {
        (self.max - self.current).max(0)
    }
}

/// Power Points (PP) - spendable resource for character abilities
///
/// Mirrors the Guard invariants minus the modifier list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerPoints {
    pub current: i32,
    pub max: i32,
    /// Temporary points consumed before `current` when spending
    pub temporary: i32,
}

impl PowerPoints {
    /// Create a full power pool with the given maximum
    pub fn new(max: i32) -> Self {
        PowerPoints {
            current: max,
            max,
            temporary: 0,
        }
    }

    /// Points available to spend right now
    pub fn available(&self) -> i32 {
        self.current + self.temporary
    }
}

/// Spell Points (PF) - secondary spend pool for spellcasting
///
/// Its maximum always mirrors the Power Point maximum; the level-up commit
/// keeps the mirror in sync and nothing else writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellPoints {
    pub current: i32,
    pub max: i32,
}

impl SpellPoints {
    /// Create a full spell pool with the given maximum
    pub fn new(max: i32) -> Self {
        SpellPoints { current: max, max }
    }
}
