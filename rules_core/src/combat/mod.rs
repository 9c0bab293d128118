//! Combat state classification and the dying round counter

use crate::config::constants;
use serde::{Deserialize, Serialize};
use sheet_core::{CombatState, DyingCounter};

/// Classify the combat status from the pool values
///
/// Status is Vitality-driven only: zero Vitality is a critical wound, missing
/// Vitality is a direct wound, full Vitality is normal. The Guard parameters
/// are accepted for symmetry with the pool model and never affect the label -
/// a fully depleted Guard over full Vitality is still `Normal`.
pub fn determine_combat_state(
    _ga_current: i32,
    _ga_max: i32,
    pv_current: i32,
    pv_max: i32,
) -> CombatState {
    if pv_current <= 0 {
        CombatState::CriticalWound
    } else if pv_current < pv_max {
        CombatState::DirectWound
    } else {
        CombatState::Normal
    }
}

/// What a dying-round tick concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DyingOutcome {
    /// The character is not dying; the tick did nothing
    NotDying,
    /// The counter advanced but has not reached its maximum
    StillDying,
    /// The counter reached its maximum; the character is dead
    Dead,
}

/// Start the dying counter for a character whose Vitality hit zero
///
/// `resistance_attribute` is the value of whichever attribute the host rules
/// let the character cling to life with; it extends the base round count.
/// Which label the host stores alongside (dying vs unconscious) is host
/// policy.
pub fn begin_dying(resistance_attribute: i32) -> DyingCounter {
    let base = constants().dying.base_rounds;
    DyingCounter {
        is_dying: true,
        current_rounds: 0,
        max_rounds: base + resistance_attribute.max(0) as u32,
    }
}

/// Advance the dying counter by one round
pub fn tick_dying(counter: &DyingCounter) -> (DyingCounter, DyingOutcome) {
    if !counter.is_dying {
        return (*counter, DyingOutcome::NotDying);
    }

    let mut new_counter = *counter;
    new_counter.current_rounds = (new_counter.current_rounds + 1).min(new_counter.max_rounds);

    let outcome = if new_counter.current_rounds >= new_counter.max_rounds {
        DyingOutcome::Dead
    } else {
        DyingOutcome::StillDying
    };
    (new_counter, outcome)
}

/// Stop dying (the character was stabilized or healed above zero Vitality)
pub fn end_dying() -> DyingCounter {
    DyingCounter::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ensure_constants_initialized;

    fn setup() {
        ensure_constants_initialized();
    }

    #[test]
    fn test_state_is_vitality_driven_only() {
        setup();
        // Guard fully depleted, Vitality full: still normal.
        assert_eq!(determine_combat_state(0, 15, 5, 5), CombatState::Normal);
        assert_eq!(determine_combat_state(15, 15, 5, 5), CombatState::Normal);
    }

    #[test]
    fn test_missing_vitality_is_a_direct_wound() {
        setup();
        assert_eq!(
            determine_combat_state(10, 15, 3, 5),
            CombatState::DirectWound
        );
    }

    #[test]
    fn test_zero_vitality_is_a_critical_wound() {
        setup();
        assert_eq!(
            determine_combat_state(10, 15, 0, 5),
            CombatState::CriticalWound
        );
        // Degenerate pool: zero max, zero current.
        assert_eq!(
            determine_combat_state(10, 15, 0, 0),
            CombatState::CriticalWound
        );
    }

    #[test]
    fn test_begin_dying_extends_base_rounds() {
        setup();
        let counter = begin_dying(2);
        assert!(counter.is_dying);
        assert_eq!(counter.current_rounds, 0);
        assert_eq!(counter.max_rounds, 5);

        // Negative attribute never shortens the base.
        assert_eq!(begin_dying(-3).max_rounds, 3);
    }

    #[test]
    fn test_tick_dying_reaches_dead_at_max() {
        setup();
        let mut counter = begin_dying(0);
        let mut outcome = DyingOutcome::StillDying;

        for _ in 0..counter.max_rounds {
            let (next, next_outcome) = tick_dying(&counter);
            counter = next;
            outcome = next_outcome;
        }

        assert_eq!(outcome, DyingOutcome::Dead);
        assert_eq!(counter.current_rounds, counter.max_rounds);
    }

    #[test]
    fn test_tick_ignores_non_dying_counter() {
        setup();
        let counter = DyingCounter::default();
        let (after, outcome) = tick_dying(&counter);
        assert_eq!(outcome, DyingOutcome::NotDying);
        assert_eq!(after, counter);
    }

    #[test]
    fn test_end_dying_resets() {
        setup();
        let counter = begin_dying(4);
        let (ticked, _) = tick_dying(&counter);
        assert!(ticked.is_dying);

        let ended = end_dying();
        assert!(!ended.is_dying);
        assert_eq!(ended.current_rounds, 0);
    }
}
