//! Pool arithmetic - damage, healing and spending over Guard, Vitality and
//! Power Points
//!
//! All functions are pure and total. Out-of-range results are resolved by
//! clamping to the documented bound, never by an error. Each mutation-shaped
//! operation takes the pools by reference and returns fresh values, in some
//! cases together with a breakdown record of what happened.

use crate::config::constants;
use serde::{Deserialize, Serialize};
use sheet_core::{GuardPoints, PowerPoints, SpellPoints, VitalityPoints};

/// How one application of damage was absorbed, layer by layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Portion soaked by the temporary Guard layer
    pub absorbed_by_temporary: i32,
    /// Portion soaked by the current Guard pool
    pub absorbed_by_guard: i32,
    /// Portion that overflowed into Vitality
    pub overflow_to_vitality: i32,
    /// Whether Guard (current and temporary) ended at zero
    pub guard_emptied: bool,
    /// Whether Vitality ended at zero
    pub vitality_emptied: bool,
}

impl DamageBreakdown {
    /// Total damage actually absorbed across all layers
    pub fn total_absorbed(&self) -> i32 {
        self.absorbed_by_temporary + self.absorbed_by_guard + self.overflow_to_vitality
    }
}

/// Outcome of converting recovery units into Vitality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalityRecovery {
    /// Vitality points restored
    pub healed: i32,
    /// Recovery units left over, carried by the host for later
    pub remaining_recovery: i32,
}

/// Apply damage across the two-tier defensive pool
///
/// Absorption order: the temporary Guard layer first, then the Guard pool,
/// then any remainder overflows into Vitality. Every layer floors at zero and
/// no `max` field is touched. `amount <= 0` is a no-op.
pub fn apply_damage(
    guard: &GuardPoints,
    vitality: &VitalityPoints,
    amount: i32,
) -> (GuardPoints, VitalityPoints, DamageBreakdown) {
    let mut new_guard = guard.clone();
    let mut new_vitality = *vitality;
    let mut breakdown = DamageBreakdown::default();

    if amount <= 0 {
        return (new_guard, new_vitality, breakdown);
    }

    let from_temporary = amount.min(new_guard.temporary.max(0));
    new_guard.temporary -= from_temporary;
    let mut remaining = amount - from_temporary;

    let from_guard = remaining.min(new_guard.current.max(0));
    new_guard.current -= from_guard;
    remaining -= from_guard;

    let from_vitality = remaining.min(new_vitality.current.max(0));
    new_vitality.current -= from_vitality;

    breakdown.absorbed_by_temporary = from_temporary;
    breakdown.absorbed_by_guard = from_guard;
    breakdown.overflow_to_vitality = from_vitality;
    breakdown.guard_emptied = new_guard.is_empty();
    breakdown.vitality_emptied = new_vitality.current <= 0;

    (new_guard, new_vitality, breakdown)
}

/// Heal the Guard pool, capped at its effective maximum
///
/// Never raises the temporary layer. `amount <= 0` is a no-op.
pub fn heal_guard(guard: &GuardPoints, amount: i32) -> GuardPoints {
    let mut new_guard = guard.clone();
    if amount <= 0 {
        return new_guard;
    }

    new_guard.current = (new_guard.current + amount).min(new_guard.effective_max());
    new_guard
}

/// Convert recovery units into Vitality points
///
/// Vitality is expensive to restore: `pv_recovery_cost` recovery units buy
/// one point. Units short of a full point carry over unspent in
/// `remaining_recovery` - partial recovery has no immediate effect.
pub fn heal_vitality(
    vitality: &VitalityPoints,
    recovery_points: i32,
) -> (VitalityPoints, VitalityRecovery) {
    let mut new_vitality = *vitality;
    if recovery_points <= 0 {
        let recovery = VitalityRecovery {
            healed: 0,
            remaining_recovery: recovery_points.max(0),
        };
        return (new_vitality, recovery);
    }

    let cost = constants().recovery.pv_recovery_cost.max(1);
    let healed = new_vitality.missing().min(recovery_points / cost);
    new_vitality.current += healed;

    let recovery = VitalityRecovery {
        healed,
        remaining_recovery: recovery_points - healed * cost,
    };
    (new_vitality, recovery)
}

/// Effective Guard maximum given the current Vitality
///
/// Guard caps out at half strength while Vitality sits at zero.
pub fn effective_guard_max(guard_max: i32, pv_current: i32) -> i32 {
    if pv_current > 0 {
        guard_max
    } else {
        guard_max / constants().derivation.wounded_guard_divisor.max(1)
    }
}

/// Reconcile the stored Guard current with the effective-max rule at the
/// moment Vitality crosses zero
///
/// Crossing down (PV > 0 to PV == 0) clamps Guard to the halved maximum;
/// crossing up raises it back to at least that value. Any call without a
/// crossing returns the value unchanged.
pub fn adjust_guard_on_vitality_crossing(
    ga_current: i32,
    ga_max: i32,
    pv_was_zero: bool,
    pv_is_zero: bool,
) -> i32 {
    let halved = ga_max / constants().derivation.wounded_guard_divisor.max(1);
    match (pv_was_zero, pv_is_zero) {
        (false, true) => ga_current.min(halved),
        (true, false) => ga_current.max(halved),
        _ => ga_current,
    }
}

/// Spend from or recover the Power Point pool
///
/// Spending (negative delta) consumes the temporary layer first, then the
/// current pool, each floored at zero. Recovering (positive delta) adds to
/// the current pool only, capped at the maximum; the temporary layer is
/// never restored here.
pub fn apply_power_delta(power: &PowerPoints, delta: i32) -> PowerPoints {
    let mut new_power = *power;
    if delta == 0 {
        return new_power;
    }

    if delta < 0 {
        let mut to_spend = -delta;
        let from_temporary = to_spend.min(new_power.temporary.max(0));
        new_power.temporary -= from_temporary;
        to_spend -= from_temporary;
        new_power.current = (new_power.current - to_spend).max(0);
    } else {
        new_power.current = (new_power.current + delta).min(new_power.max);
    }

    new_power
}

/// Spend from or recover the Spell Point pool
///
/// Same clamp discipline as Power Points without a temporary layer.
pub fn apply_spell_delta(spell: &SpellPoints, delta: i32) -> SpellPoints {
    let mut new_spell = *spell;
    if delta == 0 {
        return new_spell;
    }

    if delta < 0 {
        new_spell.current = (new_spell.current + delta).max(0);
    } else {
        new_spell.current = (new_spell.current + delta).min(new_spell.max);
    }

    new_spell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ensure_constants_initialized;
    use proptest::prelude::*;

    fn setup() {
        ensure_constants_initialized();
    }

    fn guard(current: i32, max: i32, temporary: i32) -> GuardPoints {
        GuardPoints {
            current,
            max,
            temporary,
            max_modifiers: Vec::new(),
        }
    }

    #[test]
    fn test_damage_absorbed_by_temporary_only() {
        setup();
        let (new_guard, new_vitality, breakdown) =
            apply_damage(&guard(10, 10, 5), &VitalityPoints::new(4), 3);

        assert_eq!(new_guard.temporary, 2);
        assert_eq!(new_guard.current, 10);
        assert_eq!(new_vitality.current, 4);
        assert_eq!(breakdown.absorbed_by_temporary, 3);
        assert_eq!(breakdown.overflow_to_vitality, 0);
    }

    #[test]
    fn test_damage_spills_from_temporary_to_guard() {
        setup();
        let (new_guard, new_vitality, breakdown) =
            apply_damage(&guard(10, 10, 3), &VitalityPoints::new(4), 8);

        assert_eq!(new_guard.temporary, 0);
        assert_eq!(new_guard.current, 5);
        assert_eq!(new_vitality.current, 4);
        assert_eq!(breakdown.absorbed_by_temporary, 3);
        assert_eq!(breakdown.absorbed_by_guard, 5);
        assert!(!breakdown.guard_emptied);
    }

    #[test]
    fn test_damage_overflows_to_vitality() {
        setup();
        let (new_guard, new_vitality, breakdown) =
            apply_damage(&guard(4, 10, 2), &VitalityPoints::new(4), 9);

        assert_eq!(new_guard.temporary, 0);
        assert_eq!(new_guard.current, 0);
        assert_eq!(new_vitality.current, 1);
        assert_eq!(breakdown.overflow_to_vitality, 3);
        assert!(breakdown.guard_emptied);
        assert!(!breakdown.vitality_emptied);
    }

    #[test]
    fn test_overkill_floors_all_pools_at_zero() {
        setup();
        let (new_guard, new_vitality, breakdown) =
            apply_damage(&guard(4, 10, 2), &VitalityPoints::new(4), 100);

        assert_eq!(new_guard.current, 0);
        assert_eq!(new_guard.temporary, 0);
        assert_eq!(new_vitality.current, 0);
        assert!(breakdown.vitality_emptied);
        // Max fields are untouched
        assert_eq!(new_guard.max, 10);
        assert_eq!(new_vitality.max, 4);
    }

    #[test]
    fn test_non_positive_damage_is_a_no_op() {
        setup();
        let before_guard = guard(4, 10, 2);
        let before_vitality = VitalityPoints::new(4);

        for amount in [0, -5] {
            let (new_guard, new_vitality, breakdown) =
                apply_damage(&before_guard, &before_vitality, amount);
            assert_eq!(new_guard, before_guard);
            assert_eq!(new_vitality, before_vitality);
            assert_eq!(breakdown.total_absorbed(), 0);
        }
    }

    #[test]
    fn test_heal_guard_caps_at_effective_max() {
        setup();
        let healed = heal_guard(&guard(3, 10, 0), 20);
        assert_eq!(healed.current, 10);

        let mut modified = guard(3, 10, 0);
        modified
            .max_modifiers
            .push(sheet_core::GuardMaxModifier { value: 2 });
        let healed = heal_guard(&modified, 20);
        assert_eq!(healed.current, 12);
    }

    #[test]
    fn test_heal_guard_never_raises_temporary() {
        setup();
        let healed = heal_guard(&guard(3, 10, 1), 4);
        assert_eq!(healed.current, 7);
        assert_eq!(healed.temporary, 1);
    }

    #[test]
    fn test_vitality_recovery_conversion() {
        setup();
        // 12 recovery on a 3/5 pool: 2 points healed, 2 units left over.
        let (new_vitality, recovery) =
            heal_vitality(&VitalityPoints { current: 3, max: 5 }, 12);

        assert_eq!(recovery.healed, 2);
        assert_eq!(new_vitality.current, 5);
        assert_eq!(recovery.remaining_recovery, 2);
    }

    #[test]
    fn test_vitality_recovery_limited_by_missing() {
        setup();
        // Only one point missing; the other full units stay unspent.
        let (new_vitality, recovery) =
            heal_vitality(&VitalityPoints { current: 4, max: 5 }, 17);

        assert_eq!(recovery.healed, 1);
        assert_eq!(new_vitality.current, 5);
        assert_eq!(recovery.remaining_recovery, 12);
    }

    #[test]
    fn test_vitality_recovery_below_one_point() {
        setup();
        let (new_vitality, recovery) =
            heal_vitality(&VitalityPoints { current: 1, max: 5 }, 4);

        assert_eq!(recovery.healed, 0);
        assert_eq!(new_vitality.current, 1);
        assert_eq!(recovery.remaining_recovery, 4);
    }

    #[test]
    fn test_effective_guard_max_halves_at_zero_vitality() {
        setup();
        assert_eq!(effective_guard_max(15, 1), 15);
        assert_eq!(effective_guard_max(15, 0), 7);
        assert_eq!(effective_guard_max(14, 0), 7);
    }

    #[test]
    fn test_guard_adjustment_on_crossing_down() {
        setup();
        // PV just hit zero: clamp down to the halved max.
        assert_eq!(adjust_guard_on_vitality_crossing(12, 15, false, true), 7);
        // Already below the halved max: untouched.
        assert_eq!(adjust_guard_on_vitality_crossing(3, 15, false, true), 3);
    }

    #[test]
    fn test_guard_adjustment_on_crossing_up() {
        setup();
        assert_eq!(adjust_guard_on_vitality_crossing(2, 15, true, false), 7);
        assert_eq!(adjust_guard_on_vitality_crossing(10, 15, true, false), 10);
    }

    #[test]
    fn test_guard_adjustment_without_crossing() {
        setup();
        assert_eq!(adjust_guard_on_vitality_crossing(12, 15, false, false), 12);
        assert_eq!(adjust_guard_on_vitality_crossing(2, 15, true, true), 2);
    }

    #[test]
    fn test_power_spend_consumes_temporary_first() {
        setup();
        let power = PowerPoints {
            current: 5,
            max: 10,
            temporary: 3,
        };
        let spent = apply_power_delta(&power, -4);

        assert_eq!(spent.temporary, 0);
        assert_eq!(spent.current, 4);
    }

    #[test]
    fn test_power_spend_floors_at_zero() {
        setup();
        let power = PowerPoints {
            current: 2,
            max: 10,
            temporary: 1,
        };
        let spent = apply_power_delta(&power, -50);

        assert_eq!(spent.temporary, 0);
        assert_eq!(spent.current, 0);
    }

    #[test]
    fn test_power_recovery_ignores_temporary() {
        setup();
        let power = PowerPoints {
            current: 6,
            max: 10,
            temporary: 2,
        };
        let recovered = apply_power_delta(&power, 9);

        assert_eq!(recovered.current, 10);
        assert_eq!(recovered.temporary, 2);
    }

    #[test]
    fn test_spell_delta_clamps_both_ways() {
        setup();
        let spell = SpellPoints { current: 4, max: 6 };
        assert_eq!(apply_spell_delta(&spell, -10).current, 0);
        assert_eq!(apply_spell_delta(&spell, 10).current, 6);
        assert_eq!(apply_spell_delta(&spell, 0), spell);
    }

    proptest! {
        #[test]
        fn prop_damage_is_conserved_across_layers(
            temporary in 0i32..50,
            current in 0i32..50,
            vit_current in 0i32..50,
            amount in 1i32..200,
        ) {
            setup();
            let before_guard = guard(current, 50, temporary);
            let before_vitality = VitalityPoints { current: vit_current, max: 50 };

            let (new_guard, new_vitality, breakdown) =
                apply_damage(&before_guard, &before_vitality, amount);

            // Each layer absorbs at most what it held, in order.
            prop_assert_eq!(
                breakdown.absorbed_by_temporary,
                amount.min(temporary)
            );
            prop_assert_eq!(
                breakdown.total_absorbed(),
                amount.min(temporary + current + vit_current)
            );
            // Nothing goes negative, no max moves.
            prop_assert!(new_guard.temporary >= 0);
            prop_assert!(new_guard.current >= 0);
            prop_assert!(new_vitality.current >= 0);
            prop_assert_eq!(new_guard.max, before_guard.max);
            prop_assert_eq!(new_vitality.max, before_vitality.max);
        }

        #[test]
        fn prop_heal_guard_never_exceeds_effective_max(
            current in 0i32..30,
            max in 0i32..30,
            amount in 0i32..100,
        ) {
            setup();
            let before = guard(current.min(max), max, 0);
            let healed = heal_guard(&before, amount);
            prop_assert!(healed.current <= healed.effective_max());
            prop_assert!(healed.current >= before.current);
        }
    }
}
