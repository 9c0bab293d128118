//! Step-die tracking - degrade, restore and consume named resources
//!
//! A resource die walks down a fixed ordinal scale each time it is used
//! unluckily, until it is depleted. The host supplies roll values from its
//! own random source; `use_resource_with_rng` is a convenience for hosts
//! that hand the engine an RNG instead.

use rand::Rng;
use serde::{Deserialize, Serialize};
use sheet_core::{DieSize, ResourceDie, ResourceDieState};

/// The fixed die scale, ascending
pub const SCALE: [DieSize; 9] = [
    DieSize::D2,
    DieSize::D3,
    DieSize::D4,
    DieSize::D6,
    DieSize::D8,
    DieSize::D10,
    DieSize::D12,
    DieSize::D20,
    DieSize::D100,
];

/// Position of a die on the scale
///
/// Total - `DieSize` is a closed enum, so every value has a position.
pub fn scale_index(die: DieSize) -> usize {
    match die {
        DieSize::D2 => 0,
        DieSize::D3 => 1,
        DieSize::D4 => 2,
        DieSize::D6 => 3,
        DieSize::D8 => 4,
        DieSize::D10 => 5,
        DieSize::D12 => 6,
        DieSize::D20 => 7,
        DieSize::D100 => 8,
    }
}

/// Step one position down the scale
///
/// Returns `None` when the die is already at or below the resource floor -
/// the resource depletes instead of stepping.
pub fn step_down(current: DieSize, min_die: DieSize) -> Option<DieSize> {
    let index = scale_index(current);
    if index <= scale_index(min_die) {
        None
    } else {
        Some(SCALE[index - 1])
    }
}

/// Step one position up the scale, clamped to the resource ceiling
///
/// Returns `max_die` itself when the die is already at or above it.
pub fn step_up(current: DieSize, max_die: DieSize) -> DieSize {
    let index = scale_index(current);
    if index >= scale_index(max_die) {
        max_die
    } else {
        SCALE[index + 1]
    }
}

/// What one use of a resource did to its die
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUseResult {
    pub resource_id: String,
    pub resource_name: String,
    /// Die that was (or would have been) rolled
    pub die_rolled: DieSize,
    /// The roll value the host supplied
    pub value: u32,
    /// Whether this use attempted a step down (any roll of 2 or more)
    pub is_stepped_down: bool,
    /// Whether the resource ended this use depleted
    pub is_depleted: bool,
    /// Die the resource sits at after this use, `None` when depleted
    pub new_die: Option<DieSize>,
}

/// Process one use of a step-die resource given the rolled value
///
/// - An already-depleted resource reports a depleted result regardless of
///   the roll; its floor die is echoed as `die_rolled`.
/// - A roll of 1 depletes the resource unconditionally, with
///   `is_stepped_down` false.
/// - Any roll of 2 or more attempts a step down; stepping down from the
///   floor die is itself a depletion event, reported with `is_stepped_down`
///   true. The two depletion paths share an outcome but stay observable
///   through that flag.
/// - The magnitude of the roll past the 1-vs-2+ distinction has no effect.
pub fn process_resource_use(resource: &ResourceDie, roll_value: u32) -> ResourceUseResult {
    let current = match resource.current_die {
        Some(die) if resource.state == ResourceDieState::Active => die,
        _ => {
            return ResourceUseResult {
                resource_id: resource.id.clone(),
                resource_name: resource.name.clone(),
                die_rolled: resource.min_die,
                value: roll_value,
                is_stepped_down: false,
                is_depleted: true,
                new_die: None,
            };
        }
    };

    if roll_value == 1 {
        return ResourceUseResult {
            resource_id: resource.id.clone(),
            resource_name: resource.name.clone(),
            die_rolled: current,
            value: roll_value,
            is_stepped_down: false,
            is_depleted: true,
            new_die: None,
        };
    }

    let new_die = step_down(current, resource.min_die);
    ResourceUseResult {
        resource_id: resource.id.clone(),
        resource_name: resource.name.clone(),
        die_rolled: current,
        value: roll_value,
        is_stepped_down: true,
        is_depleted: new_die.is_none(),
        new_die,
    }
}

/// Roll the resource's current die with the supplied RNG and process the use
///
/// A depleted resource is not rolled; the depleted result is returned with a
/// roll value of zero.
pub fn use_resource_with_rng(resource: &ResourceDie, rng: &mut impl Rng) -> ResourceUseResult {
    match resource.current_die {
        Some(die) if resource.state == ResourceDieState::Active => {
            let roll = rng.gen_range(1..=die.sides());
            process_resource_use(resource, roll)
        }
        _ => process_resource_use(resource, 0),
    }
}

/// Write a use result back onto a resource record
pub fn apply_use_result(resource: &ResourceDie, result: &ResourceUseResult) -> ResourceDie {
    let mut new_resource = resource.clone();
    new_resource.current_die = result.new_die;
    new_resource.state = if result.new_die.is_some() {
        ResourceDieState::Active
    } else {
        ResourceDieState::Depleted
    };
    new_resource
}

/// Fully restore a resource to its maximum die
pub fn restore_resource(resource: &ResourceDie) -> ResourceDie {
    let mut new_resource = resource.clone();
    new_resource.current_die = Some(new_resource.max_die);
    new_resource.state = ResourceDieState::Active;
    new_resource
}

/// Restore a resource by one step
///
/// A depleted resource comes back at its floor die; an active one steps up
/// toward its ceiling.
pub fn step_up_resource(resource: &ResourceDie) -> ResourceDie {
    let mut new_resource = resource.clone();
    new_resource.current_die = match new_resource.current_die {
        Some(die) => Some(step_up(die, new_resource.max_die)),
        None => Some(new_resource.min_die),
    };
    new_resource.state = ResourceDieState::Active;
    new_resource
}
