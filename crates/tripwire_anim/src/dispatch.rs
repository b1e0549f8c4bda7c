//! Typed parameter writes
//!
//! Three tiers, trading setup cost against per-call cost:
//!
//! | Tier      | Entry point                        | Check per call            |
//! |-----------|------------------------------------|---------------------------|
//! | unchecked | [`set_value`] / [`fire_trigger`]   | none                      |
//! | by key    | [`safe_set_value`]                 | one set lookup            |
//! | by name   | [`try_set_value`]                  | descriptor scan           |
//!
//! The checked tiers report a miss only through their `bool` return.

use crate::controller::{write_keyed, write_named};
use crate::{has_parameter, AnimatorController, ParameterKey, ParameterValue, ValidKeySet};

/// Forward the write without any validation.
pub fn set_value<C>(controller: &mut C, name: &str, value: impl Into<ParameterValue>)
where
    C: AnimatorController + ?Sized,
{
    write_named(controller, name, value.into());
}

pub fn fire_trigger<C>(controller: &mut C, name: &str)
where
    C: AnimatorController + ?Sized,
{
    write_named(controller, name, ParameterValue::Trigger);
}

/// Write through `key` if it was registered in `valid_keys`.
pub fn safe_set_value<C>(
    controller: &mut C,
    value: impl Into<ParameterValue>,
    key: ParameterKey,
    valid_keys: &ValidKeySet,
) -> bool
where
    C: AnimatorController + ?Sized,
{
    if !valid_keys.contains(key) {
        return false;
    }
    write_keyed(controller, key, value.into());
    true
}

pub fn safe_fire_trigger<C>(controller: &mut C, key: ParameterKey, valid_keys: &ValidKeySet) -> bool
where
    C: AnimatorController + ?Sized,
{
    safe_set_value(controller, ParameterValue::Trigger, key, valid_keys)
}

/// Write by name after checking the controller exposes `name` with the
/// value's type.
pub fn try_set_value<C>(controller: &mut C, name: &str, value: impl Into<ParameterValue>) -> bool
where
    C: AnimatorController + ?Sized,
{
    let value = value.into();
    if !has_parameter(&*controller, name, value.parameter_type()) {
        return false;
    }
    write_named(controller, name, value);
    true
}

pub fn try_fire_trigger<C>(controller: &mut C, name: &str) -> bool
where
    C: AnimatorController + ?Sized,
{
    try_set_value(controller, name, ParameterValue::Trigger)
}
