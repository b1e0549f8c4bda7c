//! Method-call sugar over the registry and dispatch functions.

use crate::{dispatch, registry, AnimatorController, ParameterKey, ParameterType, ParameterValue, ValidKeySet};

/// Lets any controller call the validation layer as methods:
/// `animator.try_set_value("Speed", 1.0)`.
pub trait AnimatorExt: AnimatorController {
    fn has_parameter(&self, name: &str, parameter_type: ParameterType) -> bool {
        registry::has_parameter(self, name, parameter_type)
    }

    fn register_parameter(
        &self,
        name: &str,
        parameter_type: ParameterType,
        keys: &mut ValidKeySet,
    ) -> Option<ParameterKey> {
        registry::register_parameter(self, name, parameter_type, keys)
    }

    fn set_value(&mut self, name: &str, value: impl Into<ParameterValue>) {
        dispatch::set_value(self, name, value);
    }

    fn fire_trigger(&mut self, name: &str) {
        dispatch::fire_trigger(self, name);
    }

    fn safe_set_value(
        &mut self,
        value: impl Into<ParameterValue>,
        key: ParameterKey,
        valid_keys: &ValidKeySet,
    ) -> bool {
        dispatch::safe_set_value(self, value, key, valid_keys)
    }

    fn safe_fire_trigger(&mut self, key: ParameterKey, valid_keys: &ValidKeySet) -> bool {
        dispatch::safe_fire_trigger(self, key, valid_keys)
    }

    fn try_set_value(&mut self, name: &str, value: impl Into<ParameterValue>) -> bool {
        dispatch::try_set_value(self, name, value)
    }

    fn try_fire_trigger(&mut self, name: &str) -> bool {
        dispatch::try_fire_trigger(self, name)
    }
}

impl<C: AnimatorController + ?Sized> AnimatorExt for C {}
