//! Animation controller interface
//!
//! The state machine and parameter storage live behind this trait. This
//! crate only enumerates descriptors and forwards typed writes.

use crate::{ParameterDescriptor, ParameterKey, ParameterValue};

/// A controller exposing named, typed parameters.
///
/// Key-addressed setters receive keys produced by [`crate::derive_key`].
/// How a controller reacts to an unknown name or key is up to the
/// controller.
pub trait AnimatorController {
    fn parameters(&self) -> &[ParameterDescriptor];

    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_trigger(&mut self, name: &str);

    fn set_bool_by_key(&mut self, key: ParameterKey, value: bool);
    fn set_int_by_key(&mut self, key: ParameterKey, value: i32);
    fn set_float_by_key(&mut self, key: ParameterKey, value: f32);
    fn set_trigger_by_key(&mut self, key: ParameterKey);
}

/// Forward `value` to the named setter matching its variant.
pub(crate) fn write_named<C>(controller: &mut C, name: &str, value: ParameterValue)
where
    C: AnimatorController + ?Sized,
{
    match value {
        ParameterValue::Bool(v) => controller.set_bool(name, v),
        ParameterValue::Int(v) => controller.set_int(name, v),
        ParameterValue::Float(v) => controller.set_float(name, v),
        ParameterValue::Trigger => controller.set_trigger(name),
    }
}

/// Forward `value` to the key-addressed setter matching its variant.
pub(crate) fn write_keyed<C>(controller: &mut C, key: ParameterKey, value: ParameterValue)
where
    C: AnimatorController + ?Sized,
{
    match value {
        ParameterValue::Bool(v) => controller.set_bool_by_key(key, v),
        ParameterValue::Int(v) => controller.set_int_by_key(key, v),
        ParameterValue::Float(v) => controller.set_float_by_key(key, v),
        ParameterValue::Trigger => controller.set_trigger_by_key(key),
    }
}
