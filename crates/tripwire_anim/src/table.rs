//! In-memory parameter storage
//!
//! A self-contained [`AnimatorController`] for headless runs and tests:
//! a descriptor list plus one typed slot per parameter. Triggers stay set
//! until consumed.

use crate::{derive_key, AnimatorController, ParameterDescriptor, ParameterKey, ParameterType, ParameterValue};
use rustc_hash::FxHashMap;
use std::fmt;

#[derive(Copy, Clone, Debug)]
enum Slot {
    Bool(bool),
    Int(i32),
    Float(f32),
    Trigger(bool),
}

impl Slot {
    fn empty(parameter_type: ParameterType) -> Self {
        match parameter_type {
            ParameterType::Bool => Slot::Bool(false),
            ParameterType::Int => Slot::Int(0),
            ParameterType::Float => Slot::Float(0.0),
            ParameterType::Trigger => Slot::Trigger(false),
        }
    }

    fn parameter_type(&self) -> ParameterType {
        match self {
            Slot::Bool(_) => ParameterType::Bool,
            Slot::Int(_) => ParameterType::Int,
            Slot::Float(_) => ParameterType::Float,
            Slot::Trigger(_) => ParameterType::Trigger,
        }
    }
}

#[derive(Debug, Default)]
pub struct ParameterTable {
    descriptors: Vec<ParameterDescriptor>,
    slots: FxHashMap<ParameterKey, Slot>,
    write_count: usize,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: impl Into<String>, parameter_type: ParameterType) -> Self {
        self.add_parameter(name, parameter_type);
        self
    }

    /// Add a parameter. Returns false if the name is already taken.
    pub fn add_parameter(&mut self, name: impl Into<String>, parameter_type: ParameterType) -> bool {
        let name = name.into();
        let key = derive_key(&name);
        if self.slots.contains_key(&key) {
            tracing::warn!(name = %name, "parameter already exists");
            return false;
        }
        self.slots.insert(key, Slot::empty(parameter_type));
        self.descriptors.push(ParameterDescriptor::new(name, parameter_type));
        true
    }

    pub fn remove_parameter(&mut self, name: &str) -> bool {
        if self.slots.remove(&derive_key(name)).is_none() {
            return false;
        }
        self.descriptors.retain(|descriptor| descriptor.name != name);
        true
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.slots.get(&derive_key(name)) {
            Some(Slot::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.slots.get(&derive_key(name)) {
            Some(Slot::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        match self.slots.get(&derive_key(name)) {
            Some(Slot::Float(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn is_trigger_set(&self, name: &str) -> bool {
        matches!(self.slots.get(&derive_key(name)), Some(Slot::Trigger(true)))
    }

    /// Clear a set trigger, returning whether it was set.
    pub fn consume_trigger(&mut self, name: &str) -> bool {
        match self.slots.get_mut(&derive_key(name)) {
            Some(Slot::Trigger(set)) => std::mem::take(set),
            _ => false,
        }
    }

    pub fn reset_triggers(&mut self) {
        for slot in self.slots.values_mut() {
            if let Slot::Trigger(set) = slot {
                *set = false;
            }
        }
    }

    /// Number of writes that reached a slot.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    fn write(&mut self, key: ParameterKey, value: ParameterValue, parameter: &dyn fmt::Display) {
        let Some(slot) = self.slots.get_mut(&key) else {
            tracing::warn!(parameter = %parameter, "parameter does not exist");
            return;
        };

        match (slot, value) {
            (Slot::Bool(current), ParameterValue::Bool(new)) => *current = new,
            (Slot::Int(current), ParameterValue::Int(new)) => *current = new,
            (Slot::Float(current), ParameterValue::Float(new)) => *current = new,
            (Slot::Trigger(set), ParameterValue::Trigger) => *set = true,
            (slot, value) => {
                tracing::warn!(
                    parameter = %parameter,
                    expected = %slot.parameter_type(),
                    actual = %value.parameter_type(),
                    "parameter type mismatch"
                );
                return;
            }
        }
        self.write_count += 1;
    }
}

impl AnimatorController for ParameterTable {
    fn parameters(&self) -> &[ParameterDescriptor] {
        &self.descriptors
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.write(derive_key(name), ParameterValue::Bool(value), &name);
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.write(derive_key(name), ParameterValue::Int(value), &name);
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.write(derive_key(name), ParameterValue::Float(value), &name);
    }

    fn set_trigger(&mut self, name: &str) {
        self.write(derive_key(name), ParameterValue::Trigger, &name);
    }

    fn set_bool_by_key(&mut self, key: ParameterKey, value: bool) {
        self.write(key, ParameterValue::Bool(value), &key);
    }

    fn set_int_by_key(&mut self, key: ParameterKey, value: i32) {
        self.write(key, ParameterValue::Int(value), &key);
    }

    fn set_float_by_key(&mut self, key: ParameterKey, value: f32) {
        self.write(key, ParameterValue::Float(value), &key);
    }

    fn set_trigger_by_key(&mut self, key: ParameterKey) {
        self.write(key, ParameterValue::Trigger, &key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ParameterTable {
        ParameterTable::new()
            .with_parameter("Speed", ParameterType::Float)
            .with_parameter("Jump", ParameterType::Trigger)
            .with_parameter("IsGrounded", ParameterType::Bool)
    }

    #[test]
    fn named_and_keyed_writes_reach_the_same_slot() {
        let mut table = table();
        table.set_float("Speed", 1.0);
        assert_eq!(table.get_float("Speed"), Some(1.0));

        table.set_float_by_key(derive_key("Speed"), 2.5);
        assert_eq!(table.get_float("Speed"), Some(2.5));
        assert_eq!(table.write_count(), 2);
    }

    #[test]
    fn unknown_and_mistyped_writes_are_ignored() {
        let mut table = table();
        table.set_bool("Missing", true);
        table.set_int("Speed", 3);
        table.set_trigger_by_key(derive_key("IsGrounded"));

        assert_eq!(table.write_count(), 0);
        assert_eq!(table.get_float("Speed"), Some(0.0));
        assert_eq!(table.get_bool("IsGrounded"), Some(false));
    }

    #[test]
    fn triggers_latch_until_consumed() {
        let mut table = table();
        table.set_trigger("Jump");
        assert!(table.is_trigger_set("Jump"));
        assert!(table.consume_trigger("Jump"));
        assert!(!table.consume_trigger("Jump"));

        table.set_trigger("Jump");
        table.reset_triggers();
        assert!(!table.is_trigger_set("Jump"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut table = table();
        assert!(!table.add_parameter("Speed", ParameterType::Int));
        assert_eq!(table.parameters().len(), 3);
        assert_eq!(table.get_float("Speed"), Some(0.0));
    }

    #[test]
    fn removed_parameters_disappear_from_descriptors() {
        let mut table = table();
        assert!(table.remove_parameter("Jump"));
        assert!(!table.remove_parameter("Jump"));
        assert!(table.parameters().iter().all(|d| d.name != "Jump"));
    }
}
