//! Parameter descriptors and typed values

use std::fmt;

/// Type of an animation parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParameterType {
    Bool,
    Int,
    Float,
    Trigger,
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterType::Bool => "bool",
            ParameterType::Int => "int",
            ParameterType::Float => "float",
            ParameterType::Trigger => "trigger",
        };
        f.write_str(name)
    }
}

/// A parameter as exposed by a controller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterDescriptor {
    pub name: String,
    pub parameter_type: ParameterType,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, parameter_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }

    /// Exact, case-sensitive match on both name and type.
    #[inline]
    pub fn matches(&self, name: &str, parameter_type: ParameterType) -> bool {
        self.parameter_type == parameter_type && self.name == name
    }
}

/// Value written to a parameter. The variant decides which setter is used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParameterValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    /// Parameterless fire signal.
    Trigger,
}

impl ParameterValue {
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            ParameterValue::Bool(_) => ParameterType::Bool,
            ParameterValue::Int(_) => ParameterType::Int,
            ParameterValue::Float(_) => ParameterType::Float,
            ParameterValue::Trigger => ParameterType::Trigger,
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Bool(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Int(value)
    }
}

impl From<f32> for ParameterValue {
    fn from(value: f32) -> Self {
        ParameterValue::Float(value)
    }
}
