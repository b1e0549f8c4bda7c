//! Tripwire Animation Parameters
//!
//! Validation and dispatch in front of an animation controller:
//! - Name → key derivation
//! - Presence checks and caller-owned key sets
//! - Unchecked, key-checked and name-checked typed writes
//!
//! Misses on the checked tiers are reported only through a `bool` return.

pub mod controller;
pub mod dispatch;
pub mod ext;
pub mod key;
pub mod parameter;
pub mod registry;
pub mod table;

pub use controller::AnimatorController;
pub use dispatch::{
    fire_trigger, safe_fire_trigger, safe_set_value, set_value, try_fire_trigger, try_set_value,
};
pub use ext::AnimatorExt;
pub use key::{derive_key, ParameterKey};
pub use parameter::{ParameterDescriptor, ParameterType, ParameterValue};
pub use registry::{has_parameter, register_parameter, ValidKeySet};
pub use table::ParameterTable;
