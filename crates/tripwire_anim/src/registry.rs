//! Parameter lookup and key registration

use crate::{derive_key, AnimatorController, ParameterKey, ParameterType};
use rustc_hash::FxHashSet;

/// Keys confirmed present on one controller.
///
/// Owned by the caller, usually one set per controller instance. A key only
/// enters the set through [`register_parameter`], after the name was found
/// with the requested type. The set is never revalidated: if the controller
/// changes its parameters later, clearing and re-registering is up to the
/// owner.
#[derive(Debug, Default, Clone)]
pub struct ValidKeySet {
    keys: FxHashSet<ParameterKey>,
}

impl ValidKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, key: ParameterKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = ParameterKey> + '_ {
        self.keys.iter().copied()
    }

    fn insert(&mut self, key: ParameterKey) -> bool {
        self.keys.insert(key)
    }
}

/// True if `controller` exposes a parameter with exactly this name and type.
///
/// Scans the descriptor list on every call. Callers on a hot path should
/// register the parameter once and dispatch by key instead.
pub fn has_parameter<C>(controller: &C, name: &str, parameter_type: ParameterType) -> bool
where
    C: AnimatorController + ?Sized,
{
    if name.is_empty() {
        return false;
    }

    controller
        .parameters()
        .iter()
        .any(|descriptor| descriptor.matches(name, parameter_type))
}

/// Derive the key for `name` and add it to `keys` if the parameter exists.
///
/// The derived key is returned whether or not validation succeeded, so a
/// caller may keep it and treat the miss as a warning. Only an empty name
/// yields `None`. `keys` grows only on success.
pub fn register_parameter<C>(
    controller: &C,
    name: &str,
    parameter_type: ParameterType,
    keys: &mut ValidKeySet,
) -> Option<ParameterKey>
where
    C: AnimatorController + ?Sized,
{
    if name.is_empty() {
        return None;
    }

    let key = derive_key(name);
    if has_parameter(controller, name, parameter_type) {
        keys.insert(key);
    } else {
        tracing::debug!(name, %parameter_type, %key, "parameter not registered: not found on controller");
    }
    Some(key)
}
